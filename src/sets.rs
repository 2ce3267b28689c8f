//! Index sets of the league model.
//!
//! Derives the team, period, and valid-event domains from the raw identifier
//! sequences. Every other component of the model is indexed over these sets.

use std::collections::HashSet;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Opaque team identifier.
pub type TeamId = i64;

/// Opaque period identifier.
pub type PeriodId = i64;

/// A `(home, guest, period)` fixture slot.
///
/// Members of [`IndexSets::events`] always have `home != guest`. Variable
/// families declared over the full cross product also use this key for the
/// self-pair slots, which no constraint references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Event {
    /// Hosting team.
    pub home: TeamId,
    /// Visiting team.
    pub guest: TeamId,
    /// Period in which the fixture is played.
    pub period: PeriodId,
}

impl Event {
    pub fn new(home: TeamId, guest: TeamId, period: PeriodId) -> Self {
        Self {
            home,
            guest,
            period,
        }
    }

    /// Whether a team would play itself in this slot.
    #[inline]
    pub fn is_self_pair(&self) -> bool {
        self.home == self.guest
    }

    /// The same pairing with home and guest swapped.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self::new(self.guest, self.home, self.period)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.home, self.guest, self.period)
    }
}

/// The finite domains the model is indexed over.
///
/// # Examples
///
/// ```
/// use u_league::IndexSets;
///
/// let sets = IndexSets::generate(&[1, 2, 3], &[1, 2]).unwrap();
/// assert_eq!(sets.events.len(), 3 * 2 * 2);
/// assert!(sets.events.iter().all(|e| e.home != e.guest));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexSets {
    /// Teams, in input order. Serves as both the home and the guest set.
    pub teams: Vec<TeamId>,
    /// Periods, in input order.
    pub periods: Vec<PeriodId>,
    /// Valid events: teams × teams × periods without self-pairs, in
    /// lexicographic order of the input sequences.
    pub events: Vec<Event>,
}

impl IndexSets {
    /// Generates the index sets from ordered team and period sequences.
    ///
    /// # Errors
    /// Returns a [`ConfigurationError`] if either sequence is empty, contains
    /// duplicates, or fewer than two teams are supplied.
    pub fn generate(teams: &[TeamId], periods: &[PeriodId]) -> Result<Self, ConfigurationError> {
        if teams.is_empty() {
            return Err(ConfigurationError::EmptyTeams);
        }
        if periods.is_empty() {
            return Err(ConfigurationError::EmptyPeriods);
        }
        if let Some(dup) = first_duplicate(teams) {
            return Err(ConfigurationError::DuplicateTeam(dup));
        }
        if let Some(dup) = first_duplicate(periods) {
            return Err(ConfigurationError::DuplicatePeriod(dup));
        }
        if teams.len() < 2 {
            return Err(ConfigurationError::TooFewTeams { count: teams.len() });
        }

        Ok(Self {
            teams: teams.to_vec(),
            periods: periods.to_vec(),
            events: valid_events(teams, periods),
        })
    }

    /// Whether `event` belongs to the valid-event set.
    pub fn contains_event(&self, event: &Event) -> bool {
        !event.is_self_pair()
            && self.teams.contains(&event.home)
            && self.teams.contains(&event.guest)
            && self.periods.contains(&event.period)
    }

    /// The period `period - 1`, if it is one of the periods.
    ///
    /// Independent of the order the periods were supplied in.
    pub fn predecessor(&self, period: PeriodId) -> Option<PeriodId> {
        let prev = period.checked_sub(1)?;
        self.periods.contains(&prev).then_some(prev)
    }

    /// Every `(home, guest, period)` triple, self-pairs included.
    pub fn full_product(&self) -> Vec<Event> {
        let mut out = Vec::with_capacity(self.teams.len().pow(2) * self.periods.len());
        for &home in &self.teams {
            for &guest in &self.teams {
                for &period in &self.periods {
                    out.push(Event::new(home, guest, period));
                }
            }
        }
        out
    }
}

fn valid_events(teams: &[TeamId], periods: &[PeriodId]) -> Vec<Event> {
    let n = teams.len();
    let mut events = Vec::with_capacity(n * n.saturating_sub(1) * periods.len());
    for &home in teams {
        for &guest in teams {
            if home == guest {
                continue;
            }
            for &period in periods {
                events.push(Event::new(home, guest, period));
            }
        }
    }
    events
}

fn first_duplicate(ids: &[i64]) -> Option<i64> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.iter().copied().find(|id| !seen.insert(*id))
}
