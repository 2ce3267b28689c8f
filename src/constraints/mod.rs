//! Constraint families of the league model.
//!
//! Five families encode the double round-robin:
//!
//! - **`location_exclusivity`**: `match[h,g,p] + match[g,h,p] <= 1` per valid event
//! - **`pairwise_coverage`**: each ordered pair meets in exactly one period
//! - **`home_quota`**: each team hosts `|teams| - 1` fixtures
//! - **`away_quota`**: each team visits `|teams| - 1` fixtures
//! - **`movement_linking`**: `movement[h,g,p] >= match[h,o,p-1] + match[g,o',p] - 1`
//!
//! A rule that does not apply to an index tuple appends nothing for it.
//! Skipped instances are never represented as trivially true constraints.

mod movement;
mod rules;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ModelConfig;
use crate::expr::LinearConstraint;
use crate::sets::{Event, IndexSets, TeamId};

pub use movement::movement_linking;
pub use rules::{away_quota, home_quota, location_exclusivity, pairwise_coverage};

/// Index tuple a constraint instance was generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConstraintIndex {
    /// A valid event.
    Event(Event),
    /// An ordered `(home, guest)` pair.
    Pair { home: TeamId, guest: TeamId },
    /// A single team.
    Team(TeamId),
    /// A movement-linking combination.
    Movement {
        event: Event,
        home_opponent: TeamId,
        guest_opponent: TeamId,
    },
}

impl ConstraintIndex {
    /// The index values in order, for building instance names.
    pub fn values(&self) -> Vec<i64> {
        match *self {
            ConstraintIndex::Event(e) => vec![e.home, e.guest, e.period],
            ConstraintIndex::Pair { home, guest } => vec![home, guest],
            ConstraintIndex::Team(t) => vec![t],
            ConstraintIndex::Movement {
                event,
                home_opponent,
                guest_opponent,
            } => vec![
                event.home,
                event.guest,
                event.period,
                home_opponent,
                guest_opponent,
            ],
        }
    }
}

/// One generated constraint together with its index tuple.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConstraintInstance {
    pub index: ConstraintIndex,
    pub constraint: LinearConstraint,
}

impl ConstraintInstance {
    pub fn new(index: ConstraintIndex, constraint: LinearConstraint) -> Self {
        Self { index, constraint }
    }
}

/// A named, ordered collection of constraint instances.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConstraintFamily {
    pub name: String,
    pub doc: String,
    pub instances: Vec<ConstraintInstance>,
}

impl ConstraintFamily {
    pub fn new(name: impl Into<String>, doc: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: doc.into(),
            instances: Vec::new(),
        }
    }

    /// Appends an instance.
    pub fn push(&mut self, index: ConstraintIndex, constraint: LinearConstraint) {
        self.instances.push(ConstraintInstance::new(index, constraint));
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Finds the instance generated for `index`.
    pub fn get(&self, index: &ConstraintIndex) -> Option<&LinearConstraint> {
        self.instances
            .iter()
            .find(|i| &i.index == index)
            .map(|i| &i.constraint)
    }
}

/// Generates every constraint family from the index sets.
///
/// # Example
///
/// ```
/// use u_league::{ConstraintEngine, IndexSets, ModelConfig};
///
/// let sets = IndexSets::generate(&[1, 2], &[1, 2]).unwrap();
/// let config = ModelConfig::new(1);
/// let families = ConstraintEngine::new(&sets, &config).generate_all();
/// assert_eq!(families.len(), 5);
/// ```
pub struct ConstraintEngine<'a> {
    sets: &'a IndexSets,
    config: &'a ModelConfig,
}

impl<'a> ConstraintEngine<'a> {
    pub fn new(sets: &'a IndexSets, config: &'a ModelConfig) -> Self {
        Self { sets, config }
    }

    /// Generates all five families, in a fixed order.
    pub fn generate_all(&self) -> Vec<ConstraintFamily> {
        let families = vec![
            location_exclusivity(self.sets),
            pairwise_coverage(self.sets),
            home_quota(self.sets),
            away_quota(self.sets),
            movement_linking(self.sets, self.config),
        ];

        for family in &families {
            debug!(family = %family.name, instances = family.len(), "constraint family generated");
        }

        families
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{LinearExpr, Var};

    #[test]
    fn test_family_order() {
        let sets = IndexSets::generate(&[1, 2, 3], &[1, 2]).unwrap();
        let config = ModelConfig::new(1);
        let names: Vec<String> = ConstraintEngine::new(&sets, &config)
            .generate_all()
            .into_iter()
            .map(|f| f.name)
            .collect();

        assert_eq!(
            names,
            vec![
                "location_exclusivity",
                "pairwise_coverage",
                "home_quota",
                "away_quota",
                "movement_linking",
            ]
        );
    }

    #[test]
    fn test_family_counts() {
        let sets = IndexSets::generate(&[1, 2, 3], &[1, 2]).unwrap();
        let config = ModelConfig::new(1);
        let counts: Vec<usize> = ConstraintEngine::new(&sets, &config)
            .generate_all()
            .iter()
            .map(|f| f.len())
            .collect();

        // 12 events, 6 ordered pairs, 3 teams, 6 period-2 events x 2 x 2
        assert_eq!(counts, vec![12, 6, 3, 3, 24]);
    }

    #[test]
    fn test_family_lookup() {
        let mut family = ConstraintFamily::new("f", "test");
        let e = Event::new(1, 2, 1);
        family.push(
            ConstraintIndex::Event(e),
            LinearConstraint::less_eq(LinearExpr::sum([Var::matched(e)]), 1),
        );

        assert!(family.get(&ConstraintIndex::Event(e)).is_some());
        assert!(family.get(&ConstraintIndex::Team(1)).is_none());
    }

    #[test]
    fn test_index_values() {
        let idx = ConstraintIndex::Movement {
            event: Event::new(1, 2, 2),
            home_opponent: 3,
            guest_opponent: 4,
        };
        assert_eq!(idx.values(), vec![1, 2, 2, 3, 4]);
        assert_eq!(ConstraintIndex::Pair { home: 5, guest: 6 }.values(), vec![5, 6]);
    }
}
