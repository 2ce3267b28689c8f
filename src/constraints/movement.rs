//! Movement linking.
//!
//! For a valid event `(h, g, p)` whose period is not the start period and
//! whose previous period `q = p - 1` exists, and for every `o' != g` and
//! `o != h`:
//!
//! ```text
//! movement[h,g,p] >= match[h,o,q] + match[g,o',p] - 1
//! ```
//!
//! stored as `movement[h,g,p] - match[h,o,q] - match[g,o',p] >= -1`. If `h`
//! hosted in `q` while `g` hosts in `p`, the slot is charged a relocation.
//!
//! This is the costliest family: `|events| x (|teams| - 1)^2` instances.
//! Hosting variables are grouped per `(team, period)` once so the opponent
//! loops only pair up precomputed lists.

use std::collections::HashMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::trace;

use super::{ConstraintFamily, ConstraintIndex, ConstraintInstance};
use crate::config::ModelConfig;
use crate::expr::{LinearConstraint, LinearExpr, Var};
use crate::sets::{Event, IndexSets, PeriodId, TeamId};

/// `(team, period)` -> `[(opponent, match[team, opponent, period])]`.
type HostingIndex = HashMap<(TeamId, PeriodId), Vec<(TeamId, Var)>>;

/// Generates the movement-linking family.
///
/// Instance order is event order, then home opponent, then guest opponent,
/// with or without the `parallel` feature.
pub fn movement_linking(sets: &IndexSets, config: &ModelConfig) -> ConstraintFamily {
    let mut family = ConstraintFamily::new(
        "movement_linking",
        "connect movement between stadiums with played matches",
    );

    let hosting = hosting_index(sets);
    let linked: Vec<(Event, PeriodId)> = sets
        .events
        .iter()
        .filter(|e| e.period != config.start_period)
        .filter_map(|e| match sets.predecessor(e.period) {
            Some(prev) => Some((*e, prev)),
            None => {
                trace!(event = %e, "previous period missing, skipped");
                None
            }
        })
        .collect();

    #[cfg(feature = "parallel")]
    {
        family.instances = linked
            .par_iter()
            .flat_map_iter(|&(event, prev)| link_event(&hosting, event, prev))
            .collect();
    }
    #[cfg(not(feature = "parallel"))]
    {
        family.instances = linked
            .iter()
            .flat_map(|&(event, prev)| link_event(&hosting, event, prev))
            .collect();
    }

    family
}

fn hosting_index(sets: &IndexSets) -> HostingIndex {
    let mut index: HostingIndex = HashMap::with_capacity(sets.teams.len() * sets.periods.len());
    for &event in &sets.events {
        index
            .entry((event.home, event.period))
            .or_default()
            .push((event.guest, Var::matched(event)));
    }
    index
}

fn link_event(hosting: &HostingIndex, event: Event, prev: PeriodId) -> Vec<ConstraintInstance> {
    // match[h, o, q] for o != h
    let hosted_before = hosting
        .get(&(event.home, prev))
        .map(Vec::as_slice)
        .unwrap_or_default();
    // match[g, o', p] for o' != g
    let guest_hosts_now = hosting
        .get(&(event.guest, event.period))
        .map(Vec::as_slice)
        .unwrap_or_default();

    let movement = Var::movement(event);
    let mut out = Vec::with_capacity(hosted_before.len() * guest_hosts_now.len());

    for &(home_opponent, now) in guest_hosts_now {
        for &(guest_opponent, before) in hosted_before {
            let expr = LinearExpr::zero()
                .with_term(movement, 1)
                .with_term(before, -1)
                .with_term(now, -1);
            out.push(ConstraintInstance::new(
                ConstraintIndex::Movement {
                    event,
                    home_opponent,
                    guest_opponent,
                },
                LinearConstraint::greater_eq(expr, -1),
            ));
        }
    }

    out
}
