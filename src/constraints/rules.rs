//! Pairing and quota rules.

use tracing::trace;

use super::{ConstraintFamily, ConstraintIndex};
use crate::expr::{LinearConstraint, LinearExpr, Var};
use crate::sets::{Event, IndexSets, TeamId};

/// One location per period: a pair cannot meet in both orientations in the
/// same period.
pub fn location_exclusivity(sets: &IndexSets) -> ConstraintFamily {
    let mut family = ConstraintFamily::new("location_exclusivity", "one location at one period");

    for &home in &sets.teams {
        for &guest in &sets.teams {
            for &period in &sets.periods {
                let event = Event::new(home, guest, period);
                if !sets.contains_event(&event) {
                    continue;
                }
                let expr = LinearExpr::sum([Var::matched(event), Var::matched(event.reversed())]);
                family.push(
                    ConstraintIndex::Event(event),
                    LinearConstraint::less_eq(expr, 1),
                );
            }
        }
    }

    family
}

/// Every ordered pair is scheduled in exactly one period.
pub fn pairwise_coverage(sets: &IndexSets) -> ConstraintFamily {
    let mut family = ConstraintFamily::new("pairwise_coverage", "all to all teams");

    for &home in &sets.teams {
        for &guest in &sets.teams {
            if home == guest {
                continue;
            }
            let expr = LinearExpr::sum(
                sets.periods
                    .iter()
                    .map(|&period| Event::new(home, guest, period))
                    .filter(|e| sets.contains_event(e))
                    .map(Var::matched),
            );
            family.push(
                ConstraintIndex::Pair { home, guest },
                LinearConstraint::equal(expr, 1),
            );
        }
    }

    family
}

/// Every team hosts each other team once.
pub fn home_quota(sets: &IndexSets) -> ConstraintFamily {
    quota(sets, "home_quota", "play match at home", |team, opponent, period| {
        Event::new(team, opponent, period)
    })
}

/// Every team visits each other team once.
pub fn away_quota(sets: &IndexSets) -> ConstraintFamily {
    quota(sets, "away_quota", "play match as guest", |team, opponent, period| {
        Event::new(opponent, team, period)
    })
}

fn quota<F>(sets: &IndexSets, name: &str, doc: &str, slot: F) -> ConstraintFamily
where
    F: Fn(TeamId, TeamId, i64) -> Event,
{
    let mut family = ConstraintFamily::new(name, doc);
    let required = sets.teams.len() as i64 - 1;

    for &team in &sets.teams {
        let mut expr = LinearExpr::zero();
        for &period in &sets.periods {
            for &opponent in &sets.teams {
                let event = slot(team, opponent, period);
                if sets.contains_event(&event) {
                    expr.push(Var::matched(event), 1);
                }
            }
        }

        if expr.is_empty() {
            trace!(family = name, team, "no applicable slots, skipped");
            continue;
        }
        family.push(
            ConstraintIndex::Team(team),
            LinearConstraint::equal(expr, required),
        );
    }

    family
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::Relation;

    fn scenario_a() -> IndexSets {
        IndexSets::generate(&[1, 2], &[1, 2]).unwrap()
    }

    #[test]
    fn test_location_exclusivity_scenario() {
        let family = location_exclusivity(&scenario_a());
        assert_eq!(family.len(), 4);

        let c = family
            .get(&ConstraintIndex::Event(Event::new(1, 2, 1)))
            .unwrap();
        assert_eq!(c.relation, Relation::LessEq);
        assert_eq!(c.rhs, 1);
        assert_eq!(
            c.expr,
            LinearExpr::sum([
                Var::matched(Event::new(1, 2, 1)),
                Var::matched(Event::new(2, 1, 1)),
            ])
        );
    }

    #[test]
    fn test_location_exclusivity_skips_self_pairs() {
        let family = location_exclusivity(&scenario_a());
        assert!(family.instances.iter().all(|i| match i.index {
            ConstraintIndex::Event(e) => !e.is_self_pair(),
            _ => false,
        }));
    }

    #[test]
    fn test_pairwise_coverage_scenario() {
        let family = pairwise_coverage(&scenario_a());
        assert_eq!(family.len(), 2);

        let c = family
            .get(&ConstraintIndex::Pair { home: 1, guest: 2 })
            .unwrap();
        assert_eq!(c.relation, Relation::Equal);
        assert_eq!(c.rhs, 1);
        assert_eq!(
            c.expr,
            LinearExpr::sum([
                Var::matched(Event::new(1, 2, 1)),
                Var::matched(Event::new(1, 2, 2)),
            ])
        );
        assert!(family
            .get(&ConstraintIndex::Pair { home: 1, guest: 1 })
            .is_none());
    }

    #[test]
    fn test_home_quota() {
        let sets = IndexSets::generate(&[1, 2, 3], &[1, 2]).unwrap();
        let family = home_quota(&sets);
        assert_eq!(family.len(), 3);

        let c = family.get(&ConstraintIndex::Team(2)).unwrap();
        assert_eq!(c.rhs, 2);
        assert_eq!(c.expr.len(), 4);
        assert!(c.expr.vars().all(|v| v.at.home == 2 && v.at.guest != 2));
    }

    #[test]
    fn test_away_quota() {
        let sets = IndexSets::generate(&[1, 2, 3], &[1, 2]).unwrap();
        let family = away_quota(&sets);
        assert_eq!(family.len(), 3);

        let c = family.get(&ConstraintIndex::Team(3)).unwrap();
        assert_eq!(c.relation, Relation::Equal);
        assert_eq!(c.rhs, 2);
        assert!(c.expr.vars().all(|v| v.at.guest == 3 && v.at.home != 3));
    }
}
