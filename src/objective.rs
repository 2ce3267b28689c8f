//! Objective of the league model.
//!
//! `minimize main + movement` where
//!
//! - `main` sums `match` over the valid events. Pairwise coverage fixes it at
//!   `|teams| * (|teams| - 1)` for every feasible schedule, so it only shifts
//!   the objective value.
//! - `movement` sums the declared `movement` variables outside the start period.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::ModelConfig;
use crate::expr::{LinearExpr, Var};
use crate::sets::IndexSets;
use crate::variables::VariableSpace;

/// Optimization direction. League models are always minimized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sense {
    Minimize,
}

/// A named additive part of the objective.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObjectiveTerm {
    pub name: String,
    pub expr: LinearExpr,
}

/// A linear objective composed of named terms.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Objective {
    pub sense: Sense,
    pub terms: Vec<ObjectiveTerm>,
}

impl Objective {
    /// The sum of all terms as one expression.
    pub fn expr(&self) -> LinearExpr {
        let mut out = LinearExpr::zero();
        for term in &self.terms {
            out.extend(&term.expr);
        }
        out
    }

    /// Looks up a term by name.
    pub fn term(&self, name: &str) -> Option<&ObjectiveTerm> {
        self.terms.iter().find(|t| t.name == name)
    }

    /// Evaluates the objective under a 0/1 assignment.
    pub fn evaluate<F: Fn(&Var) -> bool>(&self, value: F) -> i64 {
        self.terms.iter().map(|t| t.expr.evaluate(&value)).sum()
    }
}

/// Builds the objective from the sets and the declared variables.
pub struct ObjectiveBuilder<'a> {
    config: &'a ModelConfig,
}

impl<'a> ObjectiveBuilder<'a> {
    pub fn new(config: &'a ModelConfig) -> Self {
        Self { config }
    }

    pub fn build(&self, sets: &IndexSets, variables: &VariableSpace) -> Objective {
        Objective {
            sense: Sense::Minimize,
            terms: vec![self.main_term(sets), self.movement_term(variables)],
        }
    }

    fn main_term(&self, sets: &IndexSets) -> ObjectiveTerm {
        ObjectiveTerm {
            name: "main".into(),
            expr: LinearExpr::sum(sets.events.iter().copied().map(Var::matched)),
        }
    }

    fn movement_term(&self, variables: &VariableSpace) -> ObjectiveTerm {
        let start = self.config.start_period;
        ObjectiveTerm {
            name: "movement".into(),
            expr: LinearExpr::sum(variables.movements.vars().filter(|v| v.at.period != start)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VariableDomain;
    use crate::expr::VarFamily;

    fn build(domain: VariableDomain) -> Objective {
        let sets = IndexSets::generate(&[1, 2, 3], &[1, 2]).unwrap();
        let config = ModelConfig::new(1).with_variable_domain(domain);
        let vars = VariableSpace::declare(&sets, config.variable_domain);
        ObjectiveBuilder::new(&config).build(&sets, &vars)
    }

    #[test]
    fn test_main_term() {
        let objective = build(VariableDomain::Full);
        let main = objective.term("main").unwrap();

        assert_eq!(objective.sense, Sense::Minimize);
        assert_eq!(main.expr.len(), 12);
        assert!(main.expr.vars().all(|v| v.family == VarFamily::Match));
    }

    #[test]
    fn test_movement_term_excludes_start_period() {
        let objective = build(VariableDomain::Full);
        let movement = objective.term("movement").unwrap();

        // full domain: 3 x 3 period-2 slots
        assert_eq!(movement.expr.len(), 9);
        assert!(movement
            .expr
            .vars()
            .all(|v| v.family == VarFamily::Movement && v.at.period == 2));
    }

    #[test]
    fn test_movement_term_valid_domain() {
        let objective = build(VariableDomain::ValidEvents);
        assert_eq!(objective.term("movement").unwrap().expr.len(), 6);
    }

    #[test]
    fn test_combined_expression() {
        let objective = build(VariableDomain::Full);
        assert_eq!(objective.expr().len(), 21);
        assert_eq!(objective.evaluate(|_| true), 21);
        assert_eq!(objective.evaluate(|_| false), 0);
    }
}
