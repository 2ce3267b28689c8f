//! Checking candidate assignments against a built model.
//!
//! A [`Solution`] lists the variables set to 1, typically as read back from
//! an external solver. [`LeagueModel::check`] evaluates every constraint
//! instance and reports the ones that do not hold.

use std::collections::HashSet;

use crate::constraints::ConstraintIndex;
use crate::expr::{Relation, Var};
use crate::model::LeagueModel;
use crate::sets::Event;

/// A 0/1 assignment: every listed variable is 1, all others are 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    active: HashSet<Var>,
}

impl Solution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: sets `match[event]` to 1.
    pub fn with_match(mut self, event: Event) -> Self {
        self.active.insert(Var::matched(event));
        self
    }

    /// Builder: sets `movement[event]` to 1.
    pub fn with_movement(mut self, event: Event) -> Self {
        self.active.insert(Var::movement(event));
        self
    }

    /// Sets `var` to 1.
    pub fn set(&mut self, var: Var) {
        self.active.insert(var);
    }

    /// Value of `var`.
    pub fn value(&self, var: &Var) -> bool {
        self.active.contains(var)
    }

    /// Number of variables set to 1.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}

impl FromIterator<Var> for Solution {
    fn from_iter<I: IntoIterator<Item = Var>>(iter: I) -> Self {
        Self {
            active: iter.into_iter().collect(),
        }
    }
}

/// A constraint instance that does not hold under a solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Name of the violated family.
    pub family: String,
    pub index: ConstraintIndex,
    /// Evaluated left-hand side.
    pub lhs: i64,
    pub relation: Relation,
    pub rhs: i64,
}

impl LeagueModel {
    /// Returns every violated constraint instance, in model order.
    ///
    /// An empty result means the solution is feasible.
    pub fn check(&self, solution: &Solution) -> Vec<Violation> {
        let mut violations = Vec::new();
        for family in &self.constraints {
            for instance in &family.instances {
                let c = &instance.constraint;
                let lhs = c.expr.evaluate(|v| solution.value(v));
                if !c.relation.holds(lhs, c.rhs) {
                    violations.push(Violation {
                        family: family.name.clone(),
                        index: instance.index,
                        lhs,
                        relation: c.relation,
                        rhs: c.rhs,
                    });
                }
            }
        }
        violations
    }

    /// Whether the solution satisfies every constraint.
    pub fn is_feasible(&self, solution: &Solution) -> bool {
        self.check(solution).is_empty()
    }

    /// Objective value of the solution.
    pub fn objective_value(&self, solution: &Solution) -> i64 {
        self.objective.evaluate(|v| solution.value(v))
    }

    /// Active variables the model does not declare.
    pub fn undeclared(&self, solution: &Solution) -> Vec<Var> {
        let declared: HashSet<Var> = self
            .variables
            .families()
            .into_iter()
            .flat_map(|f| f.vars())
            .collect();
        let mut out: Vec<Var> = solution
            .active
            .iter()
            .filter(|v| !declared.contains(v))
            .copied()
            .collect();
        out.sort();
        out
    }
}
