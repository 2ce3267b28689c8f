//! Linear expressions over the model's binary variables.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::sets::Event;

/// The binary variable families of the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VarFamily {
    /// `match[h, g, p]`: `h` hosts `g` in period `p`.
    Match,
    /// `movement[h, g, p]`: a forced venue relocation attributed to the slot.
    Movement,
}

impl VarFamily {
    /// Family name as exposed on the model.
    pub fn name(&self) -> &'static str {
        match self {
            VarFamily::Match => "match",
            VarFamily::Movement => "movement",
        }
    }
}

/// A reference to one binary variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Var {
    pub family: VarFamily,
    pub at: Event,
}

impl Var {
    /// `match[h, g, p]`.
    pub fn matched(at: Event) -> Self {
        Self {
            family: VarFamily::Match,
            at,
        }
    }

    /// `movement[h, g, p]`.
    pub fn movement(at: Event) -> Self {
        Self {
            family: VarFamily::Movement,
            at,
        }
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}, {}, {}]",
            self.family.name(),
            self.at.home,
            self.at.guest,
            self.at.period
        )
    }
}

/// Relation between a constraint's left-hand side and its bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Relation {
    LessEq,
    Equal,
    GreaterEq,
}

impl Relation {
    /// Whether `lhs <relation> rhs` holds.
    pub fn holds(&self, lhs: i64, rhs: i64) -> bool {
        match self {
            Relation::LessEq => lhs <= rhs,
            Relation::Equal => lhs == rhs,
            Relation::GreaterEq => lhs >= rhs,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Relation::LessEq => "<=",
            Relation::Equal => "=",
            Relation::GreaterEq => ">=",
        }
    }
}

/// An integer linear combination of variables.
///
/// Terms keep insertion order so that two builds of the same model produce
/// identical expressions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinearExpr {
    /// `(variable, coefficient)` pairs.
    pub terms: Vec<(Var, i64)>,
}

impl LinearExpr {
    /// The empty expression.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Sum of `vars` with unit coefficients.
    pub fn sum<I: IntoIterator<Item = Var>>(vars: I) -> Self {
        Self {
            terms: vars.into_iter().map(|v| (v, 1)).collect(),
        }
    }

    /// Adds a term.
    pub fn push(&mut self, var: Var, coefficient: i64) {
        self.terms.push((var, coefficient));
    }

    /// Builder: adds a term and returns self.
    pub fn with_term(mut self, var: Var, coefficient: i64) -> Self {
        self.push(var, coefficient);
        self
    }

    /// Appends every term of `other`.
    pub fn extend(&mut self, other: &LinearExpr) {
        self.terms.extend_from_slice(&other.terms);
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Evaluates the expression under a 0/1 assignment.
    pub fn evaluate<F: Fn(&Var) -> bool>(&self, value: F) -> i64 {
        self.terms
            .iter()
            .filter(|(v, _)| value(v))
            .map(|(_, c)| *c)
            .sum()
    }

    /// Iterates over the referenced variables.
    pub fn vars(&self) -> impl Iterator<Item = &Var> {
        self.terms.iter().map(|(v, _)| v)
    }
}

/// A single linear constraint `expr <relation> rhs`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinearConstraint {
    pub expr: LinearExpr,
    pub relation: Relation,
    pub rhs: i64,
}

impl LinearConstraint {
    pub fn new(expr: LinearExpr, relation: Relation, rhs: i64) -> Self {
        Self {
            expr,
            relation,
            rhs,
        }
    }

    pub fn less_eq(expr: LinearExpr, rhs: i64) -> Self {
        Self::new(expr, Relation::LessEq, rhs)
    }

    pub fn equal(expr: LinearExpr, rhs: i64) -> Self {
        Self::new(expr, Relation::Equal, rhs)
    }

    pub fn greater_eq(expr: LinearExpr, rhs: i64) -> Self {
        Self::new(expr, Relation::GreaterEq, rhs)
    }

    /// Whether the constraint holds under a 0/1 assignment.
    pub fn is_satisfied<F: Fn(&Var) -> bool>(&self, value: F) -> bool {
        self.relation.holds(self.expr.evaluate(value), self.rhs)
    }
}

impl fmt::Display for LinearConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.expr.is_empty() {
            write!(f, "0")?;
        }
        for (i, (var, coef)) in self.expr.terms.iter().enumerate() {
            let sign = if *coef < 0 { "-" } else { "+" };
            if i == 0 {
                if *coef < 0 {
                    write!(f, "-")?;
                }
            } else {
                write!(f, " {sign} ")?;
            }
            if coef.abs() != 1 {
                write!(f, "{}*", coef.abs())?;
            }
            write!(f, "{var}")?;
        }
        write!(f, " {} {}", self.relation.symbol(), self.rhs)
    }
}
