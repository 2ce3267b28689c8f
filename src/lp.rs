//! CPLEX LP-format export.
//!
//! Writes a [`LeagueModel`] as a plain-text LP file that external MILP
//! solvers (HiGHS, SCIP, CBC, CPLEX, Gurobi) read directly.
//!
//! Variable names are `match_<h>_<g>_<p>` and `movement_<h>_<g>_<p>`;
//! constraint names are `<family>_<index values>`. Negative ids are written
//! with an `n` prefix, since `-` is not allowed in LP names.

use std::io::{self, Write};

use crate::constraints::ConstraintIndex;
use crate::expr::{LinearExpr, Var};
use crate::model::LeagueModel;
use crate::objective::Sense;

/// Maximum number of terms written per line.
const TERMS_PER_LINE: usize = 8;

impl LeagueModel {
    /// Renders the model in LP format.
    pub fn to_lp(&self) -> crate::Result<String> {
        let mut buf = Vec::new();
        self.write_lp(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Streams the LP rendering to `writer`, one line at a time.
    ///
    /// Files should be wrapped in a [`std::io::BufWriter`].
    pub fn write_lp<W: Write>(&self, writer: &mut W) -> crate::Result<()> {
        match self.objective.sense {
            Sense::Minimize => writeln!(writer, "Minimize")?,
        }
        write!(writer, " obj: ")?;
        write_expr(writer, &self.objective.expr())?;
        writeln!(writer)?;

        writeln!(writer, "Subject To")?;
        for family in &self.constraints {
            for instance in &family.instances {
                let c = &instance.constraint;
                write!(writer, " {}: ", constraint_name(&family.name, &instance.index))?;
                write_expr(writer, &c.expr)?;
                writeln!(writer, " {} {}", c.relation.symbol(), c.rhs)?;
            }
        }

        writeln!(writer, "Binary")?;
        for family in self.variables.families() {
            for var in family.vars() {
                writeln!(writer, " {}", var_name(&var))?;
            }
        }
        writeln!(writer, "End")?;
        writer.flush()?;
        Ok(())
    }
}

/// LP name of a variable.
pub fn var_name(var: &Var) -> String {
    format!(
        "{}_{}_{}_{}",
        var.family.name(),
        id(var.at.home),
        id(var.at.guest),
        id(var.at.period)
    )
}

fn constraint_name(family: &str, index: &ConstraintIndex) -> String {
    let mut name = family.to_string();
    for value in index.values() {
        name.push('_');
        name.push_str(&id(value));
    }
    name
}

fn id(value: i64) -> String {
    if value < 0 {
        format!("n{}", value.unsigned_abs())
    } else {
        value.to_string()
    }
}

fn write_expr<W: Write>(writer: &mut W, expr: &LinearExpr) -> io::Result<()> {
    if expr.is_empty() {
        return write!(writer, "0");
    }

    for (i, (var, coef)) in expr.terms.iter().enumerate() {
        if i > 0 {
            if i % TERMS_PER_LINE == 0 {
                write!(writer, "\n   ")?;
            } else {
                write!(writer, " ")?;
            }
        }
        let sign = if *coef < 0 { '-' } else { '+' };
        match coef.unsigned_abs() {
            1 => write!(writer, "{sign} {}", var_name(var))?,
            c => write!(writer, "{sign} {c} {}", var_name(var))?,
        }
    }
    Ok(())
}
