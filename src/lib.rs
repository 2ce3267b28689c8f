//! Double round-robin league scheduling as a 0/1 integer program.
//!
//! Generates the decision variables, constraint families, and objective of a
//! schedule in which every ordered team pair meets exactly once, each team
//! hosts and visits every other team once, and forced venue relocations
//! between consecutive periods are minimized.
//!
//! # Modules
//!
//! - **`sets`**: Team, period, and valid-event domains ([`IndexSets`])
//! - **`variables`**: `match` and `movement` binary families ([`VariableSpace`])
//! - **`constraints`**: Location exclusivity, pairwise coverage, home/away
//!   quotas, movement linking ([`ConstraintEngine`])
//! - **`objective`**: Match-count plus movement-count minimization ([`ObjectiveBuilder`])
//! - **`model`**: Orchestration into an immutable [`LeagueModel`] ([`ModelAssembler`])
//! - **`solution`**: Checking candidate assignments against a model
//! - **`lp`**: LP-format export for external MILP solvers
//!
//! # Architecture
//!
//! This crate is a modeling layer only. Solving the program, reading
//! configuration files, and reporting schedules belong to consumers.
//!
//! # Example
//!
//! ```
//! use u_league::{build, ModelConfig};
//!
//! let model = build(&[1, 2, 3, 4], &[1, 2, 3, 4, 5, 6], &ModelConfig::new(1)).unwrap();
//! assert_eq!(model.sets.events.len(), 4 * 3 * 6);
//! let lp = model.to_lp().unwrap();
//! assert!(lp.starts_with("Minimize"));
//! ```
//!
//! # References
//!
//! - Rasmussen & Trick (2008), "Round robin scheduling – a survey"
//! - Easton, Nemhauser & Trick (2001), "The Traveling Tournament Problem"

pub mod config;
pub mod constraints;
pub mod error;
pub mod expr;
pub mod lp;
pub mod model;
pub mod objective;
pub mod sets;
pub mod solution;
pub mod variables;

pub use config::{ModelConfig, VariableDomain};
pub use constraints::{ConstraintEngine, ConstraintFamily, ConstraintIndex, ConstraintInstance};
pub use error::{ConfigurationError, ModelError, Result};
pub use expr::{LinearConstraint, LinearExpr, Relation, Var, VarFamily};
pub use model::{build, LeagueModel, ModelAssembler};
pub use objective::{Objective, ObjectiveBuilder, ObjectiveTerm, Sense};
pub use sets::{Event, IndexSets, PeriodId, TeamId};
pub use solution::{Solution, Violation};
pub use variables::{VariableFamily, VariableSpace};
