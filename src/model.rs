//! Model assembly.
//!
//! [`ModelAssembler`] runs the generators in a fixed order:
//! sets → variables → constraint families → objective.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::ModelConfig;
use crate::constraints::{ConstraintEngine, ConstraintFamily};
use crate::error::Result;
use crate::objective::{Objective, ObjectiveBuilder};
use crate::sets::{IndexSets, PeriodId, TeamId};
use crate::variables::{VariableFamily, VariableSpace};

/// A complete 0/1 program for double round-robin scheduling.
///
/// Read-only input for an external MILP solver.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LeagueModel {
    /// Model name.
    pub name: String,
    /// The period exempt from movement linking.
    pub start_period: PeriodId,
    /// Teams, periods, and valid events.
    pub sets: IndexSets,
    /// `match` and `movement` families.
    pub variables: VariableSpace,
    /// Constraint families, in generation order.
    pub constraints: Vec<ConstraintFamily>,
    /// Minimization objective.
    pub objective: Objective,
}

impl LeagueModel {
    /// Looks up a constraint family by name.
    pub fn constraint_family(&self, name: &str) -> Option<&ConstraintFamily> {
        self.constraints.iter().find(|f| f.name == name)
    }

    /// Looks up a variable family by name.
    pub fn variable_family(&self, name: &str) -> Option<&VariableFamily> {
        self.variables.get(name)
    }

    /// Total number of constraint instances.
    pub fn constraint_count(&self) -> usize {
        self.constraints.iter().map(|f| f.len()).sum()
    }

    /// Total number of declared variables.
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }
}

/// Builds [`LeagueModel`]s.
///
/// # Example
///
/// ```
/// use u_league::{ModelAssembler, ModelConfig};
///
/// let assembler = ModelAssembler::new(ModelConfig::new(1));
/// let model = assembler.build(&[1, 2, 3], &[1, 2, 3, 4, 5, 6]).unwrap();
/// assert_eq!(model.sets.events.len(), 3 * 2 * 6);
/// assert_eq!(model.constraints.len(), 5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ModelAssembler {
    config: ModelConfig,
}

impl ModelAssembler {
    pub fn new(config: ModelConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Builds a fresh model.
    ///
    /// Identical inputs produce identical models. Nothing is carried over
    /// between calls.
    ///
    /// # Errors
    /// Returns [`ModelError::Configuration`](crate::ModelError::Configuration)
    /// before anything is generated if the inputs or the configuration are
    /// malformed.
    pub fn build(&self, teams: &[TeamId], periods: &[PeriodId]) -> Result<LeagueModel> {
        let sets = IndexSets::generate(teams, periods)?;
        self.config.validate(&sets.periods)?;

        let variables = VariableSpace::declare(&sets, self.config.variable_domain);
        let constraints = ConstraintEngine::new(&sets, &self.config).generate_all();
        let objective = ObjectiveBuilder::new(&self.config).build(&sets, &variables);

        let model = LeagueModel {
            name: self.config.name.clone(),
            start_period: self.config.start_period,
            sets,
            variables,
            constraints,
            objective,
        };

        info!(
            model = %model.name,
            teams = model.sets.teams.len(),
            periods = model.sets.periods.len(),
            events = model.sets.events.len(),
            variables = model.variable_count(),
            constraints = model.constraint_count(),
            "league model built"
        );

        Ok(model)
    }
}

/// Builds a model with the given configuration.
pub fn build(teams: &[TeamId], periods: &[PeriodId], config: &ModelConfig) -> Result<LeagueModel> {
    ModelAssembler::new(config.clone()).build(teams, periods)
}
