//! Error types.

use thiserror::Error;

use crate::sets::{PeriodId, TeamId};

/// Malformed input detected before any model component is generated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("team sequence is empty")]
    EmptyTeams,

    #[error("period sequence is empty")]
    EmptyPeriods,

    #[error("duplicate team id: {0}")]
    DuplicateTeam(TeamId),

    #[error("duplicate period id: {0}")]
    DuplicatePeriod(PeriodId),

    #[error("a round-robin needs at least 2 teams, got {count}")]
    TooFewTeams { count: usize },

    #[error("start period {0} is not one of the supplied periods")]
    UnknownStartPeriod(PeriodId),
}

/// Top-level error for model construction and export.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("failed to write model: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
