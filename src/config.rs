//! Model configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::sets::PeriodId;

/// Index domain of the variable families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VariableDomain {
    /// teams × teams × periods, self-pairs included. Self-pair variables
    /// appear in no constraint and stay free.
    #[default]
    Full,
    /// Only the valid-event set.
    ValidEvents,
}

/// Configuration consumed by every generator of the model.
///
/// Passed explicitly into each component, so a build is a pure function of
/// `(teams, periods, config)`.
///
/// # Examples
///
/// ```
/// use u_league::{ModelConfig, VariableDomain};
///
/// let config = ModelConfig::default()
///     .with_name("league")
///     .with_start_period(1)
///     .with_variable_domain(VariableDomain::ValidEvents);
/// assert!(config.validate(&[1, 2, 3]).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ModelConfig {
    /// Model name.
    pub name: String,

    /// The period with no predecessor. No movement linking is generated for
    /// events in this period, and its movement variables are left out of
    /// the objective.
    pub start_period: PeriodId,

    /// Index domain of the `match` and `movement` families.
    pub variable_domain: VariableDomain,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: "scheduler".into(),
            start_period: 1,
            variable_domain: VariableDomain::Full,
        }
    }
}

impl ModelConfig {
    /// Creates a configuration with the given start period.
    pub fn new(start_period: PeriodId) -> Self {
        Self::default().with_start_period(start_period)
    }

    /// Sets the model name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the period exempt from movement linking.
    pub fn with_start_period(mut self, period: PeriodId) -> Self {
        self.start_period = period;
        self
    }

    /// Sets the index domain of the variable families.
    pub fn with_variable_domain(mut self, domain: VariableDomain) -> Self {
        self.variable_domain = domain;
        self
    }

    /// Checks the configuration against the period sequence it will be used with.
    pub fn validate(&self, periods: &[PeriodId]) -> Result<(), ConfigurationError> {
        if !periods.contains(&self.start_period) {
            return Err(ConfigurationError::UnknownStartPeriod(self.start_period));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ModelConfig::default();
        assert_eq!(config.name, "scheduler");
        assert_eq!(config.start_period, 1);
        assert_eq!(config.variable_domain, VariableDomain::Full);
    }

    #[test]
    fn test_builder() {
        let config = ModelConfig::new(3)
            .with_name("cup")
            .with_variable_domain(VariableDomain::ValidEvents);
        assert_eq!(config.start_period, 3);
        assert_eq!(config.name, "cup");
        assert_eq!(config.variable_domain, VariableDomain::ValidEvents);
    }

    #[test]
    fn test_validate_start_period() {
        let config = ModelConfig::new(5);
        assert!(config.validate(&[4, 5, 6]).is_ok());
        assert_eq!(
            config.validate(&[1, 2]),
            Err(ConfigurationError::UnknownStartPeriod(5))
        );
    }
}
