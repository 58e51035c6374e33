//! Simulation configuration, validation, and error types.
//!
//! [`SimulationConfig`] is the input for constructing (and resetting) a
//! [`Simulation`](crate::Simulation). [`validate()`](SimulationConfig::validate)
//! checks every invariant up front so construction never leaves a
//! half-built simulation behind.

use std::error::Error;
use std::fmt;

use ripple_core::{ParameterError, Parameters};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SimulationConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Numerical parameters are invalid.
    Parameters(ParameterError),
    /// The command channel capacity is zero.
    CommandCapacityZero,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parameters(e) => write!(f, "parameters: {e}"),
            Self::CommandCapacityZero => write!(f, "command_capacity must be at least 1"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parameters(e) => Some(e),
            Self::CommandCapacityZero => None,
        }
    }
}

impl From<ParameterError> for ConfigError {
    fn from(e: ParameterError) -> Self {
        Self::Parameters(e)
    }
}

// ── SimulationConfig ───────────────────────────────────────────────

/// Complete configuration for a [`Simulation`](crate::Simulation).
///
/// Reset re-reads this configuration, so a Courant number changed at
/// runtime reverts to `courant_number` here unless the caller supplies a
/// new configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Number of cells `N`. Default: 200. Minimum: 2.
    pub grid_count: usize,
    /// Domain length `L`. Default: 100.0.
    pub domain_length: f64,
    /// Initial Courant number `α`. Default: 0.1.
    pub courant_number: f64,
    /// Amplitude of the initial peak. Default: 1.0.
    pub peak_amplitude: f64,
    /// Wave speed `c`. Default: 1.0.
    pub wave_speed: f64,
    /// Maximum commands buffered between ticks. Default: 64.
    pub command_capacity: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            grid_count: Parameters::DEFAULT_GRID_COUNT,
            domain_length: Parameters::DEFAULT_DOMAIN_LENGTH,
            courant_number: Parameters::DEFAULT_COURANT_NUMBER,
            peak_amplitude: Parameters::DEFAULT_PEAK_AMPLITUDE,
            wave_speed: Parameters::DEFAULT_WAVE_SPEED,
            command_capacity: 64,
        }
    }
}

impl SimulationConfig {
    /// Validate all invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.parameters()?;
        if self.command_capacity == 0 {
            return Err(ConfigError::CommandCapacityZero);
        }
        Ok(())
    }

    /// Build the numerical [`Parameters`] described by this configuration.
    pub fn parameters(&self) -> Result<Parameters, ConfigError> {
        Ok(Parameters::new(
            self.grid_count,
            self.domain_length,
            self.courant_number,
            self.peak_amplitude,
            self.wave_speed,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        let p = config.parameters().unwrap();
        assert_eq!(p.grid_count(), 200);
        assert_eq!(p.dx(), 0.5);
    }

    #[test]
    fn zero_capacity_rejected() {
        let config = SimulationConfig {
            command_capacity: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::CommandCapacityZero));
    }

    #[test]
    fn parameter_errors_are_wrapped() {
        let config = SimulationConfig {
            grid_count: 1,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(
            err,
            ConfigError::Parameters(ParameterError::TooFewCells { grid_count: 1 })
        );
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("parameters: "));
    }
}
