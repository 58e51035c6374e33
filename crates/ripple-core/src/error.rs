//! Error types for parameter validation.

use std::error::Error;
use std::fmt;

/// Errors detected while validating [`Parameters`](crate::Parameters).
///
/// Raised at initialization time only. Construction fails fast: no
/// partial field state is ever produced from invalid parameters.
#[derive(Clone, Debug, PartialEq)]
pub enum ParameterError {
    /// The grid needs at least two cells so that the initial peak has an
    /// interior point on either side of the center index.
    TooFewCells {
        /// The configured number of cells.
        grid_count: usize,
    },
    /// Domain length is zero, negative, or not finite.
    NonPositiveLength {
        /// The invalid value.
        value: f64,
    },
    /// Courant number is zero, negative, or not finite.
    NonPositiveCourant {
        /// The invalid value.
        value: f64,
    },
    /// Wave speed is zero, negative, or not finite.
    NonPositiveWaveSpeed {
        /// The invalid value.
        value: f64,
    },
    /// Peak amplitude is NaN or infinite.
    NonFinitePeak {
        /// The invalid value.
        value: f64,
    },
    /// The inputs are individually valid but the derived grid spacing or
    /// timestep underflows to zero or overflows to infinity.
    DegenerateSpacing {
        /// Derived grid spacing `L / N`.
        dx: f64,
        /// Derived timestep `(α / c) * dx`.
        dt: f64,
    },
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewCells { grid_count } => {
                write!(f, "grid_count must be at least 2, got {grid_count}")
            }
            Self::NonPositiveLength { value } => {
                write!(f, "domain_length must be finite and > 0, got {value}")
            }
            Self::NonPositiveCourant { value } => {
                write!(f, "courant_number must be finite and > 0, got {value}")
            }
            Self::NonPositiveWaveSpeed { value } => {
                write!(f, "wave_speed must be finite and > 0, got {value}")
            }
            Self::NonFinitePeak { value } => {
                write!(f, "peak_amplitude must be finite, got {value}")
            }
            Self::DegenerateSpacing { dx, dt } => {
                write!(f, "dx and dt must be finite and > 0, got dx={dx} dt={dt}")
            }
        }
    }
}

impl Error for ParameterError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_parameter() {
        let e = ParameterError::TooFewCells { grid_count: 1 };
        assert_eq!(e.to_string(), "grid_count must be at least 2, got 1");

        let e = ParameterError::NonPositiveCourant { value: -0.5 };
        assert!(e.to_string().contains("courant_number"));
        assert!(e.to_string().contains("-0.5"));

        let e = ParameterError::DegenerateSpacing { dx: 1.0, dt: 0.0 };
        assert_eq!(e.to_string(), "dx and dt must be finite and > 0, got dx=1 dt=0");
    }
}
