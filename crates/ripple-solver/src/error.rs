//! Error types for solver operations.

use std::error::Error;
use std::fmt;

/// Errors from [`inject`](crate::inject).
///
/// Out-of-range coordinates are not errors: they clamp to the nearest
/// endpoint. Only values that cannot be placed or added at all are
/// rejected, and the state is left untouched when they are.
#[derive(Clone, Debug, PartialEq)]
pub enum InjectionError {
    /// The position or amplitude is NaN or infinite.
    NonFinite {
        /// The requested position.
        x: f64,
        /// The requested amplitude.
        amplitude: f64,
    },
    /// The field state and the grid disagree on the number of points.
    GridMismatch {
        /// Points in the field state.
        state_points: usize,
        /// Points in the grid.
        grid_points: usize,
    },
}

impl fmt::Display for InjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { x, amplitude } => {
                write!(f, "injection at x={x} with amplitude {amplitude} is not finite")
            }
            Self::GridMismatch {
                state_points,
                grid_points,
            } => write!(
                f,
                "field state has {state_points} points but grid has {grid_points}"
            ),
        }
    }
}

impl Error for InjectionError {}
