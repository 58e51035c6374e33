//! Core types for the Ripple wave-equation integrator.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! numerical parameters, the three-time-level field storage, the spatial
//! grid, and the error types shared by the solver and engine crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod field;
pub mod grid;
pub mod params;

pub use error::ParameterError;
pub use field::{FieldState, TimeLevel};
pub use grid::Grid1D;
pub use params::{Parameters, ParametersBuilder};
