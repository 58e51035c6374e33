//! Leapfrog finite-difference solver for the 1D wave equation.
//!
//! Each operation works on a caller-owned [`FieldState`](ripple_core::FieldState):
//!
//! 1. [`initialize`] builds a state with a localized peak at rest.
//! 2. [`step`] computes the next time level and rotates the levels.
//! 3. [`apply_boundaries`] pins both endpoints to zero.
//! 4. [`inject`] adds a localized impulse near a coordinate.
//!
//! A driver calls `step` followed by `apply_boundaries` once per tick.
//! Nothing here owns a timer or checks the CFL condition.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod diagnostics;
pub mod error;
pub mod init;
pub mod inject;
pub mod leapfrog;

pub use boundary::apply_boundaries;
pub use diagnostics::{discrete_energy, is_symmetric, max_abs, mirror_error};
pub use error::InjectionError;
pub use init::{initialize, Initialized};
pub use inject::{inject, Injection};
pub use leapfrog::step;
