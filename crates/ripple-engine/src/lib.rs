//! Owned simulation object for the Ripple wave integrator.
//!
//! [`Simulation`] bundles the parameters, grid and field state created by
//! [`ripple_solver::initialize`] and exposes the per-tick operations an
//! external driver calls: stepping, boundary enforcement, injection,
//! Courant number updates and reset. The driver owns the timer; the
//! simulation only tracks whether it is [`RunState::Running`].
//!
//! Events from other threads (pointer taps, slider changes, buttons) are
//! delivered through a [`CommandSender`] and applied at the next tick
//! boundary, never in the middle of a step.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod config;
pub mod metrics;
pub mod simulation;

pub use command::{Command, CommandSender, SubmitError};
pub use config::{ConfigError, SimulationConfig};
pub use metrics::StepMetrics;
pub use simulation::{CommandError, RunState, Simulation, TickReport};
