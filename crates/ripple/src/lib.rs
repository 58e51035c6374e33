//! Ripple: an explicit leapfrog integrator for the 1D wave equation.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Ripple sub-crates. For most users, adding `ripple` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use ripple::prelude::*;
//!
//! let config = SimulationConfig {
//!     grid_count: 100,
//!     domain_length: 50.0,
//!     courant_number: 0.5,
//!     ..Default::default()
//! };
//! let mut sim = Simulation::new(config).unwrap();
//!
//! // A tap at x = 10, then a few ticks.
//! sim.command_sender().inject(10.0, 0.5).unwrap();
//! sim.start();
//! for _ in 0..20 {
//!     sim.tick();
//! }
//!
//! assert_eq!(sim.step_count(), 20);
//! assert_eq!(sim.present()[0], 0.0);
//! assert_eq!(sim.present()[100], 0.0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `ripple-core` | Parameters, grid and three-level field state |
//! | [`solver`] | `ripple-solver` | Initialize, step, boundaries and injection |
//! | [`engine`] | `ripple-engine` | Owned simulation, commands and metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core data types (`ripple-core`).
///
/// [`types::Parameters`], [`types::Grid1D`] and [`types::FieldState`].
pub use ripple_core as types;

/// Free-function numerics over a field state (`ripple-solver`).
///
/// [`solver::initialize`], [`solver::step`], [`solver::apply_boundaries`]
/// and [`solver::inject`] are the four operations a driver needs when it
/// manages the state itself.
pub use ripple_solver as solver;

/// The owned simulation object (`ripple-engine`).
///
/// [`engine::Simulation`] wraps the solver with a run state, a command
/// channel and per-tick metrics.
pub use ripple_engine as engine;

/// Common imports for typical Ripple usage.
///
/// ```rust
/// use ripple::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use ripple_core::{FieldState, Grid1D, Parameters, TimeLevel};

    // Errors
    pub use ripple_core::ParameterError;
    pub use ripple_engine::{CommandError, ConfigError, SubmitError};
    pub use ripple_solver::InjectionError;

    // Engine
    pub use ripple_engine::{
        Command, CommandSender, RunState, Simulation, SimulationConfig, StepMetrics, TickReport,
    };
}
