//! Owned, single-threaded wave simulation.
//!
//! [`Simulation`] is the primary user-facing API. It owns the parameters,
//! grid and field state for one run and replaces all three on reset.
//!
//! # Ownership model
//!
//! `Simulation` is [`Send`] but every mutating method takes `&mut self`,
//! and [`present()`](Simulation::present) borrows from `self`. A caller
//! therefore cannot hold a view of the field across a step; the borrow
//! checker enforces that rendering only ever sees a completed tick.
//!
//! # Run state
//!
//! ```text
//!            start()                 reset()
//!   Idle ───────────────▶ Running ──────────▶ (re-init) ──▶ Idle
//!    ▲                       │
//!    └────── stop() ─────────┘
//! ```
//!
//! The simulation does not own a timer. The driver calls
//! [`tick()`](Simulation::tick) at its own cadence; ticks while idle only
//! apply queued commands.

use std::time::Instant;

use crossbeam_channel::{Receiver, Sender};
use ripple_core::{FieldState, Grid1D, Parameters};
use ripple_solver::{Injection, InjectionError};
use tracing::{debug, info, warn};

use crate::command::{Command, CommandSender};
use crate::config::{ConfigError, SimulationConfig};
use crate::metrics::StepMetrics;

// Compile-time assertion: Simulation can be moved to a driver thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Simulation>();
    }
};

// ── RunState ────────────────────────────────────────────────────

/// Whether the driver should advance the simulation on each tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// Ticks only apply queued commands.
    Idle,
    /// Ticks apply queued commands, then step and enforce boundaries.
    Running,
}

// ── TickReport ──────────────────────────────────────────────────

/// Result of one [`Simulation::tick()`] call.
#[derive(Clone, Debug, PartialEq)]
pub struct TickReport {
    /// Queued commands applied before the step.
    pub commands_applied: usize,
    /// Queued commands dropped because they could not be applied.
    pub commands_rejected: usize,
    /// Whether the field advanced this tick.
    pub stepped: bool,
    /// Metrics for the advance, if one happened.
    pub metrics: Option<StepMetrics>,
}

// ── Simulation ──────────────────────────────────────────────────

/// A single 1D wave simulation and its lifecycle.
///
/// # Examples
///
/// ```
/// use ripple_engine::{Simulation, SimulationConfig};
///
/// let config = SimulationConfig {
///     grid_count: 4,
///     domain_length: 4.0,
///     courant_number: 0.5,
///     ..Default::default()
/// };
/// let mut sim = Simulation::new(config).unwrap();
/// assert_eq!(sim.present(), &[0.0, 1.0, 1.0, 1.0, 0.0]);
///
/// sim.advance();
/// assert_eq!(sim.present(), &[0.0, 0.75, 1.0, 0.75, 0.0]);
///
/// sim.reset().unwrap();
/// assert_eq!(sim.present(), &[0.0, 1.0, 1.0, 1.0, 0.0]);
/// ```
pub struct Simulation {
    config: SimulationConfig,
    params: Parameters,
    grid: Grid1D,
    state: FieldState,
    run_state: RunState,
    step_count: u64,
    elapsed_time: f64,
    last_metrics: StepMetrics,
    cmd_tx: Sender<Command>,
    cmd_rx: Receiver<Command>,
}

impl Simulation {
    /// Create an idle simulation from a [`SimulationConfig`].
    ///
    /// Validates the configuration and builds the initial state.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let init = ripple_solver::initialize(config.parameters()?)?;
        let (cmd_tx, cmd_rx) = crossbeam_channel::bounded(config.command_capacity);

        info!(
            grid_count = init.params.grid_count(),
            dx = init.dx(),
            dt = init.dt(),
            courant_number = init.params.courant_number(),
            "simulation created"
        );

        Ok(Self {
            config,
            params: init.params,
            grid: init.grid,
            state: init.state,
            run_state: RunState::Idle,
            step_count: 0,
            elapsed_time: 0.0,
            last_metrics: StepMetrics::default(),
            cmd_tx,
            cmd_rx,
        })
    }

    // ── Lifecycle ───────────────────────────────────────────────

    /// Re-initialize from the stored configuration and go idle.
    ///
    /// The parameters, grid and field state are replaced, not mutated.
    /// A Courant number changed at runtime reverts to the configured one.
    /// Queued commands are kept and apply to the new state.
    pub fn reset(&mut self) -> Result<(), ConfigError> {
        let init = ripple_solver::initialize(self.config.parameters()?)?;
        self.params = init.params;
        self.grid = init.grid;
        self.state = init.state;
        self.run_state = RunState::Idle;
        self.step_count = 0;
        self.elapsed_time = 0.0;
        self.last_metrics = StepMetrics::default();
        info!("simulation reset");
        Ok(())
    }

    /// Replace the configuration and reset.
    ///
    /// On error the simulation is left exactly as it was. The command
    /// channel capacity is fixed at construction and is not changed.
    pub fn reset_with(&mut self, config: SimulationConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let previous = std::mem::replace(&mut self.config, config);
        if let Err(e) = self.reset() {
            self.config = previous;
            return Err(e);
        }
        Ok(())
    }

    /// Enter [`RunState::Running`]. No-op if already running.
    pub fn start(&mut self) {
        if self.run_state != RunState::Running {
            self.run_state = RunState::Running;
            info!("simulation started");
        }
    }

    /// Enter [`RunState::Idle`]. No-op if already idle.
    pub fn stop(&mut self) {
        if self.run_state != RunState::Idle {
            self.run_state = RunState::Idle;
            info!(step_count = self.step_count, "simulation stopped");
        }
    }

    // ── Per-tick operations ─────────────────────────────────────

    /// Advance the field one time level with the current Courant number.
    ///
    /// Leaves the endpoints unpinned until
    /// [`apply_boundaries()`](Self::apply_boundaries) runs. Prefer
    /// [`advance()`](Self::advance), which does both.
    pub fn step(&mut self) {
        ripple_solver::step(&mut self.state, self.params.courant_number());
        self.step_count += 1;
        self.elapsed_time += self.params.dt();
    }

    /// Pin both endpoints to zero in every time level.
    pub fn apply_boundaries(&mut self) {
        ripple_solver::apply_boundaries(&mut self.state);
    }

    /// Step and enforce boundaries, regardless of run state.
    pub fn advance(&mut self) -> &StepMetrics {
        let start = Instant::now();
        self.step();
        self.apply_boundaries();
        let total_us = start.elapsed().as_micros() as u64;

        self.last_metrics = StepMetrics {
            total_us,
            courant_number: self.params.courant_number(),
            max_abs: ripple_solver::max_abs(self.state.present()),
            step_count: self.step_count,
        };
        debug!(
            step = self.step_count,
            max_abs = self.last_metrics.max_abs,
            "advanced"
        );
        &self.last_metrics
    }

    /// Run one driver tick: apply queued commands, then advance if running.
    pub fn tick(&mut self) -> TickReport {
        let (commands_applied, commands_rejected) = self.drain_commands();
        let metrics = if self.run_state == RunState::Running {
            Some(self.advance().clone())
        } else {
            None
        };
        TickReport {
            commands_applied,
            commands_rejected,
            stepped: metrics.is_some(),
            metrics,
        }
    }

    // ── Event entry points ──────────────────────────────────────

    /// Add `amplitude` around the grid point nearest `x`.
    ///
    /// See [`ripple_solver::inject`] for the clamping rules.
    pub fn inject(&mut self, x: f64, amplitude: f64) -> Result<Injection, InjectionError> {
        let hit = ripple_solver::inject(&mut self.state, &self.grid, x, amplitude)?;
        debug!(x, amplitude, center = hit.center, "injected");
        Ok(hit)
    }

    /// Replace the Courant number used by subsequent steps.
    ///
    /// Not validated. Values above 1 break the CFL condition and the
    /// field will grow without bound; this is logged but allowed.
    pub fn set_courant_number(&mut self, courant_number: f64) {
        self.params.set_courant_number(courant_number);
        if self.params.is_cfl_stable() {
            debug!(courant_number, "courant number changed");
        } else {
            warn!(courant_number, "courant number exceeds CFL limit of 1");
        }
    }

    /// A cloneable handle for queueing commands from other threads.
    pub fn command_sender(&self) -> CommandSender {
        CommandSender::new(self.cmd_tx.clone())
    }

    /// Apply every command queued so far, in arrival order.
    ///
    /// Commands sent while draining wait for the next call. Returns
    /// `(applied, rejected)`.
    pub fn drain_commands(&mut self) -> (usize, usize) {
        let pending = self.cmd_rx.len();
        let mut applied = 0;
        let mut rejected = 0;
        for _ in 0..pending {
            let Ok(command) = self.cmd_rx.try_recv() else {
                break;
            };
            match self.apply(command) {
                Ok(()) => applied += 1,
                Err(e) => {
                    warn!(error = %e, "dropped command");
                    rejected += 1;
                }
            }
        }
        (applied, rejected)
    }

    /// Apply a single command immediately.
    pub fn apply(&mut self, command: Command) -> Result<(), CommandError> {
        match command {
            Command::Inject { x, amplitude } => {
                self.inject(x, amplitude)?;
            }
            Command::SetCourantNumber(alpha) => self.set_courant_number(alpha),
            Command::Start => self.start(),
            Command::Stop => self.stop(),
            Command::Reset => self.reset()?,
        }
        Ok(())
    }

    // ── Queries ─────────────────────────────────────────────────

    /// Read-only view of the present field, for rendering.
    pub fn present(&self) -> &[f64] {
        self.state.present()
    }

    /// Grid point positions matching [`present()`](Self::present).
    pub fn coordinates(&self) -> &[f64] {
        self.grid.positions()
    }

    /// The full three-level field state.
    pub fn state(&self) -> &FieldState {
        &self.state
    }

    /// The spatial grid.
    pub fn grid(&self) -> &Grid1D {
        &self.grid
    }

    /// Current parameters, including the live Courant number.
    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// The configuration used by [`reset()`](Self::reset).
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Current run state.
    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    /// Whether ticks currently advance the field.
    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// Time levels advanced since construction or the last reset.
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Simulated time since construction or the last reset.
    ///
    /// Sums the `dt` of each step, so it tracks Courant number changes.
    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    /// Metrics from the most recent advance.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("grid_count", &self.params.grid_count())
            .field("courant_number", &self.params.courant_number())
            .field("run_state", &self.run_state)
            .field("step_count", &self.step_count)
            .finish()
    }
}

// ── CommandError ────────────────────────────────────────────────

/// Errors from [`Simulation::apply()`].
#[derive(Clone, Debug, PartialEq)]
pub enum CommandError {
    /// An injection could not be applied.
    Injection(InjectionError),
    /// A reset failed to rebuild the state.
    Config(ConfigError),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Injection(e) => write!(f, "injection: {e}"),
            Self::Config(e) => write!(f, "reset: {e}"),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Injection(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

impl From<InjectionError> for CommandError {
    fn from(e: InjectionError) -> Self {
        Self::Injection(e)
    }
}

impl From<ConfigError> for CommandError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
