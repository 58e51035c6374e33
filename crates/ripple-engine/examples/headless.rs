//! Headless Ripple driver: a fixed-rate tick loop with no renderer.
//!
//! Demonstrates:
//!   1. Building a SimulationConfig and Simulation
//!   2. Delivering taps and slider changes from another thread
//!   3. Ticking at a fixed cadence and reading the present field
//!   4. Watching an unstable Courant number blow up, then resetting
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example headless

use std::thread;
use std::time::Duration;

use ripple_engine::{Command, Simulation, SimulationConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

// ─── Driver parameters ──────────────────────────────────────────

const TICK_INTERVAL: Duration = Duration::from_millis(1);
const STABLE_TICKS: u32 = 400;
const UNSTABLE_TICKS: u32 = 60;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut sim = Simulation::new(SimulationConfig::default())?;
    info!(
        points = sim.present().len(),
        dx = sim.params().dx(),
        dt = sim.params().dt(),
        "created"
    );

    // ─── UI thread stand-in ─────────────────────────────────────

    let tx = sim.command_sender();
    let ui = thread::spawn(move || -> Result<(), ripple_engine::SubmitError> {
        tx.send(Command::Start)?;
        thread::sleep(TICK_INTERVAL * 50);
        tx.inject(25.0, 0.5)?;
        thread::sleep(TICK_INTERVAL * 50);
        tx.inject(75.0, -0.5)?;
        tx.set_courant_number(0.9)?;
        Ok(())
    });

    for tick in 0..STABLE_TICKS {
        let report = sim.tick();
        if report.commands_applied > 0 {
            info!(tick, applied = report.commands_applied, "commands applied");
        }
        if tick % 100 == 0 {
            info!(
                tick,
                step = sim.step_count(),
                time = sim.elapsed_time(),
                max_abs = sim.last_metrics().max_abs,
                "progress"
            );
        }
        thread::sleep(TICK_INTERVAL);
    }
    ui.join().map_err(|_| "ui thread panicked")??;

    let (peak_index, peak) = sim
        .present()
        .iter()
        .enumerate()
        .fold((0, 0.0_f64), |best, (i, &v)| {
            if v.abs() > best.1.abs() {
                (i, v)
            } else {
                best
            }
        });
    info!(x = sim.coordinates()[peak_index], value = peak, "largest displacement");

    // ─── Break the CFL condition ────────────────────────────────

    sim.set_courant_number(1.5);
    for _ in 0..UNSTABLE_TICKS {
        sim.tick();
    }
    info!(max_abs = sim.last_metrics().max_abs, "after unstable run");

    sim.reset()?;
    info!(
        running = sim.is_running(),
        max_abs = ripple_solver::max_abs(sim.present()),
        "reset"
    );
    Ok(())
}
