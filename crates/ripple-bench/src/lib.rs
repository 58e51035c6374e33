//! Benchmark profiles for the Ripple wave integrator.
//!
//! Provides pre-built [`SimulationConfig`] profiles for benchmarks:
//!
//! - [`reference_profile`]: the default 200-cell domain
//! - [`stress_profile`]: 1M cells, to measure the stencil in isolation
//! - [`tap_positions`]: deterministic injection points

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use ripple_core::Parameters;
use ripple_engine::SimulationConfig;

/// Build the reference profile: `N = 200`, `L = 100`, `α = 0.1`.
pub fn reference_profile() -> SimulationConfig {
    SimulationConfig::default()
}

/// Build a stress profile: `N = 1_000_000` unit cells at `α = 0.9`.
pub fn stress_profile() -> SimulationConfig {
    SimulationConfig {
        grid_count: 1_000_000,
        domain_length: 1_000_000.0,
        courant_number: 0.9,
        ..Default::default()
    }
}

/// Parameters for a profile, for benchmarks that drive the solver directly.
///
/// # Panics
///
/// Panics if `config` is invalid. Profiles in this crate are always valid.
pub fn profile_parameters(config: &SimulationConfig) -> Parameters {
    config
        .parameters()
        .expect("benchmark profiles are valid")
}

/// `count` deterministic positions spread over `[0, domain_length]`.
///
/// Uses a fixed multiplicative hash so runs are comparable across machines.
pub fn tap_positions(count: usize, domain_length: f64) -> Vec<f64> {
    (0..count as u64)
        .map(|i| {
            let h = i.wrapping_mul(6364136223846793007) >> 11;
            (h as f64 / (1u64 << 53) as f64) * domain_length
        })
        .collect()
}
