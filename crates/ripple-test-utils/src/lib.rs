//! Test utilities and fixtures for Ripple development.
//!
//! Provides standard parameter sets and assertion helpers shared by the
//! unit and integration tests of the solver and engine crates.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use ripple_core::{FieldState, Parameters, TimeLevel};

/// The smallest worked example: `N = 4`, `L = 4` (so `dx = 1`),
/// `α = 0.5`, unit peak and wave speed.
///
/// Initializes to `present = past = [0, 1, 1, 1, 0]`.
pub fn tiny_params() -> Parameters {
    Parameters::new(4, 4.0, 0.5, 1.0, 1.0).expect("tiny fixture parameters are valid")
}

/// `n` cells of unit width with the given Courant number and a unit peak
/// at `n / 2`.
pub fn centered_params(n: usize, courant_number: f64) -> Parameters {
    Parameters::builder()
        .grid_count(n)
        .domain_length(n as f64)
        .courant_number(courant_number)
        .build()
        .expect("centered fixture parameters are valid")
}

/// Assert `values` is mirror-symmetric about its midpoint within `tol`.
pub fn assert_symmetric(values: &[f64], tol: f64) {
    let n = values.len();
    for i in 0..n / 2 {
        let (a, b) = (values[i], values[n - 1 - i]);
        assert!(
            (a - b).abs() <= tol,
            "asymmetry at {i} / {}: {a} vs {b}",
            n - 1 - i
        );
    }
}

/// Assert two states hold bit-identical values in every time level.
pub fn assert_bits_eq(a: &FieldState, b: &FieldState) {
    assert_eq!(a.len(), b.len(), "point count differs");
    for level in TimeLevel::ALL {
        let left: Vec<u64> = a.level(level).iter().map(|v| v.to_bits()).collect();
        let right: Vec<u64> = b.level(level).iter().map(|v| v.to_bits()).collect();
        assert_eq!(left, right, "{level} level differs");
    }
}

/// Assert both endpoints are exactly zero in every time level.
pub fn assert_pinned(state: &FieldState) {
    let last = state.grid_count();
    for level in TimeLevel::ALL {
        let values = state.level(level);
        assert_eq!(values[0], 0.0, "{level}[0] = {}", values[0]);
        assert_eq!(values[last], 0.0, "{level}[{last}] = {}", values[last]);
    }
}
