//! Field statistics for monitoring a run.

use ripple_core::FieldState;

/// Largest absolute value in `values`, or 0 for an empty slice.
///
/// NaN entries are ignored; infinities propagate.
pub fn max_abs(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |acc: f64, v| acc.max(v.abs()))
}

/// Largest deviation from mirror symmetry about the domain midpoint,
/// `max |v[i] - v[N - i]|`.
pub fn mirror_error(values: &[f64]) -> f64 {
    values
        .iter()
        .zip(values.iter().rev())
        .fold(0.0, |acc: f64, (a, b)| acc.max((a - b).abs()))
}

/// Whether `values` mirrors about the domain midpoint within `tolerance`.
pub fn is_symmetric(values: &[f64], tolerance: f64) -> bool {
    mirror_error(values) <= tolerance
}

/// Discrete energy between the past and present levels, in grid units.
///
/// ```text
/// E = Σ (p[i] - q[i])²  +  α² Σ (p[i+1] - p[i]) (q[i+1] - q[i])
/// ```
///
/// with `p` the present level and `q` the past level. With pinned
/// endpoints and a fixed `α <= 1` the leapfrog update conserves `E` up to
/// rounding. Injections and Courant number changes move it.
pub fn discrete_energy(state: &FieldState, courant_number: f64) -> f64 {
    let p = state.present();
    let q = state.past();
    let kinetic: f64 = p.iter().zip(q).map(|(a, b)| (a - b) * (a - b)).sum();
    let potential: f64 = p
        .windows(2)
        .zip(q.windows(2))
        .map(|(pw, qw)| (pw[1] - pw[0]) * (qw[1] - qw[0]))
        .sum();
    kinetic + courant_number * courant_number * potential
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{apply_boundaries, initialize, step};
    use ripple_test_utils::{centered_params, tiny_params};

    #[test]
    fn max_abs_picks_largest_magnitude() {
        assert_eq!(max_abs(&[0.0, -3.0, 2.0]), 3.0);
        assert_eq!(max_abs(&[]), 0.0);
        assert_eq!(max_abs(&[f64::NAN, 1.0]), 1.0);
    }

    #[test]
    fn mirror_error_of_symmetric_is_zero() {
        assert_eq!(mirror_error(&[0.0, 1.0, 2.0, 1.0, 0.0]), 0.0);
        assert_eq!(mirror_error(&[0.0, 1.0, 2.0, 1.5, 0.0]), 0.5);
        assert!(is_symmetric(&[0.0, 1.0, 2.0, 1.5, 0.0], 0.5));
        assert!(!is_symmetric(&[0.0, 1.0, 2.0, 1.5, 0.0], 0.25));
    }

    #[test]
    fn energy_of_tiny_example() {
        let mut init = initialize(tiny_params()).unwrap();
        // At rest: only the two edge gradients contribute, 0.25 * 2.
        assert_eq!(discrete_energy(&init.state, 0.5), 0.5);
        step(&mut init.state, 0.5);
        apply_boundaries(&mut init.state);
        assert!((discrete_energy(&init.state, 0.5) - 0.5).abs() < 1e-15);
    }

    #[test]
    fn energy_is_conserved_when_stable() {
        let alpha = 0.7;
        let mut init = initialize(centered_params(64, alpha)).unwrap();
        let initial = discrete_energy(&init.state, alpha);
        for _ in 0..500 {
            step(&mut init.state, alpha);
            apply_boundaries(&mut init.state);
            let e = discrete_energy(&init.state, alpha);
            assert!((e - initial).abs() < 1e-12, "energy drifted to {e}");
        }
    }
}
