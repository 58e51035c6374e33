//! Explicit leapfrog update for the 1D wave equation.
//!
//! Second-order central differences in space and time:
//! ```text
//! future[i] = α² (present[i+1] - 2 present[i] + present[i-1])
//!           + 2 present[i] - past[i]            for 1 <= i <= N-1
//! ```
//! where `α = c dt / dx` is the Courant number. After the interior is
//! computed the levels rotate: past <- present, present <- future.
//!
//! The scheme is stable only for `α <= 1` (CFL). This module does not
//! check that: larger values grow without bound, which is the expected,
//! observable behavior of the scheme.

use ripple_core::FieldState;

/// Advance `state` by one time level using Courant number `courant_number`.
///
/// Endpoints are not written by the stencil; call
/// [`apply_boundaries`](crate::apply_boundaries) afterwards.
///
/// # Examples
///
/// ```
/// use ripple_core::Parameters;
/// use ripple_solver::{apply_boundaries, initialize, step};
///
/// let mut init = initialize(Parameters::new(4, 4.0, 0.5, 1.0, 1.0).unwrap()).unwrap();
/// step(&mut init.state, 0.5);
/// apply_boundaries(&mut init.state);
/// assert_eq!(init.state.present(), &[0.0, 0.75, 1.0, 0.75, 0.0]);
/// assert_eq!(init.state.past(), &[0.0, 1.0, 1.0, 1.0, 0.0]);
/// ```
pub fn step(state: &mut FieldState, courant_number: f64) {
    let alpha2 = courant_number * courant_number;
    {
        let (past, present, future) = state.split_for_step();
        let n = present.len() - 1;
        for i in 1..n {
            let laplacian = present[i + 1] - 2.0 * present[i] + present[i - 1];
            future[i] = alpha2 * laplacian + 2.0 * present[i] - past[i];
        }
    }
    state.rotate();
}
