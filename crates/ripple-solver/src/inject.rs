//! Localized perturbations applied between steps.

use ripple_core::{FieldState, Grid1D, TimeLevel};
use smallvec::SmallVec;

use crate::error::InjectionError;

/// Where an injection landed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Injection {
    /// Grid index nearest to the requested position.
    pub center: usize,
    /// Indices that received the amplitude, in ascending order.
    pub touched: SmallVec<[usize; 3]>,
}

/// Add `amplitude` to the three points around the grid point nearest `x`.
///
/// The amplitude goes into both the present and past levels so the
/// perturbation starts at rest, matching the initial condition. The
/// window `[k - 1, k + 1]` is clipped to `[0, N]`, and positions outside
/// the domain resolve to the nearest endpoint. A zero amplitude leaves
/// the state bit-for-bit unchanged.
///
/// Endpoint values written here are cleared by the next
/// [`apply_boundaries`](crate::apply_boundaries).
///
/// # Errors
///
/// Returns [`InjectionError::NonFinite`] for a NaN or infinite `x` or
/// `amplitude`, and [`InjectionError::GridMismatch`] if `grid` does not
/// describe `state`. The state is unchanged in both cases.
///
/// # Examples
///
/// ```
/// use ripple_core::{FieldState, Grid1D};
/// use ripple_solver::inject;
///
/// let grid = Grid1D::new(6, 1.0);
/// let mut state = FieldState::zeros(7);
/// let hit = inject(&mut state, &grid, 2.1, 0.5).unwrap();
/// assert_eq!(hit.center, 2);
/// assert_eq!(state.present(), &[0.0, 0.5, 0.5, 0.5, 0.0, 0.0, 0.0]);
/// assert_eq!(state.past(), state.present());
/// ```
pub fn inject(
    state: &mut FieldState,
    grid: &Grid1D,
    x: f64,
    amplitude: f64,
) -> Result<Injection, InjectionError> {
    if !x.is_finite() || !amplitude.is_finite() {
        return Err(InjectionError::NonFinite { x, amplitude });
    }
    if state.len() != grid.len() {
        return Err(InjectionError::GridMismatch {
            state_points: state.len(),
            grid_points: grid.len(),
        });
    }

    let center = grid.nearest_index(x);
    let lo = center.saturating_sub(1);
    let hi = (center + 1).min(state.grid_count());
    let touched: SmallVec<[usize; 3]> = (lo..=hi).collect();

    if amplitude != 0.0 {
        for level in [TimeLevel::Present, TimeLevel::Past] {
            for v in &mut state.level_mut(level)[lo..=hi] {
                *v += amplitude;
            }
        }
    }

    Ok(Injection { center, touched })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{apply_boundaries, initialize, step};
    use proptest::prelude::*;
    use ripple_test_utils::{assert_bits_eq, tiny_params};

    fn blank(n: usize) -> (FieldState, Grid1D) {
        (FieldState::zeros(n + 1), Grid1D::new(n, 1.0))
    }

    #[test]
    fn interior_hit_touches_three_points() {
        let (mut state, grid) = blank(10);
        let hit = inject(&mut state, &grid, 5.2, 2.0).unwrap();
        assert_eq!(hit.center, 5);
        assert_eq!(hit.touched.as_slice(), &[4, 5, 6]);
        for i in 0..=10 {
            let expected = if (4..=6).contains(&i) { 2.0 } else { 0.0 };
            assert_eq!(state.present()[i], expected);
            assert_eq!(state.past()[i], expected);
        }
        assert!(state.future().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn left_edge_window_is_clipped() {
        let (mut state, grid) = blank(10);
        let hit = inject(&mut state, &grid, 0.1, 1.0).unwrap();
        assert_eq!(hit.center, 0);
        assert_eq!(hit.touched.as_slice(), &[0, 1]);
        assert_eq!(&state.present()[..3], &[1.0, 1.0, 0.0]);
    }

    #[test]
    fn right_edge_window_is_clipped() {
        let (mut state, grid) = blank(10);
        let hit = inject(&mut state, &grid, 9.9, 1.0).unwrap();
        assert_eq!(hit.center, 10);
        assert_eq!(hit.touched.as_slice(), &[9, 10]);
    }

    #[test]
    fn outside_domain_clamps_to_endpoint() {
        let (mut state, grid) = blank(10);
        assert_eq!(inject(&mut state, &grid, -50.0, 1.0).unwrap().center, 0);
        assert_eq!(inject(&mut state, &grid, 500.0, 1.0).unwrap().center, 10);
    }

    #[test]
    fn injections_accumulate() {
        let (mut state, grid) = blank(10);
        inject(&mut state, &grid, 5.0, 1.0).unwrap();
        inject(&mut state, &grid, 6.0, -0.25).unwrap();
        assert_eq!(state.present()[4], 1.0);
        assert_eq!(state.present()[5], 0.75);
        assert_eq!(state.present()[6], 0.75);
        assert_eq!(state.present()[7], -0.25);
    }

    #[test]
    fn non_finite_is_rejected_without_mutation() {
        let (mut state, grid) = blank(10);
        let before = state.clone();
        assert!(matches!(
            inject(&mut state, &grid, f64::NAN, 1.0),
            Err(InjectionError::NonFinite { .. })
        ));
        assert!(matches!(
            inject(&mut state, &grid, 1.0, f64::INFINITY),
            Err(InjectionError::NonFinite { .. })
        ));
        assert_eq!(state, before);
    }

    #[test]
    fn mismatched_grid_is_rejected() {
        let mut state = FieldState::zeros(5);
        let grid = Grid1D::new(10, 1.0);
        assert_eq!(
            inject(&mut state, &grid, 1.0, 1.0),
            Err(InjectionError::GridMismatch {
                state_points: 5,
                grid_points: 11,
            })
        );
    }

    #[test]
    fn endpoint_injection_is_cleared_by_boundaries() {
        let mut init = initialize(tiny_params()).unwrap();
        inject(&mut init.state, &init.grid, 0.0, 5.0).unwrap();
        assert_eq!(init.state.present()[0], 5.0);
        step(&mut init.state, 0.5);
        apply_boundaries(&mut init.state);
        assert_eq!(init.state.present()[0], 0.0);
        assert_eq!(init.state.past()[0], 0.0);
    }

    proptest! {
        #[test]
        fn zero_amplitude_is_a_no_op(
            x in -10.0f64..30.0,
            steps in 0usize..20,
        ) {
            let mut init = initialize(tiny_params()).unwrap();
            for _ in 0..steps {
                step(&mut init.state, 0.5);
                apply_boundaries(&mut init.state);
            }
            let before = init.state.clone();
            inject(&mut init.state, &init.grid, x, 0.0).unwrap();
            assert_bits_eq(&init.state, &before);
        }
    }
}
