//! Homogeneous Dirichlet boundary condition.

use ripple_core::FieldState;

/// Pin the field to zero at both domain endpoints in every time level.
///
/// Must run after every [`step`](crate::step) and before the state is
/// read by anything else. Idempotent.
pub fn apply_boundaries(state: &mut FieldState) {
    let last = state.grid_count();
    state.set_point(0, 0.0);
    state.set_point(last, 0.0);
}
