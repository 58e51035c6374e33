//! Three-time-level field storage.

use std::fmt;

/// Role of a stored time level in the leapfrog scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimeLevel {
    /// Values at `t - dt`.
    Past,
    /// Values at `t`. This is the level exposed for rendering.
    Present,
    /// Values at `t + dt`, written by the stepper before rotation.
    Future,
}

impl TimeLevel {
    /// All levels in storage order.
    pub const ALL: [TimeLevel; 3] = [TimeLevel::Past, TimeLevel::Present, TimeLevel::Future];

    fn index(self) -> usize {
        match self {
            Self::Past => 0,
            Self::Present => 1,
            Self::Future => 2,
        }
    }
}

impl fmt::Display for TimeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Past => write!(f, "past"),
            Self::Present => write!(f, "present"),
            Self::Future => write!(f, "future"),
        }
    }
}

/// Field values at every grid point for the past, present and future
/// time levels.
///
/// Each level is stored contiguously so the present field can be handed
/// to a renderer as a plain slice. The number of points is fixed for the
/// lifetime of the value; a different grid requires a new `FieldState`.
///
/// # Examples
///
/// ```
/// use ripple_core::{FieldState, TimeLevel};
///
/// let mut state = FieldState::zeros(5);
/// state.level_mut(TimeLevel::Present)[2] = 1.0;
/// assert_eq!(state.present(), &[0.0, 0.0, 1.0, 0.0, 0.0]);
/// assert_eq!(state.grid_count(), 4);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FieldState {
    levels: [Vec<f64>; 3],
}

impl FieldState {
    /// Allocate a state with `points` grid points, all levels zero.
    ///
    /// # Panics
    ///
    /// Panics if `points` is zero.
    pub fn zeros(points: usize) -> Self {
        assert!(points > 0, "FieldState needs at least one point");
        Self {
            levels: [vec![0.0; points], vec![0.0; points], vec![0.0; points]],
        }
    }

    /// Number of grid points (`N + 1`).
    pub fn len(&self) -> usize {
        self.levels[0].len()
    }

    /// Always returns `false`; [`zeros`](Self::zeros) rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Index of the last grid point, `N`.
    pub fn grid_count(&self) -> usize {
        self.len() - 1
    }

    /// Values of one time level.
    pub fn level(&self, level: TimeLevel) -> &[f64] {
        &self.levels[level.index()]
    }

    /// Mutable values of one time level.
    pub fn level_mut(&mut self, level: TimeLevel) -> &mut [f64] {
        &mut self.levels[level.index()]
    }

    /// Values at `t - dt`.
    pub fn past(&self) -> &[f64] {
        self.level(TimeLevel::Past)
    }

    /// Values at `t`.
    pub fn present(&self) -> &[f64] {
        self.level(TimeLevel::Present)
    }

    /// Values last written by the stepper.
    pub fn future(&self) -> &[f64] {
        self.level(TimeLevel::Future)
    }

    /// Borrow the past and present levels immutably and the future level
    /// mutably, for computing the next time level in one pass.
    pub fn split_for_step(&mut self) -> (&[f64], &[f64], &mut [f64]) {
        let [past, present, future] = &mut self.levels;
        (past.as_slice(), present.as_slice(), future.as_mut_slice())
    }

    /// Shift time forward: `past <- present`, `present <- future`.
    ///
    /// The old past values are discarded. The future level keeps its
    /// contents, so it equals the new present afterwards.
    pub fn rotate(&mut self) {
        let [past, present, future] = &mut self.levels;
        past.copy_from_slice(present.as_slice());
        present.copy_from_slice(future.as_slice());
    }

    /// Set every level at grid point `index` to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn set_point(&mut self, index: usize, value: f64) {
        for level in &mut self.levels {
            level[index] = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_has_requested_size_in_every_level() {
        let state = FieldState::zeros(7);
        assert_eq!(state.len(), 7);
        assert_eq!(state.grid_count(), 6);
        for level in TimeLevel::ALL {
            assert_eq!(state.level(level).len(), 7);
            assert!(state.level(level).iter().all(|&v| v == 0.0));
        }
    }

    #[test]
    #[should_panic(expected = "at least one point")]
    fn zeros_rejects_empty() {
        let _ = FieldState::zeros(0);
    }

    #[test]
    fn rotate_shifts_levels() {
        let mut state = FieldState::zeros(3);
        state.level_mut(TimeLevel::Past).copy_from_slice(&[1.0, 1.0, 1.0]);
        state.level_mut(TimeLevel::Present).copy_from_slice(&[2.0, 2.0, 2.0]);
        state.level_mut(TimeLevel::Future).copy_from_slice(&[3.0, 3.0, 3.0]);

        state.rotate();

        assert_eq!(state.past(), &[2.0, 2.0, 2.0]);
        assert_eq!(state.present(), &[3.0, 3.0, 3.0]);
        assert_eq!(state.future(), &[3.0, 3.0, 3.0]);
    }

    #[test]
    fn split_for_step_writes_only_future() {
        let mut state = FieldState::zeros(3);
        state.level_mut(TimeLevel::Present)[1] = 4.0;
        {
            let (past, present, future) = state.split_for_step();
            future[1] = present[1] - past[1];
        }
        assert_eq!(state.future(), &[0.0, 4.0, 0.0]);
        assert_eq!(state.present(), &[0.0, 4.0, 0.0]);
        assert_eq!(state.past(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn set_point_touches_all_levels() {
        let mut state = FieldState::zeros(4);
        state.set_point(3, 9.0);
        for level in TimeLevel::ALL {
            assert_eq!(state.level(level)[3], 9.0, "{level} level");
        }
    }
}
