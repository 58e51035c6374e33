//! Initial condition: a localized peak at rest.

use ripple_core::{FieldState, Grid1D, ParameterError, Parameters, TimeLevel};

/// A freshly initialized simulation: parameters, grid and field state.
///
/// Produced by [`initialize`]. Owned wholesale by the caller and replaced
/// wholesale on reset.
#[derive(Clone, Debug, PartialEq)]
pub struct Initialized {
    /// The validated parameters the state was built from.
    pub params: Parameters,
    /// Point positions `x_i = i * dx`.
    pub grid: Grid1D,
    /// Field values with the initial peak in the past and present levels.
    pub state: FieldState,
}

impl Initialized {
    /// Grid spacing.
    pub fn dx(&self) -> f64 {
        self.params.dx()
    }

    /// Timestep for the current Courant number.
    pub fn dt(&self) -> f64 {
        self.params.dt()
    }
}

/// Build the initial field state for `params`.
///
/// All levels start at zero. A peak of `params.peak_amplitude()` is set
/// on the three points centered on `N / 2` in both the past and present
/// levels, so the field starts at rest. The window is clipped to the
/// interior points, which only matters for `N < 4` where it would
/// otherwise reach an endpoint.
///
/// # Errors
///
/// Returns a [`ParameterError`] if `params` fails validation. No state is
/// allocated in that case.
///
/// # Examples
///
/// ```
/// use ripple_core::Parameters;
/// use ripple_solver::initialize;
///
/// let params = Parameters::new(4, 4.0, 0.5, 1.0, 1.0).unwrap();
/// let init = initialize(params).unwrap();
/// assert_eq!(init.state.present(), &[0.0, 1.0, 1.0, 1.0, 0.0]);
/// assert_eq!(init.state.past(), init.state.present());
/// assert_eq!(init.dx(), 1.0);
/// ```
pub fn initialize(params: Parameters) -> Result<Initialized, ParameterError> {
    params.validate()?;

    let n = params.grid_count();
    let grid = Grid1D::new(n, params.dx());
    let mut state = FieldState::zeros(params.point_count());

    let center = n / 2;
    let lo = center.saturating_sub(1).max(1);
    let hi = (center + 1).min(n - 1);
    let peak = params.peak_amplitude();
    for level in [TimeLevel::Present, TimeLevel::Past] {
        state.level_mut(level)[lo..=hi].fill(peak);
    }

    Ok(Initialized {
        params,
        grid,
        state,
    })
}
