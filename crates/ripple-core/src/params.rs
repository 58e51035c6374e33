//! Physical and numerical parameters for a simulation run.
//!
//! [`Parameters`] holds the user-facing constants (domain length, number of
//! cells, Courant number, wave speed, peak amplitude) and derives the grid
//! spacing `dx` and timestep `dt` from them.

use crate::error::ParameterError;

/// Physical and numerical constants of a wave simulation.
///
/// The grid has `grid_count + 1` points spaced `dx = domain_length /
/// grid_count` apart. The timestep follows from the Courant number:
/// `dt = (courant_number / wave_speed) * dx`.
///
/// Only the Courant number is mutable after construction, via
/// [`set_courant_number`](Parameters::set_courant_number). Every other
/// change requires building a new `Parameters` and re-initializing.
///
/// # Examples
///
/// ```
/// use ripple_core::Parameters;
///
/// let p = Parameters::builder()
///     .grid_count(4)
///     .domain_length(4.0)
///     .courant_number(0.5)
///     .build()
///     .unwrap();
///
/// assert_eq!(p.dx(), 1.0);
/// assert_eq!(p.dt(), 0.5);
/// assert_eq!(p.point_count(), 5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Parameters {
    grid_count: usize,
    domain_length: f64,
    courant_number: f64,
    peak_amplitude: f64,
    wave_speed: f64,
}

/// Builder for [`Parameters`].
///
/// Defaults match a small interactive demo: 200 cells over a length of
/// 100, Courant number 0.1, unit peak and unit wave speed.
#[derive(Clone, Debug)]
pub struct ParametersBuilder {
    grid_count: usize,
    domain_length: f64,
    courant_number: f64,
    peak_amplitude: f64,
    wave_speed: f64,
}

impl Parameters {
    /// Default number of cells.
    pub const DEFAULT_GRID_COUNT: usize = 200;
    /// Default domain length.
    pub const DEFAULT_DOMAIN_LENGTH: f64 = 100.0;
    /// Default Courant number.
    pub const DEFAULT_COURANT_NUMBER: f64 = 0.1;
    /// Default amplitude of the initial peak.
    pub const DEFAULT_PEAK_AMPLITUDE: f64 = 1.0;
    /// Default wave speed.
    pub const DEFAULT_WAVE_SPEED: f64 = 1.0;

    /// Create validated parameters, in the argument order `(N, L, α, peak, c)`.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if `grid_count < 2`, if
    /// `domain_length`, `courant_number` or `wave_speed` is not finite and
    /// positive, if `peak_amplitude` is not finite, or if the derived `dx`
    /// or `dt` is not finite and positive.
    pub fn new(
        grid_count: usize,
        domain_length: f64,
        courant_number: f64,
        peak_amplitude: f64,
        wave_speed: f64,
    ) -> Result<Self, ParameterError> {
        let params = Self {
            grid_count,
            domain_length,
            courant_number,
            peak_amplitude,
            wave_speed,
        };
        params.validate()?;
        Ok(params)
    }

    /// Start building parameters from the defaults.
    pub fn builder() -> ParametersBuilder {
        ParametersBuilder {
            grid_count: Self::DEFAULT_GRID_COUNT,
            domain_length: Self::DEFAULT_DOMAIN_LENGTH,
            courant_number: Self::DEFAULT_COURANT_NUMBER,
            peak_amplitude: Self::DEFAULT_PEAK_AMPLITUDE,
            wave_speed: Self::DEFAULT_WAVE_SPEED,
        }
    }

    /// Check every construction-time invariant.
    ///
    /// The Courant number is validated here but not by
    /// [`set_courant_number`](Self::set_courant_number).
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.grid_count < 2 {
            return Err(ParameterError::TooFewCells {
                grid_count: self.grid_count,
            });
        }
        if !(self.domain_length.is_finite() && self.domain_length > 0.0) {
            return Err(ParameterError::NonPositiveLength {
                value: self.domain_length,
            });
        }
        if !(self.courant_number.is_finite() && self.courant_number > 0.0) {
            return Err(ParameterError::NonPositiveCourant {
                value: self.courant_number,
            });
        }
        if !(self.wave_speed.is_finite() && self.wave_speed > 0.0) {
            return Err(ParameterError::NonPositiveWaveSpeed {
                value: self.wave_speed,
            });
        }
        if !self.peak_amplitude.is_finite() {
            return Err(ParameterError::NonFinitePeak {
                value: self.peak_amplitude,
            });
        }
        let (dx, dt) = (self.dx(), self.dt());
        if !(dx.is_finite() && dx > 0.0 && dt.is_finite() && dt > 0.0) {
            return Err(ParameterError::DegenerateSpacing { dx, dt });
        }
        Ok(())
    }

    /// Number of cells `N`.
    pub fn grid_count(&self) -> usize {
        self.grid_count
    }

    /// Number of grid points, `N + 1`.
    pub fn point_count(&self) -> usize {
        self.grid_count + 1
    }

    /// Domain length `L`.
    pub fn domain_length(&self) -> f64 {
        self.domain_length
    }

    /// Courant number `α` used by the next step.
    pub fn courant_number(&self) -> f64 {
        self.courant_number
    }

    /// Amplitude of the initial peak.
    pub fn peak_amplitude(&self) -> f64 {
        self.peak_amplitude
    }

    /// Wave speed `c`.
    pub fn wave_speed(&self) -> f64 {
        self.wave_speed
    }

    /// Grid spacing `dx = L / N`.
    pub fn dx(&self) -> f64 {
        self.domain_length / self.grid_count as f64
    }

    /// Timestep `dt = (α / c) * dx`, derived from the current Courant number.
    pub fn dt(&self) -> f64 {
        self.courant_number / self.wave_speed * self.dx()
    }

    /// Whether the current Courant number satisfies the CFL condition `α <= 1`.
    ///
    /// Informational only. Nothing in the solver refuses to step an
    /// unstable configuration.
    pub fn is_cfl_stable(&self) -> bool {
        self.courant_number <= 1.0
    }

    /// Replace the Courant number used by subsequent steps.
    ///
    /// No validation is performed: values above 1 are accepted and drive
    /// the scheme into its unstable regime. Already computed time levels
    /// are unaffected.
    pub fn set_courant_number(&mut self, courant_number: f64) {
        self.courant_number = courant_number;
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            grid_count: Self::DEFAULT_GRID_COUNT,
            domain_length: Self::DEFAULT_DOMAIN_LENGTH,
            courant_number: Self::DEFAULT_COURANT_NUMBER,
            peak_amplitude: Self::DEFAULT_PEAK_AMPLITUDE,
            wave_speed: Self::DEFAULT_WAVE_SPEED,
        }
    }
}

impl ParametersBuilder {
    /// Set the number of cells `N` (default: 200). Must be >= 2.
    pub fn grid_count(mut self, grid_count: usize) -> Self {
        self.grid_count = grid_count;
        self
    }

    /// Set the domain length `L` (default: 100.0). Must be > 0.
    pub fn domain_length(mut self, length: f64) -> Self {
        self.domain_length = length;
        self
    }

    /// Set the Courant number `α` (default: 0.1). Must be > 0.
    pub fn courant_number(mut self, alpha: f64) -> Self {
        self.courant_number = alpha;
        self
    }

    /// Set the amplitude of the initial peak (default: 1.0).
    pub fn peak_amplitude(mut self, peak: f64) -> Self {
        self.peak_amplitude = peak;
        self
    }

    /// Set the wave speed `c` (default: 1.0). Must be > 0.
    pub fn wave_speed(mut self, speed: f64) -> Self {
        self.wave_speed = speed;
        self
    }

    /// Build the parameters, validating all configuration.
    ///
    /// # Errors
    ///
    /// See [`Parameters::new`].
    pub fn build(self) -> Result<Parameters, ParameterError> {
        Parameters::new(
            self.grid_count,
            self.domain_length,
            self.courant_number,
            self.peak_amplitude,
            self.wave_speed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn defaults_are_valid() {
        let p = Parameters::default();
        assert!(p.validate().is_ok());
        assert_eq!(p, Parameters::builder().build().unwrap());
        assert_eq!(p.dx(), 0.5);
        assert!((p.dt() - 0.05).abs() < 1e-15);
    }

    #[test]
    fn derived_spacing_and_timestep() {
        let p = Parameters::new(4, 4.0, 0.5, 1.0, 1.0).unwrap();
        assert_eq!(p.dx(), 1.0);
        assert_eq!(p.dt(), 0.5);

        let p = Parameters::new(10, 5.0, 0.8, 1.0, 2.0).unwrap();
        assert_eq!(p.dx(), 0.5);
        assert!((p.dt() - 0.2).abs() < 1e-15);
    }

    #[test]
    fn rejects_too_few_cells() {
        for n in [0, 1] {
            let result = Parameters::builder().grid_count(n).build();
            assert_eq!(result, Err(ParameterError::TooFewCells { grid_count: n }));
        }
        assert!(Parameters::builder().grid_count(2).build().is_ok());
    }

    #[test]
    fn rejects_non_positive_length() {
        for l in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = Parameters::builder().domain_length(l).build();
            assert!(
                matches!(result, Err(ParameterError::NonPositiveLength { .. })),
                "length {l} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_non_positive_courant() {
        for a in [0.0, -0.1, f64::NAN] {
            let result = Parameters::builder().courant_number(a).build();
            assert!(matches!(
                result,
                Err(ParameterError::NonPositiveCourant { .. })
            ));
        }
    }

    #[test]
    fn rejects_non_positive_wave_speed() {
        for c in [0.0, -2.0, f64::NEG_INFINITY] {
            let result = Parameters::builder().wave_speed(c).build();
            assert!(matches!(
                result,
                Err(ParameterError::NonPositiveWaveSpeed { .. })
            ));
        }
    }

    #[test]
    fn rejects_nan_peak_but_accepts_negative() {
        assert!(matches!(
            Parameters::builder().peak_amplitude(f64::NAN).build(),
            Err(ParameterError::NonFinitePeak { .. })
        ));
        assert!(Parameters::builder().peak_amplitude(-3.0).build().is_ok());
    }

    #[test]
    fn rejects_timestep_that_underflows() {
        let result = Parameters::new(2, 1.0, 1e-300, 1.0, 1e300);
        assert_eq!(
            result,
            Err(ParameterError::DegenerateSpacing { dx: 0.5, dt: 0.0 })
        );
    }

    #[test]
    fn rejects_timestep_that_overflows() {
        let result = Parameters::new(2, 1e300, 1e300, 1.0, 1e-300);
        assert!(matches!(
            result,
            Err(ParameterError::DegenerateSpacing { dt, .. }) if dt.is_infinite()
        ));
    }

    #[test]
    fn rejects_spacing_that_underflows() {
        let result = Parameters::new(usize::MAX, 5e-324, 0.5, 1.0, 1.0);
        assert!(matches!(
            result,
            Err(ParameterError::DegenerateSpacing { dx, .. }) if dx == 0.0
        ));
    }

    #[test]
    fn courant_update_is_unvalidated_and_rederives_dt() {
        let mut p = Parameters::new(4, 4.0, 0.5, 1.0, 1.0).unwrap();
        assert!(p.is_cfl_stable());

        p.set_courant_number(1.5);
        assert_eq!(p.courant_number(), 1.5);
        assert_eq!(p.dt(), 1.5);
        assert!(!p.is_cfl_stable());

        // Geometry is untouched.
        assert_eq!(p.dx(), 1.0);
        assert_eq!(p.grid_count(), 4);
    }

    proptest! {
        #[test]
        fn valid_inputs_give_positive_spacing(
            n in 2usize..10_000,
            l in 1e-3f64..1e6,
            alpha in 1e-3f64..2.0,
            c in 1e-3f64..1e3,
        ) {
            let p = Parameters::new(n, l, alpha, 1.0, c).unwrap();
            prop_assert!(p.dx() > 0.0);
            prop_assert!(p.dt() > 0.0);
            prop_assert_eq!(p.point_count(), n + 1);
        }
    }
}
