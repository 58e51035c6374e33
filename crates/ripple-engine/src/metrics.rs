//! Per-tick metrics for a simulation.
//!
//! [`StepMetrics`] captures timing and field statistics for one advance.
//! The solver never checks the CFL condition, so `max_abs` is how a
//! driver observes an unstable run growing.

/// Timing and field statistics collected during a single advance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepMetrics {
    /// Wall-clock time for the step and boundary pass, in microseconds.
    pub total_us: u64,
    /// Courant number used for the step.
    pub courant_number: f64,
    /// Largest absolute value of the present field after the step.
    pub max_abs: f64,
    /// Time levels advanced since the last reset, including this one.
    pub step_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.courant_number, 0.0);
        assert_eq!(m.max_abs, 0.0);
        assert_eq!(m.step_count, 0);
    }
}
