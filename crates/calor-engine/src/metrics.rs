//! Per-step metrics for the simulation drivers.

use calor_space::Grid;

/// Timing and field statistics collected for a single step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepMetrics {
    /// Step number just completed, starting at 1.
    pub step: u64,
    /// Simulated time after this step, in seconds.
    pub sim_time: f64,
    /// Wall-clock time for the step, in microseconds.
    pub total_us: u64,
    /// Lowest cell temperature after the step.
    pub min_temperature: f64,
    /// Highest cell temperature after the step.
    pub max_temperature: f64,
    /// Mean cell temperature after the step.
    pub mean_temperature: f64,
}

impl StepMetrics {
    pub(crate) fn collect(step: u64, sim_time: f64, total_us: u64, grid: &Grid) -> Self {
        let s = grid.summary();
        Self {
            step,
            sim_time,
            total_us,
            min_temperature: s.min,
            max_temperature: s.max,
            mean_temperature: s.mean,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.step, 0);
        assert_eq!(m.total_us, 0);
        assert_eq!(m.sim_time, 0.0);
    }

    #[test]
    fn collect_reads_field_summary() {
        let grid = Grid::from_values(2, 1, vec![10.0, 30.0]).unwrap();
        let m = StepMetrics::collect(3, 0.03, 12, &grid);
        assert_eq!(m.step, 3);
        assert_eq!(m.min_temperature, 10.0);
        assert_eq!(m.max_temperature, 30.0);
        assert_eq!(m.mean_temperature, 20.0);
    }
}
