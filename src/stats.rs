//! Running totals averaged over the repetitions of one benchmark case.

use std::time::Duration;

#[derive(Debug, Clone, Copy, Default)]
pub struct TimingAccumulator {
    total: Duration,
}

impl TimingAccumulator {
    pub fn add(&mut self, elapsed: Duration) {
        self.total += elapsed;
    }

    /// Mean duration per repetition. `repetitions` must be non-zero.
    pub fn mean(&self, repetitions: u32) -> Duration {
        self.total / repetitions
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorAccumulator {
    total: f64,
}

impl ErrorAccumulator {
    pub fn add(&mut self, error: f64) {
        self.total += error;
    }

    pub fn mean(&self, repetitions: u32) -> f64 {
        self.total / f64::from(repetitions)
    }
}

pub fn as_micros_f64(duration: Duration) -> f64 {
    duration.as_nanos() as f64 / 1.0e3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_repetition_mean_is_the_measurement() {
        let measured = Duration::from_nanos(123_457);
        let mut timing = TimingAccumulator::default();
        timing.add(measured);
        assert_eq!(timing.mean(1), measured);

        let mut error = ErrorAccumulator::default();
        error.add(0.1);
        assert_eq!(error.mean(1), 0.1);
    }

    #[test]
    fn test_mean_over_repetitions() {
        let mut timing = TimingAccumulator::default();
        for micros in [10, 20, 30, 40] {
            timing.add(Duration::from_micros(micros));
        }
        assert_eq!(timing.mean(4), Duration::from_micros(25));

        let mut error = ErrorAccumulator::default();
        error.add(1.0);
        error.add(2.0);
        assert_eq!(error.mean(2), 1.5);
    }

    #[test]
    fn test_micros_conversion() {
        assert_eq!(as_micros_f64(Duration::from_micros(250)), 250.0);
    }
}
