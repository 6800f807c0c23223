//! Compiled-in sweep parameters.

use crate::benchmark::BenchmarkCase;
use crate::error::{BenchmarkError, BenchmarkResult};

/// Square matrix sizes crossed with fill value pairs, all run with one repetition count.
#[derive(Debug, Clone, PartialEq)]
pub struct Sweep {
    pub sizes: Vec<usize>,
    pub repetitions: u32,
    pub value_pairs: Vec<(f64, f64)>,
}

impl Sweep {
    /// The default sizes 10, 20, .. 50 and value pairs covering near-unity,
    /// near-zero and large magnitudes.
    pub fn standard(repetitions: u32) -> Self {
        Self {
            sizes: (10..=50).step_by(10).collect(),
            repetitions,
            value_pairs: vec![(1.0, 2.0), (1.00001, 0.99999), (1e-5, 2e-5), (1e4, 1e4)],
        }
    }

    /// Size-major: every value pair for the first size, then the next size.
    pub fn cases(&self) -> impl Iterator<Item = BenchmarkCase> + '_ {
        self.sizes.iter().flat_map(move |&size| {
            self.value_pairs.iter().map(move |&(value_a, value_b)| {
                BenchmarkCase::new(size, size, self.repetitions, value_a, value_b)
            })
        })
    }

    pub fn validate(&self) -> BenchmarkResult<()> {
        if self.repetitions == 0 {
            return Err(BenchmarkError::InvalidRepetitions {
                value: self.repetitions,
            });
        }
        if self.sizes.is_empty() {
            return Err(BenchmarkError::InvalidSweep {
                field: "sizes",
                message: "At least one matrix size is required".to_string(),
            });
        }
        if self.sizes.contains(&0) {
            return Err(BenchmarkError::InvalidSweep {
                field: "sizes",
                message: "Matrix sizes must be greater than 0".to_string(),
            });
        }
        if self.value_pairs.is_empty() {
            return Err(BenchmarkError::InvalidSweep {
                field: "value_pairs",
                message: "At least one pair of fill values is required".to_string(),
            });
        }
        Ok(())
    }
}

/// One sweep per precision set.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    /// posit32 vs f32 with an f64 reference.
    pub three_precision: Sweep,
    /// posit16 vs f32.
    pub two_precision: Sweep,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            three_precision: Sweep::standard(5),
            two_precision: Sweep::standard(2),
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> BenchmarkResult<()> {
        self.three_precision.validate()?;
        self.two_precision.validate()
    }
}
