//! Error types for benchmark operations.

use thiserror::Error;

/// Errors that can occur while validating or running a benchmark.
#[derive(Error, Debug)]
pub enum BenchmarkError {
    #[error("Invalid number of repetitions: {value}. Must be greater than 0")]
    InvalidRepetitions { value: u32 },

    #[error("Invalid matrix size {rows}x{cols}: dimensions must be greater than 0")]
    EmptyMatrix { rows: usize, cols: usize },

    #[error("Matrix size {rows}x{cols} is not square: operands cannot be multiplied")]
    NotSquare { rows: usize, cols: usize },

    #[error("Float result has NaN or Inf at size {rows}x{cols}")]
    NonFiniteComparison { rows: usize, cols: usize },

    #[error("Posit input matrices are invalid at size {rows}x{cols}")]
    NonFinitePositInput { rows: usize, cols: usize },

    #[error("Sweep validation error for field '{field}': {message}")]
    InvalidSweep { field: &'static str, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BenchmarkError {
    /// True for failures detected in the computed values rather than in the inputs.
    /// A sweep skips the offending case and carries on.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            BenchmarkError::NonFiniteComparison { .. } | BenchmarkError::NonFinitePositInput { .. }
        )
    }
}

pub type BenchmarkResult<T> = Result<T, BenchmarkError>;
