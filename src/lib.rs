pub mod benchmark;
pub mod config;
pub mod error;
pub mod matrix;
pub mod number_representations;
pub mod precision;
pub mod simd;
pub mod stats;
pub mod sweep;

pub use benchmark::{BenchmarkCase, BenchmarkReport, run_benchmark};
pub use config::{Sweep, SweepConfig};
pub use error::{BenchmarkError, BenchmarkResult};
pub use number_representations::BenchScalar;
pub use precision::{Posit16VsFloat32, Posit32VsFloat32, PrecisionSet};
pub use sweep::{SweepSummary, run_sweep};
