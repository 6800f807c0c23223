//! Runs every case of a sweep for one precision set.

use std::io::Write;

use log::{info, warn};

use crate::benchmark::run_benchmark;
use crate::config::Sweep;
use crate::error::BenchmarkResult;
use crate::precision::PrecisionSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepSummary {
    pub completed: usize,
    pub skipped: usize,
}

/// Writes a heading and one report block per completed case to `out`.
///
/// Cases that produce non-finite values get a one-line diagnostic on
/// `diagnostics` and are skipped. Any other error ends the sweep.
pub fn run_sweep<S, O, E>(
    sweep: &Sweep,
    out: &mut O,
    diagnostics: &mut E,
) -> BenchmarkResult<SweepSummary>
where
    S: PrecisionSet,
    O: Write,
    E: Write,
{
    sweep.validate()?;
    info!("Starting sweep: {}", S::label());
    writeln!(out, "{}", S::label())?;

    let mut summary = SweepSummary::default();
    for case in sweep.cases() {
        match run_benchmark::<S>(&case) {
            Ok(report) => {
                write!(out, "{}", report)?;
                summary.completed += 1;
            }
            Err(e) if e.is_numeric() => {
                warn!(
                    "Skipping {}x{} with values ({}, {})",
                    case.rows, case.cols, case.value_a, case.value_b
                );
                writeln!(diagnostics, "{}", e)?;
                summary.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    info!(
        "Finished sweep {}: {} completed, {} skipped",
        S::label(),
        summary.completed,
        summary.skipped
    );
    Ok(summary)
}
