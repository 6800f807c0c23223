use std::io::{self, Write};
use std::process::ExitCode;

use env_logger::Env;
use log::{error, info};
use posit_bench::{
    BenchmarkResult, Posit16VsFloat32, Posit32VsFloat32, SweepConfig, run_sweep, simd,
};

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Benchmark aborted: {}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> BenchmarkResult<()> {
    let config = SweepConfig::default();
    config.validate()?;

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut diagnostics = stderr.lock();

    simd::write_report(&mut out, &simd::detected_extensions())?;

    let three =
        run_sweep::<Posit32VsFloat32, _, _>(&config.three_precision, &mut out, &mut diagnostics)?;
    let two =
        run_sweep::<Posit16VsFloat32, _, _>(&config.two_precision, &mut out, &mut diagnostics)?;
    out.flush()?;

    info!(
        "All sweeps finished: {} completed, {} skipped",
        three.completed + two.completed,
        three.skipped + two.skipped
    );
    Ok(())
}
