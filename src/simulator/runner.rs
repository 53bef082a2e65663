//! Config-driven simulation runner.
//!
//! Small schedules run on one ChaCha8 stream. With more than one worker,
//! each batch gets its own seed drawn from the master stream and is split
//! across threads.

use super::batch::run_batch_parallel;
use super::config::SimConfig;
use super::report::SimReport;
use super::series::{run_series, ConvergenceSeries};
use crate::error::SimResult;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

/// Run the configured schedule and return a report.
pub fn run_simulation(config: &SimConfig) -> SimResult<SimReport> {
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let started = std::time::Instant::now();
    let series = if config.workers > 1 {
        run_parallel_series(&config.batch_sizes, config.workers, &mut rng)?
    } else {
        run_series(&config.batch_sizes, &mut rng)?
    };
    let elapsed_ms = started.elapsed().as_millis() as u64;

    info!(
        batches = series.len(),
        workers = config.workers,
        elapsed_ms,
        "simulation finished"
    );

    Ok(SimReport::new(series, config, elapsed_ms))
}

fn run_parallel_series(
    batch_sizes: &[i64],
    workers: usize,
    rng: &mut ChaCha8Rng,
) -> SimResult<ConvergenceSeries> {
    let mut series = ConvergenceSeries::new();
    for &size in batch_sizes {
        let batch_seed: u64 = rng.gen();
        series.push(run_batch_parallel(size, batch_seed, workers)?);
    }
    Ok(series)
}
