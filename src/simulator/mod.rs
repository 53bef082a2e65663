//! Monte Carlo batch simulator.
//!
//! Runs batches of independent trials, tallies wins for both strategies and
//! collects one summary per batch size so the win rates can be watched
//! converging on 1/3 (stay) and 2/3 (switch).

mod batch;
mod config;
mod report;
mod runner;
mod series;

pub use batch::{run_batch, run_batch_parallel, validate_batch_size, BatchSummary, Tally};
pub use config::SimConfig;
pub use report::SimReport;
pub use runner::run_simulation;
pub use series::{run_series, series_batches, ConvergenceSeries, SeriesBatches};
