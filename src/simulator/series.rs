//! Convergence series: one batch per requested size, in request order.

use super::batch::{run_batch, BatchSummary};
use crate::constants::{THEORETICAL_STAY_RATE, THEORETICAL_SWITCH_RATE};
use crate::error::SimResult;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Ordered batch summaries, one per requested batch size.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceSeries {
    summaries: Vec<BatchSummary>,
}

impl ConvergenceSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, summary: BatchSummary) {
        self.summaries.push(summary);
    }

    pub fn summaries(&self) -> &[BatchSummary] {
        &self.summaries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BatchSummary> {
        self.summaries.iter()
    }

    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    pub fn total_trials(&self) -> u64 {
        self.summaries.iter().map(|s| s.batch_size).sum()
    }

    /// Absolute distance of the largest batch's rates from theory, in
    /// percentage points, as `(stay, switch)`.
    pub fn final_deviation(&self) -> Option<(f64, f64)> {
        self.summaries
            .iter()
            .max_by_key(|s| s.batch_size)
            .map(|s| {
                (
                    (s.stay_win_rate - THEORETICAL_STAY_RATE).abs(),
                    (s.switch_win_rate - THEORETICAL_SWITCH_RATE).abs(),
                )
            })
    }
}

impl<'a> IntoIterator for &'a ConvergenceSeries {
    type Item = &'a BatchSummary;
    type IntoIter = std::slice::Iter<'a, BatchSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.summaries.iter()
    }
}

/// Lazily runs one batch per size. Stops after the first error.
///
/// Owns its generator; pass `&mut rng` to borrow one instead.
#[derive(Debug)]
pub struct SeriesBatches<R: Rng> {
    sizes: std::vec::IntoIter<i64>,
    rng: R,
    failed: bool,
}

impl<R: Rng> SeriesBatches<R> {
    /// Batch sizes not yet run.
    pub fn remaining(&self) -> usize {
        if self.failed {
            0
        } else {
            self.sizes.len()
        }
    }

    /// The size the next call to `next` will run.
    pub fn peek_size(&self) -> Option<i64> {
        if self.failed {
            None
        } else {
            self.sizes.as_slice().first().copied()
        }
    }
}

impl<R: Rng> Iterator for SeriesBatches<R> {
    type Item = SimResult<BatchSummary>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let size = self.sizes.next()?;
        let result = run_batch(size, &mut self.rng);
        if let Err(ref e) = result {
            warn!(batch_size = size, error = %e, "series aborted");
            self.failed = true;
        }
        Some(result)
    }
}

/// Iterate over the batches of a series, running each when requested.
pub fn series_batches<R: Rng>(batch_sizes: &[i64], rng: R) -> SeriesBatches<R> {
    SeriesBatches {
        sizes: batch_sizes.to_vec().into_iter(),
        rng,
        failed: false,
    }
}

/// Run every batch in order. The first invalid size aborts the series.
pub fn run_series<R: Rng>(batch_sizes: &[i64], rng: &mut R) -> SimResult<ConvergenceSeries> {
    let mut series = ConvergenceSeries::new();
    for summary in series_batches(batch_sizes, rng) {
        series.push(summary?);
    }
    info!(
        batches = series.len(),
        total_trials = series.total_trials(),
        "series complete"
    );
    Ok(series)
}
