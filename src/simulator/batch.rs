//! Batch aggregation: many independent trials folded into one summary.

use crate::error::{SimError, SimResult};
use crate::trial::run_trial;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};
use tracing::debug;

/// Win counts for a run of trials.
///
/// Tallies combine with plain addition, so partial tallies from separate
/// workers can be merged in any order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub trials: u64,
    pub stay_wins: u64,
    pub switch_wins: u64,
}

impl Tally {
    pub fn record(&mut self, stay_won: bool, switch_won: bool) {
        self.trials += 1;
        self.stay_wins += stay_won as u64;
        self.switch_wins += switch_won as u64;
    }

    /// Run `trials` games from `rng` and count the wins.
    pub fn collect<R: Rng>(trials: u64, rng: &mut R) -> Self {
        let mut tally = Self::default();
        for _ in 0..trials {
            let (stay_won, switch_won) = run_trial(rng);
            tally.record(stay_won, switch_won);
        }
        tally
    }
}

impl Add for Tally {
    type Output = Tally;

    fn add(self, other: Tally) -> Tally {
        Tally {
            trials: self.trials + other.trials,
            stay_wins: self.stay_wins + other.stay_wins,
            switch_wins: self.switch_wins + other.switch_wins,
        }
    }
}

impl AddAssign for Tally {
    fn add_assign(&mut self, other: Tally) {
        *self = *self + other;
    }
}

/// Strategy performance over one batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub batch_size: u64,
    pub stay_wins: u64,
    pub switch_wins: u64,
    /// Percentage in [0, 100].
    pub stay_win_rate: f64,
    /// Percentage in [0, 100].
    pub switch_win_rate: f64,
}

impl BatchSummary {
    /// Build a summary from a non-empty tally.
    pub fn from_tally(tally: Tally) -> SimResult<Self> {
        if tally.trials == 0 {
            return Err(SimError::InvalidArgument { batch_size: 0 });
        }
        let n = tally.trials as f64;
        Ok(Self {
            batch_size: tally.trials,
            stay_wins: tally.stay_wins,
            switch_wins: tally.switch_wins,
            stay_win_rate: tally.stay_wins as f64 / n * 100.0,
            switch_win_rate: tally.switch_wins as f64 / n * 100.0,
        })
    }
}

/// Reject batch sizes below one.
pub fn validate_batch_size(batch_size: i64) -> SimResult<u64> {
    if batch_size < 1 {
        return Err(SimError::InvalidArgument { batch_size });
    }
    Ok(batch_size as u64)
}

/// Run `batch_size` independent trials and summarize both strategies.
pub fn run_batch<R: Rng>(batch_size: i64, rng: &mut R) -> SimResult<BatchSummary> {
    let trials = validate_batch_size(batch_size)?;
    let summary = BatchSummary::from_tally(Tally::collect(trials, rng))?;
    log_summary(&summary);
    Ok(summary)
}

/// Run one batch split across `workers` threads.
///
/// Each worker draws from its own ChaCha8 stream of `seed`, so the result
/// depends only on `(seed, workers)`.
pub fn run_batch_parallel(batch_size: i64, seed: u64, workers: usize) -> SimResult<BatchSummary> {
    let trials = validate_batch_size(batch_size)?;
    let workers = (workers.max(1) as u64).min(trials);
    let base = trials / workers;
    let extra = trials % workers;

    let tally = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|worker| {
                let share = base + u64::from(worker < extra);
                scope.spawn(move || {
                    let mut rng = ChaCha8Rng::seed_from_u64(seed);
                    rng.set_stream(worker);
                    Tally::collect(share, &mut rng)
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_default())
            .fold(Tally::default(), |acc, part| acc + part)
    });

    if tally.trials != trials {
        return Err(SimError::WorkerFailed {
            completed: tally.trials,
            expected: trials,
        });
    }

    let summary = BatchSummary::from_tally(tally)?;
    log_summary(&summary);
    Ok(summary)
}

fn log_summary(summary: &BatchSummary) {
    debug!(
        batch_size = summary.batch_size,
        stay_wins = summary.stay_wins,
        switch_wins = summary.switch_wins,
        stay_win_rate = summary.stay_win_rate,
        switch_win_rate = summary.switch_win_rate,
        "batch complete"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_tally_record() {
        let mut tally = Tally::default();
        tally.record(true, false);
        tally.record(false, true);
        tally.record(false, true);
        assert_eq!(
            tally,
            Tally {
                trials: 3,
                stay_wins: 1,
                switch_wins: 2
            }
        );
    }

    #[test]
    fn test_tally_merge_is_order_independent() {
        let a = Tally {
            trials: 10,
            stay_wins: 3,
            switch_wins: 7,
        };
        let b = Tally {
            trials: 5,
            stay_wins: 2,
            switch_wins: 3,
        };
        let c = Tally {
            trials: 1,
            stay_wins: 0,
            switch_wins: 1,
        };
        assert_eq!((a + b) + c, a + (b + c));
        assert_eq!(a + b, b + a);

        let mut acc = Tally::default();
        acc += c;
        acc += a;
        acc += b;
        assert_eq!(acc, a + b + c);
    }

    #[test]
    fn test_summary_rates() {
        let summary = BatchSummary::from_tally(Tally {
            trials: 4,
            stay_wins: 1,
            switch_wins: 3,
        })
        .unwrap();
        assert_eq!(summary.batch_size, 4);
        assert!((summary.stay_win_rate - 25.0).abs() < 1e-9);
        assert!((summary.switch_win_rate - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_from_empty_tally_fails() {
        let err = BatchSummary::from_tally(Tally::default()).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_run_batch_counts() {
        let mut rng = seeded_rng();
        let summary = run_batch(500, &mut rng).unwrap();
        assert_eq!(summary.batch_size, 500);
        assert_eq!(summary.stay_wins + summary.switch_wins, 500);
    }

    #[test]
    fn test_run_batch_single_trial() {
        let mut rng = seeded_rng();
        let summary = run_batch(1, &mut rng).unwrap();
        assert_eq!(summary.batch_size, 1);
        assert!(summary.stay_win_rate == 100.0 || summary.switch_win_rate == 100.0);
    }

    #[test]
    fn test_run_batch_rejects_non_positive() {
        let mut rng = seeded_rng();
        assert!(run_batch(0, &mut rng).unwrap_err().is_invalid_argument());
        assert!(run_batch(-5, &mut rng).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_parallel_batch_counts_every_trial() {
        let summary = run_batch_parallel(10_001, 7, 4).unwrap();
        assert_eq!(summary.batch_size, 10_001);
        assert_eq!(summary.stay_wins + summary.switch_wins, 10_001);
    }

    #[test]
    fn test_parallel_batch_is_deterministic() {
        let a = run_batch_parallel(5_000, 99, 3).unwrap();
        let b = run_batch_parallel(5_000, 99, 3).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parallel_batch_more_workers_than_trials() {
        let summary = run_batch_parallel(2, 1, 8).unwrap();
        assert_eq!(summary.batch_size, 2);
    }

    #[test]
    fn test_parallel_batch_rejects_non_positive() {
        assert!(run_batch_parallel(0, 1, 2).unwrap_err().is_invalid_argument());
    }
}
