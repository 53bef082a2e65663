//! Simulation configuration.

use crate::constants::DEFAULT_BATCH_SIZES;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Batch sizes to run, in order
    pub batch_sizes: Vec<i64>,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Worker threads per batch (1 = run on the calling thread)
    pub workers: usize,

    /// Log verbosity (0 = silent, 1 = summary, 2 = detailed)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            batch_sizes: DEFAULT_BATCH_SIZES.to_vec(),
            seed: None,
            workers: 1,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config that skips the million-game batch
    pub fn quick() -> Self {
        Self {
            batch_sizes: vec![5, 10, 100, 1000, 10000],
            ..Default::default()
        }
    }

    /// Parse a comma-separated list such as `5,10,100`.
    pub fn parse_batch_sizes(list: &str) -> Result<Vec<i64>, String> {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.replace('_', "")
                    .parse::<i64>()
                    .map_err(|_| format!("'{}' is not a batch size", s))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule() {
        let config = SimConfig::default();
        assert_eq!(config.batch_sizes.first(), Some(&5));
        assert_eq!(config.batch_sizes.last(), Some(&1_000_000));
        assert_eq!(config.workers, 1);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_quick_is_smaller() {
        let quick = SimConfig::quick();
        let full = SimConfig::default();
        assert!(quick.batch_sizes.iter().sum::<i64>() < full.batch_sizes.iter().sum::<i64>());
    }

    #[test]
    fn test_parse_batch_sizes() {
        assert_eq!(
            SimConfig::parse_batch_sizes("5, 10,1_000").unwrap(),
            vec![5, 10, 1000]
        );
        assert_eq!(SimConfig::parse_batch_sizes("-5").unwrap(), vec![-5]);
        assert!(SimConfig::parse_batch_sizes("5,ten").is_err());
    }
}
