// Puzzle constants
pub const NUM_DOORS: usize = 3;

// Theoretical win rates in percent
pub const THEORETICAL_STAY_RATE: f64 = 100.0 / 3.0;
pub const THEORETICAL_SWITCH_RATE: f64 = 200.0 / 3.0;

// Batch-size schedule used by the interactive simulation and the CLI default
pub const DEFAULT_BATCH_SIZES: [i64; 9] = [5, 10, 100, 1000, 3000, 5000, 10000, 50000, 1_000_000];

// Interactive pacing
pub const TICK_INTERVAL_MS: u64 = 50;
pub const BATCH_DELAY_MS: u64 = 800;

// Batches at least this large run off the UI thread
pub const BACKGROUND_BATCH_MIN: i64 = 50_000;
