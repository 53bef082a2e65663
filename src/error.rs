//! Error types for the simulator.

use thiserror::Error;

/// Result type alias for simulator operations.
pub type SimResult<T> = Result<T, SimError>;

#[derive(Debug, Error)]
pub enum SimError {
    /// A batch was requested with fewer than one trial.
    #[error("invalid batch size {batch_size}: must be at least 1")]
    InvalidArgument { batch_size: i64 },

    /// A door index outside the three doors.
    #[error("no door with index {index}")]
    InvalidDoor { index: u8 },

    /// A worker thread panicked before finishing its share of a batch.
    #[error("worker failed: ran {completed} of {expected} trials")]
    WorkerFailed { completed: u64, expected: u64 },

    /// A command-line or configuration value could not be used.
    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SimError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
