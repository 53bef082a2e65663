//! Monty - three-door puzzle simulator.
//!
//! The trial engine plays single games, the simulator runs batches of them
//! and records how the stay and switch win rates converge on 1/3 and 2/3.
//! The game, app and ui modules wrap the same engine in a playable
//! terminal game.

pub mod app;
pub mod build_info;
pub mod constants;
pub mod error;
pub mod game;
pub mod input;
pub mod simulator;
pub mod trial;
pub mod ui;

pub use error::{SimError, SimResult};
pub use simulator::{run_batch, run_series, BatchSummary, ConvergenceSeries};
pub use trial::run_trial;
