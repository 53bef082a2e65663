//! Trial engine for the three-door puzzle.
//!
//! One trial places the prize, takes the player's pick, lets the host open a
//! decoy door and resolves both strategies from the same random draws.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
