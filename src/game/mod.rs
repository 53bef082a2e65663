//! Playable single game of the three-door puzzle.
//!
//! The player picks a door, the host opens a decoy, and the player stays
//! or switches. Reveal and switch rules come from the trial engine.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
