//! Trial data structures.

use crate::constants::NUM_DOORS;
use crate::error::SimError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three doors, identified by index 0..3.
///
/// Serialized as its bare index; deserializing anything else fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Door(u8);

impl Door {
    pub const ALL: [Door; NUM_DOORS] = [Door(0), Door(1), Door(2)];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The door that is neither `a` nor `b`. The two must differ.
    pub(crate) fn third(a: Door, b: Door) -> Door {
        debug_assert_ne!(a, b);
        Door(3 - a.0 - b.0)
    }

    /// 1-based door number as shown to a player.
    pub fn number(self) -> usize {
        self.index() + 1
    }
}

impl TryFrom<u8> for Door {
    type Error = SimError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(index as usize).ok_or(SimError::InvalidDoor { index })
    }
}

impl From<Door> for u8 {
    fn from(door: Door) -> u8 {
        door.0
    }
}

impl fmt::Display for Door {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Door {}", self.number())
    }
}

/// What sits behind a door.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorContent {
    Prize,
    Decoy,
}

impl DoorContent {
    pub fn of(door: Door, prize: Door) -> Self {
        if door == prize {
            Self::Prize
        } else {
            Self::Decoy
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Prize => "Car",
            Self::Decoy => "Goat",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Stay,
    Switch,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Stay, Strategy::Switch];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Stay => "Stay",
            Self::Switch => "Switch",
        }
    }
}

/// Complete record of one simulated game.
///
/// Both strategies are resolved from the same draws: staying keeps
/// `initial_pick`, switching takes `switch_target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialOutcome {
    pub prize: Door,
    pub initial_pick: Door,
    pub revealed: Door,
    pub switch_target: Door,
}

impl TrialOutcome {
    pub fn final_choice(&self, strategy: Strategy) -> Door {
        match strategy {
            Strategy::Stay => self.initial_pick,
            Strategy::Switch => self.switch_target,
        }
    }

    pub fn won(&self, strategy: Strategy) -> bool {
        self.final_choice(strategy) == self.prize
    }

    pub fn stay_won(&self) -> bool {
        self.won(Strategy::Stay)
    }

    pub fn switch_won(&self) -> bool {
        self.won(Strategy::Switch)
    }

    pub fn content(&self, door: Door) -> DoorContent {
        DoorContent::of(door, self.prize)
    }
}
