//! Interactive game data structures.

use crate::trial::{Door, DoorContent, Strategy, TrialOutcome};

/// Where the player is in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the first pick
    Initial,
    /// A decoy has been opened; waiting for stay or switch
    DoorPicked,
    /// All doors open, result known
    Final,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoorState {
    pub content: DoorContent,
    pub is_open: bool,
}

/// Full state of one interactive game.
#[derive(Debug, Clone)]
pub struct MontyGame {
    pub prize: Door,
    pub doors: [DoorState; 3],
    pub phase: GamePhase,
    /// Door under the selection cursor
    pub cursor: Door,
    pub initial_pick: Option<Door>,
    pub revealed: Option<Door>,
    pub strategy: Option<Strategy>,
    pub final_choice: Option<Door>,
    pub game_result: Option<GameResult>,
}

impl MontyGame {
    /// New game with the prize behind `prize`.
    pub fn new(prize: Door) -> Self {
        Self {
            prize,
            doors: Door::ALL.map(|door| DoorState {
                content: DoorContent::of(door, prize),
                is_open: false,
            }),
            phase: GamePhase::Initial,
            cursor: Door::ALL[0],
            initial_pick: None,
            revealed: None,
            strategy: None,
            final_choice: None,
            game_result: None,
        }
    }

    pub fn door(&self, door: Door) -> &DoorState {
        &self.doors[door.index()]
    }

    pub fn open(&mut self, door: Door) {
        self.doors[door.index()].is_open = true;
    }

    pub fn open_all(&mut self) {
        for door in self.doors.iter_mut() {
            door.is_open = true;
        }
    }

    /// The door currently marked as the player's choice.
    pub fn selected(&self) -> Option<Door> {
        self.final_choice.or(self.initial_pick)
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor.index() > 0 {
            self.cursor = Door::ALL[self.cursor.index() - 1];
        }
    }

    pub fn move_cursor_right(&mut self) {
        if let Some(next) = Door::from_index(self.cursor.index() + 1) {
            self.cursor = next;
        }
    }

    /// The finished game as a trial record.
    pub fn outcome(&self) -> Option<TrialOutcome> {
        if self.phase != GamePhase::Final {
            return None;
        }
        let initial_pick = self.initial_pick?;
        let revealed = self.revealed?;
        Some(TrialOutcome {
            prize: self.prize,
            initial_pick,
            revealed,
            switch_target: crate::trial::switch_target(initial_pick, revealed)?,
        })
    }
}
