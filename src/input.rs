//! Key handling for the game screen.
//!
//! Maps crossterm key events to `AppAction`s; the app itself never sees a
//! terminal type.

use crate::app::AppAction;
use crate::game::{GamePhase, MontyInput};
use crate::trial::Door;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translate a key press into an action for the current phase.
pub fn map_key(key: KeyEvent, phase: GamePhase) -> AppAction {
    if key.kind == KeyEventKind::Release {
        return AppAction::None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return AppAction::Quit;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => AppAction::Quit,
        KeyCode::Char('n') | KeyCode::Char('N') => AppAction::NewGame,
        KeyCode::Char('r') | KeyCode::Char('R') if phase == GamePhase::Final => {
            AppAction::RunSimulation
        }
        _ => AppAction::Game(map_game_key(key.code)),
    }
}

fn map_game_key(code: KeyCode) -> MontyInput {
    match code {
        KeyCode::Left => MontyInput::Left,
        KeyCode::Right => MontyInput::Right,
        KeyCode::Enter | KeyCode::Char(' ') => MontyInput::Select,
        KeyCode::Char(c @ '1'..='3') => Door::from_index(c as usize - '1' as usize)
            .map(MontyInput::PickDoor)
            .unwrap_or(MontyInput::Other),
        KeyCode::Char('s') | KeyCode::Char('S') => MontyInput::Stay,
        KeyCode::Char('w') | KeyCode::Char('W') => MontyInput::Switch,
        _ => MontyInput::Other,
    }
}
