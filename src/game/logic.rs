//! Interactive game logic.
//!
//! Handles the pick, the host's reveal and the stay/switch decision.

use super::{GamePhase, GameResult, MontyGame};
use crate::trial::{host_reveal, place_prize, switch_target, Door, Strategy};
use rand::Rng;

/// Input actions for the game (UI-agnostic).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MontyInput {
    Left,
    Right,
    /// Pick the door under the cursor
    Select,
    /// Pick a door directly (number keys)
    PickDoor(Door),
    Stay,
    Switch,
    Other,
}

/// Start a game with the prize placed at random.
pub fn new_game<R: Rng>(rng: &mut R) -> MontyGame {
    MontyGame::new(place_prize(rng))
}

/// Process an input during an active game.
/// Returns true if the input changed the game.
pub fn process_input<R: Rng>(game: &mut MontyGame, input: MontyInput, rng: &mut R) -> bool {
    match (game.phase, input) {
        (GamePhase::Initial, MontyInput::Left) => {
            game.move_cursor_left();
            true
        }
        (GamePhase::Initial, MontyInput::Right) => {
            game.move_cursor_right();
            true
        }
        (GamePhase::Initial, MontyInput::Select) => {
            let door = game.cursor;
            pick_door(game, door, rng)
        }
        (GamePhase::Initial, MontyInput::PickDoor(door)) => {
            game.cursor = door;
            pick_door(game, door, rng)
        }
        (GamePhase::DoorPicked, MontyInput::Stay) => decide(game, Strategy::Stay),
        (GamePhase::DoorPicked, MontyInput::Switch) => decide(game, Strategy::Switch),
        _ => false,
    }
}

/// Record the player's first pick and let the host open a decoy door.
/// Returns false outside the initial phase.
pub fn pick_door<R: Rng>(game: &mut MontyGame, door: Door, rng: &mut R) -> bool {
    if game.phase != GamePhase::Initial {
        return false;
    }

    let revealed = host_reveal(door, game.prize, rng);
    game.initial_pick = Some(door);
    game.revealed = Some(revealed);
    game.open(revealed);
    game.phase = GamePhase::DoorPicked;
    true
}

/// Stay or switch, open every door and settle the game.
/// Returns false unless a door has been picked and revealed.
pub fn decide(game: &mut MontyGame, strategy: Strategy) -> bool {
    if game.phase != GamePhase::DoorPicked {
        return false;
    }
    let (Some(pick), Some(revealed)) = (game.initial_pick, game.revealed) else {
        return false;
    };

    let final_choice = match strategy {
        Strategy::Stay => Some(pick),
        Strategy::Switch => switch_target(pick, revealed),
    };
    let Some(final_choice) = final_choice else {
        return false;
    };

    game.strategy = Some(strategy);
    game.final_choice = Some(final_choice);
    game.open_all();
    game.game_result = Some(if final_choice == game.prize {
        GameResult::Win
    } else {
        GameResult::Loss
    });
    game.phase = GamePhase::Final;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trial::DoorContent;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn seeded_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_pick_reveals_a_decoy() {
        let mut rng = seeded_rng();
        let mut game = MontyGame::new(Door::ALL[2]);

        assert!(pick_door(&mut game, Door::ALL[0], &mut rng));

        assert_eq!(game.phase, GamePhase::DoorPicked);
        assert_eq!(game.revealed, Some(Door::ALL[1]));
        assert!(game.door(Door::ALL[1]).is_open);
        assert_eq!(game.door(Door::ALL[1]).content, DoorContent::Decoy);
        assert!(!game.door(Door::ALL[0]).is_open);
        assert!(!game.door(Door::ALL[2]).is_open);
    }

    #[test]
    fn test_cannot_pick_twice() {
        let mut rng = seeded_rng();
        let mut game = MontyGame::new(Door::ALL[0]);
        assert!(pick_door(&mut game, Door::ALL[0], &mut rng));
        assert!(!pick_door(&mut game, Door::ALL[1], &mut rng));
        assert_eq!(game.initial_pick, Some(Door::ALL[0]));
    }

    #[test]
    fn test_decide_before_pick_is_ignored() {
        let mut game = MontyGame::new(Door::ALL[0]);
        assert!(!decide(&mut game, Strategy::Switch));
        assert_eq!(game.phase, GamePhase::Initial);
    }

    #[test]
    fn test_switch_wins_when_first_pick_was_decoy() {
        let mut rng = seeded_rng();
        let mut game = MontyGame::new(Door::ALL[1]);
        pick_door(&mut game, Door::ALL[2], &mut rng);

        assert!(decide(&mut game, Strategy::Switch));

        assert_eq!(game.final_choice, Some(Door::ALL[1]));
        assert_eq!(game.game_result, Some(GameResult::Win));
        assert_eq!(game.phase, GamePhase::Final);
        assert!(game.doors.iter().all(|d| d.is_open));
    }

    #[test]
    fn test_stay_loses_when_first_pick_was_decoy() {
        let mut rng = seeded_rng();
        let mut game = MontyGame::new(Door::ALL[1]);
        pick_door(&mut game, Door::ALL[2], &mut rng);

        assert!(decide(&mut game, Strategy::Stay));

        assert_eq!(game.final_choice, Some(Door::ALL[2]));
        assert_eq!(game.game_result, Some(GameResult::Loss));
    }

    #[test]
    fn test_process_input_flow() {
        let mut rng = seeded_rng();
        let mut game = MontyGame::new(Door::ALL[0]);

        assert!(!process_input(&mut game, MontyInput::Stay, &mut rng));
        assert!(process_input(&mut game, MontyInput::Right, &mut rng));
        assert!(process_input(&mut game, MontyInput::Select, &mut rng));
        assert_eq!(game.initial_pick, Some(Door::ALL[1]));

        assert!(!process_input(&mut game, MontyInput::Left, &mut rng));
        assert!(process_input(&mut game, MontyInput::Switch, &mut rng));
        assert_eq!(game.game_result, Some(GameResult::Win));

        let outcome = game.outcome().unwrap();
        assert!(outcome.switch_won());
        assert!(!outcome.stay_won());
    }

    #[test]
    fn test_pick_door_by_number_moves_cursor() {
        let mut rng = seeded_rng();
        let mut game = MontyGame::new(Door::ALL[0]);
        assert!(process_input(
            &mut game,
            MontyInput::PickDoor(Door::ALL[2]),
            &mut rng
        ));
        assert_eq!(game.cursor, Door::ALL[2]);
        assert_eq!(game.selected(), Some(Door::ALL[2]));
    }
}
