//! Trial engine logic.
//!
//! Handles prize placement, the host's reveal and stay/switch resolution.
//! All randomness comes from the caller's generator.

use super::{Door, TrialOutcome};
use crate::constants::NUM_DOORS;
use rand::Rng;

/// Draw a door uniformly at random.
pub fn random_door<R: Rng>(rng: &mut R) -> Door {
    Door::ALL[rng.gen_range(0..NUM_DOORS)]
}

/// Hide the prize behind a uniformly chosen door.
pub fn place_prize<R: Rng>(rng: &mut R) -> Door {
    random_door(rng)
}

/// Doors the host may open: neither the player's pick nor the prize.
/// Two doors when the pick is the prize, otherwise one.
pub fn legal_reveals(pick: Door, prize: Door) -> Vec<Door> {
    Door::ALL
        .into_iter()
        .filter(|&door| door != pick && door != prize)
        .collect()
}

/// Choose the door the host opens from `legal_reveals`.
///
/// With two legal doors the host picks uniformly; with one the reveal is
/// forced and no randomness is consumed.
pub fn host_reveal<R: Rng>(pick: Door, prize: Door, rng: &mut R) -> Door {
    let legal = legal_reveals(pick, prize);
    match legal[..] {
        [forced] => forced,
        _ => legal[rng.gen_range(0..legal.len())],
    }
}

/// The unopened door the player moves to when switching.
/// Returns `None` if `revealed` is the pick itself.
pub fn switch_target(pick: Door, revealed: Door) -> Option<Door> {
    (pick != revealed).then(|| Door::third(pick, revealed))
}

/// Play one full game and keep every intermediate door.
pub fn simulate_trial<R: Rng>(rng: &mut R) -> TrialOutcome {
    let prize = place_prize(rng);
    let initial_pick = random_door(rng);
    let revealed = host_reveal(initial_pick, prize, rng);

    TrialOutcome {
        prize,
        initial_pick,
        revealed,
        switch_target: Door::third(initial_pick, revealed),
    }
}

/// Play one game and report `(stay_won, switch_won)`.
/// Exactly one of the two is true.
pub fn run_trial<R: Rng>(rng: &mut R) -> (bool, bool) {
    let outcome = simulate_trial(rng);
    (outcome.stay_won(), outcome.switch_won())
}
