//! Turn parity invariant: the next player follows from the step number.

use super::Invariant;
use crate::game::GameState;

/// Invariant: X is next to move exactly when the step pointer is even.
///
/// X opens the game at step 0 and players strictly alternate, so the
/// next-player flag is determined by the cursor parity. Jumping derives
/// the flag from the target step; applying a move flips it while moving
/// the cursor by one.
pub struct TurnParityInvariant;

impl Invariant<GameState> for TurnParityInvariant {
    fn holds(game: &GameState) -> bool {
        game.x_is_next() == (game.step() % 2 == 0)
    }

    fn description() -> &'static str {
        "X is next to move exactly on even steps"
    }
}
