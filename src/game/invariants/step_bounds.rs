//! Step bounds invariant: the cursor points at an existing entry.

use super::Invariant;
use crate::game::GameState;

/// Invariant: the step pointer indexes into history.
///
/// Every derived read (board, winner, status) goes through the entry at
/// the step pointer, so this must hold after every mutation.
pub struct StepInBoundsInvariant;

impl Invariant<GameState> for StepInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        game.step() < game.history().len()
    }

    fn description() -> &'static str {
        "Step pointer indexes into history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Position;

    #[test]
    fn test_new_game_holds() {
        let game = GameState::new();
        assert!(StepInBoundsInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_moves() {
        let mut game = GameState::new();
        game.apply_move(Position::Center);
        game.apply_move(Position::TopLeft);
        assert!(StepInBoundsInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_truncation() {
        let mut game = GameState::new();
        game.apply_move(Position::Center);
        game.apply_move(Position::TopLeft);
        game.apply_move(Position::TopRight);
        game.jump_to(1);
        game.apply_move(Position::BottomLeft);
        assert!(StepInBoundsInvariant::holds(&game));
    }

    #[test]
    fn test_corrupted_cursor_violates() {
        let mut game = GameState::new();
        game.step = 3;
        assert!(!StepInBoundsInvariant::holds(&game));
    }
}
