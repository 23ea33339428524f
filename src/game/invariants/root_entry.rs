//! Root entry invariant: history always starts from the empty board.

use super::Invariant;
use crate::game::GameState;
use crate::game::types::Square;

/// Invariant: the first history entry is the empty board with no move.
///
/// Truncation on a new move keeps everything up to the current step, and
/// the step pointer never goes negative, so the root entry survives every
/// operation.
pub struct RootEntryInvariant;

impl Invariant<GameState> for RootEntryInvariant {
    fn holds(game: &GameState) -> bool {
        match game.history().first() {
            Some(root) => {
                root.moved().is_none()
                    && root.board().squares().iter().all(|s| *s == Square::Empty)
            }
            None => false,
        }
    }

    fn description() -> &'static str {
        "First history entry is the empty board with no move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Position;
    use crate::game::history::{HistoryEntry, Move};
    use crate::game::types::{Board, Player};

    #[test]
    fn test_new_game_holds() {
        let game = GameState::new();
        assert!(RootEntryInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_truncating_move() {
        let mut game = GameState::new();
        game.apply_move(Position::Center);
        game.apply_move(Position::TopLeft);
        game.jump_to(0);
        game.apply_move(Position::BottomRight);
        assert!(RootEntryInvariant::holds(&game));
    }

    #[test]
    fn test_corrupted_root_violates() {
        let mut game = GameState::new();

        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::O));
        game.history[0] = HistoryEntry::new(board, Move::new(Player::O, Position::Center));

        assert!(!RootEntryInvariant::holds(&game));
    }

    #[test]
    fn test_empty_history_violates() {
        let mut game = GameState::new();
        game.history.clear();
        assert!(!RootEntryInvariant::holds(&game));
    }
}
