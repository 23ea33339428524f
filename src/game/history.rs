//! Move events and history snapshots.
//!
//! Moves are domain events, not side effects. Each history entry records
//! the full board after a move together with the move that produced it,
//! so any prior state can be revisited without replay.

use super::position::Position;
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a move was rejected.
///
/// Rejections are logged and swallowed; the user-visible behavior of an
/// invalid move is that nothing happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The board at the current step already has a winner.
    #[display("the game is already won")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// A recorded board snapshot plus the move that produced it.
///
/// The initial entry carries the empty board and no move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
    moved: Option<Move>,
}

impl HistoryEntry {
    /// The initial entry at the start of a game.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            moved: None,
        }
    }

    /// An entry recording the board after `moved` was played.
    pub fn new(board: Board, moved: Move) -> Self {
        Self {
            board,
            moved: Some(moved),
        }
    }

    /// The board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The move that produced this snapshot, if any.
    pub fn moved(&self) -> Option<Move> {
        self.moved
    }
}
