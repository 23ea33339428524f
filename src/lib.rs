//! Tic-tac-toe with a replayable move history.
//!
//! The game keeps every board snapshot it has passed through. The move
//! list lets you jump back to any prior step and resume play from there,
//! which discards the abandoned future before the next move is recorded.
//!
//! # Example
//!
//! ```
//! use tictactoe_rewind::{GameState, Player, Position};
//!
//! let mut game = GameState::new();
//! game.apply_move(Position::TopLeft);
//! game.apply_move(Position::Center);
//!
//! assert_eq!(game.history().len(), 3);
//! assert_eq!(game.next_player(), Player::X);
//!
//! // Rewind one move; O is to move again from step 1.
//! game.jump_to(1);
//! assert_eq!(game.next_player(), Player::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod game;
pub mod tui;

pub use game::{
    Board, GameState, GameStateInvariants, HistoryEntry, Invariant, InvariantSet,
    InvariantViolation, Move, MoveEntry, MoveError, Player, Position, Square, Status, Win,
    winning_line,
};
