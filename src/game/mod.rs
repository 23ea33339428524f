//! Game-state and win-detection logic.

mod history;
mod invariants;
mod position;
mod rules;
mod state;
mod types;

pub use history::{HistoryEntry, Move, MoveError};
pub use invariants::{
    GameStateInvariants, Invariant, InvariantSet, InvariantViolation, RootEntryInvariant,
    StepInBoundsInvariant, TurnParityInvariant,
};
pub use position::Position;
pub use rules::{Win, winning_line};
pub use state::{GameState, MoveEntry, Status};
pub use types::{Board, Player, Square};
