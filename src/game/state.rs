//! Replayable game state with a movable history cursor.
//!
//! The state keeps an append-only log of board snapshots and a step
//! pointer into it. Making a move from an earlier step discards the
//! entries after the pointer before appending, so the log never holds
//! an unreachable future.

use super::history::{HistoryEntry, Move, MoveError};
use super::invariants::{GameStateInvariants, InvariantSet};
use super::position::Position;
use super::rules::{Win, winning_line};
use super::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Game status at the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Game is ongoing; the player is next to move.
    InProgress(Player),
    /// Game is won at the current step.
    Won(Player),
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::InProgress(player) => write!(f, "Next player: {}", player),
            Status::Won(player) => write!(f, "Winner: {}", player),
        }
    }
}

/// A rendered move-list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEntry {
    /// History step this entry jumps to.
    pub step: usize,
    /// Display label, e.g. `Go to move #3 : X (2, 0)`.
    pub label: String,
}

/// Full game state: move history plus a step cursor into it.
///
/// Derived values (board, winner, status) are recomputed from the
/// snapshot at the current step on every read; nothing is cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) step: usize,
    pub(crate) x_is_next: bool,
    pub(crate) ascending: bool,
}

impl GameState {
    /// Creates a new game with the single initial history entry.
    ///
    /// The move list defaults to newest-first display order.
    pub fn new() -> Self {
        Self::with_order(false)
    }

    /// Creates a new game with the given move-list display order.
    pub fn with_order(ascending: bool) -> Self {
        Self {
            history: vec![HistoryEntry::initial()],
            step: 0,
            x_is_next: true,
            ascending,
        }
    }

    /// The full move history, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// The current step pointer.
    pub fn step(&self) -> usize {
        self.step
    }

    /// True if X is next to move at the current step.
    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    /// True if the move list displays oldest-first.
    pub fn ascending(&self) -> bool {
        self.ascending
    }

    /// The player next to move at the current step.
    pub fn next_player(&self) -> Player {
        if self.x_is_next { Player::X } else { Player::O }
    }

    /// The board at the current step.
    pub fn board(&self) -> &Board {
        self.history[self.step].board()
    }

    /// The winning line at the current step, recomputed on each call.
    pub fn winner(&self) -> Option<Win> {
        winning_line(self.board())
    }

    /// The status at the current step.
    pub fn status(&self) -> Status {
        match self.winner() {
            Some(win) => Status::Won(win.player),
            None => Status::InProgress(self.next_player()),
        }
    }

    fn validate(&self, position: Position) -> Result<(), MoveError> {
        if self.winner().is_some() {
            return Err(MoveError::GameOver);
        }
        if !self.board().is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }
        Ok(())
    }

    /// Applies a move at the current step.
    ///
    /// Invalid moves (occupied square, or any move once the board at the
    /// current step is won) are ignored rather than signaled. A valid move
    /// from a step earlier than the end of history truncates the entries
    /// after the cursor, then appends the new snapshot, advances the step
    /// pointer to the new end, and flips the next player.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn apply_move(&mut self, position: Position) {
        if let Err(reason) = self.validate(position) {
            debug!(%reason, "move ignored");
            return;
        }

        let mover = self.next_player();
        let mut board = self.board().clone();
        board.set(position, Square::Occupied(mover));

        self.history.truncate(self.step + 1);
        self.history
            .push(HistoryEntry::new(board, Move::new(mover, position)));
        self.step = self.history.len() - 1;
        self.x_is_next = !self.x_is_next;

        debug!(step = self.step, "move applied");
        self.check_invariants();
    }

    /// Moves the step cursor to an existing history entry.
    ///
    /// The next player is derived from the step parity: X moves on even
    /// steps. History contents are untouched, so play can resume from any
    /// revisited step. Out-of-range steps are ignored.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) {
        if step >= self.history.len() {
            debug!(len = self.history.len(), "jump ignored");
            return;
        }

        self.step = step;
        self.x_is_next = step % 2 == 0;
        self.check_invariants();
    }

    /// Flips the move-list display order. History and step are untouched.
    pub fn toggle_order(&mut self) {
        self.ascending = !self.ascending;
    }

    /// The move list in display order.
    ///
    /// Step 0 renders as "Go to game start"; step N as
    /// "Go to move #N : P (col, row)". The sequence is reversed when the
    /// order flag is newest-first.
    pub fn moves(&self) -> Vec<MoveEntry> {
        let mut entries: Vec<MoveEntry> = self
            .history
            .iter()
            .enumerate()
            .map(|(step, entry)| {
                let label = match entry.moved() {
                    None => "Go to game start".to_string(),
                    Some(mv) => format!(
                        "Go to move #{} : {} ({}, {})",
                        step,
                        mv.player,
                        mv.position.col(),
                        mv.position.row()
                    ),
                };
                MoveEntry { step, label }
            })
            .collect();

        if !self.ascending {
            entries.reverse();
        }
        entries
    }

    fn check_invariants(&self) {
        debug_assert!(
            GameStateInvariants::check_all(self).is_ok(),
            "game state invariant violated after mutation"
        );
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
