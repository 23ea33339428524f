//! Application state and key handling.

use crate::game::{GameState, Position};
use crossterm::event::KeyCode;
use ratatui::widgets::ListState;
use tracing::debug;

use super::input;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    Board,
    /// Arrow keys move the move-list selection.
    History,
}

/// TUI application state: the game plus presentation-only cursors.
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    list: ListState,
}

impl App {
    /// Creates a new application with the given move-list order.
    pub fn new(ascending: bool) -> Self {
        let mut list = ListState::default();
        list.select(Some(0));
        Self {
            game: GameState::with_order(ascending),
            cursor: Position::Center,
            focus: Focus::Board,
            list,
        }
    }

    /// The game state.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// The board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Mutable access to the move-list selection state for rendering.
    pub fn list_state(&mut self) -> &mut ListState {
        &mut self.list
    }

    /// Keeps the move-list selection inside the rendered list.
    ///
    /// A move from an earlier step shrinks the list, so the selection can
    /// point past the end between mutations and the next draw.
    pub fn clamp_selection(&mut self, len: usize) {
        match self.list.selected() {
            Some(selected) if selected >= len => {
                self.list.select(if len == 0 { None } else { Some(len - 1) });
            }
            None if len > 0 => self.list.select(Some(0)),
            _ => {}
        }
    }

    /// Enter: place a mark at the cursor, or jump to the selected entry.
    pub fn confirm(&mut self) {
        match self.focus {
            Focus::Board => self.game.apply_move(self.cursor),
            Focus::History => {
                let entries = self.game.moves();
                if let Some(entry) = self.list.selected().and_then(|s| entries.get(s)) {
                    debug!(step = entry.step, "jumping via move list");
                    self.game.jump_to(entry.step);
                }
            }
        }
    }

    /// Digit keys 1-9 place directly on the numbered square.
    pub fn place_digit(&mut self, digit: char) {
        if let Some(n) = digit.to_digit(10) {
            if (1..=9).contains(&n) {
                if let Some(position) = Position::from_index(n as usize - 1) {
                    self.game.apply_move(position);
                }
            }
        }
    }

    /// Arrow keys move whichever cursor the focused pane owns.
    pub fn navigate(&mut self, key: KeyCode) {
        match self.focus {
            Focus::Board => self.cursor = input::move_cursor(self.cursor, key),
            Focus::History => {
                let len = self.game.moves().len();
                let selected = self.list.selected().unwrap_or(0);
                match key {
                    KeyCode::Up => self.list.select(Some(selected.saturating_sub(1))),
                    KeyCode::Down => {
                        self.list.select(Some((selected + 1).min(len.saturating_sub(1))));
                    }
                    _ => {}
                }
            }
        }
    }

    /// Switches focus between the board and the move list.
    pub fn switch_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        };
    }

    /// Flips the move-list display order.
    pub fn toggle_order(&mut self) {
        self.game.toggle_order();
    }

    /// Restarts the game, keeping the display-order setting.
    pub fn restart(&mut self) {
        debug!("restarting game");
        self.game = GameState::with_order(self.game.ascending());
        self.cursor = Position::Center;
        self.list.select(Some(0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    #[test]
    fn test_confirm_places_at_cursor() {
        let mut app = App::new(true);
        app.confirm();
        assert_eq!(app.game().history().len(), 2);
        assert_eq!(app.game().next_player(), Player::O);
    }

    #[test]
    fn test_digit_places_on_numbered_square() {
        let mut app = App::new(true);
        app.place_digit('1');
        assert!(!app.game().board().is_empty(Position::TopLeft));
    }

    #[test]
    fn test_confirm_jumps_via_selected_entry() {
        let mut app = App::new(true);
        app.place_digit('1');
        app.place_digit('5');

        app.switch_focus();
        assert_eq!(app.focus(), Focus::History);

        // Ascending order: entry 1 is "Go to move #1".
        app.navigate(KeyCode::Down);
        app.confirm();
        assert_eq!(app.game().step(), 1);
    }

    #[test]
    fn test_restart_keeps_order_setting() {
        let mut app = App::new(false);
        app.toggle_order();
        app.place_digit('1');
        app.restart();
        assert_eq!(app.game().history().len(), 1);
        assert!(app.game().ascending());
    }

    #[test]
    fn test_clamp_selection_after_shrink() {
        let mut app = App::new(true);
        app.list_state().select(Some(5));
        app.clamp_selection(2);
        assert_eq!(app.list_state().selected(), Some(1));
    }
}
