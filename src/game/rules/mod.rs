//! Game rules.
//!
//! Win detection is a pure function over the board; it carries no state
//! and has no failure modes.

mod win;

pub use win::{Win, winning_line};
