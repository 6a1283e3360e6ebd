//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are kept apart from board
//! storage so the engine and the save-file loader share one definition of
//! a win.

mod draw;
mod win;

pub use draw::{evaluate, is_full, status_of};
pub use win::{LINES, is_winner, winning_line};
