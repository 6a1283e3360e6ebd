//! Tic-tac-toe game state engine.

mod engine;
mod player;
mod rules;
mod types;

pub use engine::{GameEngine, GameState, IllegalMove, MoveOutcome, MoveResult, Phase};
pub use player::{Player, PlayerError, Players};
pub use rules::{LINES, evaluate, is_full, is_winner, status_of, winning_line};
pub use types::{Board, CELL_COUNT, Cell, GameStatus, InvalidMove, Symbol};
