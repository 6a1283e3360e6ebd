//! Draw detection and overall status evaluation.

use super::super::{Board, GameStatus, Symbol};
use super::win::is_winner;
use tracing::instrument;

/// Checks if the board is full (all cells marked).
///
/// A full board with no winner indicates a draw.
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Status after `mover` has just placed a mark.
///
/// Only the mover's symbol can have completed a line, so the opponent is
/// never checked.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, mover: Symbol) -> GameStatus {
    if is_winner(board, mover) {
        GameStatus::Won(mover)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

/// Status of a board whose last mover is unknown (e.g. read from disk).
#[instrument(skip(board))]
pub fn status_of(board: &Board) -> GameStatus {
    [Symbol::X, Symbol::O]
        .into_iter()
        .find(|&symbol| is_winner(board, symbol))
        .map(GameStatus::Won)
        .unwrap_or_else(|| {
            if is_full(board) {
                GameStatus::Draw
            } else {
                GameStatus::InProgress
            }
        })
}
