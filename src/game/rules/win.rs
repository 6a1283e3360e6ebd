//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Symbol};
use tracing::instrument;

/// The 8 index triples that win when uniformly marked.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first line fully marked by `symbol`.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, symbol: Symbol) -> Option<[usize; 3]> {
    let mark = Some(Cell::Marked(symbol));
    LINES
        .into_iter()
        .find(|line| line.iter().all(|&i| board.cell_at(i) == mark))
}

/// Checks whether `symbol` has three in a row.
pub fn is_winner(board: &Board, symbol: Symbol) -> bool {
    winning_line(board, symbol).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, Symbol)]) -> Board {
        let mut board = Board::new();
        for &(i, symbol) in marks {
            board.place(i, symbol).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!is_winner(&board, Symbol::X));
        assert!(!is_winner(&board, Symbol::O));
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let board = board_with(&line.map(|i| (i, Symbol::O)));
            assert_eq!(winning_line(&board, Symbol::O), Some(line));
            assert!(!is_winner(&board, Symbol::X));
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = board_with(&[(0, Symbol::X), (1, Symbol::O), (2, Symbol::X)]);
        assert!(!is_winner(&board, Symbol::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(0, Symbol::X), (4, Symbol::X)]);
        assert_eq!(winning_line(&board, Symbol::X), None);
    }
}
