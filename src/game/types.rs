//! Core domain types for tic-tac-toe.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// A mark a player places on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    strum::EnumIter,
)]
pub enum Symbol {
    /// The X mark.
    #[display("X")]
    X,
    /// The O mark.
    #[display("O")]
    O,
}

impl Symbol {
    /// Returns the other symbol.
    pub fn other(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    /// Character used for this symbol in the save files.
    pub fn as_char(self) -> char {
        match self {
            Symbol::X => 'X',
            Symbol::O => 'O',
        }
    }

    /// Parses a symbol from its save-file character.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'X' => Some(Symbol::X),
            'O' => Some(Symbol::O),
            _ => None,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Marked by a player.
    Marked(Symbol),
}

impl Cell {
    /// Returns the symbol in this cell, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::Marked(symbol) => Some(symbol),
        }
    }

    /// Returns true if no symbol has been placed here.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Rejected placement on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InvalidMove {
    /// Index outside `0..9`.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),
    /// Cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(usize),
}

impl std::error::Error for InvalidMove {}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from cells in row-major order.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Places `symbol` at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] if the index is outside `0..9` or the cell
    /// is already occupied. The board is unchanged on error.
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize, symbol: Symbol) -> Result<(), InvalidMove> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(InvalidMove::OutOfRange(index))?;
        if !cell.is_empty() {
            return Err(InvalidMove::Occupied(index));
        }
        *cell = Cell::Marked(symbol);
        Ok(())
    }

    /// Returns the cell at `index`, or `None` when out of range.
    pub fn cell_at(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Returns true if `index` is on the board and unmarked.
    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.cell_at(index), Some(Cell::Empty))
    }

    /// Returns true when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Clears every cell.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Indices of the cells that are still empty.
    pub fn empty_cells(&self) -> Vec<usize> {
        (0..CELL_COUNT).filter(|&i| self.is_empty_at(i)).collect()
    }

    /// Number of marks of the given symbol.
    pub fn count(&self, symbol: Symbol) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.symbol() == Some(symbol))
            .count()
    }

    /// Formats the board for a terminal, numbering empty cells 1-9.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.cells[pos] {
                    Cell::Empty => result.push_str(&(pos + 1).to_string()),
                    Cell::Marked(symbol) => result.push(symbol.as_char()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted.
    InProgress,
    /// The given symbol completed a line.
    Won(Symbol),
    /// Board is full with no line.
    Draw,
}

impl GameStatus {
    /// Returns true for a win or draw.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winning symbol, if any.
    pub fn winner(self) -> Option<Symbol> {
        match self {
            GameStatus::Won(symbol) => Some(symbol),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_marks_cell() {
        let mut board = Board::new();
        board.place(4, Symbol::X).unwrap();
        assert_eq!(board.cell_at(4), Some(Cell::Marked(Symbol::X)));
        assert_eq!(board.count(Symbol::X), 1);
    }

    #[test]
    fn test_place_out_of_range() {
        let mut board = Board::new();
        assert_eq!(board.place(9, Symbol::O), Err(InvalidMove::OutOfRange(9)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_place_occupied_keeps_original_mark() {
        let mut board = Board::new();
        board.place(0, Symbol::X).unwrap();
        assert_eq!(board.place(0, Symbol::O), Err(InvalidMove::Occupied(0)));
        assert_eq!(board.cell_at(0), Some(Cell::Marked(Symbol::X)));
    }

    #[test]
    fn test_is_full_and_reset() {
        let mut board = Board::new();
        for i in 0..CELL_COUNT {
            assert!(!board.is_full());
            board.place(i, if i % 2 == 0 { Symbol::X } else { Symbol::O })
                .unwrap();
        }
        assert!(board.is_full());
        assert!(board.empty_cells().is_empty());

        board.reset();
        assert_eq!(board.empty_cells().len(), CELL_COUNT);
    }

    #[test]
    fn test_display_numbers_empty_cells() {
        let mut board = Board::new();
        board.place(0, Symbol::X).unwrap();
        board.place(8, Symbol::O).unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|O");
    }

    #[test]
    fn test_symbol_chars() {
        assert_eq!(Symbol::from_char('X'), Some(Symbol::X));
        assert_eq!(Symbol::from_char('o'), None);
        assert_eq!(Symbol::O.as_char(), 'O');
        assert_eq!(Symbol::X.other(), Symbol::O);
    }
}
