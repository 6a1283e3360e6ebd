//! Strictly Tic-Tac-Toe - a two-player game engine with flat-file persistence
//!
//! # Architecture
//!
//! - **Game**: board, rules, players, and the [`GameEngine`] state machine
//! - **Persistence**: players file, saved-game file, and append-only results log
//! - **Session**: couples an engine with its store and records finished games
//! - **Terminal**: a line-based front end driving a [`Session`]
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameEngine, MoveOutcome, Players, Symbol};
//!
//! let players = Players::with_choice("Alice", "Bob", Symbol::X)?;
//! let mut engine = GameEngine::new();
//! engine.new_game(players, Symbol::X);
//!
//! for index in [0, 4, 1, 5] {
//!     engine.submit_move(index)?;
//! }
//! let result = engine.submit_move(2)?;
//! assert_eq!(*result.outcome(), MoveOutcome::Win(Symbol::X));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod game;
mod persistence;
mod session;
mod terminal;

// Crate-level exports - Configuration
pub use config::{ConfigError, StoreConfig};

// Crate-level exports - Game types
pub use game::{
    Board, CELL_COUNT, Cell, GameEngine, GameState, GameStatus, IllegalMove, InvalidMove, LINES,
    MoveOutcome, MoveResult, Phase, Player, PlayerError, Players, Symbol, evaluate, is_full,
    is_winner, status_of, winning_line,
};

// Crate-level exports - Persistence
pub use persistence::{
    PersistError, PersistErrorKind, PersistenceStore, RESULT_SEPARATOR, RecordedOutcome,
    ResultRecord, TIMESTAMP_FORMAT, decode_game, decode_players, encode_game, encode_players,
    encode_result,
};

// Crate-level exports - Session and front end
pub use session::{Resume, Session, status_line};
pub use terminal::{MenuChoice, Terminal};
