//! Turn sequencing and win detection on top of [`Board`].
//!
//! The engine owns an explicit [`GameState`] value. Presentation code
//! reads that state and feeds cell indices to [`GameEngine::submit_move`];
//! it never holds game state of its own.

use super::rules;
use super::{Board, GameStatus, InvalidMove, Player, Players, Symbol};
use derive_getters::Getters;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Complete state of one game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameState {
    /// Both players and their symbols.
    players: Players,
    /// The board.
    board: Board,
    /// Symbol to move next (the last mover once terminal).
    turn: Symbol,
    /// Whether the game is still running.
    status: GameStatus,
}

impl GameState {
    /// Fresh game: empty board, `turn` moves first.
    pub fn new(players: Players, turn: Symbol) -> Self {
        Self {
            players,
            board: Board::new(),
            turn,
            status: GameStatus::InProgress,
        }
    }

    /// Rebuilds a state from stored parts, deriving the status from the board.
    pub fn restore(players: Players, board: Board, turn: Symbol) -> Self {
        let status = rules::status_of(&board);
        Self {
            players,
            board,
            turn,
            status,
        }
    }

    /// True once the game is won or drawn.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// The player whose symbol is `turn`.
    pub fn current_player(&self) -> &Player {
        self.players.holding(self.turn)
    }

    /// The winning player, if any.
    pub fn winner(&self) -> Option<&Player> {
        self.status.winner().map(|symbol| self.players.holding(symbol))
    }
}

/// Lifecycle phase of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Phase {
    /// No game started yet.
    Setup,
    /// Accepting moves.
    InProgress,
    /// Won or drawn; only a reset or new game leaves this phase.
    Terminal,
}

/// What a single accepted move did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Game continues with the other symbol.
    Continue,
    /// The mover completed a line.
    Win(Symbol),
    /// Board filled without a line.
    Draw,
}

impl From<GameStatus> for MoveOutcome {
    fn from(status: GameStatus) -> Self {
        match status {
            GameStatus::InProgress => MoveOutcome::Continue,
            GameStatus::Won(symbol) => MoveOutcome::Win(symbol),
            GameStatus::Draw => MoveOutcome::Draw,
        }
    }
}

/// Result of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct MoveResult {
    /// What the move did.
    outcome: MoveOutcome,
    /// State right after the move.
    state: GameState,
}

/// A move the engine refused. The state is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IllegalMove {
    /// No game has been started.
    #[display("No game in progress")]
    NotStarted,
    /// The game is already won or drawn.
    #[display("Game is already over")]
    GameOver,
    /// The board rejected the placement.
    #[display("{}", _0)]
    Board(InvalidMove),
}

impl std::error::Error for IllegalMove {}

impl From<InvalidMove> for IllegalMove {
    fn from(err: InvalidMove) -> Self {
        IllegalMove::Board(err)
    }
}

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: Option<GameState>,
}

impl GameEngine {
    /// Creates an engine in the setup phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        match &self.state {
            None => Phase::Setup,
            Some(state) if state.is_terminal() => Phase::Terminal,
            Some(_) => Phase::InProgress,
        }
    }

    /// Current state, if a game has been started or resumed.
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    /// Starts a new game; `first_symbol` moves first.
    #[instrument(skip(self, players), fields(first = %players.first().label(), second = %players.second().label()))]
    pub fn new_game(&mut self, players: Players, first_symbol: Symbol) -> &GameState {
        info!(%first_symbol, "Starting new game");
        self.state.insert(GameState::new(players, first_symbol))
    }

    /// Continues from a previously saved state.
    #[instrument(skip(self, state), fields(turn = %state.turn(), status = ?state.status()))]
    pub fn resume(&mut self, state: GameState) -> &GameState {
        info!("Resuming saved game");
        self.state.insert(state)
    }

    /// Clears the board and gives the turn back to player 1.
    ///
    /// Player names and symbols are kept.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove::NotStarted`] in the setup phase.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<&GameState, IllegalMove> {
        let state = self.state.as_mut().ok_or(IllegalMove::NotStarted)?;
        state.board.reset();
        state.turn = *state.players.first().symbol();
        state.status = GameStatus::InProgress;
        info!(turn = %state.turn, "Game reset");
        Ok(&*state)
    }

    /// Places the current player's symbol at `index` (0-8).
    ///
    /// The mover's symbol is checked against every line; a full board
    /// without a line is a draw; otherwise the turn passes on.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove`] when no game is running, the game is over,
    /// or the cell is out of range or occupied. Nothing changes on error.
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, index: usize) -> Result<MoveResult, IllegalMove> {
        let state = self.state.as_mut().ok_or(IllegalMove::NotStarted)?;
        if state.is_terminal() {
            debug!("Move rejected, game over");
            return Err(IllegalMove::GameOver);
        }

        let mover = state.turn;
        state.board.place(index, mover)?;

        state.status = rules::evaluate(&state.board, mover);
        match state.status {
            GameStatus::InProgress => state.turn = mover.other(),
            GameStatus::Won(symbol) => info!(%symbol, "Game won"),
            GameStatus::Draw => info!("Game drawn"),
        }
        debug!(%mover, index, status = ?state.status, "Move applied");

        Ok(MoveResult {
            outcome: state.status.into(),
            state: state.clone(),
        })
    }

    /// Display label of the player to move, e.g. `Alice (X)`.
    pub fn turn_label(&self) -> Option<String> {
        self.state.as_ref().map(|state| state.current_player().label())
    }
}
