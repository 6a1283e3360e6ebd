//! Game flow: one engine plus the files it is saved to.

use crate::game::{GameEngine, GameState, GameStatus, IllegalMove, MoveResult, Players, Symbol};
use crate::persistence::{PersistError, PersistenceStore, ResultRecord};
use tracing::{debug, info, instrument, warn};

/// Outcome of trying to continue a saved game.
#[derive(Debug)]
pub enum Resume {
    /// The saved game was loaded into the engine.
    Loaded,
    /// Nothing usable on disk; start a new game instead.
    Fresh(PersistError),
}

/// A running game session.
///
/// Persistence failures never abort play: they are logged and, where a
/// caller can act on them, returned.
#[derive(Debug, Clone)]
pub struct Session {
    engine: GameEngine,
    store: PersistenceStore,
}

impl Session {
    /// Creates a session with no game started.
    #[instrument(skip(store))]
    pub fn new(store: PersistenceStore) -> Self {
        info!("Creating Session");
        Self {
            engine: GameEngine::new(),
            store,
        }
    }

    /// The engine driving this session.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// The backing store.
    pub fn store(&self) -> &PersistenceStore {
        &self.store
    }

    /// Current game state, if any.
    pub fn state(&self) -> Option<&GameState> {
        self.engine.state()
    }

    /// Saves the players file and starts a new game.
    #[instrument(skip(self, players))]
    pub fn start_new(&mut self, players: Players, first_symbol: Symbol) -> &GameState {
        if let Err(e) = self.store.save_players(&players) {
            warn!(error = %e, "Could not save players");
        }
        self.engine.new_game(players, first_symbol)
    }

    /// Loads the saved game into the engine.
    #[instrument(skip(self))]
    pub fn resume(&mut self) -> Resume {
        match self.store.load_game() {
            Ok(state) => {
                self.engine.resume(state);
                Resume::Loaded
            }
            Err(e) => {
                info!(kind = %e.kind(), "No usable saved game");
                Resume::Fresh(e)
            }
        }
    }

    /// Plays the current player's mark at `index`.
    ///
    /// When the move ends the game, exactly one record is appended to the
    /// results log using the outcome reported by the engine. A failed
    /// append is logged; the move stands.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove`] if the engine rejects the move.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) -> Result<MoveResult, IllegalMove> {
        let result = self.engine.submit_move(index)?;
        if let Some(record) = ResultRecord::finished_now(result.state()) {
            debug!(result = %record.result_text(), "Recording finished game");
            if let Err(e) = self.store.append_result(&record) {
                warn!(error = %e, "Could not append game result");
            }
        }
        Ok(result)
    }

    /// Writes the current game to the saved-game file.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError`] if the write fails. Without a running game
    /// there is nothing to save and this is a no-op.
    #[instrument(skip(self))]
    pub fn save(&self) -> Result<(), PersistError> {
        match self.engine.state() {
            Some(state) => self.store.save_game(state),
            None => {
                debug!("No game to save");
                Ok(())
            }
        }
    }

    /// Starts another round with the same players; player 1 moves first.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove::NotStarted`] if no game was ever started.
    #[instrument(skip(self))]
    pub fn play_again(&mut self) -> Result<&GameState, IllegalMove> {
        self.engine.reset()
    }

    /// Status text for the current state.
    ///
    /// `Alice (X)'s turn.`, `Alice wins!`, or `It's a draw!`.
    pub fn status_line(&self) -> Option<String> {
        self.engine.state().map(status_line)
    }
}

/// Status text for `state`.
pub fn status_line(state: &GameState) -> String {
    match state.status() {
        GameStatus::InProgress => format!("{}'s turn.", state.current_player().label()),
        GameStatus::Won(symbol) => format!("{} wins!", state.players().holding(*symbol).name()),
        GameStatus::Draw => "It's a draw!".to_string(),
    }
}
