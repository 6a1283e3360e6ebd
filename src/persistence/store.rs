//! File-backed store for players, the saved game, and the results log.

use super::format;
use super::{PersistError, ResultRecord};
use crate::config::StoreConfig;
use crate::game::{GameState, Players};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Reads and writes the three game files.
///
/// The players and saved-game files are overwritten whole; the results
/// log is only ever appended to.
#[derive(Debug, Clone)]
pub struct PersistenceStore {
    players_path: PathBuf,
    saved_game_path: PathBuf,
    results_path: PathBuf,
}

impl PersistenceStore {
    /// Creates a store using the file locations in `config`.
    #[instrument(skip(config))]
    pub fn new(config: &StoreConfig) -> Self {
        let store = Self {
            players_path: config.players_path(),
            saved_game_path: config.saved_game_path(),
            results_path: config.results_path(),
        };
        debug!(?store, "Created PersistenceStore");
        store
    }

    /// Creates a store with the default file names inside `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(&StoreConfig::default().with_data_dir(dir))
    }

    /// Location of the players file.
    pub fn players_path(&self) -> &Path {
        &self.players_path
    }

    /// Location of the saved-game file.
    pub fn saved_game_path(&self) -> &Path {
        &self.saved_game_path
    }

    /// Location of the results log.
    pub fn results_path(&self) -> &Path {
        &self.results_path
    }

    #[track_caller]
    fn read(path: &Path) -> Result<String, PersistError> {
        std::fs::read_to_string(path).map_err(|e| PersistError::from_io(path, &e))
    }

    #[track_caller]
    fn overwrite(path: &Path, contents: &str) -> Result<(), PersistError> {
        std::fs::write(path, contents).map_err(|e| PersistError::from_io(path, &e))
    }

    /// Overwrites the saved-game file with `state`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError`] if the file cannot be written.
    #[instrument(skip(self, state), fields(path = %self.saved_game_path.display()))]
    pub fn save_game(&self, state: &GameState) -> Result<(), PersistError> {
        Self::overwrite(&self.saved_game_path, &format::encode_game(state))?;
        info!(turn = %state.turn(), "Game saved");
        Ok(())
    }

    /// Loads the saved game.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError`] with kind `NotFound` when there is no save,
    /// `Malformed` when it does not parse, or `Io` when it cannot be read.
    #[instrument(skip(self), fields(path = %self.saved_game_path.display()))]
    pub fn load_game(&self) -> Result<GameState, PersistError> {
        let text = Self::read(&self.saved_game_path)?;
        let state = format::decode_game(&text)?;
        info!(turn = %state.turn(), status = ?state.status(), "Game loaded");
        Ok(state)
    }

    /// Overwrites the players file.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError`] if the file cannot be written.
    #[instrument(skip(self, players), fields(path = %self.players_path.display()))]
    pub fn save_players(&self, players: &Players) -> Result<(), PersistError> {
        Self::overwrite(&self.players_path, &format::encode_players(players))?;
        info!("Players saved");
        Ok(())
    }

    /// Loads the players file.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError`] if the file is missing, unreadable, or malformed.
    #[instrument(skip(self), fields(path = %self.players_path.display()))]
    pub fn load_players(&self) -> Result<Players, PersistError> {
        let text = Self::read(&self.players_path)?;
        format::decode_players(&text)
    }

    /// Appends one block to the results log, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError`] if the log cannot be opened or written.
    #[instrument(skip(self, record), fields(path = %self.results_path.display(), result = %record.result_text()))]
    pub fn append_result(&self, record: &ResultRecord) -> Result<(), PersistError> {
        let path = &self.results_path;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| PersistError::from_io(path, &e))?;
        file.write_all(format::encode_result(record).as_bytes())
            .map_err(|e| PersistError::from_io(path, &e))?;
        info!("Result appended");
        Ok(())
    }

    /// Reads every parseable record from the results log, oldest first.
    ///
    /// A missing log yields no records. Blocks that do not parse are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError`] if the log exists but cannot be read.
    #[instrument(skip(self), fields(path = %self.results_path.display()))]
    pub fn read_results(&self) -> Result<Vec<ResultRecord>, PersistError> {
        let text = match Self::read(&self.results_path) {
            Ok(text) => text,
            Err(e) if e.kind() == super::PersistErrorKind::NotFound => {
                debug!("No results log yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        let records = format::split_results(&text)
            .into_iter()
            .enumerate()
            .filter_map(|(n, block)| match format::decode_result(&block) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(block = n, error = %e, "Skipping unreadable result block");
                    None
                }
            })
            .collect::<Vec<_>>();
        debug!(count = records.len(), "Results read");
        Ok(records)
    }
}
