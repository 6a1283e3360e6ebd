//! Store configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Where the game files live.
///
/// ```toml
/// data_dir = "saves"
/// players_file = "players.txt"
/// saved_game_file = "saved_game.txt"
/// results_file = "game_results.txt"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory prefixed to every file name. Relative names resolve
    /// against the working directory when unset.
    #[serde(default)]
    data_dir: Option<PathBuf>,

    /// Players file name.
    #[serde(default = "default_players_file")]
    players_file: PathBuf,

    /// Saved-game file name.
    #[serde(default = "default_saved_game_file")]
    saved_game_file: PathBuf,

    /// Results log file name.
    #[serde(default = "default_results_file")]
    results_file: PathBuf,
}

fn default_players_file() -> PathBuf {
    PathBuf::from("players.txt")
}

fn default_saved_game_file() -> PathBuf {
    PathBuf::from("saved_game.txt")
}

fn default_results_file() -> PathBuf {
    PathBuf::from("game_results.txt")
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            players_file: default_players_file(),
            saved_game_file: default_saved_game_file(),
            results_file: default_results_file(),
        }
    }
}

impl StoreConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(data_dir = ?config.data_dir, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Replaces the data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    fn resolve(&self, file: &Path) -> PathBuf {
        match &self.data_dir {
            Some(dir) => dir.join(file),
            None => file.to_path_buf(),
        }
    }

    /// Full path of the players file.
    pub fn players_path(&self) -> PathBuf {
        self.resolve(&self.players_file)
    }

    /// Full path of the saved-game file.
    pub fn saved_game_path(&self) -> PathBuf {
        self.resolve(&self.saved_game_file)
    }

    /// Full path of the results log.
    pub fn results_path(&self) -> PathBuf {
        self.resolve(&self.results_file)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
