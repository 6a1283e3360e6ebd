//! Player identities and symbol assignment.

use super::Symbol;
use derive_getters::Getters;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Rejected player setup.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum PlayerError {
    /// Name is empty after trimming.
    #[display("Player name must not be empty")]
    EmptyName,
    /// Name contains a line break and could not be stored.
    #[display("Player name {:?} contains a line break", _0)]
    MultilineName(String),
    /// Both players were given the same symbol.
    #[display("Both players hold {}", _0)]
    SameSymbol(Symbol),
}

impl std::error::Error for PlayerError {}

/// A named player and the symbol they place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    name: String,
    /// Symbol this player places.
    symbol: Symbol,
}

impl Player {
    /// Creates a player, trimming surrounding whitespace from the name.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError`] if the name is empty or spans several lines.
    #[instrument(skip(name))]
    pub fn new(name: impl Into<String>, symbol: Symbol) -> Result<Self, PlayerError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(PlayerError::EmptyName);
        }
        if trimmed.contains(['\n', '\r']) {
            return Err(PlayerError::MultilineName(name));
        }
        Ok(Self {
            name: trimmed.to_string(),
            symbol,
        })
    }

    /// Label shown in prompts, e.g. `Alice (X)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.symbol)
    }
}

/// The two players of a game, holding different symbols.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Players {
    first: Player,
    second: Player,
}

impl Players {
    /// Pairs two players.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::SameSymbol`] if both hold the same symbol.
    #[instrument(skip_all, fields(first = %first.name, second = %second.name))]
    pub fn new(first: Player, second: Player) -> Result<Self, PlayerError> {
        if first.symbol == second.symbol {
            return Err(PlayerError::SameSymbol(first.symbol));
        }
        Ok(Self { first, second })
    }

    /// Builds both players from their names and player 1's chosen symbol.
    ///
    /// Player 2 receives the other symbol.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError`] if either name is rejected.
    pub fn with_choice(
        first_name: impl Into<String>,
        second_name: impl Into<String>,
        first_symbol: Symbol,
    ) -> Result<Self, PlayerError> {
        let first = Player::new(first_name, first_symbol)?;
        let second = Player::new(second_name, first_symbol.other())?;
        Self::new(first, second)
    }

    /// Player 1.
    pub fn first(&self) -> &Player {
        &self.first
    }

    /// Player 2.
    pub fn second(&self) -> &Player {
        &self.second
    }

    /// The player placing `symbol`.
    pub fn holding(&self, symbol: Symbol) -> &Player {
        if self.first.symbol == symbol {
            &self.first
        } else {
            &self.second
        }
    }
}
