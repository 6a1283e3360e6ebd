//! Finished-game records for the results log.

use crate::game::{GameState, GameStatus, Player, Symbol};
use chrono::{Local, NaiveDateTime};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// How a recorded game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordedOutcome {
    /// The player holding this symbol won.
    Win(Symbol),
    /// Nobody won.
    Draw,
}

/// One finished game as written to the results log. Never rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct ResultRecord {
    /// Local time the game finished.
    played_at: NaiveDateTime,
    /// Player 1.
    player1: Player,
    /// Player 2.
    player2: Player,
    /// How it ended.
    outcome: RecordedOutcome,
}

impl ResultRecord {
    /// Record for a finished game, stamped with the current local time.
    ///
    /// Returns `None` while the game is still in progress.
    #[instrument(skip(state), fields(status = ?state.status()))]
    pub fn finished_now(state: &GameState) -> Option<Self> {
        let outcome = match state.status() {
            GameStatus::InProgress => return None,
            GameStatus::Won(symbol) => RecordedOutcome::Win(*symbol),
            GameStatus::Draw => RecordedOutcome::Draw,
        };
        let players = state.players();
        Some(Self::new(
            Local::now().naive_local(),
            players.first().clone(),
            players.second().clone(),
            outcome,
        ))
    }

    /// Text of the `Result:` line, e.g. `Alice wins!` or `It's a draw!`.
    pub fn result_text(&self) -> String {
        match self.outcome {
            RecordedOutcome::Win(symbol) => {
                let winner = if *self.player1.symbol() == symbol {
                    &self.player1
                } else {
                    &self.player2
                };
                format!("{} wins!", winner.name())
            }
            RecordedOutcome::Draw => "It's a draw!".to_string(),
        }
    }
}
