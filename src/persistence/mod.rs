//! Flat-file persistence for players, saved games, and finished-game results.

mod error;
mod format;
mod record;
mod store;

pub use error::{PersistError, PersistErrorKind};
pub use format::{
    RESULT_SEPARATOR, TIMESTAMP_FORMAT, decode_game, decode_players, encode_game,
    encode_players, encode_result,
};
pub use record::{RecordedOutcome, ResultRecord};
pub use store::PersistenceStore;
