//! Persistence error types.

use derive_more::{Display, Error};
use std::path::Path;
use tracing::instrument;

/// Category of a persistence failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum PersistErrorKind {
    /// The file does not exist.
    #[display("not found")]
    NotFound,
    /// The file exists but does not follow the line format.
    #[display("malformed")]
    Malformed,
    /// Reading or writing failed.
    #[display("I/O failure")]
    Io,
}

/// Persistence error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Persistence error ({}): {} at {}:{}", kind, message, file, line)]
pub struct PersistError {
    /// Failure category.
    pub kind: PersistErrorKind,
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl PersistError {
    /// Creates a new persistence error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(kind: PersistErrorKind, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Shorthand for a [`PersistErrorKind::Malformed`] error.
    #[track_caller]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(PersistErrorKind::Malformed, message)
    }

    /// Maps an I/O error on `path`, keeping "not found" distinct.
    #[track_caller]
    pub fn from_io(path: &Path, err: &std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => PersistErrorKind::NotFound,
            _ => PersistErrorKind::Io,
        };
        Self::new(kind, format!("'{}': {}", path.display(), err))
    }

    /// Failure category.
    pub fn kind(&self) -> PersistErrorKind {
        self.kind
    }
}
