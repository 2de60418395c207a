use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while fetching the question corpus.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("question source {} is unreachable: {source}", .path.display())]
    Unreachable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("question source returned malformed data: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("question #{index} is invalid: {reason}")]
    InvalidQuestion { index: usize, reason: String },
}

/// Errors surfaced by key-value storage adapters.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("migration error: {0}")]
    Migration(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors reported by the quiz session controller.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The question corpus could not be loaded. Terminal for the session.
    #[error("failed to load questions: {0}")]
    LoadFailure(#[from] LoadError),

    /// Review was requested while no wrong answers are recorded.
    #[error("no wrong answers recorded yet")]
    EmptyReviewSet,
}
