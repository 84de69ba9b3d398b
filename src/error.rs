//! Error types for pbrepair.
//!
//! Every failure during a repair run funnels into [`Error`], which is what the
//! runner's catch-all prints before closing the store.

use thiserror::Error;

/// All pbrepair errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The store file does not exist
    #[error("database not found: {0}")]
    NotFound(String),

    /// SQLite failure (open, statement, commit, close, missing table)
    #[error("{0}")]
    Sqlite(#[from] rusqlite::Error),

    /// I/O error (console output)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error (JSON output)
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Backup could not be taken
    #[error("backup failed: {0}")]
    Backup(String),
}

/// Result type for pbrepair operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a missing-store error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Check if this error came from SQLite.
    pub fn is_sqlite(&self) -> bool {
        matches!(self, Error::Sqlite(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
