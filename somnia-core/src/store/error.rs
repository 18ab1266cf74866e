//! Storage error type

use thiserror::Error;

/// Errors from the persistence layer
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying SQLite failure
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A uniqueness constraint was violated (duplicate nickname)
    #[error("conflict: {0}")]
    Conflict(String),

    /// A migration failed to apply
    #[error("migration failed: {0}")]
    Migration(String),
}

impl StoreError {
    /// Whether this error is the duplicate-nickname conflict rather than a
    /// storage fault.
    pub fn is_conflict(&self) -> bool {
        matches!(self, StoreError::Conflict(_))
    }
}
