use socialsphere_shared::types::PostId;
use thiserror::Error;

/// Errors produced by the store layer.
///
/// Corrupt persisted data has no variant: [`Store::load`](crate::Store::load)
/// recovers from it by reseeding.
#[derive(Error, Debug)]
pub enum StoreError {
    /// SQLite error.
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Failed to determine a platform data directory.
    #[error("Could not determine application data directory")]
    NoDataDir,

    /// Generic I/O error (e.g. creating the database directory).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Migration failure.
    #[error("Migration error: {0}")]
    Migration(String),

    /// The in-memory state could not be encoded for the mirror.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An action referenced a post that is not in the store.
    #[error("Post not found: {0}")]
    PostNotFound(PostId),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
