//! Error types shared by the storage and session layers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlashcardError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FlashcardError>;
