//! Error types for trainer-core.

use thiserror::Error;

/// Errors from dataset loading and validation.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("record {index} has no id")]
    MissingId { index: usize },

    #[error("record {index} has no English text")]
    MissingEnglish { index: usize },

    #[error("record {index} has no reference translation")]
    MissingReference { index: usize },

    #[error("record {index} has unknown level {value:?}")]
    InvalidLevel { index: usize, value: String },

    #[error("duplicate id {id}")]
    DuplicateId { id: i64 },
}

/// Errors from persisting progress or history snapshots.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors from misusing the review session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no active item: call draw before submitting an answer")]
    NoActiveItem,
}
