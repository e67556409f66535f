use thiserror::Error;

use crate::version::VersionToken;

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from the storage collaborator.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found: {collection}:{id}")]
    NotFound { collection: String, id: String },

    #[error("record already exists: {collection}:{id}")]
    DuplicateKey { collection: String, id: String },

    #[error("unique constraint failed: {collection}.{field}")]
    UniqueViolation {
        collection: String,
        field: &'static str,
    },

    #[error("record serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("store lock poisoned during {0}")]
    LockPoisoned(&'static str),

    #[error("storage error: {0}")]
    Storage(String),
}

/// Why a conditional write was not applied.
#[derive(Debug, Error)]
pub enum WriteRejection {
    /// Storage holds a different version than the one the writer read.
    #[error("version mismatch (current {current})")]
    VersionMismatch { current: VersionToken },

    /// The record no longer exists.
    #[error("record no longer exists")]
    RecordGone,

    /// Any failure unrelated to versioning.
    #[error(transparent)]
    Failed(#[from] StoreError),
}
