use thiserror::Error;

/// Failure talking to the persisted key/value store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("persistent storage is unavailable")]
    Unavailable,

    #[error("failed to write key `{key}`: {reason}")]
    Write { key: String, reason: String },

    #[error("failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),
}
