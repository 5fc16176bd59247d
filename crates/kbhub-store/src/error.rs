//! Store-specific error types and conversions.

use kbhub_core::error::KbError;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },
}

impl From<StoreError> for KbError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => KbError::NotFound { entity, id },
            StoreError::Json(e) => KbError::Serialization(e.to_string()),
            other => KbError::Storage(other.to_string()),
        }
    }
}
