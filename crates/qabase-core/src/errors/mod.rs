//! Error taxonomy. Sub-errors convert into [`QaError`] via `From`.

mod import_error;
mod storage_error;

pub use import_error::ImportError;
pub use storage_error::StorageError;

/// Top-level error returned by every qabase operation.
#[derive(Debug, thiserror::Error)]
pub enum QaError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("question normalizes to nothing: {question:?}")]
    EmptyQuery { question: String },

    #[error("config error: {reason}")]
    ConfigError { reason: String },

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("import error: {0}")]
    ImportError(#[from] ImportError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type QaResult<T> = Result<T, QaError>;
