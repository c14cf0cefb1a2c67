//! # qabase-storage
//!
//! SQLite persistence layer: connection pool, pragmas, versioned migrations,
//! per-table queries and XML bulk import of lexicon lists.

pub mod engine;
pub mod import;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use qabase_core::errors::{QaError, StorageError};

/// Wrap a SQLite failure message into the top-level error.
pub(crate) fn to_storage_err(message: String) -> QaError {
    QaError::StorageError(StorageError::SqliteError { message })
}
