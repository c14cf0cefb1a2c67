//! Single write connection behind a `std::sync::Mutex`.
//! Serialized writes, no contention.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use qabase_core::errors::{QaResult, StorageError};

use super::pragmas::{apply_pragmas, verify_wal_mode};
use crate::to_storage_err;

/// A single write connection protected by a mutex.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open a new write connection to the given database path.
    pub fn open(path: &Path, busy_timeout_ms: u32) -> QaResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, busy_timeout_ms)?;
        if !verify_wal_mode(&conn)? {
            tracing::warn!(path = %path.display(), "WAL journal mode not available");
        }
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> QaResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(|e| to_storage_err(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Acquire the write lock and execute a closure with the connection.
    pub fn with_conn<F, T>(&self, f: F) -> QaResult<T>
    where
        F: FnOnce(&Connection) -> QaResult<T>,
    {
        let guard = self.conn.lock().map_err(|e| StorageError::LockPoisoned {
            details: format!("write connection: {e}"),
        })?;
        f(&guard)
    }
}
