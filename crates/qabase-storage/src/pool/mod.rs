//! Connection pool managing read/write connections.

pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

use std::path::Path;

use qabase_core::errors::QaResult;

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;

/// Manages the single write connection and the read connection pool.
pub struct ConnectionPool {
    pub writer: WriteConnection,
    /// `None` for in-memory databases, where every reader would be a
    /// separate empty database. Reads then go through the writer.
    pub readers: Option<ReadPool>,
}

impl ConnectionPool {
    /// Open a connection pool for the given database file.
    ///
    /// The writer is opened first so that the file exists (and is in WAL
    /// mode) before the read-only connections attach to it.
    pub fn open(path: &Path, read_pool_size: usize, busy_timeout_ms: u32) -> QaResult<Self> {
        let writer = WriteConnection::open(path, busy_timeout_ms)?;
        let readers = ReadPool::open(path, read_pool_size, busy_timeout_ms)?;
        Ok(Self {
            writer,
            readers: Some(readers),
        })
    }

    /// Open an in-memory database with a writer only (for testing).
    pub fn open_in_memory() -> QaResult<Self> {
        Ok(Self {
            writer: WriteConnection::open_in_memory()?,
            readers: None,
        })
    }
}
