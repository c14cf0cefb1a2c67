//! StorageEngine: owns the ConnectionPool, runs migrations at startup and
//! implements IQaStorage.

use std::path::Path;

use rusqlite::Connection;

use qabase_core::config::StorageConfig;
use qabase_core::errors::QaResult;
use qabase_core::models::{NewRequest, Request, Sense, ServiceWord, Synonym};
use qabase_core::traits::IQaStorage;

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::{lexicon_ops, request_ops, synonym_ops};

/// The main storage engine.
pub struct StorageEngine {
    pool: ConnectionPool,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk with default settings.
    pub fn open(path: &Path) -> QaResult<Self> {
        Self::open_with_config(path, &StorageConfig::default())
    }

    /// Open a file-backed storage engine using pool size and busy timeout from `config`.
    pub fn open_with_config(path: &Path, config: &StorageConfig) -> QaResult<Self> {
        let pool = ConnectionPool::open(path, config.read_pool_size, config.busy_timeout_ms)?;
        let engine = Self { pool };
        engine.initialize()?;
        tracing::debug!(path = %path.display(), "storage opened");
        Ok(engine)
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> QaResult<Self> {
        let pool = ConnectionPool::open_in_memory()?;
        let engine = Self { pool };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&self) -> QaResult<()> {
        self.pool.writer.with_conn(migrations::run_migrations)
    }

    /// Current schema version (`PRAGMA user_version`).
    pub fn schema_version(&self) -> QaResult<u32> {
        self.pool.writer.with_conn(migrations::current_version)
    }

    /// Execute a read-only query on the read pool, or on the writer when
    /// there is none.
    fn with_reader<F, T>(&self, f: F) -> QaResult<T>
    where
        F: FnOnce(&Connection) -> QaResult<T>,
    {
        match &self.pool.readers {
            Some(readers) => readers.with_conn(f),
            None => self.pool.writer.with_conn(f),
        }
    }
}

impl IQaStorage for StorageEngine {
    fn insert_request(&self, request: &NewRequest) -> QaResult<i64> {
        self.pool
            .writer
            .with_conn(|conn| request_ops::insert_request(conn, request))
    }

    fn list_requests(&self) -> QaResult<Vec<Request>> {
        self.with_reader(request_ops::list_requests)
    }

    fn count_requests(&self) -> QaResult<usize> {
        self.with_reader(request_ops::count_requests)
    }

    fn insert_synonym(&self, core_word: &str, synonym: &str) -> QaResult<i64> {
        self.pool
            .writer
            .with_conn(|conn| synonym_ops::insert_synonym(conn, core_word, synonym))
    }

    fn synonyms_for(&self, words: &[String]) -> QaResult<Vec<Synonym>> {
        self.with_reader(|conn| synonym_ops::synonyms_for(conn, words))
    }

    fn list_synonyms(&self) -> QaResult<Vec<Synonym>> {
        self.with_reader(synonym_ops::list_synonyms)
    }

    fn insert_service_words(&self, words: &[String]) -> QaResult<usize> {
        self.pool
            .writer
            .with_conn(|conn| lexicon_ops::insert_service_words(conn, words))
    }

    fn list_service_words(&self) -> QaResult<Vec<ServiceWord>> {
        self.with_reader(lexicon_ops::list_service_words)
    }

    fn insert_senses(&self, senses: &[(String, String)]) -> QaResult<usize> {
        self.pool
            .writer
            .with_conn(|conn| lexicon_ops::insert_senses(conn, senses))
    }

    fn list_senses(&self) -> QaResult<Vec<Sense>> {
        self.with_reader(lexicon_ops::list_senses)
    }
}
