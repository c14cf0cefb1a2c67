//! Schema migrations using PRAGMA user_version.

pub mod v001_initial;
pub mod v002_lexicon;

use rusqlite::Connection;

use qabase_core::constants::SCHEMA_VERSION;
use qabase_core::errors::{QaResult, StorageError};

use crate::to_storage_err;

/// Run all pending migrations.
pub fn run_migrations(conn: &Connection) -> QaResult<()> {
    let current = current_version(conn)?;

    let migrations: &[(&str, u32)] = &[
        (v001_initial::MIGRATION_SQL, 1),
        (v002_lexicon::MIGRATION_SQL, 2),
    ];
    debug_assert_eq!(migrations.len() as u32, SCHEMA_VERSION);

    for (sql, version) in migrations {
        if current < *version {
            conn.execute_batch(sql)
                .map_err(|e| StorageError::MigrationFailed {
                    version: *version,
                    reason: e.to_string(),
                })?;
            conn.pragma_update(None, "user_version", version)
                .map_err(|e| StorageError::MigrationFailed {
                    version: *version,
                    reason: e.to_string(),
                })?;
            tracing::info!(version = version, "applied migration");
        }
    }

    Ok(())
}

/// Get the current schema version.
pub fn current_version(conn: &Connection) -> QaResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))
}
