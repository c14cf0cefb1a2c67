//! service_word and sense table queries.

use rusqlite::{params, Connection};

use qabase_core::constants::MAX_BULK_BATCH_SIZE;
use qabase_core::errors::QaResult;
use qabase_core::models::{Sense, ServiceWord};

use crate::to_storage_err;

/// Bulk-insert service words. One transaction per batch of
/// `MAX_BULK_BATCH_SIZE` rows; returns the number of rows written.
pub fn insert_service_words(conn: &Connection, words: &[String]) -> QaResult<usize> {
    let mut inserted = 0;
    for chunk in words.chunks(MAX_BULK_BATCH_SIZE) {
        let tx = conn
            .unchecked_transaction()
            .map_err(|e| to_storage_err(format!("insert_service_words begin: {e}")))?;
        {
            let mut stmt = tx
                .prepare_cached("INSERT INTO service_word (word) VALUES (?1)")
                .map_err(|e| to_storage_err(e.to_string()))?;
            for word in chunk {
                stmt.execute(params![word])
                    .map_err(|e| to_storage_err(format!("insert_service_words: {e}")))?;
            }
        }
        tx.commit()
            .map_err(|e| to_storage_err(format!("insert_service_words commit: {e}")))?;
        inserted += chunk.len();
    }
    Ok(inserted)
}

/// Load every service word in table order.
pub fn list_service_words(conn: &Connection) -> QaResult<Vec<ServiceWord>> {
    let mut stmt = conn
        .prepare_cached("SELECT id, word FROM service_word ORDER BY id")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| {
            Ok(ServiceWord {
                id: row.get(0)?,
                word: row.get(1)?,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

/// Bulk-insert `(name, lemma)` senses, batched like service words.
pub fn insert_senses(conn: &Connection, senses: &[(String, String)]) -> QaResult<usize> {
    let mut inserted = 0;
    for chunk in senses.chunks(MAX_BULK_BATCH_SIZE) {
        let tx = conn
            .unchecked_transaction()
            .map_err(|e| to_storage_err(format!("insert_senses begin: {e}")))?;
        {
            let mut stmt = tx
                .prepare_cached("INSERT INTO sense (name, lemma) VALUES (?1, ?2)")
                .map_err(|e| to_storage_err(e.to_string()))?;
            for (name, lemma) in chunk {
                stmt.execute(params![name, lemma])
                    .map_err(|e| to_storage_err(format!("insert_senses: {e}")))?;
            }
        }
        tx.commit()
            .map_err(|e| to_storage_err(format!("insert_senses commit: {e}")))?;
        inserted += chunk.len();
    }
    Ok(inserted)
}

/// Load every sense in table order. Sense matching is first-match-wins
/// over this order.
pub fn list_senses(conn: &Connection) -> QaResult<Vec<Sense>> {
    let mut stmt = conn
        .prepare_cached("SELECT id, name, lemma FROM sense ORDER BY id")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| {
            Ok(Sense {
                id: row.get(0)?,
                name: row.get(1)?,
                lemma: row.get(2)?,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}
