//! synonym table queries.

use rusqlite::{params, params_from_iter, Connection, Row};

use qabase_core::errors::QaResult;
use qabase_core::models::Synonym;

use crate::to_storage_err;

fn row_to_synonym(row: &Row<'_>) -> rusqlite::Result<Synonym> {
    Ok(Synonym {
        id: row.get(0)?,
        core_word: row.get(1)?,
        synonym: row.get(2)?,
    })
}

/// Insert a synonym pair and return its id.
pub fn insert_synonym(conn: &Connection, core_word: &str, synonym: &str) -> QaResult<i64> {
    conn.execute(
        "INSERT INTO synonym (core_word, synonym) VALUES (?1, ?2)",
        params![core_word, synonym],
    )
    .map_err(|e| to_storage_err(format!("insert_synonym: {e}")))?;
    Ok(conn.last_insert_rowid())
}

/// Synonyms whose core word equals one of `words`, in table order.
pub fn synonyms_for(conn: &Connection, words: &[String]) -> QaResult<Vec<Synonym>> {
    if words.is_empty() {
        return Ok(Vec::new());
    }

    let placeholders = vec!["?"; words.len()].join(", ");
    let sql = format!(
        "SELECT id, core_word, synonym FROM synonym WHERE core_word IN ({placeholders}) ORDER BY id"
    );
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params_from_iter(words.iter()), row_to_synonym)
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

/// Load every synonym in table order.
pub fn list_synonyms(conn: &Connection) -> QaResult<Vec<Synonym>> {
    let mut stmt = conn
        .prepare_cached("SELECT id, core_word, synonym FROM synonym ORDER BY id")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], row_to_synonym)
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}
