//! request table queries.

use rusqlite::{params, Connection};

use qabase_core::errors::QaResult;
use qabase_core::models::{NewRequest, Request};

use crate::to_storage_err;

/// Insert one question/answer pair and return its id.
pub fn insert_request(conn: &Connection, request: &NewRequest) -> QaResult<i64> {
    conn.execute(
        "INSERT INTO request (request, answer) VALUES (?1, ?2)",
        params![request.request, request.answer],
    )
    .map_err(|e| to_storage_err(format!("insert_request: {e}")))?;
    Ok(conn.last_insert_rowid())
}

/// Load every stored request in insertion order.
pub fn list_requests(conn: &Connection) -> QaResult<Vec<Request>> {
    let mut stmt = conn
        .prepare_cached("SELECT id, request, answer FROM request ORDER BY id")
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| {
            Ok(Request {
                id: row.get(0)?,
                request: row.get(1)?,
                answer: row.get(2)?,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

/// Count stored requests.
pub fn count_requests(conn: &Connection) -> QaResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM request", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}
