//! Administrative bulk import of lexicon lists from XML files.
//!
//! Runs outside the question/answer hot path. Engines built before an import
//! keep their lexicon snapshot; only new engines see the imported rows.

pub mod xml;

use std::path::Path;

use qabase_core::errors::{ImportError, QaResult};
use qabase_core::observability::events;
use qabase_core::traits::IQaStorage;

pub use xml::{parse_senses, parse_service_words};

fn read_source(path: &Path) -> Result<String, ImportError> {
    std::fs::read_to_string(path).map_err(|e| ImportError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Parse `<word>` entries from `path` and insert them as service words.
/// Returns the number of rows inserted.
pub fn import_service_words(storage: &dyn IQaStorage, path: &Path) -> QaResult<usize> {
    let words = parse_service_words(&read_source(path)?)?;
    let rows = storage.insert_service_words(&words)?;
    events::import_completed("service_words", &path.display().to_string(), rows);
    Ok(rows)
}

/// Parse `<sense>` entries from `path` and insert them.
/// Returns the number of rows inserted.
pub fn import_senses(storage: &dyn IQaStorage, path: &Path) -> QaResult<usize> {
    let senses = parse_senses(&read_source(path)?)?;
    let rows = storage.insert_senses(&senses)?;
    events::import_completed("senses", &path.display().to_string(), rows);
    Ok(rows)
}
