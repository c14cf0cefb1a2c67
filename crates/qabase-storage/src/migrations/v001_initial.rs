//! V001: question/answer pairs and synonyms.

pub const MIGRATION_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS request (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    request TEXT NOT NULL,
    answer TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS synonym (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    core_word TEXT NOT NULL,
    synonym TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_synonym_core_word ON synonym(core_word);
"#;
