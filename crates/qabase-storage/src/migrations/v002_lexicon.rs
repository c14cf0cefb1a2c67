//! V002: service words (extra stopwords) and senses (phrase → lemma overrides).

pub const MIGRATION_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS service_word (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    word TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS sense (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    lemma TEXT NOT NULL
);
"#;
