//! Test fixture loader for qabase golden scenarios.
//!
//! Provides typed deserialization of the fixture JSON files and helper
//! functions for loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Root directory of the fixture files.
pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    load_path(&fixtures_root().join(relative_path))
}

fn load_path<T: DeserializeOwned>(path: &Path) -> T {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// One end-to-end matching scenario: lexicon and morphology setup, recorded
/// pairs, and the queries to run against them.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchingScenario {
    pub description: String,
    /// `[form, lemma]` pairs for the morphological dictionary.
    #[serde(default)]
    pub morph: Vec<(String, String)>,
    #[serde(default)]
    pub service_words: Vec<String>,
    #[serde(default)]
    pub senses: Vec<SenseRow>,
    #[serde(default)]
    pub synonyms: Vec<SynonymRow>,
    #[serde(default)]
    pub min_score: Option<f64>,
    #[serde(default)]
    pub records: Vec<RecordRow>,
    pub queries: Vec<QueryCase>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SenseRow {
    pub name: String,
    pub lemma: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SynonymRow {
    pub core_word: String,
    pub synonym: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecordRow {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueryCase {
    pub question: String,
    #[serde(default)]
    pub expected_top: Option<String>,
    #[serde(default)]
    pub expected_top_score: Option<f64>,
    /// Lower bound (exclusive) for the top score.
    #[serde(default)]
    pub expected_top_score_above: Option<f64>,
    #[serde(default)]
    pub expected_count: Option<usize>,
    /// The query must fail with `EmptyQuery`.
    #[serde(default)]
    pub expect_empty_query: bool,
}

/// Load every matching scenario under `golden/matching`, paired with its path.
pub fn matching_scenarios() -> Vec<(PathBuf, MatchingScenario)> {
    list_fixtures("golden/matching")
        .into_iter()
        .map(|path| {
            let scenario = load_path(&path);
            (path, scenario)
        })
        .collect()
}
