use serde::{Deserialize, Serialize};

/// Maps a core-word lemma to its synonym lemma. Several rows may share a core word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synonym {
    pub id: i64,
    pub core_word: String,
    pub synonym: String,
}
