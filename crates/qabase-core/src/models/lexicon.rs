//! Administratively curated lexicon rows, bulk-imported and read-only at query time.

use serde::{Deserialize, Serialize};

/// A stopword merged with the baseline list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceWord {
    pub id: i64,
    pub word: String,
}

/// A phrase pattern that resolves directly to `lemma`, bypassing
/// morphological analysis. `name` matches when it occurs anywhere
/// inside the lowercased phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    pub id: i64,
    pub name: String,
    pub lemma: String,
}
