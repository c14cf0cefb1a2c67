//! Query-side synonym substitution.
//!
//! Lookup is by exact token (`core_word IN tokens`), but replacement is a
//! substring replace across every token: a short core word also rewrites
//! longer tokens that contain it.

use qabase_core::errors::QaResult;
use qabase_core::models::Synonym;
use qabase_core::traits::IQaStorage;

/// Rewrites normalized tokens using the store's synonym table.
pub struct SynonymSubstitutor<'a> {
    storage: &'a dyn IQaStorage,
}

impl<'a> SynonymSubstitutor<'a> {
    pub fn new(storage: &'a dyn IQaStorage) -> Self {
        Self { storage }
    }

    /// Substitute synonyms in `tokens`. Matching rows apply in table order.
    pub fn substitute(&self, tokens: Vec<String>) -> QaResult<Vec<String>> {
        let matches = self.storage.synonyms_for(&tokens)?;
        if !matches.is_empty() {
            tracing::debug!(matches = matches.len(), "applying synonyms");
        }
        Ok(apply_synonyms(tokens, &matches))
    }
}

/// Replace every occurrence of each `core_word` inside every token, one
/// synonym after another.
pub fn apply_synonyms(mut tokens: Vec<String>, synonyms: &[Synonym]) -> Vec<String> {
    for synonym in synonyms.iter().filter(|s| !s.core_word.is_empty()) {
        for token in tokens.iter_mut() {
            if token.contains(&synonym.core_word) {
                *token = token.replace(&synonym.core_word, &synonym.synonym);
            }
        }
    }
    tokens
}
