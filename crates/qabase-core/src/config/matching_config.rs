use serde::{Deserialize, Serialize};

use super::defaults;

/// Matching engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Drop answers scoring at or below this value. `None` returns every
    /// stored answer. The first engine generation used `0.75`.
    pub min_score: Option<f64>,
    /// When exactly one token survives stopword filtering, use it as the
    /// only phrase instead of producing no bigrams.
    pub single_token_fallback: bool,
    /// Truncate the ranked list to this many entries.
    pub max_results: Option<usize>,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            min_score: None,
            single_token_fallback: defaults::DEFAULT_SINGLE_TOKEN_FALLBACK,
            max_results: None,
        }
    }
}
