use serde::{Deserialize, Serialize};

use super::defaults;

/// Normalization pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NlpConfig {
    /// Tab-separated `form<TAB>lemma` dictionary for the morphological analyzer.
    pub morph_dictionary_path: Option<String>,
    /// Snowball-stem words the dictionary does not know instead of keeping them verbatim.
    pub stem_unknown_words: bool,
}

impl Default for NlpConfig {
    fn default() -> Self {
        Self {
            morph_dictionary_path: None,
            stem_unknown_words: defaults::DEFAULT_STEM_UNKNOWN_WORDS,
        }
    }
}
