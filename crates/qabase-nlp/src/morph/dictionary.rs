//! Dictionary-backed analyzer.
//!
//! File format: one `form<TAB>lemma` pair per line; blank lines and lines
//! starting with `#` are ignored. When a form appears twice the first
//! lemma wins, matching a ranked analyzer's top parse.

use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use rust_stemmers::{Algorithm, Stemmer};

use qabase_core::config::NlpConfig;
use qabase_core::errors::{QaError, QaResult};
use qabase_core::traits::IMorphAnalyzer;

/// Word-form → lemma lookup with an optional Snowball fallback for unknown words.
pub struct MorphDictionary {
    lemmas: HashMap<String, String>,
    stemmer: Option<Stemmer>,
}

impl MorphDictionary {
    /// Build from in-memory `(form, lemma)` pairs.
    pub fn from_pairs<I, F, L>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (F, L)>,
        F: AsRef<str>,
        L: AsRef<str>,
    {
        let mut lemmas = HashMap::new();
        for (form, lemma) in pairs {
            lemmas
                .entry(form.as_ref().trim().to_lowercase())
                .or_insert_with(|| lemma.as_ref().trim().to_lowercase());
        }
        Self {
            lemmas,
            stemmer: None,
        }
    }

    /// Parse the tab-separated format from any reader.
    pub fn from_reader<R: BufRead>(reader: R) -> QaResult<Self> {
        let mut pairs = Vec::new();
        for (line_no, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| QaError::ConfigError {
                reason: format!("morph dictionary line {}: {e}", line_no + 1),
            })?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (form, lemma) = line.split_once('\t').ok_or_else(|| QaError::ConfigError {
                reason: format!("morph dictionary line {}: expected form<TAB>lemma", line_no + 1),
            })?;
            pairs.push((form.to_string(), lemma.to_string()));
        }
        Ok(Self::from_pairs(pairs))
    }

    /// Load a dictionary file.
    pub fn load(path: &Path) -> QaResult<Self> {
        let file = std::fs::File::open(path).map_err(|e| QaError::ConfigError {
            reason: format!("{}: {e}", path.display()),
        })?;
        let dictionary = Self::from_reader(std::io::BufReader::new(file))?;
        tracing::info!(path = %path.display(), forms = dictionary.len(), "morph dictionary loaded");
        Ok(dictionary)
    }

    /// Build the analyzer described by `config`: the configured dictionary
    /// (or an empty one) plus the optional stemming fallback.
    pub fn from_config(config: &NlpConfig) -> QaResult<Self> {
        let dictionary = match &config.morph_dictionary_path {
            Some(path) => Self::load(Path::new(path))?,
            None => Self::from_pairs(Vec::<(String, String)>::new()),
        };
        Ok(dictionary.with_stemming(config.stem_unknown_words))
    }

    /// Stem words missing from the dictionary with the Russian Snowball stemmer.
    pub fn with_stemming(mut self, enabled: bool) -> Self {
        self.stemmer = enabled.then(|| Stemmer::create(Algorithm::Russian));
        self
    }

    /// Number of known word forms.
    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }
}

impl IMorphAnalyzer for MorphDictionary {
    fn best_normal_form(&self, word: &str) -> String {
        let word = word.to_lowercase();
        if let Some(lemma) = self.lemmas.get(&word) {
            return lemma.clone();
        }
        match &self.stemmer {
            Some(stemmer) => stemmer.stem(&word).into_owned(),
            None => word,
        }
    }

    fn name(&self) -> &str {
        "dictionary"
    }
}
