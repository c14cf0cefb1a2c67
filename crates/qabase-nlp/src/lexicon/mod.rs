//! Lexicon snapshot: stopwords and senses, read once from the store.
//!
//! A snapshot is immutable. Service words or senses imported after it was
//! taken are invisible until a new snapshot (a new engine) is built.

use std::sync::OnceLock;

use qabase_core::errors::QaResult;
use qabase_core::models::Sense;
use qabase_core::observability::events;
use qabase_core::traits::IQaStorage;

use crate::stopwords::StopwordSet;

/// Immutable stopword set and sense table.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    pub stopwords: StopwordSet,
    /// Senses in insertion order; the first substring match wins.
    pub senses: Vec<Sense>,
}

impl Lexicon {
    /// Read service words and senses from the store.
    pub fn load(storage: &dyn IQaStorage) -> QaResult<Self> {
        let service_words = storage.list_service_words()?;
        let senses = storage.list_senses()?;
        let stopwords = StopwordSet::with_service_words(service_words.iter().map(|w| &w.word));
        events::lexicon_loaded(stopwords.len(), service_words.len(), senses.len());
        Ok(Self { stopwords, senses })
    }

    /// Baseline stopwords and no senses.
    pub fn baseline() -> Self {
        Self {
            stopwords: StopwordSet::baseline(),
            senses: Vec::new(),
        }
    }
}

/// Lazily initialized, per-owner lexicon snapshot.
#[derive(Debug, Default)]
pub struct LexiconCache {
    cell: OnceLock<Lexicon>,
}

impl LexiconCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache that is already initialized with `lexicon`.
    pub fn preloaded(lexicon: Lexicon) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(lexicon);
        Self { cell }
    }

    /// Return the snapshot, loading it from `storage` on first use.
    ///
    /// A failed load leaves the cache empty so the next call retries.
    pub fn get_or_load(&self, storage: &dyn IQaStorage) -> QaResult<&Lexicon> {
        if let Some(lexicon) = self.cell.get() {
            return Ok(lexicon);
        }
        let loaded = Lexicon::load(storage)?;
        Ok(self.cell.get_or_init(|| loaded))
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }
}
