//! MatchingEngine: records question/answer pairs and answers questions.
//!
//! Recording: tokenize → filter → bigrams → resolve → join → insert.
//! Answering: the same pipeline, then query-side synonym substitution, then
//! ranking every stored request by its best phrase similarity.
//!
//! Synonyms are applied to queries only. Stored requests are never rewritten.

use qabase_core::config::MatchingConfig;
use qabase_core::errors::{QaError, QaResult};
use qabase_core::models::{NewRequest, RankedAnswer};
use qabase_core::observability::events;
use qabase_core::traits::{IMorphAnalyzer, IQaStorage};
use qabase_nlp::{Lexicon, LexiconCache, Normalizer, SynonymSubstitutor};
use tracing::debug;

use crate::ranking;

/// Question/answer matcher over a store and a morphological analyzer.
///
/// The lexicon (stopwords and senses) is read from the store on first use
/// and kept for the lifetime of the engine.
pub struct MatchingEngine<'a> {
    storage: &'a dyn IQaStorage,
    analyzer: &'a dyn IMorphAnalyzer,
    lexicon: LexiconCache,
    config: MatchingConfig,
}

impl<'a> MatchingEngine<'a> {
    pub fn new(
        storage: &'a dyn IQaStorage,
        analyzer: &'a dyn IMorphAnalyzer,
        config: MatchingConfig,
    ) -> Self {
        Self {
            storage,
            analyzer,
            lexicon: LexiconCache::new(),
            config,
        }
    }

    /// Use `lexicon` instead of reading one from the store.
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = LexiconCache::preloaded(lexicon);
        self
    }

    /// The lexicon snapshot, loading it on first call.
    pub fn lexicon(&self) -> QaResult<&Lexicon> {
        self.lexicon.get_or_load(self.storage)
    }

    fn normalizer(&self) -> QaResult<Normalizer<'_>> {
        Ok(Normalizer::new(
            self.lexicon()?,
            self.analyzer,
            self.config.single_token_fallback,
        ))
    }

    /// Resolved phrases of `question`, before synonym substitution.
    pub fn normalize(&self, question: &str) -> QaResult<Vec<String>> {
        self.normalizer()?.normalize(question)
    }

    /// Store `answer` under the normalized form of `question`.
    pub fn record_answer(&self, question: &str, answer: &str) -> QaResult<i64> {
        let phrases = self.normalize(question)?;
        let normalized = phrases.join(" ");
        if normalized.is_empty() {
            debug!(question = %question, "question normalizes to nothing, storing empty request");
        }
        let id = self.storage.insert_request(&NewRequest {
            request: normalized.clone(),
            answer: answer.to_string(),
        })?;
        events::answer_recorded(id, &normalized);
        Ok(id)
    }

    /// Rank stored answers by similarity to `question`.
    ///
    /// An empty store yields an empty list. A non-empty store with a question
    /// that normalizes to nothing yields `EmptyQuery`.
    pub fn answer_query(&self, question: &str) -> QaResult<Vec<RankedAnswer>> {
        // Step 1: Normalize and substitute synonyms.
        let phrases = self.normalize(question)?;
        let phrases = SynonymSubstitutor::new(self.storage).substitute(phrases)?;
        let phrases: Vec<String> = phrases
            .into_iter()
            .filter(|phrase| !phrase.trim().is_empty())
            .collect();
        debug!(question = %question, phrases = ?phrases, "query phrases");

        // Step 2: Gather candidates.
        let requests = self.storage.list_requests()?;
        if requests.is_empty() {
            debug!("store is empty");
            events::query_answered(phrases.len(), 0, 0, None);
            return Ok(Vec::new());
        }
        if phrases.is_empty() {
            events::input_rejected("answer_query", "question normalizes to nothing");
            return Err(QaError::EmptyQuery {
                question: question.to_string(),
            });
        }

        // Step 3: Score, filter, sort.
        let candidates = ranking::candidate_phrases(&phrases);
        let ranked = ranking::rank(&candidates, &requests, &self.config);

        events::query_answered(
            phrases.len(),
            requests.len(),
            ranked.len(),
            ranked.first().map(|r| r.score),
        );
        Ok(ranked)
    }

    /// Register `synonym` as the replacement for `core_word` in queries.
    ///
    /// Both sides are reduced to the normal form of their first content word.
    /// A synonym that reduces to nothing is stored as `""` and deletes the
    /// core word from queries.
    pub fn add_synonym(&self, core_word: &str, synonym: &str) -> QaResult<i64> {
        let normalizer = self.normalizer()?;
        let Some(core) = normalizer.first_normal_form(core_word) else {
            let reason = format!("core word {core_word:?} normalizes to nothing");
            events::input_rejected("add_synonym", &reason);
            return Err(QaError::InvalidInput { reason });
        };
        let replacement = normalizer.first_normal_form(synonym).unwrap_or_default();
        let id = self.storage.insert_synonym(&core, &replacement)?;
        debug!(id, core = %core, synonym = %replacement, "synonym added");
        Ok(id)
    }
}
