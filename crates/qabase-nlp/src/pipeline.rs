//! The shared normalization pipeline used both when recording and when querying.

use qabase_core::errors::QaResult;
use qabase_core::traits::IMorphAnalyzer;

use crate::bigrams::phrases;
use crate::lemma::LemmaResolver;
use crate::lexicon::Lexicon;
use crate::stopwords::filter;
use crate::tokenizer::tokenize;

/// tokenize → stopword filter → bigrams → lemma resolution.
pub struct Normalizer<'a> {
    lexicon: &'a Lexicon,
    analyzer: &'a dyn IMorphAnalyzer,
    single_token_fallback: bool,
}

impl<'a> Normalizer<'a> {
    pub fn new(
        lexicon: &'a Lexicon,
        analyzer: &'a dyn IMorphAnalyzer,
        single_token_fallback: bool,
    ) -> Self {
        Self {
            lexicon,
            analyzer,
            single_token_fallback,
        }
    }

    /// Content tokens of `text`: tokenized and stopword-filtered.
    pub fn content_tokens(&self, text: &str) -> Vec<String> {
        filter(tokenize(text), &self.lexicon.stopwords)
    }

    /// Resolved phrases of `text`, in order.
    pub fn normalize(&self, text: &str) -> QaResult<Vec<String>> {
        let tokens = self.content_tokens(text);
        let raw = phrases(&tokens, self.single_token_fallback);
        let resolver = self.resolver();
        let resolved = raw
            .iter()
            .map(|phrase| resolver.resolve(phrase))
            .collect::<QaResult<Vec<_>>>()?;
        tracing::debug!(tokens = ?tokens, phrases = ?resolved, "normalized");
        Ok(resolved)
    }

    /// Normal form of the first content word of `text`, if any.
    pub fn first_normal_form(&self, text: &str) -> Option<String> {
        self.content_tokens(text)
            .first()
            .map(|word| self.resolver().normalize_word(word))
    }

    pub fn resolver(&self) -> LemmaResolver<'a> {
        LemmaResolver::new(&self.lexicon.senses, self.analyzer)
    }
}
