//! Lemma resolution: sense table first, morphological analyzer second.

use qabase_core::errors::{QaError, QaResult};
use qabase_core::models::Sense;
use qabase_core::observability::events;
use qabase_core::traits::IMorphAnalyzer;

/// Resolves a word or phrase to its canonical lemma.
pub struct LemmaResolver<'a> {
    senses: &'a [Sense],
    analyzer: &'a dyn IMorphAnalyzer,
}

impl<'a> LemmaResolver<'a> {
    pub fn new(senses: &'a [Sense], analyzer: &'a dyn IMorphAnalyzer) -> Self {
        Self { senses, analyzer }
    }

    /// The first sense (in insertion order) whose lowercased name occurs
    /// inside the lowercased phrase.
    pub fn matching_sense(&self, phrase: &str) -> Option<&'a Sense> {
        let phrase = phrase.to_lowercase();
        self.senses.iter().find(|sense| {
            let name = sense.name.to_lowercase();
            !name.is_empty() && phrase.contains(&name)
        })
    }

    /// Resolve `phrase`.
    ///
    /// A sense match returns its lemma verbatim. Otherwise every
    /// whitespace-separated word goes through the analyzer and the normal
    /// forms are joined with single spaces. Blank phrases are rejected.
    pub fn resolve(&self, phrase: &str) -> QaResult<String> {
        if phrase.trim().is_empty() {
            let reason = "cannot resolve a blank phrase".to_string();
            events::input_rejected("resolve", &reason);
            return Err(QaError::InvalidInput { reason });
        }

        if let Some(sense) = self.matching_sense(phrase) {
            tracing::debug!(phrase, sense_id = sense.id, lemma = %sense.lemma, "sense match");
            return Ok(sense.lemma.clone());
        }

        Ok(phrase
            .split_whitespace()
            .map(|word| self.normalize_word(word))
            .collect::<Vec<_>>()
            .join(" "))
    }

    /// Normal form of a single word, bypassing the sense table.
    pub fn normalize_word(&self, word: &str) -> String {
        self.analyzer.best_normal_form(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morph::MorphDictionary;

    fn sense(id: i64, name: &str, lemma: &str) -> Sense {
        Sense {
            id,
            name: name.to_string(),
            lemma: lemma.to_string(),
        }
    }

    fn dictionary() -> MorphDictionary {
        MorphDictionary::from_pairs([("помыть", "мыть"), ("машину", "машина")])
    }

    #[test]
    fn falls_back_to_analyzer_word_by_word() {
        let dict = dictionary();
        let resolver = LemmaResolver::new(&[], &dict);
        assert_eq!(resolver.resolve("помыть машину").unwrap(), "мыть машина");
    }

    #[test]
    fn sense_substring_match_wins_over_analyzer() {
        let dict = dictionary();
        let senses = vec![sense(1, "Стиральная машина", "стиральная_машина")];
        let resolver = LemmaResolver::new(&senses, &dict);
        assert_eq!(
            resolver.resolve("новая стиральная машина").unwrap(),
            "стиральная_машина"
        );
    }

    #[test]
    fn first_sense_in_order_wins() {
        let dict = dictionary();
        let senses = vec![
            sense(1, "машину", "автомобиль"),
            sense(2, "помыть машину", "мойка"),
        ];
        let resolver = LemmaResolver::new(&senses, &dict);
        assert_eq!(resolver.resolve("помыть машину").unwrap(), "автомобиль");
    }

    #[test]
    fn blank_phrase_is_invalid_input() {
        let dict = dictionary();
        let resolver = LemmaResolver::new(&[], &dict);
        assert!(matches!(
            resolver.resolve("  "),
            Err(QaError::InvalidInput { .. })
        ));
    }

    #[test]
    fn resolution_is_idempotent_on_exact_sense_match() {
        let dict = dictionary();
        let senses = vec![sense(1, "железная дорога", "железнодорожный")];
        let resolver = LemmaResolver::new(&senses, &dict);
        let lemma = resolver.resolve("железная дорога").unwrap();
        assert_eq!(resolver.resolve(&lemma).unwrap(), lemma);
    }
}
