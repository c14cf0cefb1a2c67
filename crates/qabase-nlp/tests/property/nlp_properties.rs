//! Property tests: stopword filter identity, bigram counts, tokenizer output shape.

use proptest::prelude::*;

use qabase_nlp::{bigrams, filter, tokenize, StopwordSet};

proptest! {
    #[test]
    fn prop_filter_with_empty_set_is_identity(tokens in prop::collection::vec("[а-яa-z0-9]{1,8}", 0..20)) {
        prop_assert_eq!(filter(tokens.clone(), &StopwordSet::empty()), tokens);
    }

    #[test]
    fn prop_filter_preserves_relative_order(tokens in prop::collection::vec("[а-я]{1,4}", 0..30)) {
        let stopwords = StopwordSet::baseline();
        let kept = filter(tokens.clone(), &stopwords);
        let expected: Vec<String> = tokens.into_iter().filter(|t| !stopwords.contains(t)).collect();
        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn prop_bigram_count(tokens in prop::collection::vec("[а-я]{1,8}", 0..20)) {
        let pairs = bigrams(&tokens);
        prop_assert_eq!(pairs.len(), tokens.len().saturating_sub(1));
        for (i, pair) in pairs.iter().enumerate() {
            prop_assert_eq!(pair, &format!("{} {}", tokens[i], tokens[i + 1]));
        }
    }

    #[test]
    fn prop_tokens_are_nonblank(text in "\\PC{0,80}") {
        for token in tokenize(&text) {
            prop_assert!(token.chars().any(char::is_alphanumeric));
        }
    }

    #[test]
    fn prop_tokens_are_lowercase(text in "[А-ЯЁа-яёA-Za-z0-9 ,.!?«»()-]{0,80}") {
        for token in tokenize(&text) {
            prop_assert!(!token.chars().any(char::is_uppercase));
        }
    }

    #[test]
    fn prop_tokenize_is_deterministic(text in "\\PC{0,80}") {
        prop_assert_eq!(tokenize(&text), tokenize(&text));
    }
}
