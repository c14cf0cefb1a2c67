//! Bigram formation over filtered tokens.

/// Consecutive overlapping pairs joined by one space.
///
/// `n` tokens produce `max(n - 1, 0)` pairs; a single token produces none.
pub fn bigrams(tokens: &[String]) -> Vec<String> {
    tokens
        .windows(2)
        .map(|pair| format!("{} {}", pair[0], pair[1]))
        .collect()
}

/// Phrases to resolve for a question.
///
/// Same as [`bigrams`], except that with `single_token_fallback` a lone
/// surviving token becomes the only phrase instead of losing all signal.
pub fn phrases(tokens: &[String], single_token_fallback: bool) -> Vec<String> {
    match tokens {
        [only] if single_token_fallback => vec![only.clone()],
        _ => bigrams(tokens),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn three_tokens_make_two_pairs() {
        assert_eq!(
            bigrams(&owned(&["t0", "t1", "t2"])),
            owned(&["t0 t1", "t1 t2"])
        );
    }

    #[test]
    fn short_inputs_make_no_pairs() {
        assert!(bigrams(&[]).is_empty());
        assert!(bigrams(&owned(&["одно"])).is_empty());
    }

    #[test]
    fn single_token_fallback() {
        assert_eq!(phrases(&owned(&["шланг"]), true), owned(&["шланг"]));
        assert!(phrases(&owned(&["шланг"]), false).is_empty());
        assert!(phrases(&[], true).is_empty());
        assert_eq!(phrases(&owned(&["а", "б"]), true), owned(&["а б"]));
    }
}
