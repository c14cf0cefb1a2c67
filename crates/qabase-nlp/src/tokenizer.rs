//! Word tokenizer.
//!
//! Pipeline: UAX#29 word boundaries → rejoin hyphenated compounds
//! ("что-то", "из-за") → drop whitespace and punctuation tokens → lowercase.

use unicode_segmentation::UnicodeSegmentation;

/// A segment is a word when it carries at least one alphanumeric character.
/// Punctuation, brackets, quotes and whitespace never do.
fn is_word(segment: &str) -> bool {
    segment.chars().any(char::is_alphanumeric)
}

/// Split `text` into lowercase word tokens, preserving order.
///
/// ```
/// use qabase_nlp::tokenize;
///
/// assert_eq!(
///     tokenize("Как правильно помыть машину?"),
///     vec!["как", "правильно", "помыть", "машину"]
/// );
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let segments: Vec<&str> = text.split_word_bounds().collect();
    let mut tokens: Vec<String> = Vec::new();
    let mut joinable = false;

    let mut i = 0;
    while i < segments.len() {
        let segment = segments[i];
        if is_word(segment) {
            tokens.push(segment.to_lowercase());
            joinable = true;
            i += 1;
            continue;
        }

        // word '-' word → one token.
        let next_is_word = segments.get(i + 1).is_some_and(|s| is_word(s));
        if segment == "-" && joinable && next_is_word {
            if let Some(last) = tokens.last_mut() {
                last.push('-');
                last.push_str(&segments[i + 1].to_lowercase());
            }
            i += 2;
            continue;
        }

        joinable = false;
        i += 1;
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t").is_empty());
    }

    #[test]
    fn punctuation_and_brackets_are_dropped() {
        assert_eq!(
            tokenize("«Привет», (мир) [тест] {скобки}; а: б! в?"),
            vec!["привет", "мир", "тест", "скобки", "а", "б", "в"]
        );
    }

    #[test]
    fn hyphenated_words_stay_whole() {
        assert_eq!(tokenize("Что-то из-за"), vec!["что-то", "из-за"]);
    }

    #[test]
    fn dangling_hyphens_are_dropped() {
        assert_eq!(tokenize("- да - нет -"), vec!["да", "нет"]);
    }

    #[test]
    fn latin_and_digits_are_kept() {
        assert_eq!(tokenize("Чтоже такое NLTK 3?"), vec!["чтоже", "такое", "nltk", "3"]);
    }
}
