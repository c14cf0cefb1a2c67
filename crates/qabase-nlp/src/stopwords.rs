//! Stopword set: a static Russian baseline merged with service words from the store.

use std::collections::HashSet;

/// Baseline Russian stopwords (the NLTK list).
pub const RUSSIAN_STOPWORDS: &[&str] = &[
    "и", "в", "во", "не", "что", "он", "на", "я", "с", "со", "как", "а", "то", "все", "она",
    "так", "его", "но", "да", "ты", "к", "у", "же", "вы", "за", "бы", "по", "только", "ее",
    "мне", "было", "вот", "от", "меня", "еще", "нет", "о", "из", "ему", "теперь", "когда",
    "даже", "ну", "вдруг", "ли", "если", "уже", "или", "ни", "быть", "был", "него", "до",
    "вас", "нибудь", "опять", "уж", "вам", "ведь", "там", "потом", "себя", "ничего", "ей",
    "может", "они", "тут", "где", "есть", "надо", "ней", "для", "мы", "тебя", "их", "чем",
    "была", "сам", "чтоб", "без", "будто", "чего", "раз", "тоже", "себе", "под", "будет",
    "ж", "тогда", "кто", "этот", "того", "потому", "этого", "какой", "совсем", "ним",
    "здесь", "этом", "один", "почти", "мой", "тем", "чтобы", "нее", "сейчас", "были",
    "куда", "зачем", "всех", "никогда", "можно", "при", "наконец", "два", "об", "другой",
    "хоть", "после", "над", "больше", "тот", "через", "эти", "нас", "про", "всего", "них",
    "какая", "много", "разве", "три", "эту", "моя", "впрочем", "хорошо", "свою", "этой",
    "перед", "иногда", "лучше", "чуть", "том", "нельзя", "такой", "им", "более", "всегда",
    "конечно", "всю", "между",
];

/// An immutable set of lowercase stopwords.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// A set with no stopwords at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The static baseline list.
    pub fn baseline() -> Self {
        Self {
            words: RUSSIAN_STOPWORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// The baseline merged with `service_words` (lowercased, blanks ignored).
    pub fn with_service_words<I, S>(service_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::baseline();
        set.words.extend(
            service_words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
        set
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Drop every token found in `stopwords`, preserving order.
pub fn filter(tokens: Vec<String>, stopwords: &StopwordSet) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|t| !stopwords.contains(t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn baseline_drops_function_words() {
        let tokens = owned(&["как", "правильно", "помыть", "машину"]);
        assert_eq!(
            filter(tokens, &StopwordSet::baseline()),
            owned(&["правильно", "помыть", "машину"])
        );
    }

    #[test]
    fn service_words_extend_the_baseline() {
        let set = StopwordSet::with_service_words(["Правильно", "  "]);
        assert!(set.contains("правильно"));
        assert!(set.contains("как"));
        assert_eq!(set.len(), StopwordSet::baseline().len() + 1);
    }

    #[test]
    fn empty_set_keeps_everything() {
        let tokens = owned(&["и", "в", "машина"]);
        assert_eq!(filter(tokens.clone(), &StopwordSet::empty()), tokens);
    }
}
