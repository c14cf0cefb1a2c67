/// Morphological analyzer for the target language.
pub trait IMorphAnalyzer: Send + Sync {
    /// Top-ranked normal form (lemma) of a single word.
    ///
    /// Must be deterministic for a given dictionary version.
    fn best_normal_form(&self, word: &str) -> String;

    /// Human-readable analyzer name.
    fn name(&self) -> &str;
}
