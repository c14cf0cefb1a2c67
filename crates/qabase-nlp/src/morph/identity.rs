use qabase_core::traits::IMorphAnalyzer;

/// Returns every word lowercased and otherwise unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityAnalyzer;

impl IMorphAnalyzer for IdentityAnalyzer {
    fn best_normal_form(&self, word: &str) -> String {
        word.to_lowercase()
    }

    fn name(&self) -> &str {
        "identity"
    }
}
