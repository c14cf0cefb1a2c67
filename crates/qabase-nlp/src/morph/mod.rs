//! Morphological analyzers implementing `IMorphAnalyzer`.

mod dictionary;
mod identity;

pub use dictionary::MorphDictionary;
pub use identity::IdentityAnalyzer;
