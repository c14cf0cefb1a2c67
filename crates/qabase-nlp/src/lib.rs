//! # qabase-nlp
//!
//! Normalization pipeline for Russian questions:
//! tokenize → stopword filter → bigrams → lemma resolution, plus the
//! query-side synonym substitution.

pub mod bigrams;
pub mod lemma;
pub mod lexicon;
pub mod morph;
pub mod pipeline;
pub mod stopwords;
pub mod synonyms;
pub mod tokenizer;

pub use bigrams::{bigrams, phrases};
pub use lemma::LemmaResolver;
pub use lexicon::{Lexicon, LexiconCache};
pub use morph::{IdentityAnalyzer, MorphDictionary};
pub use pipeline::Normalizer;
pub use stopwords::{filter, StopwordSet};
pub use synonyms::SynonymSubstitutor;
pub use tokenizer::tokenize;
