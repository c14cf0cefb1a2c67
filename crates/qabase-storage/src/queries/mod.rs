//! Query modules for each table.

pub mod lexicon_ops;
pub mod request_ops;
pub mod synonym_ops;
