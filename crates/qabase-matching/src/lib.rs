//! # qabase-matching
//!
//! Records question/answer pairs under their normalized form and answers new
//! questions by ranking stored answers with a Ratcliff/Obershelp similarity.

pub mod engine;
pub mod ranking;
pub mod similarity;

pub use engine::MatchingEngine;
pub use similarity::ratio;
