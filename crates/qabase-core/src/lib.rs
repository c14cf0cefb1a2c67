//! # qabase-core
//!
//! Foundation crate for qabase.
//! Defines the store records, traits, errors, config, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod observability;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::QaConfig;
pub use errors::{QaError, QaResult};
pub use models::{RankedAnswer, Request, Sense, ServiceWord, Synonym};
