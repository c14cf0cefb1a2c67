//! Configuration. Every section is `#[serde(default)]`, so an empty TOML
//! document yields the defaults from [`defaults`].

pub mod defaults;
mod matching_config;
mod nlp_config;
mod observability_config;
mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use matching_config::MatchingConfig;
pub use nlp_config::NlpConfig;
pub use observability_config::ObservabilityConfig;
pub use storage_config::StorageConfig;

use crate::errors::{QaError, QaResult};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QaConfig {
    pub storage: StorageConfig,
    pub matching: MatchingConfig,
    pub nlp: NlpConfig,
    pub observability: ObservabilityConfig,
}

impl QaConfig {
    /// Parse a TOML document. Missing sections and fields fall back to defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> QaResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| QaError::ConfigError {
            reason: format!("{}: {e}", path.display()),
        })?;
        Self::from_toml(&text).map_err(|e| QaError::ConfigError {
            reason: format!("{}: {e}", path.display()),
        })
    }
}
