//! Tracing setup: subscriber initialization and structured events.

pub mod events;

use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;
use crate::constants::LOG_ENV_VAR;

/// Initialize the global tracing subscriber.
///
/// `QABASE_LOG` takes precedence over `config.log_level`. Calling this twice
/// is harmless; the second call leaves the first subscriber in place.
pub fn init_tracing(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    let result = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// Initialize tracing with a custom filter string (for tests or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_test_writer()
        .try_init();
}
