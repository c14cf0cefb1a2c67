/// qabase version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Latest schema version known to the storage layer.
pub const SCHEMA_VERSION: u32 = 2;

/// Maximum number of rows inserted per bulk statement batch.
pub const MAX_BULK_BATCH_SIZE: usize = 1000;

/// Environment variable read by the tracing subscriber.
pub const LOG_ENV_VAR: &str = "QABASE_LOG";

/// Environment variable pointing at an optional TOML config file.
pub const CONFIG_ENV_VAR: &str = "QABASE_CONFIG";

/// Score threshold used by the first engine generation.
pub const LEGACY_MIN_SCORE: f64 = 0.75;
