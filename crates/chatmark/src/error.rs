//! CLI error types.

use chatmark_config::ConfigError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON in {source_name}: {error}")]
    Json {
        source_name: String,
        error: serde_json::Error,
    },
}
