use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading configuration from the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} environment variable is not set")]
    MissingApiKey { name: &'static str },

    #[error("{name} environment variable is empty")]
    EmptyApiKey { name: &'static str },

    #[error("failed to load env file {path:?}: {source}")]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}
