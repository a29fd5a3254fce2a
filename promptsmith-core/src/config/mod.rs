//! Runtime configuration
//!
//! Configuration is environment-only: the API key comes from
//! `ANTHROPIC_KEY` (optionally loaded from a dotenv file) and the base URL
//! may be overridden through `ANTHROPIC_BASE_URL` or a CLI flag.

mod error;

pub use error::ConfigError;

use crate::constants::{ANTHROPIC_API_BASE_URL, API_KEY_ENV, BASE_URL_ENV};
use dotenvy::{dotenv, from_filename};
use std::env;
use std::path::Path;
use std::sync::Once;
use tracing::debug;

static ENV_LOADER: Once = Once::new();

/// Ensures environment variables are loaded from a `.env` file in the
/// working directory, if one exists. A missing file is not an error.
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        if let Ok(path) = dotenv() {
            debug!(path = %path.display(), "Loaded environment from dotenv file");
        }
    });
}

/// Load environment variables from an explicitly named env file.
///
/// Unlike [`ensure_env_loaded`], a file the operator asked for must exist
/// and parse.
pub fn load_env_file(path: &Path) -> Result<(), ConfigError> {
    from_filename(path).map_err(|source| ConfigError::EnvFile {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "Loaded environment from file");
    Ok(())
}

/// Validated runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    api_key: String,
    base_url: String,
}

impl Config {
    /// Read and validate configuration from the process environment.
    ///
    /// The API key is required and must be non-blank; the base URL falls
    /// back to the fixed experimental endpoint when `ANTHROPIC_BASE_URL`
    /// is unset or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var(API_KEY_ENV)
            .map_err(|_| ConfigError::MissingApiKey { name: API_KEY_ENV })?;
        let api_key = api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(ConfigError::EmptyApiKey { name: API_KEY_ENV });
        }

        let base_url = env::var(BASE_URL_ENV)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| ANTHROPIC_API_BASE_URL.to_string());

        Ok(Self { api_key, base_url })
    }

    /// Override the base URL (CLI flag wins over environment).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Masked form of the credential, safe to log: first three and last
    /// four characters with the middle elided.
    pub fn masked_key(&self) -> String {
        let key = self.api_key.as_str();
        if key.len() < 8 || !key.is_ascii() {
            return "***".to_string();
        }
        format!("{}...{}", &key[..3], &key[key.len() - 4..])
    }
}
