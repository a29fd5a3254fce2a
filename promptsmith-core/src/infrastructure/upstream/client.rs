//! HTTP client for the Anthropic experimental prompt tools API
//!
//! One POST per call with the fixed header set the API requires. No retry,
//! no caching; every outcome is classified into [`UpstreamError`] or a
//! parsed JSON body.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::traits::PromptToolsApi;
use super::types::{Endpoint, UpstreamError};
use crate::config::Config;
use crate::constants::{ANTHROPIC_BETA, ANTHROPIC_VERSION};

/// Prompt tools API client. Cheap to clone; the underlying connection
/// pool is shared.
#[derive(Clone)]
pub struct PromptToolsClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl PromptToolsClient {
    /// Build a client with an explicit base URL and credential.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Build a client from validated configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.base_url(), config.api_key())
    }

    fn build_url(&self, endpoint: Endpoint) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{base}/{}", endpoint.as_str())
    }
}

#[async_trait]
impl PromptToolsApi for PromptToolsClient {
    async fn call(&self, endpoint: Endpoint, payload: Value) -> Result<Value, UpstreamError> {
        let url = self.build_url(endpoint);
        debug!(endpoint = %endpoint, "Sending prompt tools request");

        let response = self
            .http
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("anthropic-beta", ANTHROPIC_BETA)
            .header("content-type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|source| UpstreamError::network(endpoint, source))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|source| UpstreamError::network(endpoint, source))?;

        if !status.is_success() {
            let detail = match serde_json::from_slice::<Value>(&bytes) {
                Ok(body) => serde_json::to_string(&body)
                    .unwrap_or_else(|_| format!("HTTP status {}", status.as_u16())),
                Err(_) => format!("HTTP status {}", status.as_u16()),
            };
            debug!(
                endpoint = %endpoint,
                status = status.as_u16(),
                "Prompt tools request rejected"
            );
            return Err(UpstreamError::api(endpoint, detail));
        }

        // A success body that is not JSON is preserved as a plain string.
        let body = match serde_json::from_slice::<Value>(&bytes) {
            Ok(value) => value,
            Err(_) => Value::String(String::from_utf8_lossy(&bytes).into_owned()),
        };
        debug!(endpoint = %endpoint, "Prompt tools request succeeded");
        Ok(body)
    }
}
