use async_trait::async_trait;
use serde_json::Value;

use super::types::{Endpoint, UpstreamError};

/// Seam between tool handlers and the prompt-tools HTTP API.
///
/// Handlers depend on this trait rather than the concrete client so tests
/// can script outcomes without a network.
#[async_trait]
pub trait PromptToolsApi: Send + Sync {
    /// POST `payload` to `endpoint` and return the parsed response body.
    async fn call(&self, endpoint: Endpoint, payload: Value) -> Result<Value, UpstreamError>;
}
