//! The advertised prompt tools
//!
//! One module per tool, each pairing an upstream endpoint with its input
//! schema. All three handlers share [`forward`]: POST the validated
//! arguments unchanged, wrap success as pretty-printed JSON, wrap failure
//! as the uniform error text.

pub mod generate;
pub mod improve;
pub mod templatize;

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error};

use crate::application::tooling::{RegistryError, ResponseEnvelope, ToolRegistry};
use crate::domain::schema::{FieldSpec, Schema};
use crate::infrastructure::upstream::{Endpoint, PromptToolsApi};

/// Build the registry with the three prompt tools.
pub fn default_registry(api: Arc<dyn PromptToolsApi>) -> Result<ToolRegistry, RegistryError> {
    let mut registry = ToolRegistry::new();
    generate::register(&mut registry, api.clone())?;
    improve::register(&mut registry, api.clone())?;
    templatize::register(&mut registry, api)?;
    Ok(registry)
}

/// Conversation message shape shared by improve_prompt and
/// templatize_prompt.
fn message_schema() -> Schema {
    let content = Schema::new(vec![
        FieldSpec::text("type", r#"Content type (e.g., "text")."#),
        FieldSpec::text("text", "Text content."),
    ]);
    Schema::new(vec![
        FieldSpec::text("role", r#"Role (e.g., "user", "assistant")."#),
        FieldSpec::list("content", "Content blocks.", content),
    ])
}

/// Forward validated arguments to one endpoint and wrap the outcome.
async fn forward(api: &dyn PromptToolsApi, endpoint: Endpoint, payload: Value) -> ResponseEnvelope {
    debug!(endpoint = %endpoint, "Handling tool invocation");
    match api.call(endpoint, payload).await {
        Ok(body) => ResponseEnvelope::json(&body),
        Err(failure) => {
            error!(endpoint = %endpoint, %failure, "Tool invocation failed");
            ResponseEnvelope::failure(endpoint, failure.detail())
        }
    }
}
