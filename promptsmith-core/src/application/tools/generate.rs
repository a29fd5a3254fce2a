//! generate_prompt: write a new prompt from a task description.

use std::sync::Arc;

use futures::FutureExt;

use crate::application::tooling::{RegistryError, ToolRegistry, ToolSpec};
use crate::domain::schema::{FieldSpec, Schema};
use crate::infrastructure::upstream::{Endpoint, PromptToolsApi};

pub const NAME: &str = "generate_prompt";

const DESCRIPTION: &str =
    "Generate a new prompt for a target model from a plain-language task description.";

pub fn spec() -> ToolSpec {
    ToolSpec::new(NAME, DESCRIPTION, schema())
}

fn schema() -> Schema {
    Schema::new(vec![
        FieldSpec::text("task", "Task description."),
        FieldSpec::text("target_model", "Target model ID."),
    ])
}

pub fn register(
    registry: &mut ToolRegistry,
    api: Arc<dyn PromptToolsApi>,
) -> Result<(), RegistryError> {
    registry.register(spec(), move |arguments| {
        let api = api.clone();
        async move { super::forward(api.as_ref(), Endpoint::GeneratePrompt, arguments).await }
            .boxed()
    })
}
