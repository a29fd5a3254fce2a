//! improve_prompt: refine an existing conversation, optionally steered by
//! feedback.

use std::sync::Arc;

use futures::FutureExt;

use crate::application::tooling::{RegistryError, ToolRegistry, ToolSpec};
use crate::domain::schema::{FieldSpec, Schema};
use crate::infrastructure::upstream::{Endpoint, PromptToolsApi};

pub const NAME: &str = "improve_prompt";

const DESCRIPTION: &str =
    "Improve an existing prompt, optionally guided by feedback and a target model.";

pub fn spec() -> ToolSpec {
    ToolSpec::new(NAME, DESCRIPTION, schema())
}

fn schema() -> Schema {
    Schema::new(vec![
        FieldSpec::list("messages", "Conversation messages.", super::message_schema()),
        FieldSpec::text("system", "(Optional) System prompt.").optional(),
        FieldSpec::text("feedback", "(Optional) Feedback for improvement.").optional(),
        FieldSpec::text("target_model", "(Optional) Target model ID.").optional(),
    ])
}

pub fn register(
    registry: &mut ToolRegistry,
    api: Arc<dyn PromptToolsApi>,
) -> Result<(), RegistryError> {
    registry.register(spec(), move |arguments| {
        let api = api.clone();
        async move { super::forward(api.as_ref(), Endpoint::ImprovePrompt, arguments).await }
            .boxed()
    })
}
