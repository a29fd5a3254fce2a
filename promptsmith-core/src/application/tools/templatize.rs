//! templatize_prompt: extract reusable variables from a concrete
//! conversation.

use std::sync::Arc;

use futures::FutureExt;

use crate::application::tooling::{RegistryError, ToolRegistry, ToolSpec};
use crate::domain::schema::{FieldSpec, Schema};
use crate::infrastructure::upstream::{Endpoint, PromptToolsApi};

pub const NAME: &str = "templatize_prompt";

const DESCRIPTION: &str =
    "Turn a concrete prompt into a reusable template with extracted variables.";

pub fn spec() -> ToolSpec {
    ToolSpec::new(NAME, DESCRIPTION, schema())
}

fn schema() -> Schema {
    Schema::new(vec![
        FieldSpec::list("messages", "Conversation messages.", super::message_schema()),
        FieldSpec::text("system", "(Optional) System prompt.").optional(),
    ])
}

pub fn register(
    registry: &mut ToolRegistry,
    api: Arc<dyn PromptToolsApi>,
) -> Result<(), RegistryError> {
    registry.register(spec(), move |arguments| {
        let api = api.clone();
        async move { super::forward(api.as_ref(), Endpoint::TemplatizePrompt, arguments).await }
            .boxed()
    })
}
