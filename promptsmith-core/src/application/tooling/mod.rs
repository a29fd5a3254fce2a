mod envelope;
mod registry;

pub use envelope::{ContentBlock, ResponseEnvelope};
pub use registry::{RegistryError, ToolHandler, ToolRegistry, ToolSpec};
