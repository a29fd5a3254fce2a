//! Tool registration table and dispatcher
//!
//! The registry couples each advertised tool with its input schema and
//! handler. Dispatch is lookup, then validation, then the handler; both
//! short-circuits resolve to an error envelope so the transport never sees
//! a fault from this layer.

use futures::future::BoxFuture;
use serde_json::{Value, json};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, warn};

use super::envelope::ResponseEnvelope;
use crate::domain::schema::Schema;

/// Handler invoked with the validated arguments object.
pub type ToolHandler = Box<dyn Fn(Value) -> BoxFuture<'static, ResponseEnvelope> + Send + Sync>;

/// Immutable description of one advertised tool.
#[derive(Debug, Clone)]
pub struct ToolSpec {
    name: String,
    description: String,
    schema: Schema,
}

impl ToolSpec {
    pub fn new(name: impl Into<String>, description: impl Into<String>, schema: Schema) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schema,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Entry for the `tools/list` advertisement.
    pub fn advertisement(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "inputSchema": self.schema.to_json_schema(),
        })
    }
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("tool '{name}' is already registered")]
    Duplicate { name: String },
}

struct Registration {
    spec: ToolSpec,
    handler: ToolHandler,
}

/// Registration table, fixed after startup.
#[derive(Default)]
pub struct ToolRegistry {
    entries: Vec<Registration>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool. Duplicate names are an error; callers treat any
    /// registration failure as fatal so the advertised set is never
    /// partial.
    pub fn register<F>(&mut self, spec: ToolSpec, handler: F) -> Result<(), RegistryError>
    where
        F: Fn(Value) -> BoxFuture<'static, ResponseEnvelope> + Send + Sync + 'static,
    {
        if self.index.contains_key(spec.name()) {
            return Err(RegistryError::Duplicate {
                name: spec.name().to_string(),
            });
        }
        debug!(tool = spec.name(), "Registered tool");
        self.index.insert(spec.name().to_string(), self.entries.len());
        self.entries.push(Registration {
            spec,
            handler: Box::new(handler),
        });
        Ok(())
    }

    /// Advertised tools in registration order.
    pub fn specs(&self) -> impl Iterator<Item = &ToolSpec> {
        self.entries.iter().map(|entry| &entry.spec)
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.spec.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Route one invocation: look the tool up, validate the raw arguments
    /// against its schema, and only then run the handler. Rejections never
    /// reach the handler or the network.
    pub async fn dispatch(&self, name: &str, arguments: Value) -> ResponseEnvelope {
        let Some(&position) = self.index.get(name) else {
            warn!(tool = name, "Rejected call to unknown tool");
            return ResponseEnvelope::failure(name, "tool is not registered");
        };

        let registration = &self.entries[position];
        match registration.spec.schema().validate(&arguments) {
            Ok(validated) => {
                debug!(tool = name, "Dispatching tool invocation");
                (registration.handler)(validated).await
            }
            Err(rejection) => {
                warn!(tool = name, %rejection, "Rejected tool arguments");
                ResponseEnvelope::failure(name, rejection)
            }
        }
    }
}
