//! Declarative input schemas
//!
//! Each tool declares the object shape it accepts as a [`Schema`]. The same
//! declaration drives both advertisement (rendered as JSON Schema over
//! `tools/list`) and validation of incoming arguments before any handler
//! runs.

use serde_json::{Map, Value, json};
use std::fmt;

/// The JSON shape a single field accepts.
#[derive(Debug, Clone)]
pub enum FieldKind {
    /// A JSON string.
    Text,
    /// A JSON array whose elements are objects matching the nested schema.
    List(Schema),
}

/// One declared field of an object schema.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: String,
    description: String,
    required: bool,
    kind: FieldKind,
}

impl FieldSpec {
    /// Required string field.
    pub fn text(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required: true,
            kind: FieldKind::Text,
        }
    }

    /// Required list field whose elements follow `items`.
    pub fn list(name: impl Into<String>, description: impl Into<String>, items: Schema) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required: true,
            kind: FieldKind::List(items),
        }
    }

    /// Mark the field as optional.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// An ordered object schema.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// Validate `raw` against the declared fields.
    ///
    /// Collects every violation rather than stopping at the first. On
    /// success returns a new object carrying only the declared fields;
    /// undeclared fields are dropped, absent optional fields stay absent.
    pub fn validate(&self, raw: &Value) -> Result<Value, SchemaRejection> {
        let mut violations = Vec::new();
        let filtered = match raw {
            Value::Object(object) => self.check_object(object, "", &mut violations),
            other => {
                violations.push(SchemaViolation::new("arguments", "object", type_name(other)));
                Map::new()
            }
        };

        if violations.is_empty() {
            Ok(Value::Object(filtered))
        } else {
            Err(SchemaRejection { violations })
        }
    }

    /// Render the declaration as a JSON Schema object for advertisement.
    pub fn to_json_schema(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for field in &self.fields {
            let rendered = match &field.kind {
                FieldKind::Text => json!({
                    "type": "string",
                    "description": field.description,
                }),
                FieldKind::List(items) => json!({
                    "type": "array",
                    "description": field.description,
                    "items": items.to_json_schema(),
                }),
            };
            properties.insert(field.name.clone(), rendered);
            if field.required {
                required.push(Value::String(field.name.clone()));
            }
        }

        let mut schema = Map::new();
        schema.insert("type".to_string(), json!("object"));
        schema.insert("properties".to_string(), Value::Object(properties));
        if !required.is_empty() {
            schema.insert("required".to_string(), Value::Array(required));
        }
        Value::Object(schema)
    }

    fn check_object(
        &self,
        object: &Map<String, Value>,
        path: &str,
        violations: &mut Vec<SchemaViolation>,
    ) -> Map<String, Value> {
        let mut filtered = Map::new();

        for field in &self.fields {
            let field_path = join_path(path, &field.name);
            let Some(value) = object.get(&field.name) else {
                if field.required {
                    violations.push(SchemaViolation::missing(field_path, &field.kind));
                }
                continue;
            };

            match &field.kind {
                FieldKind::Text => match value {
                    Value::String(_) => {
                        filtered.insert(field.name.clone(), value.clone());
                    }
                    other => {
                        violations.push(SchemaViolation::new(
                            field_path,
                            "string",
                            type_name(other),
                        ));
                    }
                },
                FieldKind::List(items) => match value {
                    Value::Array(elements) => {
                        let mut checked = Vec::with_capacity(elements.len());
                        for (index, element) in elements.iter().enumerate() {
                            let element_path = format!("{field_path}[{index}]");
                            match element {
                                Value::Object(map) => {
                                    let inner = items.check_object(map, &element_path, violations);
                                    checked.push(Value::Object(inner));
                                }
                                other => {
                                    violations.push(SchemaViolation::new(
                                        element_path,
                                        "object",
                                        type_name(other),
                                    ));
                                }
                            }
                        }
                        filtered.insert(field.name.clone(), Value::Array(checked));
                    }
                    other => {
                        violations.push(SchemaViolation::new(
                            field_path,
                            "array",
                            type_name(other),
                        ));
                    }
                },
            }
        }

        filtered
    }
}

/// A single structural problem found during validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    path: String,
    expected: &'static str,
    found: &'static str,
}

impl SchemaViolation {
    fn new(path: impl Into<String>, expected: &'static str, found: &'static str) -> Self {
        Self {
            path: path.into(),
            expected,
            found,
        }
    }

    fn missing(path: impl Into<String>, kind: &FieldKind) -> Self {
        let expected = match kind {
            FieldKind::Text => "string",
            FieldKind::List(_) => "array",
        };
        Self::new(path, expected, "nothing")
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected {}, found {}",
            self.path, self.expected, self.found
        )
    }
}

/// Validation outcome listing everything wrong with the input.
#[derive(Debug, Clone)]
pub struct SchemaRejection {
    violations: Vec<SchemaViolation>,
}

impl SchemaRejection {
    pub fn violations(&self) -> &[SchemaViolation] {
        &self.violations
    }
}

impl fmt::Display for SchemaRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid arguments: ")?;
        for (index, violation) in self.violations.iter().enumerate() {
            if index > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaRejection {}

fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}.{name}")
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
