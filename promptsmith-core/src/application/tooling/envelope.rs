//! Tool result envelope
//!
//! Every tool invocation resolves to one envelope: a single text content
//! block, plus `isError: true` when and only when the invocation failed.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: "text".to_string(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub content: Vec<ContentBlock>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none", default)]
    pub is_error: Option<bool>,
}

impl ResponseEnvelope {
    /// Success envelope carrying the pretty-printed response body.
    pub fn json(body: &Value) -> Self {
        let text = serde_json::to_string_pretty(body).unwrap_or_else(|_| "{}".to_string());
        Self {
            content: vec![ContentBlock::text(text)],
            is_error: None,
        }
    }

    /// Failure envelope: `Error: Failed to <operation>: <detail>`.
    pub fn failure(operation: impl fmt::Display, detail: impl fmt::Display) -> Self {
        Self {
            content: vec![ContentBlock::text(format!(
                "Error: Failed to {operation}: {detail}"
            ))],
            is_error: Some(true),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.is_error == Some(true)
    }

    /// Text of the single content block.
    pub fn text(&self) -> &str {
        self.content
            .first()
            .map(|block| block.text.as_str())
            .unwrap_or("")
    }
}
