//! Upstream types - endpoints and error classification

use std::fmt;
use thiserror::Error;

/// The three prompt-tools endpoints. Path suffixes are identical to the
/// tool names advertised over MCP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    GeneratePrompt,
    ImprovePrompt,
    TemplatizePrompt,
}

impl Endpoint {
    pub fn as_str(self) -> &'static str {
        match self {
            Endpoint::GeneratePrompt => "generate_prompt",
            Endpoint::ImprovePrompt => "improve_prompt",
            Endpoint::TemplatizePrompt => "templatize_prompt",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upstream call failures.
///
/// `Api` carries the detail string destined for the error envelope: the
/// compact serialisation of the structured error body when the API sent
/// one, a plain status description otherwise.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("API rejected {endpoint} call: {detail}")]
    Api { endpoint: Endpoint, detail: String },

    #[error("network error calling {endpoint}: {source}")]
    Network {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },
}

impl UpstreamError {
    pub fn api(endpoint: Endpoint, detail: impl Into<String>) -> Self {
        Self::Api {
            endpoint,
            detail: detail.into(),
        }
    }

    pub fn network(endpoint: Endpoint, source: reqwest::Error) -> Self {
        Self::Network { endpoint, source }
    }

    pub fn endpoint(&self) -> Endpoint {
        match self {
            UpstreamError::Api { endpoint, .. } => *endpoint,
            UpstreamError::Network { endpoint, .. } => *endpoint,
        }
    }

    /// The best available failure description, without the endpoint name.
    pub fn detail(&self) -> String {
        match self {
            UpstreamError::Api { detail, .. } => detail.clone(),
            UpstreamError::Network { source, .. } => source.to_string(),
        }
    }
}
