//! Application constants
//!
//! Single source of truth for API endpoints, header values, and server
//! identity.

/// Anthropic experimental API base URL
pub const ANTHROPIC_API_BASE_URL: &str = "https://api.anthropic.com/v1/experimental";

/// Value of the `anthropic-version` request header
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Value of the `anthropic-beta` request header gating the prompt tools
pub const ANTHROPIC_BETA: &str = "prompt-tools-2025-04-02";

/// Environment variable holding the Anthropic API key
pub const API_KEY_ENV: &str = "ANTHROPIC_KEY";

/// Environment variable overriding the API base URL (mainly for tests)
pub const BASE_URL_ENV: &str = "ANTHROPIC_BASE_URL";

/// MCP protocol revision spoken over stdio
pub const PROTOCOL_VERSION: &str = "2025-06-18";

/// Server name reported in the `initialize` result
pub const SERVER_NAME: &str = "promptsmith";

/// Human-readable server title
pub const SERVER_TITLE: &str = "Anthropic Prompt Tools";

/// Instructions surfaced to MCP clients on `initialize`
pub const SERVER_INSTRUCTIONS: &str = "Prompt engineering tools backed by the Anthropic \
    experimental API: generate_prompt writes a prompt from a task description, \
    improve_prompt refines an existing conversation, templatize_prompt extracts \
    variables from one. Set ANTHROPIC_KEY before launching the server.";
