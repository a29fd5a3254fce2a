//! Outbound side: the prompt tools API client and its seam.

mod client;
mod traits;
mod types;

pub use client::PromptToolsClient;
pub use traits::PromptToolsApi;
pub use types::{Endpoint, UpstreamError};
