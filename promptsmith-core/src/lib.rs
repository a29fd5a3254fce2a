//! MCP server runtime for the Anthropic experimental prompt tools API
//!
//! The crate wires three layers together: a schema-validating tool
//! registry, an HTTP client for the prompt tools endpoints, and a
//! line-delimited JSON-RPC 2.0 surface served over stdio.

pub mod application;
pub mod config;
pub mod constants;
pub mod domain;
pub mod infrastructure;

pub use application::{stdio, tooling, tools};
pub use config::Config;
pub use domain::schema;
pub use infrastructure::{rpc, upstream};

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

use crate::infrastructure::rpc::McpServer;
use crate::infrastructure::upstream::PromptToolsClient;

/// Startup knobs the binary surfaces as CLI flags.
#[derive(Debug, Default)]
pub struct RunOptions {
    pub env_file: Option<PathBuf>,
    pub base_url: Option<String>,
}

pub async fn run(options: RunOptions) -> Result<(), Box<dyn Error>> {
    init_tracing();
    info!("Starting promptsmith");
    debug!(
        env_file = ?options.env_file,
        base_url = ?options.base_url,
        "CLI arguments parsed"
    );

    match &options.env_file {
        Some(path) => {
            config::load_env_file(path)?;
            info!(path = %path.display(), "Loaded environment from file");
        }
        None => config::ensure_env_loaded(),
    }

    let mut config = Config::from_env()?;
    if let Some(base_url) = options.base_url {
        config = config.with_base_url(base_url);
    }
    info!(
        api_key = %config.masked_key(),
        base_url = %config.base_url(),
        "Configuration loaded"
    );

    let api = Arc::new(PromptToolsClient::from_config(&config));
    let registry = tools::default_registry(api)?;
    info!(tools = ?registry.names(), "Registered prompt tools");

    let server = McpServer::new(registry);
    stdio::run(&server).await?;

    info!("Server shut down");
    Ok(())
}

fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        // stdout carries the protocol stream; diagnostics go to stderr.
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_level(true)
            .with_writer(std::io::stderr)
            .init();
    });
}
