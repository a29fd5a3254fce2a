//! Line-delimited stdio transport for the MCP server
//!
//! Reads one JSON-RPC message per line from stdin and writes one response
//! per answerable message to stdout. Logging stays on stderr so the
//! protocol stream remains clean.

use thiserror::Error;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info};

use crate::infrastructure::rpc::{McpServer, RpcResponse};

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("stdin/stdout I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize stdio response: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Serve until stdin reaches EOF.
pub async fn run(server: &McpServer) -> Result<(), ServeError> {
    let stdin = BufReader::new(io::stdin());
    let mut lines = stdin.lines();
    let mut stdout = io::stdout();

    info!("Serving MCP over stdio");
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        debug!("Received STDIO line");

        if let Some(response) = server.handle_line(&line).await {
            write_response(&mut stdout, &response).await?;
        }
    }

    debug!("STDIN closed, shutting down");
    stdout.flush().await?;
    Ok(())
}

async fn write_response(stdout: &mut io::Stdout, response: &RpcResponse) -> Result<(), ServeError> {
    let mut payload = serde_json::to_vec(response)?;
    payload.push(b'\n');
    stdout.write_all(&payload).await?;
    stdout.flush().await?;
    Ok(())
}
