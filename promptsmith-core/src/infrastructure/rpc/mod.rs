pub mod server;
pub mod types;

pub use server::McpServer;
pub use types::{RpcError, RpcRequest, RpcResponse};
