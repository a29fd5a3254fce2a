//! JSON-RPC 2.0 routing for the MCP stdio surface
//!
//! One inbound line maps to at most one outbound response. Notifications
//! and peer messages that cannot be answered produce `None`; everything
//! else produces a response carrying the caller's id.

use serde_json::{Map, Value, json};
use tracing::{debug, error};

use crate::application::tooling::ToolRegistry;
use crate::constants::{PROTOCOL_VERSION, SERVER_INSTRUCTIONS, SERVER_NAME, SERVER_TITLE};
use crate::infrastructure::rpc::types::{RpcError, RpcRequest, RpcResponse};

pub struct McpServer {
    registry: ToolRegistry,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    /// Route one raw input line. `None` means no response is owed.
    pub async fn handle_line(&self, line: &str) -> Option<RpcResponse> {
        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(parse_failure) => {
                debug!(%parse_failure, "Discarding unparseable input line");
                return Some(RpcResponse::error(
                    None,
                    RpcError::parse_error("Input line is not valid JSON"),
                ));
            }
        };

        // Keep the id for the error reply even when the rest of the
        // request does not deserialize.
        let recovered_id = value.get("id").cloned();
        let request: RpcRequest = match serde_json::from_value(value) {
            Ok(request) => request,
            Err(shape_failure) => {
                debug!(%shape_failure, "Rejecting malformed JSON-RPC request");
                return Some(RpcResponse::error(
                    recovered_id,
                    RpcError::invalid_request("Request is not a JSON-RPC 2.0 object"),
                ));
            }
        };

        if request.jsonrpc != "2.0" {
            return Some(RpcResponse::error(
                request.id,
                RpcError::invalid_request("Unsupported jsonrpc version (expected 2.0)"),
            ));
        }

        if request.method.is_empty() {
            if request.is_notification() {
                // A response object from the peer; this server never issues
                // outbound requests, so there is nothing to match it with.
                return None;
            }
            return Some(RpcResponse::error(
                request.id,
                RpcError::invalid_request("Request is missing a method"),
            ));
        }

        if request.is_notification() {
            self.handle_notification(&request.method);
            return None;
        }

        Some(self.handle_request(request).await)
    }

    fn handle_notification(&self, method: &str) {
        match method {
            "notifications/initialized" | "notifications/cancelled" => {
                debug!(method, "Acknowledged client notification");
            }
            other => {
                debug!(method = other, "Ignoring unknown notification");
            }
        }
    }

    async fn handle_request(&self, request: RpcRequest) -> RpcResponse {
        debug!(method = %request.method, "Received JSON-RPC request");

        match request.method.as_str() {
            "initialize" => RpcResponse::success(request.id, self.initialize_payload()),
            "ping" => RpcResponse::success(request.id, json!({})),
            "tools/list" => RpcResponse::success(request.id, self.tools_list_payload()),
            "tools/call" => self.handle_tools_call(request.id, request.params).await,
            other => {
                error!(method = other, "Unknown JSON-RPC method");
                RpcResponse::error(request.id, RpcError::method_not_found(other))
            }
        }
    }

    fn initialize_payload(&self) -> Value {
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": SERVER_NAME,
                "title": SERVER_TITLE,
                "version": env!("CARGO_PKG_VERSION")
            },
            "instructions": SERVER_INSTRUCTIONS
        })
    }

    fn tools_list_payload(&self) -> Value {
        let tools: Vec<Value> = self
            .registry
            .specs()
            .map(|spec| spec.advertisement())
            .collect();
        json!({ "tools": tools })
    }

    async fn handle_tools_call(&self, id: Option<Value>, params: Option<Value>) -> RpcResponse {
        let Some(Value::Object(params)) = params else {
            return RpcResponse::error(
                id,
                RpcError::invalid_params("tools/call params must be an object"),
            );
        };

        let Some(name) = params.get("name").and_then(Value::as_str) else {
            return RpcResponse::error(
                id,
                RpcError::invalid_params("tools/call requires string field 'name'"),
            );
        };

        let arguments = match params.get("arguments") {
            Some(Value::Object(map)) => Value::Object(map.clone()),
            Some(Value::Null) | None => Value::Object(Map::new()),
            Some(_) => {
                return RpcResponse::error(
                    id,
                    RpcError::invalid_params("tools/call 'arguments' must be an object"),
                );
            }
        };

        let envelope = self.registry.dispatch(name, arguments).await;
        match serde_json::to_value(&envelope) {
            Ok(result) => RpcResponse::success(id, result),
            Err(serialize_failure) => {
                error!(%serialize_failure, "Failed to serialize tool response");
                RpcResponse::error(id, RpcError::internal("Failed to serialize tool response"))
            }
        }
    }
}
