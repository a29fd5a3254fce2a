// Tool dispatch tests - registry wiring for the three prompt tools
//
// Uses a scripted stand-in for the HTTP API so dispatch behaviour can be
// observed without a network: which endpoint was called, with which
// payload, and how each outcome is wrapped. One test points the real
// client at a dead port to cover transport-level failures.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::future::join;
use promptsmith_core::tools;
use promptsmith_core::upstream::{Endpoint, PromptToolsApi, PromptToolsClient, UpstreamError};
use serde_json::{Value, json};
use tokio::net::TcpListener;

const ALL_TOOLS: [&str; 3] = ["generate_prompt", "improve_prompt", "templatize_prompt"];

enum Outcome {
    Success(Value),
    ApiRejection(String),
}

struct ScriptedApi {
    outcome: Outcome,
    calls: Mutex<Vec<(Endpoint, Value)>>,
}

impl ScriptedApi {
    fn success(body: Value) -> Arc<Self> {
        Arc::new(Self {
            outcome: Outcome::Success(body),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn rejection(detail: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Outcome::ApiRejection(detail.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<(Endpoint, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PromptToolsApi for ScriptedApi {
    async fn call(&self, endpoint: Endpoint, payload: Value) -> Result<Value, UpstreamError> {
        self.calls.lock().unwrap().push((endpoint, payload));
        match &self.outcome {
            Outcome::Success(body) => Ok(body.clone()),
            Outcome::ApiRejection(detail) => Err(UpstreamError::api(endpoint, detail.clone())),
        }
    }
}

fn minimal_valid_arguments(tool: &str) -> Value {
    match tool {
        "generate_prompt" => json!({"task": "write a haiku", "target_model": "model-x"}),
        _ => json!({"messages": []}),
    }
}

#[tokio::test]
async fn registry_advertises_tools_in_registration_order() {
    let api = ScriptedApi::success(json!({}));
    let registry = tools::default_registry(api).unwrap();
    assert_eq!(registry.names(), ALL_TOOLS);
}

#[tokio::test]
async fn valid_generate_call_forwards_filtered_arguments() {
    let api = ScriptedApi::success(json!({"prompt": "hi"}));
    let registry = tools::default_registry(api.clone()).unwrap();

    let arguments = json!({
        "task": "write a haiku",
        "target_model": "claude-3-7-sonnet-20250219",
        "unexpected": true
    });
    let envelope = registry.dispatch("generate_prompt", arguments).await;

    assert!(!envelope.is_failure());
    assert_eq!(envelope.text(), "{\n  \"prompt\": \"hi\"\n}");

    let serialized = serde_json::to_value(&envelope).unwrap();
    assert_eq!(serialized["content"][0]["type"], "text");
    assert!(serialized.get("isError").is_none());

    let calls = api.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, Endpoint::GeneratePrompt);
    assert_eq!(
        calls[0].1,
        json!({
            "task": "write a haiku",
            "target_model": "claude-3-7-sonnet-20250219"
        })
    );
}

#[tokio::test]
async fn every_tool_wraps_success_as_pretty_json() {
    let body = json!({"messages": [{"role": "user"}], "usage": {"input_tokens": 4}});
    let api = ScriptedApi::success(body.clone());
    let registry = tools::default_registry(api.clone()).unwrap();
    let expected_text = serde_json::to_string_pretty(&body).unwrap();

    for tool in ALL_TOOLS {
        let envelope = registry.dispatch(tool, minimal_valid_arguments(tool)).await;
        assert!(!envelope.is_failure(), "{tool} reported failure");
        assert_eq!(envelope.text(), expected_text, "{tool} text differs");
    }
    assert_eq!(api.calls().len(), 3);
}

#[tokio::test]
async fn missing_required_fields_are_rejected_without_upstream_calls() {
    let api = ScriptedApi::success(json!({}));
    let registry = tools::default_registry(api.clone()).unwrap();

    for tool in ALL_TOOLS {
        let envelope = registry.dispatch(tool, json!({})).await;
        assert!(envelope.is_failure(), "{tool} accepted empty arguments");
        assert!(
            envelope
                .text()
                .starts_with(&format!("Error: Failed to {tool}: invalid arguments:")),
            "unexpected text for {tool}: {}",
            envelope.text()
        );
    }
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn invalid_arguments_never_reach_the_api() {
    let api = ScriptedApi::success(json!({}));
    let registry = tools::default_registry(api.clone()).unwrap();

    let envelope = registry
        .dispatch("improve_prompt", json!({"messages": "oops"}))
        .await;

    assert!(envelope.is_failure());
    assert!(
        envelope
            .text()
            .contains("messages: expected array, found string"),
        "unexpected text: {}",
        envelope.text()
    );
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn upstream_rejection_uses_the_uniform_error_text() {
    let detail = r#"{"error":{"message":"target_model is unknown"},"type":"error"}"#;
    let api = ScriptedApi::rejection(detail);
    let registry = tools::default_registry(api.clone()).unwrap();

    for tool in ALL_TOOLS {
        let envelope = registry.dispatch(tool, minimal_valid_arguments(tool)).await;
        assert!(envelope.is_failure());
        assert_eq!(envelope.text(), format!("Error: Failed to {tool}: {detail}"));
    }
    assert_eq!(api.calls().len(), 3);
}

#[tokio::test]
async fn unknown_tool_is_rejected_without_upstream_call() {
    let api = ScriptedApi::success(json!({}));
    let registry = tools::default_registry(api.clone()).unwrap();

    let envelope = registry.dispatch("mystery_tool", json!({})).await;

    assert!(envelope.is_failure());
    assert_eq!(
        envelope.text(),
        "Error: Failed to mystery_tool: tool is not registered"
    );
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn transport_failure_becomes_an_error_envelope_for_every_tool() {
    // Bind then drop so the port is guaranteed to refuse connections.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let api = Arc::new(PromptToolsClient::new(base_url, "test-key"));
    let registry = tools::default_registry(api).unwrap();

    for tool in ALL_TOOLS {
        let envelope = registry.dispatch(tool, minimal_valid_arguments(tool)).await;
        assert!(envelope.is_failure(), "{tool} did not report failure");
        assert!(
            envelope
                .text()
                .starts_with(&format!("Error: Failed to {tool}: ")),
            "unexpected text for {tool}: {}",
            envelope.text()
        );
    }
}

#[tokio::test]
async fn identical_calls_produce_identical_envelopes() {
    let api = ScriptedApi::success(json!({"messages": [{"role": "user"}]}));
    let registry = tools::default_registry(api.clone()).unwrap();

    let arguments = json!({
        "messages": [{"role": "user", "content": [{"type": "text", "text": "hi"}]}]
    });
    let first = registry
        .dispatch("templatize_prompt", arguments.clone())
        .await;
    let second = registry.dispatch("templatize_prompt", arguments).await;

    assert_eq!(first.text(), second.text());
    assert_eq!(first.is_failure(), second.is_failure());

    let calls = api.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], calls[1]);
}

#[tokio::test]
async fn concurrent_dispatches_do_not_interfere() {
    let body = json!({"prompt": "hi"});
    let api = ScriptedApi::success(body.clone());
    let registry = tools::default_registry(api.clone()).unwrap();
    let expected_text = serde_json::to_string_pretty(&body).unwrap();

    let (first, second) = join(
        registry.dispatch("generate_prompt", minimal_valid_arguments("generate_prompt")),
        registry.dispatch("templatize_prompt", minimal_valid_arguments("templatize_prompt")),
    )
    .await;

    assert_eq!(first.text(), expected_text);
    assert_eq!(second.text(), expected_text);

    let endpoints: Vec<Endpoint> = api.calls().iter().map(|(endpoint, _)| *endpoint).collect();
    assert_eq!(endpoints.len(), 2);
    assert!(endpoints.contains(&Endpoint::GeneratePrompt));
    assert!(endpoints.contains(&Endpoint::TemplatizePrompt));
}
