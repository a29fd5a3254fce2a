// Schema validation tests - declared tool schemas against raw arguments
//
// Exercises the advertised input schemas end to end: the JSON Schema
// rendering used by tools/list and the validation pass that runs before
// any upstream call.

use promptsmith_core::schema::{FieldSpec, Schema};
use promptsmith_core::tools::{generate, improve, templatize};
use serde_json::json;

#[test]
fn generate_prompt_schema_advertises_both_required_fields() {
    let advertisement = generate::spec().advertisement();
    assert_eq!(advertisement["name"], "generate_prompt");

    let input_schema = &advertisement["inputSchema"];
    assert_eq!(input_schema["type"], "object");
    assert_eq!(input_schema["properties"]["task"]["type"], "string");
    assert_eq!(
        input_schema["properties"]["task"]["description"],
        "Task description."
    );
    assert_eq!(input_schema["required"], json!(["task", "target_model"]));
}

#[test]
fn improve_prompt_schema_requires_only_messages() {
    let advertisement = improve::spec().advertisement();
    let input_schema = &advertisement["inputSchema"];
    assert_eq!(input_schema["required"], json!(["messages"]));

    let messages = &input_schema["properties"]["messages"];
    assert_eq!(messages["type"], "array");
    assert_eq!(messages["items"]["type"], "object");
    assert_eq!(
        messages["items"]["properties"]["content"]["items"]["properties"]["text"]["type"],
        "string"
    );
}

#[test]
fn templatize_prompt_schema_keeps_system_optional() {
    let advertisement = templatize::spec().advertisement();
    let input_schema = &advertisement["inputSchema"];
    assert_eq!(input_schema["required"], json!(["messages"]));
    assert_eq!(input_schema["properties"]["system"]["type"], "string");
}

#[test]
fn validation_collects_every_violation_with_nested_paths() {
    let schema = improve::spec().schema().clone();
    let arguments = json!({
        "messages": [
            {"role": "user", "content": [{"type": "text", "text": "hi"}]},
            {"role": 5, "content": [{"type": "text", "text": null}]}
        ],
        "feedback": 12
    });

    let rejection = schema.validate(&arguments).unwrap_err();
    let paths: Vec<&str> = rejection
        .violations()
        .iter()
        .map(|violation| violation.path())
        .collect();
    assert_eq!(
        paths,
        vec!["messages[1].role", "messages[1].content[0].text", "feedback"]
    );
}

#[test]
fn unknown_fields_are_dropped_from_validated_arguments() {
    let schema = Schema::new(vec![FieldSpec::text("task", "Task description.")]);
    let validated = schema
        .validate(&json!({"task": "write a haiku", "mystery": true}))
        .unwrap();
    assert_eq!(validated, json!({"task": "write a haiku"}));
}

#[test]
fn valid_conversation_passes_untouched() {
    let schema = templatize::spec().schema().clone();
    let arguments = json!({
        "messages": [
            {"role": "user", "content": [{"type": "text", "text": "Translate hello to French"}]}
        ],
        "system": "You are a translator."
    });
    let validated = schema.validate(&arguments).unwrap();
    assert_eq!(validated, arguments);
}
