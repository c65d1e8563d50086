//! Tool Registry Tests

use std::sync::Arc;

use gam_server::tools::{AnalyticsTool, RegistryError, ToolRegistry};
use serde_json::{Value, json};

use crate::test_utils::mock_provider::MockAnalyticsProvider;
use crate::test_utils::test_fixtures::{EchoTool, FailingTool, default_dispatcher};

const EXPECTED_TOOLS: [&str; 7] = [
    "get_account_summaries",
    "list_google_ads_links",
    "get_property_details",
    "list_property_annotations",
    "get_custom_dimensions_and_metrics",
    "run_report",
    "run_realtime_report",
];

#[test]
fn test_default_tools_are_listed_in_order() {
    let dispatcher = default_dispatcher(Arc::new(MockAnalyticsProvider::new()));
    let tools = dispatcher.list_tools();
    let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
    assert_eq!(names, EXPECTED_TOOLS);
}

#[test]
fn test_each_tool_has_description_and_non_empty_schema() {
    let dispatcher = default_dispatcher(Arc::new(MockAnalyticsProvider::new()));
    for tool in dispatcher.list_tools() {
        assert!(
            tool.description.as_deref().is_some_and(|d| !d.is_empty()),
            "Tool {} should have a description",
            tool.name
        );
        assert!(
            !tool.input_schema.is_empty(),
            "Tool {} should not advertise an empty schema",
            tool.name
        );
        assert_eq!(tool.input_schema.get("type"), Some(&json!("object")));
    }
}

#[test]
fn test_parameterless_tool_gets_empty_object_schema() {
    let dispatcher = default_dispatcher(Arc::new(MockAnalyticsProvider::new()));
    let registry = dispatcher.registry();
    let descriptor = registry
        .get("get_account_summaries")
        .expect("registered");
    assert_eq!(
        Value::Object(descriptor.input_schema().clone()),
        json!({"type": "object", "properties": {}})
    );
}

#[test]
fn test_property_tools_require_property_id() {
    let dispatcher = default_dispatcher(Arc::new(MockAnalyticsProvider::new()));
    let descriptor = dispatcher
        .registry()
        .get("get_property_details")
        .expect("registered");
    let schema = descriptor.input_schema();
    assert!(schema["properties"].get("property_id").is_some());
    assert_eq!(schema["required"], json!(["property_id"]));
}

#[test]
fn test_report_schema_lists_required_fields() {
    let dispatcher = default_dispatcher(Arc::new(MockAnalyticsProvider::new()));
    let schema = dispatcher
        .registry()
        .get("run_report")
        .expect("registered")
        .input_schema()
        .clone();
    let required: Vec<_> = schema["required"]
        .as_array()
        .expect("required array")
        .iter()
        .filter_map(Value::as_str)
        .collect();
    for field in ["property_id", "date_ranges", "metrics"] {
        assert!(required.contains(&field), "{field} should be required");
    }
    assert!(!required.contains(&"dimensions"));
}

#[test]
fn test_duplicate_names_are_rejected() {
    let tools: Vec<Arc<dyn AnalyticsTool>> = vec![Arc::new(EchoTool), Arc::new(EchoTool)];
    match ToolRegistry::new(tools) {
        Err(RegistryError::DuplicateTool(name)) => assert_eq!(name, "echo"),
        other => panic!("expected duplicate tool error, got {other:?}"),
    }
}

#[test]
fn test_lookup_by_name() {
    let tools: Vec<Arc<dyn AnalyticsTool>> =
        vec![Arc::new(EchoTool), Arc::new(FailingTool("nope"))];
    let registry = ToolRegistry::new(tools).expect("unique names");
    assert_eq!(registry.len(), 2);
    assert!(!registry.is_empty());
    assert_eq!(registry.names().collect::<Vec<_>>(), ["echo", "explode"]);
    assert!(registry.get("echo").is_some());
    assert!(registry.get("missing").is_none());
}
