//! Tool dispatch tests: success, unknown tool and failure envelopes

use std::sync::Arc;

use gam_server::tools::{AnalyticsTool, ToolDispatcher, ToolRegistry};
use serde_json::json;

use crate::test_utils::mock_provider::MockAnalyticsProvider;
use crate::test_utils::test_fixtures::{
    EchoTool, FailingTool, args, default_dispatcher, extract_text_content, single_json_part,
};

fn stub_dispatcher() -> ToolDispatcher {
    let tools: Vec<Arc<dyn AnalyticsTool>> =
        vec![Arc::new(EchoTool), Arc::new(FailingTool("upstream exploded"))];
    ToolDispatcher::new(Arc::new(ToolRegistry::new(tools).expect("registry")))
}

#[tokio::test]
async fn test_unknown_tool_returns_error_envelope() {
    let dispatcher = stub_dispatcher();
    for name in ["nope", "", "run_report"] {
        let result = dispatcher.call_tool(name, None).await;
        assert_eq!(
            single_json_part(&result),
            json!({"error": format!("Tool '{name}' not implemented by this server.")})
        );
        assert_ne!(result.is_error, Some(true), "envelope is a normal result");
    }
}

#[tokio::test]
async fn test_success_is_pretty_printed_json() {
    let dispatcher = stub_dispatcher();
    let result = dispatcher
        .call_tool("echo", args(json!({"a": 1})))
        .await;
    let text = extract_text_content(&result);
    let expected = serde_json::to_string_pretty(&json!({"echo": {"a": 1}})).expect("serialize");
    assert_eq!(text, expected);
    assert!(text.contains('\n'), "pretty output spans lines");
    assert_ne!(result.is_error, Some(true));
}

#[tokio::test]
async fn test_missing_arguments_are_an_empty_object() {
    let dispatcher = stub_dispatcher();
    let result = dispatcher.call_tool("echo", None).await;
    assert_eq!(single_json_part(&result), json!({"echo": {}}));
}

#[tokio::test]
async fn test_failure_is_swallowed_into_envelope() {
    let dispatcher = stub_dispatcher();
    let result = dispatcher.call_tool("explode", None).await;
    assert_eq!(
        single_json_part(&result),
        json!({"error": "Failed to execute tool 'explode': upstream exploded"})
    );
    assert_ne!(result.is_error, Some(true), "envelope is a normal result");

    // The dispatcher keeps serving after a failure
    let result = dispatcher.call_tool("echo", args(json!({"ok": true}))).await;
    assert_eq!(single_json_part(&result), json!({"echo": {"ok": true}}));
}

#[tokio::test]
async fn test_repeated_calls_yield_identical_text() {
    let dispatcher = default_dispatcher(Arc::new(MockAnalyticsProvider::new()));
    let first = dispatcher.call_tool("get_account_summaries", None).await;
    let second = dispatcher.call_tool("get_account_summaries", None).await;
    assert_eq!(extract_text_content(&first), extract_text_content(&second));
}

#[tokio::test]
async fn test_run_report_with_reversed_dates() {
    let provider = Arc::new(MockAnalyticsProvider::new());
    let dispatcher = default_dispatcher(Arc::clone(&provider));
    let result = dispatcher
        .call_tool(
            "run_report",
            args(json!({
                "property_id": 1234,
                "date_ranges": [{"start_date": "2024-02-01", "end_date": "2024-01-01"}],
                "metrics": ["activeUsers"]
            })),
        )
        .await;
    assert_eq!(
        single_json_part(&result),
        json!({"error": "Failed to execute tool 'run_report': invalid date range"})
    );
    assert!(provider.calls().is_empty(), "provider must not be called");
}

#[tokio::test]
async fn test_provider_failure_is_reported() {
    let provider = Arc::new(MockAnalyticsProvider::failing("backend unavailable"));
    let dispatcher = default_dispatcher(provider);
    let result = dispatcher.call_tool("get_account_summaries", None).await;
    assert_eq!(
        single_json_part(&result),
        json!({
            "error": "Failed to execute tool 'get_account_summaries': Analytics API error (500): backend unavailable"
        })
    );
}

#[tokio::test]
async fn test_error_envelopes_are_not_flagged_on_the_wire() {
    let dispatcher = stub_dispatcher();
    for name in ["nope", "explode"] {
        let wire = serde_json::to_value(dispatcher.call_tool(name, None).await)
            .expect("serialize result");
        assert_ne!(wire.get("isError"), Some(&json!(true)), "{name}");
        assert_eq!(wire["content"].as_array().map(Vec::len), Some(1));
    }
}
