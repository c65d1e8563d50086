//! Handler tests: argument decoding and provider delegation

use std::sync::Arc;

use serde_json::json;

use crate::test_utils::mock_provider::MockAnalyticsProvider;
use crate::test_utils::test_fixtures::{args, default_dispatcher, single_json_part};

#[tokio::test]
async fn test_property_tools_normalize_property_id() {
    let provider = Arc::new(MockAnalyticsProvider::new());
    let dispatcher = default_dispatcher(Arc::clone(&provider));

    for (tool, property_id) in [
        ("list_google_ads_links", json!(1234)),
        ("get_property_details", json!("1234")),
        ("list_property_annotations", json!("properties/1234")),
        ("get_custom_dimensions_and_metrics", json!(1234)),
    ] {
        let result = dispatcher
            .call_tool(tool, args(json!({ "property_id": property_id })))
            .await;
        assert_ne!(result.is_error, Some(true), "{tool} should succeed");
    }

    assert_eq!(
        provider.calls(),
        [
            "google_ads_links:properties/1234",
            "property_details:properties/1234",
            "property_annotations:properties/1234",
            "custom_dimensions_and_metrics:properties/1234",
        ]
    );
}

#[tokio::test]
async fn test_property_details_returns_provider_payload() {
    let dispatcher = default_dispatcher(Arc::new(MockAnalyticsProvider::new()));
    let result = dispatcher
        .call_tool("get_property_details", args(json!({"property_id": 42})))
        .await;
    assert_eq!(
        single_json_part(&result),
        json!({"name": "properties/42", "displayName": "Shop", "timeZone": "Europe/Paris"})
    );
}

#[tokio::test]
async fn test_missing_property_id_is_invalid_arguments() {
    let provider = Arc::new(MockAnalyticsProvider::new());
    let dispatcher = default_dispatcher(Arc::clone(&provider));
    let result = dispatcher
        .call_tool("get_property_details", args(json!({})))
        .await;
    let payload = single_json_part(&result);
    let message = payload["error"].as_str().expect("error string");
    assert!(
        message.starts_with("Failed to execute tool 'get_property_details': invalid arguments:"),
        "unexpected message: {message}"
    );
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn test_malformed_property_id() {
    let dispatcher = default_dispatcher(Arc::new(MockAnalyticsProvider::new()));
    let result = dispatcher
        .call_tool("list_google_ads_links", args(json!({"property_id": "accounts/9"})))
        .await;
    assert_eq!(
        single_json_part(&result),
        json!({"error": "Failed to execute tool 'list_google_ads_links': invalid property ID: accounts/9"})
    );
}

#[tokio::test]
async fn test_run_report_delegates_to_provider() {
    let provider = Arc::new(MockAnalyticsProvider::new());
    let dispatcher = default_dispatcher(Arc::clone(&provider));
    let result = dispatcher
        .call_tool(
            "run_report",
            args(json!({
                "property_id": "properties/1234",
                "date_ranges": [{"start_date": "7daysAgo", "end_date": "yesterday"}],
                "dimensions": ["country"],
                "metrics": ["activeUsers"],
                "order_bys": [{"metric": {"metricName": "activeUsers"}, "desc": true}],
                "limit": 10
            })),
        )
        .await;
    let payload = single_json_part(&result);
    assert_eq!(payload["dimensionHeaders"], json!([{"name": "country"}]));
    assert_eq!(provider.calls(), ["run_report:properties/1234"]);
}

#[tokio::test]
async fn test_run_realtime_report_delegates_to_provider() {
    let provider = Arc::new(MockAnalyticsProvider::new());
    let dispatcher = default_dispatcher(Arc::clone(&provider));
    let result = dispatcher
        .call_tool(
            "run_realtime_report",
            args(json!({"property_id": 1234, "metrics": ["activeUsers"]})),
        )
        .await;
    assert_eq!(single_json_part(&result)["rowCount"], json!(1));
    assert_eq!(provider.calls(), ["run_realtime_report:properties/1234"]);
}

#[tokio::test]
async fn test_realtime_report_without_metrics_fails() {
    let dispatcher = default_dispatcher(Arc::new(MockAnalyticsProvider::new()));
    let result = dispatcher
        .call_tool(
            "run_realtime_report",
            args(json!({"property_id": 1234, "metrics": []})),
        )
        .await;
    assert_eq!(
        single_json_part(&result),
        json!({"error": "Failed to execute tool 'run_realtime_report': at least one metric is required"})
    );
}
