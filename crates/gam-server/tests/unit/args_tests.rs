//! Tests for tool argument decoding

use gam_server::args::{PropertyArgs, RunReportArgs, parse_args};
use serde_json::{Value, json};

fn object(value: Value) -> rmcp::model::JsonObject {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

#[test]
fn test_property_args_accept_number_and_string() {
    let numeric: PropertyArgs = parse_args(object(json!({"property_id": 7}))).expect("number");
    let text: PropertyArgs =
        parse_args(object(json!({"property_id": "properties/7"}))).expect("string");
    assert_eq!(
        numeric.property().expect("valid"),
        text.property().expect("valid")
    );
}

#[test]
fn test_wrong_type_is_invalid_arguments() {
    let err = parse_args::<PropertyArgs>(object(json!({"property_id": [1, 2]})))
        .expect_err("array is not an id");
    assert!(err.to_string().starts_with("invalid arguments:"));
}

#[test]
fn test_report_args_defaults() {
    let args: RunReportArgs = parse_args(object(json!({
        "property_id": 1,
        "date_ranges": [{"start_date": "2024-01-01", "end_date": "2024-01-02"}],
        "metrics": ["sessions"]
    })))
    .expect("minimal report args");
    assert!(args.dimensions.is_empty());
    assert!(args.order_bys.is_empty());
    assert!(!args.return_property_quota);

    let request = args.into_request().expect("valid request");
    assert_eq!(request.property.resource_name(), "properties/1");
    assert_eq!(request.date_ranges.len(), 1);
}

#[test]
fn test_report_args_require_metrics() {
    let err = parse_args::<RunReportArgs>(object(json!({
        "property_id": 1,
        "date_ranges": [{"start_date": "today", "end_date": "today"}]
    })))
    .expect_err("metrics missing");
    assert!(err.to_string().contains("metrics"));
}
