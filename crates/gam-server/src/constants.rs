//! Server-specific constants
//!
//! Tool names and the JSON shape used for parameterless tools.

use rmcp::model::JsonObject;
use serde_json::{Value, json};

/// Tool listing accounts and their properties
pub const TOOL_GET_ACCOUNT_SUMMARIES: &str = "get_account_summaries";

/// Tool listing Google Ads links of a property
pub const TOOL_LIST_GOOGLE_ADS_LINKS: &str = "list_google_ads_links";

/// Tool returning a property resource
pub const TOOL_GET_PROPERTY_DETAILS: &str = "get_property_details";

/// Tool listing reporting annotations of a property
pub const TOOL_LIST_PROPERTY_ANNOTATIONS: &str = "list_property_annotations";

/// Tool returning custom dimensions and metrics of a property
pub const TOOL_GET_CUSTOM_DIMENSIONS_AND_METRICS: &str = "get_custom_dimensions_and_metrics";

/// Tool running a standard report
pub const TOOL_RUN_REPORT: &str = "run_report";

/// Tool running a realtime report
pub const TOOL_RUN_REALTIME_REPORT: &str = "run_realtime_report";

/// Key of the error envelope returned to clients
pub const ERROR_KEY: &str = "error";

/// Input schema for tools that take no arguments: `{"type": "object", "properties": {}}`
pub fn empty_object_schema() -> JsonObject {
    let mut schema = JsonObject::new();
    schema.insert("type".to_string(), Value::String("object".to_string()));
    schema.insert("properties".to_string(), json!({}));
    schema
}
