//! Stub tools and response helpers

use std::sync::Arc;

use async_trait::async_trait;
use gam_domain::error::{Error, Result};
use gam_domain::ports::SharedAnalyticsProvider;
use gam_server::tools::{AnalyticsTool, ToolDispatcher, ToolRegistry};
use rmcp::model::{CallToolResult, JsonObject};
use serde_json::{Value, json};

use super::mock_provider::MockAnalyticsProvider;

/// Tool echoing its arguments back
pub struct EchoTool;

#[async_trait]
impl AnalyticsTool for EchoTool {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn description(&self) -> String {
        "Echoes its arguments".to_string()
    }

    async fn invoke(&self, arguments: JsonObject) -> Result<Value> {
        Ok(json!({ "echo": Value::Object(arguments) }))
    }
}

/// Tool that always fails with the given message
pub struct FailingTool(pub &'static str);

#[async_trait]
impl AnalyticsTool for FailingTool {
    fn name(&self) -> &'static str {
        "explode"
    }

    fn description(&self) -> String {
        "Always fails".to_string()
    }

    async fn invoke(&self, _arguments: JsonObject) -> Result<Value> {
        Err(Error::validation(self.0))
    }
}

/// Dispatcher over the default tool set backed by `provider`
pub fn default_dispatcher(provider: Arc<MockAnalyticsProvider>) -> ToolDispatcher {
    let provider: SharedAnalyticsProvider = provider;
    let registry = ToolRegistry::new(gam_server::handlers::default_tools(&provider))
        .expect("default tools register");
    ToolDispatcher::new(Arc::new(registry))
}

/// Build a JSON object from a `json!` literal
pub fn args(value: Value) -> Option<JsonObject> {
    match value {
        Value::Object(map) => Some(map),
        other => panic!("arguments must be an object, got {other}"),
    }
}

/// Concatenated text of all content parts
pub fn extract_text_content(result: &CallToolResult) -> String {
    result
        .content
        .iter()
        .filter_map(|c| {
            serde_json::to_value(c)
                .ok()
                .and_then(|json| json.get("text").and_then(Value::as_str).map(str::to_string))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse the single text part of a result as JSON
pub fn single_json_part(result: &CallToolResult) -> Value {
    assert_eq!(result.content.len(), 1, "expected exactly one content part");
    serde_json::from_str(&extract_text_content(result)).expect("text part is JSON")
}
