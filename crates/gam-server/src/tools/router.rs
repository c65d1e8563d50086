//! Tool Router Module
//!
//! Dispatches `tools/call` requests against the registry and turns every
//! outcome into a single text content part. Failures never surface as
//! protocol-level errors.

use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::{debug, error};

use crate::formatter::ResponseFormatter;
use crate::tools::registry::ToolRegistry;

/// Dispatcher over an immutable tool registry
#[derive(Clone)]
pub struct ToolDispatcher {
    registry: Arc<ToolRegistry>,
}

impl ToolDispatcher {
    /// Create a dispatcher for the given registry
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    /// Registry backing this dispatcher
    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }

    /// All tools in registration order
    pub fn list_tools(&self) -> Vec<Tool> {
        self.registry.tool_list()
    }

    /// Invoke a tool by name
    ///
    /// Missing arguments are treated as an empty object. The invocation is
    /// awaited to completion with no deadline.
    pub async fn call_tool(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        let Some(descriptor) = self.registry.get(name) else {
            return ResponseFormatter::unknown_tool(name);
        };

        debug!(tool = name, "Invoking tool");
        let outcome = descriptor
            .tool()
            .invoke(arguments.unwrap_or_default())
            .await
            .and_then(|value| ResponseFormatter::success(&value));

        outcome.unwrap_or_else(|e| {
            error!(
                tool = name,
                category = e.category(),
                error = %e,
                "Error executing tool"
            );
            ResponseFormatter::tool_failure(name, &e)
        })
    }
}
