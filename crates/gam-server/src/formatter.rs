//! Response Formatter
//!
//! Builds the one-part text responses returned from `tools/call`. Error
//! envelopes are ordinary results carrying an `"error"` payload; they are
//! never flagged as protocol-level tool errors.

use rmcp::model::{CallToolResult, Content};
use serde_json::{Value, json};

use gam_domain::error::Result;

use crate::constants::ERROR_KEY;

/// Response formatter for MCP tool calls
pub struct ResponseFormatter;

impl ResponseFormatter {
    /// Pretty-printed JSON of a successful tool result
    pub fn success(value: &Value) -> Result<CallToolResult> {
        let text = serde_json::to_string_pretty(value)?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Envelope for a name absent from the registry
    pub fn unknown_tool(name: &str) -> CallToolResult {
        Self::error_envelope(format!("Tool '{name}' not implemented by this server."))
    }

    /// Envelope for a tool that returned an error
    pub fn tool_failure(name: &str, error: &dyn std::error::Error) -> CallToolResult {
        Self::error_envelope(format!("Failed to execute tool '{name}': {error}"))
    }

    fn error_envelope(message: String) -> CallToolResult {
        let text = json!({ ERROR_KEY: message }).to_string();
        CallToolResult::success(vec![Content::text(text)])
    }
}
