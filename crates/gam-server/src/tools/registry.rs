//! Tool Registry Module
//!
//! Owns the fixed set of tools exposed over MCP. The registry is built once
//! at startup from an explicit list and never mutated afterwards.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use rmcp::model::{JsonObject, Tool};
use schemars::JsonSchema;
use serde_json::Value;
use thiserror::Error;

use gam_domain::error::Result;

use crate::constants::empty_object_schema;

/// A named, schema-described operation callable by MCP clients
#[async_trait]
pub trait AnalyticsTool: Send + Sync {
    /// Unique tool name
    fn name(&self) -> &'static str;

    /// Human-readable description shown to clients
    fn description(&self) -> String;

    /// JSON schema of accepted arguments
    ///
    /// The default declares no parameters.
    fn input_schema(&self) -> std::result::Result<JsonObject, RegistryError> {
        Ok(JsonObject::new())
    }

    /// Run the tool with raw call arguments
    async fn invoke(&self, arguments: JsonObject) -> Result<Value>;
}

/// Errors raised while building the registry
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Two tools share a name
    #[error("Duplicate tool name: {0}")]
    DuplicateTool(String),

    /// A tool's schema could not be turned into a JSON object
    #[error("Invalid input schema for tool {name}: {reason}")]
    InvalidSchema {
        /// Tool whose schema failed
        name: String,
        /// What went wrong
        reason: String,
    },
}

/// Generate an input schema from an argument type
pub fn schema_for_args<T: JsonSchema>(
    name: &str,
) -> std::result::Result<JsonObject, RegistryError> {
    let schema_value =
        serde_json::to_value(schemars::schema_for!(T)).map_err(|e| RegistryError::InvalidSchema {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

    match schema_value {
        Value::Object(map) => Ok(map),
        _ => Err(RegistryError::InvalidSchema {
            name: name.to_string(),
            reason: "schema is not an object".to_string(),
        }),
    }
}

/// Make a schema acceptable to strict MCP clients
///
/// A schema with neither `type` nor `properties` means "no parameters" and
/// becomes `{"type": "object", "properties": {}}`. An object schema without
/// `properties` gains an empty one.
pub fn normalize_input_schema(mut schema: JsonObject) -> JsonObject {
    if !schema.contains_key("type") && !schema.contains_key("properties") {
        return empty_object_schema();
    }
    let is_object = schema.get("type").and_then(Value::as_str) == Some("object");
    if is_object && !schema.contains_key("properties") {
        schema.insert("properties".to_string(), Value::Object(JsonObject::new()));
    }
    schema
}

/// Registered tool with its resolved metadata
#[derive(Clone)]
pub struct ToolDescriptor {
    name: &'static str,
    description: String,
    input_schema: Arc<JsonObject>,
    tool: Arc<dyn AnalyticsTool>,
}

impl ToolDescriptor {
    fn from_tool(tool: Arc<dyn AnalyticsTool>) -> std::result::Result<Self, RegistryError> {
        let input_schema = normalize_input_schema(tool.input_schema()?);
        Ok(Self {
            name: tool.name(),
            description: tool.description(),
            input_schema: Arc::new(input_schema),
            tool,
        })
    }

    /// Tool name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Tool description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Normalized input schema
    pub fn input_schema(&self) -> &JsonObject {
        &self.input_schema
    }

    /// Underlying tool
    pub fn tool(&self) -> &Arc<dyn AnalyticsTool> {
        &self.tool
    }

    /// MCP wire representation
    pub fn to_mcp_tool(&self) -> Tool {
        Tool::new(
            self.name,
            self.description.clone(),
            Arc::clone(&self.input_schema),
        )
    }
}

impl std::fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("name", &self.name)
            .field("input_schema", &self.input_schema)
            .finish_non_exhaustive()
    }
}

/// Immutable name → descriptor mapping, preserving registration order
#[derive(Debug)]
pub struct ToolRegistry {
    descriptors: Vec<ToolDescriptor>,
    index: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    /// Build the registry from a fixed list of tools
    ///
    /// # Errors
    /// Returns `RegistryError::DuplicateTool` when two tools share a name, or
    /// `RegistryError::InvalidSchema` when a schema cannot be generated.
    pub fn new(tools: Vec<Arc<dyn AnalyticsTool>>) -> std::result::Result<Self, RegistryError> {
        let mut descriptors = Vec::with_capacity(tools.len());
        let mut index = HashMap::with_capacity(tools.len());
        for tool in tools {
            let descriptor = ToolDescriptor::from_tool(tool)?;
            if index.insert(descriptor.name, descriptors.len()).is_some() {
                return Err(RegistryError::DuplicateTool(descriptor.name.to_string()));
            }
            descriptors.push(descriptor);
        }
        Ok(Self { descriptors, index })
    }

    /// Look up a tool by name
    pub fn get(&self, name: &str) -> Option<&ToolDescriptor> {
        self.index.get(name).map(|&i| &self.descriptors[i])
    }

    /// All descriptors in registration order
    pub fn descriptors(&self) -> &[ToolDescriptor] {
        &self.descriptors
    }

    /// Tool names in registration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.descriptors.iter().map(ToolDescriptor::name)
    }

    /// Number of registered tools
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Tool list for the MCP `tools/list` response
    pub fn tool_list(&self) -> Vec<Tool> {
        self.descriptors.iter().map(ToolDescriptor::to_mcp_tool).collect()
    }
}
