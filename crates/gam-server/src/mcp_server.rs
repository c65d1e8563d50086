//! MCP Server Implementation
//!
//! Protocol handler exposing the tool registry over MCP. Receives the
//! registry and server metadata through constructor injection.

use std::sync::Arc;

use rmcp::ErrorData as McpError;
use rmcp::ServerHandler;
use rmcp::model::{
    CallToolRequestParams, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParams,
    ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::RoleServer;

use gam_infrastructure::config::ServerConfig;

use crate::tools::{ToolDispatcher, ToolRegistry};

/// Core MCP server implementation
#[derive(Clone)]
pub struct McpServer {
    /// Dispatcher over the immutable tool registry
    dispatcher: ToolDispatcher,
    /// Name, version and instructions reported on initialize
    config: Arc<ServerConfig>,
}

impl McpServer {
    /// Create a new MCP server with injected dependencies
    pub fn new(registry: Arc<ToolRegistry>, config: ServerConfig) -> Self {
        Self {
            dispatcher: ToolDispatcher::new(registry),
            config: Arc::new(config),
        }
    }

    /// Access to the tool dispatcher
    pub fn dispatcher(&self) -> &ToolDispatcher {
        &self.dispatcher
    }

    /// Server name reported to clients
    pub fn name(&self) -> &str {
        &self.config.name
    }
}

impl ServerHandler for McpServer {
    /// Get server information and capabilities
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_experimental()
                .enable_tools()
                .build(),
            server_info: Implementation {
                name: self.config.name.clone(),
                version: self.config.version.clone(),
                ..Default::default()
            },
            instructions: self.config.instructions.clone(),
        }
    }

    /// List available tools
    async fn list_tools(
        &self,
        _pagination: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.dispatcher.list_tools(),
            meta: Default::default(),
            next_cursor: None,
        })
    }

    /// Call a tool
    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self
            .dispatcher
            .call_tool(&request.name, request.arguments)
            .await)
    }
}
