//! Stdio Transport for MCP
//!
//! Implements MCP protocol over standard input/output streams. Framing is
//! handled entirely by `rmcp`.

use std::future::Future;

use rmcp::ServiceExt;
use rmcp::transport::stdio;
use tracing::info;

use crate::McpServer;

/// Outcome of a stdio serving session
pub type TransportResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Extension trait for McpServer to add stdio serving capability
pub trait StdioServerExt {
    /// Serve the MCP server over stdio until the client disconnects or Ctrl-C
    fn serve_stdio(self) -> impl Future<Output = TransportResult> + Send;
}

impl StdioServerExt for McpServer {
    fn serve_stdio(self) -> impl Future<Output = TransportResult> + Send {
        async move {
            info!("Starting MCP Stdio Server: {}", self.name());

            let service = self
                .serve(stdio())
                .await
                .map_err(|e| format!("Failed to start MCP service: {e:?}"))?;

            info!("MCP server started, waiting for requests");
            tokio::select! {
                quit = service.waiting() => {
                    let reason = quit.map_err(|e| format!("MCP service error: {e:?}"))?;
                    info!(reason = ?reason, "MCP client disconnected");
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("MCP Server (stdio) stopped by user");
                }
            }
            Ok(())
        }
    }
}
