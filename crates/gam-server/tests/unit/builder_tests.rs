//! Tests for McpServerBuilder

use std::sync::Arc;

use gam_domain::ports::SharedAnalyticsProvider;
use gam_infrastructure::config::ServerConfig;
use gam_server::builder::{BuilderError, McpServerBuilder};
use gam_server::tools::{AnalyticsTool, ToolRegistry};
use gam_server::transport::StdioServerExt;
use rmcp::ServerHandler;

use crate::test_utils::mock_provider::MockAnalyticsProvider;
use crate::test_utils::test_fixtures::EchoTool;

#[test]
fn test_builder_with_provider_registers_default_tools() {
    let provider: SharedAnalyticsProvider = Arc::new(MockAnalyticsProvider::new());
    let server = McpServerBuilder::new()
        .with_analytics_provider(provider)
        .build()
        .expect("server builds");
    assert_eq!(server.dispatcher().registry().len(), 7);
    assert_eq!(server.name(), "Google Analytics MCP Server");
}

#[test]
fn test_builder_prefers_explicit_registry() {
    let tools: Vec<Arc<dyn AnalyticsTool>> = vec![Arc::new(EchoTool)];
    let registry = Arc::new(ToolRegistry::new(tools).expect("registry"));
    let server = McpServerBuilder::new()
        .with_registry(registry)
        .with_analytics_provider(Arc::new(MockAnalyticsProvider::new()))
        .build()
        .expect("server builds");
    assert_eq!(server.dispatcher().registry().names().collect::<Vec<_>>(), ["echo"]);
}

#[test]
fn test_builder_missing_dependencies() {
    match McpServerBuilder::new().build() {
        Err(BuilderError::MissingDependency(dep)) => {
            assert_eq!(dep, "tool registry or analytics provider");
        }
        Err(other) => panic!("Expected MissingDependency error, got {other}"),
        Ok(_) => panic!("Expected MissingDependency error"),
    }
}

#[test]
fn test_server_info_reports_configured_metadata() {
    let server = McpServerBuilder::new()
        .with_analytics_provider(Arc::new(MockAnalyticsProvider::new()))
        .with_server_config(ServerConfig {
            name: "Analytics Sandbox".to_string(),
            version: "2.3.4".to_string(),
            instructions: Some("Use run_report for historical data.".to_string()),
        })
        .build()
        .expect("server builds");

    let info = server.get_info();
    assert_eq!(info.server_info.name, "Analytics Sandbox");
    assert_eq!(info.server_info.version, "2.3.4");
    assert!(info.capabilities.tools.is_some());
    assert_eq!(
        info.capabilities.experimental.map(|e| e.is_empty()),
        Some(true)
    );
    assert_eq!(
        info.instructions.as_deref(),
        Some("Use run_report for historical data.")
    );
}

fn assert_send<T: Send>(_: &T) {}

#[test]
fn test_stdio_future_can_be_spawned() {
    let server = McpServerBuilder::new()
        .with_analytics_provider(Arc::new(MockAnalyticsProvider::new()))
        .build()
        .expect("server builds");
    let serving = server.serve_stdio();
    assert_send(&serving);
    drop(serving);
}
