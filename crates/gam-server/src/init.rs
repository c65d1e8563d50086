//! Server Initialization
//!
//! Handles configuration loading, dependency wiring, and the stdio run loop.
//!
//! # Startup sequence
//!
//! 1. Load [`AppConfig`] (defaults, TOML file, `GAM_` environment)
//! 2. Initialize `tracing` (stderr, optional rotated file)
//! 3. Build the Google Analytics provider and the tool registry
//! 4. Serve MCP over stdio until the client disconnects

use std::path::Path;
use std::sync::Arc;

use gam_domain::ports::SharedAnalyticsProvider;
use gam_infrastructure::GoogleAnalyticsProvider;
use gam_infrastructure::config::{AppConfig, ConfigLoader, ConfigSource};
use tracing::{error, info, warn};

use crate::McpServer;
use crate::McpServerBuilder;
use crate::transport::StdioServerExt;

/// Command-line overrides applied on top of loaded configuration
#[derive(Debug, Default, Clone)]
pub struct RunOptions<'a> {
    /// Explicit configuration file
    pub config_path: Option<&'a Path>,
    /// Log level override
    pub log_level: Option<&'a str>,
    /// Print the tool list as JSON and exit instead of serving
    pub list_tools: bool,
}

/// Run the Google Analytics MCP server
///
/// Startup failures and transport errors are logged once before returning;
/// a final line marks process exit either way.
pub async fn run(options: RunOptions<'_>) -> Result<(), Box<dyn std::error::Error>> {
    let (mut config, source) = load_config(options.config_path)?;
    if let Some(level) = options.log_level {
        config.logging.level = level.to_string();
    }
    gam_infrastructure::logging::init_logging(&config.logging)?;
    gam_infrastructure::logging::log_config_loaded(&source);

    let result = run_with_config(config, options.list_tools).await;
    if let Err(e) = &result {
        error!(error = %e, "MCP Server (stdio) encountered an error");
    }
    info!("MCP Server (stdio) process exiting");
    result
}

/// Load configuration from optional path
fn load_config(
    config_path: Option<&Path>,
) -> Result<(AppConfig, ConfigSource), Box<dyn std::error::Error>> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    Ok(loader.load_with_source()?)
}

async fn run_with_config(
    config: AppConfig,
    list_tools: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let server = create_mcp_server(&config)?;

    if list_tools {
        let tools = server.dispatcher().list_tools();
        println!("{}", serde_json::to_string_pretty(&tools)?);
        return Ok(());
    }

    info!(
        tools = server.dispatcher().registry().len(),
        "MCP server initialized"
    );
    if let Err(e) = server.serve_stdio().await {
        let e: Box<dyn std::error::Error> = e;
        return Err(e);
    }
    Ok(())
}

/// Create the MCP server with the Google Analytics provider
pub fn create_mcp_server(config: &AppConfig) -> Result<McpServer, Box<dyn std::error::Error>> {
    let provider = GoogleAnalyticsProvider::from_config(&config.analytics)?;
    if !provider.has_credentials() {
        warn!("No Google Analytics access token configured; tool calls will fail until one is provided");
    }
    let provider: SharedAnalyticsProvider = Arc::new(provider);
    info!(provider = provider.provider_name(), "Analytics provider ready");

    Ok(McpServerBuilder::new()
        .with_analytics_provider(provider)
        .with_server_config(config.server.clone())
        .build()?)
}
