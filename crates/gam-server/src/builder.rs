//! MCP Server Builder
//!
//! Builder pattern for constructing MCP servers with dependency injection.

use std::sync::Arc;

use gam_domain::ports::SharedAnalyticsProvider;
use gam_infrastructure::config::ServerConfig;

use crate::McpServer;
use crate::handlers::default_tools;
use crate::tools::{RegistryError, ToolRegistry};

/// Builder for MCP Server with dependency injection
///
/// Either a ready-made registry or an analytics provider (from which the
/// default tool set is built) must be supplied.
#[derive(Default)]
pub struct McpServerBuilder {
    registry: Option<Arc<ToolRegistry>>,
    provider: Option<SharedAnalyticsProvider>,
    server_config: Option<ServerConfig>,
}

impl McpServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicitly constructed tool registry
    pub fn with_registry(mut self, registry: Arc<ToolRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Build the default tool set over this analytics provider
    pub fn with_analytics_provider(mut self, provider: SharedAnalyticsProvider) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set server metadata (defaults to `ServerConfig::default()`)
    pub fn with_server_config(mut self, config: ServerConfig) -> Self {
        self.server_config = Some(config);
        self
    }

    /// Build the MCP server
    ///
    /// # Errors
    /// Returns `BuilderError::MissingDependency` if neither a registry nor a
    /// provider was supplied, or `BuilderError::Registry` if the default tool
    /// set fails to register.
    pub fn build(self) -> Result<McpServer, BuilderError> {
        let registry = match (self.registry, self.provider) {
            (Some(registry), _) => registry,
            (None, Some(provider)) => Arc::new(ToolRegistry::new(default_tools(&provider))?),
            (None, None) => {
                return Err(BuilderError::MissingDependency(
                    "tool registry or analytics provider",
                ));
            }
        };
        Ok(McpServer::new(
            registry,
            self.server_config.unwrap_or_default(),
        ))
    }
}

/// Errors that can occur during server building
#[derive(Debug, thiserror::Error)]
pub enum BuilderError {
    /// A required dependency was not provided
    #[error("Missing required dependency: {0}")]
    MissingDependency(&'static str),

    /// The tool registry could not be built
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
