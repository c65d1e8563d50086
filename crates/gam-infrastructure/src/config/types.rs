//! Configuration types

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ADMIN_BASE_URL, DEFAULT_DATA_BASE_URL, DEFAULT_LOG_LEVEL, DEFAULT_PAGE_SIZE,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SERVER_NAME, DEFAULT_SERVER_VERSION,
};

/// Root application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// MCP server metadata
    pub server: ServerConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Google Analytics API access
    pub analytics: AnalyticsConfig,
}

/// MCP server metadata reported during initialization
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server name
    pub name: String,
    /// Server version string
    pub version: String,
    /// Optional usage instructions sent to clients
    pub instructions: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SERVER_NAME.to_string(),
            version: DEFAULT_SERVER_VERSION.to_string(),
            instructions: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to a daily-rotated file in addition to stderr
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// Google Analytics API access configuration
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// OAuth 2.0 bearer token with the `analytics.readonly` scope
    pub access_token: Option<String>,
    /// Google Cloud project billed for quota (`x-goog-user-project`)
    pub quota_project: Option<String>,
    /// Analytics Admin API base URL
    pub admin_base_url: String,
    /// Analytics Data API base URL
    pub data_base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Page size for paginated list methods
    pub page_size: u32,
}

impl AnalyticsConfig {
    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            quota_project: None,
            admin_base_url: DEFAULT_ADMIN_BASE_URL.to_string(),
            data_base_url: DEFAULT_DATA_BASE_URL.to_string(),
            timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

// Keeps the token out of logs.
impl fmt::Debug for AnalyticsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalyticsConfig")
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "<redacted>"),
            )
            .field("quota_project", &self.quota_project)
            .field("admin_base_url", &self.admin_base_url)
            .field("data_base_url", &self.data_base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("page_size", &self.page_size)
            .finish()
    }
}
