//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `gam_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "gam.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "gam";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "GAM";

/// Separator between nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Environment variable consulted when no access token is configured
pub const ACCESS_TOKEN_FALLBACK_ENV: &str = "GOOGLE_OAUTH_ACCESS_TOKEN";

// ============================================================================
// SERVER CONSTANTS
// ============================================================================

/// Name reported in the MCP `initialize` response
pub const DEFAULT_SERVER_NAME: &str = "Google Analytics MCP Server";

/// Version reported in the MCP `initialize` response
pub const DEFAULT_SERVER_VERSION: &str = "1.0.0";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "GAM_LOG";

// ============================================================================
// GOOGLE ANALYTICS API CONSTANTS
// ============================================================================

/// Analytics Admin API base URL
pub const DEFAULT_ADMIN_BASE_URL: &str = "https://analyticsadmin.googleapis.com";

/// Analytics Data API base URL
pub const DEFAULT_DATA_BASE_URL: &str = "https://analyticsdata.googleapis.com";

/// Default HTTP request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Page size requested from paginated Admin API list methods
pub const DEFAULT_PAGE_SIZE: u32 = 200;

/// Header naming the project billed for quota
pub const QUOTA_PROJECT_HEADER: &str = "x-goog-user-project";

/// User agent sent with API requests
pub const USER_AGENT: &str = concat!("google-analytics-mcp/", env!("CARGO_PKG_VERSION"));
