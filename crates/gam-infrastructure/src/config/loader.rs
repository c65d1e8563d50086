//! Configuration loader
//!
//! Handles loading configuration from various sources including
//! TOML files, environment variables, and default values.

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use gam_domain::error::{Error, Result};
use reqwest::Url;

use crate::config::{AnalyticsConfig, AppConfig, LoggingConfig, ServerConfig};
use crate::constants::{
    ACCESS_TOKEN_FALLBACK_ENV, CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR,
    DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::parse_log_level;

/// Where the file layer of a loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// A TOML file was merged
    File(PathBuf),
    /// An explicit path was given but does not exist
    Missing(PathBuf),
    /// No file was found; defaults and environment only
    Defaults,
}

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment variable holding a bearer token when none is configured
    token_fallback_env: Option<String>,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            token_fallback_env: Some(ACCESS_TOKEN_FALLBACK_ENV.to_string()),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Disable the access token environment fallback
    pub fn without_token_fallback(mut self) -> Self {
        self.token_fallback_env = None;
        self
    }

    /// Load configuration from all sources
    pub fn load(&self) -> Result<AppConfig> {
        self.load_with_source().map(|(config, _)| config)
    }

    /// Load configuration and report which file, if any, was merged
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix (e.g., `GAM_ANALYTICS__ACCESS_TOKEN`)
    ///
    /// Nothing is logged here since this runs before the subscriber is
    /// installed; pass the source to [`log_config_loaded`](crate::logging::log_config_loaded).
    pub fn load_with_source(&self) -> Result<(AppConfig, ConfigSource)> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        let source = match &self.config_path {
            Some(path) if path.exists() => ConfigSource::File(path.clone()),
            Some(path) => ConfigSource::Missing(path.clone()),
            None => Self::find_default_config_path()
                .map_or(ConfigSource::Defaults, ConfigSource::File),
        };
        if let ConfigSource::File(path) = &source {
            figment = figment.merge(Toml::file(path));
        }

        // Double underscore separates nested keys so snake_case fields survive
        figment = figment
            .merge(Env::prefixed(&format!("{CONFIG_ENV_PREFIX}_")).split(CONFIG_ENV_SEPARATOR));

        let mut app_config: AppConfig = figment.extract().map_err(|e| {
            Error::configuration(format!("Failed to extract configuration: {e}"))
        })?;

        if app_config.analytics.access_token.is_none() {
            app_config.analytics.access_token = self
                .token_fallback_env
                .as_deref()
                .and_then(|var| env::var(var).ok())
                .filter(|token| !token.trim().is_empty());
        }

        validate_app_config(&app_config)?;

        Ok((app_config, source))
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
            dirs::home_dir().map(|d| {
                d.join(format!(".{DEFAULT_CONFIG_DIR}"))
                    .join(DEFAULT_CONFIG_FILENAME)
            }),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_server_config(&config.server)?;
    parse_log_level(&config.logging.level)?;
    validate_analytics_config(&config.analytics)?;
    Ok(())
}

fn validate_server_config(config: &ServerConfig) -> Result<()> {
    if config.name.trim().is_empty() {
        return Err(Error::configuration("Server name cannot be empty"));
    }
    if config.version.trim().is_empty() {
        return Err(Error::configuration("Server version cannot be empty"));
    }
    Ok(())
}

fn validate_analytics_config(config: &AnalyticsConfig) -> Result<()> {
    if config.timeout_secs == 0 {
        return Err(Error::configuration("Request timeout cannot be 0"));
    }
    if config.page_size == 0 {
        return Err(Error::configuration("Page size cannot be 0"));
    }
    validate_base_url("admin_base_url", &config.admin_base_url)?;
    validate_base_url("data_base_url", &config.data_base_url)?;
    Ok(())
}

fn validate_base_url(field: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).config_context(format!("Invalid {field} '{value}'"))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(Error::configuration(format!(
            "Invalid {field} '{value}': unsupported scheme {scheme}"
        ))),
    }
}

/// Configuration builder for programmatic configuration
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Set server configuration
    pub fn with_server(mut self, server: ServerConfig) -> Self {
        self.config.server = server;
        self
    }

    /// Set logging configuration
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Set analytics configuration
    pub fn with_analytics(mut self, analytics: AnalyticsConfig) -> Self {
        self.config.analytics = analytics;
        self
    }

    /// Build the configuration
    pub fn build(self) -> AppConfig {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
