//! Structured logging with tracing
//!
//! Configures the global `tracing` subscriber. All output goes to stderr,
//! since stdout carries the MCP protocol stream.

use gam_domain::error::{Error, Result};

pub use crate::config::LoggingConfig;
use crate::config::ConfigSource;
use crate::constants::LOG_FILTER_ENV;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with the provided configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_directive(level)));

    let file_appender = config.file_output.as_ref().map(|path| {
        tracing_appender::rolling::daily(
            path.parent().unwrap_or_else(|| std::path::Path::new(".")),
            path.file_name()
                .unwrap_or_else(|| std::ffi::OsStr::new("gam.log")),
        )
    });

    // Layer types differ between json and text, so each branch initializes separately
    let registry = Registry::default().with(filter);
    let installed = if config.json_format {
        let stderr = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true);
        match file_appender {
            Some(appender) => {
                let file = fmt::layer()
                    .json()
                    .with_writer(appender)
                    .with_ansi(false)
                    .with_target(true);
                registry.with(stderr).with(file).try_init()
            }
            None => registry.with(stderr).try_init(),
        }
    } else {
        let stderr = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_target(true);
        match file_appender {
            Some(appender) => {
                let file = fmt::layer()
                    .with_writer(appender)
                    .with_ansi(false)
                    .with_target(true);
                registry.with(stderr).with(file).try_init()
            }
            None => registry.with(stderr).try_init(),
        }
    };
    installed
        .map_err(|e| Error::configuration(format!("Failed to install log subscriber: {e}")))?;

    info!("Logging initialized with level: {}", level);
    Ok(())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Canonical `EnvFilter` directive for a parsed level
///
/// Aliases such as `warning` would otherwise be read as a target name.
pub fn level_directive(level: Level) -> String {
    level.as_str().to_ascii_lowercase()
}

/// Log which configuration file was used
pub fn log_config_loaded(source: &ConfigSource) {
    match source {
        ConfigSource::File(path) => info!("Configuration loaded from {}", path.display()),
        ConfigSource::Missing(path) => {
            warn!("Configuration file not found: {}", path.display());
        }
        ConfigSource::Defaults => info!("No configuration file found; using defaults"),
    }
}
