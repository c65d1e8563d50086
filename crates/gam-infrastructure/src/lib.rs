//! # Google Analytics MCP Infrastructure
//!
//! Cross-cutting technical concerns for the server:
//!
//! - [`config`]: layered configuration (defaults, TOML file, `GAM_` environment)
//! - [`logging`]: `tracing` subscriber setup
//! - [`adapters`]: implementations of domain ports over the Google Analytics REST APIs
//! - [`error_ext`]: context helpers converting foreign errors into domain errors

pub mod adapters;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use adapters::GoogleAnalyticsProvider;
pub use config::{AppConfig, ConfigLoader};
