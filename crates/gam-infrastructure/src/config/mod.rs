//! Configuration management
//!
//! Typed configuration sections and the layered [`ConfigLoader`].

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader, ConfigSource};
pub use types::{AnalyticsConfig, AppConfig, LoggingConfig, ServerConfig};
