//! # Google Analytics MCP Domain
//!
//! Core contracts shared by the server and infrastructure layers.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`error`] | Domain error type and `Result` alias |
//! | [`ports`] | Provider traits implemented by infrastructure adapters |
//! | [`value_objects`] | Validated request types (property IDs, date ranges, reports) |
//! | [`constants`] | Domain-level constants |
//!
//! This crate has no knowledge of the MCP protocol or of HTTP.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::AnalyticsProvider;
pub use value_objects::{DateRange, PropertyId, PropertyIdInput, RealtimeReportRequest, ReportRequest};
