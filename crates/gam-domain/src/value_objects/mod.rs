//! Domain value objects
//!
//! Immutable, validated inputs passed from the tool layer to providers.

pub mod property;
pub mod report;

pub use property::{PropertyId, PropertyIdInput};
pub use report::{DateRange, RealtimeReportRequest, ReportRequest};
