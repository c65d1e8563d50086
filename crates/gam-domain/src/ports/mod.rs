//! Domain ports
//!
//! Traits implemented by infrastructure adapters. The server layer depends
//! only on these contracts.

pub mod analytics;

pub use analytics::{AnalyticsProvider, SharedAnalyticsProvider};
