//! Analytics Provider Port
//!
//! Port for backends that answer Google Analytics account, property and
//! reporting queries. Results are returned as JSON values in the upstream
//! API's shape so the tool layer can serialize them unchanged.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::value_objects::{PropertyId, RealtimeReportRequest, ReportRequest};

/// Analytics backend contract
///
/// Implementations perform network I/O and may take arbitrarily long;
/// callers apply no deadline of their own.
#[async_trait]
pub trait AnalyticsProvider: Send + Sync {
    /// Summaries of every account and property the caller can access
    async fn account_summaries(&self) -> Result<Value>;

    /// Google Ads links configured on a property
    async fn google_ads_links(&self, property: &PropertyId) -> Result<Value>;

    /// Full property resource
    async fn property_details(&self, property: &PropertyId) -> Result<Value>;

    /// Reporting data annotations attached to a property
    async fn property_annotations(&self, property: &PropertyId) -> Result<Value>;

    /// Custom dimensions and custom metrics defined on a property
    ///
    /// Returns `{"custom_dimensions": [...], "custom_metrics": [...]}`.
    async fn custom_dimensions_and_metrics(&self, property: &PropertyId) -> Result<Value>;

    /// Run a standard Data API report
    async fn run_report(&self, request: &ReportRequest) -> Result<Value>;

    /// Run a realtime Data API report
    async fn run_realtime_report(&self, request: &RealtimeReportRequest) -> Result<Value>;

    /// Provider name used in log records
    fn provider_name(&self) -> &str;
}

/// Shared handle to an analytics provider
pub type SharedAnalyticsProvider = Arc<dyn AnalyticsProvider>;
