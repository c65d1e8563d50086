//! MCP Tool Handlers
//!
//! Thin wrappers translating MCP tool calls into analytics provider calls.

pub mod account;
pub mod property;
pub mod reporting;

use std::sync::Arc;

use gam_domain::ports::SharedAnalyticsProvider;

use crate::tools::AnalyticsTool;

pub use account::GetAccountSummariesTool;
pub use property::{PropertyQuery, PropertyTool};
pub use reporting::{RunRealtimeReportTool, RunReportTool};

/// The server's tool set, in the order it is advertised
pub fn default_tools(provider: &SharedAnalyticsProvider) -> Vec<Arc<dyn AnalyticsTool>> {
    vec![
        Arc::new(GetAccountSummariesTool::new(Arc::clone(provider))),
        Arc::new(PropertyTool::new(PropertyQuery::GoogleAdsLinks, Arc::clone(provider))),
        Arc::new(PropertyTool::new(PropertyQuery::Details, Arc::clone(provider))),
        Arc::new(PropertyTool::new(PropertyQuery::Annotations, Arc::clone(provider))),
        Arc::new(PropertyTool::new(
            PropertyQuery::CustomDimensionsAndMetrics,
            Arc::clone(provider),
        )),
        Arc::new(RunReportTool::new(Arc::clone(provider))),
        Arc::new(RunRealtimeReportTool::new(Arc::clone(provider))),
    ]
}
