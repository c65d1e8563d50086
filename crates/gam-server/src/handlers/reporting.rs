//! Reporting Tool Handlers
//!
//! Standard and realtime Data API reports.

use async_trait::async_trait;
use rmcp::model::JsonObject;
use serde_json::Value;

use gam_domain::error::Result;
use gam_domain::ports::SharedAnalyticsProvider;

use crate::args::{RunRealtimeReportArgs, RunReportArgs, parse_args};
use crate::constants::{TOOL_RUN_REALTIME_REPORT, TOOL_RUN_REPORT};
use crate::tools::descriptions::{run_realtime_report_description, run_report_description};
use crate::tools::{AnalyticsTool, RegistryError, schema_for_args};

/// Handler for standard reports
pub struct RunReportTool {
    provider: SharedAnalyticsProvider,
}

impl RunReportTool {
    /// Create a new run_report handler
    pub fn new(provider: SharedAnalyticsProvider) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl AnalyticsTool for RunReportTool {
    fn name(&self) -> &'static str {
        TOOL_RUN_REPORT
    }

    fn description(&self) -> String {
        run_report_description()
    }

    fn input_schema(&self) -> std::result::Result<JsonObject, RegistryError> {
        schema_for_args::<RunReportArgs>(self.name())
    }

    async fn invoke(&self, arguments: JsonObject) -> Result<Value> {
        let request = parse_args::<RunReportArgs>(arguments)?.into_request()?;
        self.provider.run_report(&request).await
    }
}

/// Handler for realtime reports
pub struct RunRealtimeReportTool {
    provider: SharedAnalyticsProvider,
}

impl RunRealtimeReportTool {
    /// Create a new run_realtime_report handler
    pub fn new(provider: SharedAnalyticsProvider) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl AnalyticsTool for RunRealtimeReportTool {
    fn name(&self) -> &'static str {
        TOOL_RUN_REALTIME_REPORT
    }

    fn description(&self) -> String {
        run_realtime_report_description()
    }

    fn input_schema(&self) -> std::result::Result<JsonObject, RegistryError> {
        schema_for_args::<RunRealtimeReportArgs>(self.name())
    }

    async fn invoke(&self, arguments: JsonObject) -> Result<Value> {
        let request = parse_args::<RunRealtimeReportArgs>(arguments)?.into_request()?;
        self.provider.run_realtime_report(&request).await
    }
}
