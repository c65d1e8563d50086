//! Mock analytics provider recording every call

use std::sync::Mutex;

use async_trait::async_trait;
use gam_domain::error::{Error, Result};
use gam_domain::ports::AnalyticsProvider;
use gam_domain::value_objects::{PropertyId, RealtimeReportRequest, ReportRequest};
use serde_json::{Value, json};

/// Provider returning canned JSON, or a fixed error when configured to fail
#[derive(Default)]
pub struct MockAnalyticsProvider {
    failure: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl MockAnalyticsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with an upstream API error carrying `message`
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Recorded calls as `method:argument`
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("lock").clone()
    }

    fn respond(&self, call: String, value: Value) -> Result<Value> {
        self.calls.lock().expect("lock").push(call);
        match &self.failure {
            Some(message) => Err(Error::api(500, message.clone())),
            None => Ok(value),
        }
    }
}

#[async_trait]
impl AnalyticsProvider for MockAnalyticsProvider {
    async fn account_summaries(&self) -> Result<Value> {
        self.respond(
            "account_summaries".to_string(),
            json!([{
                "account": "accounts/100",
                "displayName": "Demo Account",
                "propertySummaries": [{"property": "properties/1234", "displayName": "Shop"}]
            }]),
        )
    }

    async fn google_ads_links(&self, property: &PropertyId) -> Result<Value> {
        self.respond(
            format!("google_ads_links:{property}"),
            json!([{"name": format!("{property}/googleAdsLinks/1"), "customerId": "555"}]),
        )
    }

    async fn property_details(&self, property: &PropertyId) -> Result<Value> {
        self.respond(
            format!("property_details:{property}"),
            json!({"name": property.resource_name(), "displayName": "Shop", "timeZone": "Europe/Paris"}),
        )
    }

    async fn property_annotations(&self, property: &PropertyId) -> Result<Value> {
        self.respond(
            format!("property_annotations:{property}"),
            json!([{"title": "Spring sale", "annotationDate": {"year": 2024, "month": 3, "day": 1}}]),
        )
    }

    async fn custom_dimensions_and_metrics(&self, property: &PropertyId) -> Result<Value> {
        self.respond(
            format!("custom_dimensions_and_metrics:{property}"),
            json!({"custom_dimensions": [], "custom_metrics": []}),
        )
    }

    async fn run_report(&self, request: &ReportRequest) -> Result<Value> {
        self.respond(
            format!("run_report:{}", request.property),
            json!({
                "dimensionHeaders": request.dimensions.iter().map(|d| json!({"name": d})).collect::<Vec<_>>(),
                "metricHeaders": request.metrics.iter().map(|m| json!({"name": m, "type": "TYPE_INTEGER"})).collect::<Vec<_>>(),
                "rowCount": 0
            }),
        )
    }

    async fn run_realtime_report(&self, request: &RealtimeReportRequest) -> Result<Value> {
        self.respond(
            format!("run_realtime_report:{}", request.property),
            json!({"rows": [{"metricValues": [{"value": "3"}]}], "rowCount": 1}),
        )
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}
