//! Tool argument types
//!
//! Deserialized from `tools/call` arguments; their `JsonSchema` derivations
//! become the tools' advertised input schemas.

use rmcp::model::JsonObject;
use schemars::JsonSchema;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use gam_domain::error::{Error, Result};
use gam_domain::value_objects::{
    DateRange, PropertyId, PropertyIdInput, RealtimeReportRequest, ReportRequest,
};

/// Decode raw call arguments into a typed argument struct
pub fn parse_args<T: DeserializeOwned>(arguments: JsonObject) -> Result<T> {
    serde_json::from_value(Value::Object(arguments))
        .map_err(|e| Error::validation(format!("invalid arguments: {e}")))
}

/// Arguments for tools scoped to a single property
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PropertyArgs {
    /// The Google Analytics property ID. Accepted formats: a number, a digit
    /// string like "123456789", or a resource name like "properties/123456789".
    pub property_id: PropertyIdInput,
}

impl PropertyArgs {
    /// Normalized property resource name
    pub fn property(&self) -> Result<PropertyId> {
        PropertyId::parse(&self.property_id)
    }
}

/// Arguments for the `run_report` tool
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RunReportArgs {
    /// The Google Analytics property ID.
    pub property_id: PropertyIdInput,
    /// Date ranges to report on.
    pub date_ranges: Vec<DateRange>,
    /// Dimension API names.
    #[serde(default)]
    pub dimensions: Vec<String>,
    /// Metric API names.
    pub metrics: Vec<String>,
    /// Data API `FilterExpression` applied to dimensions.
    #[serde(default)]
    pub dimension_filter: Option<Value>,
    /// Data API `FilterExpression` applied to metrics.
    #[serde(default)]
    pub metric_filter: Option<Value>,
    /// Data API `OrderBy` objects.
    #[serde(default)]
    pub order_bys: Vec<Value>,
    /// Maximum number of rows to return.
    #[serde(default)]
    pub limit: Option<u64>,
    /// Row offset for pagination.
    #[serde(default)]
    pub offset: Option<u64>,
    /// ISO 4217 currency code, e.g. "USD".
    #[serde(default)]
    pub currency_code: Option<String>,
    /// Whether to return the property's quota state.
    #[serde(default)]
    pub return_property_quota: bool,
}

impl RunReportArgs {
    /// Convert into a validated domain request
    pub fn into_request(self) -> Result<ReportRequest> {
        let request = ReportRequest {
            property: PropertyId::parse(&self.property_id)?,
            date_ranges: self.date_ranges,
            dimensions: self.dimensions,
            metrics: self.metrics,
            dimension_filter: self.dimension_filter,
            metric_filter: self.metric_filter,
            order_bys: self.order_bys,
            limit: self.limit,
            offset: self.offset,
            currency_code: self.currency_code,
            return_property_quota: self.return_property_quota,
        };
        request.validate()?;
        Ok(request)
    }
}

/// Arguments for the `run_realtime_report` tool
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RunRealtimeReportArgs {
    /// The Google Analytics property ID.
    pub property_id: PropertyIdInput,
    /// Realtime dimension API names.
    #[serde(default)]
    pub dimensions: Vec<String>,
    /// Realtime metric API names.
    pub metrics: Vec<String>,
    /// Data API `FilterExpression` applied to dimensions.
    #[serde(default)]
    pub dimension_filter: Option<Value>,
    /// Data API `FilterExpression` applied to metrics.
    #[serde(default)]
    pub metric_filter: Option<Value>,
    /// Data API `OrderBy` objects.
    #[serde(default)]
    pub order_bys: Vec<Value>,
    /// Maximum number of rows to return.
    #[serde(default)]
    pub limit: Option<u64>,
    /// Whether to return the property's realtime quota state.
    #[serde(default)]
    pub return_property_quota: bool,
}

impl RunRealtimeReportArgs {
    /// Convert into a validated domain request
    pub fn into_request(self) -> Result<RealtimeReportRequest> {
        let request = RealtimeReportRequest {
            property: PropertyId::parse(&self.property_id)?,
            dimensions: self.dimensions,
            metrics: self.metrics,
            dimension_filter: self.dimension_filter,
            metric_filter: self.metric_filter,
            order_bys: self.order_bys,
            limit: self.limit,
            return_property_quota: self.return_property_quota,
        };
        request.validate()?;
        Ok(request)
    }
}
