//! Report Request Value Objects
//!
//! Validated inputs for the Data API `runReport` and `runRealtimeReport`
//! methods. Filters and orderings are kept as opaque JSON objects in the
//! Data API's own shape; only structural checks happen here.

use chrono::{Days, Local, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{
    DATE_DAYS_AGO_SUFFIX, DATE_FORMAT, DATE_TODAY, DATE_YESTERDAY, INVALID_DATE_RANGE,
};
use crate::error::{Error, Result};
use crate::value_objects::PropertyId;

/// A contiguous set of days for a standard report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DateRange {
    /// Inclusive start date: `YYYY-MM-DD`, `today`, `yesterday`, or `NdaysAgo`
    pub start_date: String,
    /// Inclusive end date: `YYYY-MM-DD`, `today`, `yesterday`, or `NdaysAgo`
    pub end_date: String,
    /// Optional name used to label rows for this range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl DateRange {
    /// Create a date range without a name
    pub fn new<S: Into<String>, E: Into<String>>(start_date: S, end_date: E) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
            name: None,
        }
    }

    /// Check both bounds and their ordering
    pub fn validate(&self) -> Result<()> {
        self.validate_on(Local::now().date_naive())
    }

    /// Check both bounds and their ordering, resolving relative dates against `today`
    pub fn validate_on(&self, today: NaiveDate) -> Result<()> {
        let start = resolve_date(&self.start_date, today)?;
        let end = resolve_date(&self.end_date, today)?;
        if start > end {
            return Err(Error::validation(INVALID_DATE_RANGE));
        }
        Ok(())
    }
}

/// Resolve one date bound to a calendar day
fn resolve_date(raw: &str, today: NaiveDate) -> Result<NaiveDate> {
    let value = raw.trim();
    let resolved = match value {
        DATE_TODAY => Some(today),
        DATE_YESTERDAY => today.checked_sub_days(Days::new(1)),
        _ => match value.strip_suffix(DATE_DAYS_AGO_SUFFIX) {
            Some(n) if !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()) => n
                .parse::<u64>()
                .ok()
                .and_then(|n| today.checked_sub_days(Days::new(n))),
            Some(_) => None,
            None => NaiveDate::parse_from_str(value, DATE_FORMAT).ok(),
        },
    };
    resolved.ok_or_else(|| {
        Error::validation(format!(
            "invalid date '{raw}': expected YYYY-MM-DD, today, yesterday, or NdaysAgo"
        ))
    })
}

/// Request for a standard (historical) report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRequest {
    /// Property to report on
    pub property: PropertyId,
    /// Date ranges to cover (at least one)
    pub date_ranges: Vec<DateRange>,
    /// Dimension API names
    pub dimensions: Vec<String>,
    /// Metric API names (at least one)
    pub metrics: Vec<String>,
    /// `FilterExpression` applied to dimensions
    pub dimension_filter: Option<Value>,
    /// `FilterExpression` applied to metrics
    pub metric_filter: Option<Value>,
    /// `OrderBy` objects
    pub order_bys: Vec<Value>,
    /// Maximum number of rows
    pub limit: Option<u64>,
    /// Row offset for pagination
    pub offset: Option<u64>,
    /// ISO 4217 currency code for currency metrics
    pub currency_code: Option<String>,
    /// Whether to include the property quota state in the response
    pub return_property_quota: bool,
}

impl ReportRequest {
    /// Create a request with the required fields only
    pub fn new(property: PropertyId, date_ranges: Vec<DateRange>, metrics: Vec<String>) -> Self {
        Self {
            property,
            date_ranges,
            dimensions: Vec::new(),
            metrics,
            dimension_filter: None,
            metric_filter: None,
            order_bys: Vec::new(),
            limit: None,
            offset: None,
            currency_code: None,
            return_property_quota: false,
        }
    }

    /// Validate the request before it is sent upstream
    pub fn validate(&self) -> Result<()> {
        if self.date_ranges.is_empty() {
            return Err(Error::validation("at least one date range is required"));
        }
        for range in &self.date_ranges {
            range.validate()?;
        }
        validate_common(
            &self.dimensions,
            &self.metrics,
            self.dimension_filter.as_ref(),
            self.metric_filter.as_ref(),
            &self.order_bys,
            self.limit,
        )?;
        if let Some(code) = &self.currency_code {
            if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
                return Err(Error::validation(format!(
                    "invalid currency code '{code}': expected an ISO 4217 code"
                )));
            }
        }
        Ok(())
    }
}

/// Request for a realtime report (last 30 minutes of activity)
#[derive(Debug, Clone, PartialEq)]
pub struct RealtimeReportRequest {
    /// Property to report on
    pub property: PropertyId,
    /// Realtime dimension API names
    pub dimensions: Vec<String>,
    /// Realtime metric API names (at least one)
    pub metrics: Vec<String>,
    /// `FilterExpression` applied to dimensions
    pub dimension_filter: Option<Value>,
    /// `FilterExpression` applied to metrics
    pub metric_filter: Option<Value>,
    /// `OrderBy` objects
    pub order_bys: Vec<Value>,
    /// Maximum number of rows
    pub limit: Option<u64>,
    /// Whether to include the property quota state in the response
    pub return_property_quota: bool,
}

impl RealtimeReportRequest {
    /// Create a request with the required fields only
    pub fn new(property: PropertyId, metrics: Vec<String>) -> Self {
        Self {
            property,
            dimensions: Vec::new(),
            metrics,
            dimension_filter: None,
            metric_filter: None,
            order_bys: Vec::new(),
            limit: None,
            return_property_quota: false,
        }
    }

    /// Validate the request before it is sent upstream
    pub fn validate(&self) -> Result<()> {
        validate_common(
            &self.dimensions,
            &self.metrics,
            self.dimension_filter.as_ref(),
            self.metric_filter.as_ref(),
            &self.order_bys,
            self.limit,
        )
    }
}

fn validate_common(
    dimensions: &[String],
    metrics: &[String],
    dimension_filter: Option<&Value>,
    metric_filter: Option<&Value>,
    order_bys: &[Value],
    limit: Option<u64>,
) -> Result<()> {
    if metrics.is_empty() {
        return Err(Error::validation("at least one metric is required"));
    }
    if dimensions.iter().chain(metrics).any(|name| name.trim().is_empty()) {
        return Err(Error::validation(
            "dimension and metric names must not be empty",
        ));
    }
    for (label, filter) in [("dimension_filter", dimension_filter), ("metric_filter", metric_filter)]
    {
        if let Some(filter) = filter {
            if !filter.is_object() {
                return Err(Error::validation(format!("{label} must be a JSON object")));
            }
        }
    }
    if order_bys.iter().any(|order| !order.is_object()) {
        return Err(Error::validation("each order_bys entry must be a JSON object"));
    }
    if limit == Some(0) {
        return Err(Error::validation("limit must be greater than zero"));
    }
    Ok(())
}
