//! Long-form descriptions for the reporting tools
//!
//! These are shown to MCP clients and steer how a model builds report
//! arguments, so they carry examples in the Data API's JSON shape.

const API_SCHEMA_URL: &str =
    "https://developers.google.com/analytics/devguides/reporting/data/v1/api-schema";
const REALTIME_SCHEMA_URL: &str =
    "https://developers.google.com/analytics/devguides/reporting/data/v1/realtime-api-schema";

const FILTER_HINTS: &str = r#"
Filters use the Data API `FilterExpression` shape. Examples:

  Match a single dimension value:
    {"filter": {"fieldName": "eventName", "stringFilter": {"matchType": "EXACT", "value": "purchase"}}}

  Match any of several values:
    {"filter": {"fieldName": "country", "inListFilter": {"values": ["France", "Germany"]}}}

  Combine conditions:
    {"andGroup": {"expressions": [
      {"filter": {"fieldName": "deviceCategory", "stringFilter": {"value": "mobile"}}},
      {"notExpression": {"filter": {"fieldName": "country", "stringFilter": {"value": "Canada"}}}}
    ]}}

  Numeric metric filter:
    {"filter": {"fieldName": "sessions", "numericFilter": {"operation": "GREATER_THAN", "value": {"int64Value": "100"}}}}
"#;

const ORDER_BY_HINTS: &str = r#"
Orderings use the Data API `OrderBy` shape. Examples:

  {"metric": {"metricName": "activeUsers"}, "desc": true}
  {"dimension": {"dimensionName": "date", "orderType": "ALPHANUMERIC"}}
"#;

/// Description of the `run_report` tool
pub fn run_report_description() -> String {
    format!(
        r#"Runs a Google Analytics Data API report.

Use `get_custom_dimensions_and_metrics` to discover a property's custom
fields. Standard dimension and metric names are listed at {API_SCHEMA_URL}.

Arguments:
  property_id: numeric property ID or "properties/<id>".
  date_ranges: one or more ranges, each with start_date and end_date in
    YYYY-MM-DD, "today", "yesterday", or "NdaysAgo" form, e.g.
    [{{"start_date": "30daysAgo", "end_date": "yesterday", "name": "last_30"}}].
  dimensions: dimension API names, e.g. ["country", "deviceCategory"].
  metrics: metric API names (at least one), e.g. ["activeUsers", "sessions"].
  dimension_filter / metric_filter: optional FilterExpression objects.
  order_bys: optional list of OrderBy objects.
  limit / offset: optional row pagination.
  currency_code: optional ISO 4217 code for currency metrics.
  return_property_quota: include the property's quota state.
{FILTER_HINTS}{ORDER_BY_HINTS}"#
    )
}

/// Description of the `run_realtime_report` tool
pub fn run_realtime_report_description() -> String {
    format!(
        r#"Runs a Google Analytics Data API realtime report covering roughly the
last 30 minutes of activity.

Realtime reports accept a restricted set of dimensions and metrics, listed at
{REALTIME_SCHEMA_URL}. Custom user-scoped dimensions are supported; event-scoped
custom dimensions are not.

Arguments:
  property_id: numeric property ID or "properties/<id>".
  dimensions: realtime dimension API names, e.g. ["country", "unifiedScreenName"].
  metrics: realtime metric API names (at least one), e.g. ["activeUsers"].
  dimension_filter / metric_filter: optional FilterExpression objects.
  order_bys: optional list of OrderBy objects.
  limit: optional maximum number of rows.
  return_property_quota: include the property's realtime quota state.
{FILTER_HINTS}{ORDER_BY_HINTS}"#
    )
}
