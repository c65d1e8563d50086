//! Google Analytics REST Provider
//!
//! Implements the `AnalyticsProvider` port over the Analytics Admin API
//! (v1beta, v1alpha for annotations) and the Analytics Data API (v1beta).
//! Authentication uses a pre-minted OAuth bearer token.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde_json::{Map, Value, json};
use tracing::debug;

use gam_domain::error::{Error, Result};
use gam_domain::ports::AnalyticsProvider;
use gam_domain::value_objects::{DateRange, PropertyId, RealtimeReportRequest, ReportRequest};

use crate::adapters::http_response::HttpResponseUtils;
use crate::config::AnalyticsConfig;
use crate::constants::{ACCESS_TOKEN_FALLBACK_ENV, QUOTA_PROJECT_HEADER, USER_AGENT};
use crate::error_ext::ErrorContext;

const ADMIN_API: &str = "Admin API";
const DATA_API: &str = "Data API";

/// Google Analytics provider
///
/// Receives its HTTP client via constructor injection.
///
/// ## Example
///
/// ```rust,no_run
/// use gam_infrastructure::GoogleAnalyticsProvider;
/// use gam_infrastructure::config::AnalyticsConfig;
///
/// let config = AnalyticsConfig {
///     access_token: Some("ya29.token".to_string()),
///     ..AnalyticsConfig::default()
/// };
/// let provider = GoogleAnalyticsProvider::from_config(&config).unwrap();
/// ```
pub struct GoogleAnalyticsProvider {
    access_token: Option<String>,
    quota_project: Option<String>,
    admin_base_url: String,
    data_base_url: String,
    page_size: u32,
    timeout: Duration,
    http_client: Client,
}

impl GoogleAnalyticsProvider {
    /// Create a provider using an existing HTTP client
    pub fn new(config: &AnalyticsConfig, http_client: Client) -> Self {
        Self {
            access_token: config.access_token.clone(),
            quota_project: config.quota_project.clone(),
            admin_base_url: config.admin_base_url.trim_end_matches('/').to_string(),
            data_base_url: config.data_base_url.trim_end_matches('/').to_string(),
            page_size: config.page_size,
            timeout: config.timeout(),
            http_client,
        }
    }

    /// Create a provider with a freshly built HTTP client
    pub fn from_config(config: &AnalyticsConfig) -> Result<Self> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .build()
            .network_context("Failed to build HTTP client")?;
        Ok(Self::new(config, http_client))
    }

    /// Whether a bearer token is available
    pub fn has_credentials(&self) -> bool {
        self.access_token.is_some()
    }

    fn admin_url(&self, version: &str, path: &str) -> Result<Url> {
        parse_url(&format!("{}/{version}/{path}", self.admin_base_url))
    }

    fn data_url(&self, path: &str) -> Result<Url> {
        parse_url(&format!("{}/v1beta/{path}", self.data_base_url))
    }

    fn request(&self, method: Method, url: Url) -> Result<RequestBuilder> {
        let token = self.access_token.as_deref().ok_or_else(|| {
            Error::authentication(format!(
                "no access token configured; set analytics.access_token, \
                 GAM_ANALYTICS__ACCESS_TOKEN or {ACCESS_TOKEN_FALLBACK_ENV}"
            ))
        })?;
        let mut builder = self
            .http_client
            .request(method, url)
            .bearer_auth(token)
            .timeout(self.timeout);
        if let Some(project) = &self.quota_project {
            builder = builder.header(QUOTA_PROJECT_HEADER, project);
        }
        Ok(builder)
    }

    async fn send(&self, builder: RequestBuilder, api_name: &str) -> Result<Value> {
        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::network(format!("{api_name} request timed out after {:?}", self.timeout))
            } else {
                Error::network_with_source(format!("{api_name} request failed: {e}"), e)
            }
        })?;
        HttpResponseUtils::check_and_parse(response, api_name).await
    }

    async fn get_json(&self, url: Url, api_name: &str) -> Result<Value> {
        debug!(url = %url, "GET");
        let builder = self.request(Method::GET, url)?;
        self.send(builder, api_name).await
    }

    async fn post_json(&self, url: Url, body: &Value, api_name: &str) -> Result<Value> {
        debug!(url = %url, "POST");
        let builder = self.request(Method::POST, url)?.json(body);
        self.send(builder, api_name).await
    }

    /// Follow `nextPageToken` until exhausted, concatenating `collection` arrays
    async fn list_all(&self, base: Url, collection: &str) -> Result<Value> {
        let mut items = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let mut url = base.clone();
            {
                let mut query = url.query_pairs_mut();
                query.append_pair("pageSize", &self.page_size.to_string());
                if let Some(token) = &page_token {
                    query.append_pair("pageToken", token);
                }
            }
            let page = self.get_json(url, ADMIN_API).await?;
            if let Some(Value::Array(batch)) = page.get(collection) {
                items.extend(batch.iter().cloned());
            }
            page_token = page
                .get("nextPageToken")
                .and_then(Value::as_str)
                .filter(|token| !token.is_empty())
                .map(str::to_string);
            if page_token.is_none() {
                return Ok(Value::Array(items));
            }
        }
    }
}

fn parse_url(raw: &str) -> Result<Url> {
    Url::parse(raw).config_context(format!("Invalid API URL '{raw}'"))
}

/// Keep only metadata entries flagged as custom definitions
fn custom_definitions(metadata: &Value, key: &str) -> Value {
    let entries = metadata
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter(|item| item.get("customDefinition").and_then(Value::as_bool) == Some(true))
                .cloned()
                .collect()
        })
        .unwrap_or_default();
    Value::Array(entries)
}

fn date_range_body(range: &DateRange) -> Value {
    let mut body = json!({
        "startDate": range.start_date,
        "endDate": range.end_date,
    });
    if let (Some(name), Some(map)) = (&range.name, body.as_object_mut()) {
        map.insert("name".to_string(), Value::String(name.clone()));
    }
    body
}

fn named(names: &[String]) -> Value {
    Value::Array(names.iter().map(|name| json!({ "name": name })).collect())
}

/// Fields shared by `runReport` and `runRealtimeReport`
fn common_report_body(
    dimensions: &[String],
    metrics: &[String],
    dimension_filter: Option<&Value>,
    metric_filter: Option<&Value>,
    order_bys: &[Value],
    limit: Option<u64>,
    return_property_quota: bool,
) -> Map<String, Value> {
    let mut body = Map::new();
    body.insert("dimensions".to_string(), named(dimensions));
    body.insert("metrics".to_string(), named(metrics));
    if let Some(filter) = dimension_filter {
        body.insert("dimensionFilter".to_string(), filter.clone());
    }
    if let Some(filter) = metric_filter {
        body.insert("metricFilter".to_string(), filter.clone());
    }
    if !order_bys.is_empty() {
        body.insert("orderBys".to_string(), Value::Array(order_bys.to_vec()));
    }
    // int64 fields travel as strings in the proto JSON mapping
    if let Some(limit) = limit {
        body.insert("limit".to_string(), Value::String(limit.to_string()));
    }
    body.insert(
        "returnPropertyQuota".to_string(),
        Value::Bool(return_property_quota),
    );
    body
}

/// Request body for `properties/{id}:runReport`
pub fn report_body(request: &ReportRequest) -> Value {
    let mut body = common_report_body(
        &request.dimensions,
        &request.metrics,
        request.dimension_filter.as_ref(),
        request.metric_filter.as_ref(),
        &request.order_bys,
        request.limit,
        request.return_property_quota,
    );
    body.insert(
        "dateRanges".to_string(),
        Value::Array(request.date_ranges.iter().map(date_range_body).collect()),
    );
    if let Some(offset) = request.offset {
        body.insert("offset".to_string(), Value::String(offset.to_string()));
    }
    if let Some(code) = &request.currency_code {
        body.insert("currencyCode".to_string(), Value::String(code.to_uppercase()));
    }
    Value::Object(body)
}

/// Request body for `properties/{id}:runRealtimeReport`
pub fn realtime_report_body(request: &RealtimeReportRequest) -> Value {
    Value::Object(common_report_body(
        &request.dimensions,
        &request.metrics,
        request.dimension_filter.as_ref(),
        request.metric_filter.as_ref(),
        &request.order_bys,
        request.limit,
        request.return_property_quota,
    ))
}

#[async_trait]
impl AnalyticsProvider for GoogleAnalyticsProvider {
    async fn account_summaries(&self) -> Result<Value> {
        let url = self.admin_url("v1beta", "accountSummaries")?;
        self.list_all(url, "accountSummaries").await
    }

    async fn google_ads_links(&self, property: &PropertyId) -> Result<Value> {
        let url = self.admin_url("v1beta", &format!("{property}/googleAdsLinks"))?;
        self.list_all(url, "googleAdsLinks").await
    }

    async fn property_details(&self, property: &PropertyId) -> Result<Value> {
        let url = self.admin_url("v1beta", property.resource_name())?;
        self.get_json(url, ADMIN_API).await
    }

    async fn property_annotations(&self, property: &PropertyId) -> Result<Value> {
        let url = self.admin_url("v1alpha", &format!("{property}/reportingDataAnnotations"))?;
        self.list_all(url, "reportingDataAnnotations").await
    }

    async fn custom_dimensions_and_metrics(&self, property: &PropertyId) -> Result<Value> {
        let url = self.data_url(&format!("{property}/metadata"))?;
        let metadata = self.get_json(url, DATA_API).await?;
        Ok(json!({
            "custom_dimensions": custom_definitions(&metadata, "dimensions"),
            "custom_metrics": custom_definitions(&metadata, "metrics"),
        }))
    }

    async fn run_report(&self, request: &ReportRequest) -> Result<Value> {
        request.validate()?;
        let url = self.data_url(&format!("{}:runReport", request.property))?;
        self.post_json(url, &report_body(request), DATA_API).await
    }

    async fn run_realtime_report(&self, request: &RealtimeReportRequest) -> Result<Value> {
        request.validate()?;
        let url = self.data_url(&format!("{}:runRealtimeReport", request.property))?;
        self.post_json(url, &realtime_report_body(request), DATA_API)
            .await
    }

    fn provider_name(&self) -> &str {
        "google-analytics"
    }
}
