//! Property Tool Handlers
//!
//! Tools that take a single `property_id` and return one Admin or Data API
//! lookup for that property.

use async_trait::async_trait;
use rmcp::model::JsonObject;
use serde_json::Value;

use gam_domain::error::Result;
use gam_domain::ports::SharedAnalyticsProvider;

use crate::args::{PropertyArgs, parse_args};
use crate::constants::{
    TOOL_GET_CUSTOM_DIMENSIONS_AND_METRICS, TOOL_GET_PROPERTY_DETAILS,
    TOOL_LIST_GOOGLE_ADS_LINKS, TOOL_LIST_PROPERTY_ANNOTATIONS,
};
use crate::tools::{AnalyticsTool, RegistryError, schema_for_args};

/// Which property lookup a [`PropertyTool`] performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyQuery {
    /// Google Ads links of the property
    GoogleAdsLinks,
    /// The property resource itself
    Details,
    /// Reporting data annotations
    Annotations,
    /// Custom dimensions and metrics from the Data API metadata
    CustomDimensionsAndMetrics,
}

impl PropertyQuery {
    /// Tool name for this lookup
    pub fn tool_name(self) -> &'static str {
        match self {
            Self::GoogleAdsLinks => TOOL_LIST_GOOGLE_ADS_LINKS,
            Self::Details => TOOL_GET_PROPERTY_DETAILS,
            Self::Annotations => TOOL_LIST_PROPERTY_ANNOTATIONS,
            Self::CustomDimensionsAndMetrics => TOOL_GET_CUSTOM_DIMENSIONS_AND_METRICS,
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::GoogleAdsLinks => "Returns a list of links to Google Ads accounts for a property.",
            Self::Details => "Returns details about a property.",
            Self::Annotations => {
                "Returns annotations for a property. Annotations are notes on specific \
                 dates or periods, such as releases, campaign launches or traffic changes."
            }
            Self::CustomDimensionsAndMetrics => {
                "Returns the property's custom dimensions and metrics, for use in reports."
            }
        }
    }
}

/// Property-scoped lookup tool
pub struct PropertyTool {
    query: PropertyQuery,
    provider: SharedAnalyticsProvider,
}

impl PropertyTool {
    /// Create a handler for one property lookup
    pub fn new(query: PropertyQuery, provider: SharedAnalyticsProvider) -> Self {
        Self { query, provider }
    }
}

#[async_trait]
impl AnalyticsTool for PropertyTool {
    fn name(&self) -> &'static str {
        self.query.tool_name()
    }

    fn description(&self) -> String {
        self.query.description().to_string()
    }

    fn input_schema(&self) -> std::result::Result<JsonObject, RegistryError> {
        schema_for_args::<PropertyArgs>(self.name())
    }

    async fn invoke(&self, arguments: JsonObject) -> Result<Value> {
        let property = parse_args::<PropertyArgs>(arguments)?.property()?;
        match self.query {
            PropertyQuery::GoogleAdsLinks => self.provider.google_ads_links(&property).await,
            PropertyQuery::Details => self.provider.property_details(&property).await,
            PropertyQuery::Annotations => self.provider.property_annotations(&property).await,
            PropertyQuery::CustomDimensionsAndMetrics => {
                self.provider.custom_dimensions_and_metrics(&property).await
            }
        }
    }
}
