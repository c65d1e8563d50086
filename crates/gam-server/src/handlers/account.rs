//! Account Summaries Tool Handler

use async_trait::async_trait;
use rmcp::model::JsonObject;
use serde_json::Value;

use gam_domain::error::Result;
use gam_domain::ports::SharedAnalyticsProvider;

use crate::constants::TOOL_GET_ACCOUNT_SUMMARIES;
use crate::tools::AnalyticsTool;

/// Lists the accounts and properties visible to the configured credentials
pub struct GetAccountSummariesTool {
    provider: SharedAnalyticsProvider,
}

impl GetAccountSummariesTool {
    /// Create a new get_account_summaries handler
    pub fn new(provider: SharedAnalyticsProvider) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl AnalyticsTool for GetAccountSummariesTool {
    fn name(&self) -> &'static str {
        TOOL_GET_ACCOUNT_SUMMARIES
    }

    fn description(&self) -> String {
        "Retrieves information about the user's Google Analytics accounts and properties."
            .to_string()
    }

    // Takes no arguments; anything supplied is ignored.
    async fn invoke(&self, _arguments: JsonObject) -> Result<Value> {
        self.provider.account_summaries().await
    }
}
