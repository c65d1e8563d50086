//! HTTP Response Utilities
//!
//! Helper functions for processing responses from Google APIs.

use gam_domain::error::{Error, Result};
use reqwest::Response;
use serde_json::Value;

/// Utilities for processing HTTP responses
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and parse JSON
    ///
    /// # Arguments
    /// * `response` - The HTTP response to check
    /// * `api_name` - Name of the API for error messages
    ///
    /// # Returns
    /// Parsed JSON value on success, or an error classified by status code
    pub async fn check_and_parse(response: Response, api_name: &str) -> Result<Value> {
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Self::classify(status.as_u16(), api_name, &body));
        }

        response.json().await.map_err(|e| {
            Error::network_with_source(format!("{api_name} response parse failed: {e}"), e)
        })
    }

    /// Map a failed status and body to a domain error
    pub fn classify(code: u16, api_name: &str, body: &str) -> Error {
        let details = Self::google_error_message(body).unwrap_or_else(|| body.trim().to_string());
        match code {
            401 | 403 => Error::authentication(format!("{api_name} rejected credentials: {details}")),
            429 => Error::rate_limited(format!("{api_name}: {details}")),
            _ => Error::api(code, format!("{api_name}: {details}")),
        }
    }

    /// Extract `error.message` from a Google API error body
    fn google_error_message(body: &str) -> Option<String> {
        let value: Value = serde_json::from_str(body).ok()?;
        value
            .pointer("/error/message")
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}
