//! Adapters implementing domain ports
//!
//! | Adapter | Port | Backend |
//! |---------|------|---------|
//! | [`GoogleAnalyticsProvider`] | `AnalyticsProvider` | Analytics Admin + Data REST APIs |

pub mod google_analytics;
pub mod http_response;

pub use google_analytics::GoogleAnalyticsProvider;
pub use http_response::HttpResponseUtils;
