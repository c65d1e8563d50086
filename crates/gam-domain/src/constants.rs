//! Domain layer constants

/// Resource name prefix for Google Analytics properties
pub const PROPERTY_RESOURCE_PREFIX: &str = "properties/";

/// Relative date keyword for the current day
pub const DATE_TODAY: &str = "today";

/// Relative date keyword for the previous day
pub const DATE_YESTERDAY: &str = "yesterday";

/// Suffix of the `NdaysAgo` relative date form
pub const DATE_DAYS_AGO_SUFFIX: &str = "daysAgo";

/// Absolute date format accepted by the Data API
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Message reported when a date range starts after it ends
pub const INVALID_DATE_RANGE: &str = "invalid date range";
