//! Property identifier value objects

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::constants::PROPERTY_RESOURCE_PREFIX;
use crate::error::{Error, Result};

/// Property identifier as supplied by a caller
///
/// Callers may pass the numeric ID, its string form, or the full
/// `properties/<id>` resource name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum PropertyIdInput {
    /// Numeric property ID, e.g. `123456789`
    Number(u64),
    /// Property ID or resource name, e.g. `"123456789"` or `"properties/123456789"`
    Text(String),
}

impl From<u64> for PropertyIdInput {
    fn from(id: u64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for PropertyIdInput {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl fmt::Display for PropertyIdInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

/// Value Object: Google Analytics property resource name
///
/// ## Business Rules
///
/// - Always of the form `properties/<digits>`
/// - The numeric part is non-empty and ASCII digits only
///
/// ```rust
/// use gam_domain::value_objects::{PropertyId, PropertyIdInput};
///
/// let id = PropertyId::parse(&PropertyIdInput::Text("1234".into())).unwrap();
/// assert_eq!(id.resource_name(), "properties/1234");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PropertyId(String);

impl PropertyId {
    /// Normalize caller input into a property resource name
    pub fn parse(input: &PropertyIdInput) -> Result<Self> {
        match input {
            PropertyIdInput::Number(id) => Ok(Self(format!("{PROPERTY_RESOURCE_PREFIX}{id}"))),
            PropertyIdInput::Text(raw) => {
                let trimmed = raw.trim();
                let digits = trimmed
                    .strip_prefix(PROPERTY_RESOURCE_PREFIX)
                    .unwrap_or(trimmed);
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(Error::validation(format!("invalid property ID: {raw}")));
                }
                Ok(Self(format!("{PROPERTY_RESOURCE_PREFIX}{digits}")))
            }
        }
    }

    /// Full resource name, e.g. `properties/1234`
    pub fn resource_name(&self) -> &str {
        &self.0
    }

    /// Numeric part of the resource name
    pub fn numeric_id(&self) -> &str {
        &self.0[PROPERTY_RESOURCE_PREFIX.len()..]
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
