//! Catalog record for a single directory attribute.

use serde::{Deserialize, Serialize};

/// Definition of one provisioning attribute.
///
/// `name` is the wire name used to store and query the attribute in the
/// directory; `symbol` is the constant in [`crate::attrs::names`] that holds
/// it. Attributes that are not tracked by the schema registry have no `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeInfo {
    /// Wire name, e.g. `zimbraMailHost`
    pub name: String,
    /// Constant name, e.g. `ZIMBRA_MAIL_HOST`
    pub symbol: String,
    /// Schema registry id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Release that introduced the attribute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
    /// Release that deprecated the attribute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated_since: Option<String>,
    /// Enumeration restricting the attribute's values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_type: Option<String>,
}

impl AttributeInfo {
    /// Create a record with only a wire name and symbol.
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            id: None,
            description: None,
            since: None,
            deprecated_since: None,
            enum_type: None,
        }
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_enum_type(mut self, enum_type: impl Into<String>) -> Self {
        self.enum_type = Some(enum_type.into());
        self
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated_since.is_some()
    }
}
