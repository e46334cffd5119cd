//! Error types for attribute catalog and enumeration operations.
//!
//! Parsing a closed enumeration has exactly one failure, [`InvalidValue`].
//! Operations that resolve attributes wrap it in [`ProvisioningError`], and
//! loading a catalog reports [`CatalogError`].

use std::fmt;

/// A string did not match any wire value of a closed enumeration.
///
/// Carries the rejected input and every accepted wire value in declaration
/// order, so the rendered message is stable across runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value: {value}, valid values: [{}]", .valid_values.join(", "))]
pub struct InvalidValue {
    /// Name of the enumeration that rejected the value
    pub type_name: &'static str,
    /// The rejected input, exactly as given
    pub value: String,
    /// Accepted wire values in declaration order
    pub valid_values: Vec<&'static str>,
}

impl InvalidValue {
    /// Create an invalid value error
    pub fn new(
        type_name: &'static str,
        value: impl Into<String>,
        valid_values: Vec<&'static str>,
    ) -> Self {
        Self {
            type_name,
            value: value.into(),
            valid_values,
        }
    }
}

/// Main error type for attribute value operations.
#[derive(Debug, thiserror::Error)]
pub enum ProvisioningError {
    /// A value outside the closed set accepted by an attribute
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] InvalidValue),

    /// Attribute name not present in the catalog
    #[error("Unknown attribute: {name}")]
    UnknownAttribute { name: String },
}

/// Errors that can occur while loading an attribute catalog.
///
/// The embedded catalog never produces these; they surface when a catalog
/// is loaded from a file or string.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog is not valid JSON or has the wrong shape
    #[error("Malformed catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog has no attributes
    #[error("Catalog contains no attributes")]
    EmptyCatalog,

    /// Attribute with an empty wire name
    #[error("Attribute at position {position} has an empty name")]
    EmptyName { position: usize },

    /// Two attributes share a wire name
    #[error("Duplicate attribute name: {name}")]
    DuplicateName { name: String },

    /// Two attributes share a symbol
    #[error("Duplicate attribute symbol: {symbol}")]
    DuplicateSymbol { symbol: String },

    /// Two attributes share a numeric id
    #[error("Duplicate attribute id {id}: {first} and {second}")]
    DuplicateId {
        id: u32,
        first: String,
        second: String,
    },

    /// Attribute restricted to an enumeration that is not declared
    #[error("Attribute '{attribute}' references unknown enumeration '{enum_type}'")]
    UnknownEnumType { attribute: String, enum_type: String },
}

impl ProvisioningError {
    /// Create an unknown attribute error
    pub fn unknown_attribute(name: impl Into<String>) -> Self {
        Self::UnknownAttribute { name: name.into() }
    }

    /// Whether this error belongs to the "invalid request" class.
    ///
    /// Such errors are caller input failures and are never retryable.
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, Self::InvalidRequest(_))
    }

    /// The underlying enumeration error, if any
    pub fn invalid_value(&self) -> Option<&InvalidValue> {
        match self {
            Self::InvalidRequest(e) => Some(e),
            Self::UnknownAttribute { .. } => None,
        }
    }
}

impl CatalogError {
    /// Create a duplicate id error
    pub fn duplicate_id(id: u32, first: impl Into<String>, second: impl Into<String>) -> Self {
        Self::DuplicateId {
            id,
            first: first.into(),
            second: second.into(),
        }
    }

    /// Create an unknown enumeration error
    pub fn unknown_enum_type(attribute: impl Into<String>, enum_type: impl Into<String>) -> Self {
        Self::UnknownEnumType {
            attribute: attribute.into(),
            enum_type: enum_type.into(),
        }
    }
}

/// Short form used in log lines: `TypeName(value)`.
pub(crate) struct Rejected<'a>(pub &'a InvalidValue);

impl fmt::Display for Rejected<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.0.type_name, self.0.value)
    }
}

// Result type aliases for convenience
pub type ProvisioningResult<T> = Result<T, ProvisioningError>;
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_message() {
        let error = InvalidValue::new("GalMode", "both ", vec!["both", "ldap", "zimbra"]);
        assert_eq!(
            error.to_string(),
            "invalid value: both , valid values: [both, ldap, zimbra]"
        );
    }

    #[test]
    fn test_unknown_attribute_creation() {
        let error = ProvisioningError::unknown_attribute("zimbraNoSuchThing");
        assert!(error.to_string().contains("zimbraNoSuchThing"));
        assert!(!error.is_invalid_request());
        assert!(error.invalid_value().is_none());
    }

    #[test]
    fn test_error_chain() {
        let invalid = InvalidValue::new("GalStatus", "on", vec!["enabled", "disabled"]);
        let error = ProvisioningError::from(invalid.clone());
        assert!(error.is_invalid_request());
        assert_eq!(error.invalid_value(), Some(&invalid));
        assert!(error.to_string().starts_with("Invalid request: invalid value: on"));
    }

    #[test]
    fn test_rejected_display() {
        let invalid = InvalidValue::new("GalStatus", "on", vec!["enabled", "disabled"]);
        assert_eq!(Rejected(&invalid).to_string(), "GalStatus(\"on\")");
    }

    #[test]
    fn test_duplicate_id_message() {
        let error = CatalogError::duplicate_id(308, "zimbraMailMode", "zimbraOther");
        assert_eq!(
            error.to_string(),
            "Duplicate attribute id 308: zimbraMailMode and zimbraOther"
        );
    }
}
