//! Directory attribute catalog.
//!
//! Every provisioning attribute has a constant in [`names`] holding its wire
//! name and a record in the embedded catalog carrying its schema id,
//! description, version markers and, for enum-restricted attributes, the
//! enumeration its values must belong to.
//!
//! # Key Types
//!
//! - [`AttributeInfo`] - Catalog record for one attribute
//! - [`AttributeRegistry`] - Indexed, validated catalog
//!
//! # Examples
//!
//! ```rust
//! use provisioning_attrs::attrs::{names, AttributeRegistry};
//!
//! let registry = AttributeRegistry::global();
//! let info = registry.get(names::ZIMBRA_MAIL_MODE).expect("declared");
//! assert_eq!(info.id, Some(308));
//! assert!(registry.validate_value(names::ZIMBRA_MAIL_MODE, "https").is_ok());
//! assert!(registry.validate_value(names::ZIMBRA_MAIL_MODE, "HTTPS").is_err());
//! ```

pub mod embedded;
pub mod names;
pub mod registry;
pub mod types;

#[cfg(test)]
mod tests;

pub use registry::AttributeRegistry;
pub use types::AttributeInfo;
