//! Directory attribute catalog and closed enumerations for a groupware
//! provisioning service.
//!
//! Provides the wire names of every provisioning attribute, their catalog
//! metadata, and type-safe string-backed enumerations for attribute values
//! restricted to a fixed set of strings.
//!
//! # Core Components
//!
//! - [`StringEnum`] - Parse/serialize contract shared by every enumeration
//! - [`AttributeRegistry`] - Validated, indexed attribute catalog
//! - [`Entry`] / [`Modifications`] - Typed access to directory attribute values
//!
//! # Quick Start
//!
//! ```rust
//! use provisioning_attrs::attrs::names;
//! use provisioning_attrs::enums::{AccountStatus, StringEnum};
//! use provisioning_attrs::{AttributeRegistry, Entry, Modifications};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let entry = Entry::new().with_attr(names::ZIMBRA_ACCOUNT_STATUS, "locked");
//! assert_eq!(
//!     entry.get_enum::<AccountStatus>(names::ZIMBRA_ACCOUNT_STATUS),
//!     Some(AccountStatus::Locked)
//! );
//!
//! let mut mods = Modifications::new();
//! mods.set_enum(names::ZIMBRA_ACCOUNT_STATUS, AccountStatus::Active);
//! mods.validate(AttributeRegistry::global())?;
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod attrs;
pub mod entry;
pub mod enums;
pub mod error;

// Re-export commonly used types for convenience
pub use attrs::{AttributeInfo, AttributeRegistry};
pub use entry::{Entry, Modifications};
pub use enums::{EnumDefinition, EnumVariant, StringEnum};
pub use error::{
    CatalogError, CatalogResult, InvalidValue, ProvisioningError, ProvisioningResult,
};
