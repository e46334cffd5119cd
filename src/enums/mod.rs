//! String-backed closed enumerations.
//!
//! Every attribute value restricted to a fixed set of strings is modelled as
//! a Rust enum declared through `string_enum!`. The macro records each
//! variant's wire value in an [`EnumDefinition`], and all parsing goes
//! through [`EnumDefinition::position`], so typed and untyped lookups share
//! one implementation.
//!
//! Matching is exact and case-sensitive: no trimming, no case folding.
//!
//! # Examples
//!
//! ```rust
//! use provisioning_attrs::enums::{AccountStatus, StringEnum};
//!
//! let status = AccountStatus::parse("active")?;
//! assert!(status.is(AccountStatus::Active));
//! assert_eq!(status.as_str(), "active");
//!
//! let err = AccountStatus::parse("banned").unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "invalid value: banned, valid values: [active, maintenance, locked, closed, lockout, pending]"
//! );
//! # Ok::<(), provisioning_attrs::error::InvalidValue>(())
//! ```

use crate::error::InvalidValue;

use serde::Serialize;

/// One member of a closed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumVariant {
    /// Identifier used in code
    pub symbolic_name: &'static str,
    /// Exact string stored in the directory
    pub wire_value: &'static str,
}

/// Static description of a closed enumeration and its variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumDefinition {
    /// Enumeration name, e.g. `AccountStatus`
    pub type_name: &'static str,
    /// Variants in declaration order
    pub variants: &'static [EnumVariant],
}

impl EnumDefinition {
    /// Index of the first variant whose wire value equals `input` exactly.
    pub fn position(&self, input: &str) -> Result<usize, InvalidValue> {
        self.variants
            .iter()
            .position(|variant| variant.wire_value == input)
            .ok_or_else(|| self.invalid(input))
    }

    /// Resolve `input` to its declared variant.
    pub fn parse(&self, input: &str) -> Result<&'static EnumVariant, InvalidValue> {
        let variants = self.variants;
        self.position(input).map(|index| &variants[index])
    }

    /// Whether `input` is one of the accepted wire values
    pub fn accepts(&self, input: &str) -> bool {
        self.variants.iter().any(|variant| variant.wire_value == input)
    }

    /// Accepted wire values in declaration order.
    pub fn wire_values(&self) -> impl Iterator<Item = &'static str> + 'static {
        let variants = self.variants;
        variants.iter().map(|variant| variant.wire_value)
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Build the rejection error for `input`.
    pub fn invalid(&self, input: &str) -> InvalidValue {
        InvalidValue::new(self.type_name, input, self.wire_values().collect())
    }
}

/// A closed enumeration whose variants carry a canonical wire string.
///
/// Implemented by `string_enum!`; the provided methods are the only
/// parse/serialize logic in the crate.
pub trait StringEnum: Copy + Eq + Sized + 'static {
    /// Static table of this enumeration's variants
    const DEFINITION: EnumDefinition;

    /// Every variant, in the same order as `DEFINITION.variants`
    const VARIANTS: &'static [Self];

    /// Position of this variant in declaration order
    fn index(self) -> usize;

    /// Parse a wire string into a variant.
    fn parse(input: &str) -> Result<Self, InvalidValue> {
        Self::DEFINITION
            .position(input)
            .map(|index| Self::VARIANTS[index])
    }

    /// The wire string of this variant
    fn as_str(&self) -> &'static str {
        self.variant().wire_value
    }

    /// The symbolic name of this variant
    fn symbolic_name(&self) -> &'static str {
        self.variant().symbolic_name
    }

    /// Descriptor of this variant
    fn variant(&self) -> &'static EnumVariant {
        let variants = Self::DEFINITION.variants;
        &variants[self.index()]
    }

    /// Identity test against a named candidate
    fn is(&self, candidate: Self) -> bool {
        *self == candidate
    }

    /// Accepted wire values in declaration order
    fn valid_values() -> Vec<&'static str> {
        Self::DEFINITION.wire_values().collect()
    }
}

/// Declare a string-backed closed enumeration.
///
/// Generates the enum itself plus [`StringEnum`], `Display`, `FromStr` and
/// serde impls that all use the declared wire strings.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $crate::enums::StringEnum for $name {
            const DEFINITION: $crate::enums::EnumDefinition = $crate::enums::EnumDefinition {
                type_name: stringify!($name),
                variants: &[$(
                    $crate::enums::EnumVariant {
                        symbolic_name: stringify!($variant),
                        wire_value: $wire,
                    }
                ),+],
            };

            const VARIANTS: &'static [Self] = &[$(Self::$variant),+];

            fn index(self) -> usize {
                self as usize
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::enums::StringEnum::as_str(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::InvalidValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::enums::StringEnum>::parse(s)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::enums::StringEnum::as_str(self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <::std::borrow::Cow<'de, str> as ::serde::Deserialize<'de>>::deserialize(deserializer)?;
                <Self as $crate::enums::StringEnum>::parse(&value).map_err(::serde::de::Error::custom)
            }
        }
    };
}

pub mod definitions;

#[cfg(test)]
mod tests;

pub use definitions::*;

/// Every declared enumeration, sorted case-insensitively by type name.
pub fn all() -> &'static [EnumDefinition] {
    definitions::ALL
}

/// Look up a declared enumeration by type name.
pub fn definition(type_name: &str) -> Option<&'static EnumDefinition> {
    definitions::ALL
        .iter()
        .find(|definition| definition.type_name == type_name)
}
