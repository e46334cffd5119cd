//! Attribute catalog embedded in the library.
//!
//! The catalog is compiled into the binary so the registry can be built
//! without any file on disk. [`crate::attrs::names`] mirrors it one constant
//! per entry.

/// Returns the embedded attribute catalog as a JSON string.
pub fn attribute_catalog() -> &'static str {
    include_str!("catalog.json")
}
