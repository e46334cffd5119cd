//! Attribute registry for loading, checking, and querying the catalog.
//!
//! The registry indexes catalog records by wire name, symbol, and numeric
//! id, and resolves each enum-restricted attribute to its
//! [`EnumDefinition`] once at load time.

use super::{embedded, types::AttributeInfo};
use crate::enums::{self, EnumDefinition};
use crate::error::{CatalogError, CatalogResult, ProvisioningError, ProvisioningResult};

use log::{debug, warn};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

static GLOBAL: Lazy<AttributeRegistry> = Lazy::new(|| {
    AttributeRegistry::with_embedded_catalog().expect("Failed to load embedded attribute catalog")
});

/// Registry of directory attributes.
///
/// Records keep catalog order. Once built the registry is never mutated, so
/// a shared reference can be used from any number of threads.
#[derive(Debug, Clone)]
pub struct AttributeRegistry {
    attributes: Vec<AttributeInfo>,
    enums: Vec<Option<&'static EnumDefinition>>,
    by_name: HashMap<String, usize>,
    by_symbol: HashMap<String, usize>,
    by_id: HashMap<u32, usize>,
}

impl AttributeRegistry {
    /// Create a registry from the embedded catalog.
    pub fn new() -> CatalogResult<Self> {
        Self::with_embedded_catalog()
    }

    /// Process-wide registry built from the embedded catalog.
    ///
    /// Built on first use; concurrent first callers all observe the same
    /// fully constructed registry.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Create a registry from the catalog compiled into the library.
    pub fn with_embedded_catalog() -> CatalogResult<Self> {
        Self::from_json_str(embedded::attribute_catalog())
    }

    /// Create a registry from a catalog JSON file.
    pub fn from_catalog_file<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let content = fs::read_to_string(&path)?;
        Self::from_json_str(&content).inspect_err(|e| {
            warn!("Rejected catalog {}: {}", path.as_ref().display(), e);
        })
    }

    /// Create a registry from a catalog JSON string.
    pub fn from_json_str(content: &str) -> CatalogResult<Self> {
        let attributes: Vec<AttributeInfo> = serde_json::from_str(content)?;
        Self::from_attributes(attributes)
    }

    /// Create a registry from catalog records, checking catalog invariants.
    ///
    /// Wire names, symbols and ids must be unique, names non-empty, and every
    /// `enum_type` must name a declared enumeration.
    pub fn from_attributes(attributes: Vec<AttributeInfo>) -> CatalogResult<Self> {
        if attributes.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        let mut enums_by_index = Vec::with_capacity(attributes.len());
        let mut by_name = HashMap::with_capacity(attributes.len());
        let mut by_symbol = HashMap::with_capacity(attributes.len());
        let mut by_id = HashMap::new();

        for (position, attr) in attributes.iter().enumerate() {
            if attr.name.is_empty() {
                return Err(CatalogError::EmptyName { position });
            }
            if by_name.insert(attr.name.clone(), position).is_some() {
                return Err(CatalogError::DuplicateName {
                    name: attr.name.clone(),
                });
            }
            if by_symbol.insert(attr.symbol.clone(), position).is_some() {
                return Err(CatalogError::DuplicateSymbol {
                    symbol: attr.symbol.clone(),
                });
            }
            if let Some(id) = attr.id {
                if let Some(first) = by_id.insert(id, position) {
                    let first: &AttributeInfo = &attributes[first];
                    return Err(CatalogError::duplicate_id(id, &first.name, &attr.name));
                }
            }

            let definition = match &attr.enum_type {
                Some(enum_type) => Some(
                    enums::definition(enum_type)
                        .ok_or_else(|| CatalogError::unknown_enum_type(&attr.name, enum_type))?,
                ),
                None => None,
            };
            enums_by_index.push(definition);
        }

        debug!(
            "Loaded attribute catalog: {} attributes, {} with ids, {} enum-restricted",
            attributes.len(),
            by_id.len(),
            enums_by_index.iter().flatten().count()
        );

        Ok(Self {
            attributes,
            enums: enums_by_index,
            by_name,
            by_symbol,
            by_id,
        })
    }

    /// All attributes in catalog order.
    pub fn attributes(&self) -> &[AttributeInfo] {
        &self.attributes
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Get an attribute by wire name (exact match).
    pub fn get(&self, name: &str) -> Option<&AttributeInfo> {
        self.by_name.get(name).map(|&i| &self.attributes[i])
    }

    /// Get an attribute by constant name.
    pub fn get_by_symbol(&self, symbol: &str) -> Option<&AttributeInfo> {
        self.by_symbol.get(symbol).map(|&i| &self.attributes[i])
    }

    /// Get an attribute by schema registry id.
    pub fn get_by_id(&self, id: u32) -> Option<&AttributeInfo> {
        self.by_id.get(&id).map(|&i| &self.attributes[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// The enumeration restricting an attribute's values, if any.
    pub fn enum_for(&self, name: &str) -> Option<&'static EnumDefinition> {
        self.by_name.get(name).and_then(|&i| self.enums[i])
    }

    /// Attributes restricted to an enumeration, in catalog order.
    pub fn enum_attributes(&self) -> impl Iterator<Item = (&AttributeInfo, &'static EnumDefinition)> {
        self.attributes
            .iter()
            .zip(&self.enums)
            .filter_map(|(attr, definition)| definition.map(|d| (attr, d)))
    }

    /// Deprecated attributes, in catalog order.
    pub fn deprecated(&self) -> impl Iterator<Item = &AttributeInfo> {
        self.attributes.iter().filter(|attr| attr.is_deprecated())
    }

    /// Check a value for an attribute.
    ///
    /// Values of enum-restricted attributes must match a declared wire value
    /// exactly; other attributes accept any value.
    pub fn validate_value(&self, name: &str, value: &str) -> ProvisioningResult<()> {
        let &index = self
            .by_name
            .get(name)
            .ok_or_else(|| ProvisioningError::unknown_attribute(name))?;

        if let Some(definition) = self.enums[index] {
            definition.position(value)?;
        }
        Ok(())
    }
}

impl Default for AttributeRegistry {
    fn default() -> Self {
        Self::global().clone()
    }
}
