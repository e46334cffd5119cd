//! Directory entries and attribute modifications.
//!
//! An [`Entry`] is the attribute bag of one directory object (account,
//! server, domain, ...) as read from the store. Enum-restricted attributes
//! are read through [`Entry::get_enum`], which treats a stored value outside
//! the enum like an unset one, or through [`Entry::try_get_enum`], which
//! surfaces the [`InvalidValue`].
//!
//! Changes are collected in [`Modifications`] and applied with
//! [`Entry::apply`]. An empty value means "remove the attribute".

use crate::attrs::AttributeRegistry;
use crate::enums::StringEnum;
use crate::error::{InvalidValue, ProvisioningError, ProvisioningResult, Rejected};

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Attribute values of one directory object.
///
/// Attributes are multi-valued; single-valued accessors read the first
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entry {
    attrs: BTreeMap<String, Vec<String>>,
}

impl Entry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style single value setter.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), vec![value.into()]);
        self
    }

    /// First value of an attribute, or `None` when unset.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// All values of an attribute.
    pub fn get_multi_attr(&self, name: &str) -> &[String] {
        self.attrs.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// Attribute names present on the entry, sorted.
    pub fn attr_names(&self) -> impl Iterator<Item = &str> {
        self.attrs.keys().map(String::as_str)
    }

    /// Read an enum-restricted attribute leniently.
    ///
    /// Returns `None` when the attribute is unset or holds a value outside
    /// the enum.
    pub fn get_enum<E: StringEnum>(&self, name: &str) -> Option<E> {
        match self.try_get_enum(name) {
            Ok(value) => value,
            Err(invalid) => {
                debug!("Ignoring stored value of {}: {}", name, Rejected(&invalid));
                None
            }
        }
    }

    /// Read an enum-restricted attribute, surfacing values outside the enum.
    pub fn try_get_enum<E: StringEnum>(&self, name: &str) -> Result<Option<E>, InvalidValue> {
        self.get_attr(name).map(E::parse).transpose()
    }

    /// Apply a modification map: empty values remove the attribute, others
    /// replace it.
    pub fn apply(&mut self, mods: &Modifications) {
        for (name, values) in &mods.changes {
            if values.iter().all(String::is_empty) {
                self.attrs.remove(name);
            } else {
                self.attrs.insert(name.clone(), values.clone());
            }
        }
    }
}

/// Pending attribute changes for a modify call.
///
/// Setters return `&mut Self` so changes can be chained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Modifications {
    changes: BTreeMap<String, Vec<String>>,
}

impl Modifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace an attribute with a single value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.changes.insert(name.into(), vec![value.into()]);
        self
    }

    /// Replace an attribute with several values.
    pub fn set_multi<I, V>(&mut self, name: impl Into<String>, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.changes
            .insert(name.into(), values.into_iter().map(Into::into).collect());
        self
    }

    /// Replace an enum-restricted attribute with a variant's wire value.
    pub fn set_enum<E: StringEnum>(&mut self, name: impl Into<String>, value: E) -> &mut Self {
        self.set(name, value.as_str())
    }

    /// Remove an attribute.
    pub fn unset(&mut self, name: impl Into<String>) -> &mut Self {
        self.set(name, "")
    }

    /// Pending values of an attribute.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.changes.get(name).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.changes
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Check every pending value against the registry.
    ///
    /// Attributes must exist in the catalog; removals skip the value check.
    pub fn validate(&self, registry: &AttributeRegistry) -> ProvisioningResult<()> {
        for (name, values) in &self.changes {
            if values.iter().all(String::is_empty) {
                if !registry.contains(name) {
                    return Err(ProvisioningError::unknown_attribute(name));
                }
                continue;
            }
            for value in values {
                registry.validate_value(name, value)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs::names;
    use crate::enums::{AccountStatus, MailMode, PrefReplyIncludeOriginalText};

    fn server() -> Entry {
        Entry::new()
            .with_attr(names::ZIMBRA_MAIL_MODE, "https")
            .with_attr(names::ZIMBRA_MAIL_HOST, "mail.example.com")
    }

    #[test]
    fn test_get_enum() {
        let entry = server();
        assert_eq!(entry.get_enum::<MailMode>(names::ZIMBRA_MAIL_MODE), Some(MailMode::Https));
        assert_eq!(entry.get_attr(names::ZIMBRA_MAIL_MODE), Some("https"));
        assert_eq!(entry.get_enum::<AccountStatus>(names::ZIMBRA_ACCOUNT_STATUS), None);
    }

    #[test]
    fn test_get_enum_invalid_stored_value() {
        let _ = env_logger::builder().is_test(true).try_init();

        let entry = Entry::new().with_attr(names::ZIMBRA_MAIL_MODE, "HTTPS");
        assert_eq!(entry.get_enum::<MailMode>(names::ZIMBRA_MAIL_MODE), None);

        let err = entry
            .try_get_enum::<MailMode>(names::ZIMBRA_MAIL_MODE)
            .unwrap_err();
        assert_eq!(err.value, "HTTPS");
        assert_eq!(err.valid_values.len(), 5);
        assert_eq!(entry.try_get_enum::<MailMode>("zimbraUnset"), Ok(None));
    }

    #[test]
    fn test_set_and_unset() {
        let mut mods = Modifications::new();
        mods.set_enum(names::ZIMBRA_MAIL_MODE, MailMode::Redirect)
            .unset(names::ZIMBRA_MAIL_HOST);
        assert_eq!(
            mods.get(names::ZIMBRA_MAIL_MODE),
            Some(&["redirect".to_string()][..])
        );
        assert_eq!(mods.get(names::ZIMBRA_MAIL_HOST), Some(&[String::new()][..]));

        let mut entry = server();
        entry.apply(&mods);
        assert_eq!(entry.get_enum::<MailMode>(names::ZIMBRA_MAIL_MODE), Some(MailMode::Redirect));
        assert!(!entry.has_attr(names::ZIMBRA_MAIL_HOST));
        assert_eq!(entry.attr_names().collect::<Vec<_>>(), vec!["zimbraMailMode"]);
    }

    #[test]
    fn test_multi_valued() {
        let mut mods = Modifications::new();
        mods.set_multi(names::ZIMBRA_MAIL_ALIAS, ["a@example.com", "b@example.com"]);

        let mut entry = Entry::new();
        entry.apply(&mods);
        assert_eq!(entry.get_multi_attr(names::ZIMBRA_MAIL_ALIAS).len(), 2);
        assert_eq!(entry.get_attr(names::ZIMBRA_MAIL_ALIAS), Some("a@example.com"));
        assert!(entry.get_multi_attr(names::ZIMBRA_MAIL_HOST).is_empty());
    }

    #[test]
    fn test_validate_modifications() {
        let registry = AttributeRegistry::global();

        let mut mods = Modifications::new();
        mods.set_enum(
            names::ZIMBRA_PREF_REPLY_INCLUDE_ORIGINAL_TEXT,
            PrefReplyIncludeOriginalText::IncludeSmartAndHeadersWithPrefix,
        )
        .set(names::ZIMBRA_MAIL_HOST, "mail.example.com")
        .unset(names::ZIMBRA_ACCOUNT_STATUS);
        assert!(mods.validate(registry).is_ok());

        mods.set(names::ZIMBRA_ACCOUNT_STATUS, "banned");
        let err = mods.validate(registry).unwrap_err();
        assert!(err.is_invalid_request());

        let mut unknown = Modifications::new();
        unknown.unset("zimbraNoSuchAttribute");
        assert!(matches!(
            unknown.validate(registry),
            Err(ProvisioningError::UnknownAttribute { .. })
        ));
    }
}
