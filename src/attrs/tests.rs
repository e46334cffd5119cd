//! Tests for the attribute catalog and registry.

use super::names;
use super::registry::AttributeRegistry;
use super::types::AttributeInfo;
use crate::enums;
use crate::error::{CatalogError, ProvisioningError};
use std::collections::HashSet;

#[test]
fn test_embedded_catalog_loads() {
    let registry = AttributeRegistry::with_embedded_catalog().expect("Failed to load catalog");
    assert_eq!(registry.len(), 940);
    assert_eq!(registry.len(), names::ALL.len());
}

#[test]
fn test_names_match_catalog_order() {
    let registry = AttributeRegistry::global();
    let catalog: Vec<&str> = registry.attributes().iter().map(|a| a.name.as_str()).collect();
    assert_eq!(catalog, names::ALL);
}

#[test]
fn test_symbols_match_constants() {
    let registry = AttributeRegistry::global();
    let catalog: Vec<(&str, &str)> = registry
        .attributes()
        .iter()
        .map(|a| (a.symbol.as_str(), a.name.as_str()))
        .collect();
    assert_eq!(catalog, names::SYMBOLS);

    for &(symbol, name) in names::SYMBOLS {
        assert_eq!(registry.get_by_symbol(symbol).map(|a| a.name.as_str()), Some(name));
    }
}

#[test]
fn test_wire_names_are_unique() {
    let unique: HashSet<_> = names::ALL.iter().collect();
    assert_eq!(unique.len(), names::ALL.len());
}

#[test]
fn test_lookup_by_name_symbol_and_id() {
    let registry = AttributeRegistry::global();

    let host = registry.get(names::ZIMBRA_MAIL_HOST).expect("declared");
    assert_eq!(host.name, "zimbraMailHost");
    assert_eq!(host.symbol, "ZIMBRA_MAIL_HOST");
    assert_eq!(host.id, Some(4));
    assert_eq!(
        host.description.as_deref(),
        Some("the server hosting the accounts mailbox")
    );

    assert_eq!(registry.get_by_symbol("ZIMBRA_MAIL_HOST"), Some(host));
    assert_eq!(registry.get_by_id(4), Some(host));
    assert_eq!(registry.get_by_id(1).map(|a| a.name.as_str()), Some("zimbraId"));

    assert!(registry.get("zimbramailhost").is_none());
    assert!(!registry.contains("ZIMBRA_MAIL_HOST"));
}

#[test]
fn test_untracked_attributes_have_no_id() {
    let registry = AttributeRegistry::global();
    let amavis = registry.get(names::AMAVIS_BAD_HEADER_ADMIN).expect("declared");
    assert_eq!(amavis.id, None);
    assert_eq!(registry.attributes().iter().filter(|a| a.id.is_some()).count(), 883);
}

#[test]
fn test_version_markers() {
    let registry = AttributeRegistry::global();
    let im = registry.get(names::ZIMBRA_IM_SERVICE).expect("declared");
    assert_eq!(im.since.as_deref(), Some("6.0.0_BETA1"));
    assert_eq!(im.deprecated_since.as_deref(), Some("6.0.0_GA"));
    assert!(im.is_deprecated());
    assert_eq!(registry.deprecated().count(), 44);
}

#[test]
fn test_enum_bindings() {
    let registry = AttributeRegistry::global();
    assert_eq!(registry.enum_attributes().count(), 45);

    let definition = registry.enum_for(names::ZIMBRA_ACCOUNT_STATUS).expect("bound");
    assert_eq!(definition.type_name, "AccountStatus");
    assert!(registry.enum_for(names::ZIMBRA_MAIL_HOST).is_none());

    for (attr, definition) in registry.enum_attributes() {
        assert_eq!(attr.name, format!("zimbra{}", definition.type_name));
    }

    let bound: HashSet<_> = registry
        .enum_attributes()
        .map(|(_, d)| d.type_name)
        .collect();
    let unbound: Vec<_> = enums::all()
        .iter()
        .filter(|d| !bound.contains(d.type_name))
        .map(|d| d.type_name)
        .collect();
    assert_eq!(unbound, vec!["MtaLmtpHostLookup"]);
}

#[test]
fn test_validate_value() {
    let registry = AttributeRegistry::global();

    assert!(registry.validate_value(names::ZIMBRA_BACKUP_MODE, "Auto-Grouped").is_ok());
    assert!(registry.validate_value(names::ZIMBRA_MAIL_HOST, "anything at all").is_ok());

    match registry.validate_value(names::ZIMBRA_BACKUP_MODE, "Auto_Grouped") {
        Err(ProvisioningError::InvalidRequest(invalid)) => {
            assert_eq!(invalid.type_name, "BackupMode");
            assert_eq!(invalid.valid_values, vec!["Standard", "Auto-Grouped"]);
        }
        other => panic!("Expected InvalidRequest, got {other:?}"),
    }

    match registry.validate_value("zimbraNoSuchAttribute", "x") {
        Err(ProvisioningError::UnknownAttribute { name }) => {
            assert_eq!(name, "zimbraNoSuchAttribute");
        }
        other => panic!("Expected UnknownAttribute, got {other:?}"),
    }
}

#[test]
fn test_rejects_duplicate_name() {
    let result = AttributeRegistry::from_attributes(vec![
        AttributeInfo::new("zimbraA", "ZIMBRA_A"),
        AttributeInfo::new("zimbraA", "ZIMBRA_A2"),
    ]);
    assert!(matches!(result, Err(CatalogError::DuplicateName { name }) if name == "zimbraA"));
}

#[test]
fn test_rejects_duplicate_symbol() {
    let result = AttributeRegistry::from_attributes(vec![
        AttributeInfo::new("zimbraA", "ZIMBRA_A"),
        AttributeInfo::new("zimbraB", "ZIMBRA_A"),
    ]);
    assert!(matches!(result, Err(CatalogError::DuplicateSymbol { .. })));
}

#[test]
fn test_rejects_duplicate_id() {
    let result = AttributeRegistry::from_attributes(vec![
        AttributeInfo::new("zimbraA", "ZIMBRA_A").with_id(7),
        AttributeInfo::new("zimbraB", "ZIMBRA_B"),
        AttributeInfo::new("zimbraC", "ZIMBRA_C").with_id(7),
    ]);
    match result {
        Err(CatalogError::DuplicateId { id, first, second }) => {
            assert_eq!(id, 7);
            assert_eq!(first, "zimbraA");
            assert_eq!(second, "zimbraC");
        }
        other => panic!("Expected DuplicateId, got {other:?}"),
    }
}

#[test]
fn test_rejects_unknown_enum_and_empty_input() {
    let result = AttributeRegistry::from_attributes(vec![
        AttributeInfo::new("zimbraA", "ZIMBRA_A").with_enum_type("NoSuchEnum"),
    ]);
    assert!(matches!(result, Err(CatalogError::UnknownEnumType { .. })));

    let result = AttributeRegistry::from_attributes(vec![AttributeInfo::new("", "EMPTY")]);
    assert!(matches!(result, Err(CatalogError::EmptyName { position: 0 })));

    let result = AttributeRegistry::from_attributes(Vec::new());
    assert!(matches!(result, Err(CatalogError::EmptyCatalog)));
}

#[test]
fn test_from_json_str() {
    let json = r#"[
        {"name": "zimbraMailMode", "symbol": "ZIMBRA_MAIL_MODE", "id": 308, "enumType": "MailMode"},
        {"name": "zimbraNotes", "symbol": "ZIMBRA_NOTES"}
    ]"#;
    let registry = AttributeRegistry::from_json_str(json).expect("valid catalog");
    assert_eq!(registry.len(), 2);
    assert!(registry.validate_value("zimbraMailMode", "mixed").is_ok());
    assert!(registry.validate_value("zimbraMailMode", "Mixed").is_err());

    let err = AttributeRegistry::from_json_str(r#"{"name": "x"}"#).unwrap_err();
    assert!(matches!(err, CatalogError::Json(_)));
}

#[test]
fn test_from_catalog_file() {
    let path = std::env::temp_dir().join(format!(
        "provisioning-attrs-catalog-{}.json",
        std::process::id()
    ));
    std::fs::write(
        &path,
        r#"[{"name": "zimbraGalMode", "symbol": "ZIMBRA_GAL_MODE", "enumType": "GalMode"}]"#,
    )
    .expect("Failed to write catalog");

    let registry = AttributeRegistry::from_catalog_file(&path).expect("valid catalog");
    assert_eq!(registry.enum_for("zimbraGalMode").map(|d| d.type_name), Some("GalMode"));
    std::fs::remove_file(&path).ok();

    let missing = AttributeRegistry::from_catalog_file(&path).unwrap_err();
    assert!(matches!(missing, CatalogError::Io(_)));
}

#[test]
fn test_catalog_serializes_back() {
    let registry = AttributeRegistry::global();
    let json = serde_json::to_string(registry.attributes()).expect("serialize");
    let reloaded = AttributeRegistry::from_json_str(&json).expect("reload");
    assert_eq!(reloaded.attributes(), registry.attributes());
}
