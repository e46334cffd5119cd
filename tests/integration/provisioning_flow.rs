//! Reading an entry, preparing modifications, validating, and applying them.

use crate::common::fixtures;
use provisioning_attrs::attrs::names;
use provisioning_attrs::enums::{
    AccountStatus, PrefCalendarApptVisibility, PrefComposeFormat, StringEnum,
};
use provisioning_attrs::{AttributeRegistry, Entry, Modifications, ProvisioningError};

fn account() -> Entry {
    fixtures::account_attrs()
        .into_iter()
        .fold(Entry::new(), |entry, (name, value)| entry.with_attr(name, value))
}

#[test]
fn typed_reads_from_stored_values() {
    let entry = account();

    assert_eq!(
        entry.get_enum::<AccountStatus>(names::ZIMBRA_ACCOUNT_STATUS),
        Some(AccountStatus::Active)
    );
    assert_eq!(
        entry.get_enum::<PrefCalendarApptVisibility>(names::ZIMBRA_PREF_CALENDAR_APPT_VISIBILITY),
        Some(PrefCalendarApptVisibility::Private)
    );

    // Stored with the wrong case: lenient read treats it as unset.
    assert_eq!(
        entry.get_enum::<PrefComposeFormat>(names::ZIMBRA_PREF_COMPOSE_FORMAT),
        None
    );
    assert_error_message_contains!(
        entry.try_get_enum::<PrefComposeFormat>(names::ZIMBRA_PREF_COMPOSE_FORMAT),
        "valid values: [text, html]"
    );
}

#[test]
fn lock_and_reactivate_account() {
    let registry = AttributeRegistry::global();
    let mut entry = account();

    let mut lock = Modifications::new();
    lock.set_enum(names::ZIMBRA_ACCOUNT_STATUS, AccountStatus::Locked)
        .unset(names::ZIMBRA_PREF_COMPOSE_FORMAT);
    lock.validate(registry).expect("valid modifications");
    entry.apply(&lock);

    let status: AccountStatus = entry
        .try_get_enum(names::ZIMBRA_ACCOUNT_STATUS)
        .expect("valid stored value")
        .expect("status is set");
    assert!(status.is(AccountStatus::Locked));
    assert!(!entry.has_attr(names::ZIMBRA_PREF_COMPOSE_FORMAT));

    let mut reactivate = Modifications::new();
    reactivate.set(names::ZIMBRA_ACCOUNT_STATUS, AccountStatus::Active.to_string());
    reactivate.validate(registry).expect("valid modifications");
    entry.apply(&reactivate);
    assert_eq!(entry.get_attr(names::ZIMBRA_ACCOUNT_STATUS), Some("active"));
}

#[test]
fn rejects_values_outside_the_enum() {
    let registry = AttributeRegistry::global();

    let mut mods = Modifications::new();
    mods.set(names::ZIMBRA_ACCOUNT_STATUS, "banned");
    assert_invalid_request!(mods.validate(registry));

    match mods.validate(registry) {
        Err(ProvisioningError::InvalidRequest(invalid)) => {
            assert_eq!(invalid.value, "banned");
            assert_eq!(
                invalid.to_string(),
                "invalid value: banned, valid values: [active, maintenance, locked, closed, lockout, pending]"
            );
        }
        other => panic!("Expected InvalidRequest, got {other:?}"),
    }
}

#[test]
fn every_bound_attribute_rejects_foreign_values() {
    let registry = AttributeRegistry::global();
    for (attr, definition) in registry.enum_attributes() {
        for wire in definition.wire_values() {
            assert!(registry.validate_value(&attr.name, wire).is_ok());
        }
        assert_invalid_request!(registry.validate_value(&attr.name, "__not_a_real_value__"));
    }
}

#[test]
fn entries_serialize_as_plain_attribute_maps() {
    let entry = Entry::new().with_attr(names::ZIMBRA_MAIL_MODE, "both");
    let json = serde_json::to_value(&entry).expect("serialize");
    assert_eq!(json["zimbraMailMode"][0], "both");

    let back: Entry = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, entry);
}
