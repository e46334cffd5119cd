//! Tests for the string-backed enumerations and their shared parser.

use super::*;
use crate::error::InvalidValue;
use std::collections::HashSet;
use std::fmt::Debug;

fn assert_round_trip<E: StringEnum + Debug>() {
    for variant in E::VARIANTS {
        assert_eq!(E::parse(variant.as_str()), Ok(*variant));
    }
    assert_eq!(E::VARIANTS.len(), E::DEFINITION.len());
}

#[test]
fn test_account_status_active() {
    let status = AccountStatus::parse("active").expect("active is declared");
    assert_eq!(status, AccountStatus::Active);
    assert_eq!(status.as_str(), "active");
    assert_eq!(status.to_string(), "active");
}

#[test]
fn test_account_status_rejects_unknown() {
    let err = AccountStatus::parse("banned").unwrap_err();
    assert_eq!(err.type_name, "AccountStatus");
    assert_eq!(err.value, "banned");
    assert_eq!(
        err.valid_values,
        vec!["active", "maintenance", "locked", "closed", "lockout", "pending"]
    );
    assert_eq!(
        err.to_string(),
        "invalid value: banned, valid values: [active, maintenance, locked, closed, lockout, pending]"
    );
}

#[test]
fn test_reserved_word_variants() {
    let lookup = MtaLmtpHostLookup::parse("native").expect("native is declared");
    assert_eq!(lookup, MtaLmtpHostLookup::Native);
    assert_eq!(lookup.as_str(), "native");

    let visibility = PrefCalendarApptVisibility::parse("public").expect("public is declared");
    assert_eq!(visibility, PrefCalendarApptVisibility::Public);
    assert!(PrefCalendarApptVisibility::parse("Public").is_err());

    assert_eq!(
        PrefGetMailAction::parse("default"),
        Ok(PrefGetMailAction::Default)
    );
}

#[test]
fn test_divergent_wire_values() {
    assert_eq!(BackupMode::parse("Auto-Grouped"), Ok(BackupMode::AutoGrouped));
    assert!(BackupMode::parse("Auto_Grouped").is_err());
    assert!(BackupMode::parse("AutoGrouped").is_err());
    assert_eq!(BackupMode::AutoGrouped.symbolic_name(), "AutoGrouped");

    assert_eq!(
        MailReferMode::parse("reverse-proxied"),
        Ok(MailReferMode::ReverseProxied)
    );
    assert!(MailReferMode::parse("reverse_proxied").is_err());
}

#[test]
fn test_exact_match_only() {
    assert!(AccountStatus::parse("Active").is_err());
    assert!(AccountStatus::parse("ACTIVE").is_err());
    assert!(AccountStatus::parse(" active").is_err());
    assert!(AccountStatus::parse("active\n").is_err());
    assert!(AccountStatus::parse("activ").is_err());
    assert!(TableMaintenanceOperation::parse("optimize").is_err());
    assert_eq!(
        TableMaintenanceOperation::parse("OPTIMIZE"),
        Ok(TableMaintenanceOperation::Optimize)
    );
}

#[test]
fn test_is_predicate() {
    let mode = MailMode::Https;
    assert!(mode.is(MailMode::Https));
    assert!(!mode.is(MailMode::Http));
}

#[test]
fn test_mail_mode_accepted_values() {
    let accepted: HashSet<_> = MailMode::valid_values().into_iter().collect();
    let expected: HashSet<_> = ["http", "https", "both", "mixed", "redirect"]
        .into_iter()
        .collect();
    assert_eq!(accepted, expected);
}

#[test]
fn test_from_str_and_display() {
    let level: ReverseProxyLogLevel = "crit".parse().expect("crit is declared");
    assert_eq!(level, ReverseProxyLogLevel::Crit);
    assert_eq!(format!("{level}"), "crit");

    let err: InvalidValue = "fatal".parse::<ReverseProxyLogLevel>().unwrap_err();
    assert_eq!(err.valid_values.len(), 6);
}

#[test]
fn test_serde_uses_wire_values() {
    let json = serde_json::to_string(&BackupMode::AutoGrouped).expect("serialize");
    assert_eq!(json, "\"Auto-Grouped\"");

    let parsed: ClusterType = serde_json::from_str("\"RedHat\"").expect("deserialize");
    assert_eq!(parsed, ClusterType::RedHat);

    let err = serde_json::from_str::<ClusterType>("\"redhat\"").unwrap_err();
    assert!(err.to_string().contains("invalid value: redhat"));
}

#[test]
fn test_untyped_parse_matches_typed() {
    let definition = definition("DataSourceConnectionType").expect("declared");
    let variant = definition.parse("tls_if_available").expect("declared value");
    assert_eq!(variant.symbolic_name, "TlsIfAvailable");
    assert_eq!(
        DataSourceConnectionType::parse("tls_if_available")
            .expect("declared value")
            .variant(),
        variant
    );
    assert!(definition.accepts("cleartext"));
    assert!(!definition.accepts("plain"));
    assert_eq!(
        definition.parse("plain").unwrap_err(),
        DataSourceConnectionType::parse("plain").unwrap_err()
    );
}

#[test]
fn test_definition_lookup() {
    assert!(definition("AccountStatus").is_some());
    assert!(definition("accountStatus").is_none());
    assert!(definition("NoSuchEnum").is_none());
    assert_eq!(all().len(), 46);
}

#[test]
fn test_definitions_are_well_formed() {
    let mut type_names = HashSet::new();
    for definition in all() {
        assert!(type_names.insert(definition.type_name));
        assert!(!definition.is_empty(), "{} has no variants", definition.type_name);

        let wire: HashSet<_> = definition.wire_values().collect();
        assert_eq!(wire.len(), definition.len(), "{}", definition.type_name);

        let symbols: HashSet<_> = definition.variants.iter().map(|v| v.symbolic_name).collect();
        assert_eq!(symbols.len(), definition.len(), "{}", definition.type_name);
    }
    let mut sorted: Vec<_> = all().iter().map(|d| d.type_name.to_lowercase()).collect();
    sorted.sort();
    let declared: Vec<_> = all().iter().map(|d| d.type_name.to_lowercase()).collect();
    assert_eq!(sorted, declared);
}

#[test]
fn test_rejection_reports_full_list() {
    for definition in all() {
        for input in ["", " ", "__not_a_real_value__"] {
            let err = definition.parse(input).unwrap_err();
            assert_eq!(err.value, input);
            assert_eq!(err.type_name, definition.type_name);
            assert_eq!(err.valid_values.len(), definition.len());
        }
    }
}

#[test]
fn test_case_transforms_rejected() {
    for definition in all() {
        for wire in definition.wire_values() {
            for transformed in [wire.to_uppercase(), wire.to_lowercase()] {
                if transformed == wire {
                    continue;
                }
                assert_eq!(
                    definition.accepts(&transformed),
                    definition.wire_values().any(|w| w == transformed),
                    "{}: {transformed}",
                    definition.type_name
                );
            }
        }
    }
}

#[test]
fn test_every_enum_round_trips() {
    assert_round_trip::<AccountCalendarUserType>();
    assert_round_trip::<AccountStatus>();
    assert_round_trip::<BackupMode>();
    assert_round_trip::<CalendarCompatibilityMode>();
    assert_round_trip::<CalResType>();
    assert_round_trip::<ClusterType>();
    assert_round_trip::<DataSourceConnectionType>();
    assert_round_trip::<DomainStatus>();
    assert_round_trip::<DomainType>();
    assert_round_trip::<FreebusyExchangeAuthScheme>();
    assert_round_trip::<GalLdapAuthMech>();
    assert_round_trip::<GalMode>();
    assert_round_trip::<GalStatus>();
    assert_round_trip::<GalSyncLdapAuthMech>();
    assert_round_trip::<GalTokenizeAutoCompleteKey>();
    assert_round_trip::<GalTokenizeSearchKey>();
    assert_round_trip::<GalType>();
    assert_round_trip::<IMService>();
    assert_round_trip::<MailMode>();
    assert_round_trip::<MailReferMode>();
    assert_round_trip::<MailStatus>();
    assert_round_trip::<MtaLmtpHostLookup>();
    assert_round_trip::<MtaTlsSecurityLevel>();
    assert_round_trip::<PrefCalendarApptVisibility>();
    assert_round_trip::<PrefCalendarInitialView>();
    assert_round_trip::<PrefClientType>();
    assert_round_trip::<PrefComposeFormat>();
    assert_round_trip::<PrefContactsInitialView>();
    assert_round_trip::<PrefConversationOrder>();
    assert_round_trip::<PrefConvReadingPaneLocation>();
    assert_round_trip::<PrefDedupeMessagesSentToSelf>();
    assert_round_trip::<PrefForwardIncludeOriginalText>();
    assert_round_trip::<PrefForwardReplyFormat>();
    assert_round_trip::<PrefGetMailAction>();
    assert_round_trip::<PrefGroupMailBy>();
    assert_round_trip::<PrefIMIdleStatus>();
    assert_round_trip::<PrefMailSelectAfterDelete>();
    assert_round_trip::<PrefMailSendReadReceipts>();
    assert_round_trip::<PrefMailSignatureStyle>();
    assert_round_trip::<PrefReadingPaneLocation>();
    assert_round_trip::<PrefReplyIncludeOriginalText>();
    assert_round_trip::<ReverseProxyImapStartTlsMode>();
    assert_round_trip::<ReverseProxyLogLevel>();
    assert_round_trip::<ReverseProxyMailMode>();
    assert_round_trip::<ReverseProxyPop3StartTlsMode>();
    assert_round_trip::<TableMaintenanceOperation>();
}
