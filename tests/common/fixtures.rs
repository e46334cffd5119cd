//! Wire-format fixtures that must stay bit-exact.

/// `(enum type, wire values in declaration order)` for enums whose exact
/// accepted set is part of the external contract.
pub fn contract_enums() -> Vec<(&'static str, Vec<&'static str>)> {
    vec![
        (
            "AccountStatus",
            vec!["active", "maintenance", "locked", "closed", "lockout", "pending"],
        ),
        ("MailMode", vec!["https", "both", "http", "mixed", "redirect"]),
        ("BackupMode", vec!["Standard", "Auto-Grouped"]),
        ("MtaLmtpHostLookup", vec!["dns", "native"]),
        ("PrefCalendarApptVisibility", vec!["public", "private"]),
        ("MtaTlsSecurityLevel", vec!["may", "none"]),
        ("MailReferMode", vec!["reverse-proxied", "wronghost", "always"]),
        ("AccountCalendarUserType", vec!["RESOURCE", "USER"]),
    ]
}

/// `(symbolic name, wire value)` pairs where the two spellings differ by
/// more than the leading capital.
pub fn divergent_variants() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        ("BackupMode", "AutoGrouped", "Auto-Grouped"),
        ("MailReferMode", "ReverseProxied", "reverse-proxied"),
        ("DataSourceConnectionType", "TlsIfAvailable", "tls_if_available"),
        ("AccountCalendarUserType", "Resource", "RESOURCE"),
        ("TableMaintenanceOperation", "Analyze", "ANALYZE"),
    ]
}

/// A minimal account entry as it would be read from the directory.
pub fn account_attrs() -> Vec<(&'static str, &'static str)> {
    vec![
        ("zimbraAccountStatus", "active"),
        ("zimbraMailHost", "mail.example.com"),
        ("zimbraPrefCalendarApptVisibility", "private"),
        ("zimbraPrefComposeFormat", "HTML"),
    ]
}
