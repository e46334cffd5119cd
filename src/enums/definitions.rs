//! The closed enumerations stored as provisioning attribute values.
//!
//! Mirrors the `enumType` bindings of `attrs/catalog.json` and must be kept
//! in sync with it by hand. Variant order is the order reported in
//! `InvalidValue` errors.

use super::{EnumDefinition, StringEnum};

string_enum! {
    /// Values of `zimbraAccountCalendarUserType`.
    pub enum AccountCalendarUserType {
        Resource => "RESOURCE",
        User => "USER",
    }
}

string_enum! {
    /// Values of `zimbraAccountStatus`.
    pub enum AccountStatus {
        Active => "active",
        Maintenance => "maintenance",
        Locked => "locked",
        Closed => "closed",
        Lockout => "lockout",
        Pending => "pending",
    }
}

string_enum! {
    /// Values of `zimbraBackupMode`.
    pub enum BackupMode {
        Standard => "Standard",
        AutoGrouped => "Auto-Grouped",
    }
}

string_enum! {
    /// Values of `zimbraCalendarCompatibilityMode`.
    pub enum CalendarCompatibilityMode {
        Standard => "standard",
        Exchange => "exchange",
    }
}

string_enum! {
    /// Values of `zimbraCalResType`.
    pub enum CalResType {
        Equipment => "Equipment",
        Location => "Location",
    }
}

string_enum! {
    /// Values of `zimbraClusterType`.
    pub enum ClusterType {
        Veritas => "Veritas",
        RedHat => "RedHat",
        None => "none",
    }
}

string_enum! {
    /// Values of `zimbraDataSourceConnectionType`.
    pub enum DataSourceConnectionType {
        TlsIfAvailable => "tls_if_available",
        Tls => "tls",
        Ssl => "ssl",
        Cleartext => "cleartext",
    }
}

string_enum! {
    /// Values of `zimbraDomainStatus`.
    pub enum DomainStatus {
        Maintenance => "maintenance",
        Active => "active",
        Closed => "closed",
        Locked => "locked",
        Suspended => "suspended",
        Shutdown => "shutdown",
    }
}

string_enum! {
    /// Values of `zimbraDomainType`.
    pub enum DomainType {
        Alias => "alias",
        Local => "local",
    }
}

string_enum! {
    /// Values of `zimbraFreebusyExchangeAuthScheme`.
    pub enum FreebusyExchangeAuthScheme {
        Form => "form",
        Basic => "basic",
    }
}

string_enum! {
    /// Values of `zimbraGalLdapAuthMech`.
    pub enum GalLdapAuthMech {
        Simple => "simple",
        Kerberos5 => "kerberos5",
        None => "none",
    }
}

string_enum! {
    /// Values of `zimbraGalMode`.
    pub enum GalMode {
        Both => "both",
        Ldap => "ldap",
        Zimbra => "zimbra",
    }
}

string_enum! {
    /// Values of `zimbraGalStatus`.
    pub enum GalStatus {
        Enabled => "enabled",
        Disabled => "disabled",
    }
}

string_enum! {
    /// Values of `zimbraGalSyncLdapAuthMech`.
    pub enum GalSyncLdapAuthMech {
        Simple => "simple",
        Kerberos5 => "kerberos5",
        None => "none",
    }
}

string_enum! {
    /// Values of `zimbraGalTokenizeAutoCompleteKey`.
    pub enum GalTokenizeAutoCompleteKey {
        Or => "or",
        And => "and",
    }
}

string_enum! {
    /// Values of `zimbraGalTokenizeSearchKey`.
    pub enum GalTokenizeSearchKey {
        Or => "or",
        And => "and",
    }
}

string_enum! {
    /// Values of `zimbraGalType`.
    pub enum GalType {
        Ldap => "ldap",
        Zimbra => "zimbra",
    }
}

string_enum! {
    /// Values of `zimbraIMService`.
    pub enum IMService {
        Zimbra => "zimbra",
        Yahoo => "yahoo",
    }
}

string_enum! {
    /// Values of `zimbraMailMode`.
    pub enum MailMode {
        Https => "https",
        Both => "both",
        Http => "http",
        Mixed => "mixed",
        Redirect => "redirect",
    }
}

string_enum! {
    /// Values of `zimbraMailReferMode`.
    pub enum MailReferMode {
        ReverseProxied => "reverse-proxied",
        Wronghost => "wronghost",
        Always => "always",
    }
}

string_enum! {
    /// Values of `zimbraMailStatus`.
    pub enum MailStatus {
        Enabled => "enabled",
        Disabled => "disabled",
    }
}

string_enum! {
    /// Lookup mode for LMTP next-hop hosts; not bound to a catalog attribute.
    pub enum MtaLmtpHostLookup {
        Dns => "dns",
        Native => "native",
    }
}

string_enum! {
    /// Values of `zimbraMtaTlsSecurityLevel`.
    pub enum MtaTlsSecurityLevel {
        May => "may",
        None => "none",
    }
}

string_enum! {
    /// Values of `zimbraPrefCalendarApptVisibility`.
    pub enum PrefCalendarApptVisibility {
        Public => "public",
        Private => "private",
    }
}

string_enum! {
    /// Values of `zimbraPrefCalendarInitialView`.
    pub enum PrefCalendarInitialView {
        WorkWeek => "workWeek",
        Schedule => "schedule",
        Month => "month",
        List => "list",
        Day => "day",
        Week => "week",
    }
}

string_enum! {
    /// Values of `zimbraPrefClientType`.
    pub enum PrefClientType {
        Standard => "standard",
        Advanced => "advanced",
    }
}

string_enum! {
    /// Values of `zimbraPrefComposeFormat`.
    pub enum PrefComposeFormat {
        Text => "text",
        Html => "html",
    }
}

string_enum! {
    /// Values of `zimbraPrefContactsInitialView`.
    pub enum PrefContactsInitialView {
        List => "list",
        Cards => "cards",
    }
}

string_enum! {
    /// Values of `zimbraPrefConversationOrder`.
    pub enum PrefConversationOrder {
        DateDesc => "dateDesc",
        DateAsc => "dateAsc",
    }
}

string_enum! {
    /// Values of `zimbraPrefConvReadingPaneLocation`.
    pub enum PrefConvReadingPaneLocation {
        Bottom => "bottom",
        Off => "off",
        Right => "right",
    }
}

string_enum! {
    /// Values of `zimbraPrefDedupeMessagesSentToSelf`.
    pub enum PrefDedupeMessagesSentToSelf {
        SecondCopyifOnToOrCC => "secondCopyifOnToOrCC",
        DedupeNone => "dedupeNone",
        DedupeAll => "dedupeAll",
    }
}

string_enum! {
    /// Values of `zimbraPrefForwardIncludeOriginalText`.
    pub enum PrefForwardIncludeOriginalText {
        IncludeBodyWithPrefix => "includeBodyWithPrefix",
        IncludeBodyOnly => "includeBodyOnly",
        IncludeBody => "includeBody",
        IncludeAsAttachment => "includeAsAttachment",
        IncludeBodyAndHeaders => "includeBodyAndHeaders",
        IncludeBodyAndHeadersWithPrefix => "includeBodyAndHeadersWithPrefix",
    }
}

string_enum! {
    /// Values of `zimbraPrefForwardReplyFormat`.
    pub enum PrefForwardReplyFormat {
        Text => "text",
        Html => "html",
        Same => "same",
    }
}

string_enum! {
    /// Values of `zimbraPrefGetMailAction`.
    pub enum PrefGetMailAction {
        Update => "update",
        Default => "default",
    }
}

string_enum! {
    /// Values of `zimbraPrefGroupMailBy`.
    pub enum PrefGroupMailBy {
        Message => "message",
        Conversation => "conversation",
    }
}

string_enum! {
    /// Values of `zimbraPrefIMIdleStatus`.
    pub enum PrefIMIdleStatus {
        Away => "away",
        Invisible => "invisible",
        Xa => "xa",
        Offline => "offline",
    }
}

string_enum! {
    /// Values of `zimbraPrefMailSelectAfterDelete`.
    pub enum PrefMailSelectAfterDelete {
        Previous => "previous",
        Adaptive => "adaptive",
        Next => "next",
    }
}

string_enum! {
    /// Values of `zimbraPrefMailSendReadReceipts`.
    pub enum PrefMailSendReadReceipts {
        Never => "never",
        Prompt => "prompt",
        Always => "always",
    }
}

string_enum! {
    /// Values of `zimbraPrefMailSignatureStyle`.
    pub enum PrefMailSignatureStyle {
        Outlook => "outlook",
        Internet => "internet",
    }
}

string_enum! {
    /// Values of `zimbraPrefReadingPaneLocation`.
    pub enum PrefReadingPaneLocation {
        Bottom => "bottom",
        Off => "off",
        Right => "right",
    }
}

string_enum! {
    /// Values of `zimbraPrefReplyIncludeOriginalText`.
    pub enum PrefReplyIncludeOriginalText {
        IncludeBodyWithPrefix => "includeBodyWithPrefix",
        IncludeSmartAndHeadersWithPrefix => "includeSmartAndHeadersWithPrefix",
        IncludeBodyOnly => "includeBodyOnly",
        IncludeBody => "includeBody",
        IncludeSmartWithPrefix => "includeSmartWithPrefix",
        IncludeAsAttachment => "includeAsAttachment",
        IncludeSmart => "includeSmart",
        IncludeBodyAndHeaders => "includeBodyAndHeaders",
        IncludeSmartAndHeaders => "includeSmartAndHeaders",
        IncludeNone => "includeNone",
        IncludeBodyAndHeadersWithPrefix => "includeBodyAndHeadersWithPrefix",
    }
}

string_enum! {
    /// Values of `zimbraReverseProxyImapStartTlsMode`.
    pub enum ReverseProxyImapStartTlsMode {
        Off => "off",
        On => "on",
        Only => "only",
    }
}

string_enum! {
    /// Values of `zimbraReverseProxyLogLevel`.
    pub enum ReverseProxyLogLevel {
        Warn => "warn",
        Error => "error",
        Crit => "crit",
        Debug => "debug",
        Notice => "notice",
        Info => "info",
    }
}

string_enum! {
    /// Values of `zimbraReverseProxyMailMode`.
    pub enum ReverseProxyMailMode {
        Https => "https",
        Both => "both",
        Http => "http",
        Mixed => "mixed",
        Redirect => "redirect",
    }
}

string_enum! {
    /// Values of `zimbraReverseProxyPop3StartTlsMode`.
    pub enum ReverseProxyPop3StartTlsMode {
        Off => "off",
        On => "on",
        Only => "only",
    }
}

string_enum! {
    /// Values of `zimbraTableMaintenanceOperation`.
    pub enum TableMaintenanceOperation {
        Optimize => "OPTIMIZE",
        Analyze => "ANALYZE",
    }
}

/// Every enumeration declared in this module, sorted case-insensitively by
/// type name.
pub(crate) static ALL: &[EnumDefinition] = &[
    AccountCalendarUserType::DEFINITION,
    AccountStatus::DEFINITION,
    BackupMode::DEFINITION,
    CalendarCompatibilityMode::DEFINITION,
    CalResType::DEFINITION,
    ClusterType::DEFINITION,
    DataSourceConnectionType::DEFINITION,
    DomainStatus::DEFINITION,
    DomainType::DEFINITION,
    FreebusyExchangeAuthScheme::DEFINITION,
    GalLdapAuthMech::DEFINITION,
    GalMode::DEFINITION,
    GalStatus::DEFINITION,
    GalSyncLdapAuthMech::DEFINITION,
    GalTokenizeAutoCompleteKey::DEFINITION,
    GalTokenizeSearchKey::DEFINITION,
    GalType::DEFINITION,
    IMService::DEFINITION,
    MailMode::DEFINITION,
    MailReferMode::DEFINITION,
    MailStatus::DEFINITION,
    MtaLmtpHostLookup::DEFINITION,
    MtaTlsSecurityLevel::DEFINITION,
    PrefCalendarApptVisibility::DEFINITION,
    PrefCalendarInitialView::DEFINITION,
    PrefClientType::DEFINITION,
    PrefComposeFormat::DEFINITION,
    PrefContactsInitialView::DEFINITION,
    PrefConversationOrder::DEFINITION,
    PrefConvReadingPaneLocation::DEFINITION,
    PrefDedupeMessagesSentToSelf::DEFINITION,
    PrefForwardIncludeOriginalText::DEFINITION,
    PrefForwardReplyFormat::DEFINITION,
    PrefGetMailAction::DEFINITION,
    PrefGroupMailBy::DEFINITION,
    PrefIMIdleStatus::DEFINITION,
    PrefMailSelectAfterDelete::DEFINITION,
    PrefMailSendReadReceipts::DEFINITION,
    PrefMailSignatureStyle::DEFINITION,
    PrefReadingPaneLocation::DEFINITION,
    PrefReplyIncludeOriginalText::DEFINITION,
    ReverseProxyImapStartTlsMode::DEFINITION,
    ReverseProxyLogLevel::DEFINITION,
    ReverseProxyMailMode::DEFINITION,
    ReverseProxyPop3StartTlsMode::DEFINITION,
    TableMaintenanceOperation::DEFINITION,
];
