//! Attribute names as stored in the directory.
//!
//! Mirrors the `name` and `symbol` fields of `catalog.json` and must be
//! kept in sync with it by hand.

pub const AMAVIS_BAD_HEADER_ADMIN: &str = "amavisBadHeaderAdmin";
pub const AMAVIS_BAD_HEADER_LOVER: &str = "amavisBadHeaderLover";
pub const AMAVIS_BAD_HEADER_QUARANTINE_TO: &str = "amavisBadHeaderQuarantineTo";
pub const AMAVIS_BANNED_ADMIN: &str = "amavisBannedAdmin";
pub const AMAVIS_BANNED_FILES_LOVER: &str = "amavisBannedFilesLover";
pub const AMAVIS_BANNED_QUARANTINE_TO: &str = "amavisBannedQuarantineTo";
pub const AMAVIS_BANNED_RULE_NAMES: &str = "amavisBannedRuleNames";
pub const AMAVIS_BLACKLIST_SENDER: &str = "amavisBlacklistSender";
pub const AMAVIS_BYPASS_BANNED_CHECKS: &str = "amavisBypassBannedChecks";
pub const AMAVIS_BYPASS_HEADER_CHECKS: &str = "amavisBypassHeaderChecks";
pub const AMAVIS_BYPASS_SPAM_CHECKS: &str = "amavisBypassSpamChecks";
pub const AMAVIS_BYPASS_VIRUS_CHECKS: &str = "amavisBypassVirusChecks";
pub const AMAVIS_LOCAL: &str = "amavisLocal";
pub const AMAVIS_MESSAGE_SIZE_LIMIT: &str = "amavisMessageSizeLimit";
pub const AMAVIS_NEW_VIRUS_ADMIN: &str = "amavisNewVirusAdmin";
pub const AMAVIS_SPAM_ADMIN: &str = "amavisSpamAdmin";
pub const AMAVIS_SPAM_KILL_LEVEL: &str = "amavisSpamKillLevel";
pub const AMAVIS_SPAM_LOVER: &str = "amavisSpamLover";
pub const AMAVIS_SPAM_MODIFIES_SUBJ: &str = "amavisSpamModifiesSubj";
pub const AMAVIS_SPAM_QUARANTINE_TO: &str = "amavisSpamQuarantineTo";
pub const AMAVIS_SPAM_TAG2_LEVEL: &str = "amavisSpamTag2Level";
pub const AMAVIS_SPAM_TAG_LEVEL: &str = "amavisSpamTagLevel";
pub const AMAVIS_VIRUS_ADMIN: &str = "amavisVirusAdmin";
pub const AMAVIS_VIRUS_LOVER: &str = "amavisVirusLover";
pub const AMAVIS_VIRUS_QUARANTINE_TO: &str = "amavisVirusQuarantineTo";
pub const AMAVIS_WARN_BAD_HEADER_RECIP: &str = "amavisWarnBadHeaderRecip";
pub const AMAVIS_WARN_BANNED_RECIP: &str = "amavisWarnBannedRecip";
pub const AMAVIS_WARN_VIRUS_RECIP: &str = "amavisWarnVirusRecip";
pub const AMAVIS_WHITELIST_SENDER: &str = "amavisWhitelistSender";
pub const C: &str = "c";
pub const CN: &str = "cn";
pub const CO: &str = "co";
pub const COMPANY: &str = "company";
pub const DESCRIPTION: &str = "description";
pub const DISPLAY_NAME: &str = "displayName";
pub const GIVEN_NAME: &str = "givenName";
pub const GN: &str = "gn";
pub const HOME_PHONE: &str = "homePhone";
pub const INITIALS: &str = "initials";
pub const L: &str = "l";
pub const MAIL: &str = "mail";
pub const MOBILE: &str = "mobile";
pub const O: &str = "o";
pub const OBJECT_CLASS: &str = "objectClass";
pub const OU: &str = "ou";
pub const PAGER: &str = "pager";
pub const PHYSICAL_DELIVERY_OFFICE_NAME: &str = "physicalDeliveryOfficeName";
pub const POSTAL_ADDRESS: &str = "postalAddress";
pub const POSTAL_CODE: &str = "postalCode";
pub const SN: &str = "sn";
pub const ST: &str = "st";
pub const STREET: &str = "street";
pub const STREET_ADDRESS: &str = "streetAddress";
pub const TELEPHONE_NUMBER: &str = "telephoneNumber";
pub const TITLE: &str = "title";
pub const UID: &str = "uid";
pub const USER_PASSWORD: &str = "userPassword";
pub const ZIMBRA_ACCOUNT_CALENDAR_USER_TYPE: &str = "zimbraAccountCalendarUserType";
/// Deprecated since 5.0.
pub const ZIMBRA_ACCOUNT_CLIENT_ATTR: &str = "zimbraAccountClientAttr";
pub const ZIMBRA_ACCOUNT_EXTRA_OBJECT_CLASS: &str = "zimbraAccountExtraObjectClass";
pub const ZIMBRA_ACCOUNT_STATUS: &str = "zimbraAccountStatus";
pub const ZIMBRA_ACE: &str = "zimbraACE";
pub const ZIMBRA_ADMIN_AUTH_TOKEN_LIFETIME: &str = "zimbraAdminAuthTokenLifetime";
pub const ZIMBRA_ADMIN_CONSOLE_CATCH_ALL_ADDRESS_ENABLED: &str = "zimbraAdminConsoleCatchAllAddressEnabled";
pub const ZIMBRA_ADMIN_CONSOLE_DNS_CHECK_ENABLED: &str = "zimbraAdminConsoleDNSCheckEnabled";
pub const ZIMBRA_ADMIN_CONSOLE_LDAP_AUTH_ENABLED: &str = "zimbraAdminConsoleLDAPAuthEnabled";
pub const ZIMBRA_ADMIN_CONSOLE_LOGIN_MESSAGE: &str = "zimbraAdminConsoleLoginMessage";
pub const ZIMBRA_ADMIN_CONSOLE_LOGIN_URL: &str = "zimbraAdminConsoleLoginURL";
pub const ZIMBRA_ADMIN_CONSOLE_LOGOUT_URL: &str = "zimbraAdminConsoleLogoutURL";
pub const ZIMBRA_ADMIN_CONSOLE_SKIN_ENABLED: &str = "zimbraAdminConsoleSkinEnabled";
pub const ZIMBRA_ADMIN_CONSOLE_UI_COMPONENTS: &str = "zimbraAdminConsoleUIComponents";
pub const ZIMBRA_ADMIN_EXT_DISABLE_UI_UNDEPLOY: &str = "zimbraAdminExtDisableUIUndeploy";
pub const ZIMBRA_ADMIN_PORT: &str = "zimbraAdminPort";
pub const ZIMBRA_ADMIN_SAVED_SEARCHES: &str = "zimbraAdminSavedSearches";
pub const ZIMBRA_ADMIN_URL: &str = "zimbraAdminURL";
pub const ZIMBRA_ALIAS_TARGET_ID: &str = "zimbraAliasTargetId";
pub const ZIMBRA_ALLOW_ANY_FROM_ADDRESS: &str = "zimbraAllowAnyFromAddress";
pub const ZIMBRA_ALLOW_FROM_ADDRESS: &str = "zimbraAllowFromAddress";
pub const ZIMBRA_ALLOW_NON_LDH_CHARS_IN_DOMAIN: &str = "zimbraAllowNonLDHCharsInDomain";
pub const ZIMBRA_ARCHIVE_ACCOUNT: &str = "zimbraArchiveAccount";
pub const ZIMBRA_ARCHIVE_ACCOUNT_DATE_TEMPLATE: &str = "zimbraArchiveAccountDateTemplate";
pub const ZIMBRA_ARCHIVE_ACCOUNT_NAME_TEMPLATE: &str = "zimbraArchiveAccountNameTemplate";
pub const ZIMBRA_ARCHIVE_MAIL_FROM: &str = "zimbraArchiveMailFrom";
pub const ZIMBRA_ATTACHMENTS_BLOCKED: &str = "zimbraAttachmentsBlocked";
pub const ZIMBRA_ATTACHMENTS_INDEXED_TEXT_LIMIT: &str = "zimbraAttachmentsIndexedTextLimit";
pub const ZIMBRA_ATTACHMENTS_INDEXING_ENABLED: &str = "zimbraAttachmentsIndexingEnabled";
pub const ZIMBRA_ATTACHMENTS_SCAN_CLASS: &str = "zimbraAttachmentsScanClass";
pub const ZIMBRA_ATTACHMENTS_SCAN_ENABLED: &str = "zimbraAttachmentsScanEnabled";
pub const ZIMBRA_ATTACHMENTS_SCAN_URL: &str = "zimbraAttachmentsScanURL";
pub const ZIMBRA_ATTACHMENTS_VIEW_IN_HTML_ONLY: &str = "zimbraAttachmentsViewInHtmlOnly";
pub const ZIMBRA_AUTH_FALLBACK_TO_LOCAL: &str = "zimbraAuthFallbackToLocal";
pub const ZIMBRA_AUTH_KERBEROS5_REALM: &str = "zimbraAuthKerberos5Realm";
pub const ZIMBRA_AUTH_LDAP_BIND_DN: &str = "zimbraAuthLdapBindDn";
pub const ZIMBRA_AUTH_LDAP_EXTERNAL_DN: &str = "zimbraAuthLdapExternalDn";
pub const ZIMBRA_AUTH_LDAP_SEARCH_BASE: &str = "zimbraAuthLdapSearchBase";
pub const ZIMBRA_AUTH_LDAP_SEARCH_BIND_DN: &str = "zimbraAuthLdapSearchBindDn";
pub const ZIMBRA_AUTH_LDAP_SEARCH_BIND_PASSWORD: &str = "zimbraAuthLdapSearchBindPassword";
pub const ZIMBRA_AUTH_LDAP_SEARCH_FILTER: &str = "zimbraAuthLdapSearchFilter";
pub const ZIMBRA_AUTH_LDAP_START_TLS_ENABLED: &str = "zimbraAuthLdapStartTlsEnabled";
pub const ZIMBRA_AUTH_LDAP_URL: &str = "zimbraAuthLdapURL";
pub const ZIMBRA_AUTH_MECH: &str = "zimbraAuthMech";
pub const ZIMBRA_AUTH_TOKEN_KEY: &str = "zimbraAuthTokenKey";
pub const ZIMBRA_AUTH_TOKEN_LIFETIME: &str = "zimbraAuthTokenLifetime";
pub const ZIMBRA_AUTH_TOKEN_VALIDITY_VALUE: &str = "zimbraAuthTokenValidityValue";
pub const ZIMBRA_AUTH_TOKEN_VALIDITY_VALUE_ENABLED: &str = "zimbraAuthTokenValidityValueEnabled";
pub const ZIMBRA_AUTO_SUBMITTED_NULL_RETURN_PATH: &str = "zimbraAutoSubmittedNullReturnPath";
pub const ZIMBRA_AVAILABLE_LOCALE: &str = "zimbraAvailableLocale";
pub const ZIMBRA_AVAILABLE_SKIN: &str = "zimbraAvailableSkin";
pub const ZIMBRA_BACKUP_AUTO_GROUPED_INTERVAL: &str = "zimbraBackupAutoGroupedInterval";
pub const ZIMBRA_BACKUP_AUTO_GROUPED_NUM_GROUPS: &str = "zimbraBackupAutoGroupedNumGroups";
pub const ZIMBRA_BACKUP_AUTO_GROUPED_THROTTLED: &str = "zimbraBackupAutoGroupedThrottled";
pub const ZIMBRA_BACKUP_MODE: &str = "zimbraBackupMode";
pub const ZIMBRA_BACKUP_REPORT_EMAIL_RECIPIENTS: &str = "zimbraBackupReportEmailRecipients";
pub const ZIMBRA_BACKUP_REPORT_EMAIL_SENDER: &str = "zimbraBackupReportEmailSender";
pub const ZIMBRA_BACKUP_REPORT_EMAIL_SUBJECT_PREFIX: &str = "zimbraBackupReportEmailSubjectPrefix";
pub const ZIMBRA_BACKUP_SKIP_BLOBS: &str = "zimbraBackupSkipBlobs";
pub const ZIMBRA_BACKUP_SKIP_HSM_BLOBS: &str = "zimbraBackupSkipHsmBlobs";
pub const ZIMBRA_BACKUP_SKIP_SEARCH_INDEX: &str = "zimbraBackupSkipSearchIndex";
pub const ZIMBRA_BACKUP_TARGET: &str = "zimbraBackupTarget";
pub const ZIMBRA_BATCHED_INDEXING_SIZE: &str = "zimbraBatchedIndexingSize";
pub const ZIMBRA_CALENDAR_CAL_DAV_ALTERNATE_CALENDAR_HOME_SET: &str = "zimbraCalendarCalDavAlternateCalendarHomeSet";
pub const ZIMBRA_CALENDAR_CAL_DAV_CLEAR_TEXT_PASSWORD_ENABLED: &str = "zimbraCalendarCalDavClearTextPasswordEnabled";
pub const ZIMBRA_CALENDAR_CAL_DAV_DEFAULT_CALENDAR_ID: &str = "zimbraCalendarCalDavDefaultCalendarId";
pub const ZIMBRA_CALENDAR_CAL_DAV_DISABLE_FREEBUSY: &str = "zimbraCalendarCalDavDisableFreebusy";
pub const ZIMBRA_CALENDAR_CAL_DAV_DISABLE_SCHEDULING: &str = "zimbraCalendarCalDavDisableScheduling";
pub const ZIMBRA_CALENDAR_CAL_DAV_SHARED_FOLDER_CACHE_DURATION: &str = "zimbraCalendarCalDavSharedFolderCacheDuration";
pub const ZIMBRA_CALENDAR_CAL_DAV_SYNC_END: &str = "zimbraCalendarCalDavSyncEnd";
pub const ZIMBRA_CALENDAR_CAL_DAV_SYNC_START: &str = "zimbraCalendarCalDavSyncStart";
pub const ZIMBRA_CALENDAR_CAL_DAV_USE_DISTINCT_APPOINTMENT_AND_TO_DO_COLLECTION: &str = "zimbraCalendarCalDavUseDistinctAppointmentAndToDoCollection";
pub const ZIMBRA_CALENDAR_COMPATIBILITY_MODE: &str = "zimbraCalendarCompatibilityMode";
pub const ZIMBRA_CALENDAR_MAX_REVISIONS: &str = "zimbraCalendarMaxRevisions";
pub const ZIMBRA_CALENDAR_RECURRENCE_DAILY_MAX_DAYS: &str = "zimbraCalendarRecurrenceDailyMaxDays";
pub const ZIMBRA_CALENDAR_RECURRENCE_MAX_INSTANCES: &str = "zimbraCalendarRecurrenceMaxInstances";
pub const ZIMBRA_CALENDAR_RECURRENCE_MONTHLY_MAX_MONTHS: &str = "zimbraCalendarRecurrenceMonthlyMaxMonths";
pub const ZIMBRA_CALENDAR_RECURRENCE_OTHER_FREQUENCY_MAX_YEARS: &str = "zimbraCalendarRecurrenceOtherFrequencyMaxYears";
pub const ZIMBRA_CALENDAR_RECURRENCE_WEEKLY_MAX_WEEKS: &str = "zimbraCalendarRecurrenceWeeklyMaxWeeks";
pub const ZIMBRA_CALENDAR_RECURRENCE_YEARLY_MAX_YEARS: &str = "zimbraCalendarRecurrenceYearlyMaxYears";
pub const ZIMBRA_CALENDAR_RESOURCE_DOUBLE_BOOKING_ALLOWED: &str = "zimbraCalendarResourceDoubleBookingAllowed";
pub const ZIMBRA_CALENDAR_RESOURCE_EXTRA_OBJECT_CLASS: &str = "zimbraCalendarResourceExtraObjectClass";
pub const ZIMBRA_CALENDAR_SHOW_RESOURCE_TABS: &str = "zimbraCalendarShowResourceTabs";
pub const ZIMBRA_CAL_RES_AUTO_ACCEPT_DECLINE: &str = "zimbraCalResAutoAcceptDecline";
pub const ZIMBRA_CAL_RES_AUTO_DECLINE_IF_BUSY: &str = "zimbraCalResAutoDeclineIfBusy";
pub const ZIMBRA_CAL_RES_AUTO_DECLINE_RECURRING: &str = "zimbraCalResAutoDeclineRecurring";
pub const ZIMBRA_CAL_RES_BUILDING: &str = "zimbraCalResBuilding";
pub const ZIMBRA_CAL_RES_CAPACITY: &str = "zimbraCalResCapacity";
pub const ZIMBRA_CAL_RES_CONTACT_EMAIL: &str = "zimbraCalResContactEmail";
pub const ZIMBRA_CAL_RES_CONTACT_NAME: &str = "zimbraCalResContactName";
pub const ZIMBRA_CAL_RES_CONTACT_PHONE: &str = "zimbraCalResContactPhone";
pub const ZIMBRA_CAL_RES_FLOOR: &str = "zimbraCalResFloor";
pub const ZIMBRA_CAL_RES_LOCATION_DISPLAY_NAME: &str = "zimbraCalResLocationDisplayName";
pub const ZIMBRA_CAL_RES_MAX_NUM_CONFLICTS_ALLOWED: &str = "zimbraCalResMaxNumConflictsAllowed";
pub const ZIMBRA_CAL_RES_MAX_PERCENT_CONFLICTS_ALLOWED: &str = "zimbraCalResMaxPercentConflictsAllowed";
pub const ZIMBRA_CAL_RES_ROOM: &str = "zimbraCalResRoom";
pub const ZIMBRA_CAL_RES_SITE: &str = "zimbraCalResSite";
pub const ZIMBRA_CAL_RES_TYPE: &str = "zimbraCalResType";
pub const ZIMBRA_CERT_AUTHORITY_CERT_SELF_SIGNED: &str = "zimbraCertAuthorityCertSelfSigned";
pub const ZIMBRA_CERT_AUTHORITY_KEY_SELF_SIGNED: &str = "zimbraCertAuthorityKeySelfSigned";
pub const ZIMBRA_CHANGE_PASSWORD_URL: &str = "zimbraChangePasswordURL";
pub const ZIMBRA_CHILD_ACCOUNT: &str = "zimbraChildAccount";
/// Deprecated since 5.0.0.
pub const ZIMBRA_CHILD_VISIBLE_ACCOUNT: &str = "zimbraChildVisibleAccount";
pub const ZIMBRA_CLUSTER_TYPE: &str = "zimbraClusterType";
pub const ZIMBRA_COMPONENT_AVAILABLE: &str = "zimbraComponentAvailable";
pub const ZIMBRA_CONSTRAINT: &str = "zimbraConstraint";
/// Deprecated since 6.0.7.
pub const ZIMBRA_CONTACT_AUTO_COMPLETE_EMAIL_FIELDS: &str = "zimbraContactAutoCompleteEmailFields";
pub const ZIMBRA_CONTACT_AUTO_COMPLETE_MAX_RESULTS: &str = "zimbraContactAutoCompleteMaxResults";
pub const ZIMBRA_CONTACT_EMAIL_FIELDS: &str = "zimbraContactEmailFields";
pub const ZIMBRA_CONTACT_HIDDEN_ATTRIBUTES: &str = "zimbraContactHiddenAttributes";
pub const ZIMBRA_CONTACT_MAX_NUM_ENTRIES: &str = "zimbraContactMaxNumEntries";
/// Deprecated since 6.0.6.
pub const ZIMBRA_CONTACT_RANKING_TABLE_REFRESH_INTERVAL: &str = "zimbraContactRankingTableRefreshInterval";
pub const ZIMBRA_CONTACT_RANKING_TABLE_SIZE: &str = "zimbraContactRankingTableSize";
pub const ZIMBRA_CONVERTD_URL: &str = "zimbraConvertdURL";
pub const ZIMBRA_COS_EXTRA_OBJECT_CLASS: &str = "zimbraCosExtraObjectClass";
pub const ZIMBRA_COS_ID: &str = "zimbraCOSId";
/// Deprecated since 5.0.
pub const ZIMBRA_COS_INHERITED_ATTR: &str = "zimbraCOSInheritedAttr";
pub const ZIMBRA_CREATE_TIMESTAMP: &str = "zimbraCreateTimestamp";
pub const ZIMBRA_CUSTOMER_CARE_TIER: &str = "zimbraCustomerCareTier";
pub const ZIMBRA_DATABASE_SLOW_SQL_THRESHOLD: &str = "zimbraDatabaseSlowSqlThreshold";
pub const ZIMBRA_DATA_SOURCE_ATTRIBUTE: &str = "zimbraDataSourceAttribute";
pub const ZIMBRA_DATA_SOURCE_CALDAV_POLLING_INTERVAL: &str = "zimbraDataSourceCaldavPollingInterval";
pub const ZIMBRA_DATA_SOURCE_CALENDAR_POLLING_INTERVAL: &str = "zimbraDataSourceCalendarPollingInterval";
pub const ZIMBRA_DATA_SOURCE_CONNECTION_TYPE: &str = "zimbraDataSourceConnectionType";
pub const ZIMBRA_DATA_SOURCE_CONNECT_TIMEOUT: &str = "zimbraDataSourceConnectTimeout";
pub const ZIMBRA_DATA_SOURCE_DOMAIN: &str = "zimbraDataSourceDomain";
pub const ZIMBRA_DATA_SOURCE_EMAIL_ADDRESS: &str = "zimbraDataSourceEmailAddress";
pub const ZIMBRA_DATA_SOURCE_ENABLED: &str = "zimbraDataSourceEnabled";
pub const ZIMBRA_DATA_SOURCE_ENABLE_TRACE: &str = "zimbraDataSourceEnableTrace";
pub const ZIMBRA_DATA_SOURCE_FAILING_SINCE: &str = "zimbraDataSourceFailingSince";
pub const ZIMBRA_DATA_SOURCE_FOLDER_ID: &str = "zimbraDataSourceFolderId";
pub const ZIMBRA_DATA_SOURCE_GAL_POLLING_INTERVAL: &str = "zimbraDataSourceGalPollingInterval";
pub const ZIMBRA_DATA_SOURCE_HOST: &str = "zimbraDataSourceHost";
pub const ZIMBRA_DATA_SOURCE_ID: &str = "zimbraDataSourceId";
pub const ZIMBRA_DATA_SOURCE_IMAP_POLLING_INTERVAL: &str = "zimbraDataSourceImapPollingInterval";
pub const ZIMBRA_DATA_SOURCE_IMPORT_CLASS_NAME: &str = "zimbraDataSourceImportClassName";
pub const ZIMBRA_DATA_SOURCE_LAST_ERROR: &str = "zimbraDataSourceLastError";
pub const ZIMBRA_DATA_SOURCE_LEAVE_ON_SERVER: &str = "zimbraDataSourceLeaveOnServer";
pub const ZIMBRA_DATA_SOURCE_LIVE_POLLING_INTERVAL: &str = "zimbraDataSourceLivePollingInterval";
pub const ZIMBRA_DATA_SOURCE_MAX_NUM_ENTRIES: &str = "zimbraDataSourceMaxNumEntries";
pub const ZIMBRA_DATA_SOURCE_MAX_TRACE_SIZE: &str = "zimbraDataSourceMaxTraceSize";
pub const ZIMBRA_DATA_SOURCE_MIN_POLLING_INTERVAL: &str = "zimbraDataSourceMinPollingInterval";
pub const ZIMBRA_DATA_SOURCE_NAME: &str = "zimbraDataSourceName";
pub const ZIMBRA_DATA_SOURCE_PASSWORD: &str = "zimbraDataSourcePassword";
pub const ZIMBRA_DATA_SOURCE_POLLING_INTERVAL: &str = "zimbraDataSourcePollingInterval";
pub const ZIMBRA_DATA_SOURCE_POP3_POLLING_INTERVAL: &str = "zimbraDataSourcePop3PollingInterval";
pub const ZIMBRA_DATA_SOURCE_PORT: &str = "zimbraDataSourcePort";
pub const ZIMBRA_DATA_SOURCE_READ_TIMEOUT: &str = "zimbraDataSourceReadTimeout";
pub const ZIMBRA_DATA_SOURCE_RSS_POLLING_INTERVAL: &str = "zimbraDataSourceRssPollingInterval";
pub const ZIMBRA_DATA_SOURCE_TYPE: &str = "zimbraDataSourceType";
pub const ZIMBRA_DATA_SOURCE_USE_ADDRESS_FOR_FORWARD_REPLY: &str = "zimbraDataSourceUseAddressForForwardReply";
pub const ZIMBRA_DATA_SOURCE_USERNAME: &str = "zimbraDataSourceUsername";
pub const ZIMBRA_DATA_SOURCE_YAB_POLLING_INTERVAL: &str = "zimbraDataSourceYabPollingInterval";
pub const ZIMBRA_DEBUG_INFO: &str = "zimbraDebugInfo";
pub const ZIMBRA_DEFAULT_DOMAIN_NAME: &str = "zimbraDefaultDomainName";
pub const ZIMBRA_DISTRIBUTION_LIST_SEND_SHARE_MESSAGE_FROM_ADDRESS: &str = "zimbraDistributionListSendShareMessageFromAddress";
pub const ZIMBRA_DISTRIBUTION_LIST_SEND_SHARE_MESSAGE_TO_NEW_MEMBERS: &str = "zimbraDistributionListSendShareMessageToNewMembers";
pub const ZIMBRA_DNS_CHECK_HOSTNAME: &str = "zimbraDNSCheckHostname";
pub const ZIMBRA_DOMAIN_ADMIN_MAX_MAIL_QUOTA: &str = "zimbraDomainAdminMaxMailQuota";
/// Deprecated since 5.0.
pub const ZIMBRA_DOMAIN_ADMIN_MODIFIABLE_ATTR: &str = "zimbraDomainAdminModifiableAttr";
pub const ZIMBRA_DOMAIN_ALIAS_TARGET_ID: &str = "zimbraDomainAliasTargetId";
pub const ZIMBRA_DOMAIN_COS_MAX_ACCOUNTS: &str = "zimbraDomainCOSMaxAccounts";
pub const ZIMBRA_DOMAIN_DEFAULT_COS_ID: &str = "zimbraDomainDefaultCOSId";
pub const ZIMBRA_DOMAIN_EXTRA_OBJECT_CLASS: &str = "zimbraDomainExtraObjectClass";
pub const ZIMBRA_DOMAIN_FEATURE_MAX_ACCOUNTS: &str = "zimbraDomainFeatureMaxAccounts";
pub const ZIMBRA_DOMAIN_ID: &str = "zimbraDomainId";
/// Deprecated since 5.0.
pub const ZIMBRA_DOMAIN_INHERITED_ATTR: &str = "zimbraDomainInheritedAttr";
pub const ZIMBRA_DOMAIN_MANDATORY_MAIL_SIGNATURE_ENABLED: &str = "zimbraDomainMandatoryMailSignatureEnabled";
pub const ZIMBRA_DOMAIN_MANDATORY_MAIL_SIGNATURE_HTML: &str = "zimbraDomainMandatoryMailSignatureHTML";
pub const ZIMBRA_DOMAIN_MANDATORY_MAIL_SIGNATURE_TEXT: &str = "zimbraDomainMandatoryMailSignatureText";
pub const ZIMBRA_DOMAIN_MAX_ACCOUNTS: &str = "zimbraDomainMaxAccounts";
pub const ZIMBRA_DOMAIN_NAME: &str = "zimbraDomainName";
pub const ZIMBRA_DOMAIN_RENAME_INFO: &str = "zimbraDomainRenameInfo";
pub const ZIMBRA_DOMAIN_STATUS: &str = "zimbraDomainStatus";
pub const ZIMBRA_DOMAIN_TYPE: &str = "zimbraDomainType";
pub const ZIMBRA_ERROR_REPORT_URL: &str = "zimbraErrorReportUrl";
pub const ZIMBRA_EXCLUDE_FROM_CMB_SEARCH: &str = "zimbraExcludeFromCMBSearch";
pub const ZIMBRA_EXTERNAL_IMAP_HOSTNAME: &str = "zimbraExternalImapHostname";
pub const ZIMBRA_EXTERNAL_IMAP_PORT: &str = "zimbraExternalImapPort";
pub const ZIMBRA_EXTERNAL_IMAP_SSL_HOSTNAME: &str = "zimbraExternalImapSSLHostname";
pub const ZIMBRA_EXTERNAL_IMAP_SSL_PORT: &str = "zimbraExternalImapSSLPort";
pub const ZIMBRA_EXTERNAL_POP3_HOSTNAME: &str = "zimbraExternalPop3Hostname";
pub const ZIMBRA_EXTERNAL_POP3_PORT: &str = "zimbraExternalPop3Port";
pub const ZIMBRA_EXTERNAL_POP3_SSL_HOSTNAME: &str = "zimbraExternalPop3SSLHostname";
pub const ZIMBRA_EXTERNAL_POP3_SSL_PORT: &str = "zimbraExternalPop3SSLPort";
pub const ZIMBRA_FEATURE_ADVANCED_SEARCH_ENABLED: &str = "zimbraFeatureAdvancedSearchEnabled";
pub const ZIMBRA_FEATURE_BRIEFCASE_DOCS_ENABLED: &str = "zimbraFeatureBriefcaseDocsEnabled";
pub const ZIMBRA_FEATURE_BRIEFCASES_ENABLED: &str = "zimbraFeatureBriefcasesEnabled";
pub const ZIMBRA_FEATURE_BRIEFCASE_SLIDES_ENABLED: &str = "zimbraFeatureBriefcaseSlidesEnabled";
pub const ZIMBRA_FEATURE_BRIEFCASE_SPREADSHEET_ENABLED: &str = "zimbraFeatureBriefcaseSpreadsheetEnabled";
pub const ZIMBRA_FEATURE_CALENDAR_ENABLED: &str = "zimbraFeatureCalendarEnabled";
pub const ZIMBRA_FEATURE_CALENDAR_UPSELL_ENABLED: &str = "zimbraFeatureCalendarUpsellEnabled";
pub const ZIMBRA_FEATURE_CALENDAR_UPSELL_URL: &str = "zimbraFeatureCalendarUpsellURL";
pub const ZIMBRA_FEATURE_CHANGE_PASSWORD_ENABLED: &str = "zimbraFeatureChangePasswordEnabled";
pub const ZIMBRA_FEATURE_COMPOSE_IN_NEW_WINDOW_ENABLED: &str = "zimbraFeatureComposeInNewWindowEnabled";
pub const ZIMBRA_FEATURE_CONFIRMATION_PAGE_ENABLED: &str = "zimbraFeatureConfirmationPageEnabled";
pub const ZIMBRA_FEATURE_CONTACTS_ENABLED: &str = "zimbraFeatureContactsEnabled";
pub const ZIMBRA_FEATURE_CONTACTS_UPSELL_ENABLED: &str = "zimbraFeatureContactsUpsellEnabled";
pub const ZIMBRA_FEATURE_CONTACTS_UPSELL_URL: &str = "zimbraFeatureContactsUpsellURL";
pub const ZIMBRA_FEATURE_CONVERSATIONS_ENABLED: &str = "zimbraFeatureConversationsEnabled";
pub const ZIMBRA_FEATURE_DISCARD_IN_FILTERS_ENABLED: &str = "zimbraFeatureDiscardInFiltersEnabled";
pub const ZIMBRA_FEATURE_FILTERS_ENABLED: &str = "zimbraFeatureFiltersEnabled";
pub const ZIMBRA_FEATURE_FLAGGING_ENABLED: &str = "zimbraFeatureFlaggingEnabled";
pub const ZIMBRA_FEATURE_GAL_AUTO_COMPLETE_ENABLED: &str = "zimbraFeatureGalAutoCompleteEnabled";
pub const ZIMBRA_FEATURE_GAL_ENABLED: &str = "zimbraFeatureGalEnabled";
pub const ZIMBRA_FEATURE_GAL_SYNC_ENABLED: &str = "zimbraFeatureGalSyncEnabled";
pub const ZIMBRA_FEATURE_GROUP_CALENDAR_ENABLED: &str = "zimbraFeatureGroupCalendarEnabled";
pub const ZIMBRA_FEATURE_HTML_COMPOSE_ENABLED: &str = "zimbraFeatureHtmlComposeEnabled";
pub const ZIMBRA_FEATURE_IDENTITIES_ENABLED: &str = "zimbraFeatureIdentitiesEnabled";
pub const ZIMBRA_FEATURE_IMAP_DATA_SOURCE_ENABLED: &str = "zimbraFeatureImapDataSourceEnabled";
pub const ZIMBRA_FEATURE_IM_ENABLED: &str = "zimbraFeatureIMEnabled";
pub const ZIMBRA_FEATURE_IMPORT_EXPORT_FOLDER_ENABLED: &str = "zimbraFeatureImportExportFolderEnabled";
pub const ZIMBRA_FEATURE_INITIAL_SEARCH_PREFERENCE_ENABLED: &str = "zimbraFeatureInitialSearchPreferenceEnabled";
pub const ZIMBRA_FEATURE_INSTANT_NOTIFY: &str = "zimbraFeatureInstantNotify";
pub const ZIMBRA_FEATURE_MAIL_ENABLED: &str = "zimbraFeatureMailEnabled";
pub const ZIMBRA_FEATURE_MAIL_FORWARDING_ENABLED: &str = "zimbraFeatureMailForwardingEnabled";
pub const ZIMBRA_FEATURE_MAIL_FORWARDING_IN_FILTERS_ENABLED: &str = "zimbraFeatureMailForwardingInFiltersEnabled";
/// Deprecated since 5.0.
pub const ZIMBRA_FEATURE_MAIL_POLLING_INTERVAL_PREFERENCE_ENABLED: &str = "zimbraFeatureMailPollingIntervalPreferenceEnabled";
pub const ZIMBRA_FEATURE_MAIL_PRIORITY_ENABLED: &str = "zimbraFeatureMailPriorityEnabled";
pub const ZIMBRA_FEATURE_MAIL_UPSELL_ENABLED: &str = "zimbraFeatureMailUpsellEnabled";
pub const ZIMBRA_FEATURE_MAIL_UPSELL_URL: &str = "zimbraFeatureMailUpsellURL";
pub const ZIMBRA_FEATURE_MANAGE_ZIMLETS: &str = "zimbraFeatureManageZimlets";
pub const ZIMBRA_FEATURE_MOBILE_POLICY_ENABLED: &str = "zimbraFeatureMobilePolicyEnabled";
pub const ZIMBRA_FEATURE_MOBILE_SYNC_ENABLED: &str = "zimbraFeatureMobileSyncEnabled";
pub const ZIMBRA_FEATURE_NEW_ADDR_BOOK_ENABLED: &str = "zimbraFeatureNewAddrBookEnabled";
pub const ZIMBRA_FEATURE_NEW_MAIL_NOTIFICATION_ENABLED: &str = "zimbraFeatureNewMailNotificationEnabled";
pub const ZIMBRA_FEATURE_NOTEBOOK_ENABLED: &str = "zimbraFeatureNotebookEnabled";
pub const ZIMBRA_FEATURE_OPEN_MAIL_IN_NEW_WINDOW_ENABLED: &str = "zimbraFeatureOpenMailInNewWindowEnabled";
pub const ZIMBRA_FEATURE_OPTIONS_ENABLED: &str = "zimbraFeatureOptionsEnabled";
pub const ZIMBRA_FEATURE_OUT_OF_OFFICE_REPLY_ENABLED: &str = "zimbraFeatureOutOfOfficeReplyEnabled";
pub const ZIMBRA_FEATURE_POP3_DATA_SOURCE_ENABLED: &str = "zimbraFeaturePop3DataSourceEnabled";
pub const ZIMBRA_FEATURE_PORTAL_ENABLED: &str = "zimbraFeaturePortalEnabled";
pub const ZIMBRA_FEATURE_READ_RECEIPTS_ENABLED: &str = "zimbraFeatureReadReceiptsEnabled";
pub const ZIMBRA_FEATURE_SAVED_SEARCHES_ENABLED: &str = "zimbraFeatureSavedSearchesEnabled";
pub const ZIMBRA_FEATURE_SHARING_ENABLED: &str = "zimbraFeatureSharingEnabled";
/// Deprecated since 6.0.0_GA.
pub const ZIMBRA_FEATURE_SHORTCUT_ALIASES_ENABLED: &str = "zimbraFeatureShortcutAliasesEnabled";
pub const ZIMBRA_FEATURE_SIGNATURES_ENABLED: &str = "zimbraFeatureSignaturesEnabled";
pub const ZIMBRA_FEATURE_SKIN_CHANGE_ENABLED: &str = "zimbraFeatureSkinChangeEnabled";
pub const ZIMBRA_FEATURE_TAGGING_ENABLED: &str = "zimbraFeatureTaggingEnabled";
pub const ZIMBRA_FEATURE_TASKS_ENABLED: &str = "zimbraFeatureTasksEnabled";
pub const ZIMBRA_FEATURE_VIEW_IN_HTML_ENABLED: &str = "zimbraFeatureViewInHtmlEnabled";
pub const ZIMBRA_FEATURE_VOICE_CHANGE_PIN_ENABLED: &str = "zimbraFeatureVoiceChangePinEnabled";
pub const ZIMBRA_FEATURE_VOICE_ENABLED: &str = "zimbraFeatureVoiceEnabled";
pub const ZIMBRA_FEATURE_VOICE_UPSELL_ENABLED: &str = "zimbraFeatureVoiceUpsellEnabled";
pub const ZIMBRA_FEATURE_VOICE_UPSELL_URL: &str = "zimbraFeatureVoiceUpsellURL";
/// Deprecated since 6.0.0_GA.
pub const ZIMBRA_FEATURE_WEB_SEARCH_ENABLED: &str = "zimbraFeatureWebSearchEnabled";
pub const ZIMBRA_FEATURE_ZIMBRA_ASSISTANT_ENABLED: &str = "zimbraFeatureZimbraAssistantEnabled";
pub const ZIMBRA_FILE_UPLOAD_MAX_SIZE: &str = "zimbraFileUploadMaxSize";
pub const ZIMBRA_FOREIGN_PRINCIPAL: &str = "zimbraForeignPrincipal";
pub const ZIMBRA_FREEBUSY_EXCHANGE_AUTH_PASSWORD: &str = "zimbraFreebusyExchangeAuthPassword";
pub const ZIMBRA_FREEBUSY_EXCHANGE_AUTH_SCHEME: &str = "zimbraFreebusyExchangeAuthScheme";
pub const ZIMBRA_FREEBUSY_EXCHANGE_AUTH_USERNAME: &str = "zimbraFreebusyExchangeAuthUsername";
pub const ZIMBRA_FREEBUSY_EXCHANGE_CACHED_INTERVAL: &str = "zimbraFreebusyExchangeCachedInterval";
pub const ZIMBRA_FREEBUSY_EXCHANGE_CACHED_INTERVAL_START: &str = "zimbraFreebusyExchangeCachedIntervalStart";
pub const ZIMBRA_FREEBUSY_EXCHANGE_URL: &str = "zimbraFreebusyExchangeURL";
pub const ZIMBRA_FREEBUSY_EXCHANGE_USER_ORG: &str = "zimbraFreebusyExchangeUserOrg";
pub const ZIMBRA_FREEBUSY_LOCAL_MAILBOX_NOT_ACTIVE: &str = "zimbraFreebusyLocalMailboxNotActive";
pub const ZIMBRA_FREEBUSY_PROPAGATION_RETRY_INTERVAL: &str = "zimbraFreebusyPropagationRetryInterval";
pub const ZIMBRA_GAL_ACCOUNT_ID: &str = "zimbraGalAccountId";
pub const ZIMBRA_GAL_ALWAYS_INCLUDE_LOCAL_CALENDAR_RESOURCES: &str = "zimbraGalAlwaysIncludeLocalCalendarResources";
pub const ZIMBRA_GAL_AUTO_COMPLETE_LDAP_FILTER: &str = "zimbraGalAutoCompleteLdapFilter";
pub const ZIMBRA_GAL_INTERNAL_SEARCH_BASE: &str = "zimbraGalInternalSearchBase";
pub const ZIMBRA_GAL_LAST_FAILED_SYNC_TIMESTAMP: &str = "zimbraGalLastFailedSyncTimestamp";
pub const ZIMBRA_GAL_LAST_SUCCESSFUL_SYNC_TIMESTAMP: &str = "zimbraGalLastSuccessfulSyncTimestamp";
pub const ZIMBRA_GAL_LDAP_ATTR_MAP: &str = "zimbraGalLdapAttrMap";
pub const ZIMBRA_GAL_LDAP_AUTH_MECH: &str = "zimbraGalLdapAuthMech";
pub const ZIMBRA_GAL_LDAP_BIND_DN: &str = "zimbraGalLdapBindDn";
pub const ZIMBRA_GAL_LDAP_BIND_PASSWORD: &str = "zimbraGalLdapBindPassword";
pub const ZIMBRA_GAL_LDAP_FILTER: &str = "zimbraGalLdapFilter";
pub const ZIMBRA_GAL_LDAP_FILTER_DEF: &str = "zimbraGalLdapFilterDef";
pub const ZIMBRA_GAL_LDAP_KERBEROS5_KEYTAB: &str = "zimbraGalLdapKerberos5Keytab";
pub const ZIMBRA_GAL_LDAP_KERBEROS5_PRINCIPAL: &str = "zimbraGalLdapKerberos5Principal";
pub const ZIMBRA_GAL_LDAP_PAGE_SIZE: &str = "zimbraGalLdapPageSize";
pub const ZIMBRA_GAL_LDAP_SEARCH_BASE: &str = "zimbraGalLdapSearchBase";
pub const ZIMBRA_GAL_LDAP_START_TLS_ENABLED: &str = "zimbraGalLdapStartTlsEnabled";
pub const ZIMBRA_GAL_LDAP_URL: &str = "zimbraGalLdapURL";
pub const ZIMBRA_GAL_MAX_RESULTS: &str = "zimbraGalMaxResults";
pub const ZIMBRA_GAL_MODE: &str = "zimbraGalMode";
pub const ZIMBRA_GAL_STATUS: &str = "zimbraGalStatus";
pub const ZIMBRA_GAL_SYNC_ACCOUNT_BASED_AUTO_COMPLETE_ENABLED: &str = "zimbraGalSyncAccountBasedAutoCompleteEnabled";
pub const ZIMBRA_GAL_SYNC_INTERNAL_SEARCH_BASE: &str = "zimbraGalSyncInternalSearchBase";
pub const ZIMBRA_GAL_SYNC_LDAP_AUTH_MECH: &str = "zimbraGalSyncLdapAuthMech";
pub const ZIMBRA_GAL_SYNC_LDAP_BIND_DN: &str = "zimbraGalSyncLdapBindDn";
pub const ZIMBRA_GAL_SYNC_LDAP_BIND_PASSWORD: &str = "zimbraGalSyncLdapBindPassword";
pub const ZIMBRA_GAL_SYNC_LDAP_FILTER: &str = "zimbraGalSyncLdapFilter";
pub const ZIMBRA_GAL_SYNC_LDAP_KERBEROS5_KEYTAB: &str = "zimbraGalSyncLdapKerberos5Keytab";
pub const ZIMBRA_GAL_SYNC_LDAP_KERBEROS5_PRINCIPAL: &str = "zimbraGalSyncLdapKerberos5Principal";
pub const ZIMBRA_GAL_SYNC_LDAP_PAGE_SIZE: &str = "zimbraGalSyncLdapPageSize";
pub const ZIMBRA_GAL_SYNC_LDAP_SEARCH_BASE: &str = "zimbraGalSyncLdapSearchBase";
pub const ZIMBRA_GAL_SYNC_LDAP_START_TLS_ENABLED: &str = "zimbraGalSyncLdapStartTlsEnabled";
pub const ZIMBRA_GAL_SYNC_LDAP_URL: &str = "zimbraGalSyncLdapURL";
pub const ZIMBRA_GAL_SYNC_TIMESTAMP_FORMAT: &str = "zimbraGalSyncTimestampFormat";
pub const ZIMBRA_GAL_TOKENIZE_AUTO_COMPLETE_KEY: &str = "zimbraGalTokenizeAutoCompleteKey";
pub const ZIMBRA_GAL_TOKENIZE_SEARCH_KEY: &str = "zimbraGalTokenizeSearchKey";
pub const ZIMBRA_GAL_TYPE: &str = "zimbraGalType";
/// Deprecated since 3.2.0.
pub const ZIMBRA_GROUP_ID: &str = "zimbraGroupId";
pub const ZIMBRA_HELP_ADMIN_URL: &str = "zimbraHelpAdminURL";
pub const ZIMBRA_HELP_ADVANCED_URL: &str = "zimbraHelpAdvancedURL";
pub const ZIMBRA_HELP_DELEGATED_URL: &str = "zimbraHelpDelegatedURL";
pub const ZIMBRA_HELP_STANDARD_URL: &str = "zimbraHelpStandardURL";
pub const ZIMBRA_HIDE_IN_GAL: &str = "zimbraHideInGal";
/// Deprecated since 6.0.0_BETA2.
pub const ZIMBRA_HSM_AGE: &str = "zimbraHsmAge";
pub const ZIMBRA_HSM_POLICY: &str = "zimbraHsmPolicy";
pub const ZIMBRA_HTTP_DEBUG_HANDLER_ENABLED: &str = "zimbraHttpDebugHandlerEnabled";
pub const ZIMBRA_HTTP_NUM_THREADS: &str = "zimbraHttpNumThreads";
pub const ZIMBRA_HTTP_PROXY_URL: &str = "zimbraHttpProxyURL";
/// Deprecated since 5.0.
pub const ZIMBRA_HTTP_SSL_NUM_THREADS: &str = "zimbraHttpSSLNumThreads";
pub const ZIMBRA_ID: &str = "zimbraId";
pub const ZIMBRA_IDENTITY_MAX_NUM_ENTRIES: &str = "zimbraIdentityMaxNumEntries";
pub const ZIMBRA_IMAP_ADVERTISED_NAME: &str = "zimbraImapAdvertisedName";
pub const ZIMBRA_IMAP_BIND_ADDRESS: &str = "zimbraImapBindAddress";
pub const ZIMBRA_IMAP_BIND_ON_STARTUP: &str = "zimbraImapBindOnStartup";
pub const ZIMBRA_IMAP_BIND_PORT: &str = "zimbraImapBindPort";
pub const ZIMBRA_IMAP_CLEARTEXT_LOGIN_ENABLED: &str = "zimbraImapCleartextLoginEnabled";
pub const ZIMBRA_IMAP_DISABLED_CAPABILITY: &str = "zimbraImapDisabledCapability";
pub const ZIMBRA_IMAP_ENABLED: &str = "zimbraImapEnabled";
pub const ZIMBRA_IMAP_EXPOSE_VERSION_ON_BANNER: &str = "zimbraImapExposeVersionOnBanner";
pub const ZIMBRA_IMAP_MAX_REQUEST_SIZE: &str = "zimbraImapMaxRequestSize";
pub const ZIMBRA_IMAP_NUM_THREADS: &str = "zimbraImapNumThreads";
pub const ZIMBRA_IMAP_PROXY_BIND_PORT: &str = "zimbraImapProxyBindPort";
pub const ZIMBRA_IMAP_SASL_GSSAPI_ENABLED: &str = "zimbraImapSaslGssapiEnabled";
pub const ZIMBRA_IMAP_SERVER_ENABLED: &str = "zimbraImapServerEnabled";
pub const ZIMBRA_IMAP_SHUTDOWN_GRACE_SECONDS: &str = "zimbraImapShutdownGraceSeconds";
pub const ZIMBRA_IMAP_SSL_BIND_ADDRESS: &str = "zimbraImapSSLBindAddress";
pub const ZIMBRA_IMAP_SSL_BIND_ON_STARTUP: &str = "zimbraImapSSLBindOnStartup";
pub const ZIMBRA_IMAP_SSL_BIND_PORT: &str = "zimbraImapSSLBindPort";
pub const ZIMBRA_IMAP_SSL_DISABLED_CAPABILITY: &str = "zimbraImapSSLDisabledCapability";
pub const ZIMBRA_IMAP_SSL_PROXY_BIND_PORT: &str = "zimbraImapSSLProxyBindPort";
pub const ZIMBRA_IMAP_SSL_SERVER_ENABLED: &str = "zimbraImapSSLServerEnabled";
pub const ZIMBRA_IM_AVAILABLE_INTEROP_GATEWAYS: &str = "zimbraIMAvailableInteropGateways";
pub const ZIMBRA_IM_BIND_ADDRESS: &str = "zimbraIMBindAddress";
/// Deprecated since 6.0.0_GA.
pub const ZIMBRA_IM_SERVICE: &str = "zimbraIMService";
/// Deprecated since 5.0.
pub const ZIMBRA_INSTALLED_SKIN: &str = "zimbraInstalledSkin";
pub const ZIMBRA_INTERCEPT_ADDRESS: &str = "zimbraInterceptAddress";
pub const ZIMBRA_INTERCEPT_BODY: &str = "zimbraInterceptBody";
pub const ZIMBRA_INTERCEPT_FROM: &str = "zimbraInterceptFrom";
pub const ZIMBRA_INTERCEPT_SEND_HEADERS_ONLY: &str = "zimbraInterceptSendHeadersOnly";
pub const ZIMBRA_INTERCEPT_SUBJECT: &str = "zimbraInterceptSubject";
pub const ZIMBRA_IS_ADMIN_ACCOUNT: &str = "zimbraIsAdminAccount";
pub const ZIMBRA_IS_ADMIN_GROUP: &str = "zimbraIsAdminGroup";
pub const ZIMBRA_IS_CUSTOMER_CARE_ACCOUNT: &str = "zimbraIsCustomerCareAccount";
pub const ZIMBRA_IS_DELEGATED_ADMIN_ACCOUNT: &str = "zimbraIsDelegatedAdminAccount";
pub const ZIMBRA_IS_DOMAIN_ADMIN_ACCOUNT: &str = "zimbraIsDomainAdminAccount";
pub const ZIMBRA_IS_MONITOR_HOST: &str = "zimbraIsMonitorHost";
pub const ZIMBRA_IS_SYSTEM_RESOURCE: &str = "zimbraIsSystemResource";
pub const ZIMBRA_JUNK_MESSAGES_INDEXING_ENABLED: &str = "zimbraJunkMessagesIndexingEnabled";
pub const ZIMBRA_LAST_LOGON_TIMESTAMP: &str = "zimbraLastLogonTimestamp";
pub const ZIMBRA_LAST_LOGON_TIMESTAMP_FREQUENCY: &str = "zimbraLastLogonTimestampFrequency";
pub const ZIMBRA_LMTP_ADVERTISED_NAME: &str = "zimbraLmtpAdvertisedName";
pub const ZIMBRA_LMTP_BIND_ADDRESS: &str = "zimbraLmtpBindAddress";
pub const ZIMBRA_LMTP_BIND_ON_STARTUP: &str = "zimbraLmtpBindOnStartup";
pub const ZIMBRA_LMTP_BIND_PORT: &str = "zimbraLmtpBindPort";
pub const ZIMBRA_LMTP_EXPOSE_VERSION_ON_BANNER: &str = "zimbraLmtpExposeVersionOnBanner";
pub const ZIMBRA_LMTP_NUM_THREADS: &str = "zimbraLmtpNumThreads";
pub const ZIMBRA_LMTP_PERMANENT_FAILURE_WHEN_OVER_QUOTA: &str = "zimbraLmtpPermanentFailureWhenOverQuota";
pub const ZIMBRA_LMTP_SERVER_ENABLED: &str = "zimbraLmtpServerEnabled";
pub const ZIMBRA_LMTP_SHUTDOWN_GRACE_SECONDS: &str = "zimbraLmtpShutdownGraceSeconds";
pub const ZIMBRA_LOCALE: &str = "zimbraLocale";
pub const ZIMBRA_LOG_HOSTNAME: &str = "zimbraLogHostname";
pub const ZIMBRA_LOG_RAW_LIFETIME: &str = "zimbraLogRawLifetime";
pub const ZIMBRA_LOG_SUMMARY_LIFETIME: &str = "zimbraLogSummaryLifetime";
pub const ZIMBRA_LOG_TO_SYSLOG: &str = "zimbraLogToSyslog";
pub const ZIMBRA_MAIL_ADDRESS: &str = "zimbraMailAddress";
pub const ZIMBRA_MAIL_ALIAS: &str = "zimbraMailAlias";
pub const ZIMBRA_MAIL_BLACKLIST_MAX_NUM_ENTRIES: &str = "zimbraMailBlacklistMaxNumEntries";
pub const ZIMBRA_MAILBOX_LOCATION_BEFORE_MOVE: &str = "zimbraMailboxLocationBeforeMove";
pub const ZIMBRA_MAILBOX_MOVE_SKIP_BLOBS: &str = "zimbraMailboxMoveSkipBlobs";
pub const ZIMBRA_MAILBOX_MOVE_SKIP_HSM_BLOBS: &str = "zimbraMailboxMoveSkipHsmBlobs";
pub const ZIMBRA_MAILBOX_MOVE_SKIP_SEARCH_INDEX: &str = "zimbraMailboxMoveSkipSearchIndex";
pub const ZIMBRA_MAIL_CANONICAL_ADDRESS: &str = "zimbraMailCanonicalAddress";
pub const ZIMBRA_MAIL_CATCH_ALL_ADDRESS: &str = "zimbraMailCatchAllAddress";
pub const ZIMBRA_MAIL_CATCH_ALL_CANONICAL_ADDRESS: &str = "zimbraMailCatchAllCanonicalAddress";
pub const ZIMBRA_MAIL_CATCH_ALL_FORWARDING_ADDRESS: &str = "zimbraMailCatchAllForwardingAddress";
pub const ZIMBRA_MAIL_CLEAR_TEXT_PASSWORD_ENABLED: &str = "zimbraMailClearTextPasswordEnabled";
pub const ZIMBRA_MAIL_CONTENT_MAX_SIZE: &str = "zimbraMailContentMaxSize";
pub const ZIMBRA_MAIL_DELIVERY_ADDRESS: &str = "zimbraMailDeliveryAddress";
pub const ZIMBRA_MAIL_DISK_STREAMING_THRESHOLD: &str = "zimbraMailDiskStreamingThreshold";
pub const ZIMBRA_MAIL_FILE_DESCRIPTOR_BUFFER_SIZE: &str = "zimbraMailFileDescriptorBufferSize";
pub const ZIMBRA_MAIL_FILE_DESCRIPTOR_CACHE_SIZE: &str = "zimbraMailFileDescriptorCacheSize";
pub const ZIMBRA_MAIL_FORWARDING_ADDRESS: &str = "zimbraMailForwardingAddress";
pub const ZIMBRA_MAIL_FORWARDING_ADDRESS_MAX_LENGTH: &str = "zimbraMailForwardingAddressMaxLength";
pub const ZIMBRA_MAIL_FORWARDING_ADDRESS_MAX_NUM_ADDRS: &str = "zimbraMailForwardingAddressMaxNumAddrs";
pub const ZIMBRA_MAIL_HOST: &str = "zimbraMailHost";
pub const ZIMBRA_MAIL_HOST_POOL: &str = "zimbraMailHostPool";
pub const ZIMBRA_MAIL_IDLE_SESSION_TIMEOUT: &str = "zimbraMailIdleSessionTimeout";
pub const ZIMBRA_MAIL_LAST_PURGED_MAILBOX_ID: &str = "zimbraMailLastPurgedMailboxId";
pub const ZIMBRA_MAIL_MESSAGE_LIFETIME: &str = "zimbraMailMessageLifetime";
pub const ZIMBRA_MAIL_MIN_POLLING_INTERVAL: &str = "zimbraMailMinPollingInterval";
pub const ZIMBRA_MAIL_MODE: &str = "zimbraMailMode";
pub const ZIMBRA_MAIL_PORT: &str = "zimbraMailPort";
pub const ZIMBRA_MAIL_PROXY_PORT: &str = "zimbraMailProxyPort";
pub const ZIMBRA_MAIL_PURGE_SLEEP_INTERVAL: &str = "zimbraMailPurgeSleepInterval";
pub const ZIMBRA_MAIL_PURGE_USE_CHANGE_DATE_FOR_TRASH: &str = "zimbraMailPurgeUseChangeDateForTrash";
pub const ZIMBRA_MAIL_QUOTA: &str = "zimbraMailQuota";
pub const ZIMBRA_MAIL_REDIRECT_SET_ENVELOPE_SENDER: &str = "zimbraMailRedirectSetEnvelopeSender";
pub const ZIMBRA_MAIL_REFER_MODE: &str = "zimbraMailReferMode";
pub const ZIMBRA_MAIL_SIEVE_SCRIPT: &str = "zimbraMailSieveScript";
pub const ZIMBRA_MAIL_SIGNATURE_MAX_LENGTH: &str = "zimbraMailSignatureMaxLength";
pub const ZIMBRA_MAIL_SPAM_LIFETIME: &str = "zimbraMailSpamLifetime";
pub const ZIMBRA_MAIL_SSL_PORT: &str = "zimbraMailSSLPort";
pub const ZIMBRA_MAIL_SSL_PROXY_PORT: &str = "zimbraMailSSLProxyPort";
pub const ZIMBRA_MAIL_STATUS: &str = "zimbraMailStatus";
pub const ZIMBRA_MAIL_TRANSPORT: &str = "zimbraMailTransport";
pub const ZIMBRA_MAIL_TRASH_LIFETIME: &str = "zimbraMailTrashLifetime";
pub const ZIMBRA_MAIL_TRUSTED_IP: &str = "zimbraMailTrustedIP";
/// Deprecated since 6.0.7.
pub const ZIMBRA_MAIL_UNCOMPRESSED_CACHE_MAX_BYTES: &str = "zimbraMailUncompressedCacheMaxBytes";
/// Deprecated since 6.0.7.
pub const ZIMBRA_MAIL_UNCOMPRESSED_CACHE_MAX_FILES: &str = "zimbraMailUncompressedCacheMaxFiles";
pub const ZIMBRA_MAIL_URL: &str = "zimbraMailURL";
pub const ZIMBRA_MAIL_USE_DIRECT_BUFFERS: &str = "zimbraMailUseDirectBuffers";
pub const ZIMBRA_MAIL_WHITELIST_MAX_NUM_ENTRIES: &str = "zimbraMailWhitelistMaxNumEntries";
pub const ZIMBRA_MAX_CONTACTS_PER_PAGE: &str = "zimbraMaxContactsPerPage";
pub const ZIMBRA_MAX_MAIL_ITEMS_PER_PAGE: &str = "zimbraMaxMailItemsPerPage";
pub const ZIMBRA_MAX_VOICE_ITEMS_PER_PAGE: &str = "zimbraMaxVoiceItemsPerPage";
/// Deprecated since 3.2.0.
pub const ZIMBRA_MEMBER_OF: &str = "zimbraMemberOf";
pub const ZIMBRA_MEMCACHED_BIND_ADDRESS: &str = "zimbraMemcachedBindAddress";
pub const ZIMBRA_MEMCACHED_BIND_PORT: &str = "zimbraMemcachedBindPort";
pub const ZIMBRA_MEMCACHED_CLIENT_BINARY_PROTOCOL_ENABLED: &str = "zimbraMemcachedClientBinaryProtocolEnabled";
pub const ZIMBRA_MEMCACHED_CLIENT_EXPIRY_SECONDS: &str = "zimbraMemcachedClientExpirySeconds";
pub const ZIMBRA_MEMCACHED_CLIENT_HASH_ALGORITHM: &str = "zimbraMemcachedClientHashAlgorithm";
pub const ZIMBRA_MEMCACHED_CLIENT_SERVER_LIST: &str = "zimbraMemcachedClientServerList";
pub const ZIMBRA_MEMCACHED_CLIENT_TIMEOUT_MILLIS: &str = "zimbraMemcachedClientTimeoutMillis";
pub const ZIMBRA_MESSAGE_CACHE_SIZE: &str = "zimbraMessageCacheSize";
pub const ZIMBRA_MESSAGE_ID_DEDUPE_CACHE_SIZE: &str = "zimbraMessageIdDedupeCacheSize";
pub const ZIMBRA_MIME_FILE_EXTENSION: &str = "zimbraMimeFileExtension";
pub const ZIMBRA_MIME_HANDLER_CLASS: &str = "zimbraMimeHandlerClass";
pub const ZIMBRA_MIME_HANDLER_EXTENSION: &str = "zimbraMimeHandlerExtension";
pub const ZIMBRA_MIME_INDEXING_ENABLED: &str = "zimbraMimeIndexingEnabled";
pub const ZIMBRA_MIME_PRIORITY: &str = "zimbraMimePriority";
pub const ZIMBRA_MIME_TYPE: &str = "zimbraMimeType";
pub const ZIMBRA_MOBILE_POLICY_ALLOW_NON_PROVISIONABLE_DEVICES: &str = "zimbraMobilePolicyAllowNonProvisionableDevices";
pub const ZIMBRA_MOBILE_POLICY_ALLOW_PARTIAL_PROVISIONING: &str = "zimbraMobilePolicyAllowPartialProvisioning";
pub const ZIMBRA_MOBILE_POLICY_ALLOW_SIMPLE_DEVICE_PASSWORD: &str = "zimbraMobilePolicyAllowSimpleDevicePassword";
pub const ZIMBRA_MOBILE_POLICY_ALPHANUMERIC_DEVICE_PASSWORD_REQUIRED: &str = "zimbraMobilePolicyAlphanumericDevicePasswordRequired";
pub const ZIMBRA_MOBILE_POLICY_DEVICE_ENCRYPTION_ENABLED: &str = "zimbraMobilePolicyDeviceEncryptionEnabled";
pub const ZIMBRA_MOBILE_POLICY_DEVICE_PASSWORD_ENABLED: &str = "zimbraMobilePolicyDevicePasswordEnabled";
pub const ZIMBRA_MOBILE_POLICY_DEVICE_PASSWORD_EXPIRATION: &str = "zimbraMobilePolicyDevicePasswordExpiration";
pub const ZIMBRA_MOBILE_POLICY_DEVICE_PASSWORD_HISTORY: &str = "zimbraMobilePolicyDevicePasswordHistory";
pub const ZIMBRA_MOBILE_POLICY_MAX_DEVICE_PASSWORD_FAILED_ATTEMPTS: &str = "zimbraMobilePolicyMaxDevicePasswordFailedAttempts";
pub const ZIMBRA_MOBILE_POLICY_MAX_INACTIVITY_TIME_DEVICE_LOCK: &str = "zimbraMobilePolicyMaxInactivityTimeDeviceLock";
pub const ZIMBRA_MOBILE_POLICY_MIN_DEVICE_PASSWORD_COMPLEX_CHARACTERS: &str = "zimbraMobilePolicyMinDevicePasswordComplexCharacters";
pub const ZIMBRA_MOBILE_POLICY_MIN_DEVICE_PASSWORD_LENGTH: &str = "zimbraMobilePolicyMinDevicePasswordLength";
pub const ZIMBRA_MOBILE_POLICY_PASSWORD_RECOVERY_ENABLED: &str = "zimbraMobilePolicyPasswordRecoveryEnabled";
pub const ZIMBRA_MOBILE_POLICY_REFRESH_INTERVAL: &str = "zimbraMobilePolicyRefreshInterval";
pub const ZIMBRA_MTA_ANTI_SPAM_LOCK_METHOD: &str = "zimbraMtaAntiSpamLockMethod";
/// Deprecated since 6.0.0_BETA1.
pub const ZIMBRA_MTA_AUTH_ENABLED: &str = "zimbraMtaAuthEnabled";
pub const ZIMBRA_MTA_AUTH_HOST: &str = "zimbraMtaAuthHost";
pub const ZIMBRA_MTA_AUTH_TARGET: &str = "zimbraMtaAuthTarget";
pub const ZIMBRA_MTA_AUTH_URL: &str = "zimbraMtaAuthURL";
pub const ZIMBRA_MTA_BLOCKED_EXTENSION: &str = "zimbraMtaBlockedExtension";
pub const ZIMBRA_MTA_BLOCKED_EXTENSION_WARN_ADMIN: &str = "zimbraMtaBlockedExtensionWarnAdmin";
pub const ZIMBRA_MTA_BLOCKED_EXTENSION_WARN_RECIPIENT: &str = "zimbraMtaBlockedExtensionWarnRecipient";
pub const ZIMBRA_MTA_COMMON_BLOCKED_EXTENSION: &str = "zimbraMtaCommonBlockedExtension";
pub const ZIMBRA_MTA_DNS_LOOKUPS_ENABLED: &str = "zimbraMtaDnsLookupsEnabled";
pub const ZIMBRA_MTA_MAX_MESSAGE_SIZE: &str = "zimbraMtaMaxMessageSize";
pub const ZIMBRA_MTA_MY_DESTINATION: &str = "zimbraMtaMyDestination";
pub const ZIMBRA_MTA_MY_HOSTNAME: &str = "zimbraMtaMyHostname";
pub const ZIMBRA_MTA_MY_NETWORKS: &str = "zimbraMtaMyNetworks";
pub const ZIMBRA_MTA_MY_ORIGIN: &str = "zimbraMtaMyOrigin";
pub const ZIMBRA_MTA_NON_SMTPD_MILTERS: &str = "zimbraMtaNonSmtpdMilters";
pub const ZIMBRA_MTA_RECIPIENT_DELIMITER: &str = "zimbraMtaRecipientDelimiter";
pub const ZIMBRA_MTA_RELAY_HOST: &str = "zimbraMtaRelayHost";
pub const ZIMBRA_MTA_RESTRICTION: &str = "zimbraMtaRestriction";
pub const ZIMBRA_MTA_SASL_AUTH_ENABLE: &str = "zimbraMtaSaslAuthEnable";
pub const ZIMBRA_MTA_SMTPD_MILTERS: &str = "zimbraMtaSmtpdMilters";
pub const ZIMBRA_MTA_TLS_AUTH_ONLY: &str = "zimbraMtaTlsAuthOnly";
pub const ZIMBRA_MTA_TLS_SECURITY_LEVEL: &str = "zimbraMtaTlsSecurityLevel";
pub const ZIMBRA_NETWORK_ACTIVATION: &str = "zimbraNetworkActivation";
pub const ZIMBRA_NETWORK_LICENSE: &str = "zimbraNetworkLicense";
pub const ZIMBRA_NEW_MAIL_NOTIFICATION_BODY: &str = "zimbraNewMailNotificationBody";
pub const ZIMBRA_NEW_MAIL_NOTIFICATION_FROM: &str = "zimbraNewMailNotificationFrom";
pub const ZIMBRA_NEW_MAIL_NOTIFICATION_SUBJECT: &str = "zimbraNewMailNotificationSubject";
pub const ZIMBRA_NOTEBOOK_ACCOUNT: &str = "zimbraNotebookAccount";
/// Deprecated since 6.0.0_BETA1.
pub const ZIMBRA_NOTEBOOK_FOLDER_CACHE_SIZE: &str = "zimbraNotebookFolderCacheSize";
/// Deprecated since 6.0.0_BETA1.
pub const ZIMBRA_NOTEBOOK_MAX_CACHED_TEMPLATES_PER_FOLDER: &str = "zimbraNotebookMaxCachedTemplatesPerFolder";
pub const ZIMBRA_NOTEBOOK_MAX_REVISIONS: &str = "zimbraNotebookMaxRevisions";
pub const ZIMBRA_NOTEBOOK_PAGE_CACHE_SIZE: &str = "zimbraNotebookPageCacheSize";
pub const ZIMBRA_NOTEBOOK_SANITIZE_HTML: &str = "zimbraNotebookSanitizeHtml";
pub const ZIMBRA_NOTES: &str = "zimbraNotes";
/// Deprecated since 4.0.
pub const ZIMBRA_NOTIFY_BIND_ADDRESS: &str = "zimbraNotifyBindAddress";
/// Deprecated since 4.0.
pub const ZIMBRA_NOTIFY_BIND_PORT: &str = "zimbraNotifyBindPort";
/// Deprecated since 4.0.
pub const ZIMBRA_NOTIFY_SERVER_ENABLED: &str = "zimbraNotifyServerEnabled";
/// Deprecated since 4.0.
pub const ZIMBRA_NOTIFY_SSL_BIND_ADDRESS: &str = "zimbraNotifySSLBindAddress";
/// Deprecated since 4.0.
pub const ZIMBRA_NOTIFY_SSL_BIND_PORT: &str = "zimbraNotifySSLBindPort";
/// Deprecated since 4.0.
pub const ZIMBRA_NOTIFY_SSL_SERVER_ENABLED: &str = "zimbraNotifySSLServerEnabled";
pub const ZIMBRA_OBJECT_HANDLER_CLASS: &str = "zimbraObjectHandlerClass";
pub const ZIMBRA_OBJECT_HANDLER_CONFIG: &str = "zimbraObjectHandlerConfig";
pub const ZIMBRA_OBJECT_INDEXING_ENABLED: &str = "zimbraObjectIndexingEnabled";
pub const ZIMBRA_OBJECT_STORE_MATCHED: &str = "zimbraObjectStoreMatched";
pub const ZIMBRA_OBJECT_TYPE: &str = "zimbraObjectType";
pub const ZIMBRA_PASSWORD_CHANGE_LISTENER: &str = "zimbraPasswordChangeListener";
pub const ZIMBRA_PASSWORD_ENFORCE_HISTORY: &str = "zimbraPasswordEnforceHistory";
pub const ZIMBRA_PASSWORD_HISTORY: &str = "zimbraPasswordHistory";
pub const ZIMBRA_PASSWORD_LOCKED: &str = "zimbraPasswordLocked";
pub const ZIMBRA_PASSWORD_LOCKOUT_DURATION: &str = "zimbraPasswordLockoutDuration";
pub const ZIMBRA_PASSWORD_LOCKOUT_ENABLED: &str = "zimbraPasswordLockoutEnabled";
pub const ZIMBRA_PASSWORD_LOCKOUT_FAILURE_LIFETIME: &str = "zimbraPasswordLockoutFailureLifetime";
pub const ZIMBRA_PASSWORD_LOCKOUT_FAILURE_TIME: &str = "zimbraPasswordLockoutFailureTime";
pub const ZIMBRA_PASSWORD_LOCKOUT_LOCKED_TIME: &str = "zimbraPasswordLockoutLockedTime";
pub const ZIMBRA_PASSWORD_LOCKOUT_MAX_FAILURES: &str = "zimbraPasswordLockoutMaxFailures";
pub const ZIMBRA_PASSWORD_MAX_AGE: &str = "zimbraPasswordMaxAge";
pub const ZIMBRA_PASSWORD_MAX_LENGTH: &str = "zimbraPasswordMaxLength";
pub const ZIMBRA_PASSWORD_MIN_AGE: &str = "zimbraPasswordMinAge";
pub const ZIMBRA_PASSWORD_MIN_LENGTH: &str = "zimbraPasswordMinLength";
pub const ZIMBRA_PASSWORD_MIN_LOWER_CASE_CHARS: &str = "zimbraPasswordMinLowerCaseChars";
pub const ZIMBRA_PASSWORD_MIN_NUMERIC_CHARS: &str = "zimbraPasswordMinNumericChars";
pub const ZIMBRA_PASSWORD_MIN_PUNCTUATION_CHARS: &str = "zimbraPasswordMinPunctuationChars";
pub const ZIMBRA_PASSWORD_MIN_UPPER_CASE_CHARS: &str = "zimbraPasswordMinUpperCaseChars";
pub const ZIMBRA_PASSWORD_MODIFIED_TIME: &str = "zimbraPasswordModifiedTime";
pub const ZIMBRA_PASSWORD_MUST_CHANGE: &str = "zimbraPasswordMustChange";
pub const ZIMBRA_POP3_ADVERTISED_NAME: &str = "zimbraPop3AdvertisedName";
pub const ZIMBRA_POP3_BIND_ADDRESS: &str = "zimbraPop3BindAddress";
pub const ZIMBRA_POP3_BIND_ON_STARTUP: &str = "zimbraPop3BindOnStartup";
pub const ZIMBRA_POP3_BIND_PORT: &str = "zimbraPop3BindPort";
pub const ZIMBRA_POP3_CLEARTEXT_LOGIN_ENABLED: &str = "zimbraPop3CleartextLoginEnabled";
pub const ZIMBRA_POP3_ENABLED: &str = "zimbraPop3Enabled";
pub const ZIMBRA_POP3_EXPOSE_VERSION_ON_BANNER: &str = "zimbraPop3ExposeVersionOnBanner";
pub const ZIMBRA_POP3_NUM_THREADS: &str = "zimbraPop3NumThreads";
pub const ZIMBRA_POP3_PROXY_BIND_PORT: &str = "zimbraPop3ProxyBindPort";
pub const ZIMBRA_POP3_SASL_GSSAPI_ENABLED: &str = "zimbraPop3SaslGssapiEnabled";
pub const ZIMBRA_POP3_SERVER_ENABLED: &str = "zimbraPop3ServerEnabled";
pub const ZIMBRA_POP3_SHUTDOWN_GRACE_SECONDS: &str = "zimbraPop3ShutdownGraceSeconds";
pub const ZIMBRA_POP3_SSL_BIND_ADDRESS: &str = "zimbraPop3SSLBindAddress";
pub const ZIMBRA_POP3_SSL_BIND_ON_STARTUP: &str = "zimbraPop3SSLBindOnStartup";
pub const ZIMBRA_POP3_SSL_BIND_PORT: &str = "zimbraPop3SSLBindPort";
pub const ZIMBRA_POP3_SSL_PROXY_BIND_PORT: &str = "zimbraPop3SSLProxyBindPort";
pub const ZIMBRA_POP3_SSL_SERVER_ENABLED: &str = "zimbraPop3SSLServerEnabled";
pub const ZIMBRA_PORTAL_NAME: &str = "zimbraPortalName";
pub const ZIMBRA_PRE_AUTH_KEY: &str = "zimbraPreAuthKey";
pub const ZIMBRA_PREF_ACCOUNT_TREE_OPEN: &str = "zimbraPrefAccountTreeOpen";
pub const ZIMBRA_PREF_ADMIN_CONSOLE_WARN_ON_EXIT: &str = "zimbraPrefAdminConsoleWarnOnExit";
pub const ZIMBRA_PREF_ADVANCED_CLIENT_ENFORCE_MIN_DISPLAY: &str = "zimbraPrefAdvancedClientEnforceMinDisplay";
pub const ZIMBRA_PREF_APPLE_ICAL_DELEGATION_ENABLED: &str = "zimbraPrefAppleIcalDelegationEnabled";
pub const ZIMBRA_PREF_AUTO_ADD_ADDRESS_ENABLED: &str = "zimbraPrefAutoAddAddressEnabled";
pub const ZIMBRA_PREF_AUTO_COMPLETE_QUICK_COMPLETION_ON_COMMA: &str = "zimbraPrefAutoCompleteQuickCompletionOnComma";
pub const ZIMBRA_PREF_AUTO_SAVE_DRAFT_INTERVAL: &str = "zimbraPrefAutoSaveDraftInterval";
pub const ZIMBRA_PREF_BCC_ADDRESS: &str = "zimbraPrefBccAddress";
pub const ZIMBRA_PREF_CALENDAR_ALLOW_CANCEL_EMAIL_TO_SELF: &str = "zimbraPrefCalendarAllowCancelEmailToSelf";
pub const ZIMBRA_PREF_CALENDAR_ALLOW_FORWARDED_INVITE: &str = "zimbraPrefCalendarAllowForwardedInvite";
pub const ZIMBRA_PREF_CALENDAR_ALLOW_PUBLISH_METHOD_INVITE: &str = "zimbraPrefCalendarAllowPublishMethodInvite";
pub const ZIMBRA_PREF_CALENDAR_ALWAYS_SHOW_MINI_CAL: &str = "zimbraPrefCalendarAlwaysShowMiniCal";
pub const ZIMBRA_PREF_CALENDAR_APPT_ALLOW_ATENDEE_EDIT: &str = "zimbraPrefCalendarApptAllowAtendeeEdit";
pub const ZIMBRA_PREF_CALENDAR_APPT_REMINDER_WARNING_TIME: &str = "zimbraPrefCalendarApptReminderWarningTime";
pub const ZIMBRA_PREF_CALENDAR_APPT_VISIBILITY: &str = "zimbraPrefCalendarApptVisibility";
pub const ZIMBRA_PREF_CALENDAR_AUTO_ADD_INVITES: &str = "zimbraPrefCalendarAutoAddInvites";
pub const ZIMBRA_PREF_CALENDAR_DAY_HOUR_END: &str = "zimbraPrefCalendarDayHourEnd";
pub const ZIMBRA_PREF_CALENDAR_DAY_HOUR_START: &str = "zimbraPrefCalendarDayHourStart";
pub const ZIMBRA_PREF_CALENDAR_FIRST_DAY_OF_WEEK: &str = "zimbraPrefCalendarFirstDayOfWeek";
pub const ZIMBRA_PREF_CALENDAR_FORWARD_INVITES_TO: &str = "zimbraPrefCalendarForwardInvitesTo";
pub const ZIMBRA_PREF_CALENDAR_INITIAL_CHECKED_CALENDARS: &str = "zimbraPrefCalendarInitialCheckedCalendars";
pub const ZIMBRA_PREF_CALENDAR_INITIAL_VIEW: &str = "zimbraPrefCalendarInitialView";
pub const ZIMBRA_PREF_CALENDAR_NOTIFY_DELEGATED_CHANGES: &str = "zimbraPrefCalendarNotifyDelegatedChanges";
/// Deprecated since 6.0.0_BETA1.
pub const ZIMBRA_PREF_CALENDAR_REMINDER_DURATION1: &str = "zimbraPrefCalendarReminderDuration1";
/// Deprecated since 6.0.0_BETA1.
pub const ZIMBRA_PREF_CALENDAR_REMINDER_DURATION2: &str = "zimbraPrefCalendarReminderDuration2";
/// Deprecated since 6.0.0_BETA1.
pub const ZIMBRA_PREF_CALENDAR_REMINDER_EMAIL: &str = "zimbraPrefCalendarReminderEmail";
pub const ZIMBRA_PREF_CALENDAR_REMINDER_FLASH_TITLE: &str = "zimbraPrefCalendarReminderFlashTitle";
/// Deprecated since 6.0.0_BETA1.
pub const ZIMBRA_PREF_CALENDAR_REMINDER_MOBILE: &str = "zimbraPrefCalendarReminderMobile";
/// Deprecated since 6.0.0_BETA1.
pub const ZIMBRA_PREF_CALENDAR_REMINDER_SEND_EMAIL: &str = "zimbraPrefCalendarReminderSendEmail";
pub const ZIMBRA_PREF_CALENDAR_REMINDER_SOUNDS_ENABLED: &str = "zimbraPrefCalendarReminderSoundsEnabled";
/// Deprecated since 6.0.0_BETA1.
pub const ZIMBRA_PREF_CALENDAR_REMINDER_Y_MESSENGER: &str = "zimbraPrefCalendarReminderYMessenger";
pub const ZIMBRA_PREF_CALENDAR_SEND_INVITE_DENIED_AUTO_REPLY: &str = "zimbraPrefCalendarSendInviteDeniedAutoReply";
pub const ZIMBRA_PREF_CALENDAR_SHOW_PAST_DUE_REMINDERS: &str = "zimbraPrefCalendarShowPastDueReminders";
pub const ZIMBRA_PREF_CALENDAR_TOASTER_ENABLED: &str = "zimbraPrefCalendarToasterEnabled";
pub const ZIMBRA_PREF_CALENDAR_USE_QUICK_ADD: &str = "zimbraPrefCalendarUseQuickAdd";
pub const ZIMBRA_PREF_CHILD_VISIBLE_ACCOUNT: &str = "zimbraPrefChildVisibleAccount";
pub const ZIMBRA_PREF_CLIENT_TYPE: &str = "zimbraPrefClientType";
pub const ZIMBRA_PREF_COMPOSE_FORMAT: &str = "zimbraPrefComposeFormat";
pub const ZIMBRA_PREF_COMPOSE_IN_NEW_WINDOW: &str = "zimbraPrefComposeInNewWindow";
pub const ZIMBRA_PREF_CONTACTS_DISABLE_AUTOCOMPLETE_ON_CONTACT_GROUP_MEMBERS: &str = "zimbraPrefContactsDisableAutocompleteOnContactGroupMembers";
/// Deprecated since 6.0.5.
pub const ZIMBRA_PREF_CONTACTS_INITIAL_VIEW: &str = "zimbraPrefContactsInitialView";
pub const ZIMBRA_PREF_CONTACTS_PER_PAGE: &str = "zimbraPrefContactsPerPage";
pub const ZIMBRA_PREF_CONVERSATION_ORDER: &str = "zimbraPrefConversationOrder";
pub const ZIMBRA_PREF_CONV_READING_PANE_LOCATION: &str = "zimbraPrefConvReadingPaneLocation";
pub const ZIMBRA_PREF_DEDUPE_MESSAGES_SENT_TO_SELF: &str = "zimbraPrefDedupeMessagesSentToSelf";
pub const ZIMBRA_PREF_DEFAULT_PRINT_FONT_SIZE: &str = "zimbraPrefDefaultPrintFontSize";
pub const ZIMBRA_PREF_DEFAULT_SIGNATURE_ID: &str = "zimbraPrefDefaultSignatureId";
pub const ZIMBRA_PREF_DELETE_INVITE_ON_REPLY: &str = "zimbraPrefDeleteInviteOnReply";
pub const ZIMBRA_PREF_DISABLED_ZIMLETS: &str = "zimbraPrefDisabledZimlets";
pub const ZIMBRA_PREF_DISPLAY_EXTERNAL_IMAGES: &str = "zimbraPrefDisplayExternalImages";
pub const ZIMBRA_PREF_FOLDER_COLOR_ENABLED: &str = "zimbraPrefFolderColorEnabled";
pub const ZIMBRA_PREF_FOLDER_TREE_OPEN: &str = "zimbraPrefFolderTreeOpen";
pub const ZIMBRA_PREF_FORWARD_INCLUDE_ORIGINAL_TEXT: &str = "zimbraPrefForwardIncludeOriginalText";
pub const ZIMBRA_PREF_FORWARD_REPLY_FORMAT: &str = "zimbraPrefForwardReplyFormat";
/// Deprecated since 4.5.
pub const ZIMBRA_PREF_FORWARD_REPLY_IN_ORIGINAL_FORMAT: &str = "zimbraPrefForwardReplyInOriginalFormat";
pub const ZIMBRA_PREF_FORWARD_REPLY_PREFIX_CHAR: &str = "zimbraPrefForwardReplyPrefixChar";
pub const ZIMBRA_PREF_FROM_ADDRESS: &str = "zimbraPrefFromAddress";
pub const ZIMBRA_PREF_FROM_DISPLAY: &str = "zimbraPrefFromDisplay";
pub const ZIMBRA_PREF_GAL_AUTO_COMPLETE_ENABLED: &str = "zimbraPrefGalAutoCompleteEnabled";
pub const ZIMBRA_PREF_GAL_SEARCH_ENABLED: &str = "zimbraPrefGalSearchEnabled";
pub const ZIMBRA_PREF_GET_MAIL_ACTION: &str = "zimbraPrefGetMailAction";
pub const ZIMBRA_PREF_GROUP_MAIL_BY: &str = "zimbraPrefGroupMailBy";
pub const ZIMBRA_PREF_HTML_EDITOR_DEFAULT_FONT_COLOR: &str = "zimbraPrefHtmlEditorDefaultFontColor";
pub const ZIMBRA_PREF_HTML_EDITOR_DEFAULT_FONT_FAMILY: &str = "zimbraPrefHtmlEditorDefaultFontFamily";
pub const ZIMBRA_PREF_HTML_EDITOR_DEFAULT_FONT_SIZE: &str = "zimbraPrefHtmlEditorDefaultFontSize";
pub const ZIMBRA_PREF_IDENTITY_ID: &str = "zimbraPrefIdentityId";
pub const ZIMBRA_PREF_IDENTITY_NAME: &str = "zimbraPrefIdentityName";
pub const ZIMBRA_PREF_IMAP_SEARCH_FOLDERS_ENABLED: &str = "zimbraPrefImapSearchFoldersEnabled";
pub const ZIMBRA_PREF_IM_AUTO_LOGIN: &str = "zimbraPrefIMAutoLogin";
pub const ZIMBRA_PREF_IM_BUDDY_LIST_SORT: &str = "zimbraPrefIMBuddyListSort";
pub const ZIMBRA_PREF_IM_CUSTOM_STATUS_MESSAGE: &str = "zimbraPrefIMCustomStatusMessage";
pub const ZIMBRA_PREF_IM_FLASH_ICON: &str = "zimbraPrefIMFlashIcon";
pub const ZIMBRA_PREF_IM_FLASH_TITLE: &str = "zimbraPrefIMFlashTitle";
pub const ZIMBRA_PREF_IM_HIDE_BLOCKED_BUDDIES: &str = "zimbraPrefIMHideBlockedBuddies";
pub const ZIMBRA_PREF_IM_HIDE_OFFLINE_BUDDIES: &str = "zimbraPrefIMHideOfflineBuddies";
pub const ZIMBRA_PREF_IM_IDLE_STATUS: &str = "zimbraPrefIMIdleStatus";
pub const ZIMBRA_PREF_IM_IDLE_TIMEOUT: &str = "zimbraPrefIMIdleTimeout";
pub const ZIMBRA_PREF_IM_INSTANT_NOTIFY: &str = "zimbraPrefIMInstantNotify";
pub const ZIMBRA_PREF_IM_LOG_CHATS: &str = "zimbraPrefIMLogChats";
pub const ZIMBRA_PREF_IM_LOG_CHATS_ENABLED: &str = "zimbraPrefIMLogChatsEnabled";
pub const ZIMBRA_PREF_IM_NOTIFY_PRESENCE: &str = "zimbraPrefIMNotifyPresence";
pub const ZIMBRA_PREF_IM_NOTIFY_STATUS: &str = "zimbraPrefIMNotifyStatus";
pub const ZIMBRA_PREF_IM_REPORT_IDLE: &str = "zimbraPrefIMReportIdle";
pub const ZIMBRA_PREF_IM_SOUNDS_ENABLED: &str = "zimbraPrefIMSoundsEnabled";
pub const ZIMBRA_PREF_IM_TOASTER_ENABLED: &str = "zimbraPrefIMToasterEnabled";
pub const ZIMBRA_PREF_IM_YAHOO_ID: &str = "zimbraPrefIMYahooId";
pub const ZIMBRA_PREF_INBOX_READ_LIFETIME: &str = "zimbraPrefInboxReadLifetime";
pub const ZIMBRA_PREF_INBOX_UNREAD_LIFETIME: &str = "zimbraPrefInboxUnreadLifetime";
pub const ZIMBRA_PREF_INCLUDE_SPAM_IN_SEARCH: &str = "zimbraPrefIncludeSpamInSearch";
pub const ZIMBRA_PREF_INCLUDE_TRASH_IN_SEARCH: &str = "zimbraPrefIncludeTrashInSearch";
pub const ZIMBRA_PREF_ITEMS_PER_VIRTUAL_PAGE: &str = "zimbraPrefItemsPerVirtualPage";
pub const ZIMBRA_PREF_JUNK_LIFETIME: &str = "zimbraPrefJunkLifetime";
pub const ZIMBRA_PREF_LABEL: &str = "zimbraPrefLabel";
pub const ZIMBRA_PREF_LIST_VIEW_COLUMNS: &str = "zimbraPrefListViewColumns";
pub const ZIMBRA_PREF_LOCALE: &str = "zimbraPrefLocale";
pub const ZIMBRA_PREF_MAIL_DEFAULT_CHARSET: &str = "zimbraPrefMailDefaultCharset";
pub const ZIMBRA_PREF_MAIL_FLASH_ICON: &str = "zimbraPrefMailFlashIcon";
pub const ZIMBRA_PREF_MAIL_FLASH_TITLE: &str = "zimbraPrefMailFlashTitle";
pub const ZIMBRA_PREF_MAIL_FOLDERS_CHECKED_FOR_NEW_MSG_INDICATOR: &str = "zimbraPrefMailFoldersCheckedForNewMsgIndicator";
pub const ZIMBRA_PREF_MAIL_FORWARDING_ADDRESS: &str = "zimbraPrefMailForwardingAddress";
pub const ZIMBRA_PREF_MAIL_INITIAL_SEARCH: &str = "zimbraPrefMailInitialSearch";
pub const ZIMBRA_PREF_MAIL_ITEMS_PER_PAGE: &str = "zimbraPrefMailItemsPerPage";
pub const ZIMBRA_PREF_MAIL_LOCAL_DELIVERY_DISABLED: &str = "zimbraPrefMailLocalDeliveryDisabled";
pub const ZIMBRA_PREF_MAIL_POLLING_INTERVAL: &str = "zimbraPrefMailPollingInterval";
pub const ZIMBRA_PREF_MAIL_SELECT_AFTER_DELETE: &str = "zimbraPrefMailSelectAfterDelete";
pub const ZIMBRA_PREF_MAIL_SEND_READ_RECEIPTS: &str = "zimbraPrefMailSendReadReceipts";
pub const ZIMBRA_PREF_MAIL_SIGNATURE: &str = "zimbraPrefMailSignature";
pub const ZIMBRA_PREF_MAIL_SIGNATURE_ENABLED: &str = "zimbraPrefMailSignatureEnabled";
pub const ZIMBRA_PREF_MAIL_SIGNATURE_HTML: &str = "zimbraPrefMailSignatureHTML";
pub const ZIMBRA_PREF_MAIL_SIGNATURE_STYLE: &str = "zimbraPrefMailSignatureStyle";
pub const ZIMBRA_PREF_MAIL_SOUNDS_ENABLED: &str = "zimbraPrefMailSoundsEnabled";
pub const ZIMBRA_PREF_MAIL_TOASTER_ENABLED: &str = "zimbraPrefMailToasterEnabled";
pub const ZIMBRA_PREF_MANDATORY_SPELL_CHECK_ENABLED: &str = "zimbraPrefMandatorySpellCheckEnabled";
pub const ZIMBRA_PREF_MARK_MSG_READ: &str = "zimbraPrefMarkMsgRead";
pub const ZIMBRA_PREF_MESSAGE_VIEW_HTML_PREFERRED: &str = "zimbraPrefMessageViewHtmlPreferred";
pub const ZIMBRA_PREF_NEW_MAIL_NOTIFICATION_ADDRESS: &str = "zimbraPrefNewMailNotificationAddress";
pub const ZIMBRA_PREF_NEW_MAIL_NOTIFICATION_ENABLED: &str = "zimbraPrefNewMailNotificationEnabled";
pub const ZIMBRA_PREF_OPEN_MAIL_IN_NEW_WINDOW: &str = "zimbraPrefOpenMailInNewWindow";
pub const ZIMBRA_PREF_OUT_OF_OFFICE_CACHE_DURATION: &str = "zimbraPrefOutOfOfficeCacheDuration";
pub const ZIMBRA_PREF_OUT_OF_OFFICE_DIRECT_ADDRESS: &str = "zimbraPrefOutOfOfficeDirectAddress";
pub const ZIMBRA_PREF_OUT_OF_OFFICE_FROM_DATE: &str = "zimbraPrefOutOfOfficeFromDate";
pub const ZIMBRA_PREF_OUT_OF_OFFICE_REPLY: &str = "zimbraPrefOutOfOfficeReply";
pub const ZIMBRA_PREF_OUT_OF_OFFICE_REPLY_ENABLED: &str = "zimbraPrefOutOfOfficeReplyEnabled";
pub const ZIMBRA_PREF_OUT_OF_OFFICE_UNTIL_DATE: &str = "zimbraPrefOutOfOfficeUntilDate";
pub const ZIMBRA_PREF_POP3_DOWNLOAD_SINCE: &str = "zimbraPrefPop3DownloadSince";
/// Deprecated since 6.0.0_BETA2.
pub const ZIMBRA_PREF_READING_PANE_ENABLED: &str = "zimbraPrefReadingPaneEnabled";
pub const ZIMBRA_PREF_READING_PANE_LOCATION: &str = "zimbraPrefReadingPaneLocation";
pub const ZIMBRA_PREF_READ_RECEIPTS_TO_ADDRESS: &str = "zimbraPrefReadReceiptsToAddress";
pub const ZIMBRA_PREF_REPLY_INCLUDE_ORIGINAL_TEXT: &str = "zimbraPrefReplyIncludeOriginalText";
pub const ZIMBRA_PREF_REPLY_TO_ADDRESS: &str = "zimbraPrefReplyToAddress";
pub const ZIMBRA_PREF_REPLY_TO_DISPLAY: &str = "zimbraPrefReplyToDisplay";
pub const ZIMBRA_PREF_REPLY_TO_ENABLED: &str = "zimbraPrefReplyToEnabled";
pub const ZIMBRA_PREF_SAVE_TO_SENT: &str = "zimbraPrefSaveToSent";
pub const ZIMBRA_PREF_SEARCH_TREE_OPEN: &str = "zimbraPrefSearchTreeOpen";
pub const ZIMBRA_PREF_SENT_LIFETIME: &str = "zimbraPrefSentLifetime";
pub const ZIMBRA_PREF_SENT_MAIL_FOLDER: &str = "zimbraPrefSentMailFolder";
pub const ZIMBRA_PREF_SHARED_ADDR_BOOK_AUTO_COMPLETE_ENABLED: &str = "zimbraPrefSharedAddrBookAutoCompleteEnabled";
pub const ZIMBRA_PREF_SHORTCUTS: &str = "zimbraPrefShortcuts";
pub const ZIMBRA_PREF_SHOW_CALENDAR_WEEK: &str = "zimbraPrefShowCalendarWeek";
pub const ZIMBRA_PREF_SHOW_FRAGMENTS: &str = "zimbraPrefShowFragments";
pub const ZIMBRA_PREF_SHOW_SEARCH_STRING: &str = "zimbraPrefShowSearchString";
pub const ZIMBRA_PREF_SHOW_SELECTION_CHECKBOX: &str = "zimbraPrefShowSelectionCheckbox";
pub const ZIMBRA_PREF_SKIN: &str = "zimbraPrefSkin";
pub const ZIMBRA_PREF_SPELL_DICTIONARY: &str = "zimbraPrefSpellDictionary";
pub const ZIMBRA_PREF_SPELL_IGNORE_WORD: &str = "zimbraPrefSpellIgnoreWord";
pub const ZIMBRA_PREF_STANDARD_CLIENT_ACCESSIBILITY_MODE: &str = "zimbraPrefStandardClientAccessibilityMode";
pub const ZIMBRA_PREF_TAG_TREE_OPEN: &str = "zimbraPrefTagTreeOpen";
pub const ZIMBRA_PREF_TIME_ZONE_ID: &str = "zimbraPrefTimeZoneId";
pub const ZIMBRA_PREF_TRASH_LIFETIME: &str = "zimbraPrefTrashLifetime";
/// Deprecated since 5.0.
pub const ZIMBRA_PREF_USE_DEFAULT_IDENTITY_SETTINGS: &str = "zimbraPrefUseDefaultIdentitySettings";
pub const ZIMBRA_PREF_USE_KEYBOARD_SHORTCUTS: &str = "zimbraPrefUseKeyboardShortcuts";
pub const ZIMBRA_PREF_USE_RFC2231: &str = "zimbraPrefUseRfc2231";
pub const ZIMBRA_PREF_USE_TIME_ZONE_LIST_IN_CALENDAR: &str = "zimbraPrefUseTimeZoneListInCalendar";
pub const ZIMBRA_PREF_VOICE_ITEMS_PER_PAGE: &str = "zimbraPrefVoiceItemsPerPage";
pub const ZIMBRA_PREF_WARN_ON_EXIT: &str = "zimbraPrefWarnOnExit";
pub const ZIMBRA_PREF_WHEN_IN_FOLDER_IDS: &str = "zimbraPrefWhenInFolderIds";
pub const ZIMBRA_PREF_WHEN_IN_FOLDERS_ENABLED: &str = "zimbraPrefWhenInFoldersEnabled";
pub const ZIMBRA_PREF_WHEN_SENT_TO_ADDRESSES: &str = "zimbraPrefWhenSentToAddresses";
pub const ZIMBRA_PREF_WHEN_SENT_TO_ENABLED: &str = "zimbraPrefWhenSentToEnabled";
pub const ZIMBRA_PREF_ZIMLETS: &str = "zimbraPrefZimlets";
pub const ZIMBRA_PREF_ZIMLET_TREE_OPEN: &str = "zimbraPrefZimletTreeOpen";
pub const ZIMBRA_PROXY_ALLOWED_DOMAINS: &str = "zimbraProxyAllowedDomains";
pub const ZIMBRA_PROXY_CACHEABLE_CONTENT_TYPES: &str = "zimbraProxyCacheableContentTypes";
pub const ZIMBRA_PUBLIC_SERVICE_HOSTNAME: &str = "zimbraPublicServiceHostname";
pub const ZIMBRA_PUBLIC_SERVICE_PORT: &str = "zimbraPublicServicePort";
pub const ZIMBRA_PUBLIC_SERVICE_PROTOCOL: &str = "zimbraPublicServiceProtocol";
pub const ZIMBRA_QUOTA_LAST_WARN_TIME: &str = "zimbraQuotaLastWarnTime";
pub const ZIMBRA_QUOTA_WARN_INTERVAL: &str = "zimbraQuotaWarnInterval";
pub const ZIMBRA_QUOTA_WARN_MESSAGE: &str = "zimbraQuotaWarnMessage";
pub const ZIMBRA_QUOTA_WARN_PERCENT: &str = "zimbraQuotaWarnPercent";
pub const ZIMBRA_REDO_LOG_ARCHIVE_DIR: &str = "zimbraRedoLogArchiveDir";
pub const ZIMBRA_REDO_LOG_CRASH_RECOVERY_LOOKBACK_SEC: &str = "zimbraRedoLogCrashRecoveryLookbackSec";
pub const ZIMBRA_REDO_LOG_DELETE_ON_ROLLOVER: &str = "zimbraRedoLogDeleteOnRollover";
pub const ZIMBRA_REDO_LOG_ENABLED: &str = "zimbraRedoLogEnabled";
pub const ZIMBRA_REDO_LOG_FSYNC_INTERVAL_MS: &str = "zimbraRedoLogFsyncIntervalMS";
pub const ZIMBRA_REDO_LOG_LOG_PATH: &str = "zimbraRedoLogLogPath";
pub const ZIMBRA_REDO_LOG_PROVIDER: &str = "zimbraRedoLogProvider";
pub const ZIMBRA_REDO_LOG_ROLLOVER_FILE_SIZE_KB: &str = "zimbraRedoLogRolloverFileSizeKB";
pub const ZIMBRA_REDO_LOG_ROLLOVER_HARD_MAX_FILE_SIZE_KB: &str = "zimbraRedoLogRolloverHardMaxFileSizeKB";
pub const ZIMBRA_REDO_LOG_ROLLOVER_MIN_FILE_AGE: &str = "zimbraRedoLogRolloverMinFileAge";
pub const ZIMBRA_REMOTE_MANAGEMENT_COMMAND: &str = "zimbraRemoteManagementCommand";
pub const ZIMBRA_REMOTE_MANAGEMENT_PORT: &str = "zimbraRemoteManagementPort";
pub const ZIMBRA_REMOTE_MANAGEMENT_PRIVATE_KEY_PATH: &str = "zimbraRemoteManagementPrivateKeyPath";
pub const ZIMBRA_REMOTE_MANAGEMENT_USER: &str = "zimbraRemoteManagementUser";
pub const ZIMBRA_RESPONSE_HEADER: &str = "zimbraResponseHeader";
pub const ZIMBRA_REVERSE_PROXY_ADMIN_IP_ADDRESS: &str = "zimbraReverseProxyAdminIPAddress";
pub const ZIMBRA_REVERSE_PROXY_ADMIN_PORT_ATTRIBUTE: &str = "zimbraReverseProxyAdminPortAttribute";
pub const ZIMBRA_REVERSE_PROXY_AUTH_WAIT_INTERVAL: &str = "zimbraReverseProxyAuthWaitInterval";
pub const ZIMBRA_REVERSE_PROXY_CACHE_ENTRY_TTL: &str = "zimbraReverseProxyCacheEntryTTL";
pub const ZIMBRA_REVERSE_PROXY_CACHE_FETCH_TIMEOUT: &str = "zimbraReverseProxyCacheFetchTimeout";
pub const ZIMBRA_REVERSE_PROXY_CACHE_RECONNECT_INTERVAL: &str = "zimbraReverseProxyCacheReconnectInterval";
pub const ZIMBRA_REVERSE_PROXY_CONNECT_TIMEOUT: &str = "zimbraReverseProxyConnectTimeout";
pub const ZIMBRA_REVERSE_PROXY_DEFAULT_REALM: &str = "zimbraReverseProxyDefaultRealm";
pub const ZIMBRA_REVERSE_PROXY_DOMAIN_NAME_ATTRIBUTE: &str = "zimbraReverseProxyDomainNameAttribute";
pub const ZIMBRA_REVERSE_PROXY_DOMAIN_NAME_QUERY: &str = "zimbraReverseProxyDomainNameQuery";
pub const ZIMBRA_REVERSE_PROXY_DOMAIN_NAME_SEARCH_BASE: &str = "zimbraReverseProxyDomainNameSearchBase";
pub const ZIMBRA_REVERSE_PROXY_HTTP_ENABLED: &str = "zimbraReverseProxyHttpEnabled";
pub const ZIMBRA_REVERSE_PROXY_HTTP_PORT_ATTRIBUTE: &str = "zimbraReverseProxyHttpPortAttribute";
pub const ZIMBRA_REVERSE_PROXY_IMAP_ENABLED_CAPABILITY: &str = "zimbraReverseProxyImapEnabledCapability";
pub const ZIMBRA_REVERSE_PROXY_IMAP_EXPOSE_VERSION_ON_BANNER: &str = "zimbraReverseProxyImapExposeVersionOnBanner";
pub const ZIMBRA_REVERSE_PROXY_IMAP_PORT_ATTRIBUTE: &str = "zimbraReverseProxyImapPortAttribute";
pub const ZIMBRA_REVERSE_PROXY_IMAP_SASL_GSSAPI_ENABLED: &str = "zimbraReverseProxyImapSaslGssapiEnabled";
pub const ZIMBRA_REVERSE_PROXY_IMAP_SASL_PLAIN_ENABLED: &str = "zimbraReverseProxyImapSaslPlainEnabled";
pub const ZIMBRA_REVERSE_PROXY_IMAP_SSL_PORT_ATTRIBUTE: &str = "zimbraReverseProxyImapSSLPortAttribute";
pub const ZIMBRA_REVERSE_PROXY_IMAP_START_TLS_MODE: &str = "zimbraReverseProxyImapStartTlsMode";
pub const ZIMBRA_REVERSE_PROXY_INACTIVITY_TIMEOUT: &str = "zimbraReverseProxyInactivityTimeout";
pub const ZIMBRA_REVERSE_PROXY_IP_LOGIN_LIMIT: &str = "zimbraReverseProxyIPLoginLimit";
pub const ZIMBRA_REVERSE_PROXY_IP_LOGIN_LIMIT_TIME: &str = "zimbraReverseProxyIPLoginLimitTime";
pub const ZIMBRA_REVERSE_PROXY_IP_THROTTLE_MSG: &str = "zimbraReverseProxyIpThrottleMsg";
pub const ZIMBRA_REVERSE_PROXY_LOG_LEVEL: &str = "zimbraReverseProxyLogLevel";
pub const ZIMBRA_REVERSE_PROXY_LOOKUP_TARGET: &str = "zimbraReverseProxyLookupTarget";
pub const ZIMBRA_REVERSE_PROXY_MAIL_ENABLED: &str = "zimbraReverseProxyMailEnabled";
pub const ZIMBRA_REVERSE_PROXY_MAIL_HOST_ATTRIBUTE: &str = "zimbraReverseProxyMailHostAttribute";
pub const ZIMBRA_REVERSE_PROXY_MAIL_HOST_QUERY: &str = "zimbraReverseProxyMailHostQuery";
pub const ZIMBRA_REVERSE_PROXY_MAIL_HOST_SEARCH_BASE: &str = "zimbraReverseProxyMailHostSearchBase";
pub const ZIMBRA_REVERSE_PROXY_MAIL_MODE: &str = "zimbraReverseProxyMailMode";
pub const ZIMBRA_REVERSE_PROXY_PASS_ERRORS: &str = "zimbraReverseProxyPassErrors";
pub const ZIMBRA_REVERSE_PROXY_POP3_ENABLED_CAPABILITY: &str = "zimbraReverseProxyPop3EnabledCapability";
pub const ZIMBRA_REVERSE_PROXY_POP3_EXPOSE_VERSION_ON_BANNER: &str = "zimbraReverseProxyPop3ExposeVersionOnBanner";
pub const ZIMBRA_REVERSE_PROXY_POP3_PORT_ATTRIBUTE: &str = "zimbraReverseProxyPop3PortAttribute";
pub const ZIMBRA_REVERSE_PROXY_POP3_SASL_GSSAPI_ENABLED: &str = "zimbraReverseProxyPop3SaslGssapiEnabled";
pub const ZIMBRA_REVERSE_PROXY_POP3_SASL_PLAIN_ENABLED: &str = "zimbraReverseProxyPop3SaslPlainEnabled";
pub const ZIMBRA_REVERSE_PROXY_POP3_SSL_PORT_ATTRIBUTE: &str = "zimbraReverseProxyPop3SSLPortAttribute";
pub const ZIMBRA_REVERSE_PROXY_POP3_START_TLS_MODE: &str = "zimbraReverseProxyPop3StartTlsMode";
pub const ZIMBRA_REVERSE_PROXY_PORT_QUERY: &str = "zimbraReverseProxyPortQuery";
pub const ZIMBRA_REVERSE_PROXY_PORT_SEARCH_BASE: &str = "zimbraReverseProxyPortSearchBase";
pub const ZIMBRA_REVERSE_PROXY_ROUTE_LOOKUP_TIMEOUT: &str = "zimbraReverseProxyRouteLookupTimeout";
pub const ZIMBRA_REVERSE_PROXY_ROUTE_LOOKUP_TIMEOUT_CACHE: &str = "zimbraReverseProxyRouteLookupTimeoutCache";
pub const ZIMBRA_REVERSE_PROXY_SEND_IMAP_ID: &str = "zimbraReverseProxySendImapId";
pub const ZIMBRA_REVERSE_PROXY_SEND_POP3_XOIP: &str = "zimbraReverseProxySendPop3Xoip";
pub const ZIMBRA_REVERSE_PROXY_SSL_CIPHERS: &str = "zimbraReverseProxySSLCiphers";
pub const ZIMBRA_REVERSE_PROXY_USE_EXTERNAL_ROUTE: &str = "zimbraReverseProxyUseExternalRoute";
pub const ZIMBRA_REVERSE_PROXY_USER_LOGIN_LIMIT: &str = "zimbraReverseProxyUserLoginLimit";
pub const ZIMBRA_REVERSE_PROXY_USER_LOGIN_LIMIT_TIME: &str = "zimbraReverseProxyUserLoginLimitTime";
pub const ZIMBRA_REVERSE_PROXY_USER_NAME_ATTRIBUTE: &str = "zimbraReverseProxyUserNameAttribute";
pub const ZIMBRA_REVERSE_PROXY_USER_THROTTLE_MSG: &str = "zimbraReverseProxyUserThrottleMsg";
pub const ZIMBRA_REVERSE_PROXY_WORKER_CONNECTIONS: &str = "zimbraReverseProxyWorkerConnections";
pub const ZIMBRA_REVERSE_PROXY_WORKER_PROCESSES: &str = "zimbraReverseProxyWorkerProcesses";
pub const ZIMBRA_SASL_GSSAPI_REQUIRES_TLS: &str = "zimbraSaslGssapiRequiresTls";
pub const ZIMBRA_SCHEDULED_TASK_NUM_THREADS: &str = "zimbraScheduledTaskNumThreads";
pub const ZIMBRA_SERVER_EXTRA_OBJECT_CLASS: &str = "zimbraServerExtraObjectClass";
pub const ZIMBRA_SERVER_ID: &str = "zimbraServerId";
/// Deprecated since 5.0.
pub const ZIMBRA_SERVER_INHERITED_ATTR: &str = "zimbraServerInheritedAttr";
pub const ZIMBRA_SERVICE_ENABLED: &str = "zimbraServiceEnabled";
pub const ZIMBRA_SERVICE_HOSTNAME: &str = "zimbraServiceHostname";
pub const ZIMBRA_SERVICE_INSTALLED: &str = "zimbraServiceInstalled";
pub const ZIMBRA_SHARE_INFO: &str = "zimbraShareInfo";
pub const ZIMBRA_SIGNATURE_ID: &str = "zimbraSignatureId";
pub const ZIMBRA_SIGNATURE_MAX_NUM_ENTRIES: &str = "zimbraSignatureMaxNumEntries";
pub const ZIMBRA_SIGNATURE_MIN_NUM_ENTRIES: &str = "zimbraSignatureMinNumEntries";
pub const ZIMBRA_SIGNATURE_NAME: &str = "zimbraSignatureName";
pub const ZIMBRA_SKIN_BACKGROUND_COLOR: &str = "zimbraSkinBackgroundColor";
pub const ZIMBRA_SKIN_FAVICON: &str = "zimbraSkinFavicon";
pub const ZIMBRA_SKIN_FOREGROUND_COLOR: &str = "zimbraSkinForegroundColor";
pub const ZIMBRA_SKIN_LOGO_APP_BANNER: &str = "zimbraSkinLogoAppBanner";
pub const ZIMBRA_SKIN_LOGO_LOGIN_BANNER: &str = "zimbraSkinLogoLoginBanner";
pub const ZIMBRA_SKIN_LOGO_URL: &str = "zimbraSkinLogoURL";
pub const ZIMBRA_SKIN_SECONDARY_COLOR: &str = "zimbraSkinSecondaryColor";
pub const ZIMBRA_SKIN_SELECTION_COLOR: &str = "zimbraSkinSelectionColor";
pub const ZIMBRA_SMTP_ENABLE_TRACE: &str = "zimbraSmtpEnableTrace";
pub const ZIMBRA_SMTP_HOSTNAME: &str = "zimbraSmtpHostname";
pub const ZIMBRA_SMTP_PORT: &str = "zimbraSmtpPort";
pub const ZIMBRA_SMTP_RESTRICT_ENVELOPE_FROM: &str = "zimbraSmtpRestrictEnvelopeFrom";
pub const ZIMBRA_SMTP_SEND_ADD_AUTHENTICATED_USER: &str = "zimbraSmtpSendAddAuthenticatedUser";
pub const ZIMBRA_SMTP_SEND_ADD_MAILER: &str = "zimbraSmtpSendAddMailer";
pub const ZIMBRA_SMTP_SEND_ADD_ORIGINATING_IP: &str = "zimbraSmtpSendAddOriginatingIP";
pub const ZIMBRA_SMTP_SEND_PARTIAL: &str = "zimbraSmtpSendPartial";
pub const ZIMBRA_SMTP_TIMEOUT: &str = "zimbraSmtpTimeout";
pub const ZIMBRA_SOAP_EXPOSE_VERSION: &str = "zimbraSoapExposeVersion";
pub const ZIMBRA_SOAP_REQUEST_MAX_SIZE: &str = "zimbraSoapRequestMaxSize";
pub const ZIMBRA_SPAM_APPLY_USER_FILTERS: &str = "zimbraSpamApplyUserFilters";
/// Deprecated since 4.5.
pub const ZIMBRA_SPAM_CHECK_ENABLED: &str = "zimbraSpamCheckEnabled";
pub const ZIMBRA_SPAM_HEADER: &str = "zimbraSpamHeader";
pub const ZIMBRA_SPAM_HEADER_VALUE: &str = "zimbraSpamHeaderValue";
pub const ZIMBRA_SPAM_IS_NOT_SPAM_ACCOUNT: &str = "zimbraSpamIsNotSpamAccount";
pub const ZIMBRA_SPAM_IS_SPAM_ACCOUNT: &str = "zimbraSpamIsSpamAccount";
pub const ZIMBRA_SPAM_KILL_PERCENT: &str = "zimbraSpamKillPercent";
pub const ZIMBRA_SPAM_REPORT_ENVELOPE_FROM: &str = "zimbraSpamReportEnvelopeFrom";
pub const ZIMBRA_SPAM_REPORT_SENDER_HEADER: &str = "zimbraSpamReportSenderHeader";
pub const ZIMBRA_SPAM_REPORT_TYPE_HAM: &str = "zimbraSpamReportTypeHam";
pub const ZIMBRA_SPAM_REPORT_TYPE_HEADER: &str = "zimbraSpamReportTypeHeader";
pub const ZIMBRA_SPAM_REPORT_TYPE_SPAM: &str = "zimbraSpamReportTypeSpam";
pub const ZIMBRA_SPAM_SUBJECT_TAG: &str = "zimbraSpamSubjectTag";
pub const ZIMBRA_SPAM_TAG_PERCENT: &str = "zimbraSpamTagPercent";
pub const ZIMBRA_SPELL_AVAILABLE_DICTIONARY: &str = "zimbraSpellAvailableDictionary";
pub const ZIMBRA_SPELL_CHECK_URL: &str = "zimbraSpellCheckURL";
pub const ZIMBRA_SSH_PUBLIC_KEY: &str = "zimbraSshPublicKey";
pub const ZIMBRA_SSL_CA_CERT: &str = "zimbraSslCaCert";
pub const ZIMBRA_SSL_CA_KEY: &str = "zimbraSslCaKey";
pub const ZIMBRA_SSL_CERTIFICATE: &str = "zimbraSSLCertificate";
pub const ZIMBRA_SSL_EXCLUDE_CIPHER_SUITES: &str = "zimbraSSLExcludeCipherSuites";
pub const ZIMBRA_SSL_PRIVATE_KEY: &str = "zimbraSSLPrivateKey";
pub const ZIMBRA_STAT_THREAD_NAME_PREFIX: &str = "zimbraStatThreadNamePrefix";
pub const ZIMBRA_SYNC_WINDOW_SIZE: &str = "zimbraSyncWindowSize";
/// Deprecated since 4.5.7.
pub const ZIMBRA_TABLE_MAINTENANCE_GROWTH_FACTOR: &str = "zimbraTableMaintenanceGrowthFactor";
/// Deprecated since 4.5.7.
pub const ZIMBRA_TABLE_MAINTENANCE_MAX_ROWS: &str = "zimbraTableMaintenanceMaxRows";
/// Deprecated since 4.5.7.
pub const ZIMBRA_TABLE_MAINTENANCE_MIN_ROWS: &str = "zimbraTableMaintenanceMinRows";
/// Deprecated since 4.5.7.
pub const ZIMBRA_TABLE_MAINTENANCE_OPERATION: &str = "zimbraTableMaintenanceOperation";
pub const ZIMBRA_TEXT_ANALYZER: &str = "zimbraTextAnalyzer";
pub const ZIMBRA_TIME_ZONE_DAYLIGHT_DT_START: &str = "zimbraTimeZoneDaylightDtStart";
pub const ZIMBRA_TIME_ZONE_DAYLIGHT_OFFSET: &str = "zimbraTimeZoneDaylightOffset";
pub const ZIMBRA_TIME_ZONE_DAYLIGHT_R_RULE: &str = "zimbraTimeZoneDaylightRRule";
pub const ZIMBRA_TIME_ZONE_STANDARD_DT_START: &str = "zimbraTimeZoneStandardDtStart";
pub const ZIMBRA_TIME_ZONE_STANDARD_OFFSET: &str = "zimbraTimeZoneStandardOffset";
pub const ZIMBRA_TIME_ZONE_STANDARD_R_RULE: &str = "zimbraTimeZoneStandardRRule";
pub const ZIMBRA_USER_SERVICES_ENABLED: &str = "zimbraUserServicesEnabled";
pub const ZIMBRA_VERSION: &str = "zimbraVersion";
pub const ZIMBRA_VERSION_CHECK_INTERVAL: &str = "zimbraVersionCheckInterval";
pub const ZIMBRA_VERSION_CHECK_LAST_ATTEMPT: &str = "zimbraVersionCheckLastAttempt";
pub const ZIMBRA_VERSION_CHECK_LAST_RESPONSE: &str = "zimbraVersionCheckLastResponse";
pub const ZIMBRA_VERSION_CHECK_LAST_SUCCESS: &str = "zimbraVersionCheckLastSuccess";
pub const ZIMBRA_VERSION_CHECK_NOTIFICATION_BODY: &str = "zimbraVersionCheckNotificationBody";
pub const ZIMBRA_VERSION_CHECK_NOTIFICATION_EMAIL: &str = "zimbraVersionCheckNotificationEmail";
pub const ZIMBRA_VERSION_CHECK_NOTIFICATION_EMAIL_FROM: &str = "zimbraVersionCheckNotificationEmailFrom";
pub const ZIMBRA_VERSION_CHECK_NOTIFICATION_SUBJECT: &str = "zimbraVersionCheckNotificationSubject";
pub const ZIMBRA_VERSION_CHECK_SEND_NOTIFICATIONS: &str = "zimbraVersionCheckSendNotifications";
pub const ZIMBRA_VERSION_CHECK_SERVER: &str = "zimbraVersionCheckServer";
pub const ZIMBRA_VERSION_CHECK_URL: &str = "zimbraVersionCheckURL";
pub const ZIMBRA_VIRTUAL_HOSTNAME: &str = "zimbraVirtualHostname";
pub const ZIMBRA_VIRTUAL_IP_ADDRESS: &str = "zimbraVirtualIPAddress";
pub const ZIMBRA_VIRUS_BLOCK_ENCRYPTED_ARCHIVE: &str = "zimbraVirusBlockEncryptedArchive";
/// Deprecated since 4.5.
pub const ZIMBRA_VIRUS_CHECK_ENABLED: &str = "zimbraVirusCheckEnabled";
pub const ZIMBRA_VIRUS_DEFINITIONS_UPDATE_FREQUENCY: &str = "zimbraVirusDefinitionsUpdateFrequency";
pub const ZIMBRA_VIRUS_WARN_ADMIN: &str = "zimbraVirusWarnAdmin";
pub const ZIMBRA_VIRUS_WARN_RECIPIENT: &str = "zimbraVirusWarnRecipient";
pub const ZIMBRA_WEB_CLIENT_ADMIN_REFERENCE: &str = "zimbraWebClientAdminReference";
pub const ZIMBRA_WEB_CLIENT_LOGIN_URL: &str = "zimbraWebClientLoginURL";
pub const ZIMBRA_WEB_CLIENT_LOGOUT_URL: &str = "zimbraWebClientLogoutURL";
pub const ZIMBRA_WEB_CLIENT_SHOW_OFFLINE_LINK: &str = "zimbraWebClientShowOfflineLink";
pub const ZIMBRA_XMPP_COMPONENT_CATEGORY: &str = "zimbraXMPPComponentCategory";
pub const ZIMBRA_XMPP_COMPONENT_CLASS_NAME: &str = "zimbraXMPPComponentClassName";
pub const ZIMBRA_XMPP_COMPONENT_FEATURES: &str = "zimbraXMPPComponentFeatures";
pub const ZIMBRA_XMPP_COMPONENT_NAME: &str = "zimbraXMPPComponentName";
pub const ZIMBRA_XMPP_COMPONENT_TYPE: &str = "zimbraXMPPComponentType";
pub const ZIMBRA_XMPP_ENABLED: &str = "zimbraXMPPEnabled";
pub const ZIMBRA_XMPP_SERVER_DIALBACK_KEY: &str = "zimbraXMPPServerDialbackKey";
pub const ZIMBRA_YAHOO_ID: &str = "zimbraYahooId";
pub const ZIMBRA_ZIMLET_AVAILABLE_ZIMLETS: &str = "zimbraZimletAvailableZimlets";
pub const ZIMBRA_ZIMLET_CONTENT_OBJECT: &str = "zimbraZimletContentObject";
pub const ZIMBRA_ZIMLET_DESCRIPTION: &str = "zimbraZimletDescription";
pub const ZIMBRA_ZIMLET_DOMAIN_AVAILABLE_ZIMLETS: &str = "zimbraZimletDomainAvailableZimlets";
pub const ZIMBRA_ZIMLET_ENABLED: &str = "zimbraZimletEnabled";
pub const ZIMBRA_ZIMLET_HANDLER_CLASS: &str = "zimbraZimletHandlerClass";
pub const ZIMBRA_ZIMLET_HANDLER_CONFIG: &str = "zimbraZimletHandlerConfig";
pub const ZIMBRA_ZIMLET_INDEXING_ENABLED: &str = "zimbraZimletIndexingEnabled";
pub const ZIMBRA_ZIMLET_IS_EXTENSION: &str = "zimbraZimletIsExtension";
pub const ZIMBRA_ZIMLET_KEYWORD: &str = "zimbraZimletKeyword";
pub const ZIMBRA_ZIMLET_PANEL_ITEM: &str = "zimbraZimletPanelItem";
pub const ZIMBRA_ZIMLET_PRIORITY: &str = "zimbraZimletPriority";
pub const ZIMBRA_ZIMLET_SCRIPT: &str = "zimbraZimletScript";
pub const ZIMBRA_ZIMLET_SERVER_INDEX_REGEX: &str = "zimbraZimletServerIndexRegex";
pub const ZIMBRA_ZIMLET_STORE_MATCHED: &str = "zimbraZimletStoreMatched";
pub const ZIMBRA_ZIMLET_TARGET: &str = "zimbraZimletTarget";
pub const ZIMBRA_ZIMLET_USER_PROPERTIES: &str = "zimbraZimletUserProperties";
pub const ZIMBRA_ZIMLET_VERSION: &str = "zimbraZimletVersion";

/// Every attribute name, in catalog order.
pub const ALL: &[&str] = &[
    AMAVIS_BAD_HEADER_ADMIN,
    AMAVIS_BAD_HEADER_LOVER,
    AMAVIS_BAD_HEADER_QUARANTINE_TO,
    AMAVIS_BANNED_ADMIN,
    AMAVIS_BANNED_FILES_LOVER,
    AMAVIS_BANNED_QUARANTINE_TO,
    AMAVIS_BANNED_RULE_NAMES,
    AMAVIS_BLACKLIST_SENDER,
    AMAVIS_BYPASS_BANNED_CHECKS,
    AMAVIS_BYPASS_HEADER_CHECKS,
    AMAVIS_BYPASS_SPAM_CHECKS,
    AMAVIS_BYPASS_VIRUS_CHECKS,
    AMAVIS_LOCAL,
    AMAVIS_MESSAGE_SIZE_LIMIT,
    AMAVIS_NEW_VIRUS_ADMIN,
    AMAVIS_SPAM_ADMIN,
    AMAVIS_SPAM_KILL_LEVEL,
    AMAVIS_SPAM_LOVER,
    AMAVIS_SPAM_MODIFIES_SUBJ,
    AMAVIS_SPAM_QUARANTINE_TO,
    AMAVIS_SPAM_TAG2_LEVEL,
    AMAVIS_SPAM_TAG_LEVEL,
    AMAVIS_VIRUS_ADMIN,
    AMAVIS_VIRUS_LOVER,
    AMAVIS_VIRUS_QUARANTINE_TO,
    AMAVIS_WARN_BAD_HEADER_RECIP,
    AMAVIS_WARN_BANNED_RECIP,
    AMAVIS_WARN_VIRUS_RECIP,
    AMAVIS_WHITELIST_SENDER,
    C,
    CN,
    CO,
    COMPANY,
    DESCRIPTION,
    DISPLAY_NAME,
    GIVEN_NAME,
    GN,
    HOME_PHONE,
    INITIALS,
    L,
    MAIL,
    MOBILE,
    O,
    OBJECT_CLASS,
    OU,
    PAGER,
    PHYSICAL_DELIVERY_OFFICE_NAME,
    POSTAL_ADDRESS,
    POSTAL_CODE,
    SN,
    ST,
    STREET,
    STREET_ADDRESS,
    TELEPHONE_NUMBER,
    TITLE,
    UID,
    USER_PASSWORD,
    ZIMBRA_ACCOUNT_CALENDAR_USER_TYPE,
    ZIMBRA_ACCOUNT_CLIENT_ATTR,
    ZIMBRA_ACCOUNT_EXTRA_OBJECT_CLASS,
    ZIMBRA_ACCOUNT_STATUS,
    ZIMBRA_ACE,
    ZIMBRA_ADMIN_AUTH_TOKEN_LIFETIME,
    ZIMBRA_ADMIN_CONSOLE_CATCH_ALL_ADDRESS_ENABLED,
    ZIMBRA_ADMIN_CONSOLE_DNS_CHECK_ENABLED,
    ZIMBRA_ADMIN_CONSOLE_LDAP_AUTH_ENABLED,
    ZIMBRA_ADMIN_CONSOLE_LOGIN_MESSAGE,
    ZIMBRA_ADMIN_CONSOLE_LOGIN_URL,
    ZIMBRA_ADMIN_CONSOLE_LOGOUT_URL,
    ZIMBRA_ADMIN_CONSOLE_SKIN_ENABLED,
    ZIMBRA_ADMIN_CONSOLE_UI_COMPONENTS,
    ZIMBRA_ADMIN_EXT_DISABLE_UI_UNDEPLOY,
    ZIMBRA_ADMIN_PORT,
    ZIMBRA_ADMIN_SAVED_SEARCHES,
    ZIMBRA_ADMIN_URL,
    ZIMBRA_ALIAS_TARGET_ID,
    ZIMBRA_ALLOW_ANY_FROM_ADDRESS,
    ZIMBRA_ALLOW_FROM_ADDRESS,
    ZIMBRA_ALLOW_NON_LDH_CHARS_IN_DOMAIN,
    ZIMBRA_ARCHIVE_ACCOUNT,
    ZIMBRA_ARCHIVE_ACCOUNT_DATE_TEMPLATE,
    ZIMBRA_ARCHIVE_ACCOUNT_NAME_TEMPLATE,
    ZIMBRA_ARCHIVE_MAIL_FROM,
    ZIMBRA_ATTACHMENTS_BLOCKED,
    ZIMBRA_ATTACHMENTS_INDEXED_TEXT_LIMIT,
    ZIMBRA_ATTACHMENTS_INDEXING_ENABLED,
    ZIMBRA_ATTACHMENTS_SCAN_CLASS,
    ZIMBRA_ATTACHMENTS_SCAN_ENABLED,
    ZIMBRA_ATTACHMENTS_SCAN_URL,
    ZIMBRA_ATTACHMENTS_VIEW_IN_HTML_ONLY,
    ZIMBRA_AUTH_FALLBACK_TO_LOCAL,
    ZIMBRA_AUTH_KERBEROS5_REALM,
    ZIMBRA_AUTH_LDAP_BIND_DN,
    ZIMBRA_AUTH_LDAP_EXTERNAL_DN,
    ZIMBRA_AUTH_LDAP_SEARCH_BASE,
    ZIMBRA_AUTH_LDAP_SEARCH_BIND_DN,
    ZIMBRA_AUTH_LDAP_SEARCH_BIND_PASSWORD,
    ZIMBRA_AUTH_LDAP_SEARCH_FILTER,
    ZIMBRA_AUTH_LDAP_START_TLS_ENABLED,
    ZIMBRA_AUTH_LDAP_URL,
    ZIMBRA_AUTH_MECH,
    ZIMBRA_AUTH_TOKEN_KEY,
    ZIMBRA_AUTH_TOKEN_LIFETIME,
    ZIMBRA_AUTH_TOKEN_VALIDITY_VALUE,
    ZIMBRA_AUTH_TOKEN_VALIDITY_VALUE_ENABLED,
    ZIMBRA_AUTO_SUBMITTED_NULL_RETURN_PATH,
    ZIMBRA_AVAILABLE_LOCALE,
    ZIMBRA_AVAILABLE_SKIN,
    ZIMBRA_BACKUP_AUTO_GROUPED_INTERVAL,
    ZIMBRA_BACKUP_AUTO_GROUPED_NUM_GROUPS,
    ZIMBRA_BACKUP_AUTO_GROUPED_THROTTLED,
    ZIMBRA_BACKUP_MODE,
    ZIMBRA_BACKUP_REPORT_EMAIL_RECIPIENTS,
    ZIMBRA_BACKUP_REPORT_EMAIL_SENDER,
    ZIMBRA_BACKUP_REPORT_EMAIL_SUBJECT_PREFIX,
    ZIMBRA_BACKUP_SKIP_BLOBS,
    ZIMBRA_BACKUP_SKIP_HSM_BLOBS,
    ZIMBRA_BACKUP_SKIP_SEARCH_INDEX,
    ZIMBRA_BACKUP_TARGET,
    ZIMBRA_BATCHED_INDEXING_SIZE,
    ZIMBRA_CALENDAR_CAL_DAV_ALTERNATE_CALENDAR_HOME_SET,
    ZIMBRA_CALENDAR_CAL_DAV_CLEAR_TEXT_PASSWORD_ENABLED,
    ZIMBRA_CALENDAR_CAL_DAV_DEFAULT_CALENDAR_ID,
    ZIMBRA_CALENDAR_CAL_DAV_DISABLE_FREEBUSY,
    ZIMBRA_CALENDAR_CAL_DAV_DISABLE_SCHEDULING,
    ZIMBRA_CALENDAR_CAL_DAV_SHARED_FOLDER_CACHE_DURATION,
    ZIMBRA_CALENDAR_CAL_DAV_SYNC_END,
    ZIMBRA_CALENDAR_CAL_DAV_SYNC_START,
    ZIMBRA_CALENDAR_CAL_DAV_USE_DISTINCT_APPOINTMENT_AND_TO_DO_COLLECTION,
    ZIMBRA_CALENDAR_COMPATIBILITY_MODE,
    ZIMBRA_CALENDAR_MAX_REVISIONS,
    ZIMBRA_CALENDAR_RECURRENCE_DAILY_MAX_DAYS,
    ZIMBRA_CALENDAR_RECURRENCE_MAX_INSTANCES,
    ZIMBRA_CALENDAR_RECURRENCE_MONTHLY_MAX_MONTHS,
    ZIMBRA_CALENDAR_RECURRENCE_OTHER_FREQUENCY_MAX_YEARS,
    ZIMBRA_CALENDAR_RECURRENCE_WEEKLY_MAX_WEEKS,
    ZIMBRA_CALENDAR_RECURRENCE_YEARLY_MAX_YEARS,
    ZIMBRA_CALENDAR_RESOURCE_DOUBLE_BOOKING_ALLOWED,
    ZIMBRA_CALENDAR_RESOURCE_EXTRA_OBJECT_CLASS,
    ZIMBRA_CALENDAR_SHOW_RESOURCE_TABS,
    ZIMBRA_CAL_RES_AUTO_ACCEPT_DECLINE,
    ZIMBRA_CAL_RES_AUTO_DECLINE_IF_BUSY,
    ZIMBRA_CAL_RES_AUTO_DECLINE_RECURRING,
    ZIMBRA_CAL_RES_BUILDING,
    ZIMBRA_CAL_RES_CAPACITY,
    ZIMBRA_CAL_RES_CONTACT_EMAIL,
    ZIMBRA_CAL_RES_CONTACT_NAME,
    ZIMBRA_CAL_RES_CONTACT_PHONE,
    ZIMBRA_CAL_RES_FLOOR,
    ZIMBRA_CAL_RES_LOCATION_DISPLAY_NAME,
    ZIMBRA_CAL_RES_MAX_NUM_CONFLICTS_ALLOWED,
    ZIMBRA_CAL_RES_MAX_PERCENT_CONFLICTS_ALLOWED,
    ZIMBRA_CAL_RES_ROOM,
    ZIMBRA_CAL_RES_SITE,
    ZIMBRA_CAL_RES_TYPE,
    ZIMBRA_CERT_AUTHORITY_CERT_SELF_SIGNED,
    ZIMBRA_CERT_AUTHORITY_KEY_SELF_SIGNED,
    ZIMBRA_CHANGE_PASSWORD_URL,
    ZIMBRA_CHILD_ACCOUNT,
    ZIMBRA_CHILD_VISIBLE_ACCOUNT,
    ZIMBRA_CLUSTER_TYPE,
    ZIMBRA_COMPONENT_AVAILABLE,
    ZIMBRA_CONSTRAINT,
    ZIMBRA_CONTACT_AUTO_COMPLETE_EMAIL_FIELDS,
    ZIMBRA_CONTACT_AUTO_COMPLETE_MAX_RESULTS,
    ZIMBRA_CONTACT_EMAIL_FIELDS,
    ZIMBRA_CONTACT_HIDDEN_ATTRIBUTES,
    ZIMBRA_CONTACT_MAX_NUM_ENTRIES,
    ZIMBRA_CONTACT_RANKING_TABLE_REFRESH_INTERVAL,
    ZIMBRA_CONTACT_RANKING_TABLE_SIZE,
    ZIMBRA_CONVERTD_URL,
    ZIMBRA_COS_EXTRA_OBJECT_CLASS,
    ZIMBRA_COS_ID,
    ZIMBRA_COS_INHERITED_ATTR,
    ZIMBRA_CREATE_TIMESTAMP,
    ZIMBRA_CUSTOMER_CARE_TIER,
    ZIMBRA_DATABASE_SLOW_SQL_THRESHOLD,
    ZIMBRA_DATA_SOURCE_ATTRIBUTE,
    ZIMBRA_DATA_SOURCE_CALDAV_POLLING_INTERVAL,
    ZIMBRA_DATA_SOURCE_CALENDAR_POLLING_INTERVAL,
    ZIMBRA_DATA_SOURCE_CONNECTION_TYPE,
    ZIMBRA_DATA_SOURCE_CONNECT_TIMEOUT,
    ZIMBRA_DATA_SOURCE_DOMAIN,
    ZIMBRA_DATA_SOURCE_EMAIL_ADDRESS,
    ZIMBRA_DATA_SOURCE_ENABLED,
    ZIMBRA_DATA_SOURCE_ENABLE_TRACE,
    ZIMBRA_DATA_SOURCE_FAILING_SINCE,
    ZIMBRA_DATA_SOURCE_FOLDER_ID,
    ZIMBRA_DATA_SOURCE_GAL_POLLING_INTERVAL,
    ZIMBRA_DATA_SOURCE_HOST,
    ZIMBRA_DATA_SOURCE_ID,
    ZIMBRA_DATA_SOURCE_IMAP_POLLING_INTERVAL,
    ZIMBRA_DATA_SOURCE_IMPORT_CLASS_NAME,
    ZIMBRA_DATA_SOURCE_LAST_ERROR,
    ZIMBRA_DATA_SOURCE_LEAVE_ON_SERVER,
    ZIMBRA_DATA_SOURCE_LIVE_POLLING_INTERVAL,
    ZIMBRA_DATA_SOURCE_MAX_NUM_ENTRIES,
    ZIMBRA_DATA_SOURCE_MAX_TRACE_SIZE,
    ZIMBRA_DATA_SOURCE_MIN_POLLING_INTERVAL,
    ZIMBRA_DATA_SOURCE_NAME,
    ZIMBRA_DATA_SOURCE_PASSWORD,
    ZIMBRA_DATA_SOURCE_POLLING_INTERVAL,
    ZIMBRA_DATA_SOURCE_POP3_POLLING_INTERVAL,
    ZIMBRA_DATA_SOURCE_PORT,
    ZIMBRA_DATA_SOURCE_READ_TIMEOUT,
    ZIMBRA_DATA_SOURCE_RSS_POLLING_INTERVAL,
    ZIMBRA_DATA_SOURCE_TYPE,
    ZIMBRA_DATA_SOURCE_USE_ADDRESS_FOR_FORWARD_REPLY,
    ZIMBRA_DATA_SOURCE_USERNAME,
    ZIMBRA_DATA_SOURCE_YAB_POLLING_INTERVAL,
    ZIMBRA_DEBUG_INFO,
    ZIMBRA_DEFAULT_DOMAIN_NAME,
    ZIMBRA_DISTRIBUTION_LIST_SEND_SHARE_MESSAGE_FROM_ADDRESS,
    ZIMBRA_DISTRIBUTION_LIST_SEND_SHARE_MESSAGE_TO_NEW_MEMBERS,
    ZIMBRA_DNS_CHECK_HOSTNAME,
    ZIMBRA_DOMAIN_ADMIN_MAX_MAIL_QUOTA,
    ZIMBRA_DOMAIN_ADMIN_MODIFIABLE_ATTR,
    ZIMBRA_DOMAIN_ALIAS_TARGET_ID,
    ZIMBRA_DOMAIN_COS_MAX_ACCOUNTS,
    ZIMBRA_DOMAIN_DEFAULT_COS_ID,
    ZIMBRA_DOMAIN_EXTRA_OBJECT_CLASS,
    ZIMBRA_DOMAIN_FEATURE_MAX_ACCOUNTS,
    ZIMBRA_DOMAIN_ID,
    ZIMBRA_DOMAIN_INHERITED_ATTR,
    ZIMBRA_DOMAIN_MANDATORY_MAIL_SIGNATURE_ENABLED,
    ZIMBRA_DOMAIN_MANDATORY_MAIL_SIGNATURE_HTML,
    ZIMBRA_DOMAIN_MANDATORY_MAIL_SIGNATURE_TEXT,
    ZIMBRA_DOMAIN_MAX_ACCOUNTS,
    ZIMBRA_DOMAIN_NAME,
    ZIMBRA_DOMAIN_RENAME_INFO,
    ZIMBRA_DOMAIN_STATUS,
    ZIMBRA_DOMAIN_TYPE,
    ZIMBRA_ERROR_REPORT_URL,
    ZIMBRA_EXCLUDE_FROM_CMB_SEARCH,
    ZIMBRA_EXTERNAL_IMAP_HOSTNAME,
    ZIMBRA_EXTERNAL_IMAP_PORT,
    ZIMBRA_EXTERNAL_IMAP_SSL_HOSTNAME,
    ZIMBRA_EXTERNAL_IMAP_SSL_PORT,
    ZIMBRA_EXTERNAL_POP3_HOSTNAME,
    ZIMBRA_EXTERNAL_POP3_PORT,
    ZIMBRA_EXTERNAL_POP3_SSL_HOSTNAME,
    ZIMBRA_EXTERNAL_POP3_SSL_PORT,
    ZIMBRA_FEATURE_ADVANCED_SEARCH_ENABLED,
    ZIMBRA_FEATURE_BRIEFCASE_DOCS_ENABLED,
    ZIMBRA_FEATURE_BRIEFCASES_ENABLED,
    ZIMBRA_FEATURE_BRIEFCASE_SLIDES_ENABLED,
    ZIMBRA_FEATURE_BRIEFCASE_SPREADSHEET_ENABLED,
    ZIMBRA_FEATURE_CALENDAR_ENABLED,
    ZIMBRA_FEATURE_CALENDAR_UPSELL_ENABLED,
    ZIMBRA_FEATURE_CALENDAR_UPSELL_URL,
    ZIMBRA_FEATURE_CHANGE_PASSWORD_ENABLED,
    ZIMBRA_FEATURE_COMPOSE_IN_NEW_WINDOW_ENABLED,
    ZIMBRA_FEATURE_CONFIRMATION_PAGE_ENABLED,
    ZIMBRA_FEATURE_CONTACTS_ENABLED,
    ZIMBRA_FEATURE_CONTACTS_UPSELL_ENABLED,
    ZIMBRA_FEATURE_CONTACTS_UPSELL_URL,
    ZIMBRA_FEATURE_CONVERSATIONS_ENABLED,
    ZIMBRA_FEATURE_DISCARD_IN_FILTERS_ENABLED,
    ZIMBRA_FEATURE_FILTERS_ENABLED,
    ZIMBRA_FEATURE_FLAGGING_ENABLED,
    ZIMBRA_FEATURE_GAL_AUTO_COMPLETE_ENABLED,
    ZIMBRA_FEATURE_GAL_ENABLED,
    ZIMBRA_FEATURE_GAL_SYNC_ENABLED,
    ZIMBRA_FEATURE_GROUP_CALENDAR_ENABLED,
    ZIMBRA_FEATURE_HTML_COMPOSE_ENABLED,
    ZIMBRA_FEATURE_IDENTITIES_ENABLED,
    ZIMBRA_FEATURE_IMAP_DATA_SOURCE_ENABLED,
    ZIMBRA_FEATURE_IM_ENABLED,
    ZIMBRA_FEATURE_IMPORT_EXPORT_FOLDER_ENABLED,
    ZIMBRA_FEATURE_INITIAL_SEARCH_PREFERENCE_ENABLED,
    ZIMBRA_FEATURE_INSTANT_NOTIFY,
    ZIMBRA_FEATURE_MAIL_ENABLED,
    ZIMBRA_FEATURE_MAIL_FORWARDING_ENABLED,
    ZIMBRA_FEATURE_MAIL_FORWARDING_IN_FILTERS_ENABLED,
    ZIMBRA_FEATURE_MAIL_POLLING_INTERVAL_PREFERENCE_ENABLED,
    ZIMBRA_FEATURE_MAIL_PRIORITY_ENABLED,
    ZIMBRA_FEATURE_MAIL_UPSELL_ENABLED,
    ZIMBRA_FEATURE_MAIL_UPSELL_URL,
    ZIMBRA_FEATURE_MANAGE_ZIMLETS,
    ZIMBRA_FEATURE_MOBILE_POLICY_ENABLED,
    ZIMBRA_FEATURE_MOBILE_SYNC_ENABLED,
    ZIMBRA_FEATURE_NEW_ADDR_BOOK_ENABLED,
    ZIMBRA_FEATURE_NEW_MAIL_NOTIFICATION_ENABLED,
    ZIMBRA_FEATURE_NOTEBOOK_ENABLED,
    ZIMBRA_FEATURE_OPEN_MAIL_IN_NEW_WINDOW_ENABLED,
    ZIMBRA_FEATURE_OPTIONS_ENABLED,
    ZIMBRA_FEATURE_OUT_OF_OFFICE_REPLY_ENABLED,
    ZIMBRA_FEATURE_POP3_DATA_SOURCE_ENABLED,
    ZIMBRA_FEATURE_PORTAL_ENABLED,
    ZIMBRA_FEATURE_READ_RECEIPTS_ENABLED,
    ZIMBRA_FEATURE_SAVED_SEARCHES_ENABLED,
    ZIMBRA_FEATURE_SHARING_ENABLED,
    ZIMBRA_FEATURE_SHORTCUT_ALIASES_ENABLED,
    ZIMBRA_FEATURE_SIGNATURES_ENABLED,
    ZIMBRA_FEATURE_SKIN_CHANGE_ENABLED,
    ZIMBRA_FEATURE_TAGGING_ENABLED,
    ZIMBRA_FEATURE_TASKS_ENABLED,
    ZIMBRA_FEATURE_VIEW_IN_HTML_ENABLED,
    ZIMBRA_FEATURE_VOICE_CHANGE_PIN_ENABLED,
    ZIMBRA_FEATURE_VOICE_ENABLED,
    ZIMBRA_FEATURE_VOICE_UPSELL_ENABLED,
    ZIMBRA_FEATURE_VOICE_UPSELL_URL,
    ZIMBRA_FEATURE_WEB_SEARCH_ENABLED,
    ZIMBRA_FEATURE_ZIMBRA_ASSISTANT_ENABLED,
    ZIMBRA_FILE_UPLOAD_MAX_SIZE,
    ZIMBRA_FOREIGN_PRINCIPAL,
    ZIMBRA_FREEBUSY_EXCHANGE_AUTH_PASSWORD,
    ZIMBRA_FREEBUSY_EXCHANGE_AUTH_SCHEME,
    ZIMBRA_FREEBUSY_EXCHANGE_AUTH_USERNAME,
    ZIMBRA_FREEBUSY_EXCHANGE_CACHED_INTERVAL,
    ZIMBRA_FREEBUSY_EXCHANGE_CACHED_INTERVAL_START,
    ZIMBRA_FREEBUSY_EXCHANGE_URL,
    ZIMBRA_FREEBUSY_EXCHANGE_USER_ORG,
    ZIMBRA_FREEBUSY_LOCAL_MAILBOX_NOT_ACTIVE,
    ZIMBRA_FREEBUSY_PROPAGATION_RETRY_INTERVAL,
    ZIMBRA_GAL_ACCOUNT_ID,
    ZIMBRA_GAL_ALWAYS_INCLUDE_LOCAL_CALENDAR_RESOURCES,
    ZIMBRA_GAL_AUTO_COMPLETE_LDAP_FILTER,
    ZIMBRA_GAL_INTERNAL_SEARCH_BASE,
    ZIMBRA_GAL_LAST_FAILED_SYNC_TIMESTAMP,
    ZIMBRA_GAL_LAST_SUCCESSFUL_SYNC_TIMESTAMP,
    ZIMBRA_GAL_LDAP_ATTR_MAP,
    ZIMBRA_GAL_LDAP_AUTH_MECH,
    ZIMBRA_GAL_LDAP_BIND_DN,
    ZIMBRA_GAL_LDAP_BIND_PASSWORD,
    ZIMBRA_GAL_LDAP_FILTER,
    ZIMBRA_GAL_LDAP_FILTER_DEF,
    ZIMBRA_GAL_LDAP_KERBEROS5_KEYTAB,
    ZIMBRA_GAL_LDAP_KERBEROS5_PRINCIPAL,
    ZIMBRA_GAL_LDAP_PAGE_SIZE,
    ZIMBRA_GAL_LDAP_SEARCH_BASE,
    ZIMBRA_GAL_LDAP_START_TLS_ENABLED,
    ZIMBRA_GAL_LDAP_URL,
    ZIMBRA_GAL_MAX_RESULTS,
    ZIMBRA_GAL_MODE,
    ZIMBRA_GAL_STATUS,
    ZIMBRA_GAL_SYNC_ACCOUNT_BASED_AUTO_COMPLETE_ENABLED,
    ZIMBRA_GAL_SYNC_INTERNAL_SEARCH_BASE,
    ZIMBRA_GAL_SYNC_LDAP_AUTH_MECH,
    ZIMBRA_GAL_SYNC_LDAP_BIND_DN,
    ZIMBRA_GAL_SYNC_LDAP_BIND_PASSWORD,
    ZIMBRA_GAL_SYNC_LDAP_FILTER,
    ZIMBRA_GAL_SYNC_LDAP_KERBEROS5_KEYTAB,
    ZIMBRA_GAL_SYNC_LDAP_KERBEROS5_PRINCIPAL,
    ZIMBRA_GAL_SYNC_LDAP_PAGE_SIZE,
    ZIMBRA_GAL_SYNC_LDAP_SEARCH_BASE,
    ZIMBRA_GAL_SYNC_LDAP_START_TLS_ENABLED,
    ZIMBRA_GAL_SYNC_LDAP_URL,
    ZIMBRA_GAL_SYNC_TIMESTAMP_FORMAT,
    ZIMBRA_GAL_TOKENIZE_AUTO_COMPLETE_KEY,
    ZIMBRA_GAL_TOKENIZE_SEARCH_KEY,
    ZIMBRA_GAL_TYPE,
    ZIMBRA_GROUP_ID,
    ZIMBRA_HELP_ADMIN_URL,
    ZIMBRA_HELP_ADVANCED_URL,
    ZIMBRA_HELP_DELEGATED_URL,
    ZIMBRA_HELP_STANDARD_URL,
    ZIMBRA_HIDE_IN_GAL,
    ZIMBRA_HSM_AGE,
    ZIMBRA_HSM_POLICY,
    ZIMBRA_HTTP_DEBUG_HANDLER_ENABLED,
    ZIMBRA_HTTP_NUM_THREADS,
    ZIMBRA_HTTP_PROXY_URL,
    ZIMBRA_HTTP_SSL_NUM_THREADS,
    ZIMBRA_ID,
    ZIMBRA_IDENTITY_MAX_NUM_ENTRIES,
    ZIMBRA_IMAP_ADVERTISED_NAME,
    ZIMBRA_IMAP_BIND_ADDRESS,
    ZIMBRA_IMAP_BIND_ON_STARTUP,
    ZIMBRA_IMAP_BIND_PORT,
    ZIMBRA_IMAP_CLEARTEXT_LOGIN_ENABLED,
    ZIMBRA_IMAP_DISABLED_CAPABILITY,
    ZIMBRA_IMAP_ENABLED,
    ZIMBRA_IMAP_EXPOSE_VERSION_ON_BANNER,
    ZIMBRA_IMAP_MAX_REQUEST_SIZE,
    ZIMBRA_IMAP_NUM_THREADS,
    ZIMBRA_IMAP_PROXY_BIND_PORT,
    ZIMBRA_IMAP_SASL_GSSAPI_ENABLED,
    ZIMBRA_IMAP_SERVER_ENABLED,
    ZIMBRA_IMAP_SHUTDOWN_GRACE_SECONDS,
    ZIMBRA_IMAP_SSL_BIND_ADDRESS,
    ZIMBRA_IMAP_SSL_BIND_ON_STARTUP,
    ZIMBRA_IMAP_SSL_BIND_PORT,
    ZIMBRA_IMAP_SSL_DISABLED_CAPABILITY,
    ZIMBRA_IMAP_SSL_PROXY_BIND_PORT,
    ZIMBRA_IMAP_SSL_SERVER_ENABLED,
    ZIMBRA_IM_AVAILABLE_INTEROP_GATEWAYS,
    ZIMBRA_IM_BIND_ADDRESS,
    ZIMBRA_IM_SERVICE,
    ZIMBRA_INSTALLED_SKIN,
    ZIMBRA_INTERCEPT_ADDRESS,
    ZIMBRA_INTERCEPT_BODY,
    ZIMBRA_INTERCEPT_FROM,
    ZIMBRA_INTERCEPT_SEND_HEADERS_ONLY,
    ZIMBRA_INTERCEPT_SUBJECT,
    ZIMBRA_IS_ADMIN_ACCOUNT,
    ZIMBRA_IS_ADMIN_GROUP,
    ZIMBRA_IS_CUSTOMER_CARE_ACCOUNT,
    ZIMBRA_IS_DELEGATED_ADMIN_ACCOUNT,
    ZIMBRA_IS_DOMAIN_ADMIN_ACCOUNT,
    ZIMBRA_IS_MONITOR_HOST,
    ZIMBRA_IS_SYSTEM_RESOURCE,
    ZIMBRA_JUNK_MESSAGES_INDEXING_ENABLED,
    ZIMBRA_LAST_LOGON_TIMESTAMP,
    ZIMBRA_LAST_LOGON_TIMESTAMP_FREQUENCY,
    ZIMBRA_LMTP_ADVERTISED_NAME,
    ZIMBRA_LMTP_BIND_ADDRESS,
    ZIMBRA_LMTP_BIND_ON_STARTUP,
    ZIMBRA_LMTP_BIND_PORT,
    ZIMBRA_LMTP_EXPOSE_VERSION_ON_BANNER,
    ZIMBRA_LMTP_NUM_THREADS,
    ZIMBRA_LMTP_PERMANENT_FAILURE_WHEN_OVER_QUOTA,
    ZIMBRA_LMTP_SERVER_ENABLED,
    ZIMBRA_LMTP_SHUTDOWN_GRACE_SECONDS,
    ZIMBRA_LOCALE,
    ZIMBRA_LOG_HOSTNAME,
    ZIMBRA_LOG_RAW_LIFETIME,
    ZIMBRA_LOG_SUMMARY_LIFETIME,
    ZIMBRA_LOG_TO_SYSLOG,
    ZIMBRA_MAIL_ADDRESS,
    ZIMBRA_MAIL_ALIAS,
    ZIMBRA_MAIL_BLACKLIST_MAX_NUM_ENTRIES,
    ZIMBRA_MAILBOX_LOCATION_BEFORE_MOVE,
    ZIMBRA_MAILBOX_MOVE_SKIP_BLOBS,
    ZIMBRA_MAILBOX_MOVE_SKIP_HSM_BLOBS,
    ZIMBRA_MAILBOX_MOVE_SKIP_SEARCH_INDEX,
    ZIMBRA_MAIL_CANONICAL_ADDRESS,
    ZIMBRA_MAIL_CATCH_ALL_ADDRESS,
    ZIMBRA_MAIL_CATCH_ALL_CANONICAL_ADDRESS,
    ZIMBRA_MAIL_CATCH_ALL_FORWARDING_ADDRESS,
    ZIMBRA_MAIL_CLEAR_TEXT_PASSWORD_ENABLED,
    ZIMBRA_MAIL_CONTENT_MAX_SIZE,
    ZIMBRA_MAIL_DELIVERY_ADDRESS,
    ZIMBRA_MAIL_DISK_STREAMING_THRESHOLD,
    ZIMBRA_MAIL_FILE_DESCRIPTOR_BUFFER_SIZE,
    ZIMBRA_MAIL_FILE_DESCRIPTOR_CACHE_SIZE,
    ZIMBRA_MAIL_FORWARDING_ADDRESS,
    ZIMBRA_MAIL_FORWARDING_ADDRESS_MAX_LENGTH,
    ZIMBRA_MAIL_FORWARDING_ADDRESS_MAX_NUM_ADDRS,
    ZIMBRA_MAIL_HOST,
    ZIMBRA_MAIL_HOST_POOL,
    ZIMBRA_MAIL_IDLE_SESSION_TIMEOUT,
    ZIMBRA_MAIL_LAST_PURGED_MAILBOX_ID,
    ZIMBRA_MAIL_MESSAGE_LIFETIME,
    ZIMBRA_MAIL_MIN_POLLING_INTERVAL,
    ZIMBRA_MAIL_MODE,
    ZIMBRA_MAIL_PORT,
    ZIMBRA_MAIL_PROXY_PORT,
    ZIMBRA_MAIL_PURGE_SLEEP_INTERVAL,
    ZIMBRA_MAIL_PURGE_USE_CHANGE_DATE_FOR_TRASH,
    ZIMBRA_MAIL_QUOTA,
    ZIMBRA_MAIL_REDIRECT_SET_ENVELOPE_SENDER,
    ZIMBRA_MAIL_REFER_MODE,
    ZIMBRA_MAIL_SIEVE_SCRIPT,
    ZIMBRA_MAIL_SIGNATURE_MAX_LENGTH,
    ZIMBRA_MAIL_SPAM_LIFETIME,
    ZIMBRA_MAIL_SSL_PORT,
    ZIMBRA_MAIL_SSL_PROXY_PORT,
    ZIMBRA_MAIL_STATUS,
    ZIMBRA_MAIL_TRANSPORT,
    ZIMBRA_MAIL_TRASH_LIFETIME,
    ZIMBRA_MAIL_TRUSTED_IP,
    ZIMBRA_MAIL_UNCOMPRESSED_CACHE_MAX_BYTES,
    ZIMBRA_MAIL_UNCOMPRESSED_CACHE_MAX_FILES,
    ZIMBRA_MAIL_URL,
    ZIMBRA_MAIL_USE_DIRECT_BUFFERS,
    ZIMBRA_MAIL_WHITELIST_MAX_NUM_ENTRIES,
    ZIMBRA_MAX_CONTACTS_PER_PAGE,
    ZIMBRA_MAX_MAIL_ITEMS_PER_PAGE,
    ZIMBRA_MAX_VOICE_ITEMS_PER_PAGE,
    ZIMBRA_MEMBER_OF,
    ZIMBRA_MEMCACHED_BIND_ADDRESS,
    ZIMBRA_MEMCACHED_BIND_PORT,
    ZIMBRA_MEMCACHED_CLIENT_BINARY_PROTOCOL_ENABLED,
    ZIMBRA_MEMCACHED_CLIENT_EXPIRY_SECONDS,
    ZIMBRA_MEMCACHED_CLIENT_HASH_ALGORITHM,
    ZIMBRA_MEMCACHED_CLIENT_SERVER_LIST,
    ZIMBRA_MEMCACHED_CLIENT_TIMEOUT_MILLIS,
    ZIMBRA_MESSAGE_CACHE_SIZE,
    ZIMBRA_MESSAGE_ID_DEDUPE_CACHE_SIZE,
    ZIMBRA_MIME_FILE_EXTENSION,
    ZIMBRA_MIME_HANDLER_CLASS,
    ZIMBRA_MIME_HANDLER_EXTENSION,
    ZIMBRA_MIME_INDEXING_ENABLED,
    ZIMBRA_MIME_PRIORITY,
    ZIMBRA_MIME_TYPE,
    ZIMBRA_MOBILE_POLICY_ALLOW_NON_PROVISIONABLE_DEVICES,
    ZIMBRA_MOBILE_POLICY_ALLOW_PARTIAL_PROVISIONING,
    ZIMBRA_MOBILE_POLICY_ALLOW_SIMPLE_DEVICE_PASSWORD,
    ZIMBRA_MOBILE_POLICY_ALPHANUMERIC_DEVICE_PASSWORD_REQUIRED,
    ZIMBRA_MOBILE_POLICY_DEVICE_ENCRYPTION_ENABLED,
    ZIMBRA_MOBILE_POLICY_DEVICE_PASSWORD_ENABLED,
    ZIMBRA_MOBILE_POLICY_DEVICE_PASSWORD_EXPIRATION,
    ZIMBRA_MOBILE_POLICY_DEVICE_PASSWORD_HISTORY,
    ZIMBRA_MOBILE_POLICY_MAX_DEVICE_PASSWORD_FAILED_ATTEMPTS,
    ZIMBRA_MOBILE_POLICY_MAX_INACTIVITY_TIME_DEVICE_LOCK,
    ZIMBRA_MOBILE_POLICY_MIN_DEVICE_PASSWORD_COMPLEX_CHARACTERS,
    ZIMBRA_MOBILE_POLICY_MIN_DEVICE_PASSWORD_LENGTH,
    ZIMBRA_MOBILE_POLICY_PASSWORD_RECOVERY_ENABLED,
    ZIMBRA_MOBILE_POLICY_REFRESH_INTERVAL,
    ZIMBRA_MTA_ANTI_SPAM_LOCK_METHOD,
    ZIMBRA_MTA_AUTH_ENABLED,
    ZIMBRA_MTA_AUTH_HOST,
    ZIMBRA_MTA_AUTH_TARGET,
    ZIMBRA_MTA_AUTH_URL,
    ZIMBRA_MTA_BLOCKED_EXTENSION,
    ZIMBRA_MTA_BLOCKED_EXTENSION_WARN_ADMIN,
    ZIMBRA_MTA_BLOCKED_EXTENSION_WARN_RECIPIENT,
    ZIMBRA_MTA_COMMON_BLOCKED_EXTENSION,
    ZIMBRA_MTA_DNS_LOOKUPS_ENABLED,
    ZIMBRA_MTA_MAX_MESSAGE_SIZE,
    ZIMBRA_MTA_MY_DESTINATION,
    ZIMBRA_MTA_MY_HOSTNAME,
    ZIMBRA_MTA_MY_NETWORKS,
    ZIMBRA_MTA_MY_ORIGIN,
    ZIMBRA_MTA_NON_SMTPD_MILTERS,
    ZIMBRA_MTA_RECIPIENT_DELIMITER,
    ZIMBRA_MTA_RELAY_HOST,
    ZIMBRA_MTA_RESTRICTION,
    ZIMBRA_MTA_SASL_AUTH_ENABLE,
    ZIMBRA_MTA_SMTPD_MILTERS,
    ZIMBRA_MTA_TLS_AUTH_ONLY,
    ZIMBRA_MTA_TLS_SECURITY_LEVEL,
    ZIMBRA_NETWORK_ACTIVATION,
    ZIMBRA_NETWORK_LICENSE,
    ZIMBRA_NEW_MAIL_NOTIFICATION_BODY,
    ZIMBRA_NEW_MAIL_NOTIFICATION_FROM,
    ZIMBRA_NEW_MAIL_NOTIFICATION_SUBJECT,
    ZIMBRA_NOTEBOOK_ACCOUNT,
    ZIMBRA_NOTEBOOK_FOLDER_CACHE_SIZE,
    ZIMBRA_NOTEBOOK_MAX_CACHED_TEMPLATES_PER_FOLDER,
    ZIMBRA_NOTEBOOK_MAX_REVISIONS,
    ZIMBRA_NOTEBOOK_PAGE_CACHE_SIZE,
    ZIMBRA_NOTEBOOK_SANITIZE_HTML,
    ZIMBRA_NOTES,
    ZIMBRA_NOTIFY_BIND_ADDRESS,
    ZIMBRA_NOTIFY_BIND_PORT,
    ZIMBRA_NOTIFY_SERVER_ENABLED,
    ZIMBRA_NOTIFY_SSL_BIND_ADDRESS,
    ZIMBRA_NOTIFY_SSL_BIND_PORT,
    ZIMBRA_NOTIFY_SSL_SERVER_ENABLED,
    ZIMBRA_OBJECT_HANDLER_CLASS,
    ZIMBRA_OBJECT_HANDLER_CONFIG,
    ZIMBRA_OBJECT_INDEXING_ENABLED,
    ZIMBRA_OBJECT_STORE_MATCHED,
    ZIMBRA_OBJECT_TYPE,
    ZIMBRA_PASSWORD_CHANGE_LISTENER,
    ZIMBRA_PASSWORD_ENFORCE_HISTORY,
    ZIMBRA_PASSWORD_HISTORY,
    ZIMBRA_PASSWORD_LOCKED,
    ZIMBRA_PASSWORD_LOCKOUT_DURATION,
    ZIMBRA_PASSWORD_LOCKOUT_ENABLED,
    ZIMBRA_PASSWORD_LOCKOUT_FAILURE_LIFETIME,
    ZIMBRA_PASSWORD_LOCKOUT_FAILURE_TIME,
    ZIMBRA_PASSWORD_LOCKOUT_LOCKED_TIME,
    ZIMBRA_PASSWORD_LOCKOUT_MAX_FAILURES,
    ZIMBRA_PASSWORD_MAX_AGE,
    ZIMBRA_PASSWORD_MAX_LENGTH,
    ZIMBRA_PASSWORD_MIN_AGE,
    ZIMBRA_PASSWORD_MIN_LENGTH,
    ZIMBRA_PASSWORD_MIN_LOWER_CASE_CHARS,
    ZIMBRA_PASSWORD_MIN_NUMERIC_CHARS,
    ZIMBRA_PASSWORD_MIN_PUNCTUATION_CHARS,
    ZIMBRA_PASSWORD_MIN_UPPER_CASE_CHARS,
    ZIMBRA_PASSWORD_MODIFIED_TIME,
    ZIMBRA_PASSWORD_MUST_CHANGE,
    ZIMBRA_POP3_ADVERTISED_NAME,
    ZIMBRA_POP3_BIND_ADDRESS,
    ZIMBRA_POP3_BIND_ON_STARTUP,
    ZIMBRA_POP3_BIND_PORT,
    ZIMBRA_POP3_CLEARTEXT_LOGIN_ENABLED,
    ZIMBRA_POP3_ENABLED,
    ZIMBRA_POP3_EXPOSE_VERSION_ON_BANNER,
    ZIMBRA_POP3_NUM_THREADS,
    ZIMBRA_POP3_PROXY_BIND_PORT,
    ZIMBRA_POP3_SASL_GSSAPI_ENABLED,
    ZIMBRA_POP3_SERVER_ENABLED,
    ZIMBRA_POP3_SHUTDOWN_GRACE_SECONDS,
    ZIMBRA_POP3_SSL_BIND_ADDRESS,
    ZIMBRA_POP3_SSL_BIND_ON_STARTUP,
    ZIMBRA_POP3_SSL_BIND_PORT,
    ZIMBRA_POP3_SSL_PROXY_BIND_PORT,
    ZIMBRA_POP3_SSL_SERVER_ENABLED,
    ZIMBRA_PORTAL_NAME,
    ZIMBRA_PRE_AUTH_KEY,
    ZIMBRA_PREF_ACCOUNT_TREE_OPEN,
    ZIMBRA_PREF_ADMIN_CONSOLE_WARN_ON_EXIT,
    ZIMBRA_PREF_ADVANCED_CLIENT_ENFORCE_MIN_DISPLAY,
    ZIMBRA_PREF_APPLE_ICAL_DELEGATION_ENABLED,
    ZIMBRA_PREF_AUTO_ADD_ADDRESS_ENABLED,
    ZIMBRA_PREF_AUTO_COMPLETE_QUICK_COMPLETION_ON_COMMA,
    ZIMBRA_PREF_AUTO_SAVE_DRAFT_INTERVAL,
    ZIMBRA_PREF_BCC_ADDRESS,
    ZIMBRA_PREF_CALENDAR_ALLOW_CANCEL_EMAIL_TO_SELF,
    ZIMBRA_PREF_CALENDAR_ALLOW_FORWARDED_INVITE,
    ZIMBRA_PREF_CALENDAR_ALLOW_PUBLISH_METHOD_INVITE,
    ZIMBRA_PREF_CALENDAR_ALWAYS_SHOW_MINI_CAL,
    ZIMBRA_PREF_CALENDAR_APPT_ALLOW_ATENDEE_EDIT,
    ZIMBRA_PREF_CALENDAR_APPT_REMINDER_WARNING_TIME,
    ZIMBRA_PREF_CALENDAR_APPT_VISIBILITY,
    ZIMBRA_PREF_CALENDAR_AUTO_ADD_INVITES,
    ZIMBRA_PREF_CALENDAR_DAY_HOUR_END,
    ZIMBRA_PREF_CALENDAR_DAY_HOUR_START,
    ZIMBRA_PREF_CALENDAR_FIRST_DAY_OF_WEEK,
    ZIMBRA_PREF_CALENDAR_FORWARD_INVITES_TO,
    ZIMBRA_PREF_CALENDAR_INITIAL_CHECKED_CALENDARS,
    ZIMBRA_PREF_CALENDAR_INITIAL_VIEW,
    ZIMBRA_PREF_CALENDAR_NOTIFY_DELEGATED_CHANGES,
    ZIMBRA_PREF_CALENDAR_REMINDER_DURATION1,
    ZIMBRA_PREF_CALENDAR_REMINDER_DURATION2,
    ZIMBRA_PREF_CALENDAR_REMINDER_EMAIL,
    ZIMBRA_PREF_CALENDAR_REMINDER_FLASH_TITLE,
    ZIMBRA_PREF_CALENDAR_REMINDER_MOBILE,
    ZIMBRA_PREF_CALENDAR_REMINDER_SEND_EMAIL,
    ZIMBRA_PREF_CALENDAR_REMINDER_SOUNDS_ENABLED,
    ZIMBRA_PREF_CALENDAR_REMINDER_Y_MESSENGER,
    ZIMBRA_PREF_CALENDAR_SEND_INVITE_DENIED_AUTO_REPLY,
    ZIMBRA_PREF_CALENDAR_SHOW_PAST_DUE_REMINDERS,
    ZIMBRA_PREF_CALENDAR_TOASTER_ENABLED,
    ZIMBRA_PREF_CALENDAR_USE_QUICK_ADD,
    ZIMBRA_PREF_CHILD_VISIBLE_ACCOUNT,
    ZIMBRA_PREF_CLIENT_TYPE,
    ZIMBRA_PREF_COMPOSE_FORMAT,
    ZIMBRA_PREF_COMPOSE_IN_NEW_WINDOW,
    ZIMBRA_PREF_CONTACTS_DISABLE_AUTOCOMPLETE_ON_CONTACT_GROUP_MEMBERS,
    ZIMBRA_PREF_CONTACTS_INITIAL_VIEW,
    ZIMBRA_PREF_CONTACTS_PER_PAGE,
    ZIMBRA_PREF_CONVERSATION_ORDER,
    ZIMBRA_PREF_CONV_READING_PANE_LOCATION,
    ZIMBRA_PREF_DEDUPE_MESSAGES_SENT_TO_SELF,
    ZIMBRA_PREF_DEFAULT_PRINT_FONT_SIZE,
    ZIMBRA_PREF_DEFAULT_SIGNATURE_ID,
    ZIMBRA_PREF_DELETE_INVITE_ON_REPLY,
    ZIMBRA_PREF_DISABLED_ZIMLETS,
    ZIMBRA_PREF_DISPLAY_EXTERNAL_IMAGES,
    ZIMBRA_PREF_FOLDER_COLOR_ENABLED,
    ZIMBRA_PREF_FOLDER_TREE_OPEN,
    ZIMBRA_PREF_FORWARD_INCLUDE_ORIGINAL_TEXT,
    ZIMBRA_PREF_FORWARD_REPLY_FORMAT,
    ZIMBRA_PREF_FORWARD_REPLY_IN_ORIGINAL_FORMAT,
    ZIMBRA_PREF_FORWARD_REPLY_PREFIX_CHAR,
    ZIMBRA_PREF_FROM_ADDRESS,
    ZIMBRA_PREF_FROM_DISPLAY,
    ZIMBRA_PREF_GAL_AUTO_COMPLETE_ENABLED,
    ZIMBRA_PREF_GAL_SEARCH_ENABLED,
    ZIMBRA_PREF_GET_MAIL_ACTION,
    ZIMBRA_PREF_GROUP_MAIL_BY,
    ZIMBRA_PREF_HTML_EDITOR_DEFAULT_FONT_COLOR,
    ZIMBRA_PREF_HTML_EDITOR_DEFAULT_FONT_FAMILY,
    ZIMBRA_PREF_HTML_EDITOR_DEFAULT_FONT_SIZE,
    ZIMBRA_PREF_IDENTITY_ID,
    ZIMBRA_PREF_IDENTITY_NAME,
    ZIMBRA_PREF_IMAP_SEARCH_FOLDERS_ENABLED,
    ZIMBRA_PREF_IM_AUTO_LOGIN,
    ZIMBRA_PREF_IM_BUDDY_LIST_SORT,
    ZIMBRA_PREF_IM_CUSTOM_STATUS_MESSAGE,
    ZIMBRA_PREF_IM_FLASH_ICON,
    ZIMBRA_PREF_IM_FLASH_TITLE,
    ZIMBRA_PREF_IM_HIDE_BLOCKED_BUDDIES,
    ZIMBRA_PREF_IM_HIDE_OFFLINE_BUDDIES,
    ZIMBRA_PREF_IM_IDLE_STATUS,
    ZIMBRA_PREF_IM_IDLE_TIMEOUT,
    ZIMBRA_PREF_IM_INSTANT_NOTIFY,
    ZIMBRA_PREF_IM_LOG_CHATS,
    ZIMBRA_PREF_IM_LOG_CHATS_ENABLED,
    ZIMBRA_PREF_IM_NOTIFY_PRESENCE,
    ZIMBRA_PREF_IM_NOTIFY_STATUS,
    ZIMBRA_PREF_IM_REPORT_IDLE,
    ZIMBRA_PREF_IM_SOUNDS_ENABLED,
    ZIMBRA_PREF_IM_TOASTER_ENABLED,
    ZIMBRA_PREF_IM_YAHOO_ID,
    ZIMBRA_PREF_INBOX_READ_LIFETIME,
    ZIMBRA_PREF_INBOX_UNREAD_LIFETIME,
    ZIMBRA_PREF_INCLUDE_SPAM_IN_SEARCH,
    ZIMBRA_PREF_INCLUDE_TRASH_IN_SEARCH,
    ZIMBRA_PREF_ITEMS_PER_VIRTUAL_PAGE,
    ZIMBRA_PREF_JUNK_LIFETIME,
    ZIMBRA_PREF_LABEL,
    ZIMBRA_PREF_LIST_VIEW_COLUMNS,
    ZIMBRA_PREF_LOCALE,
    ZIMBRA_PREF_MAIL_DEFAULT_CHARSET,
    ZIMBRA_PREF_MAIL_FLASH_ICON,
    ZIMBRA_PREF_MAIL_FLASH_TITLE,
    ZIMBRA_PREF_MAIL_FOLDERS_CHECKED_FOR_NEW_MSG_INDICATOR,
    ZIMBRA_PREF_MAIL_FORWARDING_ADDRESS,
    ZIMBRA_PREF_MAIL_INITIAL_SEARCH,
    ZIMBRA_PREF_MAIL_ITEMS_PER_PAGE,
    ZIMBRA_PREF_MAIL_LOCAL_DELIVERY_DISABLED,
    ZIMBRA_PREF_MAIL_POLLING_INTERVAL,
    ZIMBRA_PREF_MAIL_SELECT_AFTER_DELETE,
    ZIMBRA_PREF_MAIL_SEND_READ_RECEIPTS,
    ZIMBRA_PREF_MAIL_SIGNATURE,
    ZIMBRA_PREF_MAIL_SIGNATURE_ENABLED,
    ZIMBRA_PREF_MAIL_SIGNATURE_HTML,
    ZIMBRA_PREF_MAIL_SIGNATURE_STYLE,
    ZIMBRA_PREF_MAIL_SOUNDS_ENABLED,
    ZIMBRA_PREF_MAIL_TOASTER_ENABLED,
    ZIMBRA_PREF_MANDATORY_SPELL_CHECK_ENABLED,
    ZIMBRA_PREF_MARK_MSG_READ,
    ZIMBRA_PREF_MESSAGE_VIEW_HTML_PREFERRED,
    ZIMBRA_PREF_NEW_MAIL_NOTIFICATION_ADDRESS,
    ZIMBRA_PREF_NEW_MAIL_NOTIFICATION_ENABLED,
    ZIMBRA_PREF_OPEN_MAIL_IN_NEW_WINDOW,
    ZIMBRA_PREF_OUT_OF_OFFICE_CACHE_DURATION,
    ZIMBRA_PREF_OUT_OF_OFFICE_DIRECT_ADDRESS,
    ZIMBRA_PREF_OUT_OF_OFFICE_FROM_DATE,
    ZIMBRA_PREF_OUT_OF_OFFICE_REPLY,
    ZIMBRA_PREF_OUT_OF_OFFICE_REPLY_ENABLED,
    ZIMBRA_PREF_OUT_OF_OFFICE_UNTIL_DATE,
    ZIMBRA_PREF_POP3_DOWNLOAD_SINCE,
    ZIMBRA_PREF_READING_PANE_ENABLED,
    ZIMBRA_PREF_READING_PANE_LOCATION,
    ZIMBRA_PREF_READ_RECEIPTS_TO_ADDRESS,
    ZIMBRA_PREF_REPLY_INCLUDE_ORIGINAL_TEXT,
    ZIMBRA_PREF_REPLY_TO_ADDRESS,
    ZIMBRA_PREF_REPLY_TO_DISPLAY,
    ZIMBRA_PREF_REPLY_TO_ENABLED,
    ZIMBRA_PREF_SAVE_TO_SENT,
    ZIMBRA_PREF_SEARCH_TREE_OPEN,
    ZIMBRA_PREF_SENT_LIFETIME,
    ZIMBRA_PREF_SENT_MAIL_FOLDER,
    ZIMBRA_PREF_SHARED_ADDR_BOOK_AUTO_COMPLETE_ENABLED,
    ZIMBRA_PREF_SHORTCUTS,
    ZIMBRA_PREF_SHOW_CALENDAR_WEEK,
    ZIMBRA_PREF_SHOW_FRAGMENTS,
    ZIMBRA_PREF_SHOW_SEARCH_STRING,
    ZIMBRA_PREF_SHOW_SELECTION_CHECKBOX,
    ZIMBRA_PREF_SKIN,
    ZIMBRA_PREF_SPELL_DICTIONARY,
    ZIMBRA_PREF_SPELL_IGNORE_WORD,
    ZIMBRA_PREF_STANDARD_CLIENT_ACCESSIBILITY_MODE,
    ZIMBRA_PREF_TAG_TREE_OPEN,
    ZIMBRA_PREF_TIME_ZONE_ID,
    ZIMBRA_PREF_TRASH_LIFETIME,
    ZIMBRA_PREF_USE_DEFAULT_IDENTITY_SETTINGS,
    ZIMBRA_PREF_USE_KEYBOARD_SHORTCUTS,
    ZIMBRA_PREF_USE_RFC2231,
    ZIMBRA_PREF_USE_TIME_ZONE_LIST_IN_CALENDAR,
    ZIMBRA_PREF_VOICE_ITEMS_PER_PAGE,
    ZIMBRA_PREF_WARN_ON_EXIT,
    ZIMBRA_PREF_WHEN_IN_FOLDER_IDS,
    ZIMBRA_PREF_WHEN_IN_FOLDERS_ENABLED,
    ZIMBRA_PREF_WHEN_SENT_TO_ADDRESSES,
    ZIMBRA_PREF_WHEN_SENT_TO_ENABLED,
    ZIMBRA_PREF_ZIMLETS,
    ZIMBRA_PREF_ZIMLET_TREE_OPEN,
    ZIMBRA_PROXY_ALLOWED_DOMAINS,
    ZIMBRA_PROXY_CACHEABLE_CONTENT_TYPES,
    ZIMBRA_PUBLIC_SERVICE_HOSTNAME,
    ZIMBRA_PUBLIC_SERVICE_PORT,
    ZIMBRA_PUBLIC_SERVICE_PROTOCOL,
    ZIMBRA_QUOTA_LAST_WARN_TIME,
    ZIMBRA_QUOTA_WARN_INTERVAL,
    ZIMBRA_QUOTA_WARN_MESSAGE,
    ZIMBRA_QUOTA_WARN_PERCENT,
    ZIMBRA_REDO_LOG_ARCHIVE_DIR,
    ZIMBRA_REDO_LOG_CRASH_RECOVERY_LOOKBACK_SEC,
    ZIMBRA_REDO_LOG_DELETE_ON_ROLLOVER,
    ZIMBRA_REDO_LOG_ENABLED,
    ZIMBRA_REDO_LOG_FSYNC_INTERVAL_MS,
    ZIMBRA_REDO_LOG_LOG_PATH,
    ZIMBRA_REDO_LOG_PROVIDER,
    ZIMBRA_REDO_LOG_ROLLOVER_FILE_SIZE_KB,
    ZIMBRA_REDO_LOG_ROLLOVER_HARD_MAX_FILE_SIZE_KB,
    ZIMBRA_REDO_LOG_ROLLOVER_MIN_FILE_AGE,
    ZIMBRA_REMOTE_MANAGEMENT_COMMAND,
    ZIMBRA_REMOTE_MANAGEMENT_PORT,
    ZIMBRA_REMOTE_MANAGEMENT_PRIVATE_KEY_PATH,
    ZIMBRA_REMOTE_MANAGEMENT_USER,
    ZIMBRA_RESPONSE_HEADER,
    ZIMBRA_REVERSE_PROXY_ADMIN_IP_ADDRESS,
    ZIMBRA_REVERSE_PROXY_ADMIN_PORT_ATTRIBUTE,
    ZIMBRA_REVERSE_PROXY_AUTH_WAIT_INTERVAL,
    ZIMBRA_REVERSE_PROXY_CACHE_ENTRY_TTL,
    ZIMBRA_REVERSE_PROXY_CACHE_FETCH_TIMEOUT,
    ZIMBRA_REVERSE_PROXY_CACHE_RECONNECT_INTERVAL,
    ZIMBRA_REVERSE_PROXY_CONNECT_TIMEOUT,
    ZIMBRA_REVERSE_PROXY_DEFAULT_REALM,
    ZIMBRA_REVERSE_PROXY_DOMAIN_NAME_ATTRIBUTE,
    ZIMBRA_REVERSE_PROXY_DOMAIN_NAME_QUERY,
    ZIMBRA_REVERSE_PROXY_DOMAIN_NAME_SEARCH_BASE,
    ZIMBRA_REVERSE_PROXY_HTTP_ENABLED,
    ZIMBRA_REVERSE_PROXY_HTTP_PORT_ATTRIBUTE,
    ZIMBRA_REVERSE_PROXY_IMAP_ENABLED_CAPABILITY,
    ZIMBRA_REVERSE_PROXY_IMAP_EXPOSE_VERSION_ON_BANNER,
    ZIMBRA_REVERSE_PROXY_IMAP_PORT_ATTRIBUTE,
    ZIMBRA_REVERSE_PROXY_IMAP_SASL_GSSAPI_ENABLED,
    ZIMBRA_REVERSE_PROXY_IMAP_SASL_PLAIN_ENABLED,
    ZIMBRA_REVERSE_PROXY_IMAP_SSL_PORT_ATTRIBUTE,
    ZIMBRA_REVERSE_PROXY_IMAP_START_TLS_MODE,
    ZIMBRA_REVERSE_PROXY_INACTIVITY_TIMEOUT,
    ZIMBRA_REVERSE_PROXY_IP_LOGIN_LIMIT,
    ZIMBRA_REVERSE_PROXY_IP_LOGIN_LIMIT_TIME,
    ZIMBRA_REVERSE_PROXY_IP_THROTTLE_MSG,
    ZIMBRA_REVERSE_PROXY_LOG_LEVEL,
    ZIMBRA_REVERSE_PROXY_LOOKUP_TARGET,
    ZIMBRA_REVERSE_PROXY_MAIL_ENABLED,
    ZIMBRA_REVERSE_PROXY_MAIL_HOST_ATTRIBUTE,
    ZIMBRA_REVERSE_PROXY_MAIL_HOST_QUERY,
    ZIMBRA_REVERSE_PROXY_MAIL_HOST_SEARCH_BASE,
    ZIMBRA_REVERSE_PROXY_MAIL_MODE,
    ZIMBRA_REVERSE_PROXY_PASS_ERRORS,
    ZIMBRA_REVERSE_PROXY_POP3_ENABLED_CAPABILITY,
    ZIMBRA_REVERSE_PROXY_POP3_EXPOSE_VERSION_ON_BANNER,
    ZIMBRA_REVERSE_PROXY_POP3_PORT_ATTRIBUTE,
    ZIMBRA_REVERSE_PROXY_POP3_SASL_GSSAPI_ENABLED,
    ZIMBRA_REVERSE_PROXY_POP3_SASL_PLAIN_ENABLED,
    ZIMBRA_REVERSE_PROXY_POP3_SSL_PORT_ATTRIBUTE,
    ZIMBRA_REVERSE_PROXY_POP3_START_TLS_MODE,
    ZIMBRA_REVERSE_PROXY_PORT_QUERY,
    ZIMBRA_REVERSE_PROXY_PORT_SEARCH_BASE,
    ZIMBRA_REVERSE_PROXY_ROUTE_LOOKUP_TIMEOUT,
    ZIMBRA_REVERSE_PROXY_ROUTE_LOOKUP_TIMEOUT_CACHE,
    ZIMBRA_REVERSE_PROXY_SEND_IMAP_ID,
    ZIMBRA_REVERSE_PROXY_SEND_POP3_XOIP,
    ZIMBRA_REVERSE_PROXY_SSL_CIPHERS,
    ZIMBRA_REVERSE_PROXY_USE_EXTERNAL_ROUTE,
    ZIMBRA_REVERSE_PROXY_USER_LOGIN_LIMIT,
    ZIMBRA_REVERSE_PROXY_USER_LOGIN_LIMIT_TIME,
    ZIMBRA_REVERSE_PROXY_USER_NAME_ATTRIBUTE,
    ZIMBRA_REVERSE_PROXY_USER_THROTTLE_MSG,
    ZIMBRA_REVERSE_PROXY_WORKER_CONNECTIONS,
    ZIMBRA_REVERSE_PROXY_WORKER_PROCESSES,
    ZIMBRA_SASL_GSSAPI_REQUIRES_TLS,
    ZIMBRA_SCHEDULED_TASK_NUM_THREADS,
    ZIMBRA_SERVER_EXTRA_OBJECT_CLASS,
    ZIMBRA_SERVER_ID,
    ZIMBRA_SERVER_INHERITED_ATTR,
    ZIMBRA_SERVICE_ENABLED,
    ZIMBRA_SERVICE_HOSTNAME,
    ZIMBRA_SERVICE_INSTALLED,
    ZIMBRA_SHARE_INFO,
    ZIMBRA_SIGNATURE_ID,
    ZIMBRA_SIGNATURE_MAX_NUM_ENTRIES,
    ZIMBRA_SIGNATURE_MIN_NUM_ENTRIES,
    ZIMBRA_SIGNATURE_NAME,
    ZIMBRA_SKIN_BACKGROUND_COLOR,
    ZIMBRA_SKIN_FAVICON,
    ZIMBRA_SKIN_FOREGROUND_COLOR,
    ZIMBRA_SKIN_LOGO_APP_BANNER,
    ZIMBRA_SKIN_LOGO_LOGIN_BANNER,
    ZIMBRA_SKIN_LOGO_URL,
    ZIMBRA_SKIN_SECONDARY_COLOR,
    ZIMBRA_SKIN_SELECTION_COLOR,
    ZIMBRA_SMTP_ENABLE_TRACE,
    ZIMBRA_SMTP_HOSTNAME,
    ZIMBRA_SMTP_PORT,
    ZIMBRA_SMTP_RESTRICT_ENVELOPE_FROM,
    ZIMBRA_SMTP_SEND_ADD_AUTHENTICATED_USER,
    ZIMBRA_SMTP_SEND_ADD_MAILER,
    ZIMBRA_SMTP_SEND_ADD_ORIGINATING_IP,
    ZIMBRA_SMTP_SEND_PARTIAL,
    ZIMBRA_SMTP_TIMEOUT,
    ZIMBRA_SOAP_EXPOSE_VERSION,
    ZIMBRA_SOAP_REQUEST_MAX_SIZE,
    ZIMBRA_SPAM_APPLY_USER_FILTERS,
    ZIMBRA_SPAM_CHECK_ENABLED,
    ZIMBRA_SPAM_HEADER,
    ZIMBRA_SPAM_HEADER_VALUE,
    ZIMBRA_SPAM_IS_NOT_SPAM_ACCOUNT,
    ZIMBRA_SPAM_IS_SPAM_ACCOUNT,
    ZIMBRA_SPAM_KILL_PERCENT,
    ZIMBRA_SPAM_REPORT_ENVELOPE_FROM,
    ZIMBRA_SPAM_REPORT_SENDER_HEADER,
    ZIMBRA_SPAM_REPORT_TYPE_HAM,
    ZIMBRA_SPAM_REPORT_TYPE_HEADER,
    ZIMBRA_SPAM_REPORT_TYPE_SPAM,
    ZIMBRA_SPAM_SUBJECT_TAG,
    ZIMBRA_SPAM_TAG_PERCENT,
    ZIMBRA_SPELL_AVAILABLE_DICTIONARY,
    ZIMBRA_SPELL_CHECK_URL,
    ZIMBRA_SSH_PUBLIC_KEY,
    ZIMBRA_SSL_CA_CERT,
    ZIMBRA_SSL_CA_KEY,
    ZIMBRA_SSL_CERTIFICATE,
    ZIMBRA_SSL_EXCLUDE_CIPHER_SUITES,
    ZIMBRA_SSL_PRIVATE_KEY,
    ZIMBRA_STAT_THREAD_NAME_PREFIX,
    ZIMBRA_SYNC_WINDOW_SIZE,
    ZIMBRA_TABLE_MAINTENANCE_GROWTH_FACTOR,
    ZIMBRA_TABLE_MAINTENANCE_MAX_ROWS,
    ZIMBRA_TABLE_MAINTENANCE_MIN_ROWS,
    ZIMBRA_TABLE_MAINTENANCE_OPERATION,
    ZIMBRA_TEXT_ANALYZER,
    ZIMBRA_TIME_ZONE_DAYLIGHT_DT_START,
    ZIMBRA_TIME_ZONE_DAYLIGHT_OFFSET,
    ZIMBRA_TIME_ZONE_DAYLIGHT_R_RULE,
    ZIMBRA_TIME_ZONE_STANDARD_DT_START,
    ZIMBRA_TIME_ZONE_STANDARD_OFFSET,
    ZIMBRA_TIME_ZONE_STANDARD_R_RULE,
    ZIMBRA_USER_SERVICES_ENABLED,
    ZIMBRA_VERSION,
    ZIMBRA_VERSION_CHECK_INTERVAL,
    ZIMBRA_VERSION_CHECK_LAST_ATTEMPT,
    ZIMBRA_VERSION_CHECK_LAST_RESPONSE,
    ZIMBRA_VERSION_CHECK_LAST_SUCCESS,
    ZIMBRA_VERSION_CHECK_NOTIFICATION_BODY,
    ZIMBRA_VERSION_CHECK_NOTIFICATION_EMAIL,
    ZIMBRA_VERSION_CHECK_NOTIFICATION_EMAIL_FROM,
    ZIMBRA_VERSION_CHECK_NOTIFICATION_SUBJECT,
    ZIMBRA_VERSION_CHECK_SEND_NOTIFICATIONS,
    ZIMBRA_VERSION_CHECK_SERVER,
    ZIMBRA_VERSION_CHECK_URL,
    ZIMBRA_VIRTUAL_HOSTNAME,
    ZIMBRA_VIRTUAL_IP_ADDRESS,
    ZIMBRA_VIRUS_BLOCK_ENCRYPTED_ARCHIVE,
    ZIMBRA_VIRUS_CHECK_ENABLED,
    ZIMBRA_VIRUS_DEFINITIONS_UPDATE_FREQUENCY,
    ZIMBRA_VIRUS_WARN_ADMIN,
    ZIMBRA_VIRUS_WARN_RECIPIENT,
    ZIMBRA_WEB_CLIENT_ADMIN_REFERENCE,
    ZIMBRA_WEB_CLIENT_LOGIN_URL,
    ZIMBRA_WEB_CLIENT_LOGOUT_URL,
    ZIMBRA_WEB_CLIENT_SHOW_OFFLINE_LINK,
    ZIMBRA_XMPP_COMPONENT_CATEGORY,
    ZIMBRA_XMPP_COMPONENT_CLASS_NAME,
    ZIMBRA_XMPP_COMPONENT_FEATURES,
    ZIMBRA_XMPP_COMPONENT_NAME,
    ZIMBRA_XMPP_COMPONENT_TYPE,
    ZIMBRA_XMPP_ENABLED,
    ZIMBRA_XMPP_SERVER_DIALBACK_KEY,
    ZIMBRA_YAHOO_ID,
    ZIMBRA_ZIMLET_AVAILABLE_ZIMLETS,
    ZIMBRA_ZIMLET_CONTENT_OBJECT,
    ZIMBRA_ZIMLET_DESCRIPTION,
    ZIMBRA_ZIMLET_DOMAIN_AVAILABLE_ZIMLETS,
    ZIMBRA_ZIMLET_ENABLED,
    ZIMBRA_ZIMLET_HANDLER_CLASS,
    ZIMBRA_ZIMLET_HANDLER_CONFIG,
    ZIMBRA_ZIMLET_INDEXING_ENABLED,
    ZIMBRA_ZIMLET_IS_EXTENSION,
    ZIMBRA_ZIMLET_KEYWORD,
    ZIMBRA_ZIMLET_PANEL_ITEM,
    ZIMBRA_ZIMLET_PRIORITY,
    ZIMBRA_ZIMLET_SCRIPT,
    ZIMBRA_ZIMLET_SERVER_INDEX_REGEX,
    ZIMBRA_ZIMLET_STORE_MATCHED,
    ZIMBRA_ZIMLET_TARGET,
    ZIMBRA_ZIMLET_USER_PROPERTIES,
    ZIMBRA_ZIMLET_VERSION,
];

/// `(symbol, name)` pairs, in catalog order.
pub const SYMBOLS: &[(&str, &str)] = &[
    ("AMAVIS_BAD_HEADER_ADMIN", AMAVIS_BAD_HEADER_ADMIN),
    ("AMAVIS_BAD_HEADER_LOVER", AMAVIS_BAD_HEADER_LOVER),
    ("AMAVIS_BAD_HEADER_QUARANTINE_TO", AMAVIS_BAD_HEADER_QUARANTINE_TO),
    ("AMAVIS_BANNED_ADMIN", AMAVIS_BANNED_ADMIN),
    ("AMAVIS_BANNED_FILES_LOVER", AMAVIS_BANNED_FILES_LOVER),
    ("AMAVIS_BANNED_QUARANTINE_TO", AMAVIS_BANNED_QUARANTINE_TO),
    ("AMAVIS_BANNED_RULE_NAMES", AMAVIS_BANNED_RULE_NAMES),
    ("AMAVIS_BLACKLIST_SENDER", AMAVIS_BLACKLIST_SENDER),
    ("AMAVIS_BYPASS_BANNED_CHECKS", AMAVIS_BYPASS_BANNED_CHECKS),
    ("AMAVIS_BYPASS_HEADER_CHECKS", AMAVIS_BYPASS_HEADER_CHECKS),
    ("AMAVIS_BYPASS_SPAM_CHECKS", AMAVIS_BYPASS_SPAM_CHECKS),
    ("AMAVIS_BYPASS_VIRUS_CHECKS", AMAVIS_BYPASS_VIRUS_CHECKS),
    ("AMAVIS_LOCAL", AMAVIS_LOCAL),
    ("AMAVIS_MESSAGE_SIZE_LIMIT", AMAVIS_MESSAGE_SIZE_LIMIT),
    ("AMAVIS_NEW_VIRUS_ADMIN", AMAVIS_NEW_VIRUS_ADMIN),
    ("AMAVIS_SPAM_ADMIN", AMAVIS_SPAM_ADMIN),
    ("AMAVIS_SPAM_KILL_LEVEL", AMAVIS_SPAM_KILL_LEVEL),
    ("AMAVIS_SPAM_LOVER", AMAVIS_SPAM_LOVER),
    ("AMAVIS_SPAM_MODIFIES_SUBJ", AMAVIS_SPAM_MODIFIES_SUBJ),
    ("AMAVIS_SPAM_QUARANTINE_TO", AMAVIS_SPAM_QUARANTINE_TO),
    ("AMAVIS_SPAM_TAG2_LEVEL", AMAVIS_SPAM_TAG2_LEVEL),
    ("AMAVIS_SPAM_TAG_LEVEL", AMAVIS_SPAM_TAG_LEVEL),
    ("AMAVIS_VIRUS_ADMIN", AMAVIS_VIRUS_ADMIN),
    ("AMAVIS_VIRUS_LOVER", AMAVIS_VIRUS_LOVER),
    ("AMAVIS_VIRUS_QUARANTINE_TO", AMAVIS_VIRUS_QUARANTINE_TO),
    ("AMAVIS_WARN_BAD_HEADER_RECIP", AMAVIS_WARN_BAD_HEADER_RECIP),
    ("AMAVIS_WARN_BANNED_RECIP", AMAVIS_WARN_BANNED_RECIP),
    ("AMAVIS_WARN_VIRUS_RECIP", AMAVIS_WARN_VIRUS_RECIP),
    ("AMAVIS_WHITELIST_SENDER", AMAVIS_WHITELIST_SENDER),
    ("C", C),
    ("CN", CN),
    ("CO", CO),
    ("COMPANY", COMPANY),
    ("DESCRIPTION", DESCRIPTION),
    ("DISPLAY_NAME", DISPLAY_NAME),
    ("GIVEN_NAME", GIVEN_NAME),
    ("GN", GN),
    ("HOME_PHONE", HOME_PHONE),
    ("INITIALS", INITIALS),
    ("L", L),
    ("MAIL", MAIL),
    ("MOBILE", MOBILE),
    ("O", O),
    ("OBJECT_CLASS", OBJECT_CLASS),
    ("OU", OU),
    ("PAGER", PAGER),
    ("PHYSICAL_DELIVERY_OFFICE_NAME", PHYSICAL_DELIVERY_OFFICE_NAME),
    ("POSTAL_ADDRESS", POSTAL_ADDRESS),
    ("POSTAL_CODE", POSTAL_CODE),
    ("SN", SN),
    ("ST", ST),
    ("STREET", STREET),
    ("STREET_ADDRESS", STREET_ADDRESS),
    ("TELEPHONE_NUMBER", TELEPHONE_NUMBER),
    ("TITLE", TITLE),
    ("UID", UID),
    ("USER_PASSWORD", USER_PASSWORD),
    ("ZIMBRA_ACCOUNT_CALENDAR_USER_TYPE", ZIMBRA_ACCOUNT_CALENDAR_USER_TYPE),
    ("ZIMBRA_ACCOUNT_CLIENT_ATTR", ZIMBRA_ACCOUNT_CLIENT_ATTR),
    ("ZIMBRA_ACCOUNT_EXTRA_OBJECT_CLASS", ZIMBRA_ACCOUNT_EXTRA_OBJECT_CLASS),
    ("ZIMBRA_ACCOUNT_STATUS", ZIMBRA_ACCOUNT_STATUS),
    ("ZIMBRA_ACE", ZIMBRA_ACE),
    ("ZIMBRA_ADMIN_AUTH_TOKEN_LIFETIME", ZIMBRA_ADMIN_AUTH_TOKEN_LIFETIME),
    ("ZIMBRA_ADMIN_CONSOLE_CATCH_ALL_ADDRESS_ENABLED", ZIMBRA_ADMIN_CONSOLE_CATCH_ALL_ADDRESS_ENABLED),
    ("ZIMBRA_ADMIN_CONSOLE_DNS_CHECK_ENABLED", ZIMBRA_ADMIN_CONSOLE_DNS_CHECK_ENABLED),
    ("ZIMBRA_ADMIN_CONSOLE_LDAP_AUTH_ENABLED", ZIMBRA_ADMIN_CONSOLE_LDAP_AUTH_ENABLED),
    ("ZIMBRA_ADMIN_CONSOLE_LOGIN_MESSAGE", ZIMBRA_ADMIN_CONSOLE_LOGIN_MESSAGE),
    ("ZIMBRA_ADMIN_CONSOLE_LOGIN_URL", ZIMBRA_ADMIN_CONSOLE_LOGIN_URL),
    ("ZIMBRA_ADMIN_CONSOLE_LOGOUT_URL", ZIMBRA_ADMIN_CONSOLE_LOGOUT_URL),
    ("ZIMBRA_ADMIN_CONSOLE_SKIN_ENABLED", ZIMBRA_ADMIN_CONSOLE_SKIN_ENABLED),
    ("ZIMBRA_ADMIN_CONSOLE_UI_COMPONENTS", ZIMBRA_ADMIN_CONSOLE_UI_COMPONENTS),
    ("ZIMBRA_ADMIN_EXT_DISABLE_UI_UNDEPLOY", ZIMBRA_ADMIN_EXT_DISABLE_UI_UNDEPLOY),
    ("ZIMBRA_ADMIN_PORT", ZIMBRA_ADMIN_PORT),
    ("ZIMBRA_ADMIN_SAVED_SEARCHES", ZIMBRA_ADMIN_SAVED_SEARCHES),
    ("ZIMBRA_ADMIN_URL", ZIMBRA_ADMIN_URL),
    ("ZIMBRA_ALIAS_TARGET_ID", ZIMBRA_ALIAS_TARGET_ID),
    ("ZIMBRA_ALLOW_ANY_FROM_ADDRESS", ZIMBRA_ALLOW_ANY_FROM_ADDRESS),
    ("ZIMBRA_ALLOW_FROM_ADDRESS", ZIMBRA_ALLOW_FROM_ADDRESS),
    ("ZIMBRA_ALLOW_NON_LDH_CHARS_IN_DOMAIN", ZIMBRA_ALLOW_NON_LDH_CHARS_IN_DOMAIN),
    ("ZIMBRA_ARCHIVE_ACCOUNT", ZIMBRA_ARCHIVE_ACCOUNT),
    ("ZIMBRA_ARCHIVE_ACCOUNT_DATE_TEMPLATE", ZIMBRA_ARCHIVE_ACCOUNT_DATE_TEMPLATE),
    ("ZIMBRA_ARCHIVE_ACCOUNT_NAME_TEMPLATE", ZIMBRA_ARCHIVE_ACCOUNT_NAME_TEMPLATE),
    ("ZIMBRA_ARCHIVE_MAIL_FROM", ZIMBRA_ARCHIVE_MAIL_FROM),
    ("ZIMBRA_ATTACHMENTS_BLOCKED", ZIMBRA_ATTACHMENTS_BLOCKED),
    ("ZIMBRA_ATTACHMENTS_INDEXED_TEXT_LIMIT", ZIMBRA_ATTACHMENTS_INDEXED_TEXT_LIMIT),
    ("ZIMBRA_ATTACHMENTS_INDEXING_ENABLED", ZIMBRA_ATTACHMENTS_INDEXING_ENABLED),
    ("ZIMBRA_ATTACHMENTS_SCAN_CLASS", ZIMBRA_ATTACHMENTS_SCAN_CLASS),
    ("ZIMBRA_ATTACHMENTS_SCAN_ENABLED", ZIMBRA_ATTACHMENTS_SCAN_ENABLED),
    ("ZIMBRA_ATTACHMENTS_SCAN_URL", ZIMBRA_ATTACHMENTS_SCAN_URL),
    ("ZIMBRA_ATTACHMENTS_VIEW_IN_HTML_ONLY", ZIMBRA_ATTACHMENTS_VIEW_IN_HTML_ONLY),
    ("ZIMBRA_AUTH_FALLBACK_TO_LOCAL", ZIMBRA_AUTH_FALLBACK_TO_LOCAL),
    ("ZIMBRA_AUTH_KERBEROS5_REALM", ZIMBRA_AUTH_KERBEROS5_REALM),
    ("ZIMBRA_AUTH_LDAP_BIND_DN", ZIMBRA_AUTH_LDAP_BIND_DN),
    ("ZIMBRA_AUTH_LDAP_EXTERNAL_DN", ZIMBRA_AUTH_LDAP_EXTERNAL_DN),
    ("ZIMBRA_AUTH_LDAP_SEARCH_BASE", ZIMBRA_AUTH_LDAP_SEARCH_BASE),
    ("ZIMBRA_AUTH_LDAP_SEARCH_BIND_DN", ZIMBRA_AUTH_LDAP_SEARCH_BIND_DN),
    ("ZIMBRA_AUTH_LDAP_SEARCH_BIND_PASSWORD", ZIMBRA_AUTH_LDAP_SEARCH_BIND_PASSWORD),
    ("ZIMBRA_AUTH_LDAP_SEARCH_FILTER", ZIMBRA_AUTH_LDAP_SEARCH_FILTER),
    ("ZIMBRA_AUTH_LDAP_START_TLS_ENABLED", ZIMBRA_AUTH_LDAP_START_TLS_ENABLED),
    ("ZIMBRA_AUTH_LDAP_URL", ZIMBRA_AUTH_LDAP_URL),
    ("ZIMBRA_AUTH_MECH", ZIMBRA_AUTH_MECH),
    ("ZIMBRA_AUTH_TOKEN_KEY", ZIMBRA_AUTH_TOKEN_KEY),
    ("ZIMBRA_AUTH_TOKEN_LIFETIME", ZIMBRA_AUTH_TOKEN_LIFETIME),
    ("ZIMBRA_AUTH_TOKEN_VALIDITY_VALUE", ZIMBRA_AUTH_TOKEN_VALIDITY_VALUE),
    ("ZIMBRA_AUTH_TOKEN_VALIDITY_VALUE_ENABLED", ZIMBRA_AUTH_TOKEN_VALIDITY_VALUE_ENABLED),
    ("ZIMBRA_AUTO_SUBMITTED_NULL_RETURN_PATH", ZIMBRA_AUTO_SUBMITTED_NULL_RETURN_PATH),
    ("ZIMBRA_AVAILABLE_LOCALE", ZIMBRA_AVAILABLE_LOCALE),
    ("ZIMBRA_AVAILABLE_SKIN", ZIMBRA_AVAILABLE_SKIN),
    ("ZIMBRA_BACKUP_AUTO_GROUPED_INTERVAL", ZIMBRA_BACKUP_AUTO_GROUPED_INTERVAL),
    ("ZIMBRA_BACKUP_AUTO_GROUPED_NUM_GROUPS", ZIMBRA_BACKUP_AUTO_GROUPED_NUM_GROUPS),
    ("ZIMBRA_BACKUP_AUTO_GROUPED_THROTTLED", ZIMBRA_BACKUP_AUTO_GROUPED_THROTTLED),
    ("ZIMBRA_BACKUP_MODE", ZIMBRA_BACKUP_MODE),
    ("ZIMBRA_BACKUP_REPORT_EMAIL_RECIPIENTS", ZIMBRA_BACKUP_REPORT_EMAIL_RECIPIENTS),
    ("ZIMBRA_BACKUP_REPORT_EMAIL_SENDER", ZIMBRA_BACKUP_REPORT_EMAIL_SENDER),
    ("ZIMBRA_BACKUP_REPORT_EMAIL_SUBJECT_PREFIX", ZIMBRA_BACKUP_REPORT_EMAIL_SUBJECT_PREFIX),
    ("ZIMBRA_BACKUP_SKIP_BLOBS", ZIMBRA_BACKUP_SKIP_BLOBS),
    ("ZIMBRA_BACKUP_SKIP_HSM_BLOBS", ZIMBRA_BACKUP_SKIP_HSM_BLOBS),
    ("ZIMBRA_BACKUP_SKIP_SEARCH_INDEX", ZIMBRA_BACKUP_SKIP_SEARCH_INDEX),
    ("ZIMBRA_BACKUP_TARGET", ZIMBRA_BACKUP_TARGET),
    ("ZIMBRA_BATCHED_INDEXING_SIZE", ZIMBRA_BATCHED_INDEXING_SIZE),
    ("ZIMBRA_CALENDAR_CAL_DAV_ALTERNATE_CALENDAR_HOME_SET", ZIMBRA_CALENDAR_CAL_DAV_ALTERNATE_CALENDAR_HOME_SET),
    ("ZIMBRA_CALENDAR_CAL_DAV_CLEAR_TEXT_PASSWORD_ENABLED", ZIMBRA_CALENDAR_CAL_DAV_CLEAR_TEXT_PASSWORD_ENABLED),
    ("ZIMBRA_CALENDAR_CAL_DAV_DEFAULT_CALENDAR_ID", ZIMBRA_CALENDAR_CAL_DAV_DEFAULT_CALENDAR_ID),
    ("ZIMBRA_CALENDAR_CAL_DAV_DISABLE_FREEBUSY", ZIMBRA_CALENDAR_CAL_DAV_DISABLE_FREEBUSY),
    ("ZIMBRA_CALENDAR_CAL_DAV_DISABLE_SCHEDULING", ZIMBRA_CALENDAR_CAL_DAV_DISABLE_SCHEDULING),
    ("ZIMBRA_CALENDAR_CAL_DAV_SHARED_FOLDER_CACHE_DURATION", ZIMBRA_CALENDAR_CAL_DAV_SHARED_FOLDER_CACHE_DURATION),
    ("ZIMBRA_CALENDAR_CAL_DAV_SYNC_END", ZIMBRA_CALENDAR_CAL_DAV_SYNC_END),
    ("ZIMBRA_CALENDAR_CAL_DAV_SYNC_START", ZIMBRA_CALENDAR_CAL_DAV_SYNC_START),
    ("ZIMBRA_CALENDAR_CAL_DAV_USE_DISTINCT_APPOINTMENT_AND_TO_DO_COLLECTION", ZIMBRA_CALENDAR_CAL_DAV_USE_DISTINCT_APPOINTMENT_AND_TO_DO_COLLECTION),
    ("ZIMBRA_CALENDAR_COMPATIBILITY_MODE", ZIMBRA_CALENDAR_COMPATIBILITY_MODE),
    ("ZIMBRA_CALENDAR_MAX_REVISIONS", ZIMBRA_CALENDAR_MAX_REVISIONS),
    ("ZIMBRA_CALENDAR_RECURRENCE_DAILY_MAX_DAYS", ZIMBRA_CALENDAR_RECURRENCE_DAILY_MAX_DAYS),
    ("ZIMBRA_CALENDAR_RECURRENCE_MAX_INSTANCES", ZIMBRA_CALENDAR_RECURRENCE_MAX_INSTANCES),
    ("ZIMBRA_CALENDAR_RECURRENCE_MONTHLY_MAX_MONTHS", ZIMBRA_CALENDAR_RECURRENCE_MONTHLY_MAX_MONTHS),
    ("ZIMBRA_CALENDAR_RECURRENCE_OTHER_FREQUENCY_MAX_YEARS", ZIMBRA_CALENDAR_RECURRENCE_OTHER_FREQUENCY_MAX_YEARS),
    ("ZIMBRA_CALENDAR_RECURRENCE_WEEKLY_MAX_WEEKS", ZIMBRA_CALENDAR_RECURRENCE_WEEKLY_MAX_WEEKS),
    ("ZIMBRA_CALENDAR_RECURRENCE_YEARLY_MAX_YEARS", ZIMBRA_CALENDAR_RECURRENCE_YEARLY_MAX_YEARS),
    ("ZIMBRA_CALENDAR_RESOURCE_DOUBLE_BOOKING_ALLOWED", ZIMBRA_CALENDAR_RESOURCE_DOUBLE_BOOKING_ALLOWED),
    ("ZIMBRA_CALENDAR_RESOURCE_EXTRA_OBJECT_CLASS", ZIMBRA_CALENDAR_RESOURCE_EXTRA_OBJECT_CLASS),
    ("ZIMBRA_CALENDAR_SHOW_RESOURCE_TABS", ZIMBRA_CALENDAR_SHOW_RESOURCE_TABS),
    ("ZIMBRA_CAL_RES_AUTO_ACCEPT_DECLINE", ZIMBRA_CAL_RES_AUTO_ACCEPT_DECLINE),
    ("ZIMBRA_CAL_RES_AUTO_DECLINE_IF_BUSY", ZIMBRA_CAL_RES_AUTO_DECLINE_IF_BUSY),
    ("ZIMBRA_CAL_RES_AUTO_DECLINE_RECURRING", ZIMBRA_CAL_RES_AUTO_DECLINE_RECURRING),
    ("ZIMBRA_CAL_RES_BUILDING", ZIMBRA_CAL_RES_BUILDING),
    ("ZIMBRA_CAL_RES_CAPACITY", ZIMBRA_CAL_RES_CAPACITY),
    ("ZIMBRA_CAL_RES_CONTACT_EMAIL", ZIMBRA_CAL_RES_CONTACT_EMAIL),
    ("ZIMBRA_CAL_RES_CONTACT_NAME", ZIMBRA_CAL_RES_CONTACT_NAME),
    ("ZIMBRA_CAL_RES_CONTACT_PHONE", ZIMBRA_CAL_RES_CONTACT_PHONE),
    ("ZIMBRA_CAL_RES_FLOOR", ZIMBRA_CAL_RES_FLOOR),
    ("ZIMBRA_CAL_RES_LOCATION_DISPLAY_NAME", ZIMBRA_CAL_RES_LOCATION_DISPLAY_NAME),
    ("ZIMBRA_CAL_RES_MAX_NUM_CONFLICTS_ALLOWED", ZIMBRA_CAL_RES_MAX_NUM_CONFLICTS_ALLOWED),
    ("ZIMBRA_CAL_RES_MAX_PERCENT_CONFLICTS_ALLOWED", ZIMBRA_CAL_RES_MAX_PERCENT_CONFLICTS_ALLOWED),
    ("ZIMBRA_CAL_RES_ROOM", ZIMBRA_CAL_RES_ROOM),
    ("ZIMBRA_CAL_RES_SITE", ZIMBRA_CAL_RES_SITE),
    ("ZIMBRA_CAL_RES_TYPE", ZIMBRA_CAL_RES_TYPE),
    ("ZIMBRA_CERT_AUTHORITY_CERT_SELF_SIGNED", ZIMBRA_CERT_AUTHORITY_CERT_SELF_SIGNED),
    ("ZIMBRA_CERT_AUTHORITY_KEY_SELF_SIGNED", ZIMBRA_CERT_AUTHORITY_KEY_SELF_SIGNED),
    ("ZIMBRA_CHANGE_PASSWORD_URL", ZIMBRA_CHANGE_PASSWORD_URL),
    ("ZIMBRA_CHILD_ACCOUNT", ZIMBRA_CHILD_ACCOUNT),
    ("ZIMBRA_CHILD_VISIBLE_ACCOUNT", ZIMBRA_CHILD_VISIBLE_ACCOUNT),
    ("ZIMBRA_CLUSTER_TYPE", ZIMBRA_CLUSTER_TYPE),
    ("ZIMBRA_COMPONENT_AVAILABLE", ZIMBRA_COMPONENT_AVAILABLE),
    ("ZIMBRA_CONSTRAINT", ZIMBRA_CONSTRAINT),
    ("ZIMBRA_CONTACT_AUTO_COMPLETE_EMAIL_FIELDS", ZIMBRA_CONTACT_AUTO_COMPLETE_EMAIL_FIELDS),
    ("ZIMBRA_CONTACT_AUTO_COMPLETE_MAX_RESULTS", ZIMBRA_CONTACT_AUTO_COMPLETE_MAX_RESULTS),
    ("ZIMBRA_CONTACT_EMAIL_FIELDS", ZIMBRA_CONTACT_EMAIL_FIELDS),
    ("ZIMBRA_CONTACT_HIDDEN_ATTRIBUTES", ZIMBRA_CONTACT_HIDDEN_ATTRIBUTES),
    ("ZIMBRA_CONTACT_MAX_NUM_ENTRIES", ZIMBRA_CONTACT_MAX_NUM_ENTRIES),
    ("ZIMBRA_CONTACT_RANKING_TABLE_REFRESH_INTERVAL", ZIMBRA_CONTACT_RANKING_TABLE_REFRESH_INTERVAL),
    ("ZIMBRA_CONTACT_RANKING_TABLE_SIZE", ZIMBRA_CONTACT_RANKING_TABLE_SIZE),
    ("ZIMBRA_CONVERTD_URL", ZIMBRA_CONVERTD_URL),
    ("ZIMBRA_COS_EXTRA_OBJECT_CLASS", ZIMBRA_COS_EXTRA_OBJECT_CLASS),
    ("ZIMBRA_COS_ID", ZIMBRA_COS_ID),
    ("ZIMBRA_COS_INHERITED_ATTR", ZIMBRA_COS_INHERITED_ATTR),
    ("ZIMBRA_CREATE_TIMESTAMP", ZIMBRA_CREATE_TIMESTAMP),
    ("ZIMBRA_CUSTOMER_CARE_TIER", ZIMBRA_CUSTOMER_CARE_TIER),
    ("ZIMBRA_DATABASE_SLOW_SQL_THRESHOLD", ZIMBRA_DATABASE_SLOW_SQL_THRESHOLD),
    ("ZIMBRA_DATA_SOURCE_ATTRIBUTE", ZIMBRA_DATA_SOURCE_ATTRIBUTE),
    ("ZIMBRA_DATA_SOURCE_CALDAV_POLLING_INTERVAL", ZIMBRA_DATA_SOURCE_CALDAV_POLLING_INTERVAL),
    ("ZIMBRA_DATA_SOURCE_CALENDAR_POLLING_INTERVAL", ZIMBRA_DATA_SOURCE_CALENDAR_POLLING_INTERVAL),
    ("ZIMBRA_DATA_SOURCE_CONNECTION_TYPE", ZIMBRA_DATA_SOURCE_CONNECTION_TYPE),
    ("ZIMBRA_DATA_SOURCE_CONNECT_TIMEOUT", ZIMBRA_DATA_SOURCE_CONNECT_TIMEOUT),
    ("ZIMBRA_DATA_SOURCE_DOMAIN", ZIMBRA_DATA_SOURCE_DOMAIN),
    ("ZIMBRA_DATA_SOURCE_EMAIL_ADDRESS", ZIMBRA_DATA_SOURCE_EMAIL_ADDRESS),
    ("ZIMBRA_DATA_SOURCE_ENABLED", ZIMBRA_DATA_SOURCE_ENABLED),
    ("ZIMBRA_DATA_SOURCE_ENABLE_TRACE", ZIMBRA_DATA_SOURCE_ENABLE_TRACE),
    ("ZIMBRA_DATA_SOURCE_FAILING_SINCE", ZIMBRA_DATA_SOURCE_FAILING_SINCE),
    ("ZIMBRA_DATA_SOURCE_FOLDER_ID", ZIMBRA_DATA_SOURCE_FOLDER_ID),
    ("ZIMBRA_DATA_SOURCE_GAL_POLLING_INTERVAL", ZIMBRA_DATA_SOURCE_GAL_POLLING_INTERVAL),
    ("ZIMBRA_DATA_SOURCE_HOST", ZIMBRA_DATA_SOURCE_HOST),
    ("ZIMBRA_DATA_SOURCE_ID", ZIMBRA_DATA_SOURCE_ID),
    ("ZIMBRA_DATA_SOURCE_IMAP_POLLING_INTERVAL", ZIMBRA_DATA_SOURCE_IMAP_POLLING_INTERVAL),
    ("ZIMBRA_DATA_SOURCE_IMPORT_CLASS_NAME", ZIMBRA_DATA_SOURCE_IMPORT_CLASS_NAME),
    ("ZIMBRA_DATA_SOURCE_LAST_ERROR", ZIMBRA_DATA_SOURCE_LAST_ERROR),
    ("ZIMBRA_DATA_SOURCE_LEAVE_ON_SERVER", ZIMBRA_DATA_SOURCE_LEAVE_ON_SERVER),
    ("ZIMBRA_DATA_SOURCE_LIVE_POLLING_INTERVAL", ZIMBRA_DATA_SOURCE_LIVE_POLLING_INTERVAL),
    ("ZIMBRA_DATA_SOURCE_MAX_NUM_ENTRIES", ZIMBRA_DATA_SOURCE_MAX_NUM_ENTRIES),
    ("ZIMBRA_DATA_SOURCE_MAX_TRACE_SIZE", ZIMBRA_DATA_SOURCE_MAX_TRACE_SIZE),
    ("ZIMBRA_DATA_SOURCE_MIN_POLLING_INTERVAL", ZIMBRA_DATA_SOURCE_MIN_POLLING_INTERVAL),
    ("ZIMBRA_DATA_SOURCE_NAME", ZIMBRA_DATA_SOURCE_NAME),
    ("ZIMBRA_DATA_SOURCE_PASSWORD", ZIMBRA_DATA_SOURCE_PASSWORD),
    ("ZIMBRA_DATA_SOURCE_POLLING_INTERVAL", ZIMBRA_DATA_SOURCE_POLLING_INTERVAL),
    ("ZIMBRA_DATA_SOURCE_POP3_POLLING_INTERVAL", ZIMBRA_DATA_SOURCE_POP3_POLLING_INTERVAL),
    ("ZIMBRA_DATA_SOURCE_PORT", ZIMBRA_DATA_SOURCE_PORT),
    ("ZIMBRA_DATA_SOURCE_READ_TIMEOUT", ZIMBRA_DATA_SOURCE_READ_TIMEOUT),
    ("ZIMBRA_DATA_SOURCE_RSS_POLLING_INTERVAL", ZIMBRA_DATA_SOURCE_RSS_POLLING_INTERVAL),
    ("ZIMBRA_DATA_SOURCE_TYPE", ZIMBRA_DATA_SOURCE_TYPE),
    ("ZIMBRA_DATA_SOURCE_USE_ADDRESS_FOR_FORWARD_REPLY", ZIMBRA_DATA_SOURCE_USE_ADDRESS_FOR_FORWARD_REPLY),
    ("ZIMBRA_DATA_SOURCE_USERNAME", ZIMBRA_DATA_SOURCE_USERNAME),
    ("ZIMBRA_DATA_SOURCE_YAB_POLLING_INTERVAL", ZIMBRA_DATA_SOURCE_YAB_POLLING_INTERVAL),
    ("ZIMBRA_DEBUG_INFO", ZIMBRA_DEBUG_INFO),
    ("ZIMBRA_DEFAULT_DOMAIN_NAME", ZIMBRA_DEFAULT_DOMAIN_NAME),
    ("ZIMBRA_DISTRIBUTION_LIST_SEND_SHARE_MESSAGE_FROM_ADDRESS", ZIMBRA_DISTRIBUTION_LIST_SEND_SHARE_MESSAGE_FROM_ADDRESS),
    ("ZIMBRA_DISTRIBUTION_LIST_SEND_SHARE_MESSAGE_TO_NEW_MEMBERS", ZIMBRA_DISTRIBUTION_LIST_SEND_SHARE_MESSAGE_TO_NEW_MEMBERS),
    ("ZIMBRA_DNS_CHECK_HOSTNAME", ZIMBRA_DNS_CHECK_HOSTNAME),
    ("ZIMBRA_DOMAIN_ADMIN_MAX_MAIL_QUOTA", ZIMBRA_DOMAIN_ADMIN_MAX_MAIL_QUOTA),
    ("ZIMBRA_DOMAIN_ADMIN_MODIFIABLE_ATTR", ZIMBRA_DOMAIN_ADMIN_MODIFIABLE_ATTR),
    ("ZIMBRA_DOMAIN_ALIAS_TARGET_ID", ZIMBRA_DOMAIN_ALIAS_TARGET_ID),
    ("ZIMBRA_DOMAIN_COS_MAX_ACCOUNTS", ZIMBRA_DOMAIN_COS_MAX_ACCOUNTS),
    ("ZIMBRA_DOMAIN_DEFAULT_COS_ID", ZIMBRA_DOMAIN_DEFAULT_COS_ID),
    ("ZIMBRA_DOMAIN_EXTRA_OBJECT_CLASS", ZIMBRA_DOMAIN_EXTRA_OBJECT_CLASS),
    ("ZIMBRA_DOMAIN_FEATURE_MAX_ACCOUNTS", ZIMBRA_DOMAIN_FEATURE_MAX_ACCOUNTS),
    ("ZIMBRA_DOMAIN_ID", ZIMBRA_DOMAIN_ID),
    ("ZIMBRA_DOMAIN_INHERITED_ATTR", ZIMBRA_DOMAIN_INHERITED_ATTR),
    ("ZIMBRA_DOMAIN_MANDATORY_MAIL_SIGNATURE_ENABLED", ZIMBRA_DOMAIN_MANDATORY_MAIL_SIGNATURE_ENABLED),
    ("ZIMBRA_DOMAIN_MANDATORY_MAIL_SIGNATURE_HTML", ZIMBRA_DOMAIN_MANDATORY_MAIL_SIGNATURE_HTML),
    ("ZIMBRA_DOMAIN_MANDATORY_MAIL_SIGNATURE_TEXT", ZIMBRA_DOMAIN_MANDATORY_MAIL_SIGNATURE_TEXT),
    ("ZIMBRA_DOMAIN_MAX_ACCOUNTS", ZIMBRA_DOMAIN_MAX_ACCOUNTS),
    ("ZIMBRA_DOMAIN_NAME", ZIMBRA_DOMAIN_NAME),
    ("ZIMBRA_DOMAIN_RENAME_INFO", ZIMBRA_DOMAIN_RENAME_INFO),
    ("ZIMBRA_DOMAIN_STATUS", ZIMBRA_DOMAIN_STATUS),
    ("ZIMBRA_DOMAIN_TYPE", ZIMBRA_DOMAIN_TYPE),
    ("ZIMBRA_ERROR_REPORT_URL", ZIMBRA_ERROR_REPORT_URL),
    ("ZIMBRA_EXCLUDE_FROM_CMB_SEARCH", ZIMBRA_EXCLUDE_FROM_CMB_SEARCH),
    ("ZIMBRA_EXTERNAL_IMAP_HOSTNAME", ZIMBRA_EXTERNAL_IMAP_HOSTNAME),
    ("ZIMBRA_EXTERNAL_IMAP_PORT", ZIMBRA_EXTERNAL_IMAP_PORT),
    ("ZIMBRA_EXTERNAL_IMAP_SSL_HOSTNAME", ZIMBRA_EXTERNAL_IMAP_SSL_HOSTNAME),
    ("ZIMBRA_EXTERNAL_IMAP_SSL_PORT", ZIMBRA_EXTERNAL_IMAP_SSL_PORT),
    ("ZIMBRA_EXTERNAL_POP3_HOSTNAME", ZIMBRA_EXTERNAL_POP3_HOSTNAME),
    ("ZIMBRA_EXTERNAL_POP3_PORT", ZIMBRA_EXTERNAL_POP3_PORT),
    ("ZIMBRA_EXTERNAL_POP3_SSL_HOSTNAME", ZIMBRA_EXTERNAL_POP3_SSL_HOSTNAME),
    ("ZIMBRA_EXTERNAL_POP3_SSL_PORT", ZIMBRA_EXTERNAL_POP3_SSL_PORT),
    ("ZIMBRA_FEATURE_ADVANCED_SEARCH_ENABLED", ZIMBRA_FEATURE_ADVANCED_SEARCH_ENABLED),
    ("ZIMBRA_FEATURE_BRIEFCASE_DOCS_ENABLED", ZIMBRA_FEATURE_BRIEFCASE_DOCS_ENABLED),
    ("ZIMBRA_FEATURE_BRIEFCASES_ENABLED", ZIMBRA_FEATURE_BRIEFCASES_ENABLED),
    ("ZIMBRA_FEATURE_BRIEFCASE_SLIDES_ENABLED", ZIMBRA_FEATURE_BRIEFCASE_SLIDES_ENABLED),
    ("ZIMBRA_FEATURE_BRIEFCASE_SPREADSHEET_ENABLED", ZIMBRA_FEATURE_BRIEFCASE_SPREADSHEET_ENABLED),
    ("ZIMBRA_FEATURE_CALENDAR_ENABLED", ZIMBRA_FEATURE_CALENDAR_ENABLED),
    ("ZIMBRA_FEATURE_CALENDAR_UPSELL_ENABLED", ZIMBRA_FEATURE_CALENDAR_UPSELL_ENABLED),
    ("ZIMBRA_FEATURE_CALENDAR_UPSELL_URL", ZIMBRA_FEATURE_CALENDAR_UPSELL_URL),
    ("ZIMBRA_FEATURE_CHANGE_PASSWORD_ENABLED", ZIMBRA_FEATURE_CHANGE_PASSWORD_ENABLED),
    ("ZIMBRA_FEATURE_COMPOSE_IN_NEW_WINDOW_ENABLED", ZIMBRA_FEATURE_COMPOSE_IN_NEW_WINDOW_ENABLED),
    ("ZIMBRA_FEATURE_CONFIRMATION_PAGE_ENABLED", ZIMBRA_FEATURE_CONFIRMATION_PAGE_ENABLED),
    ("ZIMBRA_FEATURE_CONTACTS_ENABLED", ZIMBRA_FEATURE_CONTACTS_ENABLED),
    ("ZIMBRA_FEATURE_CONTACTS_UPSELL_ENABLED", ZIMBRA_FEATURE_CONTACTS_UPSELL_ENABLED),
    ("ZIMBRA_FEATURE_CONTACTS_UPSELL_URL", ZIMBRA_FEATURE_CONTACTS_UPSELL_URL),
    ("ZIMBRA_FEATURE_CONVERSATIONS_ENABLED", ZIMBRA_FEATURE_CONVERSATIONS_ENABLED),
    ("ZIMBRA_FEATURE_DISCARD_IN_FILTERS_ENABLED", ZIMBRA_FEATURE_DISCARD_IN_FILTERS_ENABLED),
    ("ZIMBRA_FEATURE_FILTERS_ENABLED", ZIMBRA_FEATURE_FILTERS_ENABLED),
    ("ZIMBRA_FEATURE_FLAGGING_ENABLED", ZIMBRA_FEATURE_FLAGGING_ENABLED),
    ("ZIMBRA_FEATURE_GAL_AUTO_COMPLETE_ENABLED", ZIMBRA_FEATURE_GAL_AUTO_COMPLETE_ENABLED),
    ("ZIMBRA_FEATURE_GAL_ENABLED", ZIMBRA_FEATURE_GAL_ENABLED),
    ("ZIMBRA_FEATURE_GAL_SYNC_ENABLED", ZIMBRA_FEATURE_GAL_SYNC_ENABLED),
    ("ZIMBRA_FEATURE_GROUP_CALENDAR_ENABLED", ZIMBRA_FEATURE_GROUP_CALENDAR_ENABLED),
    ("ZIMBRA_FEATURE_HTML_COMPOSE_ENABLED", ZIMBRA_FEATURE_HTML_COMPOSE_ENABLED),
    ("ZIMBRA_FEATURE_IDENTITIES_ENABLED", ZIMBRA_FEATURE_IDENTITIES_ENABLED),
    ("ZIMBRA_FEATURE_IMAP_DATA_SOURCE_ENABLED", ZIMBRA_FEATURE_IMAP_DATA_SOURCE_ENABLED),
    ("ZIMBRA_FEATURE_IM_ENABLED", ZIMBRA_FEATURE_IM_ENABLED),
    ("ZIMBRA_FEATURE_IMPORT_EXPORT_FOLDER_ENABLED", ZIMBRA_FEATURE_IMPORT_EXPORT_FOLDER_ENABLED),
    ("ZIMBRA_FEATURE_INITIAL_SEARCH_PREFERENCE_ENABLED", ZIMBRA_FEATURE_INITIAL_SEARCH_PREFERENCE_ENABLED),
    ("ZIMBRA_FEATURE_INSTANT_NOTIFY", ZIMBRA_FEATURE_INSTANT_NOTIFY),
    ("ZIMBRA_FEATURE_MAIL_ENABLED", ZIMBRA_FEATURE_MAIL_ENABLED),
    ("ZIMBRA_FEATURE_MAIL_FORWARDING_ENABLED", ZIMBRA_FEATURE_MAIL_FORWARDING_ENABLED),
    ("ZIMBRA_FEATURE_MAIL_FORWARDING_IN_FILTERS_ENABLED", ZIMBRA_FEATURE_MAIL_FORWARDING_IN_FILTERS_ENABLED),
    ("ZIMBRA_FEATURE_MAIL_POLLING_INTERVAL_PREFERENCE_ENABLED", ZIMBRA_FEATURE_MAIL_POLLING_INTERVAL_PREFERENCE_ENABLED),
    ("ZIMBRA_FEATURE_MAIL_PRIORITY_ENABLED", ZIMBRA_FEATURE_MAIL_PRIORITY_ENABLED),
    ("ZIMBRA_FEATURE_MAIL_UPSELL_ENABLED", ZIMBRA_FEATURE_MAIL_UPSELL_ENABLED),
    ("ZIMBRA_FEATURE_MAIL_UPSELL_URL", ZIMBRA_FEATURE_MAIL_UPSELL_URL),
    ("ZIMBRA_FEATURE_MANAGE_ZIMLETS", ZIMBRA_FEATURE_MANAGE_ZIMLETS),
    ("ZIMBRA_FEATURE_MOBILE_POLICY_ENABLED", ZIMBRA_FEATURE_MOBILE_POLICY_ENABLED),
    ("ZIMBRA_FEATURE_MOBILE_SYNC_ENABLED", ZIMBRA_FEATURE_MOBILE_SYNC_ENABLED),
    ("ZIMBRA_FEATURE_NEW_ADDR_BOOK_ENABLED", ZIMBRA_FEATURE_NEW_ADDR_BOOK_ENABLED),
    ("ZIMBRA_FEATURE_NEW_MAIL_NOTIFICATION_ENABLED", ZIMBRA_FEATURE_NEW_MAIL_NOTIFICATION_ENABLED),
    ("ZIMBRA_FEATURE_NOTEBOOK_ENABLED", ZIMBRA_FEATURE_NOTEBOOK_ENABLED),
    ("ZIMBRA_FEATURE_OPEN_MAIL_IN_NEW_WINDOW_ENABLED", ZIMBRA_FEATURE_OPEN_MAIL_IN_NEW_WINDOW_ENABLED),
    ("ZIMBRA_FEATURE_OPTIONS_ENABLED", ZIMBRA_FEATURE_OPTIONS_ENABLED),
    ("ZIMBRA_FEATURE_OUT_OF_OFFICE_REPLY_ENABLED", ZIMBRA_FEATURE_OUT_OF_OFFICE_REPLY_ENABLED),
    ("ZIMBRA_FEATURE_POP3_DATA_SOURCE_ENABLED", ZIMBRA_FEATURE_POP3_DATA_SOURCE_ENABLED),
    ("ZIMBRA_FEATURE_PORTAL_ENABLED", ZIMBRA_FEATURE_PORTAL_ENABLED),
    ("ZIMBRA_FEATURE_READ_RECEIPTS_ENABLED", ZIMBRA_FEATURE_READ_RECEIPTS_ENABLED),
    ("ZIMBRA_FEATURE_SAVED_SEARCHES_ENABLED", ZIMBRA_FEATURE_SAVED_SEARCHES_ENABLED),
    ("ZIMBRA_FEATURE_SHARING_ENABLED", ZIMBRA_FEATURE_SHARING_ENABLED),
    ("ZIMBRA_FEATURE_SHORTCUT_ALIASES_ENABLED", ZIMBRA_FEATURE_SHORTCUT_ALIASES_ENABLED),
    ("ZIMBRA_FEATURE_SIGNATURES_ENABLED", ZIMBRA_FEATURE_SIGNATURES_ENABLED),
    ("ZIMBRA_FEATURE_SKIN_CHANGE_ENABLED", ZIMBRA_FEATURE_SKIN_CHANGE_ENABLED),
    ("ZIMBRA_FEATURE_TAGGING_ENABLED", ZIMBRA_FEATURE_TAGGING_ENABLED),
    ("ZIMBRA_FEATURE_TASKS_ENABLED", ZIMBRA_FEATURE_TASKS_ENABLED),
    ("ZIMBRA_FEATURE_VIEW_IN_HTML_ENABLED", ZIMBRA_FEATURE_VIEW_IN_HTML_ENABLED),
    ("ZIMBRA_FEATURE_VOICE_CHANGE_PIN_ENABLED", ZIMBRA_FEATURE_VOICE_CHANGE_PIN_ENABLED),
    ("ZIMBRA_FEATURE_VOICE_ENABLED", ZIMBRA_FEATURE_VOICE_ENABLED),
    ("ZIMBRA_FEATURE_VOICE_UPSELL_ENABLED", ZIMBRA_FEATURE_VOICE_UPSELL_ENABLED),
    ("ZIMBRA_FEATURE_VOICE_UPSELL_URL", ZIMBRA_FEATURE_VOICE_UPSELL_URL),
    ("ZIMBRA_FEATURE_WEB_SEARCH_ENABLED", ZIMBRA_FEATURE_WEB_SEARCH_ENABLED),
    ("ZIMBRA_FEATURE_ZIMBRA_ASSISTANT_ENABLED", ZIMBRA_FEATURE_ZIMBRA_ASSISTANT_ENABLED),
    ("ZIMBRA_FILE_UPLOAD_MAX_SIZE", ZIMBRA_FILE_UPLOAD_MAX_SIZE),
    ("ZIMBRA_FOREIGN_PRINCIPAL", ZIMBRA_FOREIGN_PRINCIPAL),
    ("ZIMBRA_FREEBUSY_EXCHANGE_AUTH_PASSWORD", ZIMBRA_FREEBUSY_EXCHANGE_AUTH_PASSWORD),
    ("ZIMBRA_FREEBUSY_EXCHANGE_AUTH_SCHEME", ZIMBRA_FREEBUSY_EXCHANGE_AUTH_SCHEME),
    ("ZIMBRA_FREEBUSY_EXCHANGE_AUTH_USERNAME", ZIMBRA_FREEBUSY_EXCHANGE_AUTH_USERNAME),
    ("ZIMBRA_FREEBUSY_EXCHANGE_CACHED_INTERVAL", ZIMBRA_FREEBUSY_EXCHANGE_CACHED_INTERVAL),
    ("ZIMBRA_FREEBUSY_EXCHANGE_CACHED_INTERVAL_START", ZIMBRA_FREEBUSY_EXCHANGE_CACHED_INTERVAL_START),
    ("ZIMBRA_FREEBUSY_EXCHANGE_URL", ZIMBRA_FREEBUSY_EXCHANGE_URL),
    ("ZIMBRA_FREEBUSY_EXCHANGE_USER_ORG", ZIMBRA_FREEBUSY_EXCHANGE_USER_ORG),
    ("ZIMBRA_FREEBUSY_LOCAL_MAILBOX_NOT_ACTIVE", ZIMBRA_FREEBUSY_LOCAL_MAILBOX_NOT_ACTIVE),
    ("ZIMBRA_FREEBUSY_PROPAGATION_RETRY_INTERVAL", ZIMBRA_FREEBUSY_PROPAGATION_RETRY_INTERVAL),
    ("ZIMBRA_GAL_ACCOUNT_ID", ZIMBRA_GAL_ACCOUNT_ID),
    ("ZIMBRA_GAL_ALWAYS_INCLUDE_LOCAL_CALENDAR_RESOURCES", ZIMBRA_GAL_ALWAYS_INCLUDE_LOCAL_CALENDAR_RESOURCES),
    ("ZIMBRA_GAL_AUTO_COMPLETE_LDAP_FILTER", ZIMBRA_GAL_AUTO_COMPLETE_LDAP_FILTER),
    ("ZIMBRA_GAL_INTERNAL_SEARCH_BASE", ZIMBRA_GAL_INTERNAL_SEARCH_BASE),
    ("ZIMBRA_GAL_LAST_FAILED_SYNC_TIMESTAMP", ZIMBRA_GAL_LAST_FAILED_SYNC_TIMESTAMP),
    ("ZIMBRA_GAL_LAST_SUCCESSFUL_SYNC_TIMESTAMP", ZIMBRA_GAL_LAST_SUCCESSFUL_SYNC_TIMESTAMP),
    ("ZIMBRA_GAL_LDAP_ATTR_MAP", ZIMBRA_GAL_LDAP_ATTR_MAP),
    ("ZIMBRA_GAL_LDAP_AUTH_MECH", ZIMBRA_GAL_LDAP_AUTH_MECH),
    ("ZIMBRA_GAL_LDAP_BIND_DN", ZIMBRA_GAL_LDAP_BIND_DN),
    ("ZIMBRA_GAL_LDAP_BIND_PASSWORD", ZIMBRA_GAL_LDAP_BIND_PASSWORD),
    ("ZIMBRA_GAL_LDAP_FILTER", ZIMBRA_GAL_LDAP_FILTER),
    ("ZIMBRA_GAL_LDAP_FILTER_DEF", ZIMBRA_GAL_LDAP_FILTER_DEF),
    ("ZIMBRA_GAL_LDAP_KERBEROS5_KEYTAB", ZIMBRA_GAL_LDAP_KERBEROS5_KEYTAB),
    ("ZIMBRA_GAL_LDAP_KERBEROS5_PRINCIPAL", ZIMBRA_GAL_LDAP_KERBEROS5_PRINCIPAL),
    ("ZIMBRA_GAL_LDAP_PAGE_SIZE", ZIMBRA_GAL_LDAP_PAGE_SIZE),
    ("ZIMBRA_GAL_LDAP_SEARCH_BASE", ZIMBRA_GAL_LDAP_SEARCH_BASE),
    ("ZIMBRA_GAL_LDAP_START_TLS_ENABLED", ZIMBRA_GAL_LDAP_START_TLS_ENABLED),
    ("ZIMBRA_GAL_LDAP_URL", ZIMBRA_GAL_LDAP_URL),
    ("ZIMBRA_GAL_MAX_RESULTS", ZIMBRA_GAL_MAX_RESULTS),
    ("ZIMBRA_GAL_MODE", ZIMBRA_GAL_MODE),
    ("ZIMBRA_GAL_STATUS", ZIMBRA_GAL_STATUS),
    ("ZIMBRA_GAL_SYNC_ACCOUNT_BASED_AUTO_COMPLETE_ENABLED", ZIMBRA_GAL_SYNC_ACCOUNT_BASED_AUTO_COMPLETE_ENABLED),
    ("ZIMBRA_GAL_SYNC_INTERNAL_SEARCH_BASE", ZIMBRA_GAL_SYNC_INTERNAL_SEARCH_BASE),
    ("ZIMBRA_GAL_SYNC_LDAP_AUTH_MECH", ZIMBRA_GAL_SYNC_LDAP_AUTH_MECH),
    ("ZIMBRA_GAL_SYNC_LDAP_BIND_DN", ZIMBRA_GAL_SYNC_LDAP_BIND_DN),
    ("ZIMBRA_GAL_SYNC_LDAP_BIND_PASSWORD", ZIMBRA_GAL_SYNC_LDAP_BIND_PASSWORD),
    ("ZIMBRA_GAL_SYNC_LDAP_FILTER", ZIMBRA_GAL_SYNC_LDAP_FILTER),
    ("ZIMBRA_GAL_SYNC_LDAP_KERBEROS5_KEYTAB", ZIMBRA_GAL_SYNC_LDAP_KERBEROS5_KEYTAB),
    ("ZIMBRA_GAL_SYNC_LDAP_KERBEROS5_PRINCIPAL", ZIMBRA_GAL_SYNC_LDAP_KERBEROS5_PRINCIPAL),
    ("ZIMBRA_GAL_SYNC_LDAP_PAGE_SIZE", ZIMBRA_GAL_SYNC_LDAP_PAGE_SIZE),
    ("ZIMBRA_GAL_SYNC_LDAP_SEARCH_BASE", ZIMBRA_GAL_SYNC_LDAP_SEARCH_BASE),
    ("ZIMBRA_GAL_SYNC_LDAP_START_TLS_ENABLED", ZIMBRA_GAL_SYNC_LDAP_START_TLS_ENABLED),
    ("ZIMBRA_GAL_SYNC_LDAP_URL", ZIMBRA_GAL_SYNC_LDAP_URL),
    ("ZIMBRA_GAL_SYNC_TIMESTAMP_FORMAT", ZIMBRA_GAL_SYNC_TIMESTAMP_FORMAT),
    ("ZIMBRA_GAL_TOKENIZE_AUTO_COMPLETE_KEY", ZIMBRA_GAL_TOKENIZE_AUTO_COMPLETE_KEY),
    ("ZIMBRA_GAL_TOKENIZE_SEARCH_KEY", ZIMBRA_GAL_TOKENIZE_SEARCH_KEY),
    ("ZIMBRA_GAL_TYPE", ZIMBRA_GAL_TYPE),
    ("ZIMBRA_GROUP_ID", ZIMBRA_GROUP_ID),
    ("ZIMBRA_HELP_ADMIN_URL", ZIMBRA_HELP_ADMIN_URL),
    ("ZIMBRA_HELP_ADVANCED_URL", ZIMBRA_HELP_ADVANCED_URL),
    ("ZIMBRA_HELP_DELEGATED_URL", ZIMBRA_HELP_DELEGATED_URL),
    ("ZIMBRA_HELP_STANDARD_URL", ZIMBRA_HELP_STANDARD_URL),
    ("ZIMBRA_HIDE_IN_GAL", ZIMBRA_HIDE_IN_GAL),
    ("ZIMBRA_HSM_AGE", ZIMBRA_HSM_AGE),
    ("ZIMBRA_HSM_POLICY", ZIMBRA_HSM_POLICY),
    ("ZIMBRA_HTTP_DEBUG_HANDLER_ENABLED", ZIMBRA_HTTP_DEBUG_HANDLER_ENABLED),
    ("ZIMBRA_HTTP_NUM_THREADS", ZIMBRA_HTTP_NUM_THREADS),
    ("ZIMBRA_HTTP_PROXY_URL", ZIMBRA_HTTP_PROXY_URL),
    ("ZIMBRA_HTTP_SSL_NUM_THREADS", ZIMBRA_HTTP_SSL_NUM_THREADS),
    ("ZIMBRA_ID", ZIMBRA_ID),
    ("ZIMBRA_IDENTITY_MAX_NUM_ENTRIES", ZIMBRA_IDENTITY_MAX_NUM_ENTRIES),
    ("ZIMBRA_IMAP_ADVERTISED_NAME", ZIMBRA_IMAP_ADVERTISED_NAME),
    ("ZIMBRA_IMAP_BIND_ADDRESS", ZIMBRA_IMAP_BIND_ADDRESS),
    ("ZIMBRA_IMAP_BIND_ON_STARTUP", ZIMBRA_IMAP_BIND_ON_STARTUP),
    ("ZIMBRA_IMAP_BIND_PORT", ZIMBRA_IMAP_BIND_PORT),
    ("ZIMBRA_IMAP_CLEARTEXT_LOGIN_ENABLED", ZIMBRA_IMAP_CLEARTEXT_LOGIN_ENABLED),
    ("ZIMBRA_IMAP_DISABLED_CAPABILITY", ZIMBRA_IMAP_DISABLED_CAPABILITY),
    ("ZIMBRA_IMAP_ENABLED", ZIMBRA_IMAP_ENABLED),
    ("ZIMBRA_IMAP_EXPOSE_VERSION_ON_BANNER", ZIMBRA_IMAP_EXPOSE_VERSION_ON_BANNER),
    ("ZIMBRA_IMAP_MAX_REQUEST_SIZE", ZIMBRA_IMAP_MAX_REQUEST_SIZE),
    ("ZIMBRA_IMAP_NUM_THREADS", ZIMBRA_IMAP_NUM_THREADS),
    ("ZIMBRA_IMAP_PROXY_BIND_PORT", ZIMBRA_IMAP_PROXY_BIND_PORT),
    ("ZIMBRA_IMAP_SASL_GSSAPI_ENABLED", ZIMBRA_IMAP_SASL_GSSAPI_ENABLED),
    ("ZIMBRA_IMAP_SERVER_ENABLED", ZIMBRA_IMAP_SERVER_ENABLED),
    ("ZIMBRA_IMAP_SHUTDOWN_GRACE_SECONDS", ZIMBRA_IMAP_SHUTDOWN_GRACE_SECONDS),
    ("ZIMBRA_IMAP_SSL_BIND_ADDRESS", ZIMBRA_IMAP_SSL_BIND_ADDRESS),
    ("ZIMBRA_IMAP_SSL_BIND_ON_STARTUP", ZIMBRA_IMAP_SSL_BIND_ON_STARTUP),
    ("ZIMBRA_IMAP_SSL_BIND_PORT", ZIMBRA_IMAP_SSL_BIND_PORT),
    ("ZIMBRA_IMAP_SSL_DISABLED_CAPABILITY", ZIMBRA_IMAP_SSL_DISABLED_CAPABILITY),
    ("ZIMBRA_IMAP_SSL_PROXY_BIND_PORT", ZIMBRA_IMAP_SSL_PROXY_BIND_PORT),
    ("ZIMBRA_IMAP_SSL_SERVER_ENABLED", ZIMBRA_IMAP_SSL_SERVER_ENABLED),
    ("ZIMBRA_IM_AVAILABLE_INTEROP_GATEWAYS", ZIMBRA_IM_AVAILABLE_INTEROP_GATEWAYS),
    ("ZIMBRA_IM_BIND_ADDRESS", ZIMBRA_IM_BIND_ADDRESS),
    ("ZIMBRA_IM_SERVICE", ZIMBRA_IM_SERVICE),
    ("ZIMBRA_INSTALLED_SKIN", ZIMBRA_INSTALLED_SKIN),
    ("ZIMBRA_INTERCEPT_ADDRESS", ZIMBRA_INTERCEPT_ADDRESS),
    ("ZIMBRA_INTERCEPT_BODY", ZIMBRA_INTERCEPT_BODY),
    ("ZIMBRA_INTERCEPT_FROM", ZIMBRA_INTERCEPT_FROM),
    ("ZIMBRA_INTERCEPT_SEND_HEADERS_ONLY", ZIMBRA_INTERCEPT_SEND_HEADERS_ONLY),
    ("ZIMBRA_INTERCEPT_SUBJECT", ZIMBRA_INTERCEPT_SUBJECT),
    ("ZIMBRA_IS_ADMIN_ACCOUNT", ZIMBRA_IS_ADMIN_ACCOUNT),
    ("ZIMBRA_IS_ADMIN_GROUP", ZIMBRA_IS_ADMIN_GROUP),
    ("ZIMBRA_IS_CUSTOMER_CARE_ACCOUNT", ZIMBRA_IS_CUSTOMER_CARE_ACCOUNT),
    ("ZIMBRA_IS_DELEGATED_ADMIN_ACCOUNT", ZIMBRA_IS_DELEGATED_ADMIN_ACCOUNT),
    ("ZIMBRA_IS_DOMAIN_ADMIN_ACCOUNT", ZIMBRA_IS_DOMAIN_ADMIN_ACCOUNT),
    ("ZIMBRA_IS_MONITOR_HOST", ZIMBRA_IS_MONITOR_HOST),
    ("ZIMBRA_IS_SYSTEM_RESOURCE", ZIMBRA_IS_SYSTEM_RESOURCE),
    ("ZIMBRA_JUNK_MESSAGES_INDEXING_ENABLED", ZIMBRA_JUNK_MESSAGES_INDEXING_ENABLED),
    ("ZIMBRA_LAST_LOGON_TIMESTAMP", ZIMBRA_LAST_LOGON_TIMESTAMP),
    ("ZIMBRA_LAST_LOGON_TIMESTAMP_FREQUENCY", ZIMBRA_LAST_LOGON_TIMESTAMP_FREQUENCY),
    ("ZIMBRA_LMTP_ADVERTISED_NAME", ZIMBRA_LMTP_ADVERTISED_NAME),
    ("ZIMBRA_LMTP_BIND_ADDRESS", ZIMBRA_LMTP_BIND_ADDRESS),
    ("ZIMBRA_LMTP_BIND_ON_STARTUP", ZIMBRA_LMTP_BIND_ON_STARTUP),
    ("ZIMBRA_LMTP_BIND_PORT", ZIMBRA_LMTP_BIND_PORT),
    ("ZIMBRA_LMTP_EXPOSE_VERSION_ON_BANNER", ZIMBRA_LMTP_EXPOSE_VERSION_ON_BANNER),
    ("ZIMBRA_LMTP_NUM_THREADS", ZIMBRA_LMTP_NUM_THREADS),
    ("ZIMBRA_LMTP_PERMANENT_FAILURE_WHEN_OVER_QUOTA", ZIMBRA_LMTP_PERMANENT_FAILURE_WHEN_OVER_QUOTA),
    ("ZIMBRA_LMTP_SERVER_ENABLED", ZIMBRA_LMTP_SERVER_ENABLED),
    ("ZIMBRA_LMTP_SHUTDOWN_GRACE_SECONDS", ZIMBRA_LMTP_SHUTDOWN_GRACE_SECONDS),
    ("ZIMBRA_LOCALE", ZIMBRA_LOCALE),
    ("ZIMBRA_LOG_HOSTNAME", ZIMBRA_LOG_HOSTNAME),
    ("ZIMBRA_LOG_RAW_LIFETIME", ZIMBRA_LOG_RAW_LIFETIME),
    ("ZIMBRA_LOG_SUMMARY_LIFETIME", ZIMBRA_LOG_SUMMARY_LIFETIME),
    ("ZIMBRA_LOG_TO_SYSLOG", ZIMBRA_LOG_TO_SYSLOG),
    ("ZIMBRA_MAIL_ADDRESS", ZIMBRA_MAIL_ADDRESS),
    ("ZIMBRA_MAIL_ALIAS", ZIMBRA_MAIL_ALIAS),
    ("ZIMBRA_MAIL_BLACKLIST_MAX_NUM_ENTRIES", ZIMBRA_MAIL_BLACKLIST_MAX_NUM_ENTRIES),
    ("ZIMBRA_MAILBOX_LOCATION_BEFORE_MOVE", ZIMBRA_MAILBOX_LOCATION_BEFORE_MOVE),
    ("ZIMBRA_MAILBOX_MOVE_SKIP_BLOBS", ZIMBRA_MAILBOX_MOVE_SKIP_BLOBS),
    ("ZIMBRA_MAILBOX_MOVE_SKIP_HSM_BLOBS", ZIMBRA_MAILBOX_MOVE_SKIP_HSM_BLOBS),
    ("ZIMBRA_MAILBOX_MOVE_SKIP_SEARCH_INDEX", ZIMBRA_MAILBOX_MOVE_SKIP_SEARCH_INDEX),
    ("ZIMBRA_MAIL_CANONICAL_ADDRESS", ZIMBRA_MAIL_CANONICAL_ADDRESS),
    ("ZIMBRA_MAIL_CATCH_ALL_ADDRESS", ZIMBRA_MAIL_CATCH_ALL_ADDRESS),
    ("ZIMBRA_MAIL_CATCH_ALL_CANONICAL_ADDRESS", ZIMBRA_MAIL_CATCH_ALL_CANONICAL_ADDRESS),
    ("ZIMBRA_MAIL_CATCH_ALL_FORWARDING_ADDRESS", ZIMBRA_MAIL_CATCH_ALL_FORWARDING_ADDRESS),
    ("ZIMBRA_MAIL_CLEAR_TEXT_PASSWORD_ENABLED", ZIMBRA_MAIL_CLEAR_TEXT_PASSWORD_ENABLED),
    ("ZIMBRA_MAIL_CONTENT_MAX_SIZE", ZIMBRA_MAIL_CONTENT_MAX_SIZE),
    ("ZIMBRA_MAIL_DELIVERY_ADDRESS", ZIMBRA_MAIL_DELIVERY_ADDRESS),
    ("ZIMBRA_MAIL_DISK_STREAMING_THRESHOLD", ZIMBRA_MAIL_DISK_STREAMING_THRESHOLD),
    ("ZIMBRA_MAIL_FILE_DESCRIPTOR_BUFFER_SIZE", ZIMBRA_MAIL_FILE_DESCRIPTOR_BUFFER_SIZE),
    ("ZIMBRA_MAIL_FILE_DESCRIPTOR_CACHE_SIZE", ZIMBRA_MAIL_FILE_DESCRIPTOR_CACHE_SIZE),
    ("ZIMBRA_MAIL_FORWARDING_ADDRESS", ZIMBRA_MAIL_FORWARDING_ADDRESS),
    ("ZIMBRA_MAIL_FORWARDING_ADDRESS_MAX_LENGTH", ZIMBRA_MAIL_FORWARDING_ADDRESS_MAX_LENGTH),
    ("ZIMBRA_MAIL_FORWARDING_ADDRESS_MAX_NUM_ADDRS", ZIMBRA_MAIL_FORWARDING_ADDRESS_MAX_NUM_ADDRS),
    ("ZIMBRA_MAIL_HOST", ZIMBRA_MAIL_HOST),
    ("ZIMBRA_MAIL_HOST_POOL", ZIMBRA_MAIL_HOST_POOL),
    ("ZIMBRA_MAIL_IDLE_SESSION_TIMEOUT", ZIMBRA_MAIL_IDLE_SESSION_TIMEOUT),
    ("ZIMBRA_MAIL_LAST_PURGED_MAILBOX_ID", ZIMBRA_MAIL_LAST_PURGED_MAILBOX_ID),
    ("ZIMBRA_MAIL_MESSAGE_LIFETIME", ZIMBRA_MAIL_MESSAGE_LIFETIME),
    ("ZIMBRA_MAIL_MIN_POLLING_INTERVAL", ZIMBRA_MAIL_MIN_POLLING_INTERVAL),
    ("ZIMBRA_MAIL_MODE", ZIMBRA_MAIL_MODE),
    ("ZIMBRA_MAIL_PORT", ZIMBRA_MAIL_PORT),
    ("ZIMBRA_MAIL_PROXY_PORT", ZIMBRA_MAIL_PROXY_PORT),
    ("ZIMBRA_MAIL_PURGE_SLEEP_INTERVAL", ZIMBRA_MAIL_PURGE_SLEEP_INTERVAL),
    ("ZIMBRA_MAIL_PURGE_USE_CHANGE_DATE_FOR_TRASH", ZIMBRA_MAIL_PURGE_USE_CHANGE_DATE_FOR_TRASH),
    ("ZIMBRA_MAIL_QUOTA", ZIMBRA_MAIL_QUOTA),
    ("ZIMBRA_MAIL_REDIRECT_SET_ENVELOPE_SENDER", ZIMBRA_MAIL_REDIRECT_SET_ENVELOPE_SENDER),
    ("ZIMBRA_MAIL_REFER_MODE", ZIMBRA_MAIL_REFER_MODE),
    ("ZIMBRA_MAIL_SIEVE_SCRIPT", ZIMBRA_MAIL_SIEVE_SCRIPT),
    ("ZIMBRA_MAIL_SIGNATURE_MAX_LENGTH", ZIMBRA_MAIL_SIGNATURE_MAX_LENGTH),
    ("ZIMBRA_MAIL_SPAM_LIFETIME", ZIMBRA_MAIL_SPAM_LIFETIME),
    ("ZIMBRA_MAIL_SSL_PORT", ZIMBRA_MAIL_SSL_PORT),
    ("ZIMBRA_MAIL_SSL_PROXY_PORT", ZIMBRA_MAIL_SSL_PROXY_PORT),
    ("ZIMBRA_MAIL_STATUS", ZIMBRA_MAIL_STATUS),
    ("ZIMBRA_MAIL_TRANSPORT", ZIMBRA_MAIL_TRANSPORT),
    ("ZIMBRA_MAIL_TRASH_LIFETIME", ZIMBRA_MAIL_TRASH_LIFETIME),
    ("ZIMBRA_MAIL_TRUSTED_IP", ZIMBRA_MAIL_TRUSTED_IP),
    ("ZIMBRA_MAIL_UNCOMPRESSED_CACHE_MAX_BYTES", ZIMBRA_MAIL_UNCOMPRESSED_CACHE_MAX_BYTES),
    ("ZIMBRA_MAIL_UNCOMPRESSED_CACHE_MAX_FILES", ZIMBRA_MAIL_UNCOMPRESSED_CACHE_MAX_FILES),
    ("ZIMBRA_MAIL_URL", ZIMBRA_MAIL_URL),
    ("ZIMBRA_MAIL_USE_DIRECT_BUFFERS", ZIMBRA_MAIL_USE_DIRECT_BUFFERS),
    ("ZIMBRA_MAIL_WHITELIST_MAX_NUM_ENTRIES", ZIMBRA_MAIL_WHITELIST_MAX_NUM_ENTRIES),
    ("ZIMBRA_MAX_CONTACTS_PER_PAGE", ZIMBRA_MAX_CONTACTS_PER_PAGE),
    ("ZIMBRA_MAX_MAIL_ITEMS_PER_PAGE", ZIMBRA_MAX_MAIL_ITEMS_PER_PAGE),
    ("ZIMBRA_MAX_VOICE_ITEMS_PER_PAGE", ZIMBRA_MAX_VOICE_ITEMS_PER_PAGE),
    ("ZIMBRA_MEMBER_OF", ZIMBRA_MEMBER_OF),
    ("ZIMBRA_MEMCACHED_BIND_ADDRESS", ZIMBRA_MEMCACHED_BIND_ADDRESS),
    ("ZIMBRA_MEMCACHED_BIND_PORT", ZIMBRA_MEMCACHED_BIND_PORT),
    ("ZIMBRA_MEMCACHED_CLIENT_BINARY_PROTOCOL_ENABLED", ZIMBRA_MEMCACHED_CLIENT_BINARY_PROTOCOL_ENABLED),
    ("ZIMBRA_MEMCACHED_CLIENT_EXPIRY_SECONDS", ZIMBRA_MEMCACHED_CLIENT_EXPIRY_SECONDS),
    ("ZIMBRA_MEMCACHED_CLIENT_HASH_ALGORITHM", ZIMBRA_MEMCACHED_CLIENT_HASH_ALGORITHM),
    ("ZIMBRA_MEMCACHED_CLIENT_SERVER_LIST", ZIMBRA_MEMCACHED_CLIENT_SERVER_LIST),
    ("ZIMBRA_MEMCACHED_CLIENT_TIMEOUT_MILLIS", ZIMBRA_MEMCACHED_CLIENT_TIMEOUT_MILLIS),
    ("ZIMBRA_MESSAGE_CACHE_SIZE", ZIMBRA_MESSAGE_CACHE_SIZE),
    ("ZIMBRA_MESSAGE_ID_DEDUPE_CACHE_SIZE", ZIMBRA_MESSAGE_ID_DEDUPE_CACHE_SIZE),
    ("ZIMBRA_MIME_FILE_EXTENSION", ZIMBRA_MIME_FILE_EXTENSION),
    ("ZIMBRA_MIME_HANDLER_CLASS", ZIMBRA_MIME_HANDLER_CLASS),
    ("ZIMBRA_MIME_HANDLER_EXTENSION", ZIMBRA_MIME_HANDLER_EXTENSION),
    ("ZIMBRA_MIME_INDEXING_ENABLED", ZIMBRA_MIME_INDEXING_ENABLED),
    ("ZIMBRA_MIME_PRIORITY", ZIMBRA_MIME_PRIORITY),
    ("ZIMBRA_MIME_TYPE", ZIMBRA_MIME_TYPE),
    ("ZIMBRA_MOBILE_POLICY_ALLOW_NON_PROVISIONABLE_DEVICES", ZIMBRA_MOBILE_POLICY_ALLOW_NON_PROVISIONABLE_DEVICES),
    ("ZIMBRA_MOBILE_POLICY_ALLOW_PARTIAL_PROVISIONING", ZIMBRA_MOBILE_POLICY_ALLOW_PARTIAL_PROVISIONING),
    ("ZIMBRA_MOBILE_POLICY_ALLOW_SIMPLE_DEVICE_PASSWORD", ZIMBRA_MOBILE_POLICY_ALLOW_SIMPLE_DEVICE_PASSWORD),
    ("ZIMBRA_MOBILE_POLICY_ALPHANUMERIC_DEVICE_PASSWORD_REQUIRED", ZIMBRA_MOBILE_POLICY_ALPHANUMERIC_DEVICE_PASSWORD_REQUIRED),
    ("ZIMBRA_MOBILE_POLICY_DEVICE_ENCRYPTION_ENABLED", ZIMBRA_MOBILE_POLICY_DEVICE_ENCRYPTION_ENABLED),
    ("ZIMBRA_MOBILE_POLICY_DEVICE_PASSWORD_ENABLED", ZIMBRA_MOBILE_POLICY_DEVICE_PASSWORD_ENABLED),
    ("ZIMBRA_MOBILE_POLICY_DEVICE_PASSWORD_EXPIRATION", ZIMBRA_MOBILE_POLICY_DEVICE_PASSWORD_EXPIRATION),
    ("ZIMBRA_MOBILE_POLICY_DEVICE_PASSWORD_HISTORY", ZIMBRA_MOBILE_POLICY_DEVICE_PASSWORD_HISTORY),
    ("ZIMBRA_MOBILE_POLICY_MAX_DEVICE_PASSWORD_FAILED_ATTEMPTS", ZIMBRA_MOBILE_POLICY_MAX_DEVICE_PASSWORD_FAILED_ATTEMPTS),
    ("ZIMBRA_MOBILE_POLICY_MAX_INACTIVITY_TIME_DEVICE_LOCK", ZIMBRA_MOBILE_POLICY_MAX_INACTIVITY_TIME_DEVICE_LOCK),
    ("ZIMBRA_MOBILE_POLICY_MIN_DEVICE_PASSWORD_COMPLEX_CHARACTERS", ZIMBRA_MOBILE_POLICY_MIN_DEVICE_PASSWORD_COMPLEX_CHARACTERS),
    ("ZIMBRA_MOBILE_POLICY_MIN_DEVICE_PASSWORD_LENGTH", ZIMBRA_MOBILE_POLICY_MIN_DEVICE_PASSWORD_LENGTH),
    ("ZIMBRA_MOBILE_POLICY_PASSWORD_RECOVERY_ENABLED", ZIMBRA_MOBILE_POLICY_PASSWORD_RECOVERY_ENABLED),
    ("ZIMBRA_MOBILE_POLICY_REFRESH_INTERVAL", ZIMBRA_MOBILE_POLICY_REFRESH_INTERVAL),
    ("ZIMBRA_MTA_ANTI_SPAM_LOCK_METHOD", ZIMBRA_MTA_ANTI_SPAM_LOCK_METHOD),
    ("ZIMBRA_MTA_AUTH_ENABLED", ZIMBRA_MTA_AUTH_ENABLED),
    ("ZIMBRA_MTA_AUTH_HOST", ZIMBRA_MTA_AUTH_HOST),
    ("ZIMBRA_MTA_AUTH_TARGET", ZIMBRA_MTA_AUTH_TARGET),
    ("ZIMBRA_MTA_AUTH_URL", ZIMBRA_MTA_AUTH_URL),
    ("ZIMBRA_MTA_BLOCKED_EXTENSION", ZIMBRA_MTA_BLOCKED_EXTENSION),
    ("ZIMBRA_MTA_BLOCKED_EXTENSION_WARN_ADMIN", ZIMBRA_MTA_BLOCKED_EXTENSION_WARN_ADMIN),
    ("ZIMBRA_MTA_BLOCKED_EXTENSION_WARN_RECIPIENT", ZIMBRA_MTA_BLOCKED_EXTENSION_WARN_RECIPIENT),
    ("ZIMBRA_MTA_COMMON_BLOCKED_EXTENSION", ZIMBRA_MTA_COMMON_BLOCKED_EXTENSION),
    ("ZIMBRA_MTA_DNS_LOOKUPS_ENABLED", ZIMBRA_MTA_DNS_LOOKUPS_ENABLED),
    ("ZIMBRA_MTA_MAX_MESSAGE_SIZE", ZIMBRA_MTA_MAX_MESSAGE_SIZE),
    ("ZIMBRA_MTA_MY_DESTINATION", ZIMBRA_MTA_MY_DESTINATION),
    ("ZIMBRA_MTA_MY_HOSTNAME", ZIMBRA_MTA_MY_HOSTNAME),
    ("ZIMBRA_MTA_MY_NETWORKS", ZIMBRA_MTA_MY_NETWORKS),
    ("ZIMBRA_MTA_MY_ORIGIN", ZIMBRA_MTA_MY_ORIGIN),
    ("ZIMBRA_MTA_NON_SMTPD_MILTERS", ZIMBRA_MTA_NON_SMTPD_MILTERS),
    ("ZIMBRA_MTA_RECIPIENT_DELIMITER", ZIMBRA_MTA_RECIPIENT_DELIMITER),
    ("ZIMBRA_MTA_RELAY_HOST", ZIMBRA_MTA_RELAY_HOST),
    ("ZIMBRA_MTA_RESTRICTION", ZIMBRA_MTA_RESTRICTION),
    ("ZIMBRA_MTA_SASL_AUTH_ENABLE", ZIMBRA_MTA_SASL_AUTH_ENABLE),
    ("ZIMBRA_MTA_SMTPD_MILTERS", ZIMBRA_MTA_SMTPD_MILTERS),
    ("ZIMBRA_MTA_TLS_AUTH_ONLY", ZIMBRA_MTA_TLS_AUTH_ONLY),
    ("ZIMBRA_MTA_TLS_SECURITY_LEVEL", ZIMBRA_MTA_TLS_SECURITY_LEVEL),
    ("ZIMBRA_NETWORK_ACTIVATION", ZIMBRA_NETWORK_ACTIVATION),
    ("ZIMBRA_NETWORK_LICENSE", ZIMBRA_NETWORK_LICENSE),
    ("ZIMBRA_NEW_MAIL_NOTIFICATION_BODY", ZIMBRA_NEW_MAIL_NOTIFICATION_BODY),
    ("ZIMBRA_NEW_MAIL_NOTIFICATION_FROM", ZIMBRA_NEW_MAIL_NOTIFICATION_FROM),
    ("ZIMBRA_NEW_MAIL_NOTIFICATION_SUBJECT", ZIMBRA_NEW_MAIL_NOTIFICATION_SUBJECT),
    ("ZIMBRA_NOTEBOOK_ACCOUNT", ZIMBRA_NOTEBOOK_ACCOUNT),
    ("ZIMBRA_NOTEBOOK_FOLDER_CACHE_SIZE", ZIMBRA_NOTEBOOK_FOLDER_CACHE_SIZE),
    ("ZIMBRA_NOTEBOOK_MAX_CACHED_TEMPLATES_PER_FOLDER", ZIMBRA_NOTEBOOK_MAX_CACHED_TEMPLATES_PER_FOLDER),
    ("ZIMBRA_NOTEBOOK_MAX_REVISIONS", ZIMBRA_NOTEBOOK_MAX_REVISIONS),
    ("ZIMBRA_NOTEBOOK_PAGE_CACHE_SIZE", ZIMBRA_NOTEBOOK_PAGE_CACHE_SIZE),
    ("ZIMBRA_NOTEBOOK_SANITIZE_HTML", ZIMBRA_NOTEBOOK_SANITIZE_HTML),
    ("ZIMBRA_NOTES", ZIMBRA_NOTES),
    ("ZIMBRA_NOTIFY_BIND_ADDRESS", ZIMBRA_NOTIFY_BIND_ADDRESS),
    ("ZIMBRA_NOTIFY_BIND_PORT", ZIMBRA_NOTIFY_BIND_PORT),
    ("ZIMBRA_NOTIFY_SERVER_ENABLED", ZIMBRA_NOTIFY_SERVER_ENABLED),
    ("ZIMBRA_NOTIFY_SSL_BIND_ADDRESS", ZIMBRA_NOTIFY_SSL_BIND_ADDRESS),
    ("ZIMBRA_NOTIFY_SSL_BIND_PORT", ZIMBRA_NOTIFY_SSL_BIND_PORT),
    ("ZIMBRA_NOTIFY_SSL_SERVER_ENABLED", ZIMBRA_NOTIFY_SSL_SERVER_ENABLED),
    ("ZIMBRA_OBJECT_HANDLER_CLASS", ZIMBRA_OBJECT_HANDLER_CLASS),
    ("ZIMBRA_OBJECT_HANDLER_CONFIG", ZIMBRA_OBJECT_HANDLER_CONFIG),
    ("ZIMBRA_OBJECT_INDEXING_ENABLED", ZIMBRA_OBJECT_INDEXING_ENABLED),
    ("ZIMBRA_OBJECT_STORE_MATCHED", ZIMBRA_OBJECT_STORE_MATCHED),
    ("ZIMBRA_OBJECT_TYPE", ZIMBRA_OBJECT_TYPE),
    ("ZIMBRA_PASSWORD_CHANGE_LISTENER", ZIMBRA_PASSWORD_CHANGE_LISTENER),
    ("ZIMBRA_PASSWORD_ENFORCE_HISTORY", ZIMBRA_PASSWORD_ENFORCE_HISTORY),
    ("ZIMBRA_PASSWORD_HISTORY", ZIMBRA_PASSWORD_HISTORY),
    ("ZIMBRA_PASSWORD_LOCKED", ZIMBRA_PASSWORD_LOCKED),
    ("ZIMBRA_PASSWORD_LOCKOUT_DURATION", ZIMBRA_PASSWORD_LOCKOUT_DURATION),
    ("ZIMBRA_PASSWORD_LOCKOUT_ENABLED", ZIMBRA_PASSWORD_LOCKOUT_ENABLED),
    ("ZIMBRA_PASSWORD_LOCKOUT_FAILURE_LIFETIME", ZIMBRA_PASSWORD_LOCKOUT_FAILURE_LIFETIME),
    ("ZIMBRA_PASSWORD_LOCKOUT_FAILURE_TIME", ZIMBRA_PASSWORD_LOCKOUT_FAILURE_TIME),
    ("ZIMBRA_PASSWORD_LOCKOUT_LOCKED_TIME", ZIMBRA_PASSWORD_LOCKOUT_LOCKED_TIME),
    ("ZIMBRA_PASSWORD_LOCKOUT_MAX_FAILURES", ZIMBRA_PASSWORD_LOCKOUT_MAX_FAILURES),
    ("ZIMBRA_PASSWORD_MAX_AGE", ZIMBRA_PASSWORD_MAX_AGE),
    ("ZIMBRA_PASSWORD_MAX_LENGTH", ZIMBRA_PASSWORD_MAX_LENGTH),
    ("ZIMBRA_PASSWORD_MIN_AGE", ZIMBRA_PASSWORD_MIN_AGE),
    ("ZIMBRA_PASSWORD_MIN_LENGTH", ZIMBRA_PASSWORD_MIN_LENGTH),
    ("ZIMBRA_PASSWORD_MIN_LOWER_CASE_CHARS", ZIMBRA_PASSWORD_MIN_LOWER_CASE_CHARS),
    ("ZIMBRA_PASSWORD_MIN_NUMERIC_CHARS", ZIMBRA_PASSWORD_MIN_NUMERIC_CHARS),
    ("ZIMBRA_PASSWORD_MIN_PUNCTUATION_CHARS", ZIMBRA_PASSWORD_MIN_PUNCTUATION_CHARS),
    ("ZIMBRA_PASSWORD_MIN_UPPER_CASE_CHARS", ZIMBRA_PASSWORD_MIN_UPPER_CASE_CHARS),
    ("ZIMBRA_PASSWORD_MODIFIED_TIME", ZIMBRA_PASSWORD_MODIFIED_TIME),
    ("ZIMBRA_PASSWORD_MUST_CHANGE", ZIMBRA_PASSWORD_MUST_CHANGE),
    ("ZIMBRA_POP3_ADVERTISED_NAME", ZIMBRA_POP3_ADVERTISED_NAME),
    ("ZIMBRA_POP3_BIND_ADDRESS", ZIMBRA_POP3_BIND_ADDRESS),
    ("ZIMBRA_POP3_BIND_ON_STARTUP", ZIMBRA_POP3_BIND_ON_STARTUP),
    ("ZIMBRA_POP3_BIND_PORT", ZIMBRA_POP3_BIND_PORT),
    ("ZIMBRA_POP3_CLEARTEXT_LOGIN_ENABLED", ZIMBRA_POP3_CLEARTEXT_LOGIN_ENABLED),
    ("ZIMBRA_POP3_ENABLED", ZIMBRA_POP3_ENABLED),
    ("ZIMBRA_POP3_EXPOSE_VERSION_ON_BANNER", ZIMBRA_POP3_EXPOSE_VERSION_ON_BANNER),
    ("ZIMBRA_POP3_NUM_THREADS", ZIMBRA_POP3_NUM_THREADS),
    ("ZIMBRA_POP3_PROXY_BIND_PORT", ZIMBRA_POP3_PROXY_BIND_PORT),
    ("ZIMBRA_POP3_SASL_GSSAPI_ENABLED", ZIMBRA_POP3_SASL_GSSAPI_ENABLED),
    ("ZIMBRA_POP3_SERVER_ENABLED", ZIMBRA_POP3_SERVER_ENABLED),
    ("ZIMBRA_POP3_SHUTDOWN_GRACE_SECONDS", ZIMBRA_POP3_SHUTDOWN_GRACE_SECONDS),
    ("ZIMBRA_POP3_SSL_BIND_ADDRESS", ZIMBRA_POP3_SSL_BIND_ADDRESS),
    ("ZIMBRA_POP3_SSL_BIND_ON_STARTUP", ZIMBRA_POP3_SSL_BIND_ON_STARTUP),
    ("ZIMBRA_POP3_SSL_BIND_PORT", ZIMBRA_POP3_SSL_BIND_PORT),
    ("ZIMBRA_POP3_SSL_PROXY_BIND_PORT", ZIMBRA_POP3_SSL_PROXY_BIND_PORT),
    ("ZIMBRA_POP3_SSL_SERVER_ENABLED", ZIMBRA_POP3_SSL_SERVER_ENABLED),
    ("ZIMBRA_PORTAL_NAME", ZIMBRA_PORTAL_NAME),
    ("ZIMBRA_PRE_AUTH_KEY", ZIMBRA_PRE_AUTH_KEY),
    ("ZIMBRA_PREF_ACCOUNT_TREE_OPEN", ZIMBRA_PREF_ACCOUNT_TREE_OPEN),
    ("ZIMBRA_PREF_ADMIN_CONSOLE_WARN_ON_EXIT", ZIMBRA_PREF_ADMIN_CONSOLE_WARN_ON_EXIT),
    ("ZIMBRA_PREF_ADVANCED_CLIENT_ENFORCE_MIN_DISPLAY", ZIMBRA_PREF_ADVANCED_CLIENT_ENFORCE_MIN_DISPLAY),
    ("ZIMBRA_PREF_APPLE_ICAL_DELEGATION_ENABLED", ZIMBRA_PREF_APPLE_ICAL_DELEGATION_ENABLED),
    ("ZIMBRA_PREF_AUTO_ADD_ADDRESS_ENABLED", ZIMBRA_PREF_AUTO_ADD_ADDRESS_ENABLED),
    ("ZIMBRA_PREF_AUTO_COMPLETE_QUICK_COMPLETION_ON_COMMA", ZIMBRA_PREF_AUTO_COMPLETE_QUICK_COMPLETION_ON_COMMA),
    ("ZIMBRA_PREF_AUTO_SAVE_DRAFT_INTERVAL", ZIMBRA_PREF_AUTO_SAVE_DRAFT_INTERVAL),
    ("ZIMBRA_PREF_BCC_ADDRESS", ZIMBRA_PREF_BCC_ADDRESS),
    ("ZIMBRA_PREF_CALENDAR_ALLOW_CANCEL_EMAIL_TO_SELF", ZIMBRA_PREF_CALENDAR_ALLOW_CANCEL_EMAIL_TO_SELF),
    ("ZIMBRA_PREF_CALENDAR_ALLOW_FORWARDED_INVITE", ZIMBRA_PREF_CALENDAR_ALLOW_FORWARDED_INVITE),
    ("ZIMBRA_PREF_CALENDAR_ALLOW_PUBLISH_METHOD_INVITE", ZIMBRA_PREF_CALENDAR_ALLOW_PUBLISH_METHOD_INVITE),
    ("ZIMBRA_PREF_CALENDAR_ALWAYS_SHOW_MINI_CAL", ZIMBRA_PREF_CALENDAR_ALWAYS_SHOW_MINI_CAL),
    ("ZIMBRA_PREF_CALENDAR_APPT_ALLOW_ATENDEE_EDIT", ZIMBRA_PREF_CALENDAR_APPT_ALLOW_ATENDEE_EDIT),
    ("ZIMBRA_PREF_CALENDAR_APPT_REMINDER_WARNING_TIME", ZIMBRA_PREF_CALENDAR_APPT_REMINDER_WARNING_TIME),
    ("ZIMBRA_PREF_CALENDAR_APPT_VISIBILITY", ZIMBRA_PREF_CALENDAR_APPT_VISIBILITY),
    ("ZIMBRA_PREF_CALENDAR_AUTO_ADD_INVITES", ZIMBRA_PREF_CALENDAR_AUTO_ADD_INVITES),
    ("ZIMBRA_PREF_CALENDAR_DAY_HOUR_END", ZIMBRA_PREF_CALENDAR_DAY_HOUR_END),
    ("ZIMBRA_PREF_CALENDAR_DAY_HOUR_START", ZIMBRA_PREF_CALENDAR_DAY_HOUR_START),
    ("ZIMBRA_PREF_CALENDAR_FIRST_DAY_OF_WEEK", ZIMBRA_PREF_CALENDAR_FIRST_DAY_OF_WEEK),
    ("ZIMBRA_PREF_CALENDAR_FORWARD_INVITES_TO", ZIMBRA_PREF_CALENDAR_FORWARD_INVITES_TO),
    ("ZIMBRA_PREF_CALENDAR_INITIAL_CHECKED_CALENDARS", ZIMBRA_PREF_CALENDAR_INITIAL_CHECKED_CALENDARS),
    ("ZIMBRA_PREF_CALENDAR_INITIAL_VIEW", ZIMBRA_PREF_CALENDAR_INITIAL_VIEW),
    ("ZIMBRA_PREF_CALENDAR_NOTIFY_DELEGATED_CHANGES", ZIMBRA_PREF_CALENDAR_NOTIFY_DELEGATED_CHANGES),
    ("ZIMBRA_PREF_CALENDAR_REMINDER_DURATION1", ZIMBRA_PREF_CALENDAR_REMINDER_DURATION1),
    ("ZIMBRA_PREF_CALENDAR_REMINDER_DURATION2", ZIMBRA_PREF_CALENDAR_REMINDER_DURATION2),
    ("ZIMBRA_PREF_CALENDAR_REMINDER_EMAIL", ZIMBRA_PREF_CALENDAR_REMINDER_EMAIL),
    ("ZIMBRA_PREF_CALENDAR_REMINDER_FLASH_TITLE", ZIMBRA_PREF_CALENDAR_REMINDER_FLASH_TITLE),
    ("ZIMBRA_PREF_CALENDAR_REMINDER_MOBILE", ZIMBRA_PREF_CALENDAR_REMINDER_MOBILE),
    ("ZIMBRA_PREF_CALENDAR_REMINDER_SEND_EMAIL", ZIMBRA_PREF_CALENDAR_REMINDER_SEND_EMAIL),
    ("ZIMBRA_PREF_CALENDAR_REMINDER_SOUNDS_ENABLED", ZIMBRA_PREF_CALENDAR_REMINDER_SOUNDS_ENABLED),
    ("ZIMBRA_PREF_CALENDAR_REMINDER_Y_MESSENGER", ZIMBRA_PREF_CALENDAR_REMINDER_Y_MESSENGER),
    ("ZIMBRA_PREF_CALENDAR_SEND_INVITE_DENIED_AUTO_REPLY", ZIMBRA_PREF_CALENDAR_SEND_INVITE_DENIED_AUTO_REPLY),
    ("ZIMBRA_PREF_CALENDAR_SHOW_PAST_DUE_REMINDERS", ZIMBRA_PREF_CALENDAR_SHOW_PAST_DUE_REMINDERS),
    ("ZIMBRA_PREF_CALENDAR_TOASTER_ENABLED", ZIMBRA_PREF_CALENDAR_TOASTER_ENABLED),
    ("ZIMBRA_PREF_CALENDAR_USE_QUICK_ADD", ZIMBRA_PREF_CALENDAR_USE_QUICK_ADD),
    ("ZIMBRA_PREF_CHILD_VISIBLE_ACCOUNT", ZIMBRA_PREF_CHILD_VISIBLE_ACCOUNT),
    ("ZIMBRA_PREF_CLIENT_TYPE", ZIMBRA_PREF_CLIENT_TYPE),
    ("ZIMBRA_PREF_COMPOSE_FORMAT", ZIMBRA_PREF_COMPOSE_FORMAT),
    ("ZIMBRA_PREF_COMPOSE_IN_NEW_WINDOW", ZIMBRA_PREF_COMPOSE_IN_NEW_WINDOW),
    ("ZIMBRA_PREF_CONTACTS_DISABLE_AUTOCOMPLETE_ON_CONTACT_GROUP_MEMBERS", ZIMBRA_PREF_CONTACTS_DISABLE_AUTOCOMPLETE_ON_CONTACT_GROUP_MEMBERS),
    ("ZIMBRA_PREF_CONTACTS_INITIAL_VIEW", ZIMBRA_PREF_CONTACTS_INITIAL_VIEW),
    ("ZIMBRA_PREF_CONTACTS_PER_PAGE", ZIMBRA_PREF_CONTACTS_PER_PAGE),
    ("ZIMBRA_PREF_CONVERSATION_ORDER", ZIMBRA_PREF_CONVERSATION_ORDER),
    ("ZIMBRA_PREF_CONV_READING_PANE_LOCATION", ZIMBRA_PREF_CONV_READING_PANE_LOCATION),
    ("ZIMBRA_PREF_DEDUPE_MESSAGES_SENT_TO_SELF", ZIMBRA_PREF_DEDUPE_MESSAGES_SENT_TO_SELF),
    ("ZIMBRA_PREF_DEFAULT_PRINT_FONT_SIZE", ZIMBRA_PREF_DEFAULT_PRINT_FONT_SIZE),
    ("ZIMBRA_PREF_DEFAULT_SIGNATURE_ID", ZIMBRA_PREF_DEFAULT_SIGNATURE_ID),
    ("ZIMBRA_PREF_DELETE_INVITE_ON_REPLY", ZIMBRA_PREF_DELETE_INVITE_ON_REPLY),
    ("ZIMBRA_PREF_DISABLED_ZIMLETS", ZIMBRA_PREF_DISABLED_ZIMLETS),
    ("ZIMBRA_PREF_DISPLAY_EXTERNAL_IMAGES", ZIMBRA_PREF_DISPLAY_EXTERNAL_IMAGES),
    ("ZIMBRA_PREF_FOLDER_COLOR_ENABLED", ZIMBRA_PREF_FOLDER_COLOR_ENABLED),
    ("ZIMBRA_PREF_FOLDER_TREE_OPEN", ZIMBRA_PREF_FOLDER_TREE_OPEN),
    ("ZIMBRA_PREF_FORWARD_INCLUDE_ORIGINAL_TEXT", ZIMBRA_PREF_FORWARD_INCLUDE_ORIGINAL_TEXT),
    ("ZIMBRA_PREF_FORWARD_REPLY_FORMAT", ZIMBRA_PREF_FORWARD_REPLY_FORMAT),
    ("ZIMBRA_PREF_FORWARD_REPLY_IN_ORIGINAL_FORMAT", ZIMBRA_PREF_FORWARD_REPLY_IN_ORIGINAL_FORMAT),
    ("ZIMBRA_PREF_FORWARD_REPLY_PREFIX_CHAR", ZIMBRA_PREF_FORWARD_REPLY_PREFIX_CHAR),
    ("ZIMBRA_PREF_FROM_ADDRESS", ZIMBRA_PREF_FROM_ADDRESS),
    ("ZIMBRA_PREF_FROM_DISPLAY", ZIMBRA_PREF_FROM_DISPLAY),
    ("ZIMBRA_PREF_GAL_AUTO_COMPLETE_ENABLED", ZIMBRA_PREF_GAL_AUTO_COMPLETE_ENABLED),
    ("ZIMBRA_PREF_GAL_SEARCH_ENABLED", ZIMBRA_PREF_GAL_SEARCH_ENABLED),
    ("ZIMBRA_PREF_GET_MAIL_ACTION", ZIMBRA_PREF_GET_MAIL_ACTION),
    ("ZIMBRA_PREF_GROUP_MAIL_BY", ZIMBRA_PREF_GROUP_MAIL_BY),
    ("ZIMBRA_PREF_HTML_EDITOR_DEFAULT_FONT_COLOR", ZIMBRA_PREF_HTML_EDITOR_DEFAULT_FONT_COLOR),
    ("ZIMBRA_PREF_HTML_EDITOR_DEFAULT_FONT_FAMILY", ZIMBRA_PREF_HTML_EDITOR_DEFAULT_FONT_FAMILY),
    ("ZIMBRA_PREF_HTML_EDITOR_DEFAULT_FONT_SIZE", ZIMBRA_PREF_HTML_EDITOR_DEFAULT_FONT_SIZE),
    ("ZIMBRA_PREF_IDENTITY_ID", ZIMBRA_PREF_IDENTITY_ID),
    ("ZIMBRA_PREF_IDENTITY_NAME", ZIMBRA_PREF_IDENTITY_NAME),
    ("ZIMBRA_PREF_IMAP_SEARCH_FOLDERS_ENABLED", ZIMBRA_PREF_IMAP_SEARCH_FOLDERS_ENABLED),
    ("ZIMBRA_PREF_IM_AUTO_LOGIN", ZIMBRA_PREF_IM_AUTO_LOGIN),
    ("ZIMBRA_PREF_IM_BUDDY_LIST_SORT", ZIMBRA_PREF_IM_BUDDY_LIST_SORT),
    ("ZIMBRA_PREF_IM_CUSTOM_STATUS_MESSAGE", ZIMBRA_PREF_IM_CUSTOM_STATUS_MESSAGE),
    ("ZIMBRA_PREF_IM_FLASH_ICON", ZIMBRA_PREF_IM_FLASH_ICON),
    ("ZIMBRA_PREF_IM_FLASH_TITLE", ZIMBRA_PREF_IM_FLASH_TITLE),
    ("ZIMBRA_PREF_IM_HIDE_BLOCKED_BUDDIES", ZIMBRA_PREF_IM_HIDE_BLOCKED_BUDDIES),
    ("ZIMBRA_PREF_IM_HIDE_OFFLINE_BUDDIES", ZIMBRA_PREF_IM_HIDE_OFFLINE_BUDDIES),
    ("ZIMBRA_PREF_IM_IDLE_STATUS", ZIMBRA_PREF_IM_IDLE_STATUS),
    ("ZIMBRA_PREF_IM_IDLE_TIMEOUT", ZIMBRA_PREF_IM_IDLE_TIMEOUT),
    ("ZIMBRA_PREF_IM_INSTANT_NOTIFY", ZIMBRA_PREF_IM_INSTANT_NOTIFY),
    ("ZIMBRA_PREF_IM_LOG_CHATS", ZIMBRA_PREF_IM_LOG_CHATS),
    ("ZIMBRA_PREF_IM_LOG_CHATS_ENABLED", ZIMBRA_PREF_IM_LOG_CHATS_ENABLED),
    ("ZIMBRA_PREF_IM_NOTIFY_PRESENCE", ZIMBRA_PREF_IM_NOTIFY_PRESENCE),
    ("ZIMBRA_PREF_IM_NOTIFY_STATUS", ZIMBRA_PREF_IM_NOTIFY_STATUS),
    ("ZIMBRA_PREF_IM_REPORT_IDLE", ZIMBRA_PREF_IM_REPORT_IDLE),
    ("ZIMBRA_PREF_IM_SOUNDS_ENABLED", ZIMBRA_PREF_IM_SOUNDS_ENABLED),
    ("ZIMBRA_PREF_IM_TOASTER_ENABLED", ZIMBRA_PREF_IM_TOASTER_ENABLED),
    ("ZIMBRA_PREF_IM_YAHOO_ID", ZIMBRA_PREF_IM_YAHOO_ID),
    ("ZIMBRA_PREF_INBOX_READ_LIFETIME", ZIMBRA_PREF_INBOX_READ_LIFETIME),
    ("ZIMBRA_PREF_INBOX_UNREAD_LIFETIME", ZIMBRA_PREF_INBOX_UNREAD_LIFETIME),
    ("ZIMBRA_PREF_INCLUDE_SPAM_IN_SEARCH", ZIMBRA_PREF_INCLUDE_SPAM_IN_SEARCH),
    ("ZIMBRA_PREF_INCLUDE_TRASH_IN_SEARCH", ZIMBRA_PREF_INCLUDE_TRASH_IN_SEARCH),
    ("ZIMBRA_PREF_ITEMS_PER_VIRTUAL_PAGE", ZIMBRA_PREF_ITEMS_PER_VIRTUAL_PAGE),
    ("ZIMBRA_PREF_JUNK_LIFETIME", ZIMBRA_PREF_JUNK_LIFETIME),
    ("ZIMBRA_PREF_LABEL", ZIMBRA_PREF_LABEL),
    ("ZIMBRA_PREF_LIST_VIEW_COLUMNS", ZIMBRA_PREF_LIST_VIEW_COLUMNS),
    ("ZIMBRA_PREF_LOCALE", ZIMBRA_PREF_LOCALE),
    ("ZIMBRA_PREF_MAIL_DEFAULT_CHARSET", ZIMBRA_PREF_MAIL_DEFAULT_CHARSET),
    ("ZIMBRA_PREF_MAIL_FLASH_ICON", ZIMBRA_PREF_MAIL_FLASH_ICON),
    ("ZIMBRA_PREF_MAIL_FLASH_TITLE", ZIMBRA_PREF_MAIL_FLASH_TITLE),
    ("ZIMBRA_PREF_MAIL_FOLDERS_CHECKED_FOR_NEW_MSG_INDICATOR", ZIMBRA_PREF_MAIL_FOLDERS_CHECKED_FOR_NEW_MSG_INDICATOR),
    ("ZIMBRA_PREF_MAIL_FORWARDING_ADDRESS", ZIMBRA_PREF_MAIL_FORWARDING_ADDRESS),
    ("ZIMBRA_PREF_MAIL_INITIAL_SEARCH", ZIMBRA_PREF_MAIL_INITIAL_SEARCH),
    ("ZIMBRA_PREF_MAIL_ITEMS_PER_PAGE", ZIMBRA_PREF_MAIL_ITEMS_PER_PAGE),
    ("ZIMBRA_PREF_MAIL_LOCAL_DELIVERY_DISABLED", ZIMBRA_PREF_MAIL_LOCAL_DELIVERY_DISABLED),
    ("ZIMBRA_PREF_MAIL_POLLING_INTERVAL", ZIMBRA_PREF_MAIL_POLLING_INTERVAL),
    ("ZIMBRA_PREF_MAIL_SELECT_AFTER_DELETE", ZIMBRA_PREF_MAIL_SELECT_AFTER_DELETE),
    ("ZIMBRA_PREF_MAIL_SEND_READ_RECEIPTS", ZIMBRA_PREF_MAIL_SEND_READ_RECEIPTS),
    ("ZIMBRA_PREF_MAIL_SIGNATURE", ZIMBRA_PREF_MAIL_SIGNATURE),
    ("ZIMBRA_PREF_MAIL_SIGNATURE_ENABLED", ZIMBRA_PREF_MAIL_SIGNATURE_ENABLED),
    ("ZIMBRA_PREF_MAIL_SIGNATURE_HTML", ZIMBRA_PREF_MAIL_SIGNATURE_HTML),
    ("ZIMBRA_PREF_MAIL_SIGNATURE_STYLE", ZIMBRA_PREF_MAIL_SIGNATURE_STYLE),
    ("ZIMBRA_PREF_MAIL_SOUNDS_ENABLED", ZIMBRA_PREF_MAIL_SOUNDS_ENABLED),
    ("ZIMBRA_PREF_MAIL_TOASTER_ENABLED", ZIMBRA_PREF_MAIL_TOASTER_ENABLED),
    ("ZIMBRA_PREF_MANDATORY_SPELL_CHECK_ENABLED", ZIMBRA_PREF_MANDATORY_SPELL_CHECK_ENABLED),
    ("ZIMBRA_PREF_MARK_MSG_READ", ZIMBRA_PREF_MARK_MSG_READ),
    ("ZIMBRA_PREF_MESSAGE_VIEW_HTML_PREFERRED", ZIMBRA_PREF_MESSAGE_VIEW_HTML_PREFERRED),
    ("ZIMBRA_PREF_NEW_MAIL_NOTIFICATION_ADDRESS", ZIMBRA_PREF_NEW_MAIL_NOTIFICATION_ADDRESS),
    ("ZIMBRA_PREF_NEW_MAIL_NOTIFICATION_ENABLED", ZIMBRA_PREF_NEW_MAIL_NOTIFICATION_ENABLED),
    ("ZIMBRA_PREF_OPEN_MAIL_IN_NEW_WINDOW", ZIMBRA_PREF_OPEN_MAIL_IN_NEW_WINDOW),
    ("ZIMBRA_PREF_OUT_OF_OFFICE_CACHE_DURATION", ZIMBRA_PREF_OUT_OF_OFFICE_CACHE_DURATION),
    ("ZIMBRA_PREF_OUT_OF_OFFICE_DIRECT_ADDRESS", ZIMBRA_PREF_OUT_OF_OFFICE_DIRECT_ADDRESS),
    ("ZIMBRA_PREF_OUT_OF_OFFICE_FROM_DATE", ZIMBRA_PREF_OUT_OF_OFFICE_FROM_DATE),
    ("ZIMBRA_PREF_OUT_OF_OFFICE_REPLY", ZIMBRA_PREF_OUT_OF_OFFICE_REPLY),
    ("ZIMBRA_PREF_OUT_OF_OFFICE_REPLY_ENABLED", ZIMBRA_PREF_OUT_OF_OFFICE_REPLY_ENABLED),
    ("ZIMBRA_PREF_OUT_OF_OFFICE_UNTIL_DATE", ZIMBRA_PREF_OUT_OF_OFFICE_UNTIL_DATE),
    ("ZIMBRA_PREF_POP3_DOWNLOAD_SINCE", ZIMBRA_PREF_POP3_DOWNLOAD_SINCE),
    ("ZIMBRA_PREF_READING_PANE_ENABLED", ZIMBRA_PREF_READING_PANE_ENABLED),
    ("ZIMBRA_PREF_READING_PANE_LOCATION", ZIMBRA_PREF_READING_PANE_LOCATION),
    ("ZIMBRA_PREF_READ_RECEIPTS_TO_ADDRESS", ZIMBRA_PREF_READ_RECEIPTS_TO_ADDRESS),
    ("ZIMBRA_PREF_REPLY_INCLUDE_ORIGINAL_TEXT", ZIMBRA_PREF_REPLY_INCLUDE_ORIGINAL_TEXT),
    ("ZIMBRA_PREF_REPLY_TO_ADDRESS", ZIMBRA_PREF_REPLY_TO_ADDRESS),
    ("ZIMBRA_PREF_REPLY_TO_DISPLAY", ZIMBRA_PREF_REPLY_TO_DISPLAY),
    ("ZIMBRA_PREF_REPLY_TO_ENABLED", ZIMBRA_PREF_REPLY_TO_ENABLED),
    ("ZIMBRA_PREF_SAVE_TO_SENT", ZIMBRA_PREF_SAVE_TO_SENT),
    ("ZIMBRA_PREF_SEARCH_TREE_OPEN", ZIMBRA_PREF_SEARCH_TREE_OPEN),
    ("ZIMBRA_PREF_SENT_LIFETIME", ZIMBRA_PREF_SENT_LIFETIME),
    ("ZIMBRA_PREF_SENT_MAIL_FOLDER", ZIMBRA_PREF_SENT_MAIL_FOLDER),
    ("ZIMBRA_PREF_SHARED_ADDR_BOOK_AUTO_COMPLETE_ENABLED", ZIMBRA_PREF_SHARED_ADDR_BOOK_AUTO_COMPLETE_ENABLED),
    ("ZIMBRA_PREF_SHORTCUTS", ZIMBRA_PREF_SHORTCUTS),
    ("ZIMBRA_PREF_SHOW_CALENDAR_WEEK", ZIMBRA_PREF_SHOW_CALENDAR_WEEK),
    ("ZIMBRA_PREF_SHOW_FRAGMENTS", ZIMBRA_PREF_SHOW_FRAGMENTS),
    ("ZIMBRA_PREF_SHOW_SEARCH_STRING", ZIMBRA_PREF_SHOW_SEARCH_STRING),
    ("ZIMBRA_PREF_SHOW_SELECTION_CHECKBOX", ZIMBRA_PREF_SHOW_SELECTION_CHECKBOX),
    ("ZIMBRA_PREF_SKIN", ZIMBRA_PREF_SKIN),
    ("ZIMBRA_PREF_SPELL_DICTIONARY", ZIMBRA_PREF_SPELL_DICTIONARY),
    ("ZIMBRA_PREF_SPELL_IGNORE_WORD", ZIMBRA_PREF_SPELL_IGNORE_WORD),
    ("ZIMBRA_PREF_STANDARD_CLIENT_ACCESSIBILITY_MODE", ZIMBRA_PREF_STANDARD_CLIENT_ACCESSIBILITY_MODE),
    ("ZIMBRA_PREF_TAG_TREE_OPEN", ZIMBRA_PREF_TAG_TREE_OPEN),
    ("ZIMBRA_PREF_TIME_ZONE_ID", ZIMBRA_PREF_TIME_ZONE_ID),
    ("ZIMBRA_PREF_TRASH_LIFETIME", ZIMBRA_PREF_TRASH_LIFETIME),
    ("ZIMBRA_PREF_USE_DEFAULT_IDENTITY_SETTINGS", ZIMBRA_PREF_USE_DEFAULT_IDENTITY_SETTINGS),
    ("ZIMBRA_PREF_USE_KEYBOARD_SHORTCUTS", ZIMBRA_PREF_USE_KEYBOARD_SHORTCUTS),
    ("ZIMBRA_PREF_USE_RFC2231", ZIMBRA_PREF_USE_RFC2231),
    ("ZIMBRA_PREF_USE_TIME_ZONE_LIST_IN_CALENDAR", ZIMBRA_PREF_USE_TIME_ZONE_LIST_IN_CALENDAR),
    ("ZIMBRA_PREF_VOICE_ITEMS_PER_PAGE", ZIMBRA_PREF_VOICE_ITEMS_PER_PAGE),
    ("ZIMBRA_PREF_WARN_ON_EXIT", ZIMBRA_PREF_WARN_ON_EXIT),
    ("ZIMBRA_PREF_WHEN_IN_FOLDER_IDS", ZIMBRA_PREF_WHEN_IN_FOLDER_IDS),
    ("ZIMBRA_PREF_WHEN_IN_FOLDERS_ENABLED", ZIMBRA_PREF_WHEN_IN_FOLDERS_ENABLED),
    ("ZIMBRA_PREF_WHEN_SENT_TO_ADDRESSES", ZIMBRA_PREF_WHEN_SENT_TO_ADDRESSES),
    ("ZIMBRA_PREF_WHEN_SENT_TO_ENABLED", ZIMBRA_PREF_WHEN_SENT_TO_ENABLED),
    ("ZIMBRA_PREF_ZIMLETS", ZIMBRA_PREF_ZIMLETS),
    ("ZIMBRA_PREF_ZIMLET_TREE_OPEN", ZIMBRA_PREF_ZIMLET_TREE_OPEN),
    ("ZIMBRA_PROXY_ALLOWED_DOMAINS", ZIMBRA_PROXY_ALLOWED_DOMAINS),
    ("ZIMBRA_PROXY_CACHEABLE_CONTENT_TYPES", ZIMBRA_PROXY_CACHEABLE_CONTENT_TYPES),
    ("ZIMBRA_PUBLIC_SERVICE_HOSTNAME", ZIMBRA_PUBLIC_SERVICE_HOSTNAME),
    ("ZIMBRA_PUBLIC_SERVICE_PORT", ZIMBRA_PUBLIC_SERVICE_PORT),
    ("ZIMBRA_PUBLIC_SERVICE_PROTOCOL", ZIMBRA_PUBLIC_SERVICE_PROTOCOL),
    ("ZIMBRA_QUOTA_LAST_WARN_TIME", ZIMBRA_QUOTA_LAST_WARN_TIME),
    ("ZIMBRA_QUOTA_WARN_INTERVAL", ZIMBRA_QUOTA_WARN_INTERVAL),
    ("ZIMBRA_QUOTA_WARN_MESSAGE", ZIMBRA_QUOTA_WARN_MESSAGE),
    ("ZIMBRA_QUOTA_WARN_PERCENT", ZIMBRA_QUOTA_WARN_PERCENT),
    ("ZIMBRA_REDO_LOG_ARCHIVE_DIR", ZIMBRA_REDO_LOG_ARCHIVE_DIR),
    ("ZIMBRA_REDO_LOG_CRASH_RECOVERY_LOOKBACK_SEC", ZIMBRA_REDO_LOG_CRASH_RECOVERY_LOOKBACK_SEC),
    ("ZIMBRA_REDO_LOG_DELETE_ON_ROLLOVER", ZIMBRA_REDO_LOG_DELETE_ON_ROLLOVER),
    ("ZIMBRA_REDO_LOG_ENABLED", ZIMBRA_REDO_LOG_ENABLED),
    ("ZIMBRA_REDO_LOG_FSYNC_INTERVAL_MS", ZIMBRA_REDO_LOG_FSYNC_INTERVAL_MS),
    ("ZIMBRA_REDO_LOG_LOG_PATH", ZIMBRA_REDO_LOG_LOG_PATH),
    ("ZIMBRA_REDO_LOG_PROVIDER", ZIMBRA_REDO_LOG_PROVIDER),
    ("ZIMBRA_REDO_LOG_ROLLOVER_FILE_SIZE_KB", ZIMBRA_REDO_LOG_ROLLOVER_FILE_SIZE_KB),
    ("ZIMBRA_REDO_LOG_ROLLOVER_HARD_MAX_FILE_SIZE_KB", ZIMBRA_REDO_LOG_ROLLOVER_HARD_MAX_FILE_SIZE_KB),
    ("ZIMBRA_REDO_LOG_ROLLOVER_MIN_FILE_AGE", ZIMBRA_REDO_LOG_ROLLOVER_MIN_FILE_AGE),
    ("ZIMBRA_REMOTE_MANAGEMENT_COMMAND", ZIMBRA_REMOTE_MANAGEMENT_COMMAND),
    ("ZIMBRA_REMOTE_MANAGEMENT_PORT", ZIMBRA_REMOTE_MANAGEMENT_PORT),
    ("ZIMBRA_REMOTE_MANAGEMENT_PRIVATE_KEY_PATH", ZIMBRA_REMOTE_MANAGEMENT_PRIVATE_KEY_PATH),
    ("ZIMBRA_REMOTE_MANAGEMENT_USER", ZIMBRA_REMOTE_MANAGEMENT_USER),
    ("ZIMBRA_RESPONSE_HEADER", ZIMBRA_RESPONSE_HEADER),
    ("ZIMBRA_REVERSE_PROXY_ADMIN_IP_ADDRESS", ZIMBRA_REVERSE_PROXY_ADMIN_IP_ADDRESS),
    ("ZIMBRA_REVERSE_PROXY_ADMIN_PORT_ATTRIBUTE", ZIMBRA_REVERSE_PROXY_ADMIN_PORT_ATTRIBUTE),
    ("ZIMBRA_REVERSE_PROXY_AUTH_WAIT_INTERVAL", ZIMBRA_REVERSE_PROXY_AUTH_WAIT_INTERVAL),
    ("ZIMBRA_REVERSE_PROXY_CACHE_ENTRY_TTL", ZIMBRA_REVERSE_PROXY_CACHE_ENTRY_TTL),
    ("ZIMBRA_REVERSE_PROXY_CACHE_FETCH_TIMEOUT", ZIMBRA_REVERSE_PROXY_CACHE_FETCH_TIMEOUT),
    ("ZIMBRA_REVERSE_PROXY_CACHE_RECONNECT_INTERVAL", ZIMBRA_REVERSE_PROXY_CACHE_RECONNECT_INTERVAL),
    ("ZIMBRA_REVERSE_PROXY_CONNECT_TIMEOUT", ZIMBRA_REVERSE_PROXY_CONNECT_TIMEOUT),
    ("ZIMBRA_REVERSE_PROXY_DEFAULT_REALM", ZIMBRA_REVERSE_PROXY_DEFAULT_REALM),
    ("ZIMBRA_REVERSE_PROXY_DOMAIN_NAME_ATTRIBUTE", ZIMBRA_REVERSE_PROXY_DOMAIN_NAME_ATTRIBUTE),
    ("ZIMBRA_REVERSE_PROXY_DOMAIN_NAME_QUERY", ZIMBRA_REVERSE_PROXY_DOMAIN_NAME_QUERY),
    ("ZIMBRA_REVERSE_PROXY_DOMAIN_NAME_SEARCH_BASE", ZIMBRA_REVERSE_PROXY_DOMAIN_NAME_SEARCH_BASE),
    ("ZIMBRA_REVERSE_PROXY_HTTP_ENABLED", ZIMBRA_REVERSE_PROXY_HTTP_ENABLED),
    ("ZIMBRA_REVERSE_PROXY_HTTP_PORT_ATTRIBUTE", ZIMBRA_REVERSE_PROXY_HTTP_PORT_ATTRIBUTE),
    ("ZIMBRA_REVERSE_PROXY_IMAP_ENABLED_CAPABILITY", ZIMBRA_REVERSE_PROXY_IMAP_ENABLED_CAPABILITY),
    ("ZIMBRA_REVERSE_PROXY_IMAP_EXPOSE_VERSION_ON_BANNER", ZIMBRA_REVERSE_PROXY_IMAP_EXPOSE_VERSION_ON_BANNER),
    ("ZIMBRA_REVERSE_PROXY_IMAP_PORT_ATTRIBUTE", ZIMBRA_REVERSE_PROXY_IMAP_PORT_ATTRIBUTE),
    ("ZIMBRA_REVERSE_PROXY_IMAP_SASL_GSSAPI_ENABLED", ZIMBRA_REVERSE_PROXY_IMAP_SASL_GSSAPI_ENABLED),
    ("ZIMBRA_REVERSE_PROXY_IMAP_SASL_PLAIN_ENABLED", ZIMBRA_REVERSE_PROXY_IMAP_SASL_PLAIN_ENABLED),
    ("ZIMBRA_REVERSE_PROXY_IMAP_SSL_PORT_ATTRIBUTE", ZIMBRA_REVERSE_PROXY_IMAP_SSL_PORT_ATTRIBUTE),
    ("ZIMBRA_REVERSE_PROXY_IMAP_START_TLS_MODE", ZIMBRA_REVERSE_PROXY_IMAP_START_TLS_MODE),
    ("ZIMBRA_REVERSE_PROXY_INACTIVITY_TIMEOUT", ZIMBRA_REVERSE_PROXY_INACTIVITY_TIMEOUT),
    ("ZIMBRA_REVERSE_PROXY_IP_LOGIN_LIMIT", ZIMBRA_REVERSE_PROXY_IP_LOGIN_LIMIT),
    ("ZIMBRA_REVERSE_PROXY_IP_LOGIN_LIMIT_TIME", ZIMBRA_REVERSE_PROXY_IP_LOGIN_LIMIT_TIME),
    ("ZIMBRA_REVERSE_PROXY_IP_THROTTLE_MSG", ZIMBRA_REVERSE_PROXY_IP_THROTTLE_MSG),
    ("ZIMBRA_REVERSE_PROXY_LOG_LEVEL", ZIMBRA_REVERSE_PROXY_LOG_LEVEL),
    ("ZIMBRA_REVERSE_PROXY_LOOKUP_TARGET", ZIMBRA_REVERSE_PROXY_LOOKUP_TARGET),
    ("ZIMBRA_REVERSE_PROXY_MAIL_ENABLED", ZIMBRA_REVERSE_PROXY_MAIL_ENABLED),
    ("ZIMBRA_REVERSE_PROXY_MAIL_HOST_ATTRIBUTE", ZIMBRA_REVERSE_PROXY_MAIL_HOST_ATTRIBUTE),
    ("ZIMBRA_REVERSE_PROXY_MAIL_HOST_QUERY", ZIMBRA_REVERSE_PROXY_MAIL_HOST_QUERY),
    ("ZIMBRA_REVERSE_PROXY_MAIL_HOST_SEARCH_BASE", ZIMBRA_REVERSE_PROXY_MAIL_HOST_SEARCH_BASE),
    ("ZIMBRA_REVERSE_PROXY_MAIL_MODE", ZIMBRA_REVERSE_PROXY_MAIL_MODE),
    ("ZIMBRA_REVERSE_PROXY_PASS_ERRORS", ZIMBRA_REVERSE_PROXY_PASS_ERRORS),
    ("ZIMBRA_REVERSE_PROXY_POP3_ENABLED_CAPABILITY", ZIMBRA_REVERSE_PROXY_POP3_ENABLED_CAPABILITY),
    ("ZIMBRA_REVERSE_PROXY_POP3_EXPOSE_VERSION_ON_BANNER", ZIMBRA_REVERSE_PROXY_POP3_EXPOSE_VERSION_ON_BANNER),
    ("ZIMBRA_REVERSE_PROXY_POP3_PORT_ATTRIBUTE", ZIMBRA_REVERSE_PROXY_POP3_PORT_ATTRIBUTE),
    ("ZIMBRA_REVERSE_PROXY_POP3_SASL_GSSAPI_ENABLED", ZIMBRA_REVERSE_PROXY_POP3_SASL_GSSAPI_ENABLED),
    ("ZIMBRA_REVERSE_PROXY_POP3_SASL_PLAIN_ENABLED", ZIMBRA_REVERSE_PROXY_POP3_SASL_PLAIN_ENABLED),
    ("ZIMBRA_REVERSE_PROXY_POP3_SSL_PORT_ATTRIBUTE", ZIMBRA_REVERSE_PROXY_POP3_SSL_PORT_ATTRIBUTE),
    ("ZIMBRA_REVERSE_PROXY_POP3_START_TLS_MODE", ZIMBRA_REVERSE_PROXY_POP3_START_TLS_MODE),
    ("ZIMBRA_REVERSE_PROXY_PORT_QUERY", ZIMBRA_REVERSE_PROXY_PORT_QUERY),
    ("ZIMBRA_REVERSE_PROXY_PORT_SEARCH_BASE", ZIMBRA_REVERSE_PROXY_PORT_SEARCH_BASE),
    ("ZIMBRA_REVERSE_PROXY_ROUTE_LOOKUP_TIMEOUT", ZIMBRA_REVERSE_PROXY_ROUTE_LOOKUP_TIMEOUT),
    ("ZIMBRA_REVERSE_PROXY_ROUTE_LOOKUP_TIMEOUT_CACHE", ZIMBRA_REVERSE_PROXY_ROUTE_LOOKUP_TIMEOUT_CACHE),
    ("ZIMBRA_REVERSE_PROXY_SEND_IMAP_ID", ZIMBRA_REVERSE_PROXY_SEND_IMAP_ID),
    ("ZIMBRA_REVERSE_PROXY_SEND_POP3_XOIP", ZIMBRA_REVERSE_PROXY_SEND_POP3_XOIP),
    ("ZIMBRA_REVERSE_PROXY_SSL_CIPHERS", ZIMBRA_REVERSE_PROXY_SSL_CIPHERS),
    ("ZIMBRA_REVERSE_PROXY_USE_EXTERNAL_ROUTE", ZIMBRA_REVERSE_PROXY_USE_EXTERNAL_ROUTE),
    ("ZIMBRA_REVERSE_PROXY_USER_LOGIN_LIMIT", ZIMBRA_REVERSE_PROXY_USER_LOGIN_LIMIT),
    ("ZIMBRA_REVERSE_PROXY_USER_LOGIN_LIMIT_TIME", ZIMBRA_REVERSE_PROXY_USER_LOGIN_LIMIT_TIME),
    ("ZIMBRA_REVERSE_PROXY_USER_NAME_ATTRIBUTE", ZIMBRA_REVERSE_PROXY_USER_NAME_ATTRIBUTE),
    ("ZIMBRA_REVERSE_PROXY_USER_THROTTLE_MSG", ZIMBRA_REVERSE_PROXY_USER_THROTTLE_MSG),
    ("ZIMBRA_REVERSE_PROXY_WORKER_CONNECTIONS", ZIMBRA_REVERSE_PROXY_WORKER_CONNECTIONS),
    ("ZIMBRA_REVERSE_PROXY_WORKER_PROCESSES", ZIMBRA_REVERSE_PROXY_WORKER_PROCESSES),
    ("ZIMBRA_SASL_GSSAPI_REQUIRES_TLS", ZIMBRA_SASL_GSSAPI_REQUIRES_TLS),
    ("ZIMBRA_SCHEDULED_TASK_NUM_THREADS", ZIMBRA_SCHEDULED_TASK_NUM_THREADS),
    ("ZIMBRA_SERVER_EXTRA_OBJECT_CLASS", ZIMBRA_SERVER_EXTRA_OBJECT_CLASS),
    ("ZIMBRA_SERVER_ID", ZIMBRA_SERVER_ID),
    ("ZIMBRA_SERVER_INHERITED_ATTR", ZIMBRA_SERVER_INHERITED_ATTR),
    ("ZIMBRA_SERVICE_ENABLED", ZIMBRA_SERVICE_ENABLED),
    ("ZIMBRA_SERVICE_HOSTNAME", ZIMBRA_SERVICE_HOSTNAME),
    ("ZIMBRA_SERVICE_INSTALLED", ZIMBRA_SERVICE_INSTALLED),
    ("ZIMBRA_SHARE_INFO", ZIMBRA_SHARE_INFO),
    ("ZIMBRA_SIGNATURE_ID", ZIMBRA_SIGNATURE_ID),
    ("ZIMBRA_SIGNATURE_MAX_NUM_ENTRIES", ZIMBRA_SIGNATURE_MAX_NUM_ENTRIES),
    ("ZIMBRA_SIGNATURE_MIN_NUM_ENTRIES", ZIMBRA_SIGNATURE_MIN_NUM_ENTRIES),
    ("ZIMBRA_SIGNATURE_NAME", ZIMBRA_SIGNATURE_NAME),
    ("ZIMBRA_SKIN_BACKGROUND_COLOR", ZIMBRA_SKIN_BACKGROUND_COLOR),
    ("ZIMBRA_SKIN_FAVICON", ZIMBRA_SKIN_FAVICON),
    ("ZIMBRA_SKIN_FOREGROUND_COLOR", ZIMBRA_SKIN_FOREGROUND_COLOR),
    ("ZIMBRA_SKIN_LOGO_APP_BANNER", ZIMBRA_SKIN_LOGO_APP_BANNER),
    ("ZIMBRA_SKIN_LOGO_LOGIN_BANNER", ZIMBRA_SKIN_LOGO_LOGIN_BANNER),
    ("ZIMBRA_SKIN_LOGO_URL", ZIMBRA_SKIN_LOGO_URL),
    ("ZIMBRA_SKIN_SECONDARY_COLOR", ZIMBRA_SKIN_SECONDARY_COLOR),
    ("ZIMBRA_SKIN_SELECTION_COLOR", ZIMBRA_SKIN_SELECTION_COLOR),
    ("ZIMBRA_SMTP_ENABLE_TRACE", ZIMBRA_SMTP_ENABLE_TRACE),
    ("ZIMBRA_SMTP_HOSTNAME", ZIMBRA_SMTP_HOSTNAME),
    ("ZIMBRA_SMTP_PORT", ZIMBRA_SMTP_PORT),
    ("ZIMBRA_SMTP_RESTRICT_ENVELOPE_FROM", ZIMBRA_SMTP_RESTRICT_ENVELOPE_FROM),
    ("ZIMBRA_SMTP_SEND_ADD_AUTHENTICATED_USER", ZIMBRA_SMTP_SEND_ADD_AUTHENTICATED_USER),
    ("ZIMBRA_SMTP_SEND_ADD_MAILER", ZIMBRA_SMTP_SEND_ADD_MAILER),
    ("ZIMBRA_SMTP_SEND_ADD_ORIGINATING_IP", ZIMBRA_SMTP_SEND_ADD_ORIGINATING_IP),
    ("ZIMBRA_SMTP_SEND_PARTIAL", ZIMBRA_SMTP_SEND_PARTIAL),
    ("ZIMBRA_SMTP_TIMEOUT", ZIMBRA_SMTP_TIMEOUT),
    ("ZIMBRA_SOAP_EXPOSE_VERSION", ZIMBRA_SOAP_EXPOSE_VERSION),
    ("ZIMBRA_SOAP_REQUEST_MAX_SIZE", ZIMBRA_SOAP_REQUEST_MAX_SIZE),
    ("ZIMBRA_SPAM_APPLY_USER_FILTERS", ZIMBRA_SPAM_APPLY_USER_FILTERS),
    ("ZIMBRA_SPAM_CHECK_ENABLED", ZIMBRA_SPAM_CHECK_ENABLED),
    ("ZIMBRA_SPAM_HEADER", ZIMBRA_SPAM_HEADER),
    ("ZIMBRA_SPAM_HEADER_VALUE", ZIMBRA_SPAM_HEADER_VALUE),
    ("ZIMBRA_SPAM_IS_NOT_SPAM_ACCOUNT", ZIMBRA_SPAM_IS_NOT_SPAM_ACCOUNT),
    ("ZIMBRA_SPAM_IS_SPAM_ACCOUNT", ZIMBRA_SPAM_IS_SPAM_ACCOUNT),
    ("ZIMBRA_SPAM_KILL_PERCENT", ZIMBRA_SPAM_KILL_PERCENT),
    ("ZIMBRA_SPAM_REPORT_ENVELOPE_FROM", ZIMBRA_SPAM_REPORT_ENVELOPE_FROM),
    ("ZIMBRA_SPAM_REPORT_SENDER_HEADER", ZIMBRA_SPAM_REPORT_SENDER_HEADER),
    ("ZIMBRA_SPAM_REPORT_TYPE_HAM", ZIMBRA_SPAM_REPORT_TYPE_HAM),
    ("ZIMBRA_SPAM_REPORT_TYPE_HEADER", ZIMBRA_SPAM_REPORT_TYPE_HEADER),
    ("ZIMBRA_SPAM_REPORT_TYPE_SPAM", ZIMBRA_SPAM_REPORT_TYPE_SPAM),
    ("ZIMBRA_SPAM_SUBJECT_TAG", ZIMBRA_SPAM_SUBJECT_TAG),
    ("ZIMBRA_SPAM_TAG_PERCENT", ZIMBRA_SPAM_TAG_PERCENT),
    ("ZIMBRA_SPELL_AVAILABLE_DICTIONARY", ZIMBRA_SPELL_AVAILABLE_DICTIONARY),
    ("ZIMBRA_SPELL_CHECK_URL", ZIMBRA_SPELL_CHECK_URL),
    ("ZIMBRA_SSH_PUBLIC_KEY", ZIMBRA_SSH_PUBLIC_KEY),
    ("ZIMBRA_SSL_CA_CERT", ZIMBRA_SSL_CA_CERT),
    ("ZIMBRA_SSL_CA_KEY", ZIMBRA_SSL_CA_KEY),
    ("ZIMBRA_SSL_CERTIFICATE", ZIMBRA_SSL_CERTIFICATE),
    ("ZIMBRA_SSL_EXCLUDE_CIPHER_SUITES", ZIMBRA_SSL_EXCLUDE_CIPHER_SUITES),
    ("ZIMBRA_SSL_PRIVATE_KEY", ZIMBRA_SSL_PRIVATE_KEY),
    ("ZIMBRA_STAT_THREAD_NAME_PREFIX", ZIMBRA_STAT_THREAD_NAME_PREFIX),
    ("ZIMBRA_SYNC_WINDOW_SIZE", ZIMBRA_SYNC_WINDOW_SIZE),
    ("ZIMBRA_TABLE_MAINTENANCE_GROWTH_FACTOR", ZIMBRA_TABLE_MAINTENANCE_GROWTH_FACTOR),
    ("ZIMBRA_TABLE_MAINTENANCE_MAX_ROWS", ZIMBRA_TABLE_MAINTENANCE_MAX_ROWS),
    ("ZIMBRA_TABLE_MAINTENANCE_MIN_ROWS", ZIMBRA_TABLE_MAINTENANCE_MIN_ROWS),
    ("ZIMBRA_TABLE_MAINTENANCE_OPERATION", ZIMBRA_TABLE_MAINTENANCE_OPERATION),
    ("ZIMBRA_TEXT_ANALYZER", ZIMBRA_TEXT_ANALYZER),
    ("ZIMBRA_TIME_ZONE_DAYLIGHT_DT_START", ZIMBRA_TIME_ZONE_DAYLIGHT_DT_START),
    ("ZIMBRA_TIME_ZONE_DAYLIGHT_OFFSET", ZIMBRA_TIME_ZONE_DAYLIGHT_OFFSET),
    ("ZIMBRA_TIME_ZONE_DAYLIGHT_R_RULE", ZIMBRA_TIME_ZONE_DAYLIGHT_R_RULE),
    ("ZIMBRA_TIME_ZONE_STANDARD_DT_START", ZIMBRA_TIME_ZONE_STANDARD_DT_START),
    ("ZIMBRA_TIME_ZONE_STANDARD_OFFSET", ZIMBRA_TIME_ZONE_STANDARD_OFFSET),
    ("ZIMBRA_TIME_ZONE_STANDARD_R_RULE", ZIMBRA_TIME_ZONE_STANDARD_R_RULE),
    ("ZIMBRA_USER_SERVICES_ENABLED", ZIMBRA_USER_SERVICES_ENABLED),
    ("ZIMBRA_VERSION", ZIMBRA_VERSION),
    ("ZIMBRA_VERSION_CHECK_INTERVAL", ZIMBRA_VERSION_CHECK_INTERVAL),
    ("ZIMBRA_VERSION_CHECK_LAST_ATTEMPT", ZIMBRA_VERSION_CHECK_LAST_ATTEMPT),
    ("ZIMBRA_VERSION_CHECK_LAST_RESPONSE", ZIMBRA_VERSION_CHECK_LAST_RESPONSE),
    ("ZIMBRA_VERSION_CHECK_LAST_SUCCESS", ZIMBRA_VERSION_CHECK_LAST_SUCCESS),
    ("ZIMBRA_VERSION_CHECK_NOTIFICATION_BODY", ZIMBRA_VERSION_CHECK_NOTIFICATION_BODY),
    ("ZIMBRA_VERSION_CHECK_NOTIFICATION_EMAIL", ZIMBRA_VERSION_CHECK_NOTIFICATION_EMAIL),
    ("ZIMBRA_VERSION_CHECK_NOTIFICATION_EMAIL_FROM", ZIMBRA_VERSION_CHECK_NOTIFICATION_EMAIL_FROM),
    ("ZIMBRA_VERSION_CHECK_NOTIFICATION_SUBJECT", ZIMBRA_VERSION_CHECK_NOTIFICATION_SUBJECT),
    ("ZIMBRA_VERSION_CHECK_SEND_NOTIFICATIONS", ZIMBRA_VERSION_CHECK_SEND_NOTIFICATIONS),
    ("ZIMBRA_VERSION_CHECK_SERVER", ZIMBRA_VERSION_CHECK_SERVER),
    ("ZIMBRA_VERSION_CHECK_URL", ZIMBRA_VERSION_CHECK_URL),
    ("ZIMBRA_VIRTUAL_HOSTNAME", ZIMBRA_VIRTUAL_HOSTNAME),
    ("ZIMBRA_VIRTUAL_IP_ADDRESS", ZIMBRA_VIRTUAL_IP_ADDRESS),
    ("ZIMBRA_VIRUS_BLOCK_ENCRYPTED_ARCHIVE", ZIMBRA_VIRUS_BLOCK_ENCRYPTED_ARCHIVE),
    ("ZIMBRA_VIRUS_CHECK_ENABLED", ZIMBRA_VIRUS_CHECK_ENABLED),
    ("ZIMBRA_VIRUS_DEFINITIONS_UPDATE_FREQUENCY", ZIMBRA_VIRUS_DEFINITIONS_UPDATE_FREQUENCY),
    ("ZIMBRA_VIRUS_WARN_ADMIN", ZIMBRA_VIRUS_WARN_ADMIN),
    ("ZIMBRA_VIRUS_WARN_RECIPIENT", ZIMBRA_VIRUS_WARN_RECIPIENT),
    ("ZIMBRA_WEB_CLIENT_ADMIN_REFERENCE", ZIMBRA_WEB_CLIENT_ADMIN_REFERENCE),
    ("ZIMBRA_WEB_CLIENT_LOGIN_URL", ZIMBRA_WEB_CLIENT_LOGIN_URL),
    ("ZIMBRA_WEB_CLIENT_LOGOUT_URL", ZIMBRA_WEB_CLIENT_LOGOUT_URL),
    ("ZIMBRA_WEB_CLIENT_SHOW_OFFLINE_LINK", ZIMBRA_WEB_CLIENT_SHOW_OFFLINE_LINK),
    ("ZIMBRA_XMPP_COMPONENT_CATEGORY", ZIMBRA_XMPP_COMPONENT_CATEGORY),
    ("ZIMBRA_XMPP_COMPONENT_CLASS_NAME", ZIMBRA_XMPP_COMPONENT_CLASS_NAME),
    ("ZIMBRA_XMPP_COMPONENT_FEATURES", ZIMBRA_XMPP_COMPONENT_FEATURES),
    ("ZIMBRA_XMPP_COMPONENT_NAME", ZIMBRA_XMPP_COMPONENT_NAME),
    ("ZIMBRA_XMPP_COMPONENT_TYPE", ZIMBRA_XMPP_COMPONENT_TYPE),
    ("ZIMBRA_XMPP_ENABLED", ZIMBRA_XMPP_ENABLED),
    ("ZIMBRA_XMPP_SERVER_DIALBACK_KEY", ZIMBRA_XMPP_SERVER_DIALBACK_KEY),
    ("ZIMBRA_YAHOO_ID", ZIMBRA_YAHOO_ID),
    ("ZIMBRA_ZIMLET_AVAILABLE_ZIMLETS", ZIMBRA_ZIMLET_AVAILABLE_ZIMLETS),
    ("ZIMBRA_ZIMLET_CONTENT_OBJECT", ZIMBRA_ZIMLET_CONTENT_OBJECT),
    ("ZIMBRA_ZIMLET_DESCRIPTION", ZIMBRA_ZIMLET_DESCRIPTION),
    ("ZIMBRA_ZIMLET_DOMAIN_AVAILABLE_ZIMLETS", ZIMBRA_ZIMLET_DOMAIN_AVAILABLE_ZIMLETS),
    ("ZIMBRA_ZIMLET_ENABLED", ZIMBRA_ZIMLET_ENABLED),
    ("ZIMBRA_ZIMLET_HANDLER_CLASS", ZIMBRA_ZIMLET_HANDLER_CLASS),
    ("ZIMBRA_ZIMLET_HANDLER_CONFIG", ZIMBRA_ZIMLET_HANDLER_CONFIG),
    ("ZIMBRA_ZIMLET_INDEXING_ENABLED", ZIMBRA_ZIMLET_INDEXING_ENABLED),
    ("ZIMBRA_ZIMLET_IS_EXTENSION", ZIMBRA_ZIMLET_IS_EXTENSION),
    ("ZIMBRA_ZIMLET_KEYWORD", ZIMBRA_ZIMLET_KEYWORD),
    ("ZIMBRA_ZIMLET_PANEL_ITEM", ZIMBRA_ZIMLET_PANEL_ITEM),
    ("ZIMBRA_ZIMLET_PRIORITY", ZIMBRA_ZIMLET_PRIORITY),
    ("ZIMBRA_ZIMLET_SCRIPT", ZIMBRA_ZIMLET_SCRIPT),
    ("ZIMBRA_ZIMLET_SERVER_INDEX_REGEX", ZIMBRA_ZIMLET_SERVER_INDEX_REGEX),
    ("ZIMBRA_ZIMLET_STORE_MATCHED", ZIMBRA_ZIMLET_STORE_MATCHED),
    ("ZIMBRA_ZIMLET_TARGET", ZIMBRA_ZIMLET_TARGET),
    ("ZIMBRA_ZIMLET_USER_PROPERTIES", ZIMBRA_ZIMLET_USER_PROPERTIES),
    ("ZIMBRA_ZIMLET_VERSION", ZIMBRA_ZIMLET_VERSION),
];
