//! Domain constants
//!
//! Setting names shared between the components that read them and the
//! configuration that supplies them.

/// Default locale used by I18N DAOs when a lookup names no locale
pub const I18N_DEFAULT_LOCALE_SETTING: &str = "i18n.default_locale";

/// Metadata kinds served by the in-memory I18N DAO factory
pub const I18N_MEMORY_KINDS_SETTING: &str = "i18n.memory.kinds";

/// Metadata records loaded into the shared in-memory I18N store
pub const I18N_MEMORY_RECORDS_SETTING: &str = "i18n.memory.records";
