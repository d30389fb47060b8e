//! # creg - Provider Implementations
//!
//! Implementations of the ports defined in `creg-domain`. Each provider
//! registers itself into the link-time registration slices declared in
//! `creg-application`, so linking this crate is enough to make it
//! discoverable.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | I18N DAO | `I18nDao` | `InMemoryI18nDao` (registered as `memory-feature`) |
//! | I18N DAO factory | `I18nDaoFactory` | `InMemoryI18nDaoFactory` (registered as `memory`) |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! creg-providers = { version = "0.1", default-features = false, features = ["i18n-memory"] }
//! ```

pub use creg_domain::error::{Error, Result};
pub use creg_domain::ports::{I18nDao, I18nDaoFactory};

/// Provider-specific constants
pub mod constants;

/// I18N DAO provider implementations
pub mod i18n;

