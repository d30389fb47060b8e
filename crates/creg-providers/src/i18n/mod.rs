//! I18N DAO Provider Implementations
//!
//! ## Available Providers
//!
//! | Provider | Registration | Description |
//! |----------|--------------|-------------|
//! | [`InMemoryI18nDao`] | `memory-feature` | DAO for feature metadata |
//! | [`InMemoryI18nDaoFactory`] | `memory` | DAOs for the kinds in `i18n.memory.kinds` |
//!
//! Every in-memory DAO reads and writes an [`I18nStore`]. When the container
//! holds an `Arc<I18nStore>` all of them share it.

#[cfg(feature = "i18n-memory")]
pub mod memory;
pub mod store;

#[cfg(feature = "i18n-memory")]
pub use memory::{InMemoryI18nDao, InMemoryI18nDaoFactory};
pub use store::I18nStore;
