//! Domain Port Interfaces
//!
//! - **component** - capabilities of discoverable components and factories
//! - **i18n** - localized metadata data access

/// Component and factory capabilities
pub mod component;
/// I18N data access port
pub mod i18n;

pub use component::{Component, ComponentFactory, ComponentKey};
pub use i18n::{I18nDao, I18nDaoFactory};
