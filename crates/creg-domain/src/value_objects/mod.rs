//! Domain Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`MetadataKind`] | Kind of object described by I18N metadata |
//! | [`I18nDaoKey`] | Registry key of an I18N DAO |
//! | [`LocalizedString`] | Text in several locales |
//! | [`I18nMetadata`] | Localized name and description of an object |

/// Internationalization value objects
pub mod i18n;

pub use i18n::{I18nDaoKey, I18nMetadata, LocalizedString, MetadataKind};
