//! Concrete component registries
//!
//! Domain-specific repositories that turn the merged key to producer map
//! into the lookup structure their callers query.

pub mod i18n_dao;

pub use i18n_dao::{I18nDaoIndex, I18nDaoProducer, I18nDaoRepository};
