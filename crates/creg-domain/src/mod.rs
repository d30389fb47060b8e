//! # Domain Layer
//!
//! Core types of the component registry. Everything here is independent of
//! how components are discovered (DI container, link-time registration
//! tables) and of how the merged registry is exposed.
//!
//! ## Contents
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Domain error type and `Result` alias |
//! | [`ports`] | Component and factory capabilities, the I18N DAO port |
//! | [`producer`] | Deferred component handles |
//! | [`value_objects`] | I18N keys and metadata |
//! | [`constants`] | Well-known setting names |

pub mod constants;
pub mod error;
pub mod ports;
pub mod producer;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{Component, ComponentFactory, ComponentKey, I18nDao, I18nDaoFactory};
pub use producer::Producer;
