//! I18N Data Access Port
//!
//! Data access objects for localized metadata. Each DAO serves one or more
//! [`I18nDaoKey`]s and is located through the component registry, either
//! directly or through an [`I18nDaoFactory`].

use crate::error::Result;
use crate::ports::component::{Component, ComponentFactory};
use crate::value_objects::{I18nDaoKey, I18nMetadata};

/// Read and write access to localized metadata of one or more kinds
pub trait I18nDao: Component<I18nDaoKey> {
    /// Metadata for `identifier`, if stored
    fn get_metadata(&self, identifier: &str) -> Result<Option<I18nMetadata>>;

    /// All stored metadata
    fn get_all_metadata(&self) -> Result<Vec<I18nMetadata>>;

    /// Store or replace metadata
    fn save_metadata(&self, metadata: I18nMetadata) -> Result<()>;

    /// Whether this DAO is usable in the current deployment
    fn is_supported(&self) -> bool {
        true
    }
}

/// Factory creating I18N DAOs per key
pub trait I18nDaoFactory: ComponentFactory<I18nDaoKey, dyn I18nDao> {}

impl<T> I18nDaoFactory for T where T: ComponentFactory<I18nDaoKey, dyn I18nDao> {}
