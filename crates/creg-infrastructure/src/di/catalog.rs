//! dill Catalog - IoC Container Configuration
//!
//! ## Type Bindings
//!
//! | Value | Consumers |
//! |-------|-----------|
//! | `Arc<SettingsManager>` | discovery strategy of every repository |
//! | `Arc<I18nStore>` | in-memory I18N DAOs (autowired) |
//! | `Arc<ContainerManaged<dyn I18nDao>>` | container strategy, when supplied |
//! | `Arc<ContainerManaged<dyn I18nDaoFactory>>` | container strategy, when supplied |

use creg_application::component::{ContainerManaged, SettingsManager};
use creg_domain::ports::{I18nDao, I18nDaoFactory};
use creg_providers::i18n::I18nStore;
use dill::{Catalog, CatalogBuilder};
use std::sync::Arc;
use tracing::info;

/// Implementations handed to the container ready-made
#[derive(Default)]
pub struct ManagedComponents {
    /// Pre-built I18N DAOs
    pub i18n_daos: ContainerManaged<dyn I18nDao>,
    /// Pre-built I18N DAO factories
    pub i18n_dao_factories: ContainerManaged<dyn I18nDaoFactory>,
}

/// Build the dill Catalog with the application singletons
pub fn build_catalog(
    settings: Arc<SettingsManager>,
    store: Arc<I18nStore>,
    managed: ManagedComponents,
) -> Catalog {
    info!(
        managed_daos = managed.i18n_daos.instances().len(),
        managed_factories = managed.i18n_dao_factories.instances().len(),
        "Building dill Catalog"
    );

    let mut builder = CatalogBuilder::new();
    builder
        // Configuration
        .add_value(settings)
        // Shared collaborators
        .add_value(store)
        // Container-managed implementations
        .add_value(Arc::new(managed.i18n_daos))
        .add_value(Arc::new(managed.i18n_dao_factories));
    builder.build()
}
