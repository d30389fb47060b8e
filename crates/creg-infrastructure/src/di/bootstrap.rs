//! Composition Root
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(ConfigLoader::new().load()?)?;
//!
//! let dao = context.i18n_daos().get_dao(MetadataKind::Feature)?;
//!
//! // After a configuration change
//! context.apply_config(ConfigLoader::new().load()?)?;
//! ```

use crate::config::{AppConfig, ConfigLoader};
use crate::di::catalog::{ManagedComponents, build_catalog};
use arc_swap::ArcSwap;
use creg_application::component::SettingsManager;
use creg_application::repositories::I18nDaoRepository;
use creg_domain::constants::I18N_MEMORY_RECORDS_SETTING;
use creg_domain::error::{Error, Result};
use creg_domain::value_objects::{I18nMetadata, MetadataKind};
use creg_providers::i18n::I18nStore;
use dill::Catalog;
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, warn};

/// Application context: configuration, container and repositories
///
/// Repositories are reached through the context; there is no process-wide
/// instance.
pub struct AppContext {
    config: ArcSwap<AppConfig>,
    catalog: Arc<Catalog>,
    settings: Arc<SettingsManager>,
    store: Arc<I18nStore>,
    i18n_daos: Arc<I18nDaoRepository>,
    /// Keys written from `i18n.memory.records`; also serializes reloads
    seeded: Mutex<SeededKeys>,
}

type SeededKeys = HashSet<(MetadataKind, String)>;

impl AppContext {
    /// Current configuration
    pub fn config(&self) -> Arc<AppConfig> {
        self.config.load_full()
    }

    /// The DI container
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Settings read by discovered components
    pub fn settings(&self) -> &Arc<SettingsManager> {
        &self.settings
    }

    /// Store shared by the in-memory I18N DAOs
    pub fn store(&self) -> &Arc<I18nStore> {
        &self.store
    }

    /// I18N DAO registry
    pub fn i18n_daos(&self) -> &Arc<I18nDaoRepository> {
        &self.i18n_daos
    }

    /// Rediscover every repository with the current settings
    pub fn update(&self) -> Result<()> {
        let _guard = self.lock()?;
        self.i18n_daos.update()
    }

    /// Switch to `config` and rediscover
    ///
    /// Component settings are swapped before the update. When the update
    /// fails the previous settings are restored and the registries keep
    /// their previous content. Configured seed records are written to the
    /// shared store only once the update succeeded; records seeded by an
    /// earlier configuration and no longer listed are removed.
    ///
    /// Registry settings are fixed at startup: a requested change is logged
    /// and the current ones stay in the stored configuration.
    pub fn apply_config(&self, mut config: AppConfig) -> Result<()> {
        let mut seeded = self.lock()?;

        let current = self.config.load().registry;
        if current != config.registry {
            warn!(
                current = ?current.duplicate_policy,
                requested = ?config.registry.duplicate_policy,
                "Registry settings change requires a restart; keeping the current ones"
            );
            config.registry = current;
        }

        let previous = self
            .settings
            .replace(ConfigLoader::settings_figment(&config));
        let outcome = seed_records(&self.settings).and_then(|records| {
            self.i18n_daos.update()?;
            Ok(records)
        });
        let records = match outcome {
            Ok(records) => records,
            Err(e) => {
                self.settings.replace((*previous).clone());
                warn!(error = %e, "Configuration change rejected, previous registry kept");
                return Err(e);
            }
        };

        let now_seeded = seed_store(&self.store, records, &seeded);
        *seeded = now_seeded;
        self.config.store(Arc::new(config));
        info!(
            kinds = ?self.i18n_daos.supported_kinds(),
            "Configuration applied"
        );
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, SeededKeys>> {
        self.seeded
            .lock()
            .map_err(|_| Error::internal("application context reload lock poisoned"))
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("i18n_daos", &self.i18n_daos)
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

/// Records configured under `i18n.memory.records`
fn seed_records(settings: &SettingsManager) -> Result<Vec<I18nMetadata>> {
    Ok(settings
        .setting(I18N_MEMORY_RECORDS_SETTING)?
        .unwrap_or_default())
}

/// Write `records` and drop the `previous` seeds no longer configured
///
/// Returns the keys now seeded. Records saved through a DAO are left alone
/// unless they share a key with a dropped seed.
fn seed_store(store: &I18nStore, records: Vec<I18nMetadata>, previous: &SeededKeys) -> SeededKeys {
    let current: SeededKeys = records
        .iter()
        .map(|record| (record.kind, record.identifier.clone()))
        .collect();
    for (kind, identifier) in previous.difference(&current) {
        store.remove(*kind, identifier);
    }
    if !records.is_empty() {
        debug!(records = records.len(), "Seeding the I18N store");
    }
    for record in records {
        store.put(record);
    }
    current
}

/// Initialize the application context
///
/// Builds the settings manager from `config`, the container and every
/// repository, and loads them once.
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    init_app_with(config, ManagedComponents::default())
}

/// Initialize the application context with ready-made implementations
/// registered in the container
pub fn init_app_with(config: AppConfig, managed: ManagedComponents) -> Result<AppContext> {
    info!("Initializing application context");

    let settings = Arc::new(SettingsManager::new(ConfigLoader::settings_figment(&config)));
    let store = Arc::new(I18nStore::new());
    let seeded = seed_store(&store, seed_records(&settings)?, &SeededKeys::new());
    let catalog = Arc::new(build_catalog(
        Arc::clone(&settings),
        Arc::clone(&store),
        managed,
    ));

    let i18n_daos = Arc::new(I18nDaoRepository::new(config.registry.duplicate_policy));
    i18n_daos.bind_container(Arc::clone(&catalog))?;
    i18n_daos.init()?;

    info!(
        kinds = ?i18n_daos.supported_kinds(),
        "Application context initialized"
    );

    Ok(AppContext {
        config: ArcSwap::from_pointee(config),
        catalog,
        settings,
        store,
        i18n_daos,
        seeded: Mutex::new(seeded),
    })
}
