//! In-memory I18N DAO provider
//!
//! DAOs over an [`I18nStore`]. One DAO serves exactly one metadata kind; the
//! factory hands out a DAO per requested kind, all sharing the factory's
//! store.
//!
//! ## Settings
//!
//! | Setting | Required | Used by |
//! |---------|----------|---------|
//! | `i18n.default_locale` | yes | both registrations |
//! | `i18n.memory.kinds` | no, defaults to every kind | `memory` factory |

use crate::constants::{MEMORY_DAO_FACTORY_NAME, MEMORY_FEATURE_DAO_NAME};
use crate::i18n::store::I18nStore;
use creg_application::component::{ConfigureContext, Registration};
use creg_application::ports::registry::{I18N_DAO_FACTORIES, I18N_DAOS};
use creg_domain::constants::{I18N_DEFAULT_LOCALE_SETTING, I18N_MEMORY_KINDS_SETTING};
use creg_domain::error::{Error, Result};
use creg_domain::ports::{Component, ComponentFactory, I18nDao, I18nDaoFactory};
use creg_domain::value_objects::{I18nDaoKey, I18nMetadata, MetadataKind};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// In-memory DAO for one metadata kind
pub struct InMemoryI18nDao {
    kind: MetadataKind,
    default_locale: String,
    store: Arc<I18nStore>,
}

impl InMemoryI18nDao {
    /// DAO for `kind` over `store`
    pub fn new<S: Into<String>>(kind: MetadataKind, default_locale: S, store: Arc<I18nStore>) -> Self {
        Self {
            kind,
            default_locale: default_locale.into(),
            store,
        }
    }

    /// Served metadata kind
    pub fn kind(&self) -> MetadataKind {
        self.kind
    }

    /// Locale used when a lookup names none, or names a missing one
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Name of `identifier` in `locale`, falling back to the default locale
    pub fn localized_name(&self, identifier: &str, locale: Option<&str>) -> Option<String> {
        let metadata = self.store.get(self.kind, identifier)?;
        let locale = locale.unwrap_or(&self.default_locale);
        metadata
            .name
            .get_or(locale, &self.default_locale)
            .map(str::to_string)
    }
}

impl Component<I18nDaoKey> for InMemoryI18nDao {
    fn keys(&self) -> HashSet<I18nDaoKey> {
        HashSet::from([I18nDaoKey::new(self.kind)])
    }
}

impl I18nDao for InMemoryI18nDao {
    fn get_metadata(&self, identifier: &str) -> Result<Option<I18nMetadata>> {
        Ok(self.store.get(self.kind, identifier))
    }

    fn get_all_metadata(&self) -> Result<Vec<I18nMetadata>> {
        Ok(self.store.all(self.kind))
    }

    fn save_metadata(&self, metadata: I18nMetadata) -> Result<()> {
        if metadata.kind != self.kind {
            return Err(Error::invalid_argument(format!(
                "DAO for {} cannot store {} metadata '{}'",
                self.kind, metadata.kind, metadata.identifier
            )));
        }
        debug!(kind = %self.kind, identifier = %metadata.identifier, "Saving I18N metadata");
        self.store.put(metadata);
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryI18nDao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryI18nDao")
            .field("kind", &self.kind)
            .field("default_locale", &self.default_locale)
            .finish_non_exhaustive()
    }
}

/// Factory of in-memory DAOs sharing one store
pub struct InMemoryI18nDaoFactory {
    kinds: Vec<MetadataKind>,
    default_locale: String,
    store: Arc<I18nStore>,
}

impl InMemoryI18nDaoFactory {
    /// Factory serving `kinds`
    pub fn new<S: Into<String>>(
        kinds: Vec<MetadataKind>,
        default_locale: S,
        store: Arc<I18nStore>,
    ) -> Self {
        Self {
            kinds,
            default_locale: default_locale.into(),
            store,
        }
    }

    /// Store shared by every created DAO
    pub fn store(&self) -> &Arc<I18nStore> {
        &self.store
    }
}

impl ComponentFactory<I18nDaoKey, dyn I18nDao> for InMemoryI18nDaoFactory {
    fn keys(&self) -> HashSet<I18nDaoKey> {
        self.kinds.iter().copied().map(I18nDaoKey::new).collect()
    }

    fn create(&self, key: &I18nDaoKey) -> Result<Arc<dyn I18nDao>> {
        if !self.kinds.contains(&key.kind()) {
            return Err(Error::resolution(format!(
                "In-memory DAO factory does not serve {key}"
            )));
        }
        Ok(Arc::new(InMemoryI18nDao::new(
            key.kind(),
            self.default_locale.clone(),
            Arc::clone(&self.store),
        )))
    }
}

impl std::fmt::Debug for InMemoryI18nDaoFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryI18nDaoFactory")
            .field("kinds", &self.kinds)
            .field("default_locale", &self.default_locale)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

fn shared_store(ctx: &ConfigureContext<'_>) -> Result<Arc<I18nStore>> {
    Ok(ctx.autowire::<Arc<I18nStore>>()?.unwrap_or_else(|| {
        debug!(
            registration = ctx.registration(),
            "No shared I18N store in the container, using a private one"
        );
        Arc::new(I18nStore::new())
    }))
}

fn memory_feature_dao(ctx: &ConfigureContext<'_>) -> Result<Arc<dyn I18nDao>> {
    let default_locale: String = ctx.required(I18N_DEFAULT_LOCALE_SETTING)?;
    let store = shared_store(ctx)?;
    Ok(Arc::new(InMemoryI18nDao::new(
        MetadataKind::Feature,
        default_locale,
        store,
    )))
}

fn memory_dao_factory(ctx: &ConfigureContext<'_>) -> Result<Arc<dyn I18nDaoFactory>> {
    let default_locale: String = ctx.required(I18N_DEFAULT_LOCALE_SETTING)?;
    let kinds: Vec<MetadataKind> = ctx
        .setting(I18N_MEMORY_KINDS_SETTING)?
        .unwrap_or_else(|| MetadataKind::ALL.to_vec());
    let store = shared_store(ctx)?;
    Ok(Arc::new(InMemoryI18nDaoFactory::new(kinds, default_locale, store)))
}

#[linkme::distributed_slice(I18N_DAOS)]
static MEMORY_FEATURE_DAO: Registration<dyn I18nDao> = Registration {
    name: MEMORY_FEATURE_DAO_NAME,
    description: "In-memory DAO for feature metadata",
    construct: memory_feature_dao,
};

#[linkme::distributed_slice(I18N_DAO_FACTORIES)]
static MEMORY_DAO_FACTORY: Registration<dyn I18nDaoFactory> = Registration {
    name: MEMORY_DAO_FACTORY_NAME,
    description: "In-memory DAOs for the kinds in i18n.memory.kinds",
    construct: memory_dao_factory,
};
