//! I18N DAO Repository
//!
//! Key-unique registry of I18N data access objects. Each load builds a new
//! key to producer table and publishes it with a single atomic swap, so
//! concurrent lookups see either the previous table or the new one, never a
//! mix. A failed load publishes nothing.

use crate::component::producer_map::{DuplicatePolicy, ProducerMap};
use crate::component::registration::Registration;
use crate::component::repository::{ComponentRepository, ImplementationProcessor, RepositoryState};
use crate::component::strategy::LoaderStrategy;
use crate::ports::registry::{I18N_DAO_FACTORIES, I18N_DAOS};
use arc_swap::ArcSwap;
use creg_domain::error::Result;
use creg_domain::ports::{I18nDao, I18nDaoFactory};
use creg_domain::producer::Producer;
use creg_domain::value_objects::{I18nDaoKey, MetadataKind};
use dill::Catalog;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Producer of an I18N DAO
pub type I18nDaoProducer = Producer<I18nDaoKey, dyn I18nDao, dyn I18nDaoFactory>;

/// Published lookup table of the I18N DAO repository
pub struct I18nDaoIndex {
    policy: DuplicatePolicy,
    daos: ArcSwap<HashMap<I18nDaoKey, I18nDaoProducer>>,
}

impl I18nDaoIndex {
    /// Empty index resolving duplicate keys with `policy`
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            daos: ArcSwap::from_pointee(HashMap::new()),
        }
    }

    /// Snapshot of the current table
    pub fn snapshot(&self) -> Arc<HashMap<I18nDaoKey, I18nDaoProducer>> {
        self.daos.load_full()
    }
}

impl ImplementationProcessor<I18nDaoKey, dyn I18nDao, dyn I18nDaoFactory> for I18nDaoIndex {
    fn process_implementations(
        &self,
        implementations: ProducerMap<I18nDaoKey, dyn I18nDao, dyn I18nDaoFactory>,
    ) -> Result<()> {
        let daos = implementations.into_unique(self.policy)?;
        debug!(keys = daos.len(), "Publishing I18N DAO table");
        self.daos.store(Arc::new(daos));
        Ok(())
    }
}

/// Registry of I18N DAOs by metadata kind
pub struct I18nDaoRepository {
    inner: ComponentRepository<I18nDaoKey, dyn I18nDao, dyn I18nDaoFactory, I18nDaoIndex>,
}

impl I18nDaoRepository {
    /// Repository over the link-time I18N registration slices
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self::with_registrations(&I18N_DAOS, &I18N_DAO_FACTORIES, policy)
    }

    /// Repository over explicit registration tables
    pub fn with_registrations(
        components: &'static [Registration<dyn I18nDao>],
        factories: &'static [Registration<dyn I18nDaoFactory>],
        policy: DuplicatePolicy,
    ) -> Self {
        Self {
            inner: ComponentRepository::new(components, factories, I18nDaoIndex::new(policy)),
        }
    }

    /// Supply the container handle
    pub fn bind_container(&self, container: Arc<Catalog>) -> Result<()> {
        self.inner.bind_container(container)
    }

    /// Build the loader strategies and load once
    pub fn init(&self) -> Result<()> {
        self.inner.init()
    }

    /// Initialize from explicit strategies and load once
    pub fn init_with_strategies(
        &self,
        strategies: Vec<LoaderStrategy<dyn I18nDao, dyn I18nDaoFactory>>,
    ) -> Result<()> {
        self.inner.init_with_strategies(strategies)
    }

    /// Rediscover and republish
    pub fn update(&self) -> Result<()> {
        self.inner.update()
    }

    /// Lifecycle state
    pub fn state(&self) -> RepositoryState {
        self.inner.state()
    }

    /// DAO for `kind`, or `None` when no implementation is registered
    ///
    /// Keys match exactly. A factory-backed entry creates its DAO on each
    /// call; creation errors propagate.
    pub fn get_dao(&self, kind: MetadataKind) -> Result<Option<Arc<dyn I18nDao>>> {
        let daos = self.inner.processor().snapshot();
        daos.get(&I18nDaoKey::new(kind))
            .map(I18nDaoProducer::resolve)
            .transpose()
    }

    /// Metadata kinds with a registered DAO, sorted
    pub fn supported_kinds(&self) -> Vec<MetadataKind> {
        let mut kinds: Vec<_> = self
            .inner
            .processor()
            .snapshot()
            .keys()
            .map(I18nDaoKey::kind)
            .collect();
        kinds.sort();
        kinds
    }

    /// Number of registered keys
    pub fn len(&self) -> usize {
        self.inner.processor().snapshot().len()
    }

    /// Whether no key is registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for I18nDaoRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18nDaoRepository")
            .field("state", &self.state())
            .field("kinds", &self.supported_kinds())
            .finish()
    }
}
