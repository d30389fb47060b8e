//! Component Repository
//!
//! Orchestrates discovery, merge and hand-off for one component type:
//!
//! ```text
//! init()  ─→ composite strategy (container + discovery) ─→ load()
//! update() ──────────────────────────────────────────────→ load()
//!
//! load():
//!   find_component_factories() ─→ one factory producer per (factory, key)
//!   find_components()          ─→ one instance producer per (component, key)
//!   ProducerMap ─→ ImplementationProcessor::process_implementations
//! ```
//!
//! Every load is a full rediscovery. Errors from discovery or from the
//! processor propagate to the caller of `init()`/`update()`; the processor is
//! only reached with a complete map, so a failed load never publishes
//! partial state.

use crate::component::producer_map::ProducerMap;
use crate::component::registration::Registration;
use crate::component::strategy::LoaderStrategy;
use creg_domain::error::{Error, Result};
use creg_domain::ports::{Component, ComponentFactory, ComponentKey};
use creg_domain::producer::Producer;
use dill::Catalog;
use std::any::type_name;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info};

/// Consumer of the merged key to producer multimap
///
/// Implementations replace whatever lookup structure they expose with one
/// built from `implementations`, publishing it in a single step.
pub trait ImplementationProcessor<K, C: ?Sized, F: ?Sized>: Send + Sync {
    /// Replace the exposed lookup structure
    fn process_implementations(&self, implementations: ProducerMap<K, C, F>) -> Result<()>;
}

/// Lifecycle state of a repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryState {
    /// Constructed, no strategy yet
    Uninitialized,
    /// Strategy built, no successful load yet
    Initialized,
    /// At least one load succeeded
    Loaded,
}

struct Inner<C: ?Sized + 'static, F: ?Sized + 'static> {
    container: Option<Arc<Catalog>>,
    loader: Option<LoaderStrategy<C, F>>,
    state: RepositoryState,
}

/// Discovery and merge pipeline for components `C` and factories `F` keyed by `K`
pub struct ComponentRepository<K, C: ?Sized + 'static, F: ?Sized + 'static, P> {
    components: &'static [Registration<C>],
    factories: &'static [Registration<F>],
    processor: P,
    inner: Mutex<Inner<C, F>>,
    _key: PhantomData<fn() -> K>,
}

impl<K, C, F, P> ComponentRepository<K, C, F, P>
where
    K: ComponentKey,
    C: ?Sized + Component<K> + 'static,
    F: ?Sized + ComponentFactory<K, C> + 'static,
    P: ImplementationProcessor<K, C, F>,
{
    /// Repository over the given registration tables, feeding `processor`
    pub fn new(
        components: &'static [Registration<C>],
        factories: &'static [Registration<F>],
        processor: P,
    ) -> Self {
        Self {
            components,
            factories,
            processor,
            inner: Mutex::new(Inner {
                container: None,
                loader: None,
                state: RepositoryState::Uninitialized,
            }),
            _key: PhantomData,
        }
    }

    /// Supply the container handle used by `init()`
    pub fn bind_container(&self, container: Arc<Catalog>) -> Result<()> {
        let mut inner = self.lock()?;
        if inner.state != RepositoryState::Uninitialized {
            return Err(Error::lifecycle(format!(
                "Container for {} bound after initialization",
                type_name::<C>()
            )));
        }
        inner.container = Some(container);
        Ok(())
    }

    /// Build the composite strategy (container + discovery) and load once
    pub fn init(&self) -> Result<()> {
        let mut inner = self.lock()?;
        let container = inner.container.clone().ok_or_else(|| {
            Error::lifecycle(format!(
                "No container bound for {}; call bind_container() before init()",
                type_name::<C>()
            ))
        })?;
        let strategies = vec![
            LoaderStrategy::container(Arc::clone(&container)),
            LoaderStrategy::discovery(container, self.components, self.factories)?,
        ];
        self.init_locked(&mut inner, strategies)
    }

    /// Initialize with an explicit list of strategies and load once
    pub fn init_with_strategies(&self, strategies: Vec<LoaderStrategy<C, F>>) -> Result<()> {
        let mut inner = self.lock()?;
        self.init_locked(&mut inner, strategies)
    }

    /// Rediscover everything and rebuild the processor's lookup structure
    ///
    /// Valid once initialized. On failure the previously published state
    /// stays in place.
    pub fn update(&self) -> Result<()> {
        let mut inner = self.lock()?;
        debug!("Reloading implementations for {}", type_name::<C>());
        self.load(&mut inner)?;
        info!("Implementations for {} reloaded", type_name::<C>());
        Ok(())
    }

    /// Current lifecycle state
    pub fn state(&self) -> RepositoryState {
        self.inner
            .lock()
            .map_or(RepositoryState::Uninitialized, |inner| inner.state)
    }

    /// The subclass hook receiving each merged map
    pub fn processor(&self) -> &P {
        &self.processor
    }

    fn init_locked(
        &self,
        inner: &mut Inner<C, F>,
        strategies: Vec<LoaderStrategy<C, F>>,
    ) -> Result<()> {
        if inner.state != RepositoryState::Uninitialized {
            return Err(Error::lifecycle(format!(
                "Repository for {} is already initialized",
                type_name::<C>()
            )));
        }
        inner.loader = Some(LoaderStrategy::composite(strategies));
        inner.state = RepositoryState::Initialized;

        debug!("Loading implementations for {}", type_name::<C>());
        self.load(inner)?;
        info!("Implementations for {} loaded", type_name::<C>());
        Ok(())
    }

    fn load(&self, inner: &mut Inner<C, F>) -> Result<()> {
        let loader = inner.loader.as_ref().ok_or_else(|| {
            Error::lifecycle(format!(
                "Repository for {} must be initialized before loading",
                type_name::<C>()
            ))
        })?;

        let mut implementations = ProducerMap::new();

        let factories = loader.find_component_factories()?;
        for factory in &factories {
            for key in factory.keys() {
                implementations.put(key.clone(), Producer::factory(Arc::clone(factory), key));
            }
        }

        let components = loader.find_components()?;
        for component in &components {
            let producer = Producer::instance(Arc::clone(component));
            for key in component.keys() {
                implementations.put(key, producer.clone());
            }
        }

        debug!(
            component_type = type_name::<C>(),
            factories = factories.len(),
            components = components.len(),
            keys = implementations.key_count(),
            "Discovered implementations"
        );

        self.processor.process_implementations(implementations)?;
        inner.state = RepositoryState::Loaded;
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner<C, F>>> {
        self.inner
            .lock()
            .map_err(|_| Error::internal("component repository lock poisoned"))
    }
}
