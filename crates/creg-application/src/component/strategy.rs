//! Loader Strategies
//!
//! A loader strategy is one source of components and component factories.
//! The set of sources is closed:
//!
//! | Strategy | Source | Configuration pass |
//! |----------|--------|--------------------|
//! | [`LoaderStrategy::Container`] | instances managed by the dill catalog | none, the container initialized them |
//! | [`LoaderStrategy::Discovery`] | link-time [`Registration`] tables | settings, then autowiring |
//! | [`LoaderStrategy::Composite`] | union of member strategies | whatever the members do |
//!
//! A strategy with nothing to contribute returns an empty set. Any error
//! aborts the whole call, including the composite one.

use crate::component::container::ContainerExt;
use crate::component::instance_set::InstanceSet;
use crate::component::registration::Registration;
use crate::component::settings::SettingsManager;
use creg_domain::error::{Error, Result};
use dill::Catalog;
use std::sync::Arc;
use tracing::debug;

/// Instances already managed by the container
pub struct ContainerStrategy {
    container: Arc<Catalog>,
}

impl ContainerStrategy {
    /// Strategy reading from `container`
    pub fn new(container: Arc<Catalog>) -> Self {
        Self { container }
    }

    fn find<T: ?Sized + Send + Sync + 'static>(&self) -> Result<InstanceSet<T>> {
        Ok(self.container.managed::<T>()?.into_iter().collect())
    }
}

/// Instances built from registration tables and configured on the way
pub struct DiscoveryStrategy<C: ?Sized + 'static, F: ?Sized + 'static> {
    container: Arc<Catalog>,
    settings: Arc<SettingsManager>,
    components: &'static [Registration<C>],
    factories: &'static [Registration<F>],
}

impl<C: ?Sized + 'static, F: ?Sized + 'static> DiscoveryStrategy<C, F> {
    /// Strategy over the given tables
    ///
    /// The settings manager is taken from the container; its absence is a
    /// configuration error.
    pub fn new(
        container: Arc<Catalog>,
        components: &'static [Registration<C>],
        factories: &'static [Registration<F>],
    ) -> Result<Self> {
        let settings = container
            .maybe_one_of::<Arc<SettingsManager>>()?
            .ok_or_else(|| {
                Error::configuration("No settings manager registered in the container")
            })?;
        Ok(Self {
            container,
            settings,
            components,
            factories,
        })
    }

    fn build<T: ?Sized + 'static>(
        &self,
        registrations: &'static [Registration<T>],
    ) -> Result<InstanceSet<T>> {
        let mut set = InstanceSet::new();
        for registration in registrations {
            debug!(registration = registration.name, "Configuring discovered implementation");
            set.insert(registration.instantiate(&self.settings, &self.container)?);
        }
        Ok(set)
    }
}

/// One source of components (`C`) and component factories (`F`)
pub enum LoaderStrategy<C: ?Sized + 'static, F: ?Sized + 'static> {
    /// Instances managed by the container
    Container(ContainerStrategy),
    /// Instances built from registration tables
    Discovery(DiscoveryStrategy<C, F>),
    /// Union of member strategies, in order
    Composite(Vec<LoaderStrategy<C, F>>),
}

impl<C, F> LoaderStrategy<C, F>
where
    C: ?Sized + Send + Sync + 'static,
    F: ?Sized + Send + Sync + 'static,
{
    /// Container-sourced strategy
    pub fn container(container: Arc<Catalog>) -> Self {
        Self::Container(ContainerStrategy::new(container))
    }

    /// Discovery strategy over registration tables
    pub fn discovery(
        container: Arc<Catalog>,
        components: &'static [Registration<C>],
        factories: &'static [Registration<F>],
    ) -> Result<Self> {
        DiscoveryStrategy::new(container, components, factories).map(Self::Discovery)
    }

    /// Union of `strategies`
    pub fn composite(strategies: Vec<Self>) -> Self {
        Self::Composite(strategies)
    }

    /// Short name for diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Self::Container(_) => "container",
            Self::Discovery(_) => "discovery",
            Self::Composite(_) => "composite",
        }
    }

    /// Every component this strategy can find
    pub fn find_components(&self) -> Result<InstanceSet<C>> {
        match self {
            Self::Container(strategy) => strategy.find::<C>(),
            Self::Discovery(strategy) => strategy.build(strategy.components),
            Self::Composite(strategies) => {
                let mut set = InstanceSet::new();
                for strategy in strategies {
                    let found = strategy.find_components()?;
                    debug!(
                        strategy = strategy.name(),
                        components = found.len(),
                        "Strategy searched"
                    );
                    set.union(found);
                }
                Ok(set)
            }
        }
    }

    /// Every component factory this strategy can find
    pub fn find_component_factories(&self) -> Result<InstanceSet<F>> {
        match self {
            Self::Container(strategy) => strategy.find::<F>(),
            Self::Discovery(strategy) => strategy.build(strategy.factories),
            Self::Composite(strategies) => {
                let mut set = InstanceSet::new();
                for strategy in strategies {
                    let found = strategy.find_component_factories()?;
                    debug!(
                        strategy = strategy.name(),
                        factories = found.len(),
                        "Strategy searched"
                    );
                    set.union(found);
                }
                Ok(set)
            }
        }
    }
}
