//! Container access
//!
//! The dill [`Catalog`] is the external container holding pre-built,
//! fully initialized instances. Values are registered once per type
//! (typically `Arc<...>`) and read back by exact type. Several
//! implementations of one interface are registered together as a
//! [`ContainerManaged`] collection.

use creg_domain::error::{Error, Result};
use dill::{AllOf, Catalog};
use std::any::type_name;
use std::sync::Arc;

/// Container-managed instances of one interface
///
/// ```ignore
/// let daos = ContainerManaged::<dyn I18nDao>::new().with(feature_dao);
/// let catalog = CatalogBuilder::new().add_value(Arc::new(daos)).build();
/// ```
pub struct ContainerManaged<T: ?Sized> {
    instances: Vec<Arc<T>>,
}

impl<T: ?Sized> ContainerManaged<T> {
    /// Empty collection
    pub fn new() -> Self {
        Self {
            instances: Vec::new(),
        }
    }

    /// Add an instance
    pub fn with(mut self, instance: Arc<T>) -> Self {
        self.instances.push(instance);
        self
    }

    /// Registered instances
    pub fn instances(&self) -> &[Arc<T>] {
        &self.instances
    }
}

impl<T: ?Sized> Default for ContainerManaged<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Typed lookups on the DI container with domain errors
pub trait ContainerExt {
    /// Every registered value of type `T`; empty when there is none
    fn all_of<T: Clone + Send + Sync + 'static>(&self) -> Result<Vec<T>>;

    /// The single registered value of type `T`
    ///
    /// `None` when absent; more than one candidate is a configuration
    /// error since by-type wiring cannot choose between them.
    fn maybe_one_of<T: Clone + Send + Sync + 'static>(&self) -> Result<Option<T>>;

    /// The single registered value of type `T`, failing when absent
    fn one_of<T: Clone + Send + Sync + 'static>(&self) -> Result<T> {
        self.maybe_one_of::<T>()?.ok_or_else(|| {
            Error::configuration(format!("No {} registered in the container", type_name::<T>()))
        })
    }

    /// Container-managed instances of interface `T`
    fn managed<T: ?Sized + Send + Sync + 'static>(&self) -> Result<Vec<Arc<T>>> {
        Ok(self
            .all_of::<Arc<ContainerManaged<T>>>()?
            .iter()
            .flat_map(|managed| managed.instances().iter().cloned())
            .collect())
    }
}

impl ContainerExt for Catalog {
    fn all_of<T: Clone + Send + Sync + 'static>(&self) -> Result<Vec<T>> {
        let values = self.get::<AllOf<T>>().map_err(|e| {
            Error::discovery(format!(
                "Container lookup of {} failed: {e:?}",
                type_name::<T>()
            ))
        })?;
        Ok(values.into_iter().map(|value| (*value).clone()).collect())
    }

    fn maybe_one_of<T: Clone + Send + Sync + 'static>(&self) -> Result<Option<T>> {
        let mut values = self.all_of::<T>()?;
        match values.len() {
            0 => Ok(None),
            1 => Ok(values.pop()),
            n => Err(Error::configuration(format!(
                "Ambiguous container lookup: {n} instances of {} registered",
                type_name::<T>()
            ))),
        }
    }
}
