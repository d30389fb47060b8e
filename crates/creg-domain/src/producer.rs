//! Deferred component handles
//!
//! A [`Producer`] resolves to a component when asked. The instance variant
//! hands back the same `Arc` every time; the factory variant calls
//! [`ComponentFactory::create`] with the key bound at construction on every
//! resolution, so callers that want a stable instance must cache it.

use crate::error::Result;
use crate::ports::component::{ComponentFactory, ComponentKey};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Deferred handle resolving to a component of type `C`
pub enum Producer<K, C: ?Sized, F: ?Sized> {
    /// Wraps a ready component
    Instance(Arc<C>),
    /// Creates the component through `factory` for `key`
    Factory {
        /// Factory used on each resolution
        factory: Arc<F>,
        /// Key passed unchanged to the factory
        key: K,
    },
}

impl<K, C, F> Producer<K, C, F>
where
    K: ComponentKey,
    C: ?Sized,
    F: ?Sized + ComponentFactory<K, C>,
{
    /// Producer over an already built component
    pub fn instance(component: Arc<C>) -> Self {
        Self::Instance(component)
    }

    /// Producer creating components through `factory` for `key`
    pub fn factory(factory: Arc<F>, key: K) -> Self {
        Self::Factory { factory, key }
    }

    /// Resolve to a component
    ///
    /// Factory failures propagate unchanged; nothing is retried or cached.
    pub fn resolve(&self) -> Result<Arc<C>> {
        match self {
            Self::Instance(component) => Ok(Arc::clone(component)),
            Self::Factory { factory, key } => factory.create(key),
        }
    }

    /// Whether this producer wraps a ready instance
    pub fn is_instance(&self) -> bool {
        matches!(self, Self::Instance(_))
    }

    /// Resolve every producer, preserving order and cardinality
    pub fn resolve_all(producers: &[Self]) -> Result<Vec<Arc<C>>> {
        producers.iter().map(Self::resolve).collect()
    }

    /// Resolve every value of a key-unique producer map
    pub fn resolve_map(producers: &HashMap<K, Self>) -> Result<HashMap<K, Arc<C>>> {
        producers
            .iter()
            .map(|(key, producer)| Ok((key.clone(), producer.resolve()?)))
            .collect()
    }
}

impl<K: Clone, C: ?Sized, F: ?Sized> Clone for Producer<K, C, F> {
    fn clone(&self) -> Self {
        match self {
            Self::Instance(component) => Self::Instance(Arc::clone(component)),
            Self::Factory { factory, key } => Self::Factory {
                factory: Arc::clone(factory),
                key: key.clone(),
            },
        }
    }
}

/// Identity equality: same instance, or same factory bound to an equal key
impl<K: PartialEq, C: ?Sized, F: ?Sized> PartialEq for Producer<K, C, F> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Instance(a), Self::Instance(b)) => Arc::ptr_eq(a, b),
            (
                Self::Factory { factory: fa, key: ka },
                Self::Factory { factory: fb, key: kb },
            ) => Arc::ptr_eq(fa, fb) && ka == kb,
            _ => false,
        }
    }
}

impl<K: Eq, C: ?Sized, F: ?Sized> Eq for Producer<K, C, F> {}

impl<K: fmt::Debug, C: ?Sized, F: ?Sized> fmt::Debug for Producer<K, C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instance(component) => f
                .debug_struct("InstanceProducer")
                .field("component", &Arc::as_ptr(component).cast::<()>())
                .finish(),
            Self::Factory { factory, key } => f
                .debug_struct("FactoryProducer")
                .field("factory", &Arc::as_ptr(factory).cast::<()>())
                .field("key", key)
                .finish(),
        }
    }
}
