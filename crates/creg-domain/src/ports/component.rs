//! Component Capability Ports
//!
//! The two capabilities every pluggable unit declares: a [`Component`]
//! names the keys it serves, a [`ComponentFactory`] names the keys it can
//! manufacture components for and builds them on demand.
//!
//! Both are used behind `Arc<dyn Trait>`: identity is by reference, and the
//! registry never owns the lifetime of a discovered instance beyond the
//! `Arc` it holds.

use crate::error::Result;
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

/// Bounds required of a registry key
///
/// Keys are opaque to the registry: it only hashes, compares, clones and
/// prints them.
pub trait ComponentKey: Eq + Hash + Clone + Debug + Send + Sync + 'static {}

impl<T> ComponentKey for T where T: Eq + Hash + Clone + Debug + Send + Sync + 'static {}

/// A pluggable unit of behavior identified by one or more keys
pub trait Component<K: ComponentKey>: Send + Sync {
    /// Keys this component serves
    fn keys(&self) -> HashSet<K>;
}

/// Manufactures components of type `C` for the keys it supports
///
/// A factory may be asked to create any number of instances for the same
/// key; whether it returns a fresh instance each time is up to the factory.
pub trait ComponentFactory<K: ComponentKey, C: ?Sized>: Send + Sync {
    /// Keys this factory can create components for
    fn keys(&self) -> HashSet<K>;

    /// Create a component for `key`
    fn create(&self, key: &K) -> Result<Arc<C>>;
}
