//! Identity-keyed instance sets
//!
//! Discovery results are sets of shared instances. Two `Arc`s are the same
//! member when they point at the same allocation, regardless of what the
//! pointee's own equality would say.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Insertion-ordered set of `Arc<T>` with pointer identity
pub struct InstanceSet<T: ?Sized> {
    items: Vec<Arc<T>>,
    seen: HashSet<usize>,
}

fn address<T: ?Sized>(item: &Arc<T>) -> usize {
    Arc::as_ptr(item).cast::<()>().addr()
}

impl<T: ?Sized> InstanceSet<T> {
    /// Empty set
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Insert `item`; returns `false` if the same instance was already present
    pub fn insert(&mut self, item: Arc<T>) -> bool {
        if self.seen.insert(address(&item)) {
            self.items.push(item);
            true
        } else {
            false
        }
    }

    /// Union with another set, keeping the first occurrence of each instance
    pub fn union(&mut self, other: Self) {
        self.extend(other.items);
    }

    /// Whether `item` is a member
    pub fn contains(&self, item: &Arc<T>) -> bool {
        self.seen.contains(&address(item))
    }

    /// Number of distinct instances
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Arc<T>> {
        self.items.iter()
    }
}

impl<T: ?Sized> Default for InstanceSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Extend<Arc<T>> for InstanceSet<T> {
    fn extend<I: IntoIterator<Item = Arc<T>>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: ?Sized> FromIterator<Arc<T>> for InstanceSet<T> {
    fn from_iter<I: IntoIterator<Item = Arc<T>>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: ?Sized> IntoIterator for InstanceSet<T> {
    type Item = Arc<T>;
    type IntoIter = std::vec::IntoIter<Arc<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T: ?Sized> IntoIterator for &'a InstanceSet<T> {
    type Item = &'a Arc<T>;
    type IntoIter = std::slice::Iter<'a, Arc<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: ?Sized> fmt::Debug for InstanceSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceSet")
            .field("len", &self.items.len())
            .finish()
    }
}
