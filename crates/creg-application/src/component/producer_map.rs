//! Key to producer multimap
//!
//! The intermediate state of a load: every `(key, producer)` declaration
//! found during discovery. A key may carry several producers; the same
//! producer declared twice for one key is kept once.

use creg_domain::error::{Error, Result};
use creg_domain::ports::ComponentKey;
use creg_domain::producer::Producer;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// How a key-unique registry treats keys declared by several producers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// The last producer processed for a key wins
    #[default]
    LastWins,
    /// Conflicting producers abort the load with a configuration error
    Reject,
}

/// Key to deduplicated producers, in processing order per key
pub struct ProducerMap<K, C: ?Sized, F: ?Sized> {
    entries: HashMap<K, Vec<Producer<K, C, F>>>,
}

impl<K: ComponentKey, C: ?Sized, F: ?Sized> ProducerMap<K, C, F> {
    /// Empty map
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Add `producer` under `key`; returns `false` for an already present pair
    pub fn put(&mut self, key: K, producer: Producer<K, C, F>) -> bool {
        let producers = self.entries.entry(key).or_default();
        if producers.contains(&producer) {
            return false;
        }
        producers.push(producer);
        true
    }

    /// Producers under `key`, in processing order
    pub fn get(&self, key: &K) -> &[Producer<K, C, F>] {
        self.entries.get(key).map_or(&[], Vec::as_slice)
    }

    /// Distinct keys
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }

    /// Number of distinct keys
    pub fn key_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of `(key, producer)` pairs
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Whether the map holds no pair
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reduce to one producer per key
    ///
    /// Under [`DuplicatePolicy::LastWins`] the last producer processed for a
    /// key is kept; under [`DuplicatePolicy::Reject`] a key with several
    /// producers is a configuration error.
    pub fn into_unique(self, policy: DuplicatePolicy) -> Result<HashMap<K, Producer<K, C, F>>> {
        let mut unique = HashMap::with_capacity(self.entries.len());
        for (key, mut producers) in self.entries {
            if producers.len() > 1 {
                match policy {
                    DuplicatePolicy::Reject => {
                        return Err(Error::configuration(format!(
                            "{} implementations registered for key {key:?}",
                            producers.len()
                        )));
                    }
                    DuplicatePolicy::LastWins => {
                        warn!(
                            key = ?key,
                            candidates = producers.len(),
                            "Multiple implementations registered, keeping the last one"
                        );
                    }
                }
            }
            if let Some(last) = producers.pop() {
                unique.insert(key, last);
            }
        }
        Ok(unique)
    }
}

impl<K: ComponentKey, C: ?Sized, F: ?Sized> Default for ProducerMap<K, C, F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: std::fmt::Debug, C: ?Sized, F: ?Sized> std::fmt::Debug for ProducerMap<K, C, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}
