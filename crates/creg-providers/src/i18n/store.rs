//! Shared in-memory metadata store

use creg_domain::value_objects::{I18nMetadata, MetadataKind};
use dashmap::DashMap;

/// Metadata records keyed by kind and identifier
///
/// Safe to share between DAOs and threads; typically registered in the
/// container as `Arc<I18nStore>` and autowired into every in-memory DAO.
#[derive(Default)]
pub struct I18nStore {
    records: DashMap<(MetadataKind, String), I18nMetadata>,
}

impl I18nStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Record for `identifier` of `kind`
    pub fn get(&self, kind: MetadataKind, identifier: &str) -> Option<I18nMetadata> {
        self.records
            .get(&(kind, identifier.to_string()))
            .map(|entry| entry.value().clone())
    }

    /// Every record of `kind`, ordered by identifier
    pub fn all(&self, kind: MetadataKind) -> Vec<I18nMetadata> {
        let mut records: Vec<_> = self
            .records
            .iter()
            .filter(|entry| entry.key().0 == kind)
            .map(|entry| entry.value().clone())
            .collect();
        records.sort_by(|a, b| a.identifier.cmp(&b.identifier));
        records
    }

    /// Insert or replace a record; returns the replaced one
    pub fn put(&self, metadata: I18nMetadata) -> Option<I18nMetadata> {
        self.records
            .insert((metadata.kind, metadata.identifier.clone()), metadata)
    }

    /// Remove a record
    pub fn remove(&self, kind: MetadataKind, identifier: &str) -> Option<I18nMetadata> {
        self.records
            .remove(&(kind, identifier.to_string()))
            .map(|(_, metadata)| metadata)
    }

    /// Number of records across all kinds
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no record
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl std::fmt::Debug for I18nStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18nStore")
            .field("records", &self.records.len())
            .finish()
    }
}
