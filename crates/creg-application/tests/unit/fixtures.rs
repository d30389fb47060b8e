//! Test components, factories and containers shared by the suites

#![allow(dead_code)]

use creg_application::component::{ConfigureContext, ContainerManaged, Registration, SettingsManager};
use creg_domain::error::{Error, Result};
use creg_domain::ports::{Component, ComponentFactory, I18nDao, I18nDaoFactory};
use creg_domain::value_objects::{I18nDaoKey, I18nMetadata, LocalizedString, MetadataKind};
use dill::{Catalog, CatalogBuilder};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Identifier of the metadata entry every `LabeledDao` is seeded with
pub const LABEL_ENTRY: &str = "__label";

/// DAO serving a fixed set of kinds, labeled for identification
pub struct LabeledDao {
    kinds: Vec<MetadataKind>,
    store: Mutex<HashMap<String, I18nMetadata>>,
}

impl LabeledDao {
    pub fn new(label: &str, kinds: &[MetadataKind]) -> Self {
        let entry = I18nMetadata::new(MetadataKind::Feature, LABEL_ENTRY)
            .with_name(LocalizedString::new().with("en", label));
        Self {
            kinds: kinds.to_vec(),
            store: Mutex::new(HashMap::from([(LABEL_ENTRY.to_string(), entry)])),
        }
    }

    pub fn shared(label: &str, kinds: &[MetadataKind]) -> Arc<dyn I18nDao> {
        Arc::new(Self::new(label, kinds))
    }
}

impl Component<I18nDaoKey> for LabeledDao {
    fn keys(&self) -> HashSet<I18nDaoKey> {
        self.kinds.iter().copied().map(I18nDaoKey::new).collect()
    }
}

impl I18nDao for LabeledDao {
    fn get_metadata(&self, identifier: &str) -> Result<Option<I18nMetadata>> {
        let store = self.store.lock().map_err(|_| Error::internal("poisoned"))?;
        Ok(store.get(identifier).cloned())
    }

    fn get_all_metadata(&self) -> Result<Vec<I18nMetadata>> {
        let store = self.store.lock().map_err(|_| Error::internal("poisoned"))?;
        Ok(store.values().cloned().collect())
    }

    fn save_metadata(&self, metadata: I18nMetadata) -> Result<()> {
        let mut store = self.store.lock().map_err(|_| Error::internal("poisoned"))?;
        store.insert(metadata.identifier.clone(), metadata);
        Ok(())
    }
}

/// Factory creating `LabeledDao`s and recording every requested key
pub struct RecordingFactory {
    pub label: String,
    kinds: Vec<MetadataKind>,
    pub calls: Mutex<Vec<I18nDaoKey>>,
    fail: bool,
}

impl RecordingFactory {
    pub fn new(label: &str, kinds: &[MetadataKind]) -> Self {
        Self {
            label: label.to_string(),
            kinds: kinds.to_vec(),
            calls: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing(label: &str, kinds: &[MetadataKind]) -> Self {
        Self {
            fail: true,
            ..Self::new(label, kinds)
        }
    }

    pub fn calls(&self) -> Vec<I18nDaoKey> {
        self.calls.lock().expect("calls lock").clone()
    }
}

impl ComponentFactory<I18nDaoKey, dyn I18nDao> for RecordingFactory {
    fn keys(&self) -> HashSet<I18nDaoKey> {
        self.kinds.iter().copied().map(I18nDaoKey::new).collect()
    }

    fn create(&self, key: &I18nDaoKey) -> Result<Arc<dyn I18nDao>> {
        self.calls
            .lock()
            .map_err(|_| Error::internal("poisoned"))?
            .push(*key);
        if self.fail {
            return Err(Error::resolution(format!("{} cannot create {key}", self.label)));
        }
        Ok(LabeledDao::shared(&self.label, &[key.kind()]))
    }
}

/// Label a `LabeledDao` was built with
pub fn label_of(dao: &Arc<dyn I18nDao>) -> String {
    dao.get_metadata(LABEL_ENTRY)
        .expect("read label")
        .and_then(|entry| entry.name.get("en").map(str::to_string))
        .expect("label entry")
}

/// Builds the DAO serving the kinds listed in setting `test.kinds`
pub fn build_configured_dao(ctx: &ConfigureContext<'_>) -> Result<Arc<dyn I18nDao>> {
    let kinds: Vec<MetadataKind> = ctx.required("test.kinds")?;
    let label: String = ctx.setting("test.label")?.unwrap_or_else(|| "configured".into());
    Ok(Arc::new(LabeledDao::new(&label, &kinds)))
}

pub static CONFIGURED_DAOS: [Registration<dyn I18nDao>; 1] = [Registration {
    name: "configured",
    description: "DAO serving the kinds named in test.kinds",
    construct: build_configured_dao,
}];

pub static NO_DAOS: [Registration<dyn I18nDao>; 0] = [];

pub static NO_FACTORIES: [Registration<dyn I18nDaoFactory>; 0] = [];

/// Container holding `settings` plus the given managed DAOs and factories
pub fn container(
    settings: Arc<SettingsManager>,
    daos: Vec<Arc<dyn I18nDao>>,
    factories: Vec<Arc<dyn I18nDaoFactory>>,
) -> Arc<Catalog> {
    let managed_daos = daos
        .into_iter()
        .fold(ContainerManaged::<dyn I18nDao>::new(), ContainerManaged::with);
    let managed_factories = factories
        .into_iter()
        .fold(ContainerManaged::<dyn I18nDaoFactory>::new(), ContainerManaged::with);

    let mut builder = CatalogBuilder::new();
    builder.add_value(settings);
    builder.add_value(Arc::new(managed_daos));
    builder.add_value(Arc::new(managed_factories));
    Arc::new(builder.build())
}

/// Settings manager with `test.kinds` set to `kinds`
pub fn settings_with_kinds(kinds: &[&str]) -> Arc<SettingsManager> {
    Arc::new(SettingsManager::from_toml_str(&kinds_toml(kinds)))
}

pub fn kinds_toml(kinds: &[&str]) -> String {
    let quoted: Vec<String> = kinds.iter().map(|k| format!("\"{k}\"")).collect();
    format!("[test]\nkinds = [{}]", quoted.join(", "))
}
