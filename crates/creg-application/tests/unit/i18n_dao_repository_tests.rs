//! Lookup semantics of the I18N DAO repository

use crate::fixtures::{
    CONFIGURED_DAOS, LabeledDao, NO_DAOS, NO_FACTORIES, RecordingFactory, container, label_of,
    settings_with_kinds,
};
use creg_application::component::{DuplicatePolicy, SettingsManager};
use creg_application::repositories::I18nDaoRepository;
use creg_domain::error::Error;
use creg_domain::ports::{I18nDao, I18nDaoFactory};
use creg_domain::value_objects::{I18nDaoKey, I18nMetadata, MetadataKind};
use std::sync::Arc;

fn loaded(
    daos: Vec<Arc<dyn I18nDao>>,
    factories: Vec<Arc<dyn I18nDaoFactory>>,
    policy: DuplicatePolicy,
) -> I18nDaoRepository {
    let repository = I18nDaoRepository::with_registrations(&NO_DAOS, &NO_FACTORIES, policy);
    repository
        .bind_container(container(Arc::new(SettingsManager::empty()), daos, factories))
        .expect("bind container");
    repository.init().expect("init");
    repository
}

#[test]
fn test_absent_kind_returns_none() {
    let repository = loaded(
        vec![LabeledDao::shared("features", &[MetadataKind::Feature])],
        Vec::new(),
        DuplicatePolicy::LastWins,
    );

    assert!(repository.get_dao(MetadataKind::Procedure).expect("lookup").is_none());
}

#[test]
fn test_component_with_several_keys_serves_each() {
    let dao = LabeledDao::shared("shared", &[MetadataKind::Feature, MetadataKind::Procedure]);
    let repository = loaded(vec![Arc::clone(&dao)], Vec::new(), DuplicatePolicy::LastWins);

    let feature = repository
        .get_dao(MetadataKind::Feature)
        .expect("lookup")
        .expect("feature dao");
    let procedure = repository
        .get_dao(MetadataKind::Procedure)
        .expect("lookup")
        .expect("procedure dao");

    assert!(Arc::ptr_eq(&feature, &dao));
    assert!(Arc::ptr_eq(&procedure, &dao));
    assert_eq!(repository.len(), 2);
}

#[test]
fn test_instance_lookups_return_the_same_object() {
    let repository = loaded(
        vec![LabeledDao::shared("features", &[MetadataKind::Feature])],
        Vec::new(),
        DuplicatePolicy::LastWins,
    );

    let first = repository.get_dao(MetadataKind::Feature).expect("lookup").expect("dao");
    let second = repository.get_dao(MetadataKind::Feature).expect("lookup").expect("dao");
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_factory_creates_on_each_lookup_with_bound_key() {
    let factory = Arc::new(RecordingFactory::new("made", &[MetadataKind::Offering]));
    let repository = loaded(
        Vec::new(),
        vec![Arc::clone(&factory) as Arc<dyn I18nDaoFactory>],
        DuplicatePolicy::LastWins,
    );
    assert!(factory.calls().is_empty(), "factories create lazily");

    let first = repository.get_dao(MetadataKind::Offering).expect("lookup").expect("dao");
    let second = repository.get_dao(MetadataKind::Offering).expect("lookup").expect("dao");

    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(label_of(&first), "made");
    assert_eq!(
        factory.calls(),
        vec![I18nDaoKey::new(MetadataKind::Offering); 2]
    );
}

#[test]
fn test_factory_failure_propagates_from_lookup() {
    let factory: Arc<dyn I18nDaoFactory> =
        Arc::new(RecordingFactory::failing("broken", &[MetadataKind::Feature]));
    let repository = loaded(Vec::new(), vec![factory], DuplicatePolicy::LastWins);

    let err = repository.get_dao(MetadataKind::Feature).err().expect("should fail");
    assert!(matches!(err, Error::Resolution { .. }));
}

#[test]
fn test_competing_factories_resolve_to_one_of_them() {
    let repository = loaded(
        Vec::new(),
        vec![
            Arc::new(RecordingFactory::new("x", &[MetadataKind::Feature])) as Arc<dyn I18nDaoFactory>,
            Arc::new(RecordingFactory::new("y", &[MetadataKind::Feature])),
        ],
        DuplicatePolicy::LastWins,
    );

    let dao = repository.get_dao(MetadataKind::Feature).expect("lookup").expect("dao");
    let label = label_of(&dao);
    assert!(label == "x" || label == "y", "unexpected producer {label}");
    assert_eq!(repository.len(), 1);
}

#[test]
fn test_component_takes_precedence_over_factory() {
    let component = LabeledDao::shared("component", &[MetadataKind::Feature]);
    let repository = loaded(
        vec![Arc::clone(&component)],
        vec![Arc::new(RecordingFactory::new("factory", &[MetadataKind::Feature])) as Arc<dyn I18nDaoFactory>],
        DuplicatePolicy::LastWins,
    );

    let dao = repository.get_dao(MetadataKind::Feature).expect("lookup").expect("dao");
    assert!(Arc::ptr_eq(&dao, &component));
}

#[test]
fn test_reject_policy_fails_on_conflicting_keys() {
    let repository =
        I18nDaoRepository::with_registrations(&NO_DAOS, &NO_FACTORIES, DuplicatePolicy::Reject);
    repository
        .bind_container(container(
            Arc::new(SettingsManager::empty()),
            vec![
                LabeledDao::shared("a", &[MetadataKind::Feature]),
                LabeledDao::shared("b", &[MetadataKind::Feature]),
            ],
            Vec::new(),
        ))
        .expect("bind");

    let err = repository.init().unwrap_err();
    assert!(err.is_configuration());
    assert!(repository.is_empty());
}

#[test]
fn test_reject_policy_accepts_one_component_under_several_keys() {
    let repository = loaded(
        vec![LabeledDao::shared("both", &[MetadataKind::Feature, MetadataKind::Offering])],
        Vec::new(),
        DuplicatePolicy::Reject,
    );

    assert_eq!(
        repository.supported_kinds(),
        vec![MetadataKind::Feature, MetadataKind::Offering]
    );
}

#[test]
fn test_container_and_discovered_components_are_merged() {
    let repository = I18nDaoRepository::with_registrations(
        &CONFIGURED_DAOS,
        &NO_FACTORIES,
        DuplicatePolicy::LastWins,
    );
    repository
        .bind_container(container(
            settings_with_kinds(&["procedure"]),
            vec![LabeledDao::shared("managed", &[MetadataKind::Feature])],
            Vec::new(),
        ))
        .expect("bind");
    repository.init().expect("init");

    assert_eq!(
        repository.supported_kinds(),
        vec![MetadataKind::Feature, MetadataKind::Procedure]
    );
}

#[test]
fn test_resolved_dao_round_trips_metadata() {
    let repository = loaded(
        vec![LabeledDao::shared("store", &[MetadataKind::Feature])],
        Vec::new(),
        DuplicatePolicy::LastWins,
    );
    let dao = repository.get_dao(MetadataKind::Feature).expect("lookup").expect("dao");

    dao.save_metadata(I18nMetadata::new(MetadataKind::Feature, "urn:feature:1"))
        .expect("save");

    let stored = dao.get_metadata("urn:feature:1").expect("read").expect("stored");
    assert_eq!(stored.kind, MetadataKind::Feature);
}
