//! Application context wiring and configuration changes

use creg_application::component::{ContainerManaged, DuplicatePolicy};
use creg_domain::constants::I18N_DEFAULT_LOCALE_SETTING;
use creg_domain::ports::I18nDao;
use creg_domain::value_objects::{I18nMetadata, MetadataKind};
use creg_infrastructure::config::AppConfig;
use creg_infrastructure::di::{ManagedComponents, init_app, init_app_with};
use creg_providers::i18n::{I18nStore, InMemoryI18nDao};
use figment::Figment;
use figment::providers::{Format, Serialized, Toml};
use figment::value::Dict;
use std::sync::Arc;

fn config_with(toml: &str) -> AppConfig {
    Figment::from(Serialized::defaults(AppConfig::default()))
        .merge(Toml::string(toml))
        .extract()
        .expect("test config")
}

#[test]
fn test_default_config_serves_every_kind() {
    let context = init_app(AppConfig::default()).expect("init");

    assert_eq!(context.i18n_daos().supported_kinds(), MetadataKind::ALL.to_vec());
}

#[test]
fn test_reject_policy_fails_on_default_overlap() {
    let config = config_with("[registry]\nduplicate_policy = \"reject\"");

    let err = init_app(config).err().expect("should fail");
    assert!(err.is_configuration());
}

#[test]
fn test_reject_policy_with_disjoint_kinds() {
    let config = config_with(
        "[registry]\nduplicate_policy = \"reject\"\n[settings.i18n.memory]\nkinds = [\"offering\"]",
    );

    let context = init_app(config).expect("init");
    assert_eq!(
        context.i18n_daos().supported_kinds(),
        vec![MetadataKind::Feature, MetadataKind::Offering]
    );
    assert_eq!(context.config().registry.duplicate_policy, DuplicatePolicy::Reject);
}

#[test]
fn test_daos_share_the_context_store() {
    let context = init_app(AppConfig::default()).expect("init");
    let dao = context
        .i18n_daos()
        .get_dao(MetadataKind::Procedure)
        .expect("lookup")
        .expect("dao");

    dao.save_metadata(I18nMetadata::new(MetadataKind::Procedure, "gauge-7"))
        .expect("save");

    assert!(context.store().get(MetadataKind::Procedure, "gauge-7").is_some());
}

#[test]
fn test_apply_config_rediscovers_components() {
    let context = init_app(AppConfig::default()).expect("init");

    context
        .apply_config(config_with("[settings.i18n.memory]\nkinds = [\"procedure\"]"))
        .expect("apply");

    assert_eq!(
        context.i18n_daos().supported_kinds(),
        vec![MetadataKind::Feature, MetadataKind::Procedure]
    );
    assert!(context.config().setting("i18n.memory.kinds").is_some());
}

#[test]
fn test_rejected_config_keeps_previous_state() {
    let context = init_app(AppConfig::default()).expect("init");
    let mut broken = AppConfig::default();
    broken.settings = Dict::new();

    let err = context.apply_config(broken).unwrap_err();

    assert!(err.is_configuration());
    assert_eq!(context.i18n_daos().supported_kinds(), MetadataKind::ALL.to_vec());
    let locale: String = context
        .settings()
        .required(I18N_DEFAULT_LOCALE_SETTING)
        .expect("previous settings restored");
    assert_eq!(locale, "en");
    assert!(context.config().setting(I18N_DEFAULT_LOCALE_SETTING).is_some());
}

#[test]
fn test_update_keeps_registrations_stable() {
    let context = init_app(AppConfig::default()).expect("init");
    let before = context.i18n_daos().supported_kinds();

    context.update().expect("update");

    assert_eq!(context.i18n_daos().supported_kinds(), before);
}

#[test]
fn test_managed_components_join_discovered_ones() {
    let managed_dao: Arc<dyn I18nDao> = Arc::new(InMemoryI18nDao::new(
        MetadataKind::ObservableProperty,
        "en",
        Arc::new(I18nStore::new()),
    ));
    let managed = ManagedComponents {
        i18n_daos: ContainerManaged::new().with(Arc::clone(&managed_dao)),
        ..ManagedComponents::default()
    };
    let config = config_with("[settings.i18n.memory]\nkinds = [\"offering\"]");

    let context = init_app_with(config, managed).expect("init");

    assert_eq!(
        context.i18n_daos().supported_kinds(),
        vec![
            MetadataKind::Feature,
            MetadataKind::ObservableProperty,
            MetadataKind::Offering
        ]
    );
    let resolved = context
        .i18n_daos()
        .get_dao(MetadataKind::ObservableProperty)
        .expect("lookup")
        .expect("dao");
    assert!(Arc::ptr_eq(&resolved, &managed_dao));
}

#[test]
fn test_configured_records_seed_the_store() {
    let config = config_with(
        r#"
[[settings.i18n.memory.records]]
kind = "feature"
identifier = "river"
name = { en = "River", de = "Fluss" }
"#,
    );

    let context = init_app(config).expect("init");
    let dao = context
        .i18n_daos()
        .get_dao(MetadataKind::Feature)
        .expect("lookup")
        .expect("dao");

    let river = dao.get_metadata("river").expect("read").expect("seeded");
    assert_eq!(river.name.get("de"), Some("Fluss"));
}

#[test]
fn test_malformed_records_reject_config_change() {
    let context = init_app(AppConfig::default()).expect("init");

    let err = context
        .apply_config(config_with(
            "[[settings.i18n.memory.records]]\nkind = \"lake\"\nidentifier = \"x\"",
        ))
        .unwrap_err();

    assert!(err.is_configuration());
    assert!(context.store().is_empty());
}

#[test]
fn test_registry_change_is_not_reported_as_applied() {
    let context = init_app(AppConfig::default()).expect("init");

    context
        .apply_config(config_with(
            "[registry]\nduplicate_policy = \"reject\"\n[settings.i18n.memory]\nkinds = [\"offering\"]",
        ))
        .expect("apply");

    let config = context.config();
    assert_eq!(config.registry.duplicate_policy, DuplicatePolicy::LastWins);
    assert!(config.setting("i18n.memory.kinds").is_some());
}

#[test]
fn test_dropped_records_leave_the_store() {
    let two_rivers = r#"
[[settings.i18n.memory.records]]
kind = "feature"
identifier = "river"
name = { en = "River" }

[[settings.i18n.memory.records]]
kind = "feature"
identifier = "creek"
name = { en = "Creek" }
"#;
    let context = init_app(config_with(two_rivers)).expect("init");
    let dao = context
        .i18n_daos()
        .get_dao(MetadataKind::Procedure)
        .expect("lookup")
        .expect("dao");
    dao.save_metadata(I18nMetadata::new(MetadataKind::Procedure, "gauge-7"))
        .expect("save");

    context
        .apply_config(config_with(
            "[[settings.i18n.memory.records]]\nkind = \"feature\"\nidentifier = \"river\"",
        ))
        .expect("apply");

    let store = context.store();
    assert!(store.get(MetadataKind::Feature, "river").is_some());
    assert!(store.get(MetadataKind::Feature, "creek").is_none());
    assert!(store.get(MetadataKind::Procedure, "gauge-7").is_some());
}
