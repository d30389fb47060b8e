//! Hot reload through the configuration watcher

use creg_domain::value_objects::MetadataKind;
use creg_infrastructure::config::{ConfigLoader, ConfigWatchEvent, ConfigWatcher, ConfigWatcherBuilder};
use creg_infrastructure::constants::CONFIG_RELOAD_DEBOUNCE_MS;
use creg_infrastructure::di::{AppContext, init_app};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::broadcast::error::TryRecvError;

fn setup(content: &str) -> (TempDir, PathBuf, Arc<AppContext>) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("creg.toml");
    fs::write(&path, content).expect("write config");
    let config = ConfigLoader::new().with_config_path(&path).load().expect("load");
    let context = Arc::new(init_app(config).expect("init"));
    (dir, path, context)
}

#[tokio::test]
async fn test_manual_reload_applies_file_changes() {
    let (_dir, path, context) = setup("[settings.i18n.memory]\nkinds = [\"offering\"]");
    let watcher = ConfigWatcher::new(path.clone(), Arc::clone(&context)).expect("watcher");
    let mut events = watcher.subscribe();

    fs::write(&path, "[settings.i18n.memory]\nkinds = [\"procedure\"]").expect("rewrite");
    watcher.reload().expect("reload");

    assert_eq!(
        context.i18n_daos().supported_kinds(),
        vec![MetadataKind::Feature, MetadataKind::Procedure]
    );
    let event = events.recv().await.expect("event");
    assert!(matches!(event, ConfigWatchEvent::Reloaded(_)));
}

#[tokio::test]
async fn test_manual_reload_failure_is_broadcast() {
    let (_dir, path, context) = setup("");
    let watcher = ConfigWatcherBuilder::new()
        .with_config_path(&path)
        .with_context(Arc::clone(&context))
        .build()
        .expect("watcher");
    let mut events = watcher.subscribe();

    fs::write(&path, "[logging]\nlevel = \"loud\"").expect("rewrite");
    let err = watcher.reload().unwrap_err();

    assert!(err.is_configuration());
    assert_eq!(context.i18n_daos().supported_kinds(), MetadataKind::ALL.to_vec());
    let event = events.recv().await.expect("event");
    assert!(matches!(event, ConfigWatchEvent::ReloadFailed(_)));
}

#[tokio::test]
async fn test_file_change_triggers_reload() {
    let (_dir, path, context) = setup("");
    let watcher = ConfigWatcher::new(path.clone(), Arc::clone(&context)).expect("watcher");
    let mut events = watcher.subscribe();

    fs::write(&path, "[settings.i18n.memory]\nkinds = [\"offering\"]").expect("rewrite");

    let event = tokio::time::timeout(Duration::from_secs(10), events.recv())
        .await
        .expect("reload within timeout")
        .expect("event");
    assert!(matches!(event, ConfigWatchEvent::Reloaded(_)));
    assert_eq!(
        context.i18n_daos().supported_kinds(),
        vec![MetadataKind::Feature, MetadataKind::Offering]
    );
}

#[tokio::test]
async fn test_burst_of_writes_reloads_once() {
    let (_dir, path, context) = setup("");
    let watcher = ConfigWatcher::new(path.clone(), Arc::clone(&context)).expect("watcher");
    let mut events = watcher.subscribe();

    for kind in ["offering", "procedure", "offering", "observable_property", "procedure"] {
        fs::write(&path, format!("[settings.i18n.memory]\nkinds = [\"{kind}\"]"))
            .expect("rewrite");
    }

    let event = tokio::time::timeout(Duration::from_secs(10), events.recv())
        .await
        .expect("reload within timeout")
        .expect("event");
    assert!(matches!(event, ConfigWatchEvent::Reloaded(_)));

    tokio::time::sleep(Duration::from_millis(CONFIG_RELOAD_DEBOUNCE_MS * 10)).await;
    assert!(matches!(events.try_recv(), Err(TryRecvError::Empty)));
    assert_eq!(
        context.i18n_daos().supported_kinds(),
        vec![MetadataKind::Feature, MetadataKind::Procedure]
    );
}

#[test]
fn test_builder_requires_path_and_context() {
    let err = ConfigWatcherBuilder::new().build().err().expect("should fail");
    assert!(err.is_configuration());
}

#[test]
fn test_watcher_outside_runtime_fails() {
    let (_dir, path, context) = setup("");

    let err = ConfigWatcher::new(path, context).err().expect("should fail");
    assert!(matches!(err, creg_domain::error::Error::Infrastructure { .. }));
}
