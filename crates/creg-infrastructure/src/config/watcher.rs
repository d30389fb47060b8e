//! Configuration file watcher for hot reload
//!
//! Reloads the configuration when its file changes and applies it to the
//! application context, which rediscovers every registry. Outcomes are
//! broadcast as [`ConfigWatchEvent`]s.
//!
//! ```text
//! notify thread ─→ mpsc ─→ reload loop (quiet window) ─→ spawn_blocking(apply_config) ─→ broadcast
//! ```
//!
//! A burst of writes yields a single reload once the file has been quiet
//! for `CONFIG_RELOAD_DEBOUNCE_MS`.

use crate::config::AppConfig;
use crate::config::loader::ConfigLoader;
use crate::constants::{CONFIG_RELOAD_DEBOUNCE_MS, CONFIG_WATCH_CHANNEL_CAPACITY};
use crate::di::AppContext;
use crate::error_ext::ErrorContext;
use crate::logging::log_config_loaded;
use creg_domain::error::{Error, Result};
use notify::event::ModifyKind;
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::broadcast::{self, Receiver, Sender};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Configuration watch event
#[derive(Debug, Clone)]
pub enum ConfigWatchEvent {
    /// Configuration reloaded and applied
    Reloaded(Box<AppConfig>),
    /// Configuration reload failed; the previous state is kept
    ReloadFailed(String),
}

/// Configuration watcher for hot reload
pub struct ConfigWatcher {
    config_path: PathBuf,
    loader: ConfigLoader,
    context: Arc<AppContext>,
    event_sender: Sender<ConfigWatchEvent>,
    _watcher: RecommendedWatcher,
}

impl ConfigWatcher {
    /// Watch `config_path` and apply changes to `context`
    ///
    /// Must be called within a Tokio runtime. The parent directory is
    /// watched so that editors replacing the file are noticed too.
    pub fn new(config_path: PathBuf, context: Arc<AppContext>) -> Result<Self> {
        let runtime_handle =
            Handle::try_current().context("Configuration watcher requires a Tokio runtime")?;
        let (event_sender, _) = broadcast::channel(CONFIG_WATCH_CHANNEL_CAPACITY);
        let (change_sender, changes) = mpsc::channel(CONFIG_WATCH_CHANNEL_CAPACITY);
        let loader = ConfigLoader::new().with_config_path(&config_path);

        let directory = match config_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut watcher =
            Self::create_file_watcher(config_path.clone(), change_sender, event_sender.clone())?;

        watcher
            .watch(&directory, RecursiveMode::NonRecursive)
            .with_context(|| format!("Failed to watch {}", directory.display()))?;
        debug!(path = %config_path.display(), "Watching configuration file");

        // Ends once the watcher, and with it the change sender, is dropped
        runtime_handle.spawn(Self::reload_loop(
            changes,
            config_path.clone(),
            loader.clone(),
            Arc::clone(&context),
            event_sender.clone(),
        ));

        Ok(Self {
            config_path,
            loader,
            context,
            event_sender,
            _watcher: watcher,
        })
    }

    /// Subscribe to configuration change events
    pub fn subscribe(&self) -> Receiver<ConfigWatchEvent> {
        self.event_sender.subscribe()
    }

    /// Manually trigger a configuration reload
    ///
    /// Runs on the calling thread.
    pub fn reload(&self) -> Result<Arc<AppConfig>> {
        let outcome = Self::apply(&self.loader, &self.context);
        Self::publish(&self.config_path, &self.event_sender, &outcome);
        outcome
    }

    /// Get the configuration file path
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    fn create_file_watcher(
        config_path: PathBuf,
        change_sender: mpsc::Sender<()>,
        event_sender: Sender<ConfigWatchEvent>,
    ) -> Result<RecommendedWatcher> {
        // notify calls back on its own thread
        let watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if Self::should_reload_config(&event, &config_path) {
                        // A full queue already holds a pending change
                        let _ = change_sender.try_send(());
                    }
                }
                Err(e) => {
                    let _ = event_sender.send(ConfigWatchEvent::ReloadFailed(format!(
                        "File watch error: {e}"
                    )));
                }
            },
            Config::default(),
        )
        .context("Failed to create file watcher")?;

        Ok(watcher)
    }

    /// Whether `event` is a write to the watched file
    fn should_reload_config(event: &Event, config_path: &Path) -> bool {
        let relevant_kind = matches!(
            event.kind,
            EventKind::Modify(ModifyKind::Data(_) | ModifyKind::Any | ModifyKind::Name(_))
                | EventKind::Create(_)
        );
        relevant_kind
            && event
                .paths
                .iter()
                .any(|path| path.file_name() == config_path.file_name())
    }

    async fn reload_loop(
        mut changes: mpsc::Receiver<()>,
        config_path: PathBuf,
        loader: ConfigLoader,
        context: Arc<AppContext>,
        event_sender: Sender<ConfigWatchEvent>,
    ) {
        let quiet_window = Duration::from_millis(CONFIG_RELOAD_DEBOUNCE_MS);

        while changes.recv().await.is_some() {
            // Absorb the rest of the burst; also avoids reading partially written files
            loop {
                match tokio::time::timeout(quiet_window, changes.recv()).await {
                    Ok(Some(())) => {}
                    Ok(None) => return,
                    Err(_) => break,
                }
            }

            let (loader, context) = (loader.clone(), Arc::clone(&context));
            let outcome = tokio::task::spawn_blocking(move || Self::apply(&loader, &context))
                .await
                .unwrap_or_else(|e| {
                    Err(Error::internal(format!("Configuration reload task failed: {e}")))
                });
            Self::publish(&config_path, &event_sender, &outcome);
        }
        debug!(path = %config_path.display(), "Configuration watch stopped");
    }

    fn apply(loader: &ConfigLoader, context: &AppContext) -> Result<Arc<AppConfig>> {
        let config = loader.reload()?;
        context.apply_config(config)?;
        Ok(context.config())
    }

    fn publish(
        config_path: &Path,
        event_sender: &Sender<ConfigWatchEvent>,
        outcome: &Result<Arc<AppConfig>>,
    ) {
        let event = match outcome {
            Ok(config) => {
                log_config_loaded(config_path, true);
                ConfigWatchEvent::Reloaded(Box::new(AppConfig::clone(config)))
            }
            Err(e) => {
                warn!(error = %e, path = %config_path.display(), "Failed to reload configuration");
                ConfigWatchEvent::ReloadFailed(format!("Failed to reload configuration: {e}"))
            }
        };
        // No subscriber is not an error
        let _ = event_sender.send(event);
    }
}

/// Configuration watcher builder
pub struct ConfigWatcherBuilder {
    config_path: Option<PathBuf>,
    context: Option<Arc<AppContext>>,
}

impl ConfigWatcherBuilder {
    /// Create a new configuration watcher builder
    pub fn new() -> Self {
        Self {
            config_path: None,
            context: None,
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the application context receiving reloaded configurations
    pub fn with_context(mut self, context: Arc<AppContext>) -> Self {
        self.context = Some(context);
        self
    }

    /// Build the configuration watcher
    pub fn build(self) -> Result<ConfigWatcher> {
        let config_path = self
            .config_path
            .ok_or_else(|| Error::configuration("Configuration file path is required"))?;
        let context = self
            .context
            .ok_or_else(|| Error::configuration("Application context is required"))?;

        ConfigWatcher::new(config_path, context)
    }
}

impl Default for ConfigWatcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}
