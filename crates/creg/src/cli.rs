//! Command line interface
//!
//! | Command | Description |
//! |---------|-------------|
//! | `creg list` | registered DAOs and factories, supported metadata kinds |
//! | `creg get KIND [--id ID]` | metadata served by the DAO for `KIND`, as JSON |
//! | `creg watch` | apply configuration file changes until interrupted |

use clap::{Parser, Subcommand};
use creg_application::ports::registry::list_i18n_registrations;
use creg_domain::error::{Error, Result};
use creg_domain::value_objects::MetadataKind;
use creg_infrastructure::config::{ConfigLoader, ConfigWatchEvent, ConfigWatcher};
use creg_infrastructure::di::{AppContext, init_app};
use creg_infrastructure::logging::init_logging;
use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};

/// Command line interface for creg
#[derive(Parser, Debug)]
#[command(name = "creg")]
#[command(about = "creg - Component discovery and registries")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// creg commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List registrations and supported metadata kinds
    List,
    /// Show metadata served for a kind
    Get {
        /// Metadata kind (feature, observable_property, procedure, offering)
        kind: MetadataKind,
        /// Only the record with this identifier
        #[arg(long)]
        id: Option<String>,
    },
    /// Watch the configuration file and apply changes
    Watch,
}

/// Run `cli`
pub async fn run(cli: Cli) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let loader = match &cli.config {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let config = loader.load()?;
    init_logging(&config.logging)?;
    let context = Arc::new(init_app(config)?);

    match cli.command {
        Command::List => print!("{}", render_registrations(&context)),
        Command::Get { kind, id } => println!("{}", render_metadata(&context, kind, id.as_deref())?),
        Command::Watch => watch(&loader, context).await?,
    }
    Ok(())
}

/// Registration tables and the kinds currently served
pub fn render_registrations(context: &AppContext) -> String {
    let mut out = String::from("Registrations:\n");
    for (name, description) in list_i18n_registrations() {
        let _ = writeln!(out, "  {name:<16} {description}");
    }
    let kinds: Vec<&str> = context
        .i18n_daos()
        .supported_kinds()
        .into_iter()
        .map(MetadataKind::as_str)
        .collect();
    let _ = writeln!(out, "Supported kinds: {}", kinds.join(", "));
    out
}

/// Metadata for `kind` as pretty JSON: one record when `id` is given,
/// every record otherwise
pub fn render_metadata(context: &AppContext, kind: MetadataKind, id: Option<&str>) -> Result<String> {
    let dao = context
        .i18n_daos()
        .get_dao(kind)?
        .ok_or_else(|| Error::not_found(format!("I18N DAO for {kind}")))?;

    let json = match id {
        Some(id) => {
            let metadata = dao
                .get_metadata(id)?
                .ok_or_else(|| Error::not_found(format!("{kind} metadata '{id}'")))?;
            serde_json::to_string_pretty(&metadata)
        }
        None => serde_json::to_string_pretty(&dao.get_all_metadata()?),
    };
    json.map_err(|e| Error::internal(format!("Failed to render metadata: {e}")))
}

async fn watch(loader: &ConfigLoader, context: Arc<AppContext>) -> Result<()> {
    let path = loader.resolve_config_path().ok_or_else(|| {
        Error::configuration("No configuration file to watch; pass --config")
    })?;
    let watcher = ConfigWatcher::new(path, context)?;
    let mut events = watcher.subscribe();
    info!(path = %watcher.config_path().display(), "Watching configuration, Ctrl-C to stop");

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            event = events.recv() => match event {
                Ok(ConfigWatchEvent::Reloaded(config)) => {
                    info!(level = %config.logging.level, "Configuration reloaded");
                }
                Ok(ConfigWatchEvent::ReloadFailed(reason)) => warn!(%reason, "Configuration reload failed"),
                Err(RecvError::Lagged(skipped)) => warn!(skipped, "Missed configuration events"),
                Err(RecvError::Closed) => break,
            },
        }
    }
    Ok(())
}
