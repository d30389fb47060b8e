//! Configuration
//!
//! Typed application configuration, its figment-based loader and the file
//! watcher driving hot reload.

pub mod loader;
pub mod types;
pub mod watcher;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig, RegistryConfig};
pub use watcher::{ConfigWatchEvent, ConfigWatcher, ConfigWatcherBuilder};
