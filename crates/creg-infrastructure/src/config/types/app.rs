//! Main application configuration

use super::logging::LoggingConfig;
use super::registry::RegistryConfig;
use crate::constants::DEFAULT_LOCALE;
use figment::value::{Dict, Value};
use serde::{Deserialize, Serialize};

/// Application configuration
///
/// ```toml
/// [logging]
/// level = "debug"
///
/// [registry]
/// duplicate_policy = "reject"
///
/// [settings.i18n]
/// default_locale = "de"
/// ```
///
/// The `settings` table is handed to discovered components as-is; its
/// dotted paths are the setting names they read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Registry behavior
    pub registry: RegistryConfig,

    /// Component settings
    pub settings: Dict,
}

impl AppConfig {
    /// Value of the dotted setting `name`, if configured
    pub fn setting(&self, name: &str) -> Option<&Value> {
        let mut parts = name.split('.');
        let first = parts.next()?;
        parts.try_fold(self.settings.get(first)?, |value, part| {
            value.as_dict().and_then(|dict| dict.get(part))
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let i18n = Dict::from([("default_locale".to_string(), Value::from(DEFAULT_LOCALE))]);
        let settings = Dict::from([("i18n".to_string(), Value::from(i18n))]);

        Self {
            logging: LoggingConfig::default(),
            registry: RegistryConfig::default(),
            settings,
        }
    }
}
