//! Settings Manager
//!
//! Supplies configured values to components built by the discovery
//! strategy. Settings are read by dotted name (`i18n.default_locale`) from a
//! [`Figment`] that can be swapped at runtime, so the next registry update
//! sees the new values.

use arc_swap::ArcSwap;
use creg_domain::error::{Error, Result};
use figment::Figment;
use figment::providers::{Format, Toml};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

/// Runtime-swappable source of component settings
pub struct SettingsManager {
    figment: ArcSwap<Figment>,
}

impl SettingsManager {
    /// Manager reading from `figment`
    pub fn new(figment: Figment) -> Self {
        Self {
            figment: ArcSwap::from_pointee(figment),
        }
    }

    /// Manager without any setting
    pub fn empty() -> Self {
        Self::new(Figment::new())
    }

    /// Manager reading from a TOML document
    pub fn from_toml_str(toml: &str) -> Self {
        Self::new(Figment::from(Toml::string(toml)))
    }

    /// Replace the settings source; later reads see the new values
    ///
    /// Returns the replaced source so a caller can roll back.
    pub fn replace(&self, figment: Figment) -> Arc<Figment> {
        debug!("Replacing component settings");
        self.figment.swap(Arc::new(figment))
    }

    /// Current settings source
    pub fn snapshot(&self) -> Arc<Figment> {
        self.figment.load_full()
    }

    /// Whether a value is configured under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.figment.load().contains(name)
    }

    /// Value of `name`, or `None` when not configured
    ///
    /// A configured value that does not deserialize into `T` is a
    /// configuration error.
    pub fn setting<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        let figment = self.figment.load();
        if !figment.contains(name) {
            return Ok(None);
        }
        figment.extract_inner::<T>(name).map(Some).map_err(|e| {
            Error::configuration_with_source(format!("Invalid value for setting '{name}'"), e)
        })
    }

    /// Value of `name`; a missing value is a configuration error
    pub fn required<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        self.setting(name)?.ok_or_else(|| {
            Error::configuration(format!("Required setting '{name}' is not configured"))
        })
    }
}

impl Default for SettingsManager {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Debug for SettingsManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsManager").finish_non_exhaustive()
    }
}
