//! Link-time component registrations
//!
//! Implementations that are not managed by the container announce
//! themselves in a statically compiled table of [`Registration`] entries
//! (a `linkme` distributed slice, or any `'static` array). The discovery
//! strategy walks the table and builds each entry with a
//! [`ConfigureContext`] that hands out settings and container singletons.
//!
//! ## Configuration order
//!
//! Constructors must read their settings before they autowire
//! collaborators. Autowired collaborators come from the container, which
//! initializes them itself; they are never configured a second time here.
//! Reading a setting after autowiring is rejected as a configuration error.

use crate::component::container::ContainerExt;
use crate::component::settings::SettingsManager;
use creg_domain::error::{Error, Result};
use dill::Catalog;
use serde::de::DeserializeOwned;
use std::cell::Cell;
use std::sync::Arc;

/// Constructor signature of a registration
pub type Construct<T> = fn(&ConfigureContext<'_>) -> Result<Arc<T>>;

/// One statically registered implementation of `T`
pub struct Registration<T: ?Sized + 'static> {
    /// Unique registration name (e.g., "memory")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Builds a configured instance
    pub construct: Construct<T>,
}

impl<T: ?Sized + 'static> Registration<T> {
    /// Build a configured instance of this registration
    pub fn instantiate(&self, settings: &SettingsManager, container: &Catalog) -> Result<Arc<T>> {
        let ctx = ConfigureContext::new(self.name, settings, container);
        (self.construct)(&ctx)
    }
}

/// List `(name, description)` of every entry in a registration table
pub fn list_registrations<T: ?Sized + 'static>(
    registrations: &[Registration<T>],
) -> Vec<(&'static str, &'static str)> {
    registrations
        .iter()
        .map(|r| (r.name, r.description))
        .collect()
}

/// Settings and collaborators available to a registration's constructor
pub struct ConfigureContext<'a> {
    registration: &'static str,
    settings: &'a SettingsManager,
    container: &'a Catalog,
    autowired: Cell<bool>,
}

impl<'a> ConfigureContext<'a> {
    /// Context for building `registration`
    pub fn new(
        registration: &'static str,
        settings: &'a SettingsManager,
        container: &'a Catalog,
    ) -> Self {
        Self {
            registration,
            settings,
            container,
            autowired: Cell::new(false),
        }
    }

    /// Name of the registration being built
    pub fn registration(&self) -> &'static str {
        self.registration
    }

    /// Optional setting
    pub fn setting<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        self.ensure_settings_phase(name)?;
        self.settings.setting(name)
    }

    /// Required setting
    pub fn required<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        self.ensure_settings_phase(name)?;
        self.settings.required(name).map_err(|e| match e {
            Error::Configuration { message, source } => Error::Configuration {
                message: format!("{}: {message}", self.registration),
                source,
            },
            other => other,
        })
    }

    /// The unique container singleton of type `T`, matched by type only
    ///
    /// `None` leaves the collaborator unset; two or more candidates are a
    /// configuration error.
    pub fn autowire<T: Clone + Send + Sync + 'static>(&self) -> Result<Option<T>> {
        self.autowired.set(true);
        self.container.maybe_one_of::<T>()
    }

    fn ensure_settings_phase(&self, name: &str) -> Result<()> {
        if self.autowired.get() {
            return Err(Error::configuration(format!(
                "{}: setting '{name}' read after collaborators were autowired",
                self.registration
            )));
        }
        Ok(())
    }
}
