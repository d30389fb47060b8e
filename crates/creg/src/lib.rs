//! # creg
//!
//! Component discovery and key-unique registries over a DI container.
//!
//! Components are found in two places: instances already managed by the
//! dill container, and link-time registration tables filled by provider
//! crates. Each discovered component is configured from settings, then
//! autowired, and finally indexed by the keys it declares. Registries
//! expose one implementation per key and can be rediscovered at runtime.
//!
//! ## Example
//!
//! ```ignore
//! use creg::domain::value_objects::MetadataKind;
//! use creg::infrastructure::config::ConfigLoader;
//! use creg::infrastructure::di::init_app;
//!
//! let context = init_app(ConfigLoader::new().load()?)?;
//! if let Some(dao) = context.i18n_daos().get_dao(MetadataKind::Feature)? {
//!     println!("{} features", dao.get_all_metadata()?.len());
//! }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - component capabilities, producers, I18N types and errors
//! - `application` - discovery strategies, merge and the repositories
//! - `providers` - implementations registered into the registration tables
//! - `infrastructure` - configuration, logging, DI bootstrap, hot reload

/// Domain layer - core types
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use creg_domain::*;
}

/// Application layer - discovery pipeline and repositories
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use creg_application::*;
}

/// Provider implementations
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use creg_providers::*;
}

/// Infrastructure layer - config, logging, DI
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use creg_infrastructure::*;
}

/// Command line interface
pub mod cli;
