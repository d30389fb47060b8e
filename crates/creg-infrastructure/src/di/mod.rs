//! Dependency Injection
//!
//! The dill catalog is the external container: it holds the fully
//! initialized singletons (settings manager, shared I18N store) that
//! discovered components autowire, plus any container-managed
//! implementations. [`AppContext`] is the composition root tying the
//! catalog to the component repositories.
//!
//! ```text
//! AppConfig ─→ SettingsManager ─┐
//!              I18nStore ───────┼─→ dill Catalog ─→ I18nDaoRepository
//!                               │        ↑                 ↑
//!                               │     linkme slices (I18N_DAOS, I18N_DAO_FACTORIES)
//!                               └──────── AppContext::apply_config() ─→ update()
//! ```

pub mod bootstrap;
pub mod catalog;

pub use bootstrap::{AppContext, init_app, init_app_with};
pub use catalog::{ManagedComponents, build_catalog};
