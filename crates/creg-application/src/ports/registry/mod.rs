//! Registration Slices
//!
//! Link-time registration tables for components that are not managed by the
//! DI container. Uses the `linkme` crate: implementations submit entries
//! from any crate linked into the final binary, and the discovery strategy
//! walks the slice at load time.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Registration Flow                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(I18N_DAOS)]  │
//! │                        static ENTRY: Registration<..> = ...     │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static I18N_DAOS: [Registration] = [..]
//! │                              ↓                                  │
//! │  3. Discovery walks:   I18N_DAOS.iter()                         │
//! │                              ↓                                  │
//! │  4. Constructor reads settings, then autowires collaborators    │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use creg_application::ports::registry::I18N_DAOS;
//!
//! #[linkme::distributed_slice(I18N_DAOS)]
//! static MEMORY_DAO: Registration<dyn I18nDao> = Registration {
//!     name: "memory-feature",
//!     description: "In-memory feature metadata",
//!     construct: |ctx| Ok(Arc::new(InMemoryI18nDao::from_context(ctx)?)),
//! };
//! ```

pub mod i18n;

pub use i18n::{I18N_DAO_FACTORIES, I18N_DAOS, list_i18n_registrations};
