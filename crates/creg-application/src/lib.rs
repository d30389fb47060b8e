//! Application Layer - creg
//!
//! Discovery, merge and instantiation of pluggable components.
//!
//! ## Architecture
//!
//! The application layer:
//! - Finds components and component factories through several loader
//!   strategies (DI container, link-time registration tables)
//! - Unions their results and expands them into a key to producer multimap
//! - Hands the multimap to a repository-specific processor
//! - Rebuilds everything on `update()` without restarting the process
//!
//! ## Modules
//!
//! - `component::*`: the generic pipeline
//! - `ports::registry`: registration slices implementations submit into
//! - `repositories::*`: concrete registries (I18N DAOs)
//!
//! ## Dependencies
//!
//! This crate depends on:
//! - `creg-domain`: component capabilities, producers, error type
//! - `dill` as the container, `figment` as the settings source, `linkme`
//!   for registration tables

pub mod component;
pub mod ports;
pub mod repositories;

pub use component::*;
pub use repositories::*;
