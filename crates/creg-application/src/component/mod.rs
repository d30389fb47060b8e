//! Component discovery and registry pipeline
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`instance_set`] | Identity-keyed sets of discovered instances |
//! | [`settings`] | Settings manager backing component configuration |
//! | [`container`] | Typed access to the dill container |
//! | [`registration`] | Link-time registration tables and configure context |
//! | [`strategy`] | Container, discovery and composite loader strategies |
//! | [`producer_map`] | Key to producer multimap and duplicate policy |
//! | [`repository`] | Init/load/update orchestration |

pub mod container;
pub mod instance_set;
pub mod producer_map;
pub mod registration;
pub mod repository;
pub mod settings;
pub mod strategy;

pub use container::{ContainerExt, ContainerManaged};
pub use instance_set::InstanceSet;
pub use producer_map::{DuplicatePolicy, ProducerMap};
pub use registration::{ConfigureContext, Construct, Registration, list_registrations};
pub use repository::{ComponentRepository, ImplementationProcessor, RepositoryState};
pub use settings::SettingsManager;
pub use strategy::{ContainerStrategy, DiscoveryStrategy, LoaderStrategy};
