//! Registry configuration types

use creg_application::component::DuplicatePolicy;
use serde::{Deserialize, Serialize};

/// Behavior of the component registries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Treatment of keys claimed by several implementations
    ///
    /// Read once at startup; changing it requires a restart.
    pub duplicate_policy: DuplicatePolicy,
}
