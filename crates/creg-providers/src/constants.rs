//! Provider constants

/// Registration name of the in-memory feature DAO
pub const MEMORY_FEATURE_DAO_NAME: &str = "memory-feature";

/// Registration name of the in-memory DAO factory
pub const MEMORY_DAO_FACTORY_NAME: &str = "memory";
