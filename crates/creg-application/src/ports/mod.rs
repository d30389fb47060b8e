//! Application ports
//!
//! - **registry** - link-time registration slices providers submit into

pub mod registry;
