//! Registry structures.

pub mod connector_registry;
