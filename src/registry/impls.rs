//! Implementation blocks for the registry.

pub mod connector_registry;
