//! Process-wide owner of the three connection managers.
//!
//! Build one [`ConnectorRegistry`](structs::connector_registry::ConnectorRegistry)
//! at startup and pass it (usually in an `Arc`) to the code that needs
//! database or broker access.

pub mod impls;
pub mod structs;
