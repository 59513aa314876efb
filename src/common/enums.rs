//! Shared enumerations.

/// Error kinds raised by every connector.
pub mod connector_error;
