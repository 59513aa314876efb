//! Implementation blocks for common types.

/// Helpers on `ConnectorError`.
pub mod connector_error;
