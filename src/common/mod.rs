//! Common error handling shared by all connectors.
//!
//! Every connector reports failures through [`ConnectorError`](enums::connector_error::ConnectorError):
//!
//! - **ConnectionError**: dial or handshake failure
//! - **QueryError**: statement execution failure
//! - **DisconnectionError**: close failure
//! - **ChannelUnavailableError**: broker channel requested while not connected
//!
//! The type is `Clone` so a single in-flight broker connect can hand the same
//! failure to every caller waiting on it.

/// Shared enumerations (connector errors).
pub mod enums;

/// Implementation blocks for common types.
pub mod impls;
