//! Document store connector (MongoDB).
//!
//! [`DocumentConnector`](structs::document_connector::DocumentConnector) holds
//! one multiplexed connection, opened on the first `connect()` against the
//! configured URI and logical database, and reused until `disconnect()`.

/// Implementation blocks for the connector and the MongoDB backend.
pub mod impls;

/// Connector and backend structures.
pub mod structs;

/// Backend trait definitions.
pub mod traits;
