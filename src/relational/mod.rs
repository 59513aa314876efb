//! Relational store connector (PostgreSQL).
//!
//! [`RelationalConnector`](structs::relational_connector::RelationalConnector)
//! owns a bounded connection pool that is created lazily on the first
//! `connect()` and reused afterwards. Queries connect on demand and log their
//! wall-clock duration.
//!
//! The driver sits behind the [`RelationalBackend`](traits::relational_backend::RelationalBackend)
//! trait; `RelationalBackendPgSQL` is the `sqlx` implementation.
//!
//! # Example
//!
//! ```rust,ignore
//! use backend_connectors::relational::structs::relational_connector::RelationalConnector;
//! use backend_connectors::relational::enums::query_param::QueryParam;
//!
//! let connector = RelationalConnector::new(config.postgres.clone());
//! let rows = connector.query("SELECT * FROM hits WHERE path = $1", &[QueryParam::from("/health")]).await?;
//! connector.disconnect().await?;
//! ```

/// Statement parameter enumeration.
pub mod enums;

/// Implementation blocks for the connector and the PgSQL backend.
pub mod impls;

/// Connector and backend structures.
pub mod structs;

/// Backend trait definitions.
pub mod traits;
