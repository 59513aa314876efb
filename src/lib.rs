//! # Backend Connectors
//!
//! Lazily established, reusable connections to the three backing services of
//! an API: a PostgreSQL pool, a MongoDB connection and a RabbitMQ
//! connection/channel pair.
//!
//! ## Overview
//!
//! Each connector is created without IO, connects on the first `connect()`,
//! hands out the same handle on every later call and closes it on
//! `disconnect()`/`close()`. Closing an idle connector is a no-op.
//!
//! The broker connector additionally:
//! - shares one in-flight attempt between all concurrent callers
//! - asserts the dead-letter queue `<queue>.dlq` before the primary queue
//! - drops back to idle when the live connection reports an error or closes
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use backend_connectors::config::structs::configuration::Configuration;
//! use backend_connectors::registry::structs::connector_registry::ConnectorRegistry;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! let registry = ConnectorRegistry::new(&config);
//! registry.connect_all().await?;
//! registry.relational.test_connection().await?;
//! registry.shutdown().await?;
//! ```
//!
//! ## Modules
//!
//! - [`broker`] - RabbitMQ connection, channel and dead-letter provisioning
//! - [`common`] - Shared connector error type
//! - [`config`] - Configuration management, TOML parsing and environment overrides
//! - [`document`] - MongoDB connection
//! - [`logging`] - Logger setup
//! - [`registry`] - Single owner of all connectors
//! - [`relational`] - PostgreSQL pool and query execution
//! - [`structs`] - CLI argument parsing
//! - [`utils`] - Sentry tracing helpers

/// RabbitMQ connector.
///
/// Owns the connection/channel pair, deduplicates concurrent connects and
/// provisions the primary queue together with its dead-letter queue.
pub mod broker;

/// Common error handling.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, overriding and validating configuration from
/// TOML files and environment variables.
pub mod config;

/// MongoDB connector.
pub mod document;

/// Logger setup (fern).
pub mod logging;

/// Process-wide connector registry.
pub mod registry;

/// PostgreSQL connector.
///
/// Provides a bounded connection pool, parameterized queries with timing and
/// a liveness check.
pub mod relational;

/// CLI argument parsing.
pub mod structs;

/// Sentry tracing helpers.
pub mod utils;
