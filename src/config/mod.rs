//! Configuration management module.
//!
//! This module handles loading, overriding and validating the connector
//! configuration. Values come from a TOML file and can be overridden by
//! environment variables.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) contains sections for:
//! - **postgres**: Relational store host, credentials and pool sizing
//! - **mongodb**: Document store URI and logical database name
//! - **rabbitmq**: Broker URL, primary queue, publisher confirms, retry settings
//! - **sentry_config**: Error reporting configuration
//!
//! # Environment Overrides
//!
//! `PG_HOST`, `PG_PORT`, `PG_DATABASE`, `PG_USER`, `PG_PASSWORD`, `PG_POOL_MAX`,
//! `PG_IDLE_TIMEOUT_MS`, `PG_CONNECT_TIMEOUT_MS`, `MONGO_URI`, `MONGO_DB_NAME`,
//! `RABBITMQ_URL`, `RABBITMQ_QUEUE`, `RABBITMQ_PUBLISHER_CONFIRM`,
//! `RABBITMQ_RETRY_ATTEMPTS`, `RABBITMQ_RETRY_DELAY` and `LOG_LEVEL`.
//!
//! # Example
//!
//! ```rust,ignore
//! use backend_connectors::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
