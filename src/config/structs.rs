//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// PostgreSQL connection and pool settings.
pub mod postgres_config;

/// MongoDB connection settings.
pub mod mongodb_config;

/// RabbitMQ connection and queue settings.
pub mod rabbitmq_config;

/// Sentry error reporting configuration.
pub mod sentry_config;
