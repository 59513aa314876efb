//! Implementation blocks for configuration loading, overriding and validation.

/// Root configuration: defaults, file IO, environment overrides, validation.
pub mod configuration;

/// `Display` and `Error` for `ConfigurationError`.
pub mod configuration_error;

/// PostgreSQL defaults and helpers.
pub mod postgres_config;

/// MongoDB defaults.
pub mod mongodb_config;

/// RabbitMQ defaults and queue naming.
pub mod rabbitmq_config;

/// Sentry defaults.
pub mod sentry_config;
