//! Tracing helpers.

/// Optional Sentry transactions around connection attempts.
pub mod sentry_tracing;
