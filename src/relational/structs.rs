//! Relational connector structures.

/// Pool manager providing connect, query and shutdown.
pub mod relational_connector;

/// PostgreSQL backend.
pub mod relational_backend_pgsql;

/// Untyped NULL bind value.
pub mod pg_untyped_null;
