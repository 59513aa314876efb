//! Implementation blocks for the relational connector.

pub mod pg_untyped_null;
pub mod query_param;
pub mod relational_backend_pgsql;
pub mod relational_connector;
