//! Document connector structures.

/// Connection manager for the document store.
pub mod document_connector;

/// MongoDB backend and connection handle.
pub mod document_backend_mongodb;
