//! Implementation blocks for the document connector.

pub mod document_backend_mongodb;
pub mod document_connector;
