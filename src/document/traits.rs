//! Document backend trait definitions.

pub mod document_backend;
