//! Relational backend trait definitions.

pub mod relational_backend;
