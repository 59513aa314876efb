//! Broker backend trait definitions.

pub mod broker_backend;
