//! Broker enumerations.

/// Public lifecycle state (idle, connecting, connected).
pub mod broker_connection_state;

/// Connection error/close notifications.
pub mod broker_event;

/// Internal state machine.
pub(crate) mod broker_state;
