//! Implementation blocks for the broker connector.

pub mod broker_backend_amqp;
pub mod broker_connection_state;
pub mod broker_connector;
pub(crate) mod broker_state;
pub mod queue_declaration;
pub mod queue_topology;
