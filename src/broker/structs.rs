//! Broker connector structures.

/// AMQP backend.
pub mod broker_backend_amqp;

/// Connection manager and its shared state.
pub mod broker_connector;

/// Connection and channel pair.
pub mod broker_handle;

/// Status snapshot.
pub mod broker_status;

/// Queue assertion parameters.
pub mod queue_declaration;

/// Primary queue plus dead-letter queue.
pub mod queue_topology;
