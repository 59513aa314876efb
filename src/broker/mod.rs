//! Message broker connector (RabbitMQ).
//!
//! [`BrokerConnector`](structs::broker_connector::BrokerConnector) owns one
//! connection and one channel and cycles between three states:
//!
//! - **Idle**: no link and no attempt in flight
//! - **Connecting**: a single shared attempt is in flight
//! - **Connected**: connection and channel are live
//!
//! Every successful connect asserts the dead-letter queue `<queue>.dlq`
//! before the primary queue, whose `x-dead-letter-routing-key` points at it.
//! An error or close event on the live link moves the connector back to Idle;
//! the next `connect()` dials again and re-asserts both queues.
//!
//! # Example
//!
//! ```rust,ignore
//! use backend_connectors::broker::structs::broker_connector::BrokerConnector;
//!
//! let broker = BrokerConnector::new(config.rabbitmq.clone());
//! let handle = broker.connect().await?;
//! let channel = broker.get_channel()?;
//! broker.close().await?;
//! ```

/// Broker state and event enumerations.
pub mod enums;

/// Implementation blocks for the connector, AMQP backend and queue topology.
pub mod impls;

/// Connector, handle, status and queue structures.
pub mod structs;

/// Backend trait definitions.
pub mod traits;
