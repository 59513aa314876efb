use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use parking_lot::Mutex;
use crate::broker::enums::broker_state::BrokerState;
use crate::broker::structs::broker_backend_amqp::BrokerBackendAmqp;
use crate::broker::traits::broker_backend::BrokerBackend;
use crate::config::structs::rabbitmq_config::RabbitMqConfig;

/// Broker connection manager. Clones share the same state.
pub struct BrokerConnector<B: BrokerBackend = BrokerBackendAmqp> {
    pub(crate) inner: Arc<BrokerConnectorInner<B>>,
}

pub(crate) struct BrokerConnectorInner<B: BrokerBackend> {
    pub(crate) config: RabbitMqConfig,
    pub(crate) backend: B,
    pub(crate) state: Mutex<BrokerState<B::Connection, B::Channel>>,
    pub(crate) generation: AtomicU64,
    /// Generation of a link that reported an event before it was marked connected.
    pub(crate) lost_generation: AtomicU64,
}
