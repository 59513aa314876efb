/// AMQP 0.9.1 backend built on `lapin`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrokerBackendAmqp;
