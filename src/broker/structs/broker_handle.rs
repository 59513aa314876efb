/// The live (connection, channel) pair.
#[derive(Debug, Clone)]
pub struct BrokerHandle<C, Ch> {
    pub connection: C,
    pub channel: Ch,
}
