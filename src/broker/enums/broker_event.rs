/// Asynchronous notification raised by a live broker connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrokerEvent {
    Error(String),
    Closed,
}
