use serde::{Deserialize, Serialize};

/// Observable lifecycle state of a broker connector.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BrokerConnectionState {
    Idle,
    Connecting,
    Connected,
}
