use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrokerStatus {
    pub connected: bool,
    pub channel: bool,
}
