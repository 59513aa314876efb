use std::fmt;
use crate::broker::enums::broker_connection_state::BrokerConnectionState;

impl fmt::Display for BrokerConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrokerConnectionState::Idle => write!(f, "idle"),
            BrokerConnectionState::Connecting => write!(f, "connecting"),
            BrokerConnectionState::Connected => write!(f, "connected"),
        }
    }
}
