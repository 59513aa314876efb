use crate::broker::enums::broker_connection_state::BrokerConnectionState;
use crate::broker::enums::broker_state::BrokerState;

impl<C, Ch> BrokerState<C, Ch> {
    pub(crate) fn kind(&self) -> BrokerConnectionState {
        match self {
            BrokerState::Idle => BrokerConnectionState::Idle,
            BrokerState::Connecting(_) => BrokerConnectionState::Connecting,
            BrokerState::Connected { .. } => BrokerConnectionState::Connected,
        }
    }

    pub(crate) fn is_connected_with(&self, generation: u64) -> bool {
        matches!(self, BrokerState::Connected { generation: current, .. } if *current == generation)
    }
}
