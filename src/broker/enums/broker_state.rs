use futures_util::future::{BoxFuture, Shared};
use crate::broker::structs::broker_handle::BrokerHandle;
use crate::common::enums::connector_error::ConnectorError;

/// The single in-flight connection attempt every concurrent caller awaits.
pub(crate) type PendingConnect<C, Ch> =
    Shared<BoxFuture<'static, Result<BrokerHandle<C, Ch>, ConnectorError>>>;

pub(crate) enum BrokerState<C, Ch> {
    Idle,
    Connecting(PendingConnect<C, Ch>),
    /// `generation` identifies the link so events from older links are ignored.
    Connected {
        handle: BrokerHandle<C, Ch>,
        generation: u64,
    },
}
