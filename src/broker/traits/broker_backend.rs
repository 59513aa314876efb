use async_trait::async_trait;
use crate::broker::enums::broker_event::BrokerEvent;
use crate::broker::structs::queue_declaration::QueueDeclaration;
use crate::common::enums::connector_error::ConnectorError;

pub type BrokerObserver = Box<dyn Fn(BrokerEvent) + Send + Sync>;

/// Driver seam for [`BrokerConnector`](crate::broker::structs::broker_connector::BrokerConnector).
#[async_trait]
pub trait BrokerBackend: Send + Sync + 'static {
    type Connection: Clone + Send + Sync + 'static;
    type Channel: Clone + Send + Sync + 'static;

    async fn open_connection(&self, url: &str) -> Result<Self::Connection, ConnectorError>;

    /// Opens a channel, in publisher confirm mode when `publisher_confirm` is set.
    async fn create_channel(
        &self,
        connection: &Self::Connection,
        publisher_confirm: bool,
    ) -> Result<Self::Channel, ConnectorError>;

    async fn declare_queue(
        &self,
        channel: &Self::Channel,
        declaration: &QueueDeclaration,
    ) -> Result<(), ConnectorError>;

    /// Registers `observer` for error and close notifications on `connection`.
    fn observe(&self, connection: &Self::Connection, observer: BrokerObserver);

    /// Whether `connection` is still usable. Checked once the observer is in
    /// place, to catch a link that dropped before it could report.
    fn is_open(&self, connection: &Self::Connection) -> bool;

    async fn close_channel(&self, channel: &Self::Channel) -> Result<(), ConnectorError>;

    async fn close_connection(&self, connection: &Self::Connection) -> Result<(), ConnectorError>;
}
