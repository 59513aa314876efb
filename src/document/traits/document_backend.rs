use async_trait::async_trait;
use crate::common::enums::connector_error::ConnectorError;
use crate::config::structs::mongodb_config::MongoDbConfig;

/// Driver seam for [`DocumentConnector`](crate::document::structs::document_connector::DocumentConnector).
#[async_trait]
pub trait DocumentBackend: Send + Sync + 'static {
    /// Multiplexed connection handle. Clones refer to the same connection.
    type Connection: Clone + Send + Sync + 'static;

    /// Opens and verifies a connection to the configured logical database.
    async fn open(&self, config: &MongoDbConfig) -> Result<Self::Connection, ConnectorError>;

    async fn close(&self, connection: Self::Connection) -> Result<(), ConnectorError>;
}
