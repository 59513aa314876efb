use async_trait::async_trait;
use crate::common::enums::connector_error::ConnectorError;
use crate::config::structs::postgres_config::PostgresConfig;
use crate::relational::enums::query_param::QueryParam;

/// Driver seam for [`RelationalConnector`](crate::relational::structs::relational_connector::RelationalConnector).
#[async_trait]
pub trait RelationalBackend: Send + Sync + 'static {
    /// Shared pool handle. Clones refer to the same pool.
    type Pool: Clone + Send + Sync + 'static;
    type Rows: Send;

    /// Builds the pool and performs the initial handshake.
    async fn create_pool(&self, config: &PostgresConfig) -> Result<Self::Pool, ConnectorError>;

    async fn close_pool(&self, pool: &Self::Pool) -> Result<(), ConnectorError>;

    async fn execute(
        &self,
        pool: &Self::Pool,
        text: &str,
        params: &[QueryParam],
    ) -> Result<Self::Rows, ConnectorError>;

    /// Runs a trivial statement and returns the server time as text.
    async fn ping(&self, pool: &Self::Pool) -> Result<String, ConnectorError>;
}
