use std::time::Duration;
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgRow};
use sqlx::{ConnectOptions, Pool, Postgres};
use crate::common::enums::connector_error::ConnectorError;
use crate::config::structs::postgres_config::PostgresConfig;
use crate::relational::enums::query_param::QueryParam;
use crate::relational::structs::pg_untyped_null::PgUntypedNull;
use crate::relational::structs::relational_backend_pgsql::RelationalBackendPgSQL;
use crate::relational::traits::relational_backend::RelationalBackend;

impl RelationalBackendPgSQL {
    pub fn connect_options(config: &PostgresConfig) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .database(&config.database)
            .username(&config.user)
            .password(&config.password)
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1))
    }

    pub fn pool_options(config: &PostgresConfig) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(config.max_connections)
            .idle_timeout(config.idle_timeout())
            .acquire_timeout(config.connect_timeout())
    }
}

#[async_trait]
impl RelationalBackend for RelationalBackendPgSQL {
    type Pool = Pool<Postgres>;
    type Rows = Vec<PgRow>;

    async fn create_pool(&self, config: &PostgresConfig) -> Result<Pool<Postgres>, ConnectorError> {
        // connect_with opens the first connection, which is the handshake.
        Self::pool_options(config)
            .connect_with(Self::connect_options(config))
            .await
            .map_err(|e| ConnectorError::connection(&format!("[PgSQL] Unable to connect to {}", config.address()), e))
    }

    async fn close_pool(&self, pool: &Pool<Postgres>) -> Result<(), ConnectorError> {
        pool.close().await;
        Ok(())
    }

    async fn execute(
        &self,
        pool: &Pool<Postgres>,
        text: &str,
        params: &[QueryParam],
    ) -> Result<Vec<PgRow>, ConnectorError> {
        let mut query = sqlx::query(text);
        for param in params {
            query = match param {
                QueryParam::Null => query.bind(PgUntypedNull),
                QueryParam::Bool(value) => query.bind(*value),
                QueryParam::Int(value) => query.bind(*value),
                QueryParam::BigInt(value) => query.bind(*value),
                QueryParam::Float(value) => query.bind(*value),
                QueryParam::Text(value) => query.bind(value.clone()),
            };
        }
        query
            .fetch_all(pool)
            .await
            .map_err(|e| ConnectorError::query("[PgSQL] Query failed", e))
    }

    async fn ping(&self, pool: &Pool<Postgres>) -> Result<String, ConnectorError> {
        sqlx::query_scalar::<_, String>("SELECT NOW()::text")
            .fetch_one(pool)
            .await
            .map_err(|e| ConnectorError::connection("[PgSQL] Liveness query failed", e))
    }
}
