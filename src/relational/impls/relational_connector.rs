use std::time::Instant;
use log::{debug, error, info, warn};
use parking_lot::RwLock;
use crate::common::enums::connector_error::ConnectorError;
use crate::config::structs::postgres_config::PostgresConfig;
use crate::relational::enums::query_param::QueryParam;
use crate::relational::structs::relational_backend_pgsql::RelationalBackendPgSQL;
use crate::relational::structs::relational_connector::RelationalConnector;
use crate::relational::traits::relational_backend::RelationalBackend;
use crate::utils::sentry_tracing::{finish_trace_transaction, start_trace_transaction};

impl RelationalConnector {
    pub fn new(config: PostgresConfig) -> Self {
        Self::with_backend(config, RelationalBackendPgSQL)
    }
}

impl<B: RelationalBackend> RelationalConnector<B> {
    /// Performs no IO; the pool is created on the first `connect()`.
    pub fn with_backend(config: PostgresConfig, backend: B) -> Self {
        Self {
            config,
            backend,
            pool: RwLock::new(None),
        }
    }

    pub fn config(&self) -> &PostgresConfig {
        &self.config
    }

    pub fn is_connected(&self) -> bool {
        self.pool.read().is_some()
    }

    pub fn pool(&self) -> Option<B::Pool> {
        self.pool.read().clone()
    }

    /// Returns the pool, creating it on first use.
    ///
    /// A failed handshake leaves the connector idle so the next call retries.
    /// If two first-time calls race, the pool stored first wins and the other
    /// one is closed.
    pub async fn connect(&self) -> Result<B::Pool, ConnectorError> {
        let current = self.pool.read().clone();
        if let Some(pool) = current {
            debug!("[PgSQL] Already connected");
            return Ok(pool);
        }

        let transaction = start_trace_transaction("postgres_connect", "database");
        let result = self.backend.create_pool(&self.config).await;
        finish_trace_transaction(transaction, &result, &[("address", self.config.address())]);
        let pool = match result {
            Ok(pool) => pool,
            Err(error) => {
                error!("[PgSQL] Connection error: {}", error);
                return Err(error);
            }
        };

        let existing = {
            let mut slot = self.pool.write();
            match slot.as_ref() {
                Some(existing) => Some(existing.clone()),
                None => {
                    *slot = Some(pool.clone());
                    None
                }
            }
        };

        match existing {
            Some(existing) => {
                debug!("[PgSQL] Concurrent connect finished first, closing duplicate pool");
                if let Err(error) = self.backend.close_pool(&pool).await {
                    warn!("[PgSQL] Unable to close duplicate pool: {}", error);
                }
                Ok(existing)
            }
            None => {
                info!("[PgSQL] Connected successfully to {}", self.config.address());
                Ok(pool)
            }
        }
    }

    pub async fn disconnect(&self) -> Result<(), ConnectorError> {
        let pool = self.pool.write().take();
        let Some(pool) = pool else {
            debug!("[PgSQL] Not connected, nothing to disconnect");
            return Ok(());
        };
        match self.backend.close_pool(&pool).await {
            Ok(()) => {
                info!("[PgSQL] Disconnected successfully");
                Ok(())
            }
            Err(error) => {
                error!("[PgSQL] Disconnection error: {}", error);
                Err(error)
            }
        }
    }

    /// Executes a parameterized statement, connecting first if needed.
    ///
    /// A failing statement does not touch the connection state.
    pub async fn query(&self, text: &str, params: &[QueryParam]) -> Result<B::Rows, ConnectorError> {
        let pool = self.connect().await?;
        let start = Instant::now();
        let result = self.backend.execute(&pool, text, params).await;
        let duration = start.elapsed().as_millis();
        match result {
            Ok(rows) => {
                debug!("[PgSQL] Query executed: {}, duration: {} ms", text, duration);
                Ok(rows)
            }
            Err(error) => {
                error!("[PgSQL] Query error after {} ms: {}", duration, error);
                Err(error)
            }
        }
    }

    /// Connects if needed and runs a liveness statement; returns the server time.
    pub async fn test_connection(&self) -> Result<String, ConnectorError> {
        let pool = self.connect().await?;
        match self.backend.ping(&pool).await {
            Ok(now) => {
                info!("[PgSQL] Test query result: {}", now);
                Ok(now)
            }
            Err(error) => {
                error!("[PgSQL] Test connection error: {}", error);
                Err(error)
            }
        }
    }
}
