use log::{debug, error, info, warn};
use parking_lot::RwLock;
use crate::common::enums::connector_error::ConnectorError;
use crate::config::structs::mongodb_config::MongoDbConfig;
use crate::document::structs::document_backend_mongodb::DocumentBackendMongoDB;
use crate::document::structs::document_connector::DocumentConnector;
use crate::document::traits::document_backend::DocumentBackend;
use crate::utils::sentry_tracing::{finish_trace_transaction, start_trace_transaction};

impl DocumentConnector {
    pub fn new(config: MongoDbConfig) -> Self {
        Self::with_backend(config, DocumentBackendMongoDB)
    }
}

impl<B: DocumentBackend> DocumentConnector<B> {
    pub fn with_backend(config: MongoDbConfig, backend: B) -> Self {
        Self {
            config,
            backend,
            connection: RwLock::new(None),
        }
    }

    pub fn config(&self) -> &MongoDbConfig {
        &self.config
    }

    pub fn is_connected(&self) -> bool {
        self.connection.read().is_some()
    }

    /// Current connection, if any. Never connects.
    pub fn get_connection(&self) -> Option<B::Connection> {
        self.connection.read().clone()
    }

    pub async fn connect(&self) -> Result<B::Connection, ConnectorError> {
        let current = self.connection.read().clone();
        if let Some(connection) = current {
            debug!("[MongoDB] Already connected");
            return Ok(connection);
        }

        let transaction = start_trace_transaction("mongodb_connect", "database");
        let result = self.backend.open(&self.config).await;
        finish_trace_transaction(transaction, &result, &[("database", self.config.db_name.clone())]);
        let connection = match result {
            Ok(connection) => connection,
            Err(error) => {
                error!("[MongoDB] Connection error: {}", error);
                return Err(error);
            }
        };

        let existing = {
            let mut slot = self.connection.write();
            match slot.as_ref() {
                Some(existing) => Some(existing.clone()),
                None => {
                    *slot = Some(connection.clone());
                    None
                }
            }
        };

        match existing {
            Some(existing) => {
                debug!("[MongoDB] Concurrent connect finished first, closing duplicate connection");
                if let Err(error) = self.backend.close(connection).await {
                    warn!("[MongoDB] Unable to close duplicate connection: {}", error);
                }
                Ok(existing)
            }
            None => {
                info!("[MongoDB] Connected successfully to database '{}'", self.config.db_name);
                Ok(connection)
            }
        }
    }

    pub async fn disconnect(&self) -> Result<(), ConnectorError> {
        let connection = self.connection.write().take();
        let Some(connection) = connection else {
            debug!("[MongoDB] Not connected, nothing to disconnect");
            return Ok(());
        };
        match self.backend.close(connection).await {
            Ok(()) => {
                info!("[MongoDB] Disconnected successfully");
                Ok(())
            }
            Err(error) => {
                error!("[MongoDB] Disconnection error: {}", error);
                Err(error)
            }
        }
    }
}
