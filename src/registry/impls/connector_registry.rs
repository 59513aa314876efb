use log::{error, info};
use crate::broker::structs::broker_connector::BrokerConnector;
use crate::broker::traits::broker_backend::BrokerBackend;
use crate::common::enums::connector_error::ConnectorError;
use crate::config::structs::configuration::Configuration;
use crate::document::structs::document_connector::DocumentConnector;
use crate::document::traits::document_backend::DocumentBackend;
use crate::registry::structs::connector_registry::ConnectorRegistry;
use crate::relational::structs::relational_connector::RelationalConnector;
use crate::relational::traits::relational_backend::RelationalBackend;

impl ConnectorRegistry {
    pub fn new(config: &Configuration) -> Self {
        Self {
            relational: RelationalConnector::new(config.postgres.clone()),
            document: DocumentConnector::new(config.mongodb.clone()),
            broker: BrokerConnector::new(config.rabbitmq.clone()),
        }
    }
}

impl<R: RelationalBackend, D: DocumentBackend, B: BrokerBackend> ConnectorRegistry<R, D, B> {
    pub fn from_parts(
        relational: RelationalConnector<R>,
        document: DocumentConnector<D>,
        broker: BrokerConnector<B>,
    ) -> Self {
        Self {
            relational,
            document,
            broker,
        }
    }

    /// Connects relational, document and broker in that order, stopping at
    /// the first failure.
    pub async fn connect_all(&self) -> Result<(), ConnectorError> {
        info!("[BOOT] Connecting to PostgreSQL...");
        self.relational.connect().await?;
        info!("[BOOT] Connecting to MongoDB...");
        self.document.connect().await?;
        info!("[BOOT] Connecting to RabbitMQ...");
        self.broker.connect().await?;
        Ok(())
    }

    /// Closes every connector, even after a failure, and returns the first error.
    pub async fn shutdown(&self) -> Result<(), ConnectorError> {
        let results = [
            self.broker.close().await,
            self.document.disconnect().await,
            self.relational.disconnect().await,
        ];
        let mut first_error = None;
        for result in results {
            if let Err(error) = result {
                error!("[SHUTDOWN] {}", error);
                first_error.get_or_insert(error);
            }
        }
        match first_error {
            Some(error) => Err(error),
            None => {
                info!("[SHUTDOWN] All connections closed");
                Ok(())
            }
        }
    }
}
