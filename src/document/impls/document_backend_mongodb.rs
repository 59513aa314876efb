use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use crate::common::enums::connector_error::ConnectorError;
use crate::config::structs::mongodb_config::MongoDbConfig;
use crate::document::structs::document_backend_mongodb::{DocumentBackendMongoDB, MongoDbConnection};
use crate::document::traits::document_backend::DocumentBackend;

impl MongoDbConnection {
    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.database.collection(name)
    }
}

#[async_trait]
impl DocumentBackend for DocumentBackendMongoDB {
    type Connection = MongoDbConnection;

    async fn open(&self, config: &MongoDbConfig) -> Result<MongoDbConnection, ConnectorError> {
        let mut options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|e| ConnectorError::connection("[MongoDB] Invalid connection URI", e))?;
        options.default_database = Some(config.db_name.clone());
        let client = Client::with_options(options)
            .map_err(|e| ConnectorError::connection("[MongoDB] Unable to create client", e))?;
        let database = client.database(&config.db_name);

        // The driver connects lazily; a ping forces the handshake.
        if let Err(error) = database.run_command(doc! { "ping": 1 }).await {
            client.shutdown().await;
            return Err(ConnectorError::connection(
                &format!("[MongoDB] Unable to reach database '{}'", config.db_name),
                error,
            ));
        }

        Ok(MongoDbConnection { client, database })
    }

    async fn close(&self, connection: MongoDbConnection) -> Result<(), ConnectorError> {
        connection.client.shutdown().await;
        Ok(())
    }
}
