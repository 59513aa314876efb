use parking_lot::RwLock;
use crate::config::structs::mongodb_config::MongoDbConfig;
use crate::document::structs::document_backend_mongodb::DocumentBackendMongoDB;
use crate::document::traits::document_backend::DocumentBackend;

pub struct DocumentConnector<B: DocumentBackend = DocumentBackendMongoDB> {
    pub(crate) config: MongoDbConfig,
    pub(crate) backend: B,
    pub(crate) connection: RwLock<Option<B::Connection>>,
}
