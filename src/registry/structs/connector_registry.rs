use crate::broker::structs::broker_backend_amqp::BrokerBackendAmqp;
use crate::broker::structs::broker_connector::BrokerConnector;
use crate::broker::traits::broker_backend::BrokerBackend;
use crate::document::structs::document_backend_mongodb::DocumentBackendMongoDB;
use crate::document::structs::document_connector::DocumentConnector;
use crate::document::traits::document_backend::DocumentBackend;
use crate::relational::structs::relational_backend_pgsql::RelationalBackendPgSQL;
use crate::relational::structs::relational_connector::RelationalConnector;
use crate::relational::traits::relational_backend::RelationalBackend;

/// One manager per resource, built once at startup and shared by reference.
pub struct ConnectorRegistry<
    R: RelationalBackend = RelationalBackendPgSQL,
    D: DocumentBackend = DocumentBackendMongoDB,
    B: BrokerBackend = BrokerBackendAmqp,
> {
    pub relational: RelationalConnector<R>,
    pub document: DocumentConnector<D>,
    pub broker: BrokerConnector<B>,
}
