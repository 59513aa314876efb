#![allow(dead_code)]
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use async_trait::async_trait;
use parking_lot::Mutex;
use backend_connectors::broker::enums::broker_event::BrokerEvent;
use backend_connectors::broker::structs::broker_connector::BrokerConnector;
use backend_connectors::broker::structs::queue_declaration::QueueDeclaration;
use backend_connectors::broker::traits::broker_backend::{BrokerBackend, BrokerObserver};
use backend_connectors::common::enums::connector_error::ConnectorError;
use backend_connectors::config::structs::mongodb_config::MongoDbConfig;
use backend_connectors::config::structs::postgres_config::PostgresConfig;
use backend_connectors::config::structs::rabbitmq_config::RabbitMqConfig;
use backend_connectors::document::structs::document_connector::DocumentConnector;
use backend_connectors::document::traits::document_backend::DocumentBackend;
use backend_connectors::relational::enums::query_param::QueryParam;
use backend_connectors::relational::structs::relational_connector::RelationalConnector;
use backend_connectors::relational::traits::relational_backend::RelationalBackend;

/// Every fake dial takes this long so concurrent callers overlap.
pub const DIAL_DELAY: Duration = Duration::from_millis(20);

// Relational

#[derive(Debug)]
pub struct FakePool {
    pub id: usize,
    pub closed: AtomicBool,
}

#[derive(Default)]
pub struct RelationalProbe {
    pub creates: AtomicUsize,
    pub closes: AtomicUsize,
    pub executed: Mutex<Vec<(String, Vec<QueryParam>)>>,
    pub fail_connect: AtomicBool,
    pub fail_query: AtomicBool,
    pub fail_ping: AtomicBool,
    pub fail_close: AtomicBool,
}

#[derive(Clone, Default)]
pub struct FakeRelationalBackend {
    pub probe: Arc<RelationalProbe>,
}

#[async_trait]
impl RelationalBackend for FakeRelationalBackend {
    type Pool = Arc<FakePool>;
    type Rows = Vec<String>;

    async fn create_pool(&self, config: &PostgresConfig) -> Result<Arc<FakePool>, ConnectorError> {
        tokio::time::sleep(DIAL_DELAY).await;
        let id = self.probe.creates.fetch_add(1, Ordering::SeqCst) + 1;
        if self.probe.fail_connect.load(Ordering::SeqCst) {
            return Err(ConnectorError::ConnectionError(format!("handshake with {} refused", config.address())));
        }
        Ok(Arc::new(FakePool { id, closed: AtomicBool::new(false) }))
    }

    async fn close_pool(&self, pool: &Arc<FakePool>) -> Result<(), ConnectorError> {
        self.probe.closes.fetch_add(1, Ordering::SeqCst);
        pool.closed.store(true, Ordering::SeqCst);
        if self.probe.fail_close.load(Ordering::SeqCst) {
            return Err(ConnectorError::DisconnectionError(String::from("pool end failed")));
        }
        Ok(())
    }

    async fn execute(&self, pool: &Arc<FakePool>, text: &str, params: &[QueryParam]) -> Result<Vec<String>, ConnectorError> {
        self.probe.executed.lock().push((text.to_string(), params.to_vec()));
        if self.probe.fail_query.load(Ordering::SeqCst) {
            return Err(ConnectorError::QueryError(String::from("syntax error at or near \"SELEC\"")));
        }
        Ok(vec![format!("pool-{}:{}", pool.id, text)])
    }

    async fn ping(&self, _pool: &Arc<FakePool>) -> Result<String, ConnectorError> {
        if self.probe.fail_ping.load(Ordering::SeqCst) {
            return Err(ConnectorError::ConnectionError(String::from("server closed the connection")));
        }
        Ok(String::from("2026-10-18 12:00:00+00"))
    }
}

pub fn relational_connector() -> (RelationalConnector<FakeRelationalBackend>, Arc<RelationalProbe>) {
    let backend = FakeRelationalBackend::default();
    let probe = backend.probe.clone();
    (RelationalConnector::with_backend(PostgresConfig::default(), backend), probe)
}

// Document

#[derive(Debug)]
pub struct FakeDocumentConnection {
    pub id: usize,
    pub db_name: String,
}

#[derive(Default)]
pub struct DocumentProbe {
    pub opens: AtomicUsize,
    pub closes: AtomicUsize,
    pub fail_open: AtomicBool,
    pub fail_close: AtomicBool,
}

#[derive(Clone, Default)]
pub struct FakeDocumentBackend {
    pub probe: Arc<DocumentProbe>,
}

#[async_trait]
impl DocumentBackend for FakeDocumentBackend {
    type Connection = Arc<FakeDocumentConnection>;

    async fn open(&self, config: &MongoDbConfig) -> Result<Arc<FakeDocumentConnection>, ConnectorError> {
        tokio::time::sleep(DIAL_DELAY).await;
        let id = self.probe.opens.fetch_add(1, Ordering::SeqCst) + 1;
        if self.probe.fail_open.load(Ordering::SeqCst) {
            return Err(ConnectorError::ConnectionError(String::from("server selection timeout")));
        }
        Ok(Arc::new(FakeDocumentConnection { id, db_name: config.db_name.clone() }))
    }

    async fn close(&self, _connection: Arc<FakeDocumentConnection>) -> Result<(), ConnectorError> {
        self.probe.closes.fetch_add(1, Ordering::SeqCst);
        if self.probe.fail_close.load(Ordering::SeqCst) {
            return Err(ConnectorError::DisconnectionError(String::from("shutdown failed")));
        }
        Ok(())
    }
}

pub fn document_connector() -> (DocumentConnector<FakeDocumentBackend>, Arc<DocumentProbe>) {
    let backend = FakeDocumentBackend::default();
    let probe = backend.probe.clone();
    (DocumentConnector::with_backend(MongoDbConfig::default(), backend), probe)
}

// Broker

pub struct FakeBrokerConnection {
    pub id: usize,
    pub closed: AtomicBool,
    observer: Mutex<Option<BrokerObserver>>,
}

impl fmt::Debug for FakeBrokerConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FakeBrokerConnection")
            .field("id", &self.id)
            .field("closed", &self.closed)
            .finish()
    }
}

impl FakeBrokerConnection {
    /// Delivers `event` the way the driver would from its IO thread.
    pub fn emit(&self, event: BrokerEvent) {
        if let Some(observer) = self.observer.lock().as_ref() {
            observer(event);
        }
    }
}

#[derive(Debug)]
pub struct FakeBrokerChannel {
    pub id: usize,
    pub confirm: bool,
    pub closed: AtomicBool,
}

#[derive(Default)]
pub struct BrokerProbe {
    pub dials: AtomicUsize,
    pub channels: AtomicUsize,
    pub declarations: Mutex<Vec<QueueDeclaration>>,
    pub close_order: Mutex<Vec<&'static str>>,
    pub connections: Mutex<Vec<Arc<FakeBrokerConnection>>>,
    pub fail_dial: AtomicBool,
    pub fail_declare: AtomicBool,
    pub fail_close_channel: AtomicBool,
    pub fail_close_connection: AtomicBool,
    pub drop_before_observe: AtomicBool,
    pub emit_on_observe: Mutex<Option<BrokerEvent>>,
}

impl BrokerProbe {
    pub fn dials(&self) -> usize {
        self.dials.load(Ordering::SeqCst)
    }

    pub fn connection(&self, index: usize) -> Arc<FakeBrokerConnection> {
        self.connections.lock()[index].clone()
    }

    pub fn declared_names(&self) -> Vec<String> {
        self.declarations.lock().iter().map(|d| d.name.clone()).collect()
    }
}

#[derive(Clone, Default)]
pub struct FakeBrokerBackend {
    pub probe: Arc<BrokerProbe>,
}

#[async_trait]
impl BrokerBackend for FakeBrokerBackend {
    type Connection = Arc<FakeBrokerConnection>;
    type Channel = Arc<FakeBrokerChannel>;

    async fn open_connection(&self, _url: &str) -> Result<Arc<FakeBrokerConnection>, ConnectorError> {
        tokio::time::sleep(DIAL_DELAY).await;
        let id = self.probe.dials.fetch_add(1, Ordering::SeqCst) + 1;
        if self.probe.fail_dial.load(Ordering::SeqCst) {
            return Err(ConnectorError::ConnectionError(String::from("ECONNREFUSED")));
        }
        let connection = Arc::new(FakeBrokerConnection {
            id,
            closed: AtomicBool::new(false),
            observer: Mutex::new(None),
        });
        self.probe.connections.lock().push(connection.clone());
        Ok(connection)
    }

    async fn create_channel(
        &self,
        _connection: &Arc<FakeBrokerConnection>,
        publisher_confirm: bool,
    ) -> Result<Arc<FakeBrokerChannel>, ConnectorError> {
        let id = self.probe.channels.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(Arc::new(FakeBrokerChannel { id, confirm: publisher_confirm, closed: AtomicBool::new(false) }))
    }

    async fn declare_queue(&self, _channel: &Arc<FakeBrokerChannel>, declaration: &QueueDeclaration) -> Result<(), ConnectorError> {
        if self.probe.fail_declare.load(Ordering::SeqCst) {
            return Err(ConnectorError::ConnectionError(format!("PRECONDITION_FAILED on '{}'", declaration.name)));
        }
        self.probe.declarations.lock().push(declaration.clone());
        Ok(())
    }

    fn observe(&self, connection: &Arc<FakeBrokerConnection>, observer: BrokerObserver) {
        // The driver dropped the link before anyone was listening.
        if self.probe.drop_before_observe.swap(false, Ordering::SeqCst) {
            connection.closed.store(true, Ordering::SeqCst);
        }
        *connection.observer.lock() = Some(observer);
        let pending = self.probe.emit_on_observe.lock().take();
        if let Some(event) = pending {
            connection.emit(event);
        }
    }

    fn is_open(&self, connection: &Arc<FakeBrokerConnection>) -> bool {
        !connection.closed.load(Ordering::SeqCst)
    }

    async fn close_channel(&self, channel: &Arc<FakeBrokerChannel>) -> Result<(), ConnectorError> {
        self.probe.close_order.lock().push("channel");
        if self.probe.fail_close_channel.load(Ordering::SeqCst) {
            return Err(ConnectorError::DisconnectionError(String::from("channel already closed")));
        }
        channel.closed.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn close_connection(&self, connection: &Arc<FakeBrokerConnection>) -> Result<(), ConnectorError> {
        self.probe.close_order.lock().push("connection");
        connection.closed.store(true, Ordering::SeqCst);
        if self.probe.fail_close_connection.load(Ordering::SeqCst) {
            return Err(ConnectorError::DisconnectionError(String::from("connection already closed")));
        }
        Ok(())
    }
}

pub fn broker_config() -> RabbitMqConfig {
    RabbitMqConfig::default()
}

pub fn broker_connector_with(config: RabbitMqConfig) -> (BrokerConnector<FakeBrokerBackend>, Arc<BrokerProbe>) {
    let backend = FakeBrokerBackend::default();
    let probe = backend.probe.clone();
    (BrokerConnector::with_backend(config, backend), probe)
}

pub fn broker_connector() -> (BrokerConnector<FakeBrokerBackend>, Arc<BrokerProbe>) {
    broker_connector_with(broker_config())
}
