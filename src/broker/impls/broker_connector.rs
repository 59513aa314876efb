use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use futures_util::future::FutureExt;
use log::{debug, error, info, warn};
use parking_lot::Mutex;
use crate::broker::enums::broker_connection_state::BrokerConnectionState;
use crate::broker::enums::broker_event::BrokerEvent;
use crate::broker::enums::broker_state::{BrokerState, PendingConnect};
use crate::broker::structs::broker_backend_amqp::BrokerBackendAmqp;
use crate::broker::structs::broker_connector::{BrokerConnector, BrokerConnectorInner};
use crate::broker::structs::broker_handle::BrokerHandle;
use crate::broker::structs::broker_status::BrokerStatus;
use crate::broker::structs::queue_topology::QueueTopology;
use crate::broker::traits::broker_backend::{BrokerBackend, BrokerObserver};
use crate::common::enums::connector_error::ConnectorError;
use crate::config::structs::rabbitmq_config::RabbitMqConfig;
use crate::utils::sentry_tracing::{finish_trace_transaction, start_trace_transaction};

type Handle<B> = BrokerHandle<<B as BrokerBackend>::Connection, <B as BrokerBackend>::Channel>;

impl BrokerConnector {
    pub fn new(config: RabbitMqConfig) -> Self {
        Self::with_backend(config, BrokerBackendAmqp)
    }
}

impl<B: BrokerBackend> Clone for BrokerConnector<B> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<B: BrokerBackend> fmt::Debug for BrokerConnector<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrokerConnector")
            .field("queue", &self.inner.config.queue)
            .field("state", &self.state())
            .finish()
    }
}

impl<B: BrokerBackend> BrokerConnector<B> {
    /// Performs no IO; the link is established on the first `connect()`.
    pub fn with_backend(config: RabbitMqConfig, backend: B) -> Self {
        Self {
            inner: Arc::new(BrokerConnectorInner {
                config,
                backend,
                state: Mutex::new(BrokerState::Idle),
                generation: AtomicU64::new(0),
                lost_generation: AtomicU64::new(0),
            }),
        }
    }

    pub fn config(&self) -> &RabbitMqConfig {
        &self.inner.config
    }

    pub fn topology(&self) -> QueueTopology {
        QueueTopology::for_queue(&self.inner.config.queue)
    }

    pub fn state(&self) -> BrokerConnectionState {
        self.inner.state.lock().kind()
    }

    pub fn get_status(&self) -> BrokerStatus {
        let connected = self.state() == BrokerConnectionState::Connected;
        BrokerStatus {
            connected,
            channel: connected,
        }
    }

    /// The current channel. Never connects.
    pub fn get_channel(&self) -> Result<B::Channel, ConnectorError> {
        match &*self.inner.state.lock() {
            BrokerState::Connected { handle, .. } => Ok(handle.channel.clone()),
            _ => Err(ConnectorError::ChannelUnavailableError(String::from(
                "RabbitMQ channel is not available",
            ))),
        }
    }

    pub fn get_connection(&self) -> Option<B::Connection> {
        match &*self.inner.state.lock() {
            BrokerState::Connected { handle, .. } => Some(handle.connection.clone()),
            _ => None,
        }
    }

    /// Returns the live (connection, channel) pair, establishing it if needed.
    ///
    /// Concurrent callers share one attempt and all observe its outcome,
    /// including its failure. Must be called from within a tokio runtime.
    pub async fn connect(&self) -> Result<Handle<B>, ConnectorError> {
        let pending = {
            let mut state = self.inner.state.lock();
            match &*state {
                BrokerState::Connected { handle, .. } => {
                    debug!("[RabbitMQ] Already connected");
                    return Ok(handle.clone());
                }
                BrokerState::Connecting(pending) => {
                    debug!("[RabbitMQ] Connection attempt in flight, waiting for it");
                    pending.clone()
                }
                BrokerState::Idle => {
                    let pending = BrokerConnectorInner::spawn_connect(self.inner.clone());
                    *state = BrokerState::Connecting(pending.clone());
                    pending
                }
            }
        };
        pending.await
    }

    /// Closes the channel, then the connection.
    ///
    /// Local state is cleared even when a close fails. An attempt in flight is
    /// awaited first and the resulting link closed.
    pub async fn close(&self) -> Result<(), ConnectorError> {
        let pending = match &*self.inner.state.lock() {
            BrokerState::Connecting(pending) => Some(pending.clone()),
            _ => None,
        };
        if let Some(pending) = pending {
            debug!("[RabbitMQ] Waiting for in-flight connection attempt before closing");
            let _ = pending.await;
        }

        let handle = {
            let mut state = self.inner.state.lock();
            match std::mem::replace(&mut *state, BrokerState::Idle) {
                BrokerState::Connected { handle, .. } => Some(handle),
                other => {
                    *state = other;
                    None
                }
            }
        };
        let Some(handle) = handle else {
            debug!("[RabbitMQ] Not connected, nothing to close");
            return Ok(());
        };

        let mut failures = Vec::new();
        if let Err(error) = self.inner.backend.close_channel(&handle.channel).await {
            failures.push(error.message().to_string());
        }
        if let Err(error) = self.inner.backend.close_connection(&handle.connection).await {
            failures.push(error.message().to_string());
        }

        if failures.is_empty() {
            info!("[RabbitMQ] Connection closed successfully");
            Ok(())
        } else {
            let message = failures.join("; ");
            error!("[RabbitMQ] Disconnection error: {}", message);
            Err(ConnectorError::DisconnectionError(message))
        }
    }
}

impl<B: BrokerBackend> BrokerConnectorInner<B> {
    /// Spawns the attempt so it completes even if every caller is cancelled.
    fn spawn_connect(inner: Arc<Self>) -> PendingConnect<B::Connection, B::Channel> {
        let task = tokio::spawn(Self::establish(inner.clone()));
        async move {
            match task.await {
                Ok(result) => result,
                Err(join_error) => {
                    let mut state = inner.state.lock();
                    if state.kind() == BrokerConnectionState::Connecting {
                        *state = BrokerState::Idle;
                    }
                    Err(ConnectorError::ConnectionError(format!(
                        "[RabbitMQ] Connection task failed: {}",
                        join_error
                    )))
                }
            }
        }
        .boxed()
        .shared()
    }

    async fn establish(inner: Arc<Self>) -> Result<Handle<B>, ConnectorError> {
        let transaction = start_trace_transaction("rabbitmq_connect", "broker");
        let result = match inner.open_and_provision().await {
            Ok(handle) => Self::activate(&inner, handle).await,
            Err(error) => {
                *inner.state.lock() = BrokerState::Idle;
                Err(error)
            }
        };
        finish_trace_transaction(transaction, &result, &[("queue", inner.config.queue.clone())]);
        if let Err(error) = &result {
            error!("[RabbitMQ] Connection error: {}", error);
        }
        result
    }

    async fn open_and_provision(&self) -> Result<Handle<B>, ConnectorError> {
        let connection = self.backend.open_connection(&self.config.url).await?;
        match self.provision(&connection).await {
            Ok(channel) => Ok(BrokerHandle { connection, channel }),
            Err(error) => {
                if let Err(close_error) = self.backend.close_connection(&connection).await {
                    warn!("[RabbitMQ] Unable to close half-open connection: {}", close_error);
                }
                Err(error)
            }
        }
    }

    async fn provision(&self, connection: &B::Connection) -> Result<B::Channel, ConnectorError> {
        let channel = self
            .backend
            .create_channel(connection, self.config.publisher_confirm)
            .await?;
        info!("[RabbitMQ] Connected, provisioning queues");

        let topology = QueueTopology::for_queue(&self.config.queue);
        for declaration in topology.declarations() {
            self.backend.declare_queue(&channel, declaration).await?;
            debug!("[RabbitMQ] Asserted durable queue '{}'", declaration.name);
        }
        Ok(channel)
    }

    /// Registers the event observer and publishes the link as connected, unless
    /// it already reported an error or close, or is no longer open.
    async fn activate(inner: &Arc<Self>, handle: Handle<B>) -> Result<Handle<B>, ConnectorError> {
        let generation = inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        inner
            .backend
            .observe(&handle.connection, Self::observer(Arc::downgrade(inner), generation));

        let open = inner.backend.is_open(&handle.connection);
        let lost = {
            let mut state = inner.state.lock();
            if !open || inner.lost_generation.load(Ordering::SeqCst) == generation {
                *state = BrokerState::Idle;
                true
            } else {
                *state = BrokerState::Connected {
                    handle: handle.clone(),
                    generation,
                };
                false
            }
        };

        if lost {
            if let Err(close_error) = inner.backend.close_connection(&handle.connection).await {
                warn!("[RabbitMQ] Unable to close lost connection: {}", close_error);
            }
            return Err(ConnectorError::ConnectionError(String::from(
                "[RabbitMQ] Connection lost while queues were being provisioned",
            )));
        }
        info!("[RabbitMQ] Connected successfully, queue '{}' ready", inner.config.queue);
        Ok(handle)
    }

    fn observer(inner: Weak<Self>, generation: u64) -> BrokerObserver {
        Box::new(move |event| {
            if let Some(inner) = inner.upgrade() {
                inner.handle_event(generation, event);
            }
        })
    }

    /// Connected(generation) -> Idle on error or close. Events from other
    /// links leave the state alone.
    fn handle_event(&self, generation: u64, event: BrokerEvent) {
        let mut state = self.state.lock();
        if state.is_connected_with(generation) {
            match &event {
                BrokerEvent::Error(message) => error!("[RabbitMQ] Connection error: {}", message),
                BrokerEvent::Closed => warn!("[RabbitMQ] Connection closed"),
            }
            *state = BrokerState::Idle;
            return;
        }
        if state.kind() == BrokerConnectionState::Connecting {
            self.lost_generation.store(generation, Ordering::SeqCst);
        }
        debug!("[RabbitMQ] Ignoring {:?} from connection generation {}", event, generation);
    }
}
