use std::sync::Arc;
use async_trait::async_trait;
use lapin::options::{ConfirmSelectOptions, QueueDeclareOptions};
use lapin::types::{AMQPValue, FieldTable, LongString, ShortString};
use lapin::{Channel, Connection, ConnectionProperties};
use crate::broker::enums::broker_event::BrokerEvent;
use crate::broker::structs::broker_backend_amqp::BrokerBackendAmqp;
use crate::broker::structs::queue_declaration::QueueDeclaration;
use crate::broker::traits::broker_backend::{BrokerBackend, BrokerObserver};
use crate::common::enums::connector_error::ConnectorError;

const REPLY_SUCCESS: u16 = 200;

impl BrokerBackendAmqp {
    pub fn arguments_table(declaration: &QueueDeclaration) -> FieldTable {
        let mut table = FieldTable::default();
        for (key, value) in &declaration.arguments {
            table.insert(
                ShortString::from(key.clone()),
                AMQPValue::LongString(LongString::from(value.clone())),
            );
        }
        table
    }

    /// lapin reports a closed link as an invalid connection state.
    pub fn event_for(error: &lapin::Error) -> BrokerEvent {
        match error {
            lapin::Error::InvalidConnectionState(_) => BrokerEvent::Closed,
            other => BrokerEvent::Error(other.to_string()),
        }
    }
}

#[async_trait]
impl BrokerBackend for BrokerBackendAmqp {
    type Connection = Arc<Connection>;
    type Channel = Channel;

    async fn open_connection(&self, url: &str) -> Result<Arc<Connection>, ConnectorError> {
        Connection::connect(url, ConnectionProperties::default())
            .await
            .map(Arc::new)
            .map_err(|e| ConnectorError::connection("[RabbitMQ] Unable to connect", e))
    }

    async fn create_channel(
        &self,
        connection: &Arc<Connection>,
        publisher_confirm: bool,
    ) -> Result<Channel, ConnectorError> {
        let channel = connection
            .create_channel()
            .await
            .map_err(|e| ConnectorError::connection("[RabbitMQ] Unable to create channel", e))?;
        if publisher_confirm {
            channel
                .confirm_select(ConfirmSelectOptions::default())
                .await
                .map_err(|e| ConnectorError::connection("[RabbitMQ] Unable to enable publisher confirms", e))?;
        }
        Ok(channel)
    }

    async fn declare_queue(&self, channel: &Channel, declaration: &QueueDeclaration) -> Result<(), ConnectorError> {
        let options = QueueDeclareOptions {
            durable: declaration.durable,
            ..QueueDeclareOptions::default()
        };
        channel
            .queue_declare(&declaration.name, options, Self::arguments_table(declaration))
            .await
            .map(|_| ())
            .map_err(|e| ConnectorError::connection(&format!("[RabbitMQ] Unable to assert queue '{}'", declaration.name), e))
    }

    fn observe(&self, connection: &Arc<Connection>, observer: BrokerObserver) {
        connection.on_error(move |error| observer(Self::event_for(&error)));
    }

    fn is_open(&self, connection: &Arc<Connection>) -> bool {
        connection.status().connected()
    }

    async fn close_channel(&self, channel: &Channel) -> Result<(), ConnectorError> {
        channel
            .close(REPLY_SUCCESS, "Bye")
            .await
            .map_err(|e| ConnectorError::disconnection("[RabbitMQ] Unable to close channel", e))
    }

    async fn close_connection(&self, connection: &Arc<Connection>) -> Result<(), ConnectorError> {
        connection
            .close(REPLY_SUCCESS, "Bye")
            .await
            .map_err(|e| ConnectorError::disconnection("[RabbitMQ] Unable to close connection", e))
    }
}
