use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectorError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Disconnection error: {0}")]
    DisconnectionError(String),

    #[error("Channel unavailable: {0}")]
    ChannelUnavailableError(String),
}
