use crate::common::enums::connector_error::ConnectorError;

impl ConnectorError {
    pub fn connection(context: &str, error: impl std::fmt::Display) -> Self {
        ConnectorError::ConnectionError(format!("{}: {}", context, error))
    }

    pub fn query(context: &str, error: impl std::fmt::Display) -> Self {
        ConnectorError::QueryError(format!("{}: {}", context, error))
    }

    pub fn disconnection(context: &str, error: impl std::fmt::Display) -> Self {
        ConnectorError::DisconnectionError(format!("{}: {}", context, error))
    }

    /// The message without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            ConnectorError::ConnectionError(message)
            | ConnectorError::QueryError(message)
            | ConnectorError::DisconnectionError(message)
            | ConnectorError::ChannelUnavailableError(message) => message,
        }
    }

    pub fn is_connection_error(&self) -> bool {
        matches!(self, ConnectorError::ConnectionError(_))
    }
}
