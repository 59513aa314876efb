use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PostgresConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
    /// Maximum number of pooled connections.
    pub max_connections: u32,
    /// Idle pooled connections are closed after this many milliseconds.
    pub idle_timeout_ms: u64,
    /// Acquiring a connection fails after this many milliseconds.
    pub connect_timeout_ms: u64,
}
