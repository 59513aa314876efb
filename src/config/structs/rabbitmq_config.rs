use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RabbitMqConfig {
    pub url: String,
    /// Primary queue; its dead-letter queue is `<queue>.dlq`.
    pub queue: String,
    pub publisher_confirm: bool,
    pub retry_attempts: u32,
    pub retry_delay_ms: u64,
}
