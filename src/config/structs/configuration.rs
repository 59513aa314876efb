use serde::{Deserialize, Serialize};
use crate::config::structs::mongodb_config::MongoDbConfig;
use crate::config::structs::postgres_config::PostgresConfig;
use crate::config::structs::rabbitmq_config::RabbitMqConfig;
use crate::config::structs::sentry_config::SentryConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Configuration {
    pub log_level: String,
    pub postgres: PostgresConfig,
    pub mongodb: MongoDbConfig,
    pub rabbitmq: RabbitMqConfig,
    pub sentry_config: SentryConfig,
}
