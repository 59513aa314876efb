use crate::broker::structs::queue_topology::QueueTopology;
use crate::config::structs::rabbitmq_config::RabbitMqConfig;

impl Default for RabbitMqConfig {
    fn default() -> Self {
        Self {
            url: String::from("amqp://localhost:5672"),
            queue: String::from("api_hits"),
            publisher_confirm: false,
            retry_attempts: 5,
            retry_delay_ms: 1000,
        }
    }
}

impl RabbitMqConfig {
    pub fn dead_letter_queue(&self) -> String {
        QueueTopology::dead_letter_name(&self.queue)
    }
}
