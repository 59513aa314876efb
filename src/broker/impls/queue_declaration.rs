use std::collections::BTreeMap;
use crate::broker::structs::queue_declaration::QueueDeclaration;

pub const DEAD_LETTER_EXCHANGE_ARGUMENT: &str = "x-dead-letter-exchange";
pub const DEAD_LETTER_ROUTING_KEY_ARGUMENT: &str = "x-dead-letter-routing-key";
/// The default (nameless) exchange.
pub const DEFAULT_EXCHANGE: &str = "";

impl QueueDeclaration {
    pub fn durable(name: &str) -> Self {
        Self {
            name: name.to_string(),
            durable: true,
            arguments: BTreeMap::new(),
        }
    }

    /// Dead-letters rejected or expired messages to `queue` through the default exchange.
    pub fn with_dead_letter_queue(mut self, queue: &str) -> Self {
        self.arguments.insert(DEAD_LETTER_EXCHANGE_ARGUMENT.to_string(), DEFAULT_EXCHANGE.to_string());
        self.arguments.insert(DEAD_LETTER_ROUTING_KEY_ARGUMENT.to_string(), queue.to_string());
        self
    }

    pub fn dead_letter_routing_key(&self) -> Option<&str> {
        self.arguments.get(DEAD_LETTER_ROUTING_KEY_ARGUMENT).map(String::as_str)
    }
}
