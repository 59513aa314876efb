use crate::broker::structs::queue_declaration::QueueDeclaration;
use crate::broker::structs::queue_topology::QueueTopology;

pub const DEAD_LETTER_SUFFIX: &str = ".dlq";

impl QueueTopology {
    pub fn dead_letter_name(queue: &str) -> String {
        format!("{}{}", queue, DEAD_LETTER_SUFFIX)
    }

    pub fn for_queue(queue: &str) -> Self {
        let dead_letter_name = Self::dead_letter_name(queue);
        Self {
            primary: QueueDeclaration::durable(queue).with_dead_letter_queue(&dead_letter_name),
            dead_letter: QueueDeclaration::durable(&dead_letter_name),
        }
    }

    /// Declarations in assertion order: the dead-letter queue must exist
    /// before the primary queue references it.
    pub fn declarations(&self) -> [&QueueDeclaration; 2] {
        [&self.dead_letter, &self.primary]
    }
}
