use crate::broker::structs::queue_declaration::QueueDeclaration;

/// A primary queue wired to its dead-letter queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueTopology {
    pub dead_letter: QueueDeclaration,
    pub primary: QueueDeclaration,
}
