use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// A queue assertion sent to the broker.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QueueDeclaration {
    pub name: String,
    pub durable: bool,
    pub arguments: BTreeMap<String, String>,
}
