use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct MongoDbConfig {
    pub uri: String,
    pub db_name: String,
}
