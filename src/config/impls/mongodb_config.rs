use crate::config::structs::mongodb_config::MongoDbConfig;

impl Default for MongoDbConfig {
    fn default() -> Self {
        Self {
            uri: String::from("mongodb://localhost:27017"),
            db_name: String::from("mydb"),
        }
    }
}
