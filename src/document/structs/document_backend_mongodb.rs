use mongodb::{Client, Database};

/// MongoDB backend built on the official driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentBackendMongoDB;

/// A connected client together with its selected logical database.
#[derive(Debug, Clone)]
pub struct MongoDbConnection {
    pub(crate) client: Client,
    pub(crate) database: Database,
}
