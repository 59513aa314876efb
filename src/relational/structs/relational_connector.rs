use parking_lot::RwLock;
use crate::config::structs::postgres_config::PostgresConfig;
use crate::relational::structs::relational_backend_pgsql::RelationalBackendPgSQL;
use crate::relational::traits::relational_backend::RelationalBackend;

/// Lazily connected pool manager. `pool` is `None` while idle.
pub struct RelationalConnector<B: RelationalBackend = RelationalBackendPgSQL> {
    pub(crate) config: PostgresConfig,
    pub(crate) backend: B,
    pub(crate) pool: RwLock<Option<B::Pool>>,
}
