/// PostgreSQL backend built on a `sqlx` pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelationalBackendPgSQL;
