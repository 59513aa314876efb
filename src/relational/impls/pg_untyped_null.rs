use sqlx::encode::{Encode, IsNull};
use sqlx::error::BoxDynError;
use sqlx::postgres::types::Oid;
use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo};
use sqlx::{Postgres, Type};
use crate::relational::structs::pg_untyped_null::PgUntypedNull;

/// Postgres reads OID 0 in a Parse message as "unspecified".
pub const UNSPECIFIED_OID: Oid = Oid(0);

impl Type<Postgres> for PgUntypedNull {
    fn type_info() -> PgTypeInfo {
        PgTypeInfo::with_oid(UNSPECIFIED_OID)
    }
}

impl Encode<'_, Postgres> for PgUntypedNull {
    fn encode_by_ref(&self, _buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        Ok(IsNull::Yes)
    }
}
