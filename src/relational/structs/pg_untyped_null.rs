/// A NULL parameter sent with no declared type (OID 0), so the server infers
/// it from the statement like any untyped literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PgUntypedNull;
