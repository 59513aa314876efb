//! Relational enumerations.

/// Statement parameters.
pub mod query_param;
