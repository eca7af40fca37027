//! Error types for flatgeo.

use thiserror::Error;

use crate::nested::ListId;

/// Primary error type for record construction and nested-structure building.
///
/// Flattening itself never fails: malformed elements are skipped, not reported.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlatgeoError {
    #[error("located record is missing required fields: {}", .fields.join(", "))]
    MissingFields { fields: Vec<&'static str> },

    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },

    #[error("duplicate record id: {0}")]
    DuplicateId(i64),

    #[error("list not found in arena: {0}")]
    UnknownList(ListId),
}

/// Convenience Result type alias for FlatgeoError.
pub type Result<T> = std::result::Result<T, FlatgeoError>;
