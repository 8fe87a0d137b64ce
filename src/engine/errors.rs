use thiserror::Error;

use crate::engine::core::types::{ColumnId, DataType, PredicateCondition, Value};

/// Errors surfaced by the table-scan core.
///
/// None of these are recoverable inside a scan; the whole operation aborts
/// and the caller decides what to do.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScanError {
    #[error("search value {value} does not match column type {column_type}")]
    TypeMismatch { column_type: DataType, value: Value },

    #[error("predicate {0} is not supported by the table scan")]
    UnsupportedPredicate(PredicateCondition),

    #[error("no encoder or iterable registered for encoding {0}")]
    EncodingUnsupported(&'static str),

    #[error("segment invariant violated: {0}")]
    InvariantViolation(String),

    #[error("column id {0} is out of range")]
    ColumnOutOfRange(ColumnId),

    #[error("scan cancelled before completion")]
    Cancelled,
}
