use rust_decimal::Decimal;
use thiserror::Error;

use super::ColumnType;

/// Errors raised while processing a single row.
///
/// Every variant is terminal for the row: no output value is written for it,
/// and the block driver stops at the first one.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RowError {
    /// An argument is outside its accepted domain.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A required argument is NULL.
    #[error("NULL value: {0}")]
    NullValue(String),

    /// An argument does not have the declared column type.
    #[error("Argument {index} expected {expected}, found {found}")]
    TypeMismatch {
        index: usize,
        expected: ColumnType,
        found: &'static str,
    },

    /// The row has no field at the requested position.
    #[error("Argument {0} is missing")]
    MissingArgument(usize),

    /// The row has the wrong number of fields for the function signature.
    #[error("Expected {expected} arguments, found {found}")]
    ArityMismatch { expected: String, found: usize },

    /// Integer arithmetic overflowed.
    #[error("Integer overflow: {0}")]
    Overflow(String),

    /// A numeric result does not fit the declared output precision.
    #[error("Value {value} does not fit NUMERIC({precision},{scale})")]
    NumericOverflow {
        value: Decimal,
        precision: u32,
        scale: u32,
    },

    /// A text field could not be parsed into its column type.
    #[error("Failed to parse argument {index}: {message}")]
    Parse { index: usize, message: String },
}
