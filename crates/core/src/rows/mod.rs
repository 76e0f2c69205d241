//! Row model - typed values, column types, and function signatures.

mod rows_errors;
mod rows_model;
mod signature;

pub use rows_errors::RowError;
pub use rows_model::{ColumnType, Row, Value};
pub use signature::{Arguments, Signature};
