//! Core error types for rowfn.
//!
//! Row-level failures are [`RowError`]s. The block driver wraps the first one
//! it hits into [`Error::Row`] together with the index of the failing row.

use thiserror::Error;

use crate::fx::FxError;
use crate::rows::RowError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for rowfn.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Row {index} failed in {function}: {source}")]
    Row {
        index: usize,
        function: String,
        #[source]
        source: RowError,
    },

    #[error("Function '{0}' is not registered")]
    UnknownFunction(String),

    #[error("Fx error: {0}")]
    Fx(#[from] FxError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write output: {0}")]
    Output(String),
}

impl Error {
    /// Returns the row error if this error aborted a block.
    pub fn row_error(&self) -> Option<&RowError> {
        match self {
            Error::Row { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Index of the row that aborted the block, if any.
    pub fn row_index(&self) -> Option<usize> {
        match self {
            Error::Row { index, .. } => Some(*index),
            _ => None,
        }
    }
}
