//! rowfn Core - row model, scalar functions, and the block driver.
//!
//! This crate contains the per-row functions and everything needed to run
//! them over a block of rows. Functions that need network access live in
//! sibling crates and plug in through [`functions::ScalarFunction`].

pub mod constants;
pub mod diagnostics;
pub mod errors;
pub mod functions;
pub mod fx;
pub mod rows;

// Re-export common types
pub use diagnostics::{DiagnosticSink, LogDiagnosticSink, MemoryDiagnosticSink};
pub use functions::{process_block, FunctionRegistry, ScalarFunction};
pub use rows::{ColumnType, Row, RowError, Signature, Value};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
