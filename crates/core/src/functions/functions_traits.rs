//! Scalar function and block writer trait definitions.

use async_trait::async_trait;

use crate::diagnostics::DiagnosticSink;
use crate::errors::Error;
use crate::rows::{Row, RowError, Signature, Value};

/// Trait for stateless per-row scalar functions.
///
/// Implement this trait to add a new function. The block driver
/// ([`process_block`](super::process_block)) checks each row against
/// [`signature`](Self::signature) before calling
/// [`process_row`](Self::process_row), so implementations can rely on
/// argument count and column types.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use rowfn_core::functions::ScalarFunction;
///
/// struct Negate;
///
/// #[async_trait]
/// impl ScalarFunction for Negate {
///     fn name(&self) -> &'static str {
///         "negate"
///     }
///
///     fn signature(&self) -> Signature {
///         Signature::fixed(vec![ColumnType::Int], ColumnType::Int)
///     }
///
///     async fn process_row(
///         &self,
///         row: &Row,
///         _sink: &dyn DiagnosticSink,
///     ) -> Result<Value, RowError> {
///         Ok(row.get_int(0)?.map(|v| -v).into())
///     }
/// }
/// ```
#[async_trait]
pub trait ScalarFunction: Send + Sync {
    /// Unique, lowercase name used for registry lookup.
    fn name(&self) -> &'static str;

    /// Declared argument and result columns.
    fn signature(&self) -> Signature;

    /// Diagnostic line written once when a block starts.
    fn banner(&self) -> String {
        format!("{} - processing block", self.name())
    }

    /// Computes the output value for one row.
    ///
    /// Returning an error is terminal for the row and aborts the block.
    async fn process_row(&self, row: &Row, sink: &dyn DiagnosticSink) -> Result<Value, RowError>;
}

/// Receives output values from the block driver, one per input row.
pub trait BlockWriter: Send {
    fn write(&mut self, value: Value) -> crate::Result<()>;
}

impl BlockWriter for Vec<Value> {
    fn write(&mut self, value: Value) -> crate::Result<()> {
        self.push(value);
        Ok(())
    }
}

/// Adapts a closure into a [`BlockWriter`].
pub struct FnWriter<F>(pub F);

impl<F> BlockWriter for FnWriter<F>
where
    F: FnMut(Value) -> std::result::Result<(), String> + Send,
{
    fn write(&mut self, value: Value) -> crate::Result<()> {
        (self.0)(value).map_err(Error::Output)
    }
}
