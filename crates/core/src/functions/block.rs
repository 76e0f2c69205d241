//! Block driver: runs a scalar function over a sequence of rows.

use log::{debug, warn};

use super::{BlockWriter, ScalarFunction};
use crate::diagnostics::DiagnosticSink;
use crate::errors::{Error, Result};
use crate::rows::{Row, Value};

/// Runs `function` over `rows`, writing one output value per row.
///
/// Rows are processed strictly in input order, one at a time. The
/// function's banner is written to `sink` once before the first row.
/// The first row error stops the block: nothing is written for the
/// failing row or any row after it, and the error carries the row index.
///
/// Returns the number of values written.
pub async fn process_block<I>(
    function: &dyn ScalarFunction,
    rows: I,
    sink: &dyn DiagnosticSink,
    writer: &mut dyn BlockWriter,
) -> Result<usize>
where
    I: IntoIterator<Item = Row>,
{
    sink.log(&function.banner());
    let signature = function.signature();

    let mut written = 0;
    for (index, row) in rows.into_iter().enumerate() {
        let value = match signature.check(&row) {
            Ok(()) => function.process_row(&row, sink).await,
            Err(e) => Err(e),
        }
        .map_err(|source| {
            warn!("{} aborted at row {}: {}", function.name(), index, source);
            Error::Row {
                index,
                function: function.name().to_string(),
                source,
            }
        })?;

        writer.write(value)?;
        written += 1;
    }

    debug!("{} processed {} rows", function.name(), written);
    Ok(written)
}

/// Runs a block and collects the outputs in input order.
pub async fn collect_block<I>(
    function: &dyn ScalarFunction,
    rows: I,
    sink: &dyn DiagnosticSink,
) -> Result<Vec<Value>>
where
    I: IntoIterator<Item = Row>,
{
    let mut values = Vec::new();
    process_block(function, rows, sink, &mut values).await?;
    Ok(values)
}
