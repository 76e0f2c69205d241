use async_trait::async_trait;

use super::ScalarFunction;
use crate::diagnostics::DiagnosticSink;
use crate::rows::{ColumnType, Row, RowError, Signature, Value};

/// Sums any number of integers. A NULL argument makes the sum NULL.
pub fn add_any_ints<I>(values: I) -> Result<Option<i64>, RowError>
where
    I: IntoIterator<Item = Option<i64>>,
{
    let mut sum: i64 = 0;
    for value in values {
        let Some(value) = value else {
            return Ok(None);
        };
        sum = sum
            .checked_add(value)
            .ok_or_else(|| RowError::Overflow(format!("{} + {}", sum, value)))?;
    }
    Ok(Some(sum))
}

/// `add_any_ints(INTEGER, ...) -> INTEGER`
#[derive(Debug, Clone, Copy, Default)]
pub struct AddAnyInts;

#[async_trait]
impl ScalarFunction for AddAnyInts {
    fn name(&self) -> &'static str {
        "add_any_ints"
    }

    fn signature(&self) -> Signature {
        Signature::variadic(ColumnType::Int, 1, ColumnType::Int)
    }

    async fn process_row(&self, row: &Row, _sink: &dyn DiagnosticSink) -> Result<Value, RowError> {
        let values = (0..row.len())
            .map(|index| row.get_int(index))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(add_any_ints(values)?.into())
    }
}
