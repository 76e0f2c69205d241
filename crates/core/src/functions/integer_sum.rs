use async_trait::async_trait;

use super::ScalarFunction;
use crate::constants::MIN_GATE_VALUE;
use crate::diagnostics::DiagnosticSink;
use crate::rows::{ColumnType, Row, RowError, Signature, Value};

/// Sums two integers after checking a validation gate.
///
/// Checks run in a fixed order: the gate first, then the addends.
/// A NULL gate counts as below the minimum.
pub fn integer_sum(a: Option<i64>, b: Option<i64>, gate: Option<i64>) -> Result<i64, RowError> {
    match gate {
        Some(gate) if gate >= MIN_GATE_VALUE => {}
        Some(gate) => {
            return Err(RowError::InvalidInput(format!(
                "gate value {} is below {}",
                gate, MIN_GATE_VALUE
            )));
        }
        None => return Err(RowError::InvalidInput("gate value is NULL".to_string())),
    }

    let (a, b) = match (a, b) {
        (Some(a), Some(b)) => (a, b),
        (None, _) => return Err(RowError::NullValue("argument 0 is NULL".to_string())),
        (_, None) => return Err(RowError::NullValue("argument 1 is NULL".to_string())),
    };

    a.checked_add(b).ok_or_else(|| RowError::Overflow(format!("{} + {}", a, b)))
}

/// `integer_sum(INTEGER a, INTEGER b, INTEGER gate) -> INTEGER`
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerSum;

#[async_trait]
impl ScalarFunction for IntegerSum {
    fn name(&self) -> &'static str {
        "integer_sum"
    }

    fn signature(&self) -> Signature {
        Signature::fixed(
            vec![ColumnType::Int, ColumnType::Int, ColumnType::Int],
            ColumnType::Int,
        )
    }

    fn banner(&self) -> String {
        "integer_sum - adding 2 ints".to_string()
    }

    async fn process_row(&self, row: &Row, _sink: &dyn DiagnosticSink) -> Result<Value, RowError> {
        let sum = integer_sum(row.get_int(0)?, row.get_int(1)?, row.get_int(2)?)?;
        Ok(Value::Int(sum))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::NoOpDiagnosticSink;

    #[test]
    fn test_sums_when_gate_passes() {
        assert_eq!(integer_sum(Some(5), Some(7), Some(100)), Ok(12));
        assert_eq!(integer_sum(Some(-5), Some(2), Some(5000)), Ok(-3));
    }

    #[test]
    fn test_gate_below_minimum_is_invalid() {
        assert!(matches!(
            integer_sum(Some(5), Some(7), Some(99)),
            Err(RowError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_null_gate_is_invalid() {
        assert!(matches!(
            integer_sum(Some(5), Some(7), None),
            Err(RowError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_null_addend_is_null_value() {
        assert!(matches!(
            integer_sum(None, Some(7), Some(100)),
            Err(RowError::NullValue(_))
        ));
        assert!(matches!(
            integer_sum(Some(5), None, Some(100)),
            Err(RowError::NullValue(_))
        ));
    }

    #[test]
    fn test_gate_is_checked_before_nulls() {
        assert!(matches!(
            integer_sum(None, None, Some(1)),
            Err(RowError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_overflow_is_reported() {
        assert!(matches!(
            integer_sum(Some(i64::MAX), Some(1), Some(100)),
            Err(RowError::Overflow(_))
        ));
    }

    #[tokio::test]
    async fn test_process_row() {
        let row = Row::new(vec![Value::Int(5), Value::Int(7), Value::Int(100)]);
        let value = IntegerSum
            .process_row(&row, &NoOpDiagnosticSink)
            .await
            .unwrap();
        assert_eq!(value, Value::Int(12));
    }
}
