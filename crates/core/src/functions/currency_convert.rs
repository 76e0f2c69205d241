use std::sync::Arc;

use async_trait::async_trait;

use super::ScalarFunction;
use crate::constants::{INPUT_NUMERIC_PRECISION, INPUT_NUMERIC_SCALE};
use crate::diagnostics::DiagnosticSink;
use crate::fx::{CurrencyConverter, CurrencyRateTable, FxError};
use crate::rows::{ColumnType, Row, RowError, Signature, Value};

/// `currency_convert(VARCHAR code, NUMERIC amount) -> NUMERIC(9,4)`
///
/// Unknown or NULL codes fall back to the USD rate with a diagnostic line,
/// so every row produces a value. A NULL amount yields NULL.
#[derive(Debug, Clone)]
pub struct CurrencyConvert {
    converter: CurrencyConverter,
}

impl CurrencyConvert {
    pub fn new(table: Arc<CurrencyRateTable>) -> Self {
        Self::with_converter(CurrencyConverter::new(table))
    }

    pub fn with_converter(converter: CurrencyConverter) -> Self {
        Self { converter }
    }

    pub fn converter(&self) -> &CurrencyConverter {
        &self.converter
    }
}

impl Default for CurrencyConvert {
    fn default() -> Self {
        Self::with_converter(CurrencyConverter::default())
    }
}

#[async_trait]
impl ScalarFunction for CurrencyConvert {
    fn name(&self) -> &'static str {
        "currency_convert"
    }

    fn signature(&self) -> Signature {
        let precision = self.converter.precision();
        Signature::fixed(
            vec![
                ColumnType::Varchar,
                ColumnType::Numeric {
                    precision: INPUT_NUMERIC_PRECISION,
                    scale: INPUT_NUMERIC_SCALE,
                },
            ],
            ColumnType::Numeric {
                precision: precision.precision,
                scale: precision.scale,
            },
        )
    }

    fn banner(&self) -> String {
        "currency_convert - converting to USD".to_string()
    }

    async fn process_row(&self, row: &Row, sink: &dyn DiagnosticSink) -> Result<Value, RowError> {
        let currency = row.get_varchar(0)?;
        let Some(amount) = row.get_numeric(1)? else {
            return Ok(Value::Null);
        };

        if !currency.is_some_and(|code| self.converter.table().contains(code)) {
            sink.log(&format!(
                "ERROR: {} not in rate table, falling back to USD",
                currency.unwrap_or("NULL")
            ));
        }

        let conversion = self
            .converter
            .convert(currency, amount)
            .map_err(|e| match e {
                FxError::PrecisionExceeded {
                    value,
                    precision,
                    scale,
                } => RowError::NumericOverflow {
                    value,
                    precision,
                    scale,
                },
                other => RowError::InvalidInput(other.to_string()),
            })?;

        Ok(Value::Numeric(conversion.amount_usd))
    }
}
