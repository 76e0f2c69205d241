use std::sync::Arc;

use rust_decimal::Decimal;

use super::{Conversion, CurrencyRateTable, FxError, NumericPrecision};
use crate::constants::FALLBACK_CURRENCY;

/// Converts amounts to USD using a shared, read-only rate table.
///
/// Unknown codes never fail the conversion: the USD rate (1) is used and the
/// result is flagged with `fallback = true`. The only error is a result that
/// does not fit the output precision.
#[derive(Debug, Clone)]
pub struct CurrencyConverter {
    table: Arc<CurrencyRateTable>,
    precision: NumericPrecision,
}

impl CurrencyConverter {
    pub fn new(table: Arc<CurrencyRateTable>) -> Self {
        Self::with_precision(table, NumericPrecision::default())
    }

    pub fn with_precision(table: Arc<CurrencyRateTable>, precision: NumericPrecision) -> Self {
        Self { table, precision }
    }

    pub fn table(&self) -> &CurrencyRateTable {
        &self.table
    }

    pub fn precision(&self) -> NumericPrecision {
        self.precision
    }

    /// Converts `amount` expressed in `currency` into USD.
    ///
    /// `None` is treated like an unknown code.
    pub fn convert(&self, currency: Option<&str>, amount: Decimal) -> Result<Conversion, FxError> {
        let (code, rate, fallback) = match currency.and_then(|code| {
            self.table
                .rate(code)
                .map(|rate| (super::normalize_currency_code(code), rate))
        }) {
            Some((code, rate)) => (code, rate, false),
            None => (FALLBACK_CURRENCY.to_string(), Decimal::ONE, true),
        };

        let converted = amount.checked_div(rate).ok_or_else(|| {
            FxError::DivisionFailed(format!("{} / {} ({})", amount, rate, code))
        })?;

        Ok(Conversion {
            amount_usd: self.precision.fit(converted)?,
            rate,
            currency: code,
            fallback,
        })
    }
}

impl Default for CurrencyConverter {
    fn default() -> Self {
        Self::new(Arc::new(CurrencyRateTable::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_converts_eur_to_usd() {
        let converter = CurrencyConverter::default();
        let conversion = converter.convert(Some("EUR"), dec!(100.00)).unwrap();

        assert_eq!(conversion.amount_usd, dec!(111.1395));
        assert_eq!(conversion.rate, dec!(0.89977));
        assert_eq!(conversion.currency, "EUR");
        assert!(!conversion.fallback);
    }

    #[test]
    fn test_usd_is_identity() {
        let converter = CurrencyConverter::default();
        let conversion = converter.convert(Some("USD"), dec!(1.00)).unwrap();
        assert_eq!(conversion.amount_usd.to_string(), "1.0000");
        assert!(!conversion.fallback);
    }

    #[test]
    fn test_unknown_code_falls_back_to_usd() {
        let converter = CurrencyConverter::default();
        let conversion = converter.convert(Some("XYZ"), dec!(50.00)).unwrap();

        assert_eq!(conversion.amount_usd.to_string(), "50.0000");
        assert_eq!(conversion.rate, Decimal::ONE);
        assert_eq!(conversion.currency, "USD");
        assert!(conversion.fallback);
    }

    #[test]
    fn test_missing_code_falls_back_to_usd() {
        let converter = CurrencyConverter::default();
        let conversion = converter.convert(None, dec!(7.5)).unwrap();
        assert_eq!(conversion.amount_usd, dec!(7.5));
        assert!(conversion.fallback);
    }

    #[test]
    fn test_lowercase_code_is_found() {
        let converter = CurrencyConverter::default();
        let conversion = converter.convert(Some("gbp"), dec!(100)).unwrap();
        assert_eq!(conversion.amount_usd, dec!(146.0878));
        assert_eq!(conversion.currency, "GBP");
    }

    #[test]
    fn test_small_rates_convert_exactly() {
        let converter = CurrencyConverter::default();
        let inr = converter.convert(Some("INR"), dec!(100.00)).unwrap();
        assert_eq!(inr.amount_usd, dec!(1.4918));

        let cad = converter.convert(Some("CAD"), dec!(100.00)).unwrap();
        assert_eq!(cad.amount_usd, dec!(76.7254));
    }

    #[test]
    fn test_result_exceeding_precision_is_rejected() {
        let converter = CurrencyConverter::default();
        let err = converter.convert(Some("GBP"), dec!(100000)).unwrap_err();
        assert!(matches!(
            err,
            FxError::PrecisionExceeded {
                precision: 9,
                scale: 4,
                ..
            }
        ));
    }

    #[test]
    fn test_custom_table() {
        let table = CurrencyRateTable::new(vec![("JPY", dec!(156.25))]).unwrap();
        let converter = CurrencyConverter::new(Arc::new(table));

        let conversion = converter.convert(Some("JPY"), dec!(1562.5)).unwrap();
        assert_eq!(conversion.amount_usd, dec!(10));
        assert!(converter.convert(Some("EUR"), dec!(1)).unwrap().fallback);
    }
}
