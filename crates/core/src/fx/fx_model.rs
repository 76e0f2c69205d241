use rust_decimal::{Decimal, RoundingStrategy};

use super::FxError;
use crate::constants::{OUTPUT_NUMERIC_PRECISION, OUTPUT_NUMERIC_SCALE};

/// Significant digits a `Decimal` can hold exactly.
const MAX_DECIMAL_DIGITS: u32 = 28;

/// Result of converting an amount to USD.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    /// Converted amount, rounded to the output scale.
    pub amount_usd: Decimal,
    /// Rate that was applied (units of `currency` per 1 USD).
    pub rate: Decimal,
    /// Currency code whose rate was applied.
    pub currency: String,
    /// True when the requested code was unknown and the USD rate was used.
    pub fallback: bool,
}

/// Fixed NUMERIC(precision, scale) output shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericPrecision {
    pub precision: u32,
    pub scale: u32,
}

impl NumericPrecision {
    pub const fn new(precision: u32, scale: u32) -> Self {
        Self { precision, scale }
    }

    /// Largest magnitude representable, e.g. 99999.9999 for NUMERIC(9,4).
    pub fn max_value(&self) -> Decimal {
        let digits = self.precision.min(MAX_DECIMAL_DIGITS);
        Decimal::from_i128_with_scale(10i128.pow(digits) - 1, self.scale.min(digits))
    }

    /// Rounds `value` to the scale with banker's rounding, then rejects it if
    /// it still does not fit the precision.
    pub fn fit(&self, value: Decimal) -> Result<Decimal, FxError> {
        let mut rounded =
            value.round_dp_with_strategy(self.scale, RoundingStrategy::MidpointNearestEven);
        if rounded.abs() > self.max_value() {
            return Err(FxError::PrecisionExceeded {
                value: rounded,
                precision: self.precision,
                scale: self.scale,
            });
        }
        // round_dp never adds digits; pad so 1 renders as 1.0000.
        rounded.rescale(self.scale);
        Ok(rounded)
    }
}

impl Default for NumericPrecision {
    fn default() -> Self {
        Self::new(OUTPUT_NUMERIC_PRECISION, OUTPUT_NUMERIC_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_precision_bounds() {
        let precision = NumericPrecision::default();
        assert_eq!(precision.max_value(), dec!(99999.9999));
    }

    #[test]
    fn test_fit_rounds_half_even() {
        let precision = NumericPrecision::default();
        assert_eq!(precision.fit(dec!(1.00005)).unwrap(), dec!(1.0000));
        assert_eq!(precision.fit(dec!(1.00015)).unwrap(), dec!(1.0002));
        assert_eq!(precision.fit(dec!(-2.71828)).unwrap(), dec!(-2.7183));
    }

    #[test]
    fn test_fit_keeps_four_fractional_digits() {
        let value = NumericPrecision::default().fit(dec!(1)).unwrap();
        assert_eq!(value.to_string(), "1.0000");
    }

    #[test]
    fn test_fit_rejects_overflow() {
        let precision = NumericPrecision::default();
        assert_eq!(precision.fit(dec!(99999.9999)).unwrap(), dec!(99999.9999));
        assert!(matches!(
            precision.fit(dec!(99999.99995)),
            Err(FxError::PrecisionExceeded { .. })
        ));
        assert!(matches!(
            precision.fit(dec!(-100000)),
            Err(FxError::PrecisionExceeded { .. })
        ));
    }
}
