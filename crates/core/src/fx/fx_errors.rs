use rust_decimal::Decimal;
use thiserror::Error;

/// Errors from the currency rate table and converter.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FxError {
    #[error("Invalid currency code '{0}': expected three ASCII letters")]
    InvalidCurrencyCode(String),

    #[error("Invalid rate {rate} for {code}: rates must be positive")]
    InvalidRate { code: String, rate: String },

    #[error("Converted value {value} exceeds NUMERIC({precision},{scale})")]
    PrecisionExceeded {
        value: Decimal,
        precision: u32,
        scale: u32,
    },

    #[error("Conversion failed: {0}")]
    DivisionFailed(String),

    #[error("Failed to load rate table: {0}")]
    Load(String),
}
