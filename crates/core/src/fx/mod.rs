//! FX module - rate table, USD converter, and conversion results.

pub mod currency_converter;
mod fx_errors;
mod fx_model;
mod rate_table;

pub use currency_converter::CurrencyConverter;
pub use fx_errors::FxError;
pub use fx_model::{Conversion, NumericPrecision};
pub use rate_table::{normalize_currency_code, CurrencyRateTable};
