/// Smallest accepted value for the IntegerSum validation gate.
pub const MIN_GATE_VALUE: i64 = 100;

/// Currency whose rate (1) is used when a code is not in the rate table.
pub const FALLBACK_CURRENCY: &str = "USD";

/// Total digits of the CurrencyConvert output column.
pub const OUTPUT_NUMERIC_PRECISION: u32 = 9;

/// Fractional digits of the CurrencyConvert output column.
pub const OUTPUT_NUMERIC_SCALE: u32 = 4;

/// Total digits of the CurrencyConvert amount column; the most a `Decimal` holds.
pub const INPUT_NUMERIC_PRECISION: u32 = 28;

/// Fractional digits of the CurrencyConvert amount column.
pub const INPUT_NUMERIC_SCALE: u32 = 10;
