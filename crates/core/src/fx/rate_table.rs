use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use super::FxError;

/// Built-in rates, in units of currency per 1 USD.
const DEFAULT_RATES: &[(&str, Decimal)] = &[
    ("USD", dec!(1.000)),
    ("EUR", dec!(0.89977)),
    ("GBP", dec!(0.68452)),
    ("INR", dec!(67.0345)),
    ("AUD", dec!(1.39187)),
    ("CAD", dec!(1.30335)),
    ("ZAR", dec!(15.7181)),
];

/// Normalizes a currency code for lookup: trims whitespace and uppercases.
pub fn normalize_currency_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

fn is_valid_currency_code(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic())
}

/// A rate in a JSON rate file may be written as a number or a string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RateValue {
    Text(String),
    Number(serde_json::Number),
}

impl RateValue {
    fn into_text(self) -> String {
        match self {
            RateValue::Text(text) => text,
            RateValue::Number(number) => number.to_string(),
        }
    }
}

/// Immutable map from currency code to units of that currency per 1 USD.
///
/// Built once and shared; there is no way to mutate a table after
/// construction. Every key is a normalized three-letter code and every
/// rate is strictly positive.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyRateTable {
    rates: BTreeMap<String, Decimal>,
}

impl CurrencyRateTable {
    /// Builds a table from `(code, rate)` pairs, validating every entry.
    pub fn new<I, S>(rates: I) -> Result<Self, FxError>
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: AsRef<str>,
    {
        let mut table = BTreeMap::new();
        for (code, rate) in rates {
            let code = normalize_currency_code(code.as_ref());
            if !is_valid_currency_code(&code) {
                return Err(FxError::InvalidCurrencyCode(code));
            }
            if rate <= Decimal::ZERO {
                return Err(FxError::InvalidRate {
                    code,
                    rate: rate.to_string(),
                });
            }
            table.insert(code, rate);
        }
        Ok(Self { rates: table })
    }

    /// Parses a JSON object of `{"EUR": 0.89977, "GBP": "0.68452"}`.
    pub fn from_json_str(json: &str) -> Result<Self, FxError> {
        let raw: BTreeMap<String, RateValue> =
            serde_json::from_str(json).map_err(|e| FxError::Load(e.to_string()))?;

        let mut rates = Vec::with_capacity(raw.len());
        for (code, value) in raw {
            let text = value.into_text();
            let rate = Decimal::from_str(&text)
                .or_else(|_| Decimal::from_scientific(&text))
                .map_err(|_| FxError::InvalidRate {
                    code: code.clone(),
                    rate: text.clone(),
                })?;
            rates.push((code, rate));
        }
        Self::new(rates)
    }

    /// Loads a JSON rate table from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FxError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| FxError::Load(format!("{}: {}", path.display(), e)))?;
        let table = Self::from_json_str(&json)?;
        debug!(
            "Loaded {} currency rates from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Looks up the rate for `code`. A miss is `None`, never an error.
    pub fn rate(&self, code: &str) -> Option<Decimal> {
        self.rates.get(&normalize_currency_code(code)).copied()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.rate(code).is_some()
    }

    /// Supported codes in sorted order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.rates.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl Default for CurrencyRateTable {
    fn default() -> Self {
        Self {
            rates: DEFAULT_RATES
                .iter()
                .map(|(code, rate)| (code.to_string(), *rate))
                .collect(),
        }
    }
}
