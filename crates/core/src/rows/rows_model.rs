use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

use super::RowError;

/// Declared type of a function argument or result column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Int,
    Numeric { precision: u32, scale: u32 },
    Varchar,
}

impl ColumnType {
    /// Returns true if `value` can be stored in a column of this type.
    /// NULL fits every column type, and INTEGER widens to NUMERIC.
    pub fn accepts(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (_, Value::Null)
                | (ColumnType::Int, Value::Int(_))
                | (ColumnType::Numeric { .. }, Value::Numeric(_) | Value::Int(_))
                | (ColumnType::Varchar, Value::Varchar(_))
        )
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Int => write!(f, "INTEGER"),
            ColumnType::Numeric { precision, scale } => {
                write!(f, "NUMERIC({},{})", precision, scale)
            }
            ColumnType::Varchar => write!(f, "VARCHAR"),
        }
    }
}

/// A single typed field of a row.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Int(i64),
    Numeric(Decimal),
    Varchar(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Short type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "NULL",
            Value::Int(_) => "INTEGER",
            Value::Numeric(_) => "NUMERIC",
            Value::Varchar(_) => "VARCHAR",
        }
    }

    /// Parses a text field into a value of the given column type.
    ///
    /// An empty field or a case-insensitive `NULL` parses to [`Value::Null`].
    /// `index` is only used to label parse errors.
    pub fn parse(text: &str, column_type: ColumnType, index: usize) -> Result<Value, RowError> {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null") {
            return Ok(Value::Null);
        }

        match column_type {
            ColumnType::Int => trimmed
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|e| RowError::Parse {
                    index,
                    message: format!("'{}' is not an integer: {}", trimmed, e),
                }),
            ColumnType::Numeric { .. } => Decimal::from_str(trimmed)
                .or_else(|_| Decimal::from_scientific(trimmed))
                .map(Value::Numeric)
                .map_err(|e| RowError::Parse {
                    index,
                    message: format!("'{}' is not a decimal number: {}", trimmed, e),
                }),
            // Varchar keeps the untrimmed text.
            ColumnType::Varchar => Ok(Value::Varchar(text.to_string())),
        }
    }
}

impl fmt::Display for Value {
    /// Renders the value as a plain text field. NULL renders as an empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Int(v) => write!(f, "{}", v),
            Value::Numeric(v) => write!(f, "{}", v),
            Value::Varchar(v) => f.write_str(v),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Value::Numeric(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Varchar(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Varchar(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}

/// One input row: an ordered list of argument values.
///
/// The typed getters return `Ok(None)` for NULL fields and fail when the
/// field is absent or holds a different type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    values: Vec<Value>,
}

impl Row {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Result<&Value, RowError> {
        self.values.get(index).ok_or(RowError::MissingArgument(index))
    }

    pub fn is_null(&self, index: usize) -> Result<bool, RowError> {
        Ok(self.get(index)?.is_null())
    }

    pub fn get_int(&self, index: usize) -> Result<Option<i64>, RowError> {
        match self.get(index)? {
            Value::Null => Ok(None),
            Value::Int(v) => Ok(Some(*v)),
            other => Err(RowError::TypeMismatch {
                index,
                expected: ColumnType::Int,
                found: other.type_name(),
            }),
        }
    }

    /// Reads a NUMERIC field. INTEGER fields are widened.
    pub fn get_numeric(&self, index: usize) -> Result<Option<Decimal>, RowError> {
        match self.get(index)? {
            Value::Null => Ok(None),
            Value::Numeric(v) => Ok(Some(*v)),
            Value::Int(v) => Ok(Some(Decimal::from(*v))),
            other => Err(RowError::TypeMismatch {
                index,
                expected: ColumnType::Numeric {
                    precision: 0,
                    scale: 0,
                },
                found: other.type_name(),
            }),
        }
    }

    pub fn get_varchar(&self, index: usize) -> Result<Option<&str>, RowError> {
        match self.get(index)? {
            Value::Null => Ok(None),
            Value::Varchar(v) => Ok(Some(v.as_str())),
            other => Err(RowError::TypeMismatch {
                index,
                expected: ColumnType::Varchar,
                found: other.type_name(),
            }),
        }
    }
}

impl From<Vec<Value>> for Row {
    fn from(values: Vec<Value>) -> Self {
        Self::new(values)
    }
}

impl FromIterator<Value> for Row {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
