use super::{ColumnType, Row, RowError, Value};

/// Argument list of a function prototype.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arguments {
    /// Exactly these columns, in order.
    Fixed(Vec<ColumnType>),
    /// Any number (at least `min`) of columns of one type.
    Variadic { column_type: ColumnType, min: usize },
}

/// Declared prototype of a scalar function: argument columns and result column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub arguments: Arguments,
    pub returns: ColumnType,
}

impl Signature {
    pub fn fixed(arguments: Vec<ColumnType>, returns: ColumnType) -> Self {
        Self {
            arguments: Arguments::Fixed(arguments),
            returns,
        }
    }

    pub fn variadic(column_type: ColumnType, min: usize, returns: ColumnType) -> Self {
        Self {
            arguments: Arguments::Variadic { column_type, min },
            returns,
        }
    }

    /// Column type expected at `index`, or `None` past the end of a fixed list.
    pub fn argument_type(&self, index: usize) -> Option<ColumnType> {
        match &self.arguments {
            Arguments::Fixed(columns) => columns.get(index).copied(),
            Arguments::Variadic { column_type, .. } => Some(*column_type),
        }
    }

    /// Checks arity and per-column types of `row` against this signature.
    pub fn check(&self, row: &Row) -> Result<(), RowError> {
        match &self.arguments {
            Arguments::Fixed(columns) if columns.len() != row.len() => {
                return Err(RowError::ArityMismatch {
                    expected: columns.len().to_string(),
                    found: row.len(),
                });
            }
            Arguments::Variadic { min, .. } if row.len() < *min => {
                return Err(RowError::ArityMismatch {
                    expected: format!("at least {}", min),
                    found: row.len(),
                });
            }
            _ => {}
        }

        for (index, value) in row.values().iter().enumerate() {
            // Arity was checked above, so every index has a type.
            if let Some(expected) = self.argument_type(index) {
                if !expected.accepts(value) {
                    return Err(RowError::TypeMismatch {
                        index,
                        expected,
                        found: value.type_name(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Parses raw text fields into a typed row following this signature.
    pub fn parse_row<S: AsRef<str>>(&self, fields: &[S]) -> Result<Row, RowError> {
        fields
            .iter()
            .enumerate()
            .map(|(index, field)| {
                let column_type =
                    self.argument_type(index)
                        .ok_or_else(|| RowError::ArityMismatch {
                            expected: self.arity_label(),
                            found: fields.len(),
                        })?;
                Value::parse(field.as_ref(), column_type, index)
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Row::new)
    }

    fn arity_label(&self) -> String {
        match &self.arguments {
            Arguments::Fixed(columns) => columns.len().to_string(),
            Arguments::Variadic { min, .. } => format!("at least {}", min),
        }
    }
}
