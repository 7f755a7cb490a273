// catalog_query/src/value.rs

use rust_decimal::Decimal;
use std::fmt;

/// A value bound to one positional `?` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
  Int(i64),
  Text(String),
  Bool(bool),
  Decimal(Decimal),
  /// SQL `NULL`, used for absent optional columns on insert.
  Null,
}

impl SqlValue {
  pub fn text(value: impl Into<String>) -> Self {
    SqlValue::Text(value.into())
  }

  pub fn nullable_text(value: Option<&str>) -> Self {
    value.map_or(SqlValue::Null, SqlValue::text)
  }
}

impl fmt::Display for SqlValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SqlValue::Int(v) => write!(f, "{}", v),
      SqlValue::Text(v) => write!(f, "'{}'", v),
      SqlValue::Bool(v) => write!(f, "{}", v),
      SqlValue::Decimal(v) => write!(f, "{}", v),
      SqlValue::Null => f.write_str("NULL"),
    }
  }
}
