//! Conversion of raw SQLite values into semantic field types.
//!
//! Exports are loosely typed: ids arrive as TEXT, security as `'0.5'`,
//! coordinates as INTEGER. Required ids and positions fail with
//! [`LoaderError::InvalidValue`]; names and optional fields never fail.
use rusqlite::types::Value;

use crate::error::{LoaderError, Result};

/// Location of a value, used to label coercion failures.
#[derive(Clone, Copy, Debug)]
pub struct Field<'a> {
    pub table: &'a str,
    pub column: &'a str,
}

impl<'a> Field<'a> {
    pub const fn new(table: &'a str, column: &'a str) -> Self {
        Self { table, column }
    }

    fn invalid(&self, value: &Value, expected: &'static str) -> LoaderError {
        LoaderError::InvalidValue {
            table: self.table.to_string(),
            column: self.column.to_string(),
            value: render(value),
            expected,
        }
    }

    /// Integer identifier or foreign key.
    pub fn integer(&self, value: &Value) -> Result<i64> {
        as_integer(value).ok_or_else(|| self.invalid(value, "integer"))
    }

    /// Finite floating point number.
    pub fn real(&self, value: &Value) -> Result<f64> {
        as_real(value).ok_or_else(|| self.invalid(value, "number"))
    }
}

/// Integer view of a value: INTEGER, integral REAL, or TEXT holding either.
pub fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Integer(i) => Some(*i),
        Value::Real(f) => integral(*f),
        Value::Text(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(integral))
        }
        Value::Null | Value::Blob(_) => None,
    }
}

/// Finite float view of a value.
pub fn as_real(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Integer(i) => Some(*i as f64),
        Value::Real(f) => Some(*f),
        Value::Text(s) => s.trim().parse::<f64>().ok(),
        Value::Null | Value::Blob(_) => None,
    };
    parsed.filter(|f| f.is_finite())
}

/// Display name; NULL and BLOB load as an empty name.
pub fn as_name(value: &Value) -> String {
    as_text(value).unwrap_or_default()
}

/// Text view of a value.
pub fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::Text(s) => Some(s.clone()),
        Value::Integer(i) => Some(i.to_string()),
        Value::Real(f) => Some(f.to_string()),
        Value::Null | Value::Blob(_) => None,
    }
}

fn integral(f: f64) -> Option<i64> {
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.is_finite() && f.fract() == 0.0 && in_range).then_some(f as i64)
}

fn render(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Real(f) => f.to_string(),
        Value::Text(s) => format!("'{s}'"),
        Value::Blob(bytes) => format!("<blob of {} bytes>", bytes.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    #[test]
    fn integers_accept_text_and_integral_reals() {
        assert_eq!(as_integer(&Value::Integer(30000001)), Some(30000001));
        assert_eq!(as_integer(&text(" 42 ")), Some(42));
        assert_eq!(as_integer(&Value::Real(7.0)), Some(7));
        assert_eq!(as_integer(&text("7.0")), Some(7));
        assert_eq!(as_integer(&Value::Real(7.5)), None);
        assert_eq!(as_integer(&text("pA")), None);
        assert_eq!(as_integer(&Value::Null), None);
    }

    #[test]
    fn reals_reject_non_finite_values() {
        assert_eq!(as_real(&text("0.5")), Some(0.5));
        assert_eq!(as_real(&Value::Integer(-3)), Some(-3.0));
        assert_eq!(as_real(&text("not_a_number")), None);
        assert_eq!(as_real(&text("NaN")), None);
        assert_eq!(as_real(&Value::Real(f64::INFINITY)), None);
    }

    #[test]
    fn text_renders_numbers() {
        assert_eq!(as_text(&Value::Integer(11)).as_deref(), Some("11"));
        assert_eq!(as_text(&text("Gas")).as_deref(), Some("Gas"));
        assert_eq!(as_text(&Value::Null), None);
    }

    #[test]
    fn names_never_fail() {
        assert_eq!(as_name(&text("Alpha")), "Alpha");
        assert_eq!(as_name(&Value::Integer(7)), "7");
        assert_eq!(as_name(&Value::Null), "");
        assert_eq!(as_name(&Value::Blob(vec![1, 2])), "");
    }

    #[test]
    fn required_failure_carries_location_and_raw_value() {
        let field = Field::new("Planets", "planetId");
        let err = field.integer(&text("pA")).unwrap_err();
        match err {
            LoaderError::InvalidValue {
                table,
                column,
                value,
                expected,
            } => {
                assert_eq!(table, "Planets");
                assert_eq!(column, "planetId");
                assert_eq!(value, "'pA'");
                assert_eq!(expected, "integer");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(field.real(&Value::Null).is_err());
        assert!(field.integer(&Value::Blob(vec![1, 2])).is_err());
    }
}
