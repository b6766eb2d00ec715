//! Ready-made column transforms.
//!
//! Constructors here return closures suitable for
//! [`Transforms::with_column`](crate::Transforms::with_column) and
//! [`Transforms::with_index`](crate::Transforms::with_index). The strict
//! parsers fail with [`Error::InvalidCell`] carrying the A1 reference of the
//! offending cell.

use chrono::{DateTime, Utc};

use crate::cell::CellRef;
use crate::error::{Error, Result};
use crate::value::CellValue;

/// Infer a typed value from the cell text.
///
/// Tries, in order: empty cell, 64-bit integer, float, boolean word,
/// falling back to the raw string. Never fails.
pub fn auto() -> impl Fn(&str, &CellRef) -> Result<CellValue> {
    |raw, _cell| {
        if raw.is_empty() {
            return Ok(CellValue::Empty);
        }
        if let Ok(int_val) = raw.parse::<i64>() {
            return Ok(CellValue::Int(int_val));
        }
        if let Ok(float_val) = fast_float2::parse(raw) {
            return Ok(CellValue::Float(float_val));
        }

        // Check for boolean values (case insensitive)
        Ok(match raw.to_lowercase().as_str() {
            "true" | "yes" | "on" => CellValue::Bool(true),
            "false" | "no" | "off" => CellValue::Bool(false),
            _ => CellValue::String(raw.to_string()),
        })
    }
}

/// Parse a 64-bit integer, rejecting anything else.
pub fn integer() -> impl Fn(&str, &CellRef) -> Result<CellValue> {
    |raw, cell| {
        raw.parse::<i64>()
            .map(CellValue::Int)
            .map_err(|_| invalid(cell, format!("expected an integer, got {:?}", raw)))
    }
}

/// Parse a float, rejecting anything else.
pub fn float() -> impl Fn(&str, &CellRef) -> Result<CellValue> {
    |raw, cell| {
        fast_float2::parse(raw)
            .map(CellValue::Float)
            .map_err(|_| invalid(cell, format!("expected a number, got {:?}", raw)))
    }
}

/// Parse a boolean word (`true`/`yes`/`on`/`1`, `false`/`no`/`off`/`0`),
/// case insensitive.
pub fn boolean() -> impl Fn(&str, &CellRef) -> Result<CellValue> {
    |raw, cell| match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(CellValue::Bool(true)),
        "false" | "0" | "no" | "off" => Ok(CellValue::Bool(false)),
        _ => Err(invalid(cell, format!("expected a boolean, got {:?}", raw))),
    }
}

/// Parse an RFC 3339 timestamp into a UTC date-time.
pub fn datetime() -> impl Fn(&str, &CellRef) -> Result<CellValue> {
    |raw, cell| {
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| CellValue::DateTime(dt.with_timezone(&Utc)))
            .map_err(|e| invalid(cell, format!("expected an RFC 3339 date-time: {}", e)))
    }
}

fn invalid(cell: &CellRef, message: String) -> Error {
    Error::InvalidCell {
        reference: cell.a1.clone(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell() -> CellRef {
        CellRef::new(2, 3, "col")
    }

    #[test]
    fn test_auto_inference_ladder() {
        let infer = auto();
        assert_eq!(infer("", &cell()).unwrap(), CellValue::Empty);
        assert_eq!(infer("42", &cell()).unwrap(), CellValue::Int(42));
        assert_eq!(infer("-7", &cell()).unwrap(), CellValue::Int(-7));
        assert_eq!(infer("3.14", &cell()).unwrap(), CellValue::Float(3.14));
        assert_eq!(infer("yes", &cell()).unwrap(), CellValue::Bool(true));
        assert_eq!(infer("OFF", &cell()).unwrap(), CellValue::Bool(false));
        assert_eq!(
            infer("hello", &cell()).unwrap(),
            CellValue::String("hello".into())
        );
    }

    #[test]
    fn test_strict_integer() {
        assert_eq!(integer()("25", &cell()).unwrap(), CellValue::Int(25));

        let err = integer()("25.5", &cell()).unwrap_err();
        match err {
            Error::InvalidCell { reference, .. } => assert_eq!(reference, "C2"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_strict_float_and_boolean() {
        assert_eq!(float()("2.5", &cell()).unwrap(), CellValue::Float(2.5));
        assert!(float()("x", &cell()).is_err());

        assert_eq!(boolean()("1", &cell()).unwrap(), CellValue::Bool(true));
        assert_eq!(boolean()("No", &cell()).unwrap(), CellValue::Bool(false));
        assert!(boolean()("maybe", &cell()).is_err());
    }

    #[test]
    fn test_datetime() {
        let parsed = datetime()("2023-01-15T10:30:00Z", &cell()).unwrap();
        match parsed {
            CellValue::DateTime(dt) => assert_eq!(dt.timestamp(), 1_673_778_600),
            other => panic!("unexpected value: {:?}", other),
        }

        assert!(datetime()("15/01/2023", &cell()).is_err());
    }
}
