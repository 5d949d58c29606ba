//! Projection utilities
//!
//! This module converts a `Value` into plain Rust data: text, numbers,
//! element lists, dictionaries and booleans. Result values project through
//! their operable value.

use crate::error::{ValueError, ValueResult};
use crate::result::RollResult;
use crate::value::{Dictionary, Value, ValueKind};

/// Render a value as text
pub fn to_text(value: &Value) -> ValueResult<String> {
    match value.kind() {
        ValueKind::Long(v) => Ok(v.to_string()),
        ValueKind::Double(v) => Ok(format_double(*v)),
        ValueKind::String(s) => Ok(s.clone()),
        ValueKind::List(items) => {
            let parts = items.iter().map(to_text).collect::<ValueResult<Vec<_>>>()?;
            Ok(format!("[ {} ]", parts.join(", ")))
        }
        ValueKind::Dictionary(entries) => {
            let parts = entries
                .iter()
                .map(|(k, v)| Ok(format!("{}:{}", k, to_text(v)?)))
                .collect::<ValueResult<Vec<_>>>()?;
            Ok(format!("{{ {} }}", parts.join(", ")))
        }
        ValueKind::Boolean(b) => Ok(b.to_string()),
        ValueKind::Null => Err(ValueError::unsupported_conversion(
            "cannot convert null to a string",
        )),
        ValueKind::Result(r) => to_text(r.operable()),
    }
}

/// Convert a value to i64
///
/// Doubles truncate toward zero, saturating at the i64 range.
pub fn to_integer(value: &Value) -> ValueResult<i64> {
    match value.kind() {
        ValueKind::Long(v) => Ok(*v),
        ValueKind::Double(v) => Ok(*v as i64),
        ValueKind::String(s) => s.parse::<i64>().map_err(|_| {
            ValueError::numeric_conversion(format!("cannot convert \"{}\" to a Long", s))
        }),
        ValueKind::Null => Err(ValueError::unsupported_conversion(
            "cannot convert null to a number",
        )),
        ValueKind::Result(r) => to_integer(r.operable()),
        _ => Err(ValueError::numeric_conversion(format!(
            "cannot convert {} to a numeric value",
            kind_name(value)
        ))),
    }
}

/// Convert a value to f64
pub fn to_float(value: &Value) -> ValueResult<f64> {
    match value.kind() {
        ValueKind::Long(v) => Ok(*v as f64),
        ValueKind::Double(v) => Ok(*v),
        ValueKind::String(s) => s.trim().parse::<f64>().map_err(|_| {
            ValueError::numeric_conversion(format!("cannot convert \"{}\" to a Double", s))
        }),
        ValueKind::Null => Err(ValueError::unsupported_conversion(
            "cannot convert null to a number",
        )),
        ValueKind::Result(r) => to_float(r.operable()),
        _ => Err(ValueError::numeric_conversion(format!(
            "cannot convert {} to a numeric value",
            kind_name(value)
        ))),
    }
}

/// Convert a value to a list of elements
///
/// Lists yield their elements, every other non-null value yields itself as
/// the single element.
pub fn to_list(value: &Value) -> ValueResult<Vec<Value>> {
    match value.kind() {
        ValueKind::List(items) => Ok(items.clone()),
        ValueKind::Null => Err(ValueError::unsupported_conversion(
            "cannot convert null to a list",
        )),
        ValueKind::Result(r) => to_list(r.operable()),
        _ => Ok(vec![value.clone()]),
    }
}

/// Convert a value to a dictionary
pub fn to_dictionary(value: &Value) -> ValueResult<Dictionary> {
    match value.kind() {
        ValueKind::Dictionary(entries) => Ok(entries.clone()),
        ValueKind::Result(r) => to_dictionary(r.operable()),
        _ => Err(ValueError::unsupported_conversion(format!(
            "cannot convert {} to a dictionary",
            kind_name(value)
        ))),
    }
}

/// Truthiness of a value
///
/// Nonzero numbers and non-empty text, lists and dictionaries are true;
/// null is always false.
pub fn to_boolean(value: &Value) -> bool {
    match value.kind() {
        ValueKind::Long(v) => *v != 0,
        ValueKind::Double(v) => *v != 0.0,
        ValueKind::String(s) => !s.is_empty(),
        ValueKind::List(items) => !items.is_empty(),
        ValueKind::Dictionary(entries) => !entries.is_empty(),
        ValueKind::Boolean(b) => *b,
        ValueKind::Null => false,
        ValueKind::Result(r) => to_boolean(r.operable()),
    }
}

/// View a value as a roll result
///
/// Result values return their own record; any other non-null value becomes
/// the primary value of a fresh result.
pub fn to_roll_result(value: &Value) -> ValueResult<RollResult> {
    match value.kind() {
        ValueKind::Result(r) => Ok(r.record().clone()),
        ValueKind::Null => Err(ValueError::unsupported_conversion(
            "cannot convert null to a result",
        )),
        _ => Ok(RollResult::of(value.clone())),
    }
}

/// Format a double the way scripts display it
///
/// Integral values keep a trailing `.0`.
pub fn format_double(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v.is_infinite() {
        let text = if v > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}.0", v)
    } else {
        format!("{}", v)
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value.kind() {
        ValueKind::Long(_) => "long",
        ValueKind::Double(_) => "double",
        ValueKind::String(_) => "string",
        ValueKind::List(_) => "list",
        ValueKind::Dictionary(_) => "dictionary",
        ValueKind::Boolean(_) => "boolean",
        ValueKind::Null => "null",
        ValueKind::Result(_) => "result",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::factory::{
        boolean_value, dictionary_value, double_value, list_value, long_value, null_value,
        string_value,
    };

    #[test]
    fn test_to_text() {
        assert_eq!(to_text(&long_value(-7)).unwrap(), "-7");
        assert_eq!(to_text(&double_value(2.5)).unwrap(), "2.5");
        assert_eq!(to_text(&boolean_value(false)).unwrap(), "false");
        assert_eq!(
            to_text(&list_value([long_value(1), string_value("a")])).unwrap(),
            "[ 1, a ]"
        );
        assert_eq!(to_text(&list_value([])).unwrap(), "[  ]");
        assert_eq!(
            to_text(&dictionary_value([("a", long_value(1)), ("b", long_value(2))])).unwrap(),
            "{ a:1, b:2 }"
        );
        assert_eq!(
            to_text(&null_value()).unwrap_err().kind(),
            ErrorKind::UnsupportedConversion
        );
    }

    #[test]
    fn test_to_integer() {
        assert_eq!(to_integer(&long_value(42)).unwrap(), 42);
        assert_eq!(to_integer(&double_value(3.9)).unwrap(), 3);
        assert_eq!(to_integer(&double_value(-3.9)).unwrap(), -3);
        assert_eq!(to_integer(&string_value("17")).unwrap(), 17);
        assert_eq!(
            to_integer(&string_value("1.5")).unwrap_err().kind(),
            ErrorKind::NumericConversion
        );
        assert_eq!(
            to_integer(&boolean_value(true)).unwrap_err().kind(),
            ErrorKind::NumericConversion
        );
    }

    #[test]
    fn test_to_float() {
        assert_eq!(to_float(&long_value(42)).unwrap(), 42.0);
        assert_eq!(to_float(&string_value("1.5")).unwrap(), 1.5);
        assert!(to_float(&list_value([])).is_err());
        assert!(to_float(&dictionary_value::<_, &str>([])).is_err());
    }

    #[test]
    fn test_to_list_wraps_scalars() {
        let v = double_value(1.0);
        assert_eq!(to_list(&v).unwrap(), vec![v.clone()]);
        let d = dictionary_value([("k", long_value(1))]);
        assert_eq!(to_list(&d).unwrap(), vec![d.clone()]);
        assert!(to_list(&null_value()).is_err());
    }

    #[test]
    fn test_to_boolean() {
        assert!(to_boolean(&long_value(-1)));
        assert!(!to_boolean(&double_value(0.0)));
        assert!(!to_boolean(&string_value("")));
        assert!(to_boolean(&list_value([null_value()])));
        assert!(!to_boolean(&null_value()));
    }

    #[test]
    fn test_format_double() {
        assert_eq!(format_double(3.0), "3.0");
        assert_eq!(format_double(-0.5), "-0.5");
        assert_eq!(format_double(f64::INFINITY), "Infinity");
        assert_eq!(format_double(f64::NAN), "NaN");
    }
}
