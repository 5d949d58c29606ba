//! Construction of values
//!
//! These functions are the only way to build values. Boolean and null
//! values are interned: every request returns a handle to the same
//! process-wide instance. List and dictionary inputs are copied, so the
//! caller's container is never shared with the value.

use once_cell::sync::Lazy;

use crate::label::{Label, LabeledValue};
use crate::result::RollResult;
use crate::value::{Dictionary, ResultValue, Value, ValueKind};

static TRUE_VALUE: Lazy<Value> = Lazy::new(|| Value::from_kind(ValueKind::Boolean(true)));
static FALSE_VALUE: Lazy<Value> = Lazy::new(|| Value::from_kind(ValueKind::Boolean(false)));
static NULL_VALUE: Lazy<Value> = Lazy::new(|| Value::from_kind(ValueKind::Null));

pub fn long_value(value: i64) -> Value {
    Value::from_kind(ValueKind::Long(value))
}

pub fn double_value(value: f64) -> Value {
    Value::from_kind(ValueKind::Double(value))
}

pub fn string_value<S: Into<String>>(value: S) -> Value {
    Value::from_kind(ValueKind::String(value.into()))
}

/// Box an ordered collection of values
pub fn list_value<I: IntoIterator<Item = Value>>(values: I) -> Value {
    Value::from_kind(ValueKind::List(values.into_iter().collect()))
}

/// Box a name to value mapping, keeping the entry order
pub fn dictionary_value<I, K>(entries: I) -> Value
where
    I: IntoIterator<Item = (K, Value)>,
    K: Into<String>,
{
    let entries: Dictionary = entries
        .into_iter()
        .map(|(k, v)| (k.into(), v))
        .collect();
    Value::from_kind(ValueKind::Dictionary(entries))
}

/// The interned boolean value
pub fn boolean_value(value: bool) -> Value {
    if value {
        TRUE_VALUE.clone()
    } else {
        FALSE_VALUE.clone()
    }
}

/// The interned null value
pub fn null_value() -> Value {
    NULL_VALUE.clone()
}

/// Box a roll result; its operable value is fixed here
pub fn result_value(result: RollResult) -> Value {
    Value::from_kind(ValueKind::Result(ResultValue::new(result)))
}

/// Box a dictionary as the primary value of a roll result
pub fn result_value_from_dictionary<I, K>(entries: I) -> Value
where
    I: IntoIterator<Item = (K, Value)>,
    K: Into<String>,
{
    result_value(RollResult::of(dictionary_value(entries)))
}

/// Attach a label to a value
pub fn labeled_value(value: Value, label: Label) -> LabeledValue {
    LabeledValue::new(value, label)
}

pub fn long_list_value<I: IntoIterator<Item = i64>>(values: I) -> Value {
    list_value(values.into_iter().map(long_value))
}

pub fn double_list_value<I: IntoIterator<Item = f64>>(values: I) -> Value {
    list_value(values.into_iter().map(double_value))
}

pub fn string_list_value<I, S>(values: I) -> Value
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    list_value(values.into_iter().map(string_value))
}
