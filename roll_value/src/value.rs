//! Immutable dynamic value type
//!
//! This module provides the `Value` handle used by the script evaluator for
//! every literal and intermediate result. A `Value` is a cheap, shareable
//! reference to a `ValueKind` payload that is never mutated after
//! construction; build values through [`crate::factory`].

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use indexmap::IndexMap;

use crate::convert;
use crate::data_type::DataType;
use crate::data_value::{DataValue, Datum};
use crate::dispatch;
use crate::error::ValueResult;
use crate::factory;
use crate::label::{Label, LabeledValue, NO_LABEL};
use crate::result::RollResult;

/// Name to value mapping that keeps insertion order
pub type Dictionary = IndexMap<String, Value>;

/// Immutable dynamically-typed value
#[derive(Clone)]
pub struct Value(Arc<ValueKind>);

/// Payload of a [`Value`], one case per category
#[derive(Debug)]
pub enum ValueKind {
    // ========== Numeric ==========
    /// 64-bit signed integer
    Long(i64),
    /// 64-bit floating point
    Double(f64),

    // ========== Text and containers ==========
    /// Text
    String(String),
    /// Ordered sequence of values
    List(Vec<Value>),
    /// Name to value mapping
    Dictionary(Dictionary),

    // ========== Singletons ==========
    /// Boolean (interned)
    Boolean(bool),
    /// Null (interned)
    Null,

    // ========== Dice roll ==========
    /// Roll result together with the value it operates as
    Result(ResultValue),
}

/// A roll result boxed as a value
///
/// The operable value is fixed when the value is built: the primary value,
/// unless a roll expression marks the roll as not summed, in which case it
/// is the list of individual values.
#[derive(Debug)]
pub struct ResultValue {
    record: RollResult,
    operable: Value,
}

impl ResultValue {
    pub(crate) fn new(record: RollResult) -> Self {
        let operable = record.operable_value();
        ResultValue { record, operable }
    }

    /// The stored roll result
    pub fn record(&self) -> &RollResult {
        &self.record
    }

    /// The value this result stands for in arithmetic and coercion
    pub fn operable(&self) -> &Value {
        &self.operable
    }
}

impl Value {
    pub(crate) fn from_kind(kind: ValueKind) -> Self {
        Value(Arc::new(kind))
    }

    /// Borrow the payload
    pub fn kind(&self) -> &ValueKind {
        &self.0
    }

    /// Check whether two handles refer to the same instance
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self.kind(), ValueKind::Null)
    }

    /// Check if this is a numeric value
    pub fn is_numeric(&self) -> bool {
        self.data_type().is_numeric()
    }

    /// Borrow the text of a String value
    pub fn as_str(&self) -> Option<&str> {
        match self.kind() {
            ValueKind::String(s) => Some(s),
            _ => None,
        }
    }

    /// Read-only view of a List value's elements
    pub fn items(&self) -> Option<&[Value]> {
        match self.kind() {
            ValueKind::List(items) => Some(items),
            _ => None,
        }
    }

    /// Read-only view of a Dictionary value's entries
    pub fn entries(&self) -> Option<&Dictionary> {
        match self.kind() {
            ValueKind::Dictionary(entries) => Some(entries),
            _ => None,
        }
    }

    /// The roll result stored in a Result value
    pub fn roll_result(&self) -> Option<&RollResult> {
        match self.kind() {
            ValueKind::Result(r) => Some(r.record()),
            _ => None,
        }
    }

    /// The operable value of a Result value
    pub fn operable_value(&self) -> Option<&Value> {
        match self.kind() {
            ValueKind::Result(r) => Some(r.operable()),
            _ => None,
        }
    }

    /// Attach a label to this value
    pub fn with_label(&self, label: Label) -> LabeledValue {
        factory::labeled_value(self.clone(), label)
    }

    /// Shared coercion path: identity for the target category and for Null,
    /// Results coerce their operable value, everything else is re-boxed.
    fn coerce_into<F>(&self, target: DataType, convert: F) -> ValueResult<Datum>
    where
        F: FnOnce(&Value) -> ValueResult<Value>,
    {
        if self.data_type() == target {
            return Ok(Datum::Plain(self.clone()));
        }
        match self.kind() {
            ValueKind::Null => Ok(Datum::Plain(self.clone())),
            ValueKind::Result(r) => target.coerce(r.operable()),
            _ => convert(self).map(Datum::Plain),
        }
    }
}

impl DataValue for Value {
    fn data_type(&self) -> DataType {
        match self.kind() {
            ValueKind::Long(_) => DataType::Long,
            ValueKind::Double(_) => DataType::Double,
            ValueKind::String(_) => DataType::String,
            ValueKind::List(_) => DataType::List,
            ValueKind::Dictionary(_) => DataType::Dictionary,
            ValueKind::Boolean(_) => DataType::Boolean,
            ValueKind::Null => DataType::Null,
            ValueKind::Result(_) => DataType::Result,
        }
    }

    fn as_text(&self) -> ValueResult<String> {
        convert::to_text(self)
    }

    fn as_integer(&self) -> ValueResult<i64> {
        convert::to_integer(self)
    }

    fn as_float(&self) -> ValueResult<f64> {
        convert::to_float(self)
    }

    fn as_list(&self) -> ValueResult<Vec<Value>> {
        convert::to_list(self)
    }

    fn as_dictionary(&self) -> ValueResult<Dictionary> {
        convert::to_dictionary(self)
    }

    fn as_boolean(&self) -> bool {
        convert::to_boolean(self)
    }

    fn as_result(&self) -> ValueResult<RollResult> {
        convert::to_roll_result(self)
    }

    fn as_long_value(&self) -> ValueResult<Datum> {
        self.coerce_into(DataType::Long, |v| Ok(factory::long_value(v.as_integer()?)))
    }

    fn as_double_value(&self) -> ValueResult<Datum> {
        self.coerce_into(DataType::Double, |v| Ok(factory::double_value(v.as_float()?)))
    }

    fn as_string_value(&self) -> ValueResult<Datum> {
        self.coerce_into(DataType::String, |v| Ok(factory::string_value(v.as_text()?)))
    }

    fn as_list_value(&self) -> ValueResult<Datum> {
        self.coerce_into(DataType::List, |v| Ok(factory::list_value(v.as_list()?)))
    }

    fn as_dictionary_value(&self) -> ValueResult<Datum> {
        self.coerce_into(DataType::Dictionary, |v| {
            Ok(factory::dictionary_value(v.as_dictionary()?))
        })
    }

    fn as_result_value(&self) -> ValueResult<Datum> {
        if self.is_null() || self.data_type() == DataType::Result {
            return Ok(Datum::Plain(self.clone()));
        }
        Ok(Datum::Plain(factory::result_value(self.as_result()?)))
    }

    fn as_boolean_value(&self) -> ValueResult<Datum> {
        self.coerce_into(DataType::Boolean, |v| Ok(factory::boolean_value(v.as_boolean())))
    }

    fn negate(&self) -> ValueResult<Value> {
        dispatch::negate(self)
    }

    fn has_label(&self) -> bool {
        false
    }

    fn label(&self) -> &Label {
        &NO_LABEL
    }

    fn to_value(&self) -> Value {
        self.clone()
    }

    fn to_datum(&self) -> Datum {
        Datum::Plain(self.clone())
    }
}

// ========== From implementations ==========

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        factory::long_value(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        factory::double_value(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        factory::boolean_value(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        factory::string_value(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        factory::string_value(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        factory::list_value(v.into_iter().map(Into::into))
    }
}

impl From<RollResult> for Value {
    fn from(v: RollResult) -> Self {
        factory::result_value(v)
    }
}

// ========== Equality and hashing ==========

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        match (self.kind(), other.kind()) {
            (ValueKind::Long(a), ValueKind::Long(b)) => a == b,
            (ValueKind::Double(a), ValueKind::Double(b)) => a == b,
            (ValueKind::Long(a), ValueKind::Double(b))
            | (ValueKind::Double(b), ValueKind::Long(a)) => *a as f64 == *b,
            (ValueKind::String(a), ValueKind::String(b)) => a == b,
            (ValueKind::List(a), ValueKind::List(b)) => a == b,
            // IndexMap equality ignores entry order
            (ValueKind::Dictionary(a), ValueKind::Dictionary(b)) => a == b,
            (ValueKind::Boolean(a), ValueKind::Boolean(b)) => a == b,
            (ValueKind::Null, ValueKind::Null) => true,
            (ValueKind::Result(a), ValueKind::Result(b)) => a.record() == b.record(),
            _ => false,
        }
    }
}

// NaN payloads break reflexivity, as they do for f64 itself.
impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.kind() {
            // Long and Double share a hash space so that 2 and 2.0 collide.
            ValueKind::Long(v) => hash_numeric(*v as f64, state),
            ValueKind::Double(v) => hash_numeric(*v, state),
            ValueKind::String(s) => {
                state.write_u8(2);
                s.hash(state);
            }
            ValueKind::List(items) => {
                state.write_u8(3);
                items.hash(state);
            }
            ValueKind::Dictionary(entries) => {
                state.write_u8(4);
                state.write_usize(entries.len());
                let combined = entries.iter().fold(0u64, |acc, entry| {
                    let mut h = DefaultHasher::new();
                    entry.hash(&mut h);
                    acc.wrapping_add(h.finish())
                });
                state.write_u64(combined);
            }
            ValueKind::Boolean(b) => {
                state.write_u8(5);
                b.hash(state);
            }
            ValueKind::Null => state.write_u8(6),
            ValueKind::Result(r) => {
                state.write_u8(7);
                r.record().hash(state);
            }
        }
    }
}

fn hash_numeric<H: Hasher>(v: f64, state: &mut H) {
    state.write_u8(1);
    // -0.0 == 0.0
    let v = if v == 0.0 { 0.0 } else { v };
    state.write_u64(v.to_bits());
}

// ========== Display implementation ==========

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.kind(), f)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            ValueKind::Long(v) => write!(f, "Long: {}", v),
            ValueKind::Double(v) => write!(f, "Double: {}", convert::format_double(*v)),
            ValueKind::String(s) => write!(f, "String: {}", s),
            ValueKind::List(items) => {
                write!(f, "List [ ")?;
                for (i, v) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, " ]")
            }
            ValueKind::Dictionary(entries) => {
                write!(f, "Dictionary {{ ")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{} = {}", k, v)?;
                }
                write!(f, " }}")
            }
            ValueKind::Boolean(b) => write!(f, "Boolean: {}", b),
            ValueKind::Null => write!(f, "Null"),
            ValueKind::Result(r) => write!(f, "{}", r.record()),
        }
    }
}
