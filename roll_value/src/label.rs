//! Labels and labeled values
//!
//! A label names a sub-result for display. It is read-through for every
//! projection and is dropped by any derived computation.

use std::fmt;

use once_cell::sync::Lazy;

use crate::data_type::DataType;
use crate::data_value::{DataValue, Datum};
use crate::error::ValueResult;
use crate::result::RollResult;
use crate::value::{Dictionary, Value};

/// Label reported by values that carry none
pub static NO_LABEL: Lazy<Label> = Lazy::new(|| Label::new("NO LABEL", 0));

/// A name and index attached to a value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label {
    name: String,
    index: usize,
}

impl Label {
    pub fn new<S: Into<String>>(name: S, index: usize) -> Self {
        Label {
            name: name.into(),
            index,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.index)
    }
}

/// A value decorated with a label
///
/// The wrapped value is always a plain [`Value`], so labels never nest.
/// Two labeled values are equal when both label and value are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LabeledValue {
    label: Label,
    value: Value,
}

impl LabeledValue {
    pub(crate) fn new(value: Value, label: Label) -> Self {
        LabeledValue { label, value }
    }

    /// Borrow the wrapped value
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Drop the label
    pub fn into_value(self) -> Value {
        self.value
    }

    /// Keep the label when the wrapped value already has the target
    /// category, otherwise hand back the wrapped value's own coercion.
    fn coerce_into(&self, target: DataType) -> ValueResult<Datum> {
        if self.value.data_type() == target {
            Ok(Datum::Labeled(self.clone()))
        } else {
            target.coerce(&self.value)
        }
    }
}

impl DataValue for LabeledValue {
    fn data_type(&self) -> DataType {
        self.value.data_type()
    }

    fn as_text(&self) -> ValueResult<String> {
        self.value.as_text()
    }

    fn as_integer(&self) -> ValueResult<i64> {
        self.value.as_integer()
    }

    fn as_float(&self) -> ValueResult<f64> {
        self.value.as_float()
    }

    fn as_list(&self) -> ValueResult<Vec<Value>> {
        self.value.as_list()
    }

    fn as_dictionary(&self) -> ValueResult<Dictionary> {
        self.value.as_dictionary()
    }

    fn as_boolean(&self) -> bool {
        self.value.as_boolean()
    }

    fn as_result(&self) -> ValueResult<RollResult> {
        self.value.as_result()
    }

    fn as_long_value(&self) -> ValueResult<Datum> {
        self.coerce_into(DataType::Long)
    }

    fn as_double_value(&self) -> ValueResult<Datum> {
        self.coerce_into(DataType::Double)
    }

    fn as_string_value(&self) -> ValueResult<Datum> {
        self.coerce_into(DataType::String)
    }

    fn as_list_value(&self) -> ValueResult<Datum> {
        self.coerce_into(DataType::List)
    }

    fn as_dictionary_value(&self) -> ValueResult<Datum> {
        self.coerce_into(DataType::Dictionary)
    }

    fn as_result_value(&self) -> ValueResult<Datum> {
        self.coerce_into(DataType::Result)
    }

    fn as_boolean_value(&self) -> ValueResult<Datum> {
        self.coerce_into(DataType::Boolean)
    }

    fn negate(&self) -> ValueResult<Value> {
        self.value.negate()
    }

    fn has_label(&self) -> bool {
        true
    }

    fn label(&self) -> &Label {
        &self.label
    }

    fn to_value(&self) -> Value {
        self.value.clone()
    }

    fn to_datum(&self) -> Datum {
        Datum::Labeled(self.clone())
    }
}

impl fmt::Display for LabeledValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{{Label: {},{}}}",
            self.value,
            self.label.name(),
            self.label.index()
        )
    }
}
