//! The capability set shared by plain and labeled values
//!
//! [`DataValue`] is what the evaluator programs against: projections,
//! typed coercions, arithmetic and label accessors. Both [`Value`] and
//! [`LabeledValue`] implement it, and [`Datum`] holds either one.

use std::fmt;

use crate::data_type::DataType;
use crate::dispatch::{self, BinOp};
use crate::error::ValueResult;
use crate::label::{Label, LabeledValue};
use crate::result::RollResult;
use crate::value::{Dictionary, Value};

/// Uniform value capabilities
///
/// Arithmetic always produces an unlabeled [`Value`]; labels never carry
/// over to derived values.
pub trait DataValue: fmt::Debug + fmt::Display {
    /// Category of the value
    fn data_type(&self) -> DataType;

    /// Text rendering
    fn as_text(&self) -> ValueResult<String>;

    /// Integer projection
    fn as_integer(&self) -> ValueResult<i64>;

    /// Floating point projection
    fn as_float(&self) -> ValueResult<f64>;

    /// List projection; scalars become a one element list
    fn as_list(&self) -> ValueResult<Vec<Value>>;

    /// Dictionary projection
    fn as_dictionary(&self) -> ValueResult<Dictionary>;

    /// Truthiness
    fn as_boolean(&self) -> bool;

    /// Roll result projection
    fn as_result(&self) -> ValueResult<RollResult>;

    fn as_long_value(&self) -> ValueResult<Datum>;
    fn as_double_value(&self) -> ValueResult<Datum>;
    fn as_string_value(&self) -> ValueResult<Datum>;
    fn as_list_value(&self) -> ValueResult<Datum>;
    fn as_dictionary_value(&self) -> ValueResult<Datum>;
    fn as_result_value(&self) -> ValueResult<Datum>;
    fn as_boolean_value(&self) -> ValueResult<Datum>;

    /// Arithmetic negation
    fn negate(&self) -> ValueResult<Value>;

    fn has_label(&self) -> bool;

    /// Attached label, or [`crate::label::NO_LABEL`]
    fn label(&self) -> &Label;

    /// The undecorated value
    fn to_value(&self) -> Value;

    /// An owned handle to this value, label included
    fn to_datum(&self) -> Datum;

    fn add(&self, other: &dyn DataValue) -> ValueResult<Value> {
        dispatch::binary_op(BinOp::Add, &self.to_value(), &other.to_value())
    }

    fn subtract(&self, other: &dyn DataValue) -> ValueResult<Value> {
        dispatch::binary_op(BinOp::Subtract, &self.to_value(), &other.to_value())
    }

    fn multiply(&self, other: &dyn DataValue) -> ValueResult<Value> {
        dispatch::binary_op(BinOp::Multiply, &self.to_value(), &other.to_value())
    }

    fn divide(&self, other: &dyn DataValue) -> ValueResult<Value> {
        dispatch::binary_op(BinOp::Divide, &self.to_value(), &other.to_value())
    }

    fn remainder(&self, other: &dyn DataValue) -> ValueResult<Value> {
        dispatch::binary_op(BinOp::Remainder, &self.to_value(), &other.to_value())
    }

    fn power(&self, exponent: &dyn DataValue) -> ValueResult<Value> {
        dispatch::binary_op(BinOp::Power, &self.to_value(), &exponent.to_value())
    }

    /// Apply any binary operator
    fn apply(&self, op: BinOp, other: &dyn DataValue) -> ValueResult<Value> {
        dispatch::binary_op(op, &self.to_value(), &other.to_value())
    }
}

/// An owned value that may carry a label
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Datum {
    Plain(Value),
    Labeled(LabeledValue),
}

impl Datum {
    fn inner(&self) -> &dyn DataValue {
        match self {
            Datum::Plain(v) => v,
            Datum::Labeled(l) => l,
        }
    }

    /// Borrow the undecorated value
    pub fn value(&self) -> &Value {
        match self {
            Datum::Plain(v) => v,
            Datum::Labeled(l) => l.value(),
        }
    }

    /// Drop any label and return the value
    pub fn into_value(self) -> Value {
        match self {
            Datum::Plain(v) => v,
            Datum::Labeled(l) => l.into_value(),
        }
    }
}

impl From<Value> for Datum {
    fn from(v: Value) -> Self {
        Datum::Plain(v)
    }
}

impl From<LabeledValue> for Datum {
    fn from(v: LabeledValue) -> Self {
        Datum::Labeled(v)
    }
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.inner(), f)
    }
}

impl DataValue for Datum {
    fn data_type(&self) -> DataType {
        self.inner().data_type()
    }

    fn as_text(&self) -> ValueResult<String> {
        self.inner().as_text()
    }

    fn as_integer(&self) -> ValueResult<i64> {
        self.inner().as_integer()
    }

    fn as_float(&self) -> ValueResult<f64> {
        self.inner().as_float()
    }

    fn as_list(&self) -> ValueResult<Vec<Value>> {
        self.inner().as_list()
    }

    fn as_dictionary(&self) -> ValueResult<Dictionary> {
        self.inner().as_dictionary()
    }

    fn as_boolean(&self) -> bool {
        self.inner().as_boolean()
    }

    fn as_result(&self) -> ValueResult<RollResult> {
        self.inner().as_result()
    }

    fn as_long_value(&self) -> ValueResult<Datum> {
        self.inner().as_long_value()
    }

    fn as_double_value(&self) -> ValueResult<Datum> {
        self.inner().as_double_value()
    }

    fn as_string_value(&self) -> ValueResult<Datum> {
        self.inner().as_string_value()
    }

    fn as_list_value(&self) -> ValueResult<Datum> {
        self.inner().as_list_value()
    }

    fn as_dictionary_value(&self) -> ValueResult<Datum> {
        self.inner().as_dictionary_value()
    }

    fn as_result_value(&self) -> ValueResult<Datum> {
        self.inner().as_result_value()
    }

    fn as_boolean_value(&self) -> ValueResult<Datum> {
        self.inner().as_boolean_value()
    }

    fn negate(&self) -> ValueResult<Value> {
        self.inner().negate()
    }

    fn has_label(&self) -> bool {
        self.inner().has_label()
    }

    fn label(&self) -> &Label {
        self.inner().label()
    }

    fn to_value(&self) -> Value {
        self.value().clone()
    }

    fn to_datum(&self) -> Datum {
        self.clone()
    }
}
