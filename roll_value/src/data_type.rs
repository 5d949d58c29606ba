//! Value categories and their coercion table

use std::fmt;

use crate::data_value::{DataValue, Datum};
use crate::error::ValueResult;
use crate::factory;

/// Category of a value
///
/// `Any` is not the category of any value; coercing to it leaves the value
/// untouched, which the evaluator uses for parameters that accept anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Long,
    Double,
    String,
    List,
    Dictionary,
    Result,
    Boolean,
    Any,
    Null,
}

impl DataType {
    /// All categories, in declaration order
    pub const ALL: [DataType; 9] = [
        DataType::Long,
        DataType::Double,
        DataType::String,
        DataType::List,
        DataType::Dictionary,
        DataType::Result,
        DataType::Boolean,
        DataType::Any,
        DataType::Null,
    ];

    /// Capitalised category name
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Long => "Long",
            DataType::Double => "Double",
            DataType::String => "String",
            DataType::List => "List",
            DataType::Dictionary => "Dictionary",
            DataType::Result => "Result",
            DataType::Boolean => "Boolean",
            DataType::Any => "Any",
            DataType::Null => "Null",
        }
    }

    /// Check if this is a numeric category
    pub fn is_numeric(&self) -> bool {
        matches!(self, DataType::Long | DataType::Double)
    }

    /// Coerce a value into this category
    pub fn coerce<V: DataValue + ?Sized>(&self, value: &V) -> ValueResult<Datum> {
        match self {
            DataType::Long => value.as_long_value(),
            DataType::Double => value.as_double_value(),
            DataType::String => value.as_string_value(),
            DataType::List => value.as_list_value(),
            DataType::Dictionary => value.as_dictionary_value(),
            DataType::Result => value.as_result_value(),
            DataType::Boolean => value.as_boolean_value(),
            DataType::Any => Ok(value.to_datum()),
            DataType::Null => Ok(Datum::Plain(factory::null_value())),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
