//! Fluent builder for roll results

use std::sync::Arc;

use tracing::debug;

use crate::error::{ValueError, ValueResult};
use crate::factory;
use crate::result::{RollExpression, RollResult};
use crate::value::Value;

/// Builder for [`RollResult`]
///
/// Only the primary value is required. An unset detail defaults to the
/// value, and unset or empty individual values default to `[value]`.
///
/// # Example
/// ```
/// use roll_value::prelude::*;
///
/// let result = ResultBuilder::new()
///     .set_long_value(7)
///     .set_individual_values([long_value(3), long_value(4)])
///     .set_roll_expression(RollExpression::detail_only("2d4"))
///     .build()
///     .unwrap();
/// assert_eq!(result.individual_values().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResultBuilder {
    value: Option<Value>,
    detail: Option<Value>,
    individuals: Vec<Value>,
    roll_expression: Option<Arc<RollExpression>>,
}

impl ResultBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the primary value
    pub fn set_value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }

    pub fn set_long_value(self, value: i64) -> Self {
        self.set_value(factory::long_value(value))
    }

    pub fn set_double_value(self, value: f64) -> Self {
        self.set_value(factory::double_value(value))
    }

    pub fn set_string_value<S: Into<String>>(self, value: S) -> Self {
        self.set_value(factory::string_value(value))
    }

    pub fn set_list_value<I: IntoIterator<Item = Value>>(self, values: I) -> Self {
        self.set_value(factory::list_value(values))
    }

    pub fn set_dictionary_value<I, K>(self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        self.set_value(factory::dictionary_value(entries))
    }

    pub fn set_boolean_value(self, value: bool) -> Self {
        self.set_value(factory::boolean_value(value))
    }

    /// Set the human readable detail of the roll
    pub fn set_detailed_result(mut self, detail: Value) -> Self {
        self.detail = Some(detail);
        self
    }

    /// Replace the individual values
    pub fn set_individual_values<I: IntoIterator<Item = Value>>(mut self, values: I) -> Self {
        self.individuals = values.into_iter().collect();
        self
    }

    /// Attach roll expression metadata; accepts an owned or shared expression
    pub fn set_roll_expression<R: Into<Arc<RollExpression>>>(mut self, expr: R) -> Self {
        self.roll_expression = Some(expr.into());
        self
    }

    /// Finish the result
    pub fn build(self) -> ValueResult<RollResult> {
        let Some(value) = self.value else {
            debug!("result built without a primary value");
            return Err(ValueError::construction("value for a result can not be missing"));
        };
        Ok(RollResult::from_parts(
            value,
            self.detail,
            self.individuals,
            self.roll_expression,
        ))
    }

    /// Finish the result and box it as a value
    pub fn build_value(self) -> ValueResult<Value> {
        self.build().map(factory::result_value)
    }
}
