//! Dice roll results
//!
//! A [`RollResult`] carries an already computed roll: the primary value, a
//! human readable detail, the individual rolls, and optional
//! [`RollExpression`] metadata. Build one with [`ResultBuilder`] and box it
//! with [`crate::factory::result_value`].

mod builder;
mod roll_expression;

pub use builder::ResultBuilder;
pub use roll_expression::RollExpression;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::factory;
use crate::value::Value;

/// Immutable roll result record
#[derive(Debug, Clone)]
pub struct RollResult {
    value: Value,
    detail: Value,
    individuals: Vec<Value>,
    roll_expression: Option<Arc<RollExpression>>,
}

impl RollResult {
    /// A result whose detail and individual values are the value itself
    pub fn of(value: Value) -> Self {
        RollResult {
            detail: value.clone(),
            individuals: vec![value.clone()],
            value,
            roll_expression: None,
        }
    }

    pub(crate) fn from_parts(
        value: Value,
        detail: Option<Value>,
        individuals: Vec<Value>,
        roll_expression: Option<Arc<RollExpression>>,
    ) -> Self {
        let detail = detail.unwrap_or_else(|| value.clone());
        let individuals = if individuals.is_empty() {
            vec![value.clone()]
        } else {
            individuals
        };
        RollResult {
            value,
            detail,
            individuals,
            roll_expression,
        }
    }

    /// Primary value
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Human readable detail of the roll
    pub fn detailed_result(&self) -> &Value {
        &self.detail
    }

    /// Individual rolls; never empty
    pub fn individual_values(&self) -> &[Value] {
        &self.individuals
    }

    pub fn has_roll_expression(&self) -> bool {
        self.roll_expression.is_some()
    }

    pub fn roll_expression(&self) -> Option<&RollExpression> {
        self.roll_expression.as_deref()
    }

    /// Shared handle to the roll expression
    pub fn roll_expression_handle(&self) -> Option<Arc<RollExpression>> {
        self.roll_expression.clone()
    }

    /// The value this result computes as
    ///
    /// A roll expression that is not summed makes the result operate as the
    /// list of its individual values; otherwise it is the primary value.
    pub fn operable_value(&self) -> Value {
        match &self.roll_expression {
            Some(expr) if !expr.is_sum() => factory::list_value(self.individuals.iter().cloned()),
            _ => self.value.clone(),
        }
    }
}

// The roll expression is metadata and takes no part in equality.
impl PartialEq for RollResult {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
            && self.detail == other.detail
            && self.individuals == other.individuals
    }
}

impl Eq for RollResult {}

impl Hash for RollResult {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        self.detail.hash(state);
        self.individuals.hash(state);
    }
}

impl fmt::Display for RollResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Result: value = {}, detailedResult = {}, values = [",
            self.value, self.detail
        )?;
        for (i, v) in self.individuals.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "]")?;
        if let Some(expr) = &self.roll_expression {
            write!(f, " {}", expr)?;
        }
        Ok(())
    }
}
