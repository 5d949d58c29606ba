//! Operator dispatch for values
//!
//! Binary operators resolve by operand category in a fixed priority:
//! List, then Null, Dictionary, Boolean, String, and finally the numeric
//! rule. The first row that matches either operand decides the outcome.
//! Result operands are replaced by their operable value before any row is
//! consulted.

use tracing::trace;

use crate::convert::{to_float, to_integer, to_list, to_text};
use crate::data_type::DataType;
use crate::data_value::DataValue;
use crate::error::{ValueError, ValueResult};
use crate::factory;
use crate::value::{Value, ValueKind};

/// Longest string a repetition may produce (`isize::MAX` bytes)
const MAX_TEXT_LEN: usize = usize::MAX >> 1;

/// Binary operation type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
    Power,
}

impl BinOp {
    /// All binary operators
    pub const ALL: [BinOp; 6] = [
        BinOp::Add,
        BinOp::Subtract,
        BinOp::Multiply,
        BinOp::Divide,
        BinOp::Remainder,
        BinOp::Power,
    ];

    /// Get the operator symbol
    pub fn as_str(&self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Subtract => "-",
            BinOp::Multiply => "*",
            BinOp::Divide => "/",
            BinOp::Remainder => "%",
            BinOp::Power => "^",
        }
    }

    /// Get the operator name used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            BinOp::Add => "add",
            BinOp::Subtract => "subtract",
            BinOp::Multiply => "multiply",
            BinOp::Divide => "divide",
            BinOp::Remainder => "remainder",
            BinOp::Power => "power",
        }
    }
}

/// Apply a binary operator to two values
pub fn binary_op(op: BinOp, lhs: &Value, rhs: &Value) -> ValueResult<Value> {
    let lhs = operand(lhs);
    let rhs = operand(rhs);
    match op {
        BinOp::Add => dynamic_add(lhs, rhs),
        BinOp::Subtract => dynamic_subtract(lhs, rhs),
        BinOp::Multiply => dynamic_multiply(lhs, rhs),
        BinOp::Divide => dynamic_divide(lhs, rhs),
        BinOp::Remainder => dynamic_remainder(lhs, rhs),
        BinOp::Power => dynamic_power(lhs, rhs),
    }
}

/// Negate a numeric value
pub fn negate(value: &Value) -> ValueResult<Value> {
    match value.kind() {
        ValueKind::Long(v) => Ok(factory::long_value(v.wrapping_neg())),
        ValueKind::Double(v) => Ok(factory::double_value(-v)),
        ValueKind::Result(r) => negate(r.operable()),
        _ => {
            trace!(operator = "negate", operand = %value.data_type(), "operation rejected");
            Err(ValueError::unsupported_operation(
                "negate",
                &[value.data_type()],
                format!("cannot negate a {}", value.data_type()),
            ))
        }
    }
}

/// Replace Result operands by their operable value until none is left
fn operand(value: &Value) -> &Value {
    let mut current = value;
    while let Some(inner) = current.operable_value() {
        trace!(operable = %inner.data_type(), "unwrapping result operand");
        current = inner;
    }
    current
}

fn either(lhs: &Value, rhs: &Value, category: DataType) -> bool {
    lhs.data_type() == category || rhs.data_type() == category
}

fn both(lhs: &Value, rhs: &Value, category: DataType) -> bool {
    lhs.data_type() == category && rhs.data_type() == category
}

fn reject(op: BinOp, lhs: &Value, rhs: &Value, reason: impl Into<String>) -> ValueError {
    trace!(
        operator = op.name(),
        symbol = op.as_str(),
        lhs = %lhs.data_type(),
        rhs = %rhs.data_type(),
        "operation rejected"
    );
    ValueError::unsupported_operation(op.name(), &[lhs.data_type(), rhs.data_type()], reason)
}

/// Null, Dictionary and Boolean rows; these reject every operator
fn reject_non_arithmetic(op: BinOp, lhs: &Value, rhs: &Value) -> ValueResult<()> {
    for category in [DataType::Null, DataType::Dictionary, DataType::Boolean] {
        if either(lhs, rhs, category) {
            return Err(reject(
                op,
                lhs,
                rhs,
                format!("cannot {} with a {}", op.name(), category),
            ));
        }
    }
    Ok(())
}

/// Numeric row: Long when both operands are Long, Double otherwise
fn numeric<I, F>(lhs: &Value, rhs: &Value, int_op: I, float_op: F) -> ValueResult<Value>
where
    I: FnOnce(i64, i64) -> ValueResult<i64>,
    F: FnOnce(f64, f64) -> f64,
{
    match (lhs.kind(), rhs.kind()) {
        (ValueKind::Long(a), ValueKind::Long(b)) => Ok(factory::long_value(int_op(*a, *b)?)),
        _ => Ok(factory::double_value(float_op(to_float(lhs)?, to_float(rhs)?))),
    }
}

/// Addition
///
/// A List on either side concatenates, a String on either side joins text.
fn dynamic_add(lhs: &Value, rhs: &Value) -> ValueResult<Value> {
    if either(lhs, rhs, DataType::List) {
        let mut items = to_list(lhs)?;
        items.extend(to_list(rhs)?);
        return Ok(factory::list_value(items));
    }
    reject_non_arithmetic(BinOp::Add, lhs, rhs)?;
    if either(lhs, rhs, DataType::String) {
        return Ok(factory::string_value(to_text(lhs)? + &to_text(rhs)?));
    }
    numeric(lhs, rhs, |a, b| Ok(a.wrapping_add(b)), |a, b| a + b)
}

/// Subtraction
///
/// List minus List drops every element of the first that occurs anywhere
/// in the second. String minus String deletes every occurrence of the
/// second string.
fn dynamic_subtract(lhs: &Value, rhs: &Value) -> ValueResult<Value> {
    if both(lhs, rhs, DataType::List) {
        let removed = to_list(rhs)?;
        let kept = to_list(lhs)?
            .into_iter()
            .filter(|item| !removed.contains(item));
        return Ok(factory::list_value(kept));
    }
    if either(lhs, rhs, DataType::List) {
        return Err(reject(
            BinOp::Subtract,
            lhs,
            rhs,
            "can only subtract a list from another list",
        ));
    }
    reject_non_arithmetic(BinOp::Subtract, lhs, rhs)?;
    if both(lhs, rhs, DataType::String) {
        let pattern = to_text(rhs)?;
        return Ok(factory::string_value(to_text(lhs)?.replace(&pattern, "")));
    }
    if either(lhs, rhs, DataType::String) {
        return Err(reject(
            BinOp::Subtract,
            lhs,
            rhs,
            "cannot subtract a number from a string",
        ));
    }
    numeric(lhs, rhs, |a, b| Ok(a.wrapping_sub(b)), |a, b| a - b)
}

/// Multiplication
///
/// A String times a number repeats the string; the count truncates toward
/// zero and a count of zero or less yields the empty string.
fn dynamic_multiply(lhs: &Value, rhs: &Value) -> ValueResult<Value> {
    if either(lhs, rhs, DataType::List) {
        return Err(reject(BinOp::Multiply, lhs, rhs, "cannot multiply a list"));
    }
    reject_non_arithmetic(BinOp::Multiply, lhs, rhs)?;
    let (text, count) = match (lhs.as_str(), rhs.as_str()) {
        (Some(text), None) => (text, rhs),
        (None, Some(text)) => (text, lhs),
        (None, None) => {
            return numeric(lhs, rhs, |a, b| Ok(a.wrapping_mul(b)), |a, b| a * b);
        }
        (Some(_), Some(_)) => {
            return Err(reject(
                BinOp::Multiply,
                lhs,
                rhs,
                "cannot multiply a string by a string",
            ))
        }
    };
    if !count.is_numeric() {
        return Err(reject(
            BinOp::Multiply,
            lhs,
            rhs,
            "cannot multiply a string by a non numeric value",
        ));
    }
    // Negative counts fail the conversion and repeat nothing.
    let count = usize::try_from(to_integer(count)?).unwrap_or(0);
    if text.is_empty() || count == 0 {
        return Ok(factory::string_value(String::new()));
    }
    match text.len().checked_mul(count) {
        Some(len) if len <= MAX_TEXT_LEN => Ok(factory::string_value(text.repeat(count))),
        _ => Err(reject(
            BinOp::Multiply,
            lhs,
            rhs,
            "repeated string is too large",
        )),
    }
}

/// Rows shared by divide, remainder and power: only numbers are accepted
fn numeric_only(op: BinOp, lhs: &Value, rhs: &Value) -> ValueResult<()> {
    if either(lhs, rhs, DataType::List) {
        return Err(reject(op, lhs, rhs, format!("cannot {} with a List", op.name())));
    }
    reject_non_arithmetic(op, lhs, rhs)?;
    if either(lhs, rhs, DataType::String) {
        return Err(reject(op, lhs, rhs, format!("cannot {} with a String", op.name())));
    }
    Ok(())
}

/// Division; Long by Long truncates toward zero
fn dynamic_divide(lhs: &Value, rhs: &Value) -> ValueResult<Value> {
    numeric_only(BinOp::Divide, lhs, rhs)?;
    numeric(
        lhs,
        rhs,
        |a, b| {
            if b == 0 {
                Err(ValueError::DivisionByZero)
            } else {
                Ok(a.wrapping_div(b))
            }
        },
        |a, b| a / b,
    )
}

/// Remainder; the sign follows the dividend
fn dynamic_remainder(lhs: &Value, rhs: &Value) -> ValueResult<Value> {
    numeric_only(BinOp::Remainder, lhs, rhs)?;
    numeric(
        lhs,
        rhs,
        |a, b| {
            if b == 0 {
                Err(ValueError::DivisionByZero)
            } else {
                Ok(a.wrapping_rem(b))
            }
        },
        |a, b| a % b,
    )
}

/// Power, computed in floating point
///
/// Long to a Long power casts the floating result back to i64; the cast
/// saturates and loses precision for large magnitudes.
fn dynamic_power(lhs: &Value, rhs: &Value) -> ValueResult<Value> {
    numeric_only(BinOp::Power, lhs, rhs)?;
    numeric(
        lhs,
        rhs,
        |a, b| Ok((a as f64).powf(b as f64) as i64),
        f64::powf,
    )
}
