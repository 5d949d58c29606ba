//! Error types for value projection, coercion and arithmetic
//!
//! Every failure is raised at the point of violation and handed back to the
//! caller unchanged. The evaluator decides how to report it.

use std::fmt;

use thiserror::Error;

use crate::data_type::DataType;

/// Value error type
///
/// Each variant's message starts with the failure category so it can be
/// shown to a script author as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// Integer or float projection of a non-numeric value
    #[error("NumericConversion: {0}")]
    NumericConversion(String),

    /// Projection to text, list, dictionary or result is not allowed
    #[error("UnsupportedConversion: {0}")]
    UnsupportedConversion(String),

    /// Operator (or negation) not defined for the operand categories
    #[error("UnsupportedOperation: {operator}({operands}): {reason}")]
    UnsupportedOperation {
        /// Name of the rejected operator
        operator: &'static str,
        /// Comma separated operand category names
        operands: String,
        /// Why the combination is rejected
        reason: String,
    },

    /// Integer division or remainder by zero
    #[error("DivisionByZero: integer division by zero")]
    DivisionByZero,

    /// Result builder finalized without a primary value
    #[error("ConstructionError: {0}")]
    Construction(String),
}

/// Failure category of a [`ValueError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NumericConversion,
    UnsupportedConversion,
    UnsupportedOperation,
    DivisionByZero,
    Construction,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::NumericConversion => "NumericConversion",
            ErrorKind::UnsupportedConversion => "UnsupportedConversion",
            ErrorKind::UnsupportedOperation => "UnsupportedOperation",
            ErrorKind::DivisionByZero => "DivisionByZero",
            ErrorKind::Construction => "ConstructionError",
        };
        f.write_str(name)
    }
}

impl ValueError {
    /// Create a numeric conversion error
    pub fn numeric_conversion<S: Into<String>>(msg: S) -> Self {
        ValueError::NumericConversion(msg.into())
    }

    /// Create an unsupported conversion error
    pub fn unsupported_conversion<S: Into<String>>(msg: S) -> Self {
        ValueError::UnsupportedConversion(msg.into())
    }

    /// Create an unsupported operation error for the given operand categories
    pub fn unsupported_operation<S: Into<String>>(
        operator: &'static str,
        operands: &[DataType],
        reason: S,
    ) -> Self {
        ValueError::UnsupportedOperation {
            operator,
            operands: operands
                .iter()
                .map(|t| t.to_string())
                .collect::<Vec<_>>()
                .join(", "),
            reason: reason.into(),
        }
    }

    /// Create a construction error
    pub fn construction<S: Into<String>>(msg: S) -> Self {
        ValueError::Construction(msg.into())
    }

    /// Failure category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValueError::NumericConversion(_) => ErrorKind::NumericConversion,
            ValueError::UnsupportedConversion(_) => ErrorKind::UnsupportedConversion,
            ValueError::UnsupportedOperation { .. } => ErrorKind::UnsupportedOperation,
            ValueError::DivisionByZero => ErrorKind::DivisionByZero,
            ValueError::Construction(_) => ErrorKind::Construction,
        }
    }
}

/// Result type alias for value operations
pub type ValueResult<T> = Result<T, ValueError>;
