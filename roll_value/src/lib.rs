//! Value algebra for an embedded dice-rolling script language
//!
//! This crate provides the immutable values a script evaluator computes
//! with. It includes:
//!
//! - `Value`, a closed set of dynamically-typed categories
//! - `DataType` tags and their coercion table
//! - Operator dispatch across mixed categories
//! - `RollResult` for already computed dice rolls
//! - `LabeledValue` for naming sub-results
//! - `ValueError` for error handling
//!
//! Parsing, random number generation and rendering live elsewhere; this
//! crate only carries their results.

pub mod convert;
pub mod data_type;
pub mod data_value;
pub mod dispatch;
pub mod error;
pub mod factory;
pub mod label;
pub mod result;
pub mod value;

/// Prelude module for convenient imports
///
/// # Example
/// ```
/// use roll_value::prelude::*;
///
/// let total = long_value(2).add(&long_value(3)).unwrap();
/// assert_eq!(total, long_value(5));
/// ```
pub mod prelude {
    pub use super::data_type::DataType;
    pub use super::data_value::{DataValue, Datum};
    pub use super::dispatch::BinOp;
    pub use super::error::{ErrorKind, ValueError, ValueResult};
    pub use super::factory::*;
    pub use super::label::{Label, LabeledValue, NO_LABEL};
    pub use super::result::{ResultBuilder, RollExpression, RollResult};
    pub use super::value::{Dictionary, Value, ValueKind};
}

pub use prelude::*;
