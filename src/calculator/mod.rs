//! Calculator module for evaluating two-operand arithmetic.
//!
//! This module provides functionality to:
//! - Resolve an operator selection into an [`Operator`]
//! - Validate and parse the operand texts
//! - Evaluate the operation into an [`Expression`]
//! - Split a one-line entry such as `7 / 2` into its parts

mod detection;
mod error;
mod evaluation;
mod operator;

pub use detection::{Entry, split_entry};
pub use error::{EvalError, FatalError, Side, ValidationError};
pub use evaluation::{Expression, evaluate, parse_operand};
pub use operator::{DivisionMode, Operator, SelectionError};
