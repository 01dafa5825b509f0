//! Expression evaluation.
//!
//! Turns the raw text of two operand fields and an operator selection into a
//! completed [`Expression`], or explains why that is not possible.

use super::error::{EvalError, Side, ValidationError};
use super::operator::Operator;
use serde::{Serialize, Serializer};
use std::fmt;

/// One completed calculation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Expression {
    #[serde(serialize_with = "serialize_number")]
    pub left: f64,
    pub operator: Operator,
    #[serde(serialize_with = "serialize_number")]
    pub right: f64,
    #[serde(serialize_with = "serialize_number")]
    pub result: f64,
}

/// Finite numbers stay numbers; `inf`, `-inf` and `NaN` become strings so
/// they survive formats without a spelling for them.
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.collect_str(value)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.left, self.operator, self.right, self.result
        )
    }
}

/// Evaluate a single binary operation.
///
/// The operator is checked first, then the right operand, then the left
/// operand; the first failure is returned.
pub fn evaluate(
    left_text: &str,
    right_text: &str,
    selection: &str,
) -> Result<Expression, EvalError> {
    let operator = Operator::from_selection(selection)?;
    let right = parse_operand(right_text, Side::Right)?;
    let left = parse_operand(left_text, Side::Left)?;
    let result = operator.apply(left, right)?;

    let expression = Expression {
        left,
        operator,
        right,
        result,
    };
    tracing::debug!(%expression, "evaluated");

    Ok(expression)
}

/// Parse one operand field.
pub fn parse_operand(text: &str, side: Side) -> Result<f64, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::MissingOperand(side));
    }

    text.parse::<f64>()
        .map_err(|_| ValidationError::InvalidOperand(side))
}
