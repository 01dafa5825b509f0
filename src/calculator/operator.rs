//! Arithmetic operators and the labels they are selected by.

use super::error::{FatalError, Side, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 2^63, the first magnitude that no longer fits in an `i64`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// How `/` treats its operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DivisionMode {
    /// IEEE-754 division.
    Real,
    /// Both operands truncated toward zero, then integer division.
    Integer,
}

/// One of the five arithmetic operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide(DivisionMode),
    Remainder,
}

impl Operator {
    /// Every selectable operator, in pick-list order.
    pub const CHOICES: [Operator; 6] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide(DivisionMode::Real),
        Self::Divide(DivisionMode::Integer),
        Self::Remainder,
    ];

    /// The label shown in the operator pick list.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Add => "Addition (+)",
            Self::Subtract => "Subtraction (-)",
            Self::Multiply => "Multiplication (*)",
            Self::Divide(DivisionMode::Real) => "Real Division (/)",
            Self::Divide(DivisionMode::Integer) => "Integer Division (Int /)",
            Self::Remainder => "Remainder (%)",
        }
    }

    /// The symbol used when rendering an expression.
    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide(_) => '/',
            Self::Remainder => '%',
        }
    }

    /// Resolve a pick-list index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::CHOICES.get(index).copied()
    }

    /// Resolve a free-text operator selection.
    ///
    /// Exact labels win (ignoring case and surrounding whitespace). Anything
    /// else resolves through the first operator symbol it contains, so both
    /// `"+ Addition"` and `"Int /"` are understood. Division switches to
    /// integer mode when the selection mentions `int`.
    pub fn from_selection(selection: &str) -> Result<Self, SelectionError> {
        let selection = selection.trim();
        if selection.is_empty() {
            return Err(SelectionError::Missing);
        }

        if let Some(op) = Self::CHOICES
            .iter()
            .find(|op| op.label().eq_ignore_ascii_case(selection))
        {
            return Ok(*op);
        }

        let symbol = selection
            .chars()
            .find(|c| Self::is_symbol(*c))
            .ok_or_else(|| SelectionError::Unknown(selection.to_string()))?;

        Ok(match symbol {
            '+' => Self::Add,
            '-' => Self::Subtract,
            '*' => Self::Multiply,
            '/' if selection.to_ascii_lowercase().contains("int") => {
                Self::Divide(DivisionMode::Integer)
            }
            '/' => Self::Divide(DivisionMode::Real),
            '%' => Self::Remainder,
            other => unreachable!("{other:?} passed is_symbol but is not an operator"),
        })
    }

    /// Check if a character is one of the five operator symbols.
    pub fn is_symbol(c: char) -> bool {
        matches!(c, '+' | '-' | '*' | '/' | '%')
    }

    /// Apply the operator to two operands.
    pub fn apply(&self, left: f64, right: f64) -> Result<f64, ValidationError> {
        match self {
            Self::Add => Ok(left + right),
            Self::Subtract => Ok(left - right),
            Self::Multiply => Ok(left * right),
            Self::Divide(DivisionMode::Real) => Ok(left / right),
            Self::Divide(DivisionMode::Integer) => divide_truncated(left, right),
            Self::Remainder => Ok(left % right),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Why a selection did not resolve to an operator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionError {
    /// Nothing was selected.
    Missing,
    /// The selection names no known operator.
    Unknown(String),
}

impl From<SelectionError> for super::EvalError {
    fn from(err: SelectionError) -> Self {
        match err {
            SelectionError::Missing => ValidationError::MissingOperator.into(),
            SelectionError::Unknown(selection) => FatalError::UnknownOperator(selection).into(),
        }
    }
}

fn divide_truncated(left: f64, right: f64) -> Result<f64, ValidationError> {
    let left = to_integer(left, Side::Left)?;
    let right = to_integer(right, Side::Right)?;

    if right == 0 {
        return Err(ValidationError::DivisionByZero);
    }

    left.checked_div(right)
        .map(|quotient| quotient as f64)
        .ok_or(ValidationError::IntegerOverflow)
}

fn to_integer(value: f64, side: Side) -> Result<i64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteIntegerOperand(side));
    }

    let truncated = value.trunc();
    if !(-I64_BOUND..I64_BOUND).contains(&truncated) {
        return Err(ValidationError::IntegerOverflow);
    }

    Ok(truncated as i64)
}
