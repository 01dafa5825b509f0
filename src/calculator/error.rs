//! Error types for expression evaluation.
//!
//! Failures come in two tiers. A [`ValidationError`] is caused by user input
//! and is shown to the user; the calculation is simply not performed. A
//! [`FatalError`] means an upstream invariant is broken and the caller should
//! abort instead of carrying on.

use std::fmt;
use thiserror::Error;

/// Which operand an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// A recoverable, user-facing validation failure.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select one of the arithmetic operations.")]
    MissingOperator,

    #[error("Please provide the {0} operand for the arithmetic operation.")]
    MissingOperand(Side),

    #[error("Please enter a number as the {0} operand for the arithmetic operation.")]
    InvalidOperand(Side),

    #[error("The {0} operand must be a finite number for integer division.")]
    NonFiniteIntegerOperand(Side),

    #[error("Cannot perform integer division by zero.")]
    DivisionByZero,

    #[error("The integer division result is out of range.")]
    IntegerOverflow,
}

/// A broken invariant. Not meant to be shown as a regular alert.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FatalError {
    #[error("unknown arithmetic operator selection {0:?}")]
    UnknownOperator(String),
}

/// Any failure of [`evaluate`](super::evaluate).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Fatal(#[from] FatalError),
}

impl EvalError {
    /// Check if this error must abort the caller.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal(_))
    }

    /// The validation failure, if this is one.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Fatal(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_operand() {
        assert_eq!(
            ValidationError::MissingOperand(Side::Left).to_string(),
            "Please provide the left operand for the arithmetic operation."
        );
        assert_eq!(
            ValidationError::InvalidOperand(Side::Right).to_string(),
            "Please enter a number as the right operand for the arithmetic operation."
        );
    }

    #[test]
    fn test_eval_error_is_transparent() {
        let err = EvalError::from(ValidationError::MissingOperator);
        assert_eq!(
            err.to_string(),
            "Please select one of the arithmetic operations."
        );
        assert!(!err.is_fatal());
        assert_eq!(err.validation(), Some(&ValidationError::MissingOperator));

        let fatal = EvalError::from(FatalError::UnknownOperator("?".into()));
        assert!(fatal.is_fatal());
        assert!(fatal.validation().is_none());
    }
}
