//! Calculator item representing the outcome of the last calculation.

use crate::calculator::{EvalError, Expression};

/// What the page shows after pressing "Calculate".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalculatorItem {
    /// The rendered expression on success, the alert message on failure.
    pub display_result: String,
    /// Whether this is an error result.
    pub is_error: bool,
    /// Whether the error broke an invariant and the page should stop.
    pub is_fatal: bool,
}

impl CalculatorItem {
    /// Create a new calculator item from an evaluation outcome.
    pub fn from_outcome(outcome: Result<&Expression, &EvalError>) -> Self {
        match outcome {
            Ok(expression) => Self {
                display_result: expression.to_string(),
                is_error: false,
                is_fatal: false,
            },
            Err(err) => Self {
                display_result: err.to_string(),
                is_error: true,
                is_fatal: err.is_fatal(),
            },
        }
    }
}

/// One row of the history list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryItem {
    /// 1-based position in the history.
    pub row: usize,
    pub expression: String,
}

impl HistoryItem {
    /// Create the row for the history entry at 0-based `index`.
    pub fn new(index: usize, expression: &Expression) -> Self {
        Self {
            row: index + 1,
            expression: expression.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::evaluate;

    #[test]
    fn test_success_item() {
        let expression = evaluate("7", "2", "/").unwrap();
        let item = CalculatorItem::from_outcome(Ok(&expression));
        assert_eq!(item.display_result, "7 / 2 = 3.5");
        assert!(!item.is_error);
    }

    #[test]
    fn test_error_item_shows_message() {
        let err = evaluate("7", "", "/").unwrap_err();
        let item = CalculatorItem::from_outcome(Err(&err));
        assert_eq!(
            item.display_result,
            "Please provide the right operand for the arithmetic operation."
        );
        assert!(item.is_error);
        assert!(!item.is_fatal);
    }

    #[test]
    fn test_history_rows_are_one_based() {
        let expression = evaluate("1", "2", "-").unwrap();
        let item = HistoryItem::new(0, &expression);
        assert_eq!(item.row, 1);
        assert_eq!(item.expression, "1 - 2 = -1");
    }
}
