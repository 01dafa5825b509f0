//! A calculator session: one history, fed by successful calculations.

use crate::calculator::{EvalError, Expression, evaluate};
use crate::history::History;

/// Owns the history for the lifetime of a running calculator.
#[derive(Debug, Default)]
pub struct Session {
    history: History,
}

impl Session {
    /// Start a session with an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one "Calculate" action.
    ///
    /// The expression is recorded only when evaluation succeeds. On failure
    /// the history is left untouched.
    pub fn calculate(
        &mut self,
        left: &str,
        right: &str,
        selection: &str,
    ) -> Result<&Expression, EvalError> {
        match evaluate(left, right, selection) {
            Ok(expression) => Ok(self.history.record(expression)),
            Err(err) => {
                if err.is_fatal() {
                    tracing::error!(%err, selection, "calculation aborted");
                } else {
                    tracing::warn!(%err, "calculation rejected");
                }
                Err(err)
            }
        }
    }

    /// Read-only view of the session history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Receive every expression calculated from now on.
    pub fn subscribe(&mut self) -> flume::Receiver<Expression> {
        self.history.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{Side, ValidationError};

    #[test]
    fn test_successes_are_recorded_in_order() {
        let mut session = Session::new();
        assert_eq!(
            session.calculate("1", "2", "+").unwrap().to_string(),
            "1 + 2 = 3"
        );
        session.calculate("7", "2", "Int /").unwrap();
        session.calculate("7", "2", "Real Division (/)").unwrap();

        let lines: Vec<String> = session.history().lines().collect();
        assert_eq!(lines, vec!["1 + 2 = 3", "7 / 2 = 3", "7 / 2 = 3.5"]);
    }

    #[test]
    fn test_failures_leave_history_unchanged() {
        let mut session = Session::new();
        assert_eq!(
            session.calculate("", "2", "+").unwrap_err(),
            ValidationError::MissingOperand(Side::Left).into()
        );
        assert!(session.history().is_empty());

        session.calculate("1", "1", "+").unwrap();
        assert!(session.calculate("abc", "2", "+").is_err());
        assert!(session.calculate("1", "0", "Int /").is_err());
        assert!(session.calculate("1", "2", "Power").is_err());
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_real_division_by_zero_is_recorded() {
        let mut session = Session::new();
        session.calculate("1", "0", "/").unwrap();
        assert_eq!(session.history().last().unwrap().to_string(), "1 / 0 = inf");
    }

    #[test]
    fn test_subscription_forwards_to_history() {
        let mut session = Session::new();
        let rx = session.subscribe();
        session.calculate("2", "3", "*").unwrap();
        session.calculate("", "3", "*").unwrap_err();
        assert_eq!(rx.try_iter().count(), 1);
    }
}
