//! Session history of completed calculations.

use crate::calculator::Expression;

/// Ordered, append-only log of the expressions calculated in this session.
///
/// Entries are never removed or reordered. Presentation code can either
/// iterate the log or [`subscribe`](History::subscribe) to new entries.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<Expression>,
    subscribers: Vec<flume::Sender<Expression>>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an expression and notify subscribers.
    pub fn record(&mut self, expression: Expression) -> &Expression {
        self.entries.push(expression);
        // Receivers that were dropped fail to send and are pruned here
        self.subscribers
            .retain(|subscriber| subscriber.send(expression).is_ok());
        tracing::trace!(
            len = self.entries.len(),
            subscribers = self.subscribers.len(),
            "recorded expression"
        );
        &self.entries[self.entries.len() - 1]
    }

    /// Receive every expression recorded from now on.
    pub fn subscribe(&mut self) -> flume::Receiver<Expression> {
        let (tx, rx) = flume::unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Number of recorded expressions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The expression recorded at `index`, oldest first.
    pub fn get(&self, index: usize) -> Option<&Expression> {
        self.entries.get(index)
    }

    /// The most recently recorded expression.
    pub fn last(&self) -> Option<&Expression> {
        self.entries.last()
    }

    /// Iterate the entries in the order they were recorded.
    pub fn iter(&self) -> impl Iterator<Item = &Expression> {
        self.entries.iter()
    }

    /// The rendered entries, in the order they were recorded.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(ToString::to_string)
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Expression;
    type IntoIter = std::slice::Iter<'a, Expression>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::evaluate;

    fn expr(left: &str, op: &str, right: &str) -> Expression {
        evaluate(left, right, op).unwrap()
    }

    #[test]
    fn test_records_in_call_order() {
        let mut history = History::new();
        assert!(history.is_empty());

        history.record(expr("1", "+", "2"));
        history.record(expr("7", "/", "2"));
        history.record(expr("7", "%", "2"));

        let lines: Vec<String> = history.lines().collect();
        assert_eq!(lines, vec!["1 + 2 = 3", "7 / 2 = 3.5", "7 % 2 = 1"]);
        assert_eq!(history.len(), 3);
        assert_eq!(history.get(0), Some(&expr("1", "+", "2")));
        assert_eq!(history.last(), Some(&expr("7", "%", "2")));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut history = History::new();
        history.record(expr("1", "+", "1"));
        history.record(expr("1", "+", "1"));
        assert_eq!(history.len(), 2);
        assert_eq!((&history).into_iter().count(), 2);
    }

    #[test]
    fn test_subscribers_see_later_entries() {
        let mut history = History::new();
        history.record(expr("1", "+", "1"));

        let rx = history.subscribe();
        history.record(expr("2", "*", "3"));
        history.record(expr("9", "-", "4"));

        let received: Vec<String> = rx.try_iter().map(|e| e.to_string()).collect();
        assert_eq!(received, vec!["2 * 3 = 6", "9 - 4 = 5"]);
    }

    #[test]
    fn test_dropped_subscribers_are_pruned() {
        let mut history = History::new();
        let rx = history.subscribe();
        drop(rx);

        history.record(expr("1", "+", "1"));
        assert!(history.subscribers.is_empty());
        assert_eq!(history.len(), 1);
    }
}
