mod calculator;

pub use calculator::{CalculatorItem, HistoryItem};

/// A list item that can be displayed on the calculator page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListItem {
    /// The outcome of the latest calculation
    Calculator(CalculatorItem),
    /// A past calculation
    History(HistoryItem),
}

impl ListItem {
    /// Get the text shown for this item.
    pub fn text(&self) -> &str {
        match self {
            Self::Calculator(calc) => &calc.display_result,
            Self::History(entry) => &entry.expression,
        }
    }

    /// Check if this item is an error result.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Calculator(calc) if calc.is_error)
    }

    /// Get the section name for this item type.
    pub fn section_name(&self) -> &'static str {
        match self {
            Self::Calculator(_) => "Result",
            Self::History(_) => "History",
        }
    }
}

impl From<CalculatorItem> for ListItem {
    fn from(item: CalculatorItem) -> Self {
        Self::Calculator(item)
    }
}

impl From<HistoryItem> for ListItem {
    fn from(item: HistoryItem) -> Self {
        Self::History(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::evaluate;

    #[test]
    fn test_items_report_their_section() {
        let expression = evaluate("3", "1", "-").unwrap();
        let row = ListItem::from(HistoryItem::new(1, &expression));
        assert_eq!(row.text(), "3 - 1 = 2");
        assert_eq!(row.section_name(), "History");
        assert!(!row.is_error());

        let err = evaluate("3", "x", "-").unwrap_err();
        let result = ListItem::from(CalculatorItem::from_outcome(Err(&err)));
        assert_eq!(result.section_name(), "Result");
        assert!(result.is_error());
    }
}
