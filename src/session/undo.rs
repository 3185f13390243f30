//! Undo stack for deleted records

use crate::error::{DompetError, DompetResult};
use crate::models::Record;

/// Last-in, first-out buffer of deleted records
///
/// An undone record goes back at the end of the ledger, not at the position
/// it was deleted from.
#[derive(Debug, Clone, Default)]
pub struct UndoStack {
    entries: Vec<Record>,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: Record) {
        self.entries.push(record);
    }

    /// Remove and return the most recently deleted record
    pub fn pop(&mut self) -> DompetResult<Record> {
        self.entries.pop().ok_or(DompetError::EmptyUndo)
    }

    /// The record the next [`pop`](Self::pop) would return
    pub fn peek(&self) -> Option<&Record> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, Kind};
    use chrono::NaiveDate;

    fn record(category: &str) -> Record {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        Record::with_details(date, Kind::Expense, category, Amount::new(1), "")
    }

    #[test]
    fn test_lifo_order() {
        let mut stack = UndoStack::new();
        stack.push(record("first"));
        stack.push(record("second"));

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.peek().unwrap().category, "second");
        assert_eq!(stack.pop().unwrap().category, "second");
        assert_eq!(stack.pop().unwrap().category, "first");
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_empty() {
        let mut stack = UndoStack::new();
        assert!(stack.pop().unwrap_err().is_empty_undo());
        assert!(stack.peek().is_none());
    }
}
