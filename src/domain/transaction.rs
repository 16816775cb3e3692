use serde::Serialize;
use std::collections::VecDeque;
use std::fmt;

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
pub enum Action {
    Added,
    Removed,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Added => f.write_str("Added"),
            Action::Removed => f.write_str("Removed"),
        }
    }
}

/// An immutable record of a single add or remove.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct Transaction {
    pub item_name: String,
    pub action: Action,
}

/// Append-only history of inventory transactions, newest first.
///
/// Entries are never edited or removed individually; the log lives as long as
/// its owner.
#[derive(Debug, Default, Clone)]
pub struct TransactionLog {
    entries: VecDeque<Transaction>,
}

impl TransactionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a transaction as the new most recent entry.
    pub fn record(&mut self, item_name: impl Into<String>, action: Action) {
        self.entries.push_front(Transaction {
            item_name: item_name.into(),
            action,
        });
    }

    /// Returns a snapshot of the log, most recent first.
    pub fn list(&self) -> Vec<Transaction> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
