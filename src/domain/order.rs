use crate::error::{InventoryError, Result};
use serde::Serialize;
use std::collections::VecDeque;
use std::fmt;

/// A free-text order request. Orders carry no identity beyond their position.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
#[serde(transparent)]
pub struct Order(String);

impl Order {
    pub fn new(description: impl Into<String>) -> Self {
        Self(description.into())
    }

    pub fn description(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pending orders, processed first in, first out.
#[derive(Debug, Default, Clone)]
pub struct OrderQueue {
    orders: VecDeque<Order>,
}

impl OrderQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, description: impl Into<String>) {
        self.orders.push_back(Order::new(description));
    }

    /// Removes and returns the oldest pending order.
    pub fn dequeue(&mut self) -> Result<Order> {
        self.orders.pop_front().ok_or(InventoryError::Empty)
    }

    /// Returns the pending orders oldest first, without consuming them.
    pub fn peek_all(&self) -> Vec<Order> {
        self.orders.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
