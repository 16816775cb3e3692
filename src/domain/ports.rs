use super::item::{Item, Price, Quantity};
use crate::error::Result;

/// Ordered storage for inventory items.
///
/// Items are looked up by exact, case-sensitive name with a linear scan. When
/// several items share a name, every operation acts on the first one in store
/// order. New items are appended to the back.
pub trait ItemStore {
    /// Appends an item, failing with `CapacityExceeded` if the store is full.
    fn add(&mut self, item: Item) -> Result<()>;
    /// Position of the first item called `name`, or `NotFound`.
    fn find_by_name(&self, name: &str) -> Result<usize>;
    fn get(&self, index: usize) -> Option<&Item>;
    /// Unlinks the first item called `name`, keeping the rest in order.
    fn remove_by_name(&mut self, name: &str) -> Result<Item>;
    /// Empties the store, returning the items in store order.
    fn remove_all(&mut self) -> Vec<Item>;
    /// Overwrites quantity and price of the first item called `name`.
    fn update(&mut self, name: &str, quantity: Quantity, price: Price) -> Result<()>;
    fn list(&self) -> Vec<Item>;
    /// Swaps in a whole new set of items, leaving the store untouched on error.
    fn replace_all(&mut self, items: Vec<Item>) -> Result<()>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub type ItemStoreBox = Box<dyn ItemStore>;
