use crate::domain::item::{Item, Price, Quantity};
use crate::domain::ports::ItemStore;
use crate::error::{InventoryError, Result};

/// Capacity of the original fixed-size inventory.
pub const LEGACY_CAPACITY: usize = 100;

/// An in-memory, insertion-ordered item store.
///
/// Backed by a `Vec<Item>`. Unbounded by default; `bounded` reproduces the
/// fixed-capacity inventory that refuses new items once full.
#[derive(Debug, Default, Clone)]
pub struct InMemoryItemStore {
    items: Vec<Item>,
    capacity: Option<usize>,
}

impl InMemoryItemStore {
    /// Creates a new, empty, unbounded item store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new, empty store that holds at most `capacity` items.
    pub fn bounded(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity: Some(capacity),
        }
    }

    fn check_capacity(&self, wanted: usize) -> Result<()> {
        match self.capacity {
            Some(capacity) if wanted > capacity => {
                Err(InventoryError::CapacityExceeded { capacity })
            }
            _ => Ok(()),
        }
    }
}

impl ItemStore for InMemoryItemStore {
    fn add(&mut self, item: Item) -> Result<()> {
        self.check_capacity(self.items.len() + 1)?;
        self.items.push(item);
        Ok(())
    }

    fn find_by_name(&self, name: &str) -> Result<usize> {
        self.items
            .iter()
            .position(|item| item.name == name)
            .ok_or_else(|| InventoryError::NotFound(name.to_string()))
    }

    fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    fn remove_by_name(&mut self, name: &str) -> Result<Item> {
        let index = self.find_by_name(name)?;
        Ok(self.items.remove(index))
    }

    fn remove_all(&mut self) -> Vec<Item> {
        std::mem::take(&mut self.items)
    }

    fn update(&mut self, name: &str, quantity: Quantity, price: Price) -> Result<()> {
        let index = self.find_by_name(name)?;
        let item = &mut self.items[index];
        item.quantity = quantity;
        item.price = price;
        Ok(())
    }

    fn list(&self) -> Vec<Item> {
        self.items.clone()
    }

    fn replace_all(&mut self, items: Vec<Item>) -> Result<()> {
        self.check_capacity(items.len())?;
        self.items = items;
        Ok(())
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
