use crate::domain::item::{Item, ItemDetails, Price, Quantity};
use crate::domain::order::{Order, OrderQueue};
use crate::domain::ports::ItemStoreBox;
use crate::domain::transaction::{Action, Transaction, TransactionLog};
use crate::error::{InventoryError, Result};
use crate::infrastructure::in_memory::InMemoryItemStore;
use crate::interfaces::flat_file::{self, LoadOptions};
use rust_decimal::Decimal;
use std::path::Path;
use tracing::{debug, info};

/// The main entry point for inventory operations.
///
/// `InventoryManager` owns the item store, the transaction log and the order
/// queue. Adding and removing items records a transaction; updates and loads
/// do not. A failed operation leaves all three untouched.
pub struct InventoryManager {
    store: ItemStoreBox,
    transactions: TransactionLog,
    orders: OrderQueue,
}

impl Default for InventoryManager {
    fn default() -> Self {
        Self::new(Box::new(InMemoryItemStore::new()))
    }
}

impl InventoryManager {
    /// Creates a new `InventoryManager` over the given item store.
    pub fn new(store: ItemStoreBox) -> Self {
        Self {
            store,
            transactions: TransactionLog::new(),
            orders: OrderQueue::new(),
        }
    }

    /// Validates and appends a new item, then records it as `Added`.
    pub fn add_item(&mut self, details: ItemDetails) -> Result<()> {
        let item = details.validate()?;
        let name = item.name.clone();
        self.store.add(item)?;
        self.transactions.record(name.as_str(), Action::Added);
        info!(item = %name, "item added");
        Ok(())
    }

    /// Removes the first item called `name` and records it as `Removed`.
    pub fn remove_item(&mut self, name: &str) -> Result<Item> {
        let item = self.store.remove_by_name(name)?;
        self.transactions.record(item.name.as_str(), Action::Removed);
        info!(item = %item.name, "item removed");
        Ok(item)
    }

    /// Empties the inventory, recording one `Removed` per item in store order.
    pub fn remove_all_items(&mut self) -> Vec<Item> {
        let removed = self.store.remove_all();
        for item in &removed {
            self.transactions.record(item.name.as_str(), Action::Removed);
        }
        info!(count = removed.len(), "all items removed");
        removed
    }

    /// Sets quantity and price of the first item called `name`.
    ///
    /// Updates are not transactions and leave the log alone.
    pub fn update_item(&mut self, name: &str, quantity: i64, price: Decimal) -> Result<()> {
        let quantity = Quantity::new(quantity)?;
        let price = Price::new(price)?;
        self.store.update(name, quantity, price)?;
        info!(item = %name, %quantity, %price, "item updated");
        Ok(())
    }

    /// Looks up the first item called `name`.
    pub fn find_item(&self, name: &str) -> Result<&Item> {
        let index = self.store.find_by_name(name)?;
        debug!(item = %name, index, "item found");
        self.store
            .get(index)
            .ok_or_else(|| InventoryError::NotFound(name.to_string()))
    }

    pub fn inventory(&self) -> Vec<Item> {
        self.store.list()
    }

    pub fn transactions(&self) -> Vec<Transaction> {
        self.transactions.list()
    }

    pub fn orders(&self) -> Vec<Order> {
        self.orders.peek_all()
    }

    pub fn place_order(&mut self, description: impl Into<String>) {
        let description = description.into();
        debug!(order = %description, "order queued");
        self.orders.enqueue(description);
    }

    /// Takes the oldest pending order off the queue, or fails with `Empty`.
    pub fn process_order(&mut self) -> Result<Order> {
        let order = self.orders.dequeue()?;
        info!(order = %order, "order processed");
        Ok(order)
    }

    /// Writes the current inventory to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        flat_file::save(&self.store.list(), path)
    }

    /// Replaces the whole inventory with the contents of `path`.
    ///
    /// Nothing is recorded in the transaction log. On any error the current
    /// inventory is kept.
    pub fn load(&mut self, path: &Path, options: &LoadOptions) -> Result<usize> {
        let items = flat_file::load(path, options)?;
        let count = items.len();
        self.store.replace_all(items)?;
        Ok(count)
    }
}
