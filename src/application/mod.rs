//! Application layer containing the inventory operations.
//!
//! This module defines the `InventoryManager`, the facade every front end goes
//! through. It composes the item store, the transaction log and the order
//! queue, and delegates persistence to the flat-file codec.

pub mod manager;
