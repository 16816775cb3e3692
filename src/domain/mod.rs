//! Domain types: items and their value objects, the transaction log, the
//! order queue, and the storage port the application layer depends on.

pub mod item;
pub mod order;
pub mod ports;
pub mod transaction;
