//! In-memory inventory with a transaction history, a FIFO order queue and
//! flat-file persistence.
//!
//! - [`domain`] - items, transactions, orders and the item store port
//! - [`infrastructure`] - the in-memory item store
//! - [`application`] - the `InventoryManager` facade
//! - [`interfaces`] - flat-file codec, command scripts and console reports

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
pub mod telemetry;
