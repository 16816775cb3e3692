//! Flat-file persistence for the item store.
//!
//! One item per line as `type,name,quantity,price`, no header, no escaping.
//! A round trip keeps item order, names, quantities and prices. Warranty and
//! shelf-life attributes are not recorded and are reset to
//! [`DEFAULT_WARRANTY_MONTHS`](crate::domain::item::DEFAULT_WARRANTY_MONTHS) and
//! [`DEFAULT_SHELF_LIFE_DAYS`](crate::domain::item::DEFAULT_SHELF_LIFE_DAYS) on
//! load.
//!
//! Saving truncates the destination in place, so an interrupted save can
//! leave a partial file behind.

pub mod inventory_reader;
pub mod inventory_writer;

use crate::domain::item::Item;
use crate::error::Result;
use inventory_reader::{InventoryReader, MalformedLinePolicy};
use inventory_writer::{InventoryWriter, check_representable};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Default location of the inventory file.
pub const DEFAULT_INVENTORY_FILE: &str = "inventory.txt";

/// How `load` treats bad input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    pub on_malformed: MalformedLinePolicy,
    /// Treat a missing file as an empty inventory instead of an error.
    pub allow_missing: bool,
}

/// Writes `items` to `path`, replacing any existing file.
pub fn save(items: &[Item], path: &Path) -> Result<()> {
    check_representable(items)?;
    let file = File::create(path)?;
    let mut writer = InventoryWriter::new(file);
    writer.write_items(items)?;
    info!(path = %path.display(), items = items.len(), "inventory saved");
    Ok(())
}

/// Reads every item from `path`.
pub fn load(path: &Path, options: &LoadOptions) -> Result<Vec<Item>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound && options.allow_missing => {
            debug!(path = %path.display(), "inventory file missing, starting empty");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };
    let items = InventoryReader::new(BufReader::new(file)).read_all(options.on_malformed)?;
    info!(path = %path.display(), items = items.len(), "inventory loaded");
    Ok(items)
}
