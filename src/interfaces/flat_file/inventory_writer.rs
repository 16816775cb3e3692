use crate::domain::item::Item;
use crate::error::{InventoryError, Result};
use std::io::Write;

/// Writes inventory items in the flat `type,name,quantity,price` format.
///
/// Variant attributes (warranty, shelf life) are not written.
pub struct InventoryWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> InventoryWriter<W> {
    pub fn new(destination: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .quote_style(csv::QuoteStyle::Never)
            .from_writer(destination);
        Self { writer }
    }

    /// Writes one line per item, in the given order, and flushes.
    ///
    /// Every name is checked before anything is written.
    pub fn write_items(&mut self, items: &[Item]) -> Result<()> {
        check_representable(items)?;
        for item in items {
            let quantity = item.quantity.to_string();
            let price = item.price.to_string();
            self.writer.write_record([
                item.kind.item_type().as_str(),
                item.name.as_str(),
                quantity.as_str(),
                price.as_str(),
            ])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Fails with `InvalidInput` if any name would break the line format.
pub fn check_representable(items: &[Item]) -> Result<()> {
    match items
        .iter()
        .find(|item| item.name.contains([',', '\n', '\r']))
    {
        Some(item) => Err(InventoryError::InvalidInput(format!(
            "Name '{}' cannot be saved: commas and line breaks are not allowed",
            item.name.escape_debug()
        ))),
        None => Ok(()),
    }
}
