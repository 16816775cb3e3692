use crate::domain::item::{Item, ItemType, Price, Quantity};
use crate::error::{InventoryError, Result};
use crate::interfaces::numbered_lines::{NumberedRecord, NumberedRecords};
use std::io::Read;
use tracing::warn;

const FIELD_COUNT: usize = 4;

/// What to do with a line that cannot be turned into an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedLinePolicy {
    /// Abort the whole load on the first bad line.
    #[default]
    Abort,
    /// Log the bad line and keep going.
    Skip,
}

/// Reads inventory items from the flat `type,name,quantity,price` format.
///
/// Fields are split on commas with no quoting, so a comma inside a name cannot
/// be read back. Empty lines are ignored but still counted, so error line
/// numbers match the file as seen in an editor. Variant attributes are not part of
/// the format and every item comes back with the default warranty or shelf
/// life for its type.
pub struct InventoryReader<R: Read> {
    records: NumberedRecords<R>,
}

impl<R: Read> InventoryReader<R> {
    /// Creates a new `InventoryReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let mut builder = csv::ReaderBuilder::new();
        builder.has_headers(false).flexible(true).quoting(false);
        Self {
            records: NumberedRecords::new(source, builder),
        }
    }

    /// Returns an iterator that lazily reads and parses items.
    ///
    /// Each malformed line yields its own `Parse` error carrying the 1-based
    /// line number; later lines are still read.
    pub fn items(self) -> impl Iterator<Item = Result<Item>> {
        self.records.map(|result| parse_record(&result?))
    }

    /// Reads every item, applying `policy` to malformed lines.
    pub fn read_all(self, policy: MalformedLinePolicy) -> Result<Vec<Item>> {
        let mut items = Vec::new();
        for result in self.items() {
            match result {
                Ok(item) => items.push(item),
                Err(InventoryError::Parse { line, reason })
                    if policy == MalformedLinePolicy::Skip =>
                {
                    warn!(line, %reason, "skipping malformed inventory record");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(items)
    }
}

fn parse_record(numbered: &NumberedRecord) -> Result<Item> {
    let NumberedRecord { line, record } = numbered;
    let line = *line;
    let malformed = |err: InventoryError| {
        let reason = match err {
            InventoryError::InvalidInput(reason) => reason,
            other => other.to_string(),
        };
        InventoryError::Parse { line, reason }
    };

    if record.len() != FIELD_COUNT {
        return Err(InventoryError::Parse {
            line,
            reason: format!("expected {} fields, found {}", FIELD_COUNT, record.len()),
        });
    }

    let item_type: ItemType = record[0].parse().map_err(malformed)?;
    let quantity: Quantity = record[2].parse().map_err(malformed)?;
    let price: Price = record[3].parse().map_err(malformed)?;

    Ok(Item::new(
        &record[1],
        item_type.with_attribute(None),
        quantity,
        price,
    ))
}
