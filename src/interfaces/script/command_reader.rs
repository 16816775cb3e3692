use crate::domain::item::{ItemDetails, ItemType};
use crate::error::{InventoryError, Result};
use crate::interfaces::numbered_lines::NumberedRecords;
use csv::StringRecord;
use rust_decimal::Decimal;
use std::io::Read;
use std::path::PathBuf;
use std::str::FromStr;

/// A single line of an inventory script.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `add,<type>,<name>,<quantity>,<price>[,<warranty months | shelf-life days>]`
    Add(ItemDetails),
    /// `remove,<name>`
    Remove { name: String },
    /// `remove-all`
    RemoveAll,
    /// `update,<name>,<quantity>,<price>`
    Update {
        name: String,
        quantity: i64,
        price: Decimal,
    },
    /// `list`
    List,
    /// `transactions`
    Transactions,
    /// `orders`
    Orders,
    /// `order,<description>`; commas in the description are kept.
    PlaceOrder { description: String },
    /// `process`
    ProcessOrder,
    /// `save[,<path>]`
    Save { path: Option<PathBuf> },
    /// `load[,<path>]`
    Load { path: Option<PathBuf> },
}

/// Reads commands from a script, one per line.
///
/// Fields are comma-separated and trimmed. Empty lines and lines whose first
/// non-blank character is `#` are ignored, but still counted for the line
/// numbers in error messages.
pub struct CommandReader<R: Read> {
    records: NumberedRecords<R>,
}

impl<R: Read> CommandReader<R> {
    pub fn new(source: R) -> Self {
        let mut builder = csv::ReaderBuilder::new();
        builder
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(csv::Trim::All);
        Self {
            records: NumberedRecords::new(source, builder).with_comment(b'#'),
        }
    }

    /// Returns an iterator that lazily reads and parses commands.
    ///
    /// A bad line yields an `InvalidInput` error and does not stop the
    /// iterator.
    pub fn commands(self) -> impl Iterator<Item = Result<Command>> {
        self.records.map(|result| {
            let numbered = result.map_err(|e| match e {
                InventoryError::Parse { line, reason } => {
                    InventoryError::InvalidInput(format!("line {}: {}", line, reason))
                }
                other => other,
            })?;
            let line = numbered.line;
            parse_command(&numbered.record).map_err(|e| match e {
                InventoryError::InvalidInput(reason) => {
                    InventoryError::InvalidInput(format!("line {}: {}", line, reason))
                }
                other => other,
            })
        })
    }
}

fn parse_command(record: &StringRecord) -> Result<Command> {
    let verb = record.get(0).unwrap_or_default().to_ascii_lowercase();
    match verb.as_str() {
        "add" => {
            expect_fields(record, &verb, 5..=6)?;
            let item_type: ItemType = record[1].parse()?;
            let name = required_name(&record[2])?;
            let quantity = parse_number::<i64>(&record[3], "Quantity")?;
            let price = parse_number::<Decimal>(&record[4], "Price")?;
            let attribute = record
                .get(5)
                .map(|extra| parse_number::<u32>(extra, "Attribute"))
                .transpose()?;
            Ok(Command::Add(ItemDetails {
                name,
                kind: item_type.with_attribute(attribute),
                quantity,
                price,
            }))
        }
        "remove" => {
            expect_fields(record, &verb, 2..=2)?;
            Ok(Command::Remove {
                name: required_name(&record[1])?,
            })
        }
        "remove-all" => {
            expect_fields(record, &verb, 1..=1)?;
            Ok(Command::RemoveAll)
        }
        "update" => {
            expect_fields(record, &verb, 4..=4)?;
            Ok(Command::Update {
                name: required_name(&record[1])?,
                quantity: parse_number(&record[2], "Quantity")?,
                price: parse_number(&record[3], "Price")?,
            })
        }
        "list" => {
            expect_fields(record, &verb, 1..=1)?;
            Ok(Command::List)
        }
        "transactions" => {
            expect_fields(record, &verb, 1..=1)?;
            Ok(Command::Transactions)
        }
        "orders" => {
            expect_fields(record, &verb, 1..=1)?;
            Ok(Command::Orders)
        }
        "order" => {
            let description = record.iter().skip(1).collect::<Vec<_>>().join(",");
            if description.is_empty() {
                return Err(InventoryError::InvalidInput(
                    "order needs a description".to_string(),
                ));
            }
            Ok(Command::PlaceOrder { description })
        }
        "process" => {
            expect_fields(record, &verb, 1..=1)?;
            Ok(Command::ProcessOrder)
        }
        "save" => {
            expect_fields(record, &verb, 1..=2)?;
            Ok(Command::Save {
                path: optional_path(record),
            })
        }
        "load" => {
            expect_fields(record, &verb, 1..=2)?;
            Ok(Command::Load {
                path: optional_path(record),
            })
        }
        other => Err(InventoryError::InvalidInput(format!(
            "unknown command '{}'",
            other
        ))),
    }
}

fn expect_fields(
    record: &StringRecord,
    verb: &str,
    allowed: std::ops::RangeInclusive<usize>,
) -> Result<()> {
    if allowed.contains(&record.len()) {
        Ok(())
    } else {
        Err(InventoryError::InvalidInput(format!(
            "'{}' takes {} to {} fields, found {}",
            verb,
            allowed.start(),
            allowed.end(),
            record.len()
        )))
    }
}

fn required_name(field: &str) -> Result<String> {
    if field.is_empty() {
        Err(InventoryError::InvalidInput(
            "item name is required".to_string(),
        ))
    } else {
        Ok(field.to_string())
    }
}

fn parse_number<T: FromStr>(field: &str, what: &str) -> Result<T> {
    field.parse().map_err(|_| {
        InventoryError::InvalidInput(format!("{} must be a number, got '{}'", what, field))
    })
}

fn optional_path(record: &StringRecord) -> Option<PathBuf> {
    record
        .get(1)
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
}
