use crate::domain::item::{Item, ItemKind};
use crate::domain::order::Order;
use crate::domain::transaction::Transaction;
use crate::error::Result;
use clap::ValueEnum;
use serde_json::json;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated tables and plain messages.
    #[default]
    Text,
    /// One JSON document per line.
    Json,
}

/// Renders inventory snapshots and session messages.
pub struct ReportWriter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn inventory(&mut self, items: &[Item]) -> Result<()> {
        match self.format {
            OutputFormat::Json => self.json(&json!({ "inventory": items })),
            OutputFormat::Text if items.is_empty() => self.line("No items in inventory."),
            OutputFormat::Text => {
                writeln!(self.out, "Inventory:")?;
                writeln!(self.out, "No.\tType\tName\tQuantity\tPrice\tDetails")?;
                for (index, item) in items.iter().enumerate() {
                    writeln!(
                        self.out,
                        "{}\t{}\t{}\t{}\t{:.2}\t{}",
                        index + 1,
                        item.kind.item_type(),
                        item.name,
                        item.quantity,
                        item.price,
                        details(&item.kind)
                    )?;
                }
                Ok(())
            }
        }
    }

    /// Writes the log most recent first.
    pub fn transactions(&mut self, transactions: &[Transaction]) -> Result<()> {
        match self.format {
            OutputFormat::Json => self.json(&json!({ "transactions": transactions })),
            OutputFormat::Text if transactions.is_empty() => {
                self.line("No transactions recorded.")
            }
            OutputFormat::Text => {
                writeln!(self.out, "Transactions:")?;
                writeln!(self.out, "No.\tName\tAction")?;
                for (index, tx) in transactions.iter().enumerate() {
                    writeln!(self.out, "{}\t{}\t{}", index + 1, tx.item_name, tx.action)?;
                }
                Ok(())
            }
        }
    }

    pub fn orders(&mut self, orders: &[Order]) -> Result<()> {
        match self.format {
            OutputFormat::Json => self.json(&json!({ "orders": orders })),
            OutputFormat::Text if orders.is_empty() => self.line("No pending orders."),
            OutputFormat::Text => {
                writeln!(self.out, "Pending orders:")?;
                for order in orders {
                    writeln!(self.out, "{}", order)?;
                }
                Ok(())
            }
        }
    }

    /// A one-line confirmation such as "Item added: Pen".
    pub fn notice(&mut self, message: &str) -> Result<()> {
        match self.format {
            OutputFormat::Json => self.json(&json!({ "message": message })),
            OutputFormat::Text => self.line(message),
        }
    }

    fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    fn json(&mut self, value: &serde_json::Value) -> Result<()> {
        serde_json::to_writer(&mut self.out, value)?;
        writeln!(self.out)?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn details(kind: &ItemKind) -> String {
    match kind {
        ItemKind::Basic => String::new(),
        ItemKind::Electronic { warranty_months } => {
            format!("Warranty: {} months", warranty_months)
        }
        ItemKind::Perishable { shelf_life_days } => {
            format!("Shelf life: {} days", shelf_life_days)
        }
    }
}
