use super::report::ReportWriter;
use crate::application::manager::InventoryManager;
use crate::error::Result;
use crate::interfaces::flat_file::LoadOptions;
use crate::interfaces::script::command_reader::Command;
use std::io::Write;
use std::path::PathBuf;

/// Drives an [`InventoryManager`] from script commands and reports the results.
///
/// Errors are handed back to the caller, which decides how to show them; the
/// session stays usable after any of them.
pub struct Session<W: Write> {
    manager: InventoryManager,
    report: ReportWriter<W>,
    inventory_file: PathBuf,
    load_options: LoadOptions,
}

impl<W: Write> Session<W> {
    pub fn new(
        manager: InventoryManager,
        report: ReportWriter<W>,
        inventory_file: PathBuf,
        load_options: LoadOptions,
    ) -> Self {
        Self {
            manager,
            report,
            inventory_file,
            load_options,
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Add(details) => {
                let name = details.name.clone();
                self.manager.add_item(details)?;
                self.report.notice(&format!("Item added: {}", name))
            }
            Command::Remove { name } => {
                let item = self.manager.remove_item(&name)?;
                self.report.notice(&format!("Item removed: {}", item.name))
            }
            Command::RemoveAll => {
                let removed = self.manager.remove_all_items();
                self.report
                    .notice(&format!("All items removed ({})", removed.len()))
            }
            Command::Update {
                name,
                quantity,
                price,
            } => {
                self.manager.update_item(&name, quantity, price)?;
                self.report.notice(&format!("Item updated: {}", name))
            }
            Command::List => self.report.inventory(&self.manager.inventory()),
            Command::Transactions => self.report.transactions(&self.manager.transactions()),
            Command::Orders => self.report.orders(&self.manager.orders()),
            Command::PlaceOrder { description } => {
                let message = format!("Order added: {}", description);
                self.manager.place_order(description);
                self.report.notice(&message)
            }
            Command::ProcessOrder => {
                let order = self.manager.process_order()?;
                self.report.notice(&format!("Processing order: {}", order))
            }
            Command::Save { path } => {
                let path = path.unwrap_or_else(|| self.inventory_file.clone());
                self.manager.save(&path)?;
                self.report
                    .notice(&format!("Inventory saved to {}", path.display()))
            }
            Command::Load { path } => {
                let path = path.unwrap_or_else(|| self.inventory_file.clone());
                let count = self.manager.load(&path, &self.load_options)?;
                self.report.notice(&format!(
                    "Inventory loaded from {} ({} items)",
                    path.display(),
                    count
                ))
            }
        }
    }

    pub fn manager(&self) -> &InventoryManager {
        &self.manager
    }

    pub fn into_parts(self) -> (InventoryManager, W) {
        (self.manager, self.report.into_inner())
    }
}
