use crate::domain::ports::ItemStoreBox;
use crate::infrastructure::in_memory::InMemoryItemStore;
use crate::interfaces::console::report::OutputFormat;
use crate::interfaces::flat_file::inventory_reader::MalformedLinePolicy;
use crate::interfaces::flat_file::{DEFAULT_INVENTORY_FILE, LoadOptions};
use clap::{ArgAction, Args};
use std::path::PathBuf;

/// Runtime settings, read from the command line with environment fallbacks.
#[derive(Args, Debug, Clone)]
pub struct Settings {
    /// Inventory file used by `save`, `load` and the start/exit options.
    #[arg(long, env = "STOCKROOM_INVENTORY_FILE", default_value = DEFAULT_INVENTORY_FILE)]
    pub inventory_file: PathBuf,

    /// Maximum number of items the inventory may hold (unbounded if omitted).
    #[arg(long, env = "STOCKROOM_CAPACITY")]
    pub capacity: Option<usize>,

    /// Skip malformed lines when loading instead of aborting the load.
    #[arg(long)]
    pub skip_malformed: bool,

    /// Treat a missing inventory file as an empty inventory.
    #[arg(long)]
    pub allow_missing: bool,

    /// Load the inventory file before running the script.
    #[arg(long)]
    pub load_on_start: bool,

    /// Save the inventory file after the script finishes.
    #[arg(long)]
    pub save_on_exit: bool,

    /// Output format for reports.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase diagnostic logging on stderr (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Settings {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            on_malformed: if self.skip_malformed {
                MalformedLinePolicy::Skip
            } else {
                MalformedLinePolicy::Abort
            },
            allow_missing: self.allow_missing,
        }
    }

    pub fn item_store(&self) -> ItemStoreBox {
        match self.capacity {
            Some(capacity) => Box::new(InMemoryItemStore::bounded(capacity)),
            None => Box::new(InMemoryItemStore::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        settings: Settings,
    }

    #[test]
    fn test_defaults() {
        let settings = TestCli::parse_from(["stockroom"]).settings;

        assert_eq!(settings.inventory_file, PathBuf::from("inventory.txt"));
        assert_eq!(settings.load_options(), LoadOptions::default());
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[test]
    fn test_flags_map_to_options() {
        let settings = TestCli::parse_from([
            "stockroom",
            "--skip-malformed",
            "--allow-missing",
            "--capacity",
            "100",
            "-vv",
        ])
        .settings;

        let options = settings.load_options();
        assert_eq!(options.on_malformed, MalformedLinePolicy::Skip);
        assert!(options.allow_missing);
        assert_eq!(settings.verbose, 2);
        assert_eq!(settings.item_store().len(), 0);
    }
}
