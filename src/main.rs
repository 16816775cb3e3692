use clap::Parser;
use miette::{IntoDiagnostic, Result};
use stockroom::application::manager::InventoryManager;
use stockroom::config::Settings;
use stockroom::error::InventoryError;
use stockroom::interfaces::console::report::ReportWriter;
use stockroom::interfaces::console::session::Session;
use stockroom::interfaces::script::command_reader::CommandReader;
use stockroom::telemetry;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Inventory script, one command per line. Reads stdin when omitted.
    script: Option<PathBuf>,

    #[command(flatten)]
    settings: Settings,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = cli.settings;
    telemetry::init(settings.verbose);

    let mut manager = InventoryManager::new(settings.item_store());
    if settings.load_on_start {
        manager
            .load(&settings.inventory_file, &settings.load_options())
            .into_diagnostic()?;
    }

    let source: Box<dyn Read> = match cli.script {
        Some(path) => Box::new(File::open(path).into_diagnostic()?),
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut session = Session::new(
        manager,
        ReportWriter::new(stdout.lock(), settings.format),
        settings.inventory_file.clone(),
        settings.load_options(),
    );

    for command in CommandReader::new(source).commands() {
        match command {
            Ok(command) => {
                if let Err(e) = session.execute(command) {
                    eprintln!("Error: {}", e);
                }
            }
            Err(e @ InventoryError::Io(_)) => return Err(e).into_diagnostic(),
            Err(e) => {
                eprintln!("Error reading command: {}", e);
            }
        }
    }

    if settings.save_on_exit {
        session
            .manager()
            .save(&settings.inventory_file)
            .into_diagnostic()?;
    }

    Ok(())
}
