use std::process::ExitCode;
use clap::Parser;
use log::{error, info};

use phonebook::{
    configuration as cfg,
    logger,
    ContactListView,
    ContactStore,
    SqliteStore,
    TerminalUi,
};

#[derive(Parser, Debug)]
#[command(about = "Phone Book", long_about = None)]
struct Options {
    /// The configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// The contacts database file
    #[arg(short, long, value_name = "FILE")]
    database: Option<String>,
}

fn run(store: &mut SqliteStore) -> phonebook::error::Result<()> {
    let mut view = ContactListView::new(store);
    view.load()?;

    let mut ui = TerminalUi::enter()?;
    ui.run(&mut view)
}

fn main() -> ExitCode {
    let opts = Options::parse();

    let mut builder = cfg::Builder::new();
    if let Some(path) = opts.config.as_deref() {
        if let Err(e) = builder.load(path) {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    }
    if let Some(path) = opts.database.as_deref() {
        builder.with_database(path);
    }

    let cfg = match builder.build() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    #[cfg(feature = "inspect")] {
        cfg.dump();
    }

    if let Err(e) = logger::setup(cfg.log_level(), cfg.log_file()) {
        eprintln!("Logging disabled: {e}");
    }

    let mut store = SqliteStore::new();
    if let Err(e) = store.initialize(cfg.database_path()) {
        error!("Opening contact store {} failed: {e}", cfg.database_path());
        eprintln!("Cannot open contact store {}: {e}", cfg.database_path());
        logger::teardown();
        return ExitCode::FAILURE;
    }

    let result = run(&mut store);
    store.shutdown();

    let code = match result {
        Ok(_) => {
            info!("Phone book closed");
            ExitCode::SUCCESS
        },
        Err(e) => {
            error!("Phone book stopped: {e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    };
    logger::teardown();
    code
}
