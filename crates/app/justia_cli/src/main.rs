// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use clap::Parser;
use cli::Cli;
use justia_core::data::ReferenceData;

mod cli;
mod commands;
mod logging;

fn main() -> Result<()> {
    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init()?;

    let args = Cli::parse();
    let data = ReferenceData::embedded()?;
    log::debug!("loaded {} states, {} case types", data.states().len(), data.case_types().len());

    let stdout = std::io::stdout();
    commands::execute(&args.command, &data, &mut stdout.lock())
}
