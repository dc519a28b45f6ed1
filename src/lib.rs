pub mod cli;
pub mod core;
pub mod store;

use crate::core::config::AppConfig;
use crate::store::{FileStore, RateStore};
use anyhow::Result;
use tracing::{debug, info};

/// Commands that operate on the rate table.
#[derive(Debug, Clone)]
pub enum AppCommand {
    Convert {
        from: String,
        to: String,
        amount: String,
    },
    Set {
        code: String,
        rate: String,
    },
    List {
        json: bool,
    },
}

/// Loads configuration, runs `command` against the configured rates file
/// and prints its output.
///
/// `rates_file` overrides the path from the configuration.
pub fn run_command(
    command: AppCommand,
    config_path: Option<&str>,
    rates_file: Option<&str>,
) -> Result<()> {
    info!("fxconv starting...");

    let mut config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    if let Some(path) = rates_file {
        config.rates_file = Some(path.to_string());
    }
    debug!("Loaded config: {config:#?}");

    let store = FileStore::new(config.rates_path()?);
    let output = execute(command, &store, &config)?;
    println!("{output}");
    Ok(())
}

/// Runs `command` against `store` and returns the text to show the user.
pub fn execute(command: AppCommand, store: &dyn RateStore, config: &AppConfig) -> Result<String> {
    let mut table = cli::open_table(store)?;
    debug!(entries = table.len(), location = %store.location(), "Rate table ready");

    let output = match command {
        AppCommand::Convert { from, to, amount } => {
            cli::convert::convert(&table, &from, &to, &amount, config.precision)?
        }
        AppCommand::Set { code, rate } => cli::rates::set_rate(&mut table, store, &code, &rate)?,
        AppCommand::List { json } => cli::rates::list_rates(&table, json)?,
    };
    Ok(output)
}
