use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use fxconv::cli::ui;
use fxconv::core::log::init_logging;
use std::process::ExitCode;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    /// Path to the rates file, overriding the configuration
    #[arg(short, long, global = true)]
    rates_file: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for fxconv::AppCommand {
    fn from(cmd: Commands) -> fxconv::AppCommand {
        match cmd {
            Commands::Convert { from, to, amount } => {
                fxconv::AppCommand::Convert { from, to, amount }
            }
            Commands::Set { code, rate } => fxconv::AppCommand::Set { code, rate },
            Commands::List { json } => fxconv::AppCommand::List { json },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Convert an amount from one currency to another
    Convert {
        /// Currency code to convert from
        from: String,
        /// Currency code to convert to
        to: String,
        /// Amount in the source currency
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Add or update the exchange rate of a currency
    Set {
        /// Currency code
        code: String,
        /// Value of one unit of the currency in the base unit
        #[arg(allow_hyphen_values = true)]
        rate: String,
    },
    /// List all exchange rates
    List {
        /// Print rates as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => fxconv::cli::setup::setup(),
        Some(cmd) => fxconv::run_command(
            cmd.into(),
            cli.config_path.as_deref(),
            cli.rates_file.as_deref(),
        ),
        None => print_help(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Application failed");
            eprintln!(
                "{}",
                ui::style_text(&ui::error_message(&e), ui::StyleType::Error)
            );
            ExitCode::FAILURE
        }
    }
}

fn print_help() -> Result<()> {
    Cli::command().print_help()?;
    Ok(())
}
