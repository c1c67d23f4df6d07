mod cli;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use employee_tracker::config::TrackerConfig;

#[derive(Parser)]
#[command(
    name = "employee-tracker",
    version,
    about = "Manage departments, roles, and employees from the terminal"
)]
struct Cli {
    /// Path to the store, overriding config and TRACKER_DB
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the interactive menu (the default)
    Menu,
    /// Print one listing and exit
    List {
        #[arg(value_enum)]
        what: cli::Listing,
        /// Print a JSON array instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Check the store and print row counts
    Doctor,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = TrackerConfig::load()?;
    if let Some(db) = cli.db {
        config.store.db_path = db.to_string_lossy().into_owned();
    }

    // Log to stderr so stdout carries only the menu and tables.
    let filter = EnvFilter::try_new(&config.log.level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => cli::interactive(&config).context("interactive session failed")?,
        Command::List { what, json } => cli::list(&config, what, json)?,
        Command::Doctor => cli::doctor(&config)?,
    }

    Ok(())
}
