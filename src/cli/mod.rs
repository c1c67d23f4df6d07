//! Entry points behind each subcommand.
//!
//! All of them open the store first and fail fast if it is unreachable, so the
//! menu is never shown against a store that cannot answer.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use employee_tracker::config::TrackerConfig;
use employee_tracker::db::Gateway;
use employee_tracker::menu::{render_table, Menu, Tabular};
use employee_tracker::org;

/// What `list` prints.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Listing {
    Departments,
    Roles,
    Employees,
}

fn open_store(config: &TrackerConfig) -> Result<Gateway> {
    let db_path = config.resolved_db_path();
    Gateway::open(&db_path, config.store.busy_timeout_ms)
        .with_context(|| format!("cannot reach store at {}", db_path.display()))
}

/// Run the menu on the terminal until the operator exits.
pub fn interactive(config: &TrackerConfig) -> Result<()> {
    let gateway = open_store(config)?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Menu::new(&gateway, stdin.lock(), stdout.lock()).run()?;
    Ok(())
}

/// Print one listing as a table or JSON.
pub fn list(config: &TrackerConfig, what: Listing, json: bool) -> Result<()> {
    let gateway = open_store(config)?;
    match what {
        Listing::Departments => print_rows(&org::list_departments(&gateway)?, json),
        Listing::Roles => print_rows(&org::list_roles(&gateway)?, json),
        Listing::Employees => print_rows(&org::list_employees(&gateway)?, json),
    }
}

fn print_rows<T: Tabular + Serialize>(rows: &[T], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(rows)?);
    } else {
        println!("{}", render_table(rows));
    }
    Ok(())
}

/// Check the store and print how many rows each table holds.
pub fn doctor(config: &TrackerConfig) -> Result<()> {
    let db_path = config.resolved_db_path();
    if !db_path.exists() {
        println!("No store at {} yet; start the menu once to create it.", db_path.display());
        return Ok(());
    }

    let gateway = open_store(config)?;
    let report = gateway
        .check_health()
        .context("failed to run health check")?;
    let size = std::fs::metadata(&db_path).map(|m| m.len()).unwrap_or(0);

    println!("{} ({size} bytes)", db_path.display());
    for (table, rows) in [
        ("department", report.department_count),
        ("role", report.role_count),
        ("employee", report.employee_count),
    ] {
        println!("  {table:<12}{rows:>8} rows");
    }
    println!("  {} employees have no manager", report.unmanaged_count);

    if report.integrity_ok {
        println!("integrity: ok");
        Ok(())
    } else {
        anyhow::bail!("integrity check failed: {}", report.integrity_details)
    }
}
