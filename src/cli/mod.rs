//! Command-line interface for the customer directory.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use console::style;

pub use output::{output, truncate, CommandOutput};

#[derive(Parser, Debug)]
#[command(name = "clientele", version, about = "Customer directory service")]
pub struct Cli {
    /// Emit machine-readable JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Override the database path from config
    #[arg(long, global = true, env = "CLIENTELE_DATABASE__PATH")]
    pub database: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the database and apply migrations
    Init,
    /// List customers
    List(commands::customer::ListArgs),
    /// Show one customer
    Show(commands::customer::ShowArgs),
    /// Create a customer
    Create(commands::customer::CreateArgs),
    /// Update a customer
    Update(commands::customer::UpdateArgs),
    /// Delete a customer
    Delete(commands::customer::DeleteArgs),
}

/// Print an error and exit non-zero.
pub fn handle_error(err: anyhow::Error, json_mode: bool) {
    if json_mode {
        println!(
            "{}",
            serde_json::json!({ "error": format!("{err:#}") })
        );
    } else {
        eprintln!("{} {err:#}", style("error:").red().bold());
    }
    std::process::exit(1);
}
