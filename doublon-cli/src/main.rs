//! Doublon CLI
//!
//! Command-line interface for Doublon - CRM contact record deduplication.

mod commands;
mod config;
mod display;
mod store;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};

use config::CliConfig;

#[derive(Parser)]
#[command(name = "doublon")]
#[command(version, about = "CRM contact record deduplication")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Data directory (default: platform data dir + /doublon)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Records JSON file acting as the store
    #[arg(long, global = true, env = "DOUBLON_RECORDS")]
    records: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan the record set for duplicate groups
    Scan {
        /// Print groups as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Override the duplicate threshold (default 0.6)
        #[arg(long)]
        threshold: Option<f64>,

        /// Use legacy greedy-pivot clustering instead of transitive closure
        #[arg(long)]
        greedy: bool,
    },

    /// List the active session's duplicate groups
    Groups {
        /// Print groups as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Resolve a duplicate group
    #[command(subcommand)]
    Resolve(ResolveCommands),

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ResolveCommands {
    /// Merge a group into its primary record
    Merge {
        /// Group ID or unambiguous ID prefix
        group: String,

        /// Record ID to keep as primary (default: first member)
        #[arg(long)]
        primary: Option<String>,

        /// Pick the primary record interactively
        #[arg(long, conflicts_with = "primary")]
        interactive: bool,
    },

    /// Dismiss a group without merging (session-local)
    Dismiss {
        /// Group ID or unambiguous ID prefix
        group: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Resolve data directory and records path
    let data_dir = cli.data_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("doublon")
    });
    let records_path = cli
        .records
        .unwrap_or_else(|| data_dir.join("records.json"));

    let config = CliConfig {
        data_dir,
        records_path,
    };

    match cli.command {
        Commands::Scan {
            json,
            threshold,
            greedy,
        } => {
            commands::scan::run(&config, json, threshold, greedy)?;
        }
        Commands::Groups { json } => {
            commands::groups::run(&config, json)?;
        }
        Commands::Resolve(cmd) => match cmd {
            ResolveCommands::Merge {
                group,
                primary,
                interactive,
            } => {
                commands::resolve::merge(&config, &group, primary.as_deref(), interactive)?;
            }
            ResolveCommands::Dismiss { group } => {
                commands::resolve::dismiss(&config, &group)?;
            }
        },
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "doublon", &mut io::stdout());
        }
    }

    Ok(())
}
