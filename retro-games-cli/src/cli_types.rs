//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "retro-games")]
#[command(about = "Retro games catalog CLI (SQLite-backed)", long_about = None)]
pub(crate) struct Cli {
    /// Path to the SQLite database file (defaults to settings.toml, then the data directory)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Initialize the database schema
    Init,

    /// Add a single game entry
    Add {
        /// Game title
        title: String,

        /// Release year (e.g., 1998)
        #[arg(allow_negative_numbers = true)]
        release_year: i64,

        /// Platform (e.g., SNES, PS1)
        platform: String,

        /// Date acquired (YYYY-MM-DD)
        date_acquired: String,

        /// Condition (mint|vgc|gc|used); optional
        #[arg(long)]
        condition: Option<String>,
    },

    /// Import games from a CSV file
    Import {
        /// Path to CSV file
        csv: PathBuf,
    },

    /// List games in the database
    List,

    /// Export games to a CSV file
    Export {
        /// Destination CSV file path
        csv: PathBuf,
    },
}
