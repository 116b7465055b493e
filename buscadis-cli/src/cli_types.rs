//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "buscadis")]
#[command(about = "Import advertisement JSON into the publications database", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    /// Settings file to use instead of ~/.config/buscadis/settings.toml
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Validate, normalize and store every record in a directory of JSON files
    Import {
        /// Directory of .json files, or a single .json file
        source: PathBuf,

        /// Validate and normalize without writing anything
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,

        /// SQLite database path (overrides settings)
        #[arg(long)]
        db: Option<PathBuf>,

        /// City (and district) used when a record has no location
        #[arg(long)]
        default_city: Option<String>,
    },

    /// Guess the category for one or more free-text titles
    Classify {
        /// Titles to classify
        #[arg(required = true)]
        titles: Vec<String>,
    },

    /// List the category table
    Categories,

    /// Show recent imports recorded in the database
    History {
        /// SQLite database path (overrides settings)
        #[arg(long)]
        db: Option<PathBuf>,

        /// Number of entries to show
        #[arg(short, long, default_value_t = 10)]
        limit: u32,
    },

    /// Inspect importer settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the effective settings
    Show,

    /// Print the settings file path
    Path,
}
