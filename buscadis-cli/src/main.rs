//! buscadis CLI
//!
//! Command-line interface for importing advertisement JSON into the
//! publications database.

mod cli_types;
mod commands;
mod error;
mod logging;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
use commands::import::ImportArgs;
use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings_override = cli.settings.as_deref();

    match cli.command {
        Commands::Import {
            source,
            dry_run,
            force,
            db,
            default_city,
        } => {
            let settings = commands::load_settings(settings_override)?;
            commands::import::run_import(
                settings,
                ImportArgs {
                    source,
                    dry_run,
                    force,
                    db,
                    default_city,
                },
                cli.quiet,
                cli.verbose,
            )
        }
        Commands::Classify { titles } => {
            commands::classify::run_classify(&titles);
            Ok(())
        }
        Commands::Categories => {
            commands::categories::run_categories();
            Ok(())
        }
        Commands::History { db, limit } => {
            let settings = commands::load_settings(settings_override)?;
            commands::history::run_history(&settings, db, limit)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(settings_override),
            ConfigAction::Path => {
                commands::config::run_config_path(settings_override);
                Ok(())
            }
        },
    }
}
