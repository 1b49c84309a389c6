//! retro-games CLI
//!
//! Command-line front door for the retro games catalog. Shares its SQLite
//! store with the `retro-games-api` server.

mod cli_types;
mod commands;
mod error;
mod logging;

use clap::Parser;

use retro_games_db::StoreConfig;

use cli_types::{Cli, Commands};
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let config = StoreConfig::resolve(cli.db);

    let result = match cli.command {
        Commands::Init => commands::init::run_init(&config),
        Commands::Add {
            title,
            release_year,
            platform,
            date_acquired,
            condition,
        } => commands::add::run_add(
            &config,
            title,
            release_year,
            platform,
            date_acquired,
            condition,
        ),
        Commands::Import { csv } => commands::import::run_import(&config, &csv),
        Commands::List => commands::list::run_list(&config),
        Commands::Export { csv } => commands::export::run_export(&config, &csv),
    };

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(e.exit_code());
    }
}
