//! retro-games-api server
//!
//! Serves the catalog over HTTP. Shares its SQLite store with the
//! `retro-games` CLI.

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use retro_games_db::{CatalogStore, StoreConfig};

#[derive(Parser)]
#[command(name = "retro-games-api")]
#[command(about = "Retro games catalog HTTP API", long_about = None)]
struct Args {
    /// Path to the SQLite database file (defaults to settings.toml, then the data directory)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8000")]
    bind: String,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .parse_default_env()
        .init();

    let config = StoreConfig::resolve(args.db);
    let store = match CatalogStore::open(config) {
        Ok(store) => store,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };
    log::info!("Using database at {}", store.path().display());

    if let Err(e) = retro_games_api::serve(store, &args.bind).await {
        log::error!("Server error: {e}");
        std::process::exit(1);
    }
}
