use std::path::Path;

use retro_games_db::StoreConfig;

use crate::CliError;

use super::open_store;

/// Import games from a CSV file, skipping rows that fail validation.
pub(crate) fn run_import(config: &StoreConfig, csv: &Path) -> Result<(), CliError> {
    let store = open_store(config)?;
    let count = retro_games_transfer::import_csv(&store, csv)?;
    log::info!("Imported {} rows from {}", count, csv.display());
    Ok(())
}
