use std::path::Path;

use retro_games_db::StoreConfig;

use crate::CliError;

use super::open_store;

/// Dump every game to a CSV file, ordered by title.
pub(crate) fn run_export(config: &StoreConfig, csv: &Path) -> Result<(), CliError> {
    let store = open_store(config)?;
    let count = retro_games_transfer::export_csv(&store, csv)?;
    log::info!("Exported {} rows to {}", count, csv.display());
    Ok(())
}
