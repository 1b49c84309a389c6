use retro_games_db::StoreConfig;

use crate::CliError;

use super::open_store;

/// Create the catalog table if it doesn't exist yet.
pub(crate) fn run_init(config: &StoreConfig) -> Result<(), CliError> {
    let store = open_store(config)?;
    log::info!("Initialized database at {}", store.path().display());
    Ok(())
}
