pub(crate) mod add;
pub(crate) mod export;
pub(crate) mod import;
pub(crate) mod init;
pub(crate) mod list;

use retro_games_db::{CatalogStore, StoreConfig};

use crate::CliError;

/// Open the store, creating the table if needed. Every command starts here.
pub(crate) fn open_store(config: &StoreConfig) -> Result<CatalogStore, CliError> {
    Ok(CatalogStore::open(config.clone())?)
}
