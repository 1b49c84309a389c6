use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use retro_games_catalog::{EntryFields, RawEntry};
use retro_games_db::StoreConfig;

use crate::CliError;

use super::open_store;

/// Validate a single entry from the command line and store it.
pub(crate) fn run_add(
    config: &StoreConfig,
    title: String,
    release_year: i64,
    platform: String,
    date_acquired: String,
    condition: Option<String>,
) -> Result<(), CliError> {
    let raw = RawEntry {
        title,
        release_year,
        platform,
        date_acquired,
        condition,
    };
    // Bad input never opens the store.
    let fields = EntryFields::validate(&raw)?;

    let store = open_store(config)?;
    let id = store.create(&fields)?;

    log::info!(
        "{} #{}: {}",
        "Added".if_supports_color(Stdout, |t| t.green()),
        id,
        fields,
    );
    Ok(())
}
