//! Export the whole catalog to CSV, ordered by title.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use retro_games_catalog::{CatalogEntry, EntryOrder};
use retro_games_db::CatalogStore;

use crate::CSV_COLUMNS;
use crate::error::TransferError;

/// Write every entry to a new CSV file at `path`. Returns the number of rows written.
///
/// Entries are read before the file is created, so a store failure leaves any
/// existing file untouched.
pub fn export_csv(store: &CatalogStore, path: &Path) -> Result<usize, TransferError> {
    let entries = store.list_all(EntryOrder::TitleAsc)?;
    let file = File::create(path).map_err(|e| TransferError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let count = write_entries(file, &entries)?;
    log::debug!("Exported {count} rows to {}", path.display());
    Ok(count)
}

/// Write every entry as CSV to any writer.
pub fn export_to_writer<W: Write>(store: &CatalogStore, writer: W) -> Result<usize, TransferError> {
    let entries = store.list_all(EntryOrder::TitleAsc)?;
    write_entries(writer, &entries)
}

/// Write the fixed header followed by one row per entry.
///
/// An absent condition is written as an empty field.
pub fn write_entries<W: Write>(writer: W, entries: &[CatalogEntry]) -> Result<usize, TransferError> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(CSV_COLUMNS)?;

    for entry in entries {
        let year = entry.release_year.to_string();
        let date = entry.date_acquired.format("%Y-%m-%d").to_string();
        out.write_record([
            entry.title.as_str(),
            year.as_str(),
            entry.platform.as_str(),
            date.as_str(),
            entry.condition.map_or("", |c| c.as_str()),
        ])?;
    }

    out.flush().map_err(csv::Error::from)?;
    Ok(entries.len())
}
