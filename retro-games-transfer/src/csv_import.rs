//! Import catalog entries from a CSV file.
//!
//! The header must name `title`, `release_year`, `platform` and
//! `date_acquired`; `condition` is optional and column order is free. Each
//! data row is validated on its own:
//!
//! - bad title, platform, year or date: the row is skipped
//! - bad condition: the row is kept with no condition
//!
//! Skipped rows are not reported to the caller; the returned count covers
//! inserted rows only. Invalid UTF-8 is replaced rather than rejected.

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ByteRecord;
use retro_games_catalog::{
    EntryFields, ValidationError, parse_year, validate_condition, validate_date,
    validate_platform, validate_title,
};
use retro_games_db::CatalogStore;

use crate::error::TransferError;

/// Columns every import file must have.
pub const REQUIRED_COLUMNS: [&str; 4] = ["title", "release_year", "platform", "date_acquired"];

/// Import every valid row of the CSV file at `path`. Returns the number inserted.
pub fn import_csv(store: &CatalogStore, path: &Path) -> Result<usize, TransferError> {
    let file = File::open(path).map_err(|e| TransferError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    log::debug!("Importing {}", path.display());
    import_from_reader(store, file)
}

/// Import every valid row from a CSV source. Returns the number inserted.
///
/// The header is checked before any row is read, so a file missing a
/// required column inserts nothing. A storage failure stops the import;
/// rows inserted before it stay in the store.
pub fn import_from_reader<R: Read>(store: &CatalogStore, source: R) -> Result<usize, TransferError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let columns = ColumnMap::from_header(reader.byte_headers()?)?;

    let mut inserted = 0;
    let mut skipped = 0;
    let mut record = ByteRecord::new();
    loop {
        match reader.read_byte_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                log::debug!("Skipping undecodable CSV record: {e}");
                skipped += 1;
                continue;
            }
        }
        match parse_row(&record, &columns) {
            Ok(fields) => {
                store.create(&fields)?;
                inserted += 1;
            }
            Err(e) => {
                let line = record.position().map_or(0, |p| p.line());
                log::debug!("Skipping CSV line {line}: {e}");
                skipped += 1;
            }
        }
    }

    log::debug!("CSV import finished: {inserted} inserted, {skipped} skipped");
    Ok(inserted)
}

/// Positions of the known columns within the header.
struct ColumnMap {
    title: usize,
    release_year: usize,
    platform: usize,
    date_acquired: usize,
    condition: Option<usize>,
}

impl ColumnMap {
    fn from_header(header: &ByteRecord) -> Result<Self, TransferError> {
        let names: Vec<Cow<'_, str>> = header.iter().map(String::from_utf8_lossy).collect();
        let find = |name: &str| names.iter().position(|n| n == name);

        let missing: BTreeSet<&str> = REQUIRED_COLUMNS
            .into_iter()
            .filter(|name| find(*name).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(TransferError::MissingColumns(
                missing.into_iter().map(str::to_string).collect(),
            ));
        }

        // Presence of all four was checked above.
        let required = |name: &str| find(name).unwrap_or_default();
        Ok(Self {
            title: required("title"),
            release_year: required("release_year"),
            platform: required("platform"),
            date_acquired: required("date_acquired"),
            condition: find("condition"),
        })
    }
}

fn parse_row(record: &ByteRecord, columns: &ColumnMap) -> Result<EntryFields, ValidationError> {
    // Short rows leave trailing fields empty.
    let field = |i: usize| {
        record
            .get(i)
            .map(String::from_utf8_lossy)
            .unwrap_or_default()
    };

    let title = validate_title(&field(columns.title))?;
    let platform = validate_platform(&field(columns.platform))?;
    let release_year = parse_year(&field(columns.release_year))?;
    let date_acquired = validate_date(&field(columns.date_acquired))?;

    let raw_condition = columns.condition.map(field);
    let condition = validate_condition(raw_condition.as_deref()).unwrap_or_else(|e| {
        log::debug!("Dropping condition: {e}");
        None
    });

    EntryFields::new(&title, release_year, &platform, date_acquired, condition)
}
