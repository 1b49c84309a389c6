//! CRUD operations for catalog entries.
//!
//! Every externally supplied value is bound as a statement parameter.

use chrono::NaiveDate;
use retro_games_catalog::{CatalogEntry, Condition, EntryFields};
use rusqlite::types::Type;
use rusqlite::{Connection, Row, params};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Catalog entry not found: id {id}")]
    NotFound { id: i64 },
}

/// A stored `condition` outside the allowed set.
#[derive(Debug, Error)]
#[error("unknown condition '{0}' in stored row")]
struct UnknownCondition(String);

pub(crate) const ENTRY_COLUMNS: &str =
    "id, title, release_year, platform, date_acquired, condition";

/// Insert a new entry. Returns the generated ID.
pub fn insert_entry(conn: &Connection, fields: &EntryFields) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO games (title, release_year, platform, date_acquired, condition)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            fields.title(),
            fields.release_year(),
            fields.platform(),
            fields.date_acquired(),
            fields.condition().map(|c| c.as_str()),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Find an entry by ID.
pub fn find_entry(conn: &Connection, id: i64) -> Result<Option<CatalogEntry>, OperationError> {
    let mut stmt = conn.prepare(&format!("SELECT {ENTRY_COLUMNS} FROM games WHERE id = ?1"))?;
    let result = stmt.query_row(params![id], row_to_entry);
    match result {
        Ok(entry) => Ok(Some(entry)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Fetch an entry by ID, failing with [`OperationError::NotFound`] if absent.
pub fn get_entry(conn: &Connection, id: i64) -> Result<CatalogEntry, OperationError> {
    find_entry(conn, id)?.ok_or(OperationError::NotFound { id })
}

/// Replace every field of an existing entry.
///
/// Returns `false` (and creates nothing) when no entry has this ID.
pub fn replace_entry(
    conn: &Connection,
    id: i64,
    fields: &EntryFields,
) -> Result<bool, OperationError> {
    let changed = conn.execute(
        "UPDATE games
         SET title = ?2, release_year = ?3, platform = ?4, date_acquired = ?5, condition = ?6
         WHERE id = ?1",
        params![
            id,
            fields.title(),
            fields.release_year(),
            fields.platform(),
            fields.date_acquired(),
            fields.condition().map(|c| c.as_str()),
        ],
    )?;
    Ok(changed > 0)
}

/// Delete an entry. Returns whether a row was removed.
pub fn delete_entry(conn: &Connection, id: i64) -> Result<bool, OperationError> {
    let changed = conn.execute("DELETE FROM games WHERE id = ?1", params![id])?;
    Ok(changed > 0)
}

/// Map a row selected with [`ENTRY_COLUMNS`] to a typed entry.
pub(crate) fn row_to_entry(row: &Row<'_>) -> rusqlite::Result<CatalogEntry> {
    let condition: Option<String> = row.get(5)?;
    let condition = condition
        .map(|s| {
            Condition::from_canonical(&s).ok_or_else(|| {
                rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(UnknownCondition(s)))
            })
        })
        .transpose()?;
    let date_acquired: NaiveDate = row.get(4)?;

    Ok(CatalogEntry {
        id: row.get(0)?,
        title: row.get(1)?,
        release_year: row.get(2)?,
        platform: row.get(3)?,
        date_acquired,
        condition,
    })
}
