//! Read queries for listing catalog entries.

use retro_games_catalog::{CatalogEntry, EntryOrder, PageRequest};
use rusqlite::{Connection, params};

use crate::operations::{ENTRY_COLUMNS, OperationError, row_to_entry};

/// Total number of entries in the catalog.
pub fn count_entries(conn: &Connection) -> Result<u64, OperationError> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM games", [], |row| row.get(0))?;
    Ok(count.max(0) as u64)
}

/// One page of entries in the given order.
///
/// A page past the end yields an empty list.
pub fn list_entries(
    conn: &Connection,
    page: PageRequest,
    order: EntryOrder,
) -> Result<Vec<CatalogEntry>, OperationError> {
    let limit = i64::try_from(page.limit()).unwrap_or(i64::MAX);
    let offset = i64::try_from(page.offset()).unwrap_or(i64::MAX);
    let mut stmt = conn.prepare(&format!(
        "SELECT {ENTRY_COLUMNS} FROM games ORDER BY {} LIMIT ?1 OFFSET ?2",
        order_clause(order)
    ))?;
    let rows = stmt.query_map(params![limit, offset], row_to_entry)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Every entry in the given order.
pub fn list_all_entries(
    conn: &Connection,
    order: EntryOrder,
) -> Result<Vec<CatalogEntry>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {ENTRY_COLUMNS} FROM games ORDER BY {}",
        order_clause(order)
    ))?;
    let rows = stmt.query_map([], row_to_entry)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Helpers ─────────────────────────────────────────────────────────────────

fn order_clause(order: EntryOrder) -> &'static str {
    match order {
        EntryOrder::ReleaseYearDesc => "release_year DESC, id ASC",
        EntryOrder::TitleAsc => "title ASC, id ASC",
    }
}
