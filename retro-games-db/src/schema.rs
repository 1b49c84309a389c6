//! SQLite schema creation and connection setup.

use retro_games_catalog::Condition;
use rusqlite::{Connection, Transaction, TransactionBehavior};
use thiserror::Error;

use crate::config::StoreConfig;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("I/O error creating {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// The `CREATE TABLE` statement for the catalog.
///
/// The `condition` CHECK list is generated from [`Condition::ALL`] so the
/// storage constraint and the validator share one value set.
pub fn games_table_sql() -> String {
    let allowed = Condition::ALL
        .iter()
        .map(|c| format!("'{}'", c.as_str()))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "CREATE TABLE IF NOT EXISTS games (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    release_year INTEGER NOT NULL,
    platform TEXT NOT NULL,
    date_acquired TEXT NOT NULL,
    condition TEXT CHECK (condition IN ({allowed}))
);"
    )
}

/// Create the catalog table if it doesn't exist.
///
/// This is idempotent and safe for concurrent callers: it relies on
/// `CREATE TABLE IF NOT EXISTS` rather than checking first. The write lock is
/// taken up front so a racing caller waits on the busy timeout instead of
/// failing a read-to-write upgrade.
pub fn ensure_schema(conn: &Connection) -> Result<(), SchemaError> {
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)?;
    tx.execute_batch(&games_table_sql())?;
    tx.commit()?;
    Ok(())
}

/// Open a connection to the store file with the configured busy timeout.
///
/// Creates the file (and its parent directory) if needed, but does not touch
/// the schema.
pub fn open_connection(config: &StoreConfig) -> Result<Connection, SchemaError> {
    if let Some(parent) = config.path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| SchemaError::Io {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let conn = Connection::open(&config.path)?;
    // Set before anything that might need a lock.
    conn.busy_timeout(config.busy_timeout)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
    Ok(conn)
}

/// Open or create a catalog database at the configured path, ensuring the schema.
pub fn open_database(config: &StoreConfig) -> Result<Connection, SchemaError> {
    let conn = open_connection(config)?;
    ensure_schema(&conn)?;
    log::debug!("Catalog schema ready at {}", config.path.display());
    Ok(conn)
}

/// Open an in-memory database with the full schema. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    ensure_schema(&conn)?;
    Ok(conn)
}
