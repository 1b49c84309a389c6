//! Connection-per-operation handle over the catalog store.
//!
//! Each method opens a connection, runs its statements in autocommit mode,
//! and drops the connection before returning, on success and failure alike.
//! Two processes (CLI and API server) may share the file; lock contention is
//! absorbed by the configured busy timeout.

use std::path::{Path, PathBuf};

use retro_games_catalog::{CatalogEntry, EntryFields, EntryOrder, PageRequest, Paginated};
use rusqlite::{Connection, ErrorCode};
use thiserror::Error;

use crate::config::StoreConfig;
use crate::operations::{self, OperationError};
use crate::queries;
use crate::schema::{self, SchemaError};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to open catalog store at {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: SchemaError,
    },
    #[error("Game with ID {id} not found")]
    NotFound { id: i64 },
    #[error("Failed to {operation}{}: {source}", .id.map(|i| format!(" (id {i})")).unwrap_or_default())]
    Operation {
        operation: &'static str,
        id: Option<i64>,
        #[source]
        source: OperationError,
    },
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether the failure was the busy timeout expiring on a locked store.
    pub fn is_busy(&self) -> bool {
        let sqlite = match self {
            Self::Open {
                source: SchemaError::Sqlite(e),
                ..
            } => e,
            Self::Operation {
                source: OperationError::Sqlite(e),
                ..
            } => e,
            _ => return false,
        };
        matches!(
            sqlite.sqlite_error_code(),
            Some(ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked)
        )
    }
}

/// Handle to the catalog store file.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    config: StoreConfig,
}

impl CatalogStore {
    /// Open the store, creating the file and table if needed.
    pub fn open(config: StoreConfig) -> Result<Self, StoreError> {
        let store = Self { config };
        store.ensure_schema()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Create the catalog table if absent. Safe to call any number of times.
    pub fn ensure_schema(&self) -> Result<(), StoreError> {
        schema::open_database(&self.config)
            .map(drop)
            .map_err(|source| StoreError::Open {
                path: self.config.path.clone(),
                source,
            })
    }

    /// Insert an entry and return its new ID.
    pub fn create(&self, fields: &EntryFields) -> Result<i64, StoreError> {
        let id = self.with_connection("create game", None, |conn| {
            operations::insert_entry(conn, fields)
        })?;
        log::debug!("Created game {id}: {fields}");
        Ok(id)
    }

    pub fn get(&self, id: i64) -> Result<CatalogEntry, StoreError> {
        self.with_connection("get game", Some(id), |conn| operations::find_entry(conn, id))?
            .ok_or(StoreError::NotFound { id })
    }

    /// One page of entries. Use [`CatalogStore::total_count`] for the total.
    pub fn list(
        &self,
        page: PageRequest,
        order: EntryOrder,
    ) -> Result<Vec<CatalogEntry>, StoreError> {
        self.with_connection("list games", None, |conn| {
            queries::list_entries(conn, page, order)
        })
    }

    pub fn total_count(&self) -> Result<u64, StoreError> {
        self.with_connection("count games", None, queries::count_entries)
    }

    /// A page of entries together with the totals.
    ///
    /// The count and the page are read by two separate queries with no
    /// snapshot between them, so a concurrent write can make `total_pages`
    /// disagree with the returned rows.
    pub fn list_page(
        &self,
        page: PageRequest,
        order: EntryOrder,
    ) -> Result<Paginated<CatalogEntry>, StoreError> {
        self.with_connection("list games", None, |conn| {
            let total = queries::count_entries(conn)?;
            let entries = queries::list_entries(conn, page, order)?;
            Ok(Paginated::new(entries, total, page))
        })
    }

    /// Every entry, unpaged.
    pub fn list_all(&self, order: EntryOrder) -> Result<Vec<CatalogEntry>, StoreError> {
        self.with_connection("list games", None, |conn| {
            queries::list_all_entries(conn, order)
        })
    }

    /// Replace all fields of an entry. Returns `false` if the ID doesn't exist.
    pub fn update(&self, id: i64, fields: &EntryFields) -> Result<bool, StoreError> {
        self.with_connection("update game", Some(id), |conn| {
            operations::replace_entry(conn, id, fields)
        })
    }

    /// Remove an entry. Returns `false` if the ID doesn't exist.
    pub fn delete(&self, id: i64) -> Result<bool, StoreError> {
        self.with_connection("delete game", Some(id), |conn| {
            operations::delete_entry(conn, id)
        })
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        schema::open_connection(&self.config).map_err(|source| StoreError::Open {
            path: self.config.path.clone(),
            source,
        })
    }

    fn with_connection<T>(
        &self,
        operation: &'static str,
        id: Option<i64>,
        f: impl FnOnce(&Connection) -> Result<T, OperationError>,
    ) -> Result<T, StoreError> {
        let conn = self.connect()?;
        f(&conn).map_err(|source| StoreError::Operation {
            operation,
            id,
            source,
        })
    }
}
