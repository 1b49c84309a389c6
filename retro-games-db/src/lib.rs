//! SQLite persistence layer for the retro games catalog.
//!
//! Provides schema creation, CRUD operations, paged listing, and a
//! [`CatalogStore`] handle that opens one connection per operation
//! (backed by SQLite via rusqlite with the bundled feature).

pub mod config;
pub mod operations;
pub mod queries;
pub mod schema;
pub mod store;

pub use config::{DEFAULT_BUSY_TIMEOUT, StoreConfig, default_store_path, settings_path};
pub use operations::{
    OperationError, delete_entry, find_entry, get_entry, insert_entry, replace_entry,
};
pub use queries::{count_entries, list_all_entries, list_entries};
pub use schema::{SchemaError, ensure_schema, open_connection, open_database, open_memory};
pub use store::{CatalogStore, StoreError};
