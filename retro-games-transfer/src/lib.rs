//! CSV bulk import and export for the retro games catalog.
//!
//! Import is fault-isolated per row: a row that fails validation is skipped
//! and the rest of the file is still processed. Only structural problems
//! (unreadable file, missing required columns) abort the whole import.

pub mod csv_export;
pub mod csv_import;
pub mod error;

pub use csv_export::{export_csv, export_to_writer, write_entries};
pub use csv_import::{REQUIRED_COLUMNS, import_csv, import_from_reader};
pub use error::TransferError;

/// Column order written by export and understood by import.
pub const CSV_COLUMNS: [&str; 5] = [
    "title",
    "release_year",
    "platform",
    "date_acquired",
    "condition",
];
