use retro_games_db::StoreError;
use thiserror::Error;

/// Failures that abort a whole import or export.
#[derive(Debug, Error)]
pub enum TransferError {
    /// The header lacks one or more required columns (sorted by name).
    #[error("CSV missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl TransferError {
    /// Whether the source file itself was unusable (as opposed to a store failure).
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::MissingColumns(_) | Self::Io { .. })
    }
}
