use retro_games_catalog::ValidationError;
use retro_games_db::StoreError;
use retro_games_transfer::TransferError;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Bad user input for a single field
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Store could not be opened or a statement failed
    #[error("Database error: {0}")]
    Store(#[from] StoreError),

    /// Import or export aborted
    #[error("Transfer error: {0}")]
    Transfer(#[from] TransferError),
}

impl CliError {
    /// Process exit code: 2 for bad input, 1 for everything else.
    pub(crate) fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Store(_) | Self::Transfer(_) => 1,
        }
    }
}
