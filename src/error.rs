//! Error types shared by the store gateway and the interactive prompts.

use std::path::PathBuf;

/// A failure talking to the store: it could not be opened, or it rejected a
/// statement (constraint violation, unknown reference, malformed SQL).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to open store at {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("failed to prepare store directory {path}: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Rejected(#[from] rusqlite::Error),
}

/// Malformed user input caught at the prompt. The display string is the
/// message shown before the field is asked again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a valid number")]
    NotANumber,

    #[error("Please enter a valid number or leave blank")]
    NotANumberOrBlank,
}
