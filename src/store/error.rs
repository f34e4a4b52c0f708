use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Version \"{0}\" not installed")]
    NotInstalled(String),

    #[error("Version \"{0}\" is already installed")]
    AlreadyInstalled(String),

    #[error("Unknown hook: {0}")]
    UnknownHook(String),

    #[error("Store entry \"{0}\" is not a valid version directory")]
    InvalidEntry(String),

    #[error("Archive did not contain the expected directory \"{0}\"")]
    MissingExtractedDirectory(String),

    #[error("Failed to extract {}: {source}", .path.display())]
    Extract {
        path: PathBuf,
        source: std::io::Error,
    },
}
