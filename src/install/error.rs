use thiserror::Error;

use crate::store::error::StoreError;

#[derive(Debug, Error)]
pub enum InstallError {
    #[error("Received HTTP \"{status}\" from the server for {uri}")]
    Transport { status: u16, uri: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unable to find \"{0}\" in the checksum manifest")]
    ChecksumManifestEntryMissing(String),

    #[error("The archive {filename} is corrupted (expected sha256 {expected}, got {actual}), please retry")]
    ChecksumMismatch {
        filename: String,
        expected: String,
        actual: String,
    },

    #[error("Unsupported archive format: {0}")]
    UnsupportedArchive(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
