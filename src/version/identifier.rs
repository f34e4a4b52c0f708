//! Canonical version identifier

use std::fmt;
use std::path::{Path, PathBuf};

/// Separator between channel and version inside a full key (`release--v8.0.0`)
pub const FULL_KEY_SEPARATOR: &str = "--";

/// Channel used when a version spec carries no explicit channel
pub const DEFAULT_CHANNEL: &str = "release";

/// A resolved version, e.g. `release/v8.0.0`
///
/// `full` is the storage key (the directory name under `versions/`) and the
/// equality key. `path` is only populated on identifiers produced by the
/// local store.
#[derive(Debug, Clone)]
pub struct VersionId {
    pub channel: String,
    pub version: String,
    pub full: String,
    pub human: String,
    pub path: Option<PathBuf>,
}

impl VersionId {
    /// Builds an identifier from a channel and a canonical version string.
    ///
    /// No validation happens here, see `VersionResolver` for that.
    pub fn new(channel: &str, version: &str) -> Self {
        Self {
            channel: channel.to_string(),
            version: version.to_string(),
            full: format!("{}{}{}", channel, FULL_KEY_SEPARATOR, version),
            human: format!("{}/{}", channel, version),
            path: None,
        }
    }

    /// Re-derives an identifier from a full key by splitting on the first `--`.
    ///
    /// Returns `None` when the key has no separator.
    pub fn from_full_key(full: &str) -> Option<Self> {
        let (channel, version) = full.split_once(FULL_KEY_SEPARATOR)?;
        Some(Self::new(channel, version))
    }

    /// Attaches the location of the installed tree
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl PartialEq for VersionId {
    fn eq(&self, other: &Self) -> bool {
        self.full == other.full
    }
}

impl Eq for VersionId {}

impl fmt::Display for VersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.human)
    }
}
