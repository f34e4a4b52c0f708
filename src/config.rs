use std::path::PathBuf;

use crate::version::registries::dist_index::DEFAULT_BASE_URL;

// =============================================================================
// Environment variables
// =============================================================================

pub const ENV_STORAGE_ROOT: &str = "NODESHELF_STORAGE_ROOT";
pub const ENV_STORAGE_VERSIONS: &str = "NODESHELF_STORAGE_VERSIONS";
pub const ENV_STORAGE_CURRENT: &str = "NODESHELF_STORAGE_CURRENT";
pub const ENV_STORAGE_HOOKS: &str = "NODESHELF_STORAGE_HOOKS";
pub const ENV_DOWNLOAD_ROOT: &str = "NODESHELF_DOWNLOAD_ROOT";
pub const ENV_CHECKSUM_URI: &str = "NODESHELF_CHECKSUM_URI";
pub const ENV_ARCHIVE_URI: &str = "NODESHELF_ARCHIVE_URI";
pub const ENV_NO_COLOR: &str = "NODESHELF_NO_COLOR";

/// Directory name of the storage root inside the home directory
const STORAGE_DIR_NAME: &str = ".nodeshelf";

/// Default checksum manifest location, see [`Config::expand_uri`]
pub const DEFAULT_CHECKSUM_URI: &str = "{root}/{human}/SHASUMS256.txt";

/// Default archive location, see [`Config::expand_uri`]
pub const DEFAULT_ARCHIVE_URI: &str = "{root}/{human}/{filename}";

/// Process configuration, built once at start-up and passed down explicitly
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub storage_root: PathBuf,
    /// One directory per installed version, named by its full key
    pub versions_dir: PathBuf,
    /// Symlink to the current version directory
    pub current_link: PathBuf,
    pub hooks_dir: PathBuf,
    pub download_root: String,
    pub checksum_uri_template: String,
    pub archive_uri_template: String,
    /// Whether log output may use ANSI colors
    pub color: bool,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok(), dirs::home_dir())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F, home_dir: Option<PathBuf>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let storage_root = var(ENV_STORAGE_ROOT)
            .map(PathBuf::from)
            .unwrap_or_else(|| default_storage_root(home_dir));

        let versions_dir = var(ENV_STORAGE_VERSIONS)
            .map(PathBuf::from)
            .unwrap_or_else(|| storage_root.join("versions"));
        let current_link = var(ENV_STORAGE_CURRENT)
            .map(PathBuf::from)
            .unwrap_or_else(|| storage_root.join("current"));
        let hooks_dir = var(ENV_STORAGE_HOOKS)
            .map(PathBuf::from)
            .unwrap_or_else(|| storage_root.join("hooks"));

        let download_root = var(ENV_DOWNLOAD_ROOT)
            .map(|root| root.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            storage_root,
            versions_dir,
            current_link,
            hooks_dir,
            download_root,
            checksum_uri_template: var(ENV_CHECKSUM_URI)
                .unwrap_or_else(|| DEFAULT_CHECKSUM_URI.to_string()),
            archive_uri_template: var(ENV_ARCHIVE_URI)
                .unwrap_or_else(|| DEFAULT_ARCHIVE_URI.to_string()),
            color: var(ENV_NO_COLOR).is_none(),
        }
    }

    /// Expands `{root}`, `{human}` and `{filename}` placeholders in a URI template
    pub fn expand_uri(&self, template: &str, human: &str, filename: &str) -> String {
        template
            .replace("{root}", &self.download_root)
            .replace("{human}", human)
            .replace("{filename}", filename)
    }
}

fn default_storage_root(home_dir: Option<PathBuf>) -> PathBuf {
    home_dir
        .unwrap_or_else(|| PathBuf::from("."))
        .join(STORAGE_DIR_NAME)
}
