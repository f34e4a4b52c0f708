//! Local version store
//!
//! Owns the on-disk layout under the storage root:
//!
//! ```text
//! ~/.nodeshelf/                   # Storage root (or NODESHELF_STORAGE_ROOT)
//!   versions/
//!     release--v8.0.0/            # One directory per installed version, named by full key
//!     rc--v8.0.0-rc.2/
//!     .staging-XXXXXX/            # Transient extraction directory, never listed
//!   current -> versions/release--v8.0.0
//!   hooks/
//!     post_install.sh
//! ```
//!
//! A version directory only ever appears under its full key through a single
//! rename, so an interrupted install never leaves a half-written version
//! behind. Nothing here locks the store: two processes racing on
//! [`Store::make_current`] or [`Store::install_from_archive`] leave whichever
//! `current` link was written last.

pub mod archive;
pub mod error;
pub mod hooks;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::Config;
use crate::store::error::StoreError;
use crate::version::identifier::VersionId;

/// Prefix of the temporary directories archives are extracted into
const STAGING_PREFIX: &str = ".staging-";

pub struct Store {
    versions_dir: PathBuf,
    current_link: PathBuf,
    hooks_dir: PathBuf,
}

impl Store {
    pub fn new(config: &Config) -> Self {
        Self {
            versions_dir: config.versions_dir.clone(),
            current_link: config.current_link.clone(),
            hooks_dir: config.hooks_dir.clone(),
        }
    }

    pub fn versions_dir(&self) -> &Path {
        &self.versions_dir
    }

    /// Creates the store directories and seeds the hook scripts.
    ///
    /// Safe to call on every invocation; existing hooks are left untouched.
    pub fn initialize(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.versions_dir)?;
        fs::create_dir_all(&self.hooks_dir)?;
        if let Some(parent) = self.current_link.parent() {
            fs::create_dir_all(parent)?;
        }

        let post_install = self.hook_path(hooks::POST_INSTALL)?;
        if !post_install.exists() {
            info!("Creating post-install hook at {}", post_install.display());
            fs::write(&post_install, hooks::POST_INSTALL_TEMPLATE)?;
            make_executable(&post_install)?;
        }

        Ok(())
    }

    /// Lists installed versions, ordered by full key descending
    pub fn list_installed(&self) -> Result<Vec<VersionId>, StoreError> {
        let entries = match fs::read_dir(&self.versions_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut installed = Vec::new();
        for entry in entries {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();

            if name.starts_with('.') {
                continue;
            }

            // Follows symlinks, a linked-in version directory counts as installed
            let is_dir = match fs::metadata(entry.path()) {
                Ok(metadata) => metadata.is_dir(),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    debug!("Ignoring dangling link in versions directory: {}", name);
                    false
                }
                Err(e) => return Err(e.into()),
            };
            if !is_dir {
                continue;
            }

            let Some(id) = VersionId::from_full_key(&name) else {
                debug!("Ignoring unrecognized entry in versions directory: {}", name);
                continue;
            };

            installed.push(id.with_path(fs::canonicalize(entry.path())?));
        }

        installed.sort_by(|a, b| b.full.cmp(&a.full));
        Ok(installed)
    }

    /// Looks up an installed version by full key
    pub fn find_installed(&self, id: &VersionId) -> Result<Option<VersionId>, StoreError> {
        Ok(self
            .list_installed()?
            .into_iter()
            .find(|installed| installed.full == id.full))
    }

    /// Returns the installed location of a version
    pub fn resolve_path(&self, id: &VersionId) -> Result<Option<PathBuf>, StoreError> {
        Ok(self.find_installed(id)?.and_then(|installed| installed.path))
    }

    /// Returns the version the `current` link points at.
    ///
    /// A missing or dangling link means no current version; any other I/O
    /// error is returned.
    pub fn current(&self) -> Result<Option<VersionId>, StoreError> {
        let target = match fs::canonicalize(&self.current_link) {
            Ok(target) => target,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let name = target
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        match VersionId::from_full_key(&name) {
            Some(id) => Ok(Some(id.with_path(target))),
            None => Err(StoreError::InvalidEntry(target.display().to_string())),
        }
    }

    /// Points the `current` link at an installed version
    ///
    /// Fails with [`StoreError::NotInstalled`] without touching the existing
    /// link when the version is not installed.
    pub fn make_current(&self, id: &VersionId) -> Result<VersionId, StoreError> {
        let Some(installed) = self.find_installed(id)? else {
            return Err(StoreError::NotInstalled(id.human.clone()));
        };
        let Some(target) = installed.path() else {
            return Err(StoreError::NotInstalled(id.human.clone()));
        };

        match remove_link(&self.current_link) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        create_link(target, &self.current_link)?;
        debug!(
            "Linked {} -> {}",
            self.current_link.display(),
            target.display()
        );

        Ok(installed)
    }

    /// Extracts a distribution archive and publishes it as `versions/<full>`.
    ///
    /// The archive is unpacked into a hidden staging directory first; only its
    /// `extracted_name` top-level directory is renamed into place. The staging
    /// directory is removed whether or not this succeeds.
    pub fn install_from_archive(
        &self,
        id: &VersionId,
        extracted_name: &str,
        archive_path: &Path,
    ) -> Result<VersionId, StoreError> {
        let target = self.versions_dir.join(&id.full);
        if target.symlink_metadata().is_ok() {
            return Err(StoreError::AlreadyInstalled(id.human.clone()));
        }

        fs::create_dir_all(&self.versions_dir)?;
        let staging = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir_in(&self.versions_dir)?;

        archive::unpack_tar_gz(archive_path, staging.path()).map_err(|source| {
            StoreError::Extract {
                path: archive_path.to_path_buf(),
                source,
            }
        })?;

        let extracted = staging.path().join(extracted_name);
        if !extracted.is_dir() {
            return Err(StoreError::MissingExtractedDirectory(
                extracted_name.to_string(),
            ));
        }

        fs::rename(&extracted, &target)?;
        staging.close()?;

        info!("Installed {} into {}", id.human, target.display());
        Ok(VersionId::new(&id.channel, &id.version).with_path(fs::canonicalize(&target)?))
    }

    /// Returns the path of a named hook script
    pub fn hook_path(&self, name: &str) -> Result<PathBuf, StoreError> {
        hooks::script_name(name)
            .map(|script| self.hooks_dir.join(script))
            .ok_or_else(|| StoreError::UnknownHook(name.to_string()))
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> io::Result<()> {
    Ok(())
}

#[cfg(unix)]
fn create_link(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn create_link(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link)
}

#[cfg(unix)]
fn remove_link(link: &Path) -> io::Result<()> {
    fs::remove_file(link)
}

#[cfg(windows)]
fn remove_link(link: &Path) -> io::Result<()> {
    // Directory symlinks are removed as directories on Windows
    fs::remove_dir(link).or_else(|_| fs::remove_file(link))
}
