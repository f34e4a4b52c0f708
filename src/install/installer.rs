//! Install orchestration
//!
//! Wires download, checksum verification, extraction and publication:
//!
//! 1. Skip the download when the version is already installed
//! 2. Download the checksum manifest and the archive
//! 3. Verify the archive against the manifest
//! 4. Extract and publish it through [`Store::install_from_archive`]
//! 5. Point `current` at it
//! 6. Run the post-install hook
//!
//! Any failure before step 4 completes leaves the store untouched.

use std::io::Write;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::install::checksum::verify_checksum;
use crate::install::download::Downloader;
use crate::install::error::InstallError;
use crate::install::platform::{ArchiveFormat, Distribution, Platform};
use crate::store::{Store, hooks};
use crate::version::identifier::VersionId;

/// Result of a successful install request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The version was downloaded, installed and made current
    Installed(VersionId),
    /// The version was already present and has been made current
    AlreadyInstalled(VersionId),
}

pub struct Installer<'a> {
    config: &'a Config,
    store: &'a Store,
    downloader: Downloader,
    platform: Platform,
}

impl<'a> Installer<'a> {
    pub fn new(config: &'a Config, store: &'a Store) -> Self {
        Self {
            config,
            store,
            downloader: Downloader::new(),
            platform: Platform::current(),
        }
    }

    /// Overrides the detected platform
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub async fn install(&self, id: &VersionId) -> Result<InstallOutcome, InstallError> {
        if self.store.find_installed(id)?.is_some() {
            info!("Version \"{}\" is already installed.", id.human);
            info!("Setting as current...");
            let current = self.store.make_current(id)?;
            return Ok(InstallOutcome::AlreadyInstalled(current));
        }

        info!("Version \"{}\" is not yet installed. Installing...", id.human);

        let dist = Distribution::new(id, &self.platform, self.config);
        if dist.format != ArchiveFormat::TarGz {
            return Err(InstallError::UnsupportedArchive(dist.filename));
        }

        let checksums = self.downloader.fetch_checksums(&dist.checksum_uri).await?;
        let archive = self.downloader.fetch_archive(&dist.archive_uri).await?;

        info!("Verifying checksum...");
        verify_checksum(&checksums, &dist.filename, &archive)?;

        let mut archive_file = tempfile::NamedTempFile::new()?;
        archive_file.write_all(&archive)?;
        archive_file.flush()?;
        debug!("Wrote archive to {}", archive_file.path().display());

        info!("Extracting...");
        self.store
            .install_from_archive(id, &dist.name, archive_file.path())?;

        info!("Setting as current...");
        let installed = self.store.make_current(id)?;

        self.run_post_install_hook(&installed);

        info!("Finished");
        Ok(InstallOutcome::Installed(installed))
    }

    /// Runs the post-install hook; failures are logged, never returned
    fn run_post_install_hook(&self, installed: &VersionId) {
        if cfg!(windows) {
            info!("Skipping the post-install hook because of an unsupported platform");
            return;
        }

        let script = match self.store.hook_path(hooks::POST_INSTALL) {
            Ok(script) if script.exists() => script,
            Ok(script) => {
                warn!("Post-install hook {} does not exist", script.display());
                return;
            }
            Err(e) => {
                warn!("Failed to locate the post-install hook: {}", e);
                return;
            }
        };

        info!("Running the post-install hook...");
        match hooks::run(&script, installed) {
            Ok(status) if status.success() => {}
            Ok(status) => warn!("Post-install hook exited with {}", status),
            Err(e) => warn!("Failed to run the post-install hook: {}", e),
        }
    }
}
