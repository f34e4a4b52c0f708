//! Distribution file naming per platform
//!
//! The download server names archives `node-<version>-<platform>-<arch>.<ext>`,
//! e.g. `node-v8.0.0-linux-x64.tar.gz`, and the archive's single top-level
//! directory carries the same name without the extension.

use crate::config::Config;
use crate::version::identifier::VersionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    TarGz,
    Zip,
}

impl ArchiveFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ArchiveFormat::TarGz => "tar.gz",
            ArchiveFormat::Zip => "zip",
        }
    }
}

/// Operating system and CPU architecture in the download server's vocabulary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    pub os: String,
    pub arch: String,
}

impl Platform {
    /// Maps Rust target names (`std::env::consts`) to the server's names
    pub fn new(os: &str, arch: &str) -> Self {
        let os = match os {
            "macos" => "darwin",
            "windows" => "win",
            other => other,
        };
        let arch = match arch {
            "x86_64" => "x64",
            "aarch64" => "arm64",
            "arm" => "armv7l",
            "powerpc64" => "ppc64",
            other => other,
        };
        Self {
            os: os.to_string(),
            arch: arch.to_string(),
        }
    }

    /// The platform this binary was built for
    pub fn current() -> Self {
        Self::new(std::env::consts::OS, std::env::consts::ARCH)
    }

    pub fn archive_format(&self) -> ArchiveFormat {
        if self.os == "win" {
            ArchiveFormat::Zip
        } else {
            ArchiveFormat::TarGz
        }
    }
}

/// Everything needed to download one version for one platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    /// Top-level directory inside the archive
    pub name: String,
    /// Archive file name as listed in the checksum manifest
    pub filename: String,
    pub format: ArchiveFormat,
    pub archive_uri: String,
    pub checksum_uri: String,
}

impl Distribution {
    pub fn new(id: &VersionId, platform: &Platform, config: &Config) -> Self {
        let format = platform.archive_format();
        let name = format!("node-{}-{}-{}", id.version, platform.os, platform.arch);
        let filename = format!("{}.{}", name, format.extension());

        Self {
            archive_uri: config.expand_uri(&config.archive_uri_template, &id.human, &filename),
            checksum_uri: config.expand_uri(&config.checksum_uri_template, &id.human, &filename),
            name,
            filename,
            format,
        }
    }
}
