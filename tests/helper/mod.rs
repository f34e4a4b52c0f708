//! Shared test utilities

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use nodeshelf::config::Config;
use nodeshelf::install::checksum::sha256_hex;
use nodeshelf::store::archive::build_tar_gz;

/// Builds a configuration rooted in `root` that downloads from `download_root`
pub fn config_in(root: &TempDir, download_root: &str) -> Config {
    let storage_root = root.path().to_string_lossy().into_owned();
    let download_root = download_root.to_string();
    Config::from_lookup(
        |key| match key {
            "NODESHELF_STORAGE_ROOT" => Some(storage_root.clone()),
            "NODESHELF_DOWNLOAD_ROOT" => Some(download_root.clone()),
            "NODESHELF_NO_COLOR" => Some("1".to_string()),
            _ => None,
        },
        None,
    )
}

/// Archive laid out the way the download server ships Linux x64 builds
pub fn node_archive(version: &str) -> Vec<u8> {
    let bin = format!("node-{}-linux-x64/bin/node", version);
    build_tar_gz(&[(bin.as_str(), "#!/bin/sh\necho node\n")]).unwrap()
}

/// A `SHASUMS256.txt` manifest listing `archive` under `filename`
pub fn manifest_for(filename: &str, archive: &[u8]) -> String {
    format!(
        "{}  node-v0.0.0.tar.gz\n{}  {}\n",
        "0".repeat(64),
        sha256_hex(archive),
        filename
    )
}

/// Writes `archive` to `dir` and returns its path
pub fn write_archive(dir: &Path, archive: &[u8]) -> PathBuf {
    let path = dir.join("archive.tar.gz");
    std::fs::write(&path, archive).unwrap();
    path
}
