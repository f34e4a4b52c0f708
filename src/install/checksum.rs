//! SHA-256 checksum manifest lookup and verification
//!
//! Manifests list one file per line: `<hex sha256><two spaces><filename>`.

use sha2::{Digest, Sha256};

use crate::install::error::InstallError;

/// Finds the checksum recorded for `filename`
pub fn find_checksum<'a>(manifest: &'a str, filename: &str) -> Option<&'a str> {
    manifest
        .lines()
        .filter_map(|line| line.split_once("  "))
        .find(|(_, name)| *name == filename)
        .map(|(sum, _)| sum)
}

/// Computes the SHA-256 of `bytes` as a lowercase hex string
pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Verifies `archive` against the entry for `filename` in `manifest`
pub fn verify_checksum(manifest: &str, filename: &str, archive: &[u8]) -> Result<(), InstallError> {
    let expected = find_checksum(manifest, filename)
        .ok_or_else(|| InstallError::ChecksumManifestEntryMissing(filename.to_string()))?;

    let actual = sha256_hex(archive);
    if !expected.eq_ignore_ascii_case(&actual) {
        return Err(InstallError::ChecksumMismatch {
            filename: filename.to_string(),
            expected: expected.to_string(),
            actual,
        });
    }

    Ok(())
}
