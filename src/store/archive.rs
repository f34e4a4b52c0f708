//! tar.gz extraction for distribution archives

use std::fs::File;
use std::io;
use std::path::Path;

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use tar::Archive;
use tracing::{debug, warn};

/// Unpacks a gzip-compressed tarball into `dest_dir`, keeping the archive's
/// own directory structure (including its top-level folder).
///
/// Entries that would escape `dest_dir` (absolute paths, `..`) are skipped.
pub fn unpack_tar_gz(archive_path: &Path, dest_dir: &Path) -> io::Result<()> {
    let file = File::open(archive_path)?;
    let mut archive = Archive::new(GzDecoder::new(file));
    archive.set_preserve_permissions(true);

    let mut count = 0usize;
    for entry in archive.entries()? {
        let mut entry = entry?;
        if !entry.unpack_in(dest_dir)? {
            warn!(
                "Skipping archive entry outside of the destination: {}",
                entry.path()?.display()
            );
            continue;
        }
        count += 1;
    }

    debug!(
        "Extracted {} entries from {} into {}",
        count,
        archive_path.display(),
        dest_dir.display()
    );
    Ok(())
}

/// Builds an in-memory tar.gz from `(path, contents)` pairs
///
/// Used to produce fixture distributions in tests.
#[doc(hidden)]
pub fn build_tar_gz(files: &[(&str, &str)]) -> io::Result<Vec<u8>> {
    let mut builder = tar::Builder::new(GzEncoder::new(Vec::new(), Compression::default()));
    for (path, contents) in files {
        let mut header = tar::Header::new_gnu();
        header.set_size(contents.len() as u64);
        header.set_mode(0o755);
        header.set_cksum();
        builder.append_data(&mut header, path, contents.as_bytes())?;
    }
    builder.into_inner()?.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn unpack_tar_gz_keeps_top_level_directory() {
        let temp_dir = TempDir::new().unwrap();
        let archive_path = temp_dir.path().join("node.tar.gz");
        let dest = temp_dir.path().join("out");
        std::fs::create_dir(&dest).unwrap();
        std::fs::write(
            &archive_path,
            build_tar_gz(&[
                ("node-v8.0.0-linux-x64/bin/node", "#!/bin/sh\necho node\n"),
                ("node-v8.0.0-linux-x64/README.md", "readme"),
            ])
            .unwrap(),
        )
        .unwrap();

        unpack_tar_gz(&archive_path, &dest).unwrap();

        assert!(dest.join("node-v8.0.0-linux-x64/bin/node").is_file());
        assert!(dest.join("node-v8.0.0-linux-x64/README.md").is_file());
    }

    #[cfg(unix)]
    #[test]
    fn unpack_tar_gz_preserves_executable_bit() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let archive_path = temp_dir.path().join("node.tar.gz");
        std::fs::write(&archive_path, build_tar_gz(&[("top/bin/node", "bin")]).unwrap()).unwrap();

        unpack_tar_gz(&archive_path, temp_dir.path()).unwrap();

        let mode = std::fs::metadata(temp_dir.path().join("top/bin/node"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o111, 0o111);
    }

    #[test]
    fn unpack_tar_gz_fails_for_non_gzip_input() {
        let temp_dir = TempDir::new().unwrap();
        let archive_path = temp_dir.path().join("broken.tar.gz");
        std::fs::write(&archive_path, b"definitely not a tarball").unwrap();

        let result = unpack_tar_gz(&archive_path, temp_dir.path());

        assert!(result.is_err());
    }

    #[test]
    fn unpack_tar_gz_fails_for_missing_archive() {
        let temp_dir = TempDir::new().unwrap();

        let result = unpack_tar_gz(&temp_dir.path().join("missing.tar.gz"), temp_dir.path());

        assert!(result.is_err());
    }
}
