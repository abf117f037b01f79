//! SHA-256 sidecar files for release archives

use crate::core::error::{PackageResult, ResultExt};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Hex-encoded SHA-256 of a file's contents
pub fn sha256_file(path: &Path) -> PackageResult<String> {
  let file = File::open(path).with_context(|| format!("Failed to open {} for hashing", path.display()))?;
  let mut reader = BufReader::new(file);
  let mut hasher = Sha256::new();
  let mut buf = [0u8; 64 * 1024];

  loop {
    let n = reader
      .read(&mut buf)
      .with_context(|| format!("Failed to read {}", path.display()))?;
    if n == 0 {
      break;
    }
    hasher.update(&buf[..n]);
  }

  Ok(format!("{:x}", hasher.finalize()))
}

/// Sidecar path for an archive (`<archive>.sha256`)
pub fn sidecar_path(archive: &Path) -> PathBuf {
  let mut name = archive.as_os_str().to_owned();
  name.push(".sha256");
  PathBuf::from(name)
}

/// Hash `archive` and write a `sha256sum`-compatible sidecar next to it.
///
/// Returns the digest.
pub fn write_sidecar(archive: &Path) -> PackageResult<String> {
  let digest = sha256_file(archive)?;
  let file_name = archive
    .file_name()
    .map(|n| n.to_string_lossy().to_string())
    .unwrap_or_default();
  let sidecar = sidecar_path(archive);

  std::fs::write(&sidecar, format!("{}  {}\n", digest, file_name))
    .with_context(|| format!("Failed to write checksum {}", sidecar.display()))?;

  Ok(digest)
}
