//! Archive formats and the commands that produce them

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Archive format for the release artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ArchiveFormat {
  /// `zip -r`
  #[default]
  Zip,
  /// `tar -czf`
  TarGz,
}

impl ArchiveFormat {
  /// File extension, without the leading dot
  pub fn extension(self) -> &'static str {
    match self {
      ArchiveFormat::Zip => "zip",
      ArchiveFormat::TarGz => "tar.gz",
    }
  }

  /// External tool that writes this format
  pub fn program(self) -> &'static str {
    match self {
      ArchiveFormat::Zip => "zip",
      ArchiveFormat::TarGz => "tar",
    }
  }

  /// Arguments that recursively archive `source` into `archive`
  pub fn args(self, archive: &str, source: &str) -> Vec<String> {
    let flag = match self {
      ArchiveFormat::Zip => "-r",
      ArchiveFormat::TarGz => "-czf",
    };
    vec![flag.to_string(), archive.to_string(), source.to_string()]
  }

  /// Path of the archive for `name` inside `release_dir`
  pub fn archive_path(self, release_dir: &Path, name: &str) -> PathBuf {
    release_dir.join(format!("{}.{}", name, self.extension()))
  }
}

impl fmt::Display for ArchiveFormat {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ArchiveFormat::Zip => write!(f, "zip"),
      ArchiveFormat::TarGz => write!(f, "tar-gz"),
    }
  }
}
