use crate::core::error::{ConfigError, PackageResult, ResultExt};
use crate::release::ArchiveFormat;
use crate::release::name::DEFAULT_PREFIX;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names, searched in order inside the working root
pub const CONFIG_FILES: [&str; 3] = ["package.toml", ".package.toml", "ci/package.toml"];

/// Packager configuration
///
/// Every field is optional in the file; missing fields fall back to the
/// defaults used by the CI release job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackageConfig {
  /// Prefix of the versioned distribution name (default: "slang-ui")
  pub prefix: String,

  /// Build output directory to rename (default: "dist")
  pub dist_dir: PathBuf,

  /// Directory collecting release archives (default: "ci/release")
  pub release_dir: PathBuf,

  /// Archive format (default: zip)
  pub archive: ArchiveFormat,
}

impl Default for PackageConfig {
  fn default() -> Self {
    Self {
      prefix: DEFAULT_PREFIX.to_string(),
      dist_dir: PathBuf::from("dist"),
      release_dir: PathBuf::from("ci").join("release"),
      archive: ArchiveFormat::Zip,
    }
  }
}

impl PackageConfig {
  /// Load configuration.
  ///
  /// An explicit path must exist. Without one, the first of [`CONFIG_FILES`]
  /// found under `root` is used, and if none exists the defaults apply.
  /// Returns the config together with the file it came from.
  pub fn load(root: &Path, explicit: Option<&Path>) -> PackageResult<(Self, Option<PathBuf>)> {
    if let Some(path) = explicit {
      if !path.is_file() {
        return Err(ConfigError::NotFound {
          path: path.to_path_buf(),
        }
        .into());
      }
      return Ok((Self::from_file(path)?, Some(path.to_path_buf())));
    }

    match find_config_path(root) {
      Some(path) => Ok((Self::from_file(&path)?, Some(path))),
      None => Ok((Self::default(), None)),
    }
  }

  /// Parse a config file
  pub fn from_file(path: &Path) -> PackageResult<Self> {
    let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Self::parse(&content).map_err(|reason| {
      ConfigError::Invalid {
        path: path.to_path_buf(),
        reason,
      }
      .into()
    })
  }

  fn parse(content: &str) -> Result<Self, String> {
    let config: Self = toml_edit::de::from_str(content).map_err(|e| e.to_string())?;
    config.validate()?;
    Ok(config)
  }

  /// Reject values that would make the commands meaningless
  pub fn validate(&self) -> Result<(), String> {
    if self.prefix.trim().is_empty() {
      return Err("prefix must not be empty".to_string());
    }
    if self.prefix.contains(['/', '\\']) {
      return Err(format!("prefix '{}' must not contain path separators", self.prefix));
    }
    if self.dist_dir.as_os_str().is_empty() {
      return Err("dist_dir must not be empty".to_string());
    }
    if self.release_dir.as_os_str().is_empty() {
      return Err("release_dir must not be empty".to_string());
    }
    Ok(())
  }
}

/// Find the first config file under `root`
pub fn find_config_path(root: &Path) -> Option<PathBuf> {
  CONFIG_FILES.iter().map(|name| root.join(name)).find(|p| p.is_file())
}
