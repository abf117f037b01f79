//! Versioned distribution naming

/// Prefix used when no config overrides it
pub const DEFAULT_PREFIX: &str = "slang-ui";

/// Build the versioned distribution name: `<prefix>-<version>` with every `.`
/// in the version replaced by `_`.
///
/// No validation is done on the version. `1.2.3` becomes `slang-ui-1_2_3`,
/// `abc` becomes `slang-ui-abc`.
pub fn versioned_name(prefix: &str, version: &str) -> String {
  format!("{}-{}", prefix, version.replace('.', "_"))
}

/// Check whether a version looks like semver, allowing one leading `v`.
///
/// Only used to warn; the packager accepts any version string.
pub fn is_semver_like(version: &str) -> bool {
  let trimmed = version.strip_prefix('v').unwrap_or(version);
  semver::Version::parse(trimmed).is_ok()
}
