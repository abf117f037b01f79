//! Utility functions for path display and command rendering

use std::path::Path;

/// Convert a path to a display/argument string with forward slashes
///
/// Plans render identically on every host, so plan IDs do too.
pub fn path_to_arg(path: &Path) -> String {
  #[cfg(target_os = "windows")]
  {
    path.to_string_lossy().replace('\\', "/")
  }
  #[cfg(not(target_os = "windows"))]
  {
    path.to_string_lossy().to_string()
  }
}

/// Quote an argument for display if it contains whitespace or quotes
///
/// Only used to print commands; arguments are never passed through a shell.
pub fn quote_arg(arg: &str) -> String {
  if arg.is_empty() {
    return "''".to_string();
  }
  if arg.chars().any(|c| c.is_whitespace() || c == '\'' || c == '"') {
    return format!("'{}'", arg.replace('\'', r"'\''"));
  }
  arg.to_string()
}
