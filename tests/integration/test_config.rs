//! Integration tests for package.toml handling

use crate::helpers::{TestWorkspace, run_package, run_package_raw, stderr, stdout};
use anyhow::Result;

#[test]
fn test_config_file_overrides_defaults() -> Result<()> {
  let ws = TestWorkspace::empty()?;
  ws.write_file("build/web/index.html", "<html></html>\n")?;
  ws.write_file(
    "package.toml",
    r#"
prefix = "app"
dist_dir = "build/web"
release_dir = "artifacts"
archive = "tar-gz"
"#,
  )?;

  run_package(&ws.path, &["2.1.0"])?;

  assert!(ws.exists("app-2_1_0/index.html"));
  assert!(ws.exists("artifacts/app-2_1_0.tar.gz"));
  assert!(!ws.exists("build/web"));
  Ok(())
}

#[test]
fn test_cli_archive_beats_config() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_file("ci/package.toml", "archive = \"tar-gz\"\n")?;

  let output = run_package(&ws.path, &["1.0.0", "--dry-run", "--archive", "zip"])?;

  assert!(stdout(&output).contains("$ zip -r ci/release/slang-ui-1_0_0.zip slang-ui-1_0_0"));
  Ok(())
}

#[test]
fn test_explicit_config_must_exist() -> Result<()> {
  let ws = TestWorkspace::new()?;

  let output = run_package_raw(&ws.path, &["1.0.0", "--config", "missing.toml"])?;

  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("Config file not found"));
  assert!(ws.exists("dist"));
  assert!(!ws.exists("ci"));
  Ok(())
}

#[test]
fn test_invalid_config_is_rejected_before_running() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_file("package.toml", "archive = \"rar\"\n")?;

  let output = run_package_raw(&ws.path, &["1.0.0"])?;

  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("Invalid config file"));
  assert!(ws.exists("dist"));
  assert!(!ws.exists("ci/release"));
  Ok(())
}
