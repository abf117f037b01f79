//! Integration tests for invalid invocations

use crate::helpers::{TestWorkspace, run_package, run_package_raw, stdout};
use anyhow::Result;

fn assert_usage_without_side_effects(args: &[&str]) -> Result<()> {
  let ws = TestWorkspace::new()?;
  let before = ws.entries()?;

  let output = run_package_raw(&ws.path, args)?;

  assert_eq!(output.status.code(), Some(1), "args {:?} should fail", args);
  assert_eq!(stdout(&output), "Usage: package vx.y.z\n");
  assert_eq!(ws.entries()?, before, "args {:?} must not touch the filesystem", args);
  assert!(ws.exists("dist/index.html"));

  Ok(())
}

#[test]
fn test_no_arguments_prints_usage() -> Result<()> {
  assert_usage_without_side_effects(&[])
}

#[test]
fn test_two_arguments_prints_usage() -> Result<()> {
  assert_usage_without_side_effects(&["1.0.0", "2.0.0"])
}

#[test]
fn test_many_arguments_prints_usage() -> Result<()> {
  assert_usage_without_side_effects(&["1", "2", "3", "4"])
}

#[test]
fn test_flags_do_not_count_as_version() -> Result<()> {
  assert_usage_without_side_effects(&["--dry-run"])
}

#[test]
fn test_unknown_flag_prints_usage() -> Result<()> {
  assert_usage_without_side_effects(&["--frobnicate", "1.0.0"])
}

#[test]
fn test_help_still_works() -> Result<()> {
  let ws = TestWorkspace::new()?;
  let output = run_package(&ws.path, &["--help"])?;
  let out = stdout(&output);

  assert!(out.contains("VERSION"));
  assert!(out.contains("--dry-run"));
  Ok(())
}

#[test]
fn test_dash_leading_version_is_accepted() -> Result<()> {
  let ws = TestWorkspace::new()?;

  let output = run_package(&ws.path, &["-1.0", "--dry-run"])?;
  let out = stdout(&output);

  assert!(out.contains("$ mv dist slang-ui--1_0"));
  assert!(ws.exists("dist/index.html"));
  Ok(())
}

#[test]
fn test_dash_leading_version_after_options() -> Result<()> {
  let ws = TestWorkspace::new()?;

  let output = run_package(&ws.path, &["--dry-run", "--json", "-rc.1"])?;
  let plan: serde_json::Value = serde_json::from_slice(&output.stdout)?;

  assert_eq!(plan["metadata"]["versioned_name"], "slang-ui--rc_1");
  Ok(())
}

#[test]
fn test_separator_passes_version_literally() -> Result<()> {
  let ws = TestWorkspace::new()?;

  let output = run_package(&ws.path, &["--dry-run", "--", "--json"])?;

  assert!(stdout(&output).contains("$ mv dist slang-ui---json"));
  Ok(())
}
