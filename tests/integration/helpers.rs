//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A CI checkout with a populated build output directory
pub struct TestWorkspace {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestWorkspace {
  /// Create a workspace with `dist/` containing a small web build
  pub fn new() -> Result<Self> {
    let ws = Self::empty()?;
    ws.write_file("dist/index.html", "<html><body>slang</body></html>\n")?;
    ws.write_file("dist/assets/main.js", "console.log('slang');\n")?;
    Ok(ws)
  }

  /// Create a workspace without any build output
  pub fn empty() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();
    Ok(Self { _root: root, path })
  }

  /// Write a file, creating parent directories
  pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
    let full = self.path.join(path);
    if let Some(parent) = full.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(full, content)?;
    Ok(())
  }

  /// Check if a path exists
  pub fn exists(&self, path: &str) -> bool {
    self.path.join(path).exists()
  }

  /// Read a file
  pub fn read_file(&self, path: &str) -> Result<String> {
    Ok(std::fs::read_to_string(self.path.join(path))?)
  }

  /// Sorted top-level entries of the workspace
  pub fn entries(&self) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(&self.path)? {
      names.push(entry?.file_name().to_string_lossy().to_string());
    }
    names.sort();
    Ok(names)
  }
}

/// Run the packager, failing the test if it exits unsuccessfully
pub fn run_package(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = run_package_raw(cwd, args)?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    anyhow::bail!(
      "package command failed: package {}\nstdout: {}\nstderr: {}",
      args.join(" "),
      stdout,
      stderr
    );
  }

  Ok(output)
}

/// Run the packager and return its output whatever the exit status
pub fn run_package_raw(cwd: &Path, args: &[&str]) -> Result<Output> {
  let bin = env!("CARGO_BIN_EXE_package");

  Command::new(bin)
    .current_dir(cwd)
    .args(args)
    .output()
    .context("Failed to run package")
}

/// Whether an external tool is available on PATH
pub fn has_tool(program: &str) -> bool {
  Command::new(program)
    .arg("--help")
    .output()
    .map(|_| true)
    .unwrap_or(false)
}

/// List the entries of a gzip tarball
pub fn tar_entries(archive: &Path) -> Result<Vec<String>> {
  let output = Command::new("tar")
    .arg("-tzf")
    .arg(archive)
    .output()
    .context("Failed to run tar")?;

  if !output.status.success() {
    anyhow::bail!("tar -tzf failed: {}", String::from_utf8_lossy(&output.stderr));
  }

  Ok(
    String::from_utf8_lossy(&output.stdout)
      .lines()
      .map(|l| l.trim_end_matches('/').to_string())
      .collect(),
  )
}

/// List the entries of a zip archive
pub fn zip_entries(archive: &Path) -> Result<Vec<String>> {
  let output = Command::new("unzip")
    .arg("-Z1")
    .arg(archive)
    .output()
    .context("Failed to run unzip")?;

  if !output.status.success() {
    anyhow::bail!("unzip -Z1 failed: {}", String::from_utf8_lossy(&output.stderr));
  }

  Ok(
    String::from_utf8_lossy(&output.stdout)
      .lines()
      .map(|l| l.trim_end_matches('/').to_string())
      .collect(),
  )
}

pub fn stdout(output: &Output) -> String {
  String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
  String::from_utf8_lossy(&output.stderr).to_string()
}
