//! External command execution
//!
//! Commands run directly through `std::process::Command`, never through a
//! shell. Output is captured so a failing step can report its stderr.

use crate::core::error::CommandError;
use crate::core::plan::CommandSpec;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Captured result of a command that was started
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
  /// Exit code (None when terminated by a signal)
  pub code: Option<i32>,
  pub success: bool,
  pub stdout: String,
  pub stderr: String,
}

/// Something that can run a [`CommandSpec`]
///
/// `Err` means the command could not be started; a started command that
/// exits non-zero is still `Ok` with `success == false`.
pub trait CommandRunner {
  fn run(&self, command: &CommandSpec) -> Result<CommandOutput, CommandError>;
}

/// Runs commands as child processes inside a working root
pub struct SystemRunner {
  root: PathBuf,
}

impl SystemRunner {
  pub fn new(root: &Path) -> Self {
    Self {
      root: root.to_path_buf(),
    }
  }

  fn command(&self, spec: &CommandSpec) -> Command {
    let mut cmd = Command::new(&spec.program);
    cmd
      .args(&spec.args)
      .current_dir(&self.root)
      .stdin(Stdio::null())
      .stdout(Stdio::piped())
      .stderr(Stdio::piped());
    cmd
  }
}

impl CommandRunner for SystemRunner {
  fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, CommandError> {
    log::debug!("running `{}` in {}", spec, self.root.display());

    let output = self
      .command(spec)
      .output()
      .map_err(|e| CommandError::SpawnFailed {
        program: spec.program.clone(),
        reason: e.to_string(),
      })?;

    let result = CommandOutput {
      code: output.status.code(),
      success: output.status.success(),
      stdout: String::from_utf8_lossy(&output.stdout).to_string(),
      stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    };

    for line in result.stdout.lines() {
      log::debug!("[{}] {}", spec.program, line);
    }

    Ok(result)
  }
}
