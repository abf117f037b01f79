//! Progress indicator for the release steps
//!
//! Uses `linya`, drawn on stderr. Only enabled for interactive terminals so
//! CI logs and JSON output stay clean.

use linya::{Bar, Progress};
use std::io::IsTerminal;

/// Progress bar over the operations of a plan
pub struct StepProgress {
  progress: Progress,
  bar: Bar,
}

impl StepProgress {
  /// Create a new progress bar for `total` steps
  pub fn new(total: usize, label: impl Into<String>) -> Self {
    let mut progress = Progress::new();
    let bar = progress.bar(total, label.into());
    Self { progress, bar }
  }

  /// Create a bar only when stderr is an interactive terminal
  pub fn for_terminal(total: usize, label: impl Into<String>) -> Option<Self> {
    if std::io::stderr().is_terminal() {
      Some(Self::new(total, label))
    } else {
      None
    }
  }

  /// Mark one step as done
  pub fn inc(&mut self) {
    self.progress.inc_and_draw(&self.bar, 1);
  }
}
