//! Plan execution
//!
//! Operations run strictly in order. The first one that fails stops the
//! sequence; nothing that already ran is undone.

use crate::core::error::{CommandError, PackageResult};
use crate::core::plan::{CommandSpec, Operation, Plan, PlanId};
use crate::core::runner::CommandRunner;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

/// Outcome of one executed operation
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
  pub operation: Operation,
  /// Rendered command line
  pub command: String,
  pub exit_code: Option<i32>,
  pub duration_ms: u64,
}

/// Outcome of a complete, successful run
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionReport {
  pub plan_id: PlanId,
  pub version: String,
  pub versioned_name: String,
  pub archive: PathBuf,
  pub started_at: DateTime<Utc>,
  pub steps: Vec<StepReport>,
  /// SHA-256 of the archive, when requested
  #[serde(skip_serializing_if = "Option::is_none")]
  pub checksum: Option<String>,
}

/// Progress notifications emitted while executing
pub enum StepEvent<'a> {
  Started {
    index: usize,
    total: usize,
    operation: &'a Operation,
    command: &'a CommandSpec,
  },
  Finished {
    index: usize,
    total: usize,
    report: &'a StepReport,
  },
}

/// Execute every operation of `plan` through `runner`
pub fn execute<R, F>(runner: &R, plan: &Plan, mut on_event: F) -> PackageResult<ExecutionReport>
where
  R: CommandRunner + ?Sized,
  F: FnMut(StepEvent<'_>),
{
  let started_at = Utc::now();
  let total = plan.len();
  let mut steps = Vec::with_capacity(total);

  for (index, operation) in plan.operations.iter().enumerate() {
    let command = operation.to_command();
    on_event(StepEvent::Started {
      index,
      total,
      operation,
      command: &command,
    });

    let start = Instant::now();
    let output = runner.run(&command)?;
    let duration_ms = start.elapsed().as_millis() as u64;

    if !output.success {
      log::debug!("step {} ({}) failed after {}ms", index + 1, operation.label(), duration_ms);
      return Err(
        CommandError::Failed {
          command: command.to_string(),
          code: output.code,
          stderr: output.stderr,
        }
        .into(),
      );
    }

    if !output.stderr.trim().is_empty() {
      log::debug!("[{}] stderr: {}", command.program, output.stderr.trim());
    }

    let report = StepReport {
      operation: operation.clone(),
      command: command.to_string(),
      exit_code: output.code,
      duration_ms,
    };
    on_event(StepEvent::Finished {
      index,
      total,
      report: &report,
    });
    steps.push(report);
  }

  Ok(ExecutionReport {
    plan_id: plan.metadata.id.clone(),
    version: plan.metadata.version.clone(),
    versioned_name: plan.metadata.versioned_name.clone(),
    archive: plan.metadata.archive.clone(),
    started_at,
    steps,
    checksum: None,
  })
}
