//! `package <version>` - rename the build output and archive it for release
//!
//! Runs, in order and stopping at the first failure:
//! 1. `mkdir -p ci/release`
//! 2. `mv dist slang-ui-<version>`
//! 3. `zip -r ci/release/slang-ui-<version>.zip slang-ui-<version>`
//!
//! Supports:
//! - `--dry-run` to show the plan without executing
//! - `--json` for machine-readable plan/report output
//! - `--archive tar-gz` to produce a tarball instead of a zip
//! - `--checksum` to write a `.sha256` sidecar next to the archive

use crate::core::config::PackageConfig;
use crate::core::error::PackageResult;
use crate::core::executor::{self, ExecutionReport, StepEvent};
use crate::core::plan::Plan;
use crate::core::runner::SystemRunner;
use crate::release::checksum;
use crate::release::name::is_semver_like;
use crate::release::ArchiveFormat;
use crate::ui::StepProgress;
use crate::utils::path_to_arg;
use std::path::PathBuf;

/// Step name printed before the commands run
const STEP_NAME: &str = "PACKAGE";

/// Options for a packaging run
#[derive(Debug, Clone)]
pub struct PackageOptions {
  pub version: String,
  /// Directory the commands run in
  pub root: PathBuf,
  /// Explicit config file (otherwise searched in `root`)
  pub config: Option<PathBuf>,
  /// Overrides the configured archive format
  pub archive: Option<ArchiveFormat>,
  pub dry_run: bool,
  pub json: bool,
  pub checksum: bool,
}

/// Run the package command
pub fn run_package(opts: PackageOptions) -> PackageResult<()> {
  let (config, source) = PackageConfig::load(&opts.root, opts.config.as_deref())?;
  match source {
    Some(path) => log::debug!("loaded config from {}", path.display()),
    None => log::debug!("no config file found, using defaults"),
  }

  if !is_semver_like(&opts.version) {
    log::warn!(
      "version '{}' does not look like vx.y.z, packaging it anyway",
      opts.version
    );
  }

  let plan = match opts.archive {
    Some(format) => Plan::with_format(&config, &opts.version, format),
    None => Plan::for_release(&config, &opts.version),
  };
  log::debug!("plan {} with {} operations", plan.metadata.id, plan.len());

  if opts.dry_run {
    if opts.json {
      println!("{}", plan.to_json()?);
    } else {
      println!("DRY RUN: no commands will be executed\n");
      print!("{}", plan.to_human_readable());
    }
    return Ok(());
  }

  let mut report = execute_plan(&opts, &plan)?;

  if opts.checksum {
    let archive = opts.root.join(&report.archive);
    let digest = checksum::write_sidecar(&archive)?;
    log::debug!("sha256 {} {}", digest, archive.display());
    report.checksum = Some(digest);
  }

  if opts.json {
    println!("{}", serde_json::to_string_pretty(&report)?);
  } else {
    print_summary(&report);
  }

  Ok(())
}

/// Run the plan, printing each command (or a progress bar on a terminal)
fn execute_plan(opts: &PackageOptions, plan: &Plan) -> PackageResult<ExecutionReport> {
  let runner = SystemRunner::new(&opts.root);

  if opts.json {
    return executor::execute(&runner, plan, |_| {});
  }

  println!("Step: {}", STEP_NAME);

  let mut progress = StepProgress::for_terminal(plan.len(), "Packaging");
  if progress.is_some() {
    print!("{}", plan.to_human_readable());
  }

  executor::execute(&runner, plan, |event| match event {
    StepEvent::Started {
      index,
      total,
      operation,
      command,
    } => {
      log::debug!("step {}/{}: {}", index + 1, total, operation);
      if progress.is_none() {
        println!("$ {}", command);
      }
    }
    StepEvent::Finished { index, total, report } => {
      log::debug!("step {}/{} done in {}ms", index + 1, total, report.duration_ms);
      if let Some(bar) = progress.as_mut() {
        bar.inc();
      }
    }
  })
}

fn print_summary(report: &ExecutionReport) {
  println!();
  println!(
    "✅ Packaged {} → {}",
    report.versioned_name,
    path_to_arg(&report.archive)
  );
  if let Some(ref digest) = report.checksum {
    println!("   sha256: {}", digest);
  }
}
