//! Release plans: the ordered operations a packaging run performs
//!
//! Every run builds a `Plan` before anything touches the filesystem:
//!
//! - **Dry-run mode**: show the commands without running them
//! - **Auditability**: plans are JSON-serializable for CI logs
//! - **Identity**: plans are hashed, same config + version → same ID
//!
//! ```text
//! version + config
//!   ↓
//! Plan (mkdir → mv → archive)
//!   ↓
//! Executor (one external command per operation)
//!   ↓
//! ExecutionReport
//! ```

use crate::core::config::PackageConfig;
use crate::core::error::PackageResult;
use crate::release::{ArchiveFormat, versioned_name};
use crate::utils::{path_to_arg, quote_arg};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::path::PathBuf;

/// Plan identifier (SHA256 hash of the operations)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanId(String);

impl PlanId {
  /// Create a plan ID from plan contents
  pub fn from_contents(contents: &[u8]) -> Self {
    let mut hasher = Sha256::new();
    hasher.update(contents);
    let result = hasher.finalize();
    Self(format!("{:x}", result))
  }

  /// Get the short ID (first 12 characters)
  pub fn short(&self) -> &str {
    &self.0[..12.min(self.0.len())]
  }
}

impl fmt::Display for PlanId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.short())
  }
}

/// A single step of the release sequence
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Operation {
  /// Create a directory (and parents), succeeding if it exists
  CreateDir { path: String },

  /// Rename a directory
  Move { from: String, to: String },

  /// Recursively archive a directory
  Archive {
    format: ArchiveFormat,
    source: String,
    archive: String,
  },
}

impl Operation {
  /// External command that performs this operation
  pub fn to_command(&self) -> CommandSpec {
    match self {
      Operation::CreateDir { path } => CommandSpec::new("mkdir", vec!["-p".to_string(), path.clone()]),
      Operation::Move { from, to } => CommandSpec::new("mv", vec![from.clone(), to.clone()]),
      Operation::Archive {
        format,
        source,
        archive,
      } => CommandSpec::new(format.program(), format.args(archive, source)),
    }
  }

  /// Short label for progress output
  pub fn label(&self) -> &'static str {
    match self {
      Operation::CreateDir { .. } => "mkdir",
      Operation::Move { .. } => "rename",
      Operation::Archive { .. } => "archive",
    }
  }
}

impl fmt::Display for Operation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Operation::CreateDir { path } => write!(f, "Create release directory {}", path),
      Operation::Move { from, to } => write!(f, "Rename {} → {}", from, to),
      Operation::Archive {
        format,
        source,
        archive,
      } => write!(f, "Archive {} into {} ({})", source, archive, format),
    }
  }
}

/// A program plus its arguments, run without a shell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
  pub program: String,
  pub args: Vec<String>,
}

impl CommandSpec {
  pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
    Self {
      program: program.into(),
      args,
    }
  }
}

impl fmt::Display for CommandSpec {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", quote_arg(&self.program))?;
    for arg in &self.args {
      write!(f, " {}", quote_arg(arg))?;
    }
    Ok(())
  }
}

/// Plan metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanMetadata {
  /// Plan ID (content hash)
  pub id: PlanId,

  /// Release version as given on the command line
  pub version: String,

  /// Versioned distribution name
  pub versioned_name: String,

  /// Archive the plan produces
  pub archive: PathBuf,
}

/// The full release sequence for one version
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
  /// Plan metadata
  pub metadata: PlanMetadata,

  /// Operations to perform (in order)
  pub operations: Vec<Operation>,
}

impl Plan {
  /// Build the release plan for `version`
  pub fn for_release(config: &PackageConfig, version: &str) -> Self {
    Self::with_format(config, version, config.archive)
  }

  /// Build the release plan with an explicit archive format
  pub fn with_format(config: &PackageConfig, version: &str, format: ArchiveFormat) -> Self {
    let name = versioned_name(&config.prefix, version);
    let archive = format.archive_path(&config.release_dir, &name);

    let operations = vec![
      Operation::CreateDir {
        path: path_to_arg(&config.release_dir),
      },
      Operation::Move {
        from: path_to_arg(&config.dist_dir),
        to: name.clone(),
      },
      Operation::Archive {
        format,
        source: name.clone(),
        archive: path_to_arg(&archive),
      },
    ];

    let id = compute_id(&operations);

    Self {
      metadata: PlanMetadata {
        id,
        version: version.to_string(),
        versioned_name: name,
        archive,
      },
      operations,
    }
  }

  /// Serialize to JSON
  pub fn to_json(&self) -> PackageResult<String> {
    Ok(serde_json::to_string_pretty(self)?)
  }

  /// Get human-readable representation
  pub fn to_human_readable(&self) -> String {
    let mut output = String::new();

    output.push_str(&format!(
      "📋 Plan: package {} ({})\n",
      self.metadata.version, self.metadata.id
    ));
    output.push_str(&format!("   Name:    {}\n", self.metadata.versioned_name));
    output.push_str(&format!("   Archive: {}\n", path_to_arg(&self.metadata.archive)));

    output.push_str(&format!("\n   Operations ({}):\n", self.operations.len()));

    for (i, op) in self.operations.iter().enumerate() {
      output.push_str(&format!("   {}. {}\n", i + 1, op));
      output.push_str(&format!("      $ {}\n", op.to_command()));
    }

    output
  }

  /// Get number of operations
  pub fn len(&self) -> usize {
    self.operations.len()
  }
}

fn compute_id(operations: &[Operation]) -> PlanId {
  let json = serde_json::to_vec(operations).unwrap_or_default();
  PlanId::from_contents(&json)
}
