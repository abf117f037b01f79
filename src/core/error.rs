//! Error types for the release packager with contextual messages and exit codes
//!
//! Every error maps to an exit code, and most carry a suggestion that is
//! printed below the error itself.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for the packager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (invalid invocation, bad config)
  User = 1,
  /// System error (external command, I/O)
  System = 2,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for the packager
#[derive(Debug)]
pub enum PackageError {
  /// Configuration errors
  Config(ConfigError),

  /// External command errors
  Command(CommandError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl PackageError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    PackageError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      PackageError::Message { message, context, help } => PackageError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      PackageError::Io(err) => PackageError::Message {
        message: ctx_str,
        context: Some(format!("I/O error: {}", err)),
        help: None,
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      PackageError::Config(_) => ExitCode::User,
      PackageError::Command(_) => ExitCode::System,
      PackageError::Io(_) => ExitCode::System,
      PackageError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      PackageError::Config(e) => e.help_message(),
      PackageError::Command(e) => e.help_message(),
      PackageError::Message { help, .. } => help.clone(),
      PackageError::Io(_) => None,
    }
  }
}

impl fmt::Display for PackageError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PackageError::Config(e) => write!(f, "{}", e),
      PackageError::Command(e) => write!(f, "{}", e),
      PackageError::Io(e) => write!(f, "I/O error: {}", e),
      PackageError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for PackageError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      PackageError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for PackageError {
  fn from(err: io::Error) -> Self {
    PackageError::Io(err)
  }
}

impl From<ConfigError> for PackageError {
  fn from(err: ConfigError) -> Self {
    PackageError::Config(err)
  }
}

impl From<CommandError> for PackageError {
  fn from(err: CommandError) -> Self {
    PackageError::Command(err)
  }
}

impl From<serde_json::Error> for PackageError {
  fn from(err: serde_json::Error) -> Self {
    PackageError::message(format!("JSON error: {}", err))
  }
}

impl From<log::SetLoggerError> for PackageError {
  fn from(err: log::SetLoggerError) -> Self {
    PackageError::message(format!("Failed to initialize logger: {}", err))
  }
}

/// Configuration-related errors
#[derive(Debug)]
pub enum ConfigError {
  /// Explicitly requested config file does not exist
  NotFound { path: PathBuf },

  /// Config file could not be parsed
  Invalid { path: PathBuf, reason: String },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::NotFound { .. } => {
        Some("Omit --config to use the defaults, or create package.toml in the working root.".to_string())
      }
      ConfigError::Invalid { .. } => Some(
        "Allowed keys: prefix, dist_dir, release_dir, archive (\"zip\" or \"tar-gz\").".to_string(),
      ),
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::NotFound { path } => {
        write!(f, "Config file not found: {}", path.display())
      }
      ConfigError::Invalid { path, reason } => {
        write!(f, "Invalid config file {}:\n{}", path.display(), reason)
      }
    }
  }
}

/// External command errors
#[derive(Debug)]
pub enum CommandError {
  /// Command could not be started at all
  SpawnFailed { program: String, reason: String },

  /// Command ran and exited unsuccessfully
  Failed {
    command: String,
    code: Option<i32>,
    stderr: String,
  },
}

impl CommandError {
  fn help_message(&self) -> Option<String> {
    match self {
      CommandError::SpawnFailed { program, .. } => {
        Some(format!("Make sure `{}` is installed and on PATH.", program))
      }
      CommandError::Failed { command, .. } if command.starts_with("mv ") => {
        Some("The build output directory (dist by default) must exist. Run the build first.".to_string())
      }
      CommandError::Failed { .. } => None,
    }
  }
}

impl fmt::Display for CommandError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      CommandError::SpawnFailed { program, reason } => {
        write!(f, "Failed to execute {}: {}", program, reason)
      }
      CommandError::Failed { command, code, stderr } => {
        match code {
          Some(code) => write!(f, "Command failed with exit code {}: {}", code, command)?,
          None => write!(f, "Command terminated by signal: {}", command)?,
        }
        let stderr = stderr.trim();
        if !stderr.is_empty() {
          write!(f, "\n{}", stderr)?;
        }
        Ok(())
      }
    }
  }
}

/// Result type alias for the packager
pub type PackageResult<T> = Result<T, PackageError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> PackageResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<PackageError>,
{
  fn with_context<F>(self, f: F) -> PackageResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &PackageError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
