mod commands;
mod core;
mod release;
mod ui;
mod utils;

use clap::{CommandFactory, Parser};
use clap::error::ErrorKind;
use crate::commands::PackageOptions;
use crate::core::error::{ExitCode, PackageError, PackageResult, print_error};
use crate::release::ArchiveFormat;
use std::path::PathBuf;

/// Printed for every invocation without exactly one version argument
const USAGE: &str = "Usage: package vx.y.z";

/// Rename the build output to a versioned name and archive it for release
#[derive(Parser)]
#[command(name = "package")]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
struct Cli {
  /// Release version, e.g. 1.2.3 (dots become underscores in the name)
  #[arg(value_name = "VERSION")]
  release_version: Vec<String>,

  /// Show the plan without running any command
  #[arg(long)]
  dry_run: bool,

  /// Output the plan (or the run report) as JSON
  #[arg(long)]
  json: bool,

  /// Archive format (overrides package.toml)
  #[arg(long, value_enum)]
  archive: Option<ArchiveFormat>,

  /// Write a SHA-256 sidecar next to the archive
  #[arg(long)]
  checksum: bool,

  /// Directory the commands run in (default: current directory)
  #[arg(long, value_name = "DIR")]
  root: Option<PathBuf>,

  /// Config file (default: package.toml, .package.toml or ci/package.toml in the root)
  #[arg(long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Enable debug logging
  #[arg(long)]
  debug: bool,
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn initialize_logger(debug: bool) -> PackageResult<()> {
  let filter = if debug {
    simplelog::LevelFilter::Debug
  } else {
    simplelog::LevelFilter::Info
  };

  let config = simplelog::ConfigBuilder::new()
    .add_filter_allow_str(env!("CARGO_CRATE_NAME"))
    .build();

  // stdout is reserved for command output and JSON
  simplelog::TermLogger::init(
    filter,
    config,
    simplelog::TerminalMode::Stderr,
    simplelog::ColorChoice::Auto,
  )?;

  Ok(())
}

fn main() {
  let cli = match Cli::try_parse_from(split_positionals(
    std::env::args_os().map(|a| a.to_string_lossy().into_owned()).collect(),
  )) {
    Ok(cli) => cli,
    Err(err) => match err.kind() {
      ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
      _ => usage_exit(),
    },
  };

  if let Err(err) = initialize_logger(cli.debug) {
    handle_error(err);
  }

  let [version] = <[String; 1]>::try_from(cli.release_version).unwrap_or_else(|_| usage_exit());

  let root = match cli.root {
    Some(root) => root,
    None => match std::env::current_dir() {
      Ok(dir) => dir,
      Err(e) => handle_error(PackageError::message(format!(
        "Failed to get current directory: {}",
        e
      ))),
    },
  };

  let result = commands::run_package(PackageOptions {
    version,
    root,
    config: cli.config,
    archive: cli.archive,
    dry_run: cli.dry_run,
    json: cli.json,
    checksum: cli.checksum,
  });

  if let Err(err) = result {
    handle_error(err);
  }
}

/// Move every argument that is not a known option behind a `--`.
///
/// The version is free-form, so `-1.0` or `-rc` must reach the positional
/// instead of being rejected as an unknown flag. Options keep working on
/// either side of the version, and their values stay attached.
fn split_positionals(args: Vec<String>) -> Vec<String> {
  let mut cmd = Cli::command();
  cmd.build();

  let mut args = args.into_iter();
  let mut options: Vec<String> = args.next().into_iter().collect();
  let mut positionals = Vec::new();

  while let Some(arg) = args.next() {
    if arg == "--" {
      positionals.extend(args.by_ref());
      break;
    }

    match option_takes_value(&cmd, &arg) {
      Some(takes_value) => {
        let inline = arg.contains('=');
        options.push(arg);
        if takes_value && !inline && let Some(value) = args.next() {
          options.push(value);
        }
      }
      None => positionals.push(arg),
    }
  }

  options.push("--".to_string());
  options.extend(positionals);
  options
}

/// `Some(takes_value)` when `arg` names an option of `cmd`
fn option_takes_value(cmd: &clap::Command, arg: &str) -> Option<bool> {
  let found = if let Some(long) = arg.strip_prefix("--") {
    let name = long.split_once('=').map_or(long, |(name, _)| name);
    cmd.get_arguments().find(|a| a.get_long() == Some(name))
  } else if let Some(short) = arg.strip_prefix('-') {
    let mut chars = short.chars();
    match (chars.next(), chars.next()) {
      (Some(c), None) => cmd.get_arguments().find(|a| a.get_short() == Some(c)),
      _ => None,
    }
  } else {
    None
  };

  found.map(|a| a.get_action().takes_values())
}

/// Invalid invocation: usage on stdout, nothing touched
fn usage_exit() -> ! {
  println!("{}", USAGE);
  std::process::exit(ExitCode::User.as_i32());
}

fn handle_error(err: PackageError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
