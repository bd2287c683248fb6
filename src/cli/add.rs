//! # Add Command
//!
//! This module implements the add/check command for license headers.

use std::path::PathBuf;
use std::process;
use std::time::Instant;

use add_license::config::{Config, load_config};
use add_license::diff::DiffManager;
use add_license::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use add_license::processor::{Processor, ProcessorConfig};
use add_license::report::ProcessingSummary;
use add_license::templates::LicenseTemplate;
use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use crate::output::{
  CategorizedReports, print_added_files, print_all_files_ok, print_blank_line, print_hint, print_missing_files,
  print_summary,
};

/// Arguments for adding license headers
#[derive(Args, Debug, Default)]
pub struct AddArgs {
  /// File or directory to process. Directories are processed recursively.
  #[arg(long, value_name = "PATH", default_value = ".")]
  pub source: PathBuf,

  /// Only process files whose name ends with this suffix (e.g. ".go").
  /// Required when the source is a directory; ignored for a single file.
  #[arg(long, value_name = "SUFFIX")]
  pub ext: Option<String>,

  /// File containing the license text to add
  #[arg(long, value_name = "FILE")]
  pub license: Option<PathBuf>,

  /// Glob pattern of paths to leave untouched (repeatable)
  #[arg(long, value_name = "PATTERN")]
  pub exclude: Vec<String>,

  /// Only report files missing the header, without modifying anything
  #[arg(long)]
  pub check: bool,

  /// Print a diff of every change to stderr
  #[arg(long)]
  pub show_diff: bool,

  /// Append a diff of every change to a file
  #[arg(long, value_name = "FILE")]
  pub save_diff: Option<PathBuf>,

  /// Path to config file (default: .addlicense.toml in the current directory)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long)]
  pub no_config: bool,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

/// Command-line values merged with config file defaults and validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArgs {
  pub source: PathBuf,
  pub extension: Option<String>,
  pub license: PathBuf,
  pub exclude: Vec<String>,
}

impl AddArgs {
  /// Merges config defaults under the command-line values and validates the
  /// result.
  ///
  /// `ext` and `license` from the command line win over the config file;
  /// exclude patterns from both are kept, config first.
  pub fn resolve(&self, config: Option<Config>) -> Result<ResolvedArgs, String> {
    let config = config.unwrap_or_default();

    let license = self
      .license
      .clone()
      .or(config.license)
      .ok_or_else(|| "Missing required argument: --license <FILE>".to_string())?;

    let extension = self.ext.clone().or(config.ext);

    let source_is_dir = std::fs::metadata(&self.source).map(|m| m.is_dir()).unwrap_or(false);
    if source_is_dir && extension.as_deref().is_none_or(str::is_empty) {
      return Err(format!(
        "--ext <SUFFIX> must be a non-empty suffix when --source is a directory ({})",
        self.source.display()
      ));
    }

    let mut exclude = config.exclude;
    exclude.extend(self.exclude.iter().cloned());

    Ok(ResolvedArgs {
      source: self.source.clone(),
      extension,
      license,
      exclude,
    })
  }
}

/// Run the add command with the given arguments
pub fn run_add(args: AddArgs) -> Result<()> {
  init_tracing(args.quiet, args.verbose, args.colors);

  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  let current_dir = std::env::current_dir().context("Failed to get current directory")?;
  let config = load_config(args.config.as_deref(), &current_dir, args.no_config)?;

  let resolved = match args.resolve(config) {
    Ok(resolved) => resolved,
    Err(e) => {
      eprintln!("ERROR: {e}");
      process::exit(1);
    }
  };
  debug!("Resolved arguments: {:?}", resolved);

  let template = LicenseTemplate::load(&resolved.license)
    .with_context(|| format!("Failed to load license from {}", resolved.license.display()))?;

  let diff_manager = DiffManager::new(args.show_diff, args.save_diff);
  diff_manager.init()?;

  let processor = Processor::new(ProcessorConfig {
    extension: resolved.extension,
    exclude_patterns: resolved.exclude,
    check_only: args.check,
    diff_manager: Some(diff_manager),
    ..ProcessorConfig::new(template)
  })?;
  debug!("License header:\n{}", processor.header());

  let start_time = Instant::now();
  let file_reports = processor.process(&resolved.source)?;
  let summary = ProcessingSummary::from_reports(&file_reports, start_time.elapsed());
  let categorized = CategorizedReports::from_reports(&file_reports);

  if args.check {
    if categorized.missing.is_empty() {
      print_all_files_ok();
    } else {
      print_missing_files(&categorized.missing);
    }
  } else if categorized.added.is_empty() {
    print_all_files_ok();
  } else {
    print_added_files(&categorized.added);
  }

  print_blank_line();
  print_summary(&summary, args.check);

  if args.check && summary.missing > 0 {
    print_blank_line();
    print_hint("Run without --check to add missing headers.");
    process::exit(1);
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use tempfile::TempDir;

  use super::*;

  fn args(source: PathBuf) -> AddArgs {
    AddArgs {
      source,
      ..AddArgs::default()
    }
  }

  #[test]
  fn test_resolve_requires_license() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let mut args = args(temp_dir.path().to_path_buf());
    args.ext = Some(".go".to_string());

    let err = args.resolve(None).expect_err("license is required");
    assert!(err.contains("--license"));
  }

  #[test]
  fn test_resolve_rejects_empty_ext_for_directory() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let mut args = args(temp_dir.path().to_path_buf());
    args.license = Some(PathBuf::from("HEADER.txt"));

    assert!(args.resolve(None).is_err());

    args.ext = Some(String::new());
    assert!(args.resolve(None).is_err());
  }

  #[test]
  fn test_resolve_single_file_needs_no_ext() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let file = temp_dir.path().join("main.go");
    std::fs::write(&file, "package main\n").expect("write");

    let mut args = args(file.clone());
    args.license = Some(PathBuf::from("HEADER.txt"));

    let resolved = args.resolve(None).expect("single file needs no ext");
    assert_eq!(resolved.source, file);
    assert_eq!(resolved.extension, None);
  }

  #[test]
  fn test_resolve_merges_config() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let mut args = args(temp_dir.path().to_path_buf());
    args.exclude = vec!["*_test.go".to_string()];

    let config = Config {
      ext: Some(".go".to_string()),
      license: Some(PathBuf::from("/etc/HEADER.txt")),
      exclude: vec!["vendor/*".to_string()],
    };

    let resolved = args.resolve(Some(config)).expect("config fills the gaps");
    assert_eq!(resolved.extension.as_deref(), Some(".go"));
    assert_eq!(resolved.license, PathBuf::from("/etc/HEADER.txt"));
    assert_eq!(resolved.exclude, vec!["vendor/*", "*_test.go"]);
  }

  #[test]
  fn test_resolve_cli_overrides_config() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let mut args = args(temp_dir.path().to_path_buf());
    args.ext = Some(".rs".to_string());
    args.license = Some(PathBuf::from("CLI.txt"));

    let config = Config {
      ext: Some(".go".to_string()),
      license: Some(PathBuf::from("CONFIG.txt")),
      exclude: vec![],
    };

    let resolved = args.resolve(Some(config)).expect("resolve");
    assert_eq!(resolved.extension.as_deref(), Some(".rs"));
    assert_eq!(resolved.license, PathBuf::from("CLI.txt"));
  }
}
