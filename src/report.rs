//! # Report Module
//!
//! Per-file outcome records and the end-of-run summary built from them.

use std::path::PathBuf;
use std::time::Duration;

/// Information about a processed file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
  /// Path to the file
  pub path: PathBuf,
  /// What happened to the file
  pub action: FileAction,
}

impl FileReport {
  pub fn new(path: impl Into<PathBuf>, action: FileAction) -> Self {
    Self {
      path: path.into(),
      action,
    }
  }
}

/// Possible outcomes for a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
  /// License header was added to the file
  Added,
  /// The file already contained the header
  AlreadyLicensed,
  /// The header is missing (check mode only, nothing was written)
  Missing,
  /// The file matched an exclude pattern
  Excluded,
}

/// Summary counts for a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessingSummary {
  pub added: usize,
  pub already_licensed: usize,
  pub missing: usize,
  pub excluded: usize,
  pub elapsed: Duration,
}

impl ProcessingSummary {
  /// Tallies the given reports.
  pub fn from_reports(reports: &[FileReport], elapsed: Duration) -> Self {
    let mut summary = Self {
      elapsed,
      ..Self::default()
    };

    for report in reports {
      match report.action {
        FileAction::Added => summary.added += 1,
        FileAction::AlreadyLicensed => summary.already_licensed += 1,
        FileAction::Missing => summary.missing += 1,
        FileAction::Excluded => summary.excluded += 1,
      }
    }

    summary
  }

  /// Number of files that were looked at (everything but excluded ones).
  pub const fn checked(&self) -> usize {
    self.added + self.already_licensed + self.missing
  }
}
