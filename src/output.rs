//! # Output Module
//!
//! This module centralizes all user-facing output for the add-license tool.
//! It provides consistent formatting, colors, and symbols for terminal output.
//!
//! - More detail with `-v` (all files, timing), silence with `-q`
//! - In quiet mode, file lists degrade to bare paths for scripting

use add_license::logging::{is_quiet, is_verbose};
use add_license::report::{FileAction, FileReport, ProcessingSummary};
use owo_colors::{OwoColorize, Stream};

/// Symbols used in output
pub mod symbols {
  /// Success/has license
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Missing license/failure
  pub const FAILURE: &str = "\u{2717}"; // ✗
}

/// Maximum number of files to show in the default output before truncating
const DEFAULT_FILE_LIST_LIMIT: usize = 20;

/// Print a blank line for visual separation (respects quiet mode).
pub fn print_blank_line() {
  if !is_quiet() {
    println!();
  }
}

/// Print the list of files missing license headers (check mode).
///
/// Files are sorted alphabetically by path. In quiet mode only the bare
/// paths are printed.
pub fn print_missing_files(files: &[&FileReport]) {
  if files.is_empty() {
    return;
  }

  let mut sorted_files: Vec<_> = files.to_vec();
  sorted_files.sort_by(|a, b| a.path.cmp(&b.path));

  if is_quiet() {
    for file in &sorted_files {
      println!("{}", file.path.display());
    }
    return;
  }

  let header = format!(
    "{} {} missing license headers:",
    symbols::FAILURE.if_supports_color(Stream::Stdout, |s| s.red()),
    files_phrase(sorted_files.len())
  );
  print_file_list(&header, &sorted_files);
}

/// Print the list of files that had licenses added.
pub fn print_added_files(files: &[&FileReport]) {
  if is_quiet() || files.is_empty() {
    return;
  }

  let header = format!(
    "{} Added license to {}:",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    files_phrase(files.len())
  );
  print_file_list(&header, files);
}

/// Print the success message when all files have license headers.
pub fn print_all_files_ok() {
  if is_quiet() {
    return;
  }

  println!(
    "{} All files have license headers.",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green())
  );
}

/// Print the processing summary.
///
/// Modify mode: "Summary: X added, Y already licensed, Z excluded".
/// Check mode: "Summary: X OK, Y missing, Z excluded".
/// In verbose mode, also shows how many files were checked and the timing.
pub fn print_summary(summary: &ProcessingSummary, check_only: bool) {
  if is_quiet() {
    return;
  }

  let excluded_str = summary.excluded.if_supports_color(Stream::Stdout, |s| s.dimmed());

  let mut summary_line = if check_only {
    let missing_str = if summary.missing > 0 {
      summary.missing.if_supports_color(Stream::Stdout, |s| s.red()).to_string()
    } else {
      summary.missing.if_supports_color(Stream::Stdout, |s| s.cyan()).to_string()
    };
    format!(
      "Summary: {} OK, {} missing, {} excluded",
      summary.already_licensed.if_supports_color(Stream::Stdout, |s| s.cyan()),
      missing_str,
      excluded_str
    )
  } else {
    format!(
      "Summary: {} added, {} already licensed, {} excluded",
      summary.added.if_supports_color(Stream::Stdout, |s| s.green()),
      summary.already_licensed.if_supports_color(Stream::Stdout, |s| s.cyan()),
      excluded_str
    )
  };

  if is_verbose() {
    summary_line.push_str(&format!(
      " ({} checked in {:.2}s)",
      files_phrase(summary.checked()),
      summary.elapsed.as_secs_f64()
    ));
  }

  println!("{summary_line}");
}

/// Print a hint for the user about what to do next.
pub fn print_hint(message: &str) {
  if is_quiet() {
    return;
  }

  println!("{}", message.if_supports_color(Stream::Stdout, |s| s.yellow()));
}

/// File reports split by outcome for output.
pub struct CategorizedReports<'a> {
  pub added: Vec<&'a FileReport>,
  pub missing: Vec<&'a FileReport>,
}

impl<'a> CategorizedReports<'a> {
  /// Categorize a slice of file reports.
  pub fn from_reports(reports: &'a [FileReport]) -> Self {
    let mut added = Vec::new();
    let mut missing = Vec::new();

    for report in reports {
      match report.action {
        FileAction::Added => added.push(report),
        FileAction::Missing => missing.push(report),
        FileAction::AlreadyLicensed | FileAction::Excluded => {}
      }
    }

    Self { added, missing }
  }
}

fn files_phrase(count: usize) -> String {
  format!("{} {}", count, if count == 1 { "file" } else { "files" })
}

fn print_file_list(header: &str, files: &[&FileReport]) {
  println!("{header}");

  let count = files.len();
  let show_all = is_verbose();
  let limit = if show_all { count } else { DEFAULT_FILE_LIST_LIMIT };

  for file in files.iter().take(limit) {
    println!("  {}", file.path.display());
  }

  if !show_all && count > limit {
    println!(
      "  {} more (use -v to see all)",
      format!("... and {}", count - limit).if_supports_color(Stream::Stdout, |s| s.dimmed())
    );
  }
}
