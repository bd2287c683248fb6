//! # Diff Module
//!
//! This module renders the difference between a file's current content and
//! the content it would have after the license header is inserted.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use owo_colors::{OwoColorize, Stream};
use similar::{ChangeTag, TextDiff};

/// Manages diff creation and rendering for license header changes.
///
/// This struct handles:
/// - Generating line diffs between original and modified content
/// - Displaying diffs to stderr with colorization
/// - Appending diffs to a file
#[derive(Debug, Default)]
pub struct DiffManager {
  /// Whether to print diffs to stderr
  pub show_diff: bool,

  /// Path to append diffs to
  pub save_diff_path: Option<PathBuf>,
}

impl DiffManager {
  /// Creates a new DiffManager.
  pub const fn new(show_diff: bool, save_diff_path: Option<PathBuf>) -> Self {
    Self {
      show_diff,
      save_diff_path,
    }
  }

  /// Whether any diff output was requested.
  pub const fn is_enabled(&self) -> bool {
    self.show_diff || self.save_diff_path.is_some()
  }

  /// Truncates the diff file so a run starts from an empty file.
  pub fn init(&self) -> Result<()> {
    if let Some(ref diff_path) = self.save_diff_path {
      std::fs::write(diff_path, "").with_context(|| format!("Failed to create diff file: {}", diff_path.display()))?;
    }
    Ok(())
  }

  /// Renders the diff for one file as plain text.
  pub fn render(path: &Path, original: &str, new: &str) -> String {
    let diff = TextDiff::from_lines(original, new);
    let mut diff_content = format!("Diff for {}:\n", path.display());

    for change in diff.iter_all_changes() {
      let sign = match change.tag() {
        ChangeTag::Delete => "-",
        ChangeTag::Insert => "+",
        ChangeTag::Equal => " ",
      };
      diff_content.push_str(sign);
      diff_content.push_str(change.value());
      if change.missing_newline() {
        diff_content.push('\n');
      }
    }

    diff_content
  }

  /// Displays and/or saves the diff between the original and new content.
  ///
  /// Diffs from several files are appended to the same diff file.
  pub fn display_diff(&self, path: &Path, original: &str, new: &str) -> Result<()> {
    if !self.is_enabled() {
      return Ok(());
    }

    let diff_content = Self::render(path, original, new);

    if self.show_diff {
      for line in diff_content.lines() {
        if line.starts_with('+') {
          eprintln!("{}", line.if_supports_color(Stream::Stderr, |l| l.green()));
        } else if line.starts_with('-') {
          eprintln!("{}", line.if_supports_color(Stream::Stderr, |l| l.red()));
        } else {
          eprintln!("{line}");
        }
      }
      eprintln!();
    }

    if let Some(ref diff_path) = self.save_diff_path {
      let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(diff_path)
        .with_context(|| format!("Failed to open diff file: {}", diff_path.display()))?;
      writeln!(file, "{diff_content}").with_context(|| format!("Failed to write diff file: {}", diff_path.display()))?;
    }

    Ok(())
  }
}
