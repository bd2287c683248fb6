//! # File I/O Module
//!
//! Whole-file reads and writes for the processor. Files are never edited in
//! place piecemeal: they are read fully and rewritten fully.

use std::path::Path;

use anyhow::{Context, Result};

/// File I/O operations for the processor.
pub struct FileIO;

impl FileIO {
  /// Reads the full file content as UTF-8 text.
  pub fn read_full_content(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
  }

  /// Overwrites the file with the given content.
  pub fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
  }
}
