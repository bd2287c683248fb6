//! # Templates Module
//!
//! This module loads the raw license text and wraps it into the block comment
//! that gets injected into source files.
//!
//! The module includes:
//! - [`LicenseTemplate`] for loading license text from a file
//! - [`wrap_license`] for turning raw text into a `/** ... */` header
//!
//! ## Example
//!
//! ```rust
//! use add_license::templates::wrap_license;
//!
//! let header = wrap_license("Copyright 2022\n\nAll rights reserved.");
//! assert_eq!(header, "/**\n * Copyright 2022\n *\n * All rights reserved.\n */");
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::verbose_log;

/// Opening line of the header block.
pub const HEADER_TOP: &str = "/**";
/// Prefix for non-blank license lines.
pub const HEADER_MIDDLE: &str = " * ";
/// Line emitted for blank license lines.
pub const HEADER_BLANK: &str = " *";
/// Closing line of the header block.
pub const HEADER_BOTTOM: &str = " */";

/// Raw license text loaded once per run.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
///
/// use add_license::templates::LicenseTemplate;
///
/// # fn main() -> anyhow::Result<()> {
/// let template = LicenseTemplate::load(Path::new("LICENSE_HEADER.txt"))?;
/// let header = template.header();
/// assert!(header.starts_with("/**"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseTemplate {
  text: String,
}

impl LicenseTemplate {
  /// Creates a template from license text already in memory.
  pub fn new(text: impl Into<String>) -> Self {
    Self { text: text.into() }
  }

  /// Loads the license text from a file.
  ///
  /// # Errors
  ///
  /// Returns an error if:
  /// - The file does not exist
  /// - The file cannot be read
  /// - The file content is not valid UTF-8
  pub fn load(path: &Path) -> Result<Self> {
    verbose_log!("Loading license from: {}", path.display());

    let text =
      fs::read_to_string(path).with_context(|| format!("Failed to read license file: {}", path.display()))?;

    debug!("License text is {} bytes", text.len());

    Ok(Self { text })
  }

  /// The raw license text.
  pub fn text(&self) -> &str {
    &self.text
  }

  /// The license text wrapped into a block-comment header.
  pub fn header(&self) -> String {
    wrap_license(&self.text)
  }
}

/// Wraps raw license text into a `/** ... */` block comment.
///
/// Each line is trimmed of surrounding whitespace. Non-blank lines become
/// `" * <line>"`, blank lines become `" *"`. The result has no trailing
/// newline.
pub fn wrap_license(license: &str) -> String {
  let mut lines = Vec::with_capacity(license.lines().count() + 2);
  lines.push(HEADER_TOP.to_string());

  for line in license.split('\n') {
    let line = line.trim();
    if line.is_empty() {
      lines.push(HEADER_BLANK.to_string());
    } else {
      lines.push(format!("{HEADER_MIDDLE}{line}"));
    }
  }

  lines.push(HEADER_BOTTOM.to_string());
  lines.join("\n")
}
