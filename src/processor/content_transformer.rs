//! # Content Transformer Module
//!
//! This module decides whether file content already carries the license
//! header and, if not, produces the content with the header inserted.

use std::borrow::Cow;

/// First-line prefix that marks a file as tool-generated.
///
/// Generated files keep this line on top; the header goes right after it.
pub const GENERATED_MARKER: &str = "// Code generated";

/// Inserts a pre-formatted license header into file content.
///
/// The `ContentTransformer` handles:
/// - Detecting an existing header (exact substring match)
/// - Keeping a generated-code marker line ahead of the header
pub struct ContentTransformer {
  /// The formatted header block, without trailing newline
  header: String,
}

impl ContentTransformer {
  /// Creates a new ContentTransformer for the given formatted header.
  pub const fn new(header: String) -> Self {
    Self { header }
  }

  /// The formatted header this transformer inserts.
  pub fn header(&self) -> &str {
    &self.header
  }

  /// Returns `true` if the header already appears anywhere in the content.
  pub fn has_header(&self, content: &str) -> bool {
    content.contains(&self.header)
  }

  /// Returns `true` if the content starts with the generated-code marker.
  ///
  /// This is a plain prefix check and knows nothing about comment syntax.
  pub fn is_generated(content: &str) -> bool {
    content.starts_with(GENERATED_MARKER)
  }

  /// Inserts the header into the content.
  ///
  /// Returns the content unchanged (borrowed) when the header is already
  /// present. Otherwise the content is split on `\n`, the header lines are
  /// placed before the original lines (after the first line for generated
  /// files) and everything is joined back with `\n`.
  pub fn insert_header<'a>(&self, content: &'a str) -> Cow<'a, str> {
    if self.has_header(content) {
      return Cow::Borrowed(content);
    }

    let mut body = content.split('\n');
    let mut lines: Vec<&str> = Vec::new();

    if Self::is_generated(content)
      && let Some(marker) = body.next()
    {
      lines.push(marker);
    }

    lines.extend(self.header.split('\n'));
    lines.extend(body);

    Cow::Owned(lines.join("\n"))
  }
}
