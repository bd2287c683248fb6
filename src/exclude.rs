//! # Exclude Module
//!
//! This module compiles the `--exclude` glob patterns into matchers and decides
//! whether a path is excluded from processing.
//!
//! Patterns are shell-style wildcards matched against the whole path string as
//! the walker produces it: the source path joined with the entry's relative
//! path, with `.` segments cleaned away.
//! A `*` may also match across `/`, so `*_test.go` excludes test files at any
//! depth.
//!
//! ## Example
//!
//! ```rust
//! use std::path::Path;
//!
//! use add_license::exclude::ExcludeSet;
//!
//! # fn main() -> anyhow::Result<()> {
//! let excludes = ExcludeSet::compile(&["vendor/*".to_string(), "*.pb.go".to_string()])?;
//!
//! assert!(excludes.is_excluded(Path::new("vendor/lib.go")));
//! assert!(excludes.is_excluded(Path::new("api/service.pb.go")));
//! assert!(!excludes.is_excluded(Path::new("cmd/main.go")));
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use glob::{MatchOptions, Pattern};
use tracing::trace;

/// Error returned when an exclusion pattern cannot be compiled.
#[derive(Debug, thiserror::Error)]
pub enum ExcludeError {
  /// The pattern is not a valid glob.
  #[error("Invalid exclude pattern '{pattern}': {source}")]
  InvalidPattern {
    pattern: String,
    source: glob::PatternError,
  },
}

/// Options used for every match. Wildcards are allowed to cross path
/// separators and a leading `.` needs no literal match.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
  case_sensitive: true,
  require_literal_separator: false,
  require_literal_leading_dot: false,
};

/// An ordered set of compiled exclusion patterns.
///
/// A path is excluded when it matches any pattern in the set. An empty set
/// excludes nothing.
#[derive(Debug, Clone, Default)]
pub struct ExcludeSet {
  patterns: Vec<Pattern>,
}

impl ExcludeSet {
  /// Compiles every pattern, failing on the first invalid one.
  ///
  /// No partial set is ever returned: either all patterns compile or the
  /// whole call fails.
  ///
  /// # Errors
  ///
  /// Returns [`ExcludeError::InvalidPattern`] naming the offending pattern.
  pub fn compile(patterns: &[String]) -> Result<Self, ExcludeError> {
    let patterns = patterns
      .iter()
      .map(|pattern| {
        Pattern::new(pattern).map_err(|source| ExcludeError::InvalidPattern {
          pattern: pattern.clone(),
          source,
        })
      })
      .collect::<Result<Vec<_>, _>>()?;

    Ok(Self { patterns })
  }

  /// Returns `true` if the path matches any pattern in the set.
  pub fn is_excluded(&self, path: &Path) -> bool {
    let path_str = path.to_string_lossy();
    let excluded = self
      .patterns
      .iter()
      .any(|pattern| pattern.matches_with(&path_str, MATCH_OPTIONS));

    if excluded {
      trace!("Skipping: {} (matches exclude pattern)", path.display());
    }
    excluded
  }

  /// Number of compiled patterns.
  pub fn len(&self) -> usize {
    self.patterns.len()
  }

  /// Whether the set has no patterns.
  pub fn is_empty(&self) -> bool {
    self.patterns.is_empty()
  }
}
