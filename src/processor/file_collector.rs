//! # File Collector Module
//!
//! This module walks the source path and yields the files that should receive
//! a license header, together with the ones skipped by an exclude pattern.

use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use crate::exclude::ExcludeSet;

/// A file found by the walker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
  /// The file should be processed
  Process(PathBuf),
  /// The file matched an exclude pattern
  Excluded(PathBuf),
}

impl Candidate {
  /// Path of the candidate file.
  pub fn path(&self) -> &Path {
    match self {
      Candidate::Process(path) | Candidate::Excluded(path) => path,
    }
  }
}

/// File collector for extension filtering, exclusion and directory traversal.
///
/// The `FileCollector` handles:
/// - Single-file sources (exclusion only, no extension filter)
/// - Recursive directory traversal in lexical order
/// - Extension suffix filtering and exclude matching per file
pub struct FileCollector {
  /// Required file name suffix in directory mode
  extension: Option<String>,
  /// Compiled exclude patterns
  excludes: ExcludeSet,
}

impl FileCollector {
  /// Creates a new FileCollector.
  ///
  /// # Parameters
  ///
  /// * `extension` - File name suffix every processed file must end with (directory mode only)
  /// * `excludes` - Compiled exclude patterns
  pub const fn new(extension: Option<String>, excludes: ExcludeSet) -> Self {
    Self { extension, excludes }
  }

  /// Walks `source` and hands every candidate to `visit`, in order.
  ///
  /// A regular file is checked against the exclude patterns only. A directory
  /// is traversed recursively; files whose name does not end with the
  /// extension are skipped silently, files matching an exclude pattern are
  /// reported as [`Candidate::Excluded`].
  ///
  /// Traversal stops at the first error, whether it comes from the walk
  /// itself or from `visit`.
  ///
  /// # Errors
  ///
  /// Returns an error if:
  /// - The source is a directory and no non-empty extension was configured
  /// - The source does not exist or a directory cannot be read
  /// - `visit` returns an error
  pub fn walk<F>(&self, source: &Path, mut visit: F) -> Result<()>
  where
    F: FnMut(Candidate) -> Result<()>,
  {
    let metadata = match std::fs::metadata(source) {
      Ok(metadata) => metadata,
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => bail!("Source not found: {}", source.display()),
      Err(e) => return Err(e).with_context(|| format!("Failed to access source: {}", source.display())),
    };

    if !metadata.is_dir() {
      debug!("Processing single file: {}", source.display());
      return visit(self.classify(source.to_path_buf()));
    }

    let extension = match self.extension.as_deref() {
      Some(ext) if !ext.is_empty() => ext,
      _ => bail!(
        "An extension is required when the source is a directory: {}",
        source.display()
      ),
    };

    debug!("Scanning directory: {} (extension: {})", source.display(), extension);
    let start_time = std::time::Instant::now();
    let mut seen = 0usize;

    for entry in WalkDir::new(source).sort_by_file_name() {
      let entry = entry.with_context(|| format!("Failed to walk {}", source.display()))?;
      if !is_regular_file(&entry) {
        continue;
      }

      if !entry.file_name().to_string_lossy().ends_with(extension) {
        trace!("Skipping: {} (extension mismatch)", entry.path().display());
        continue;
      }

      seen += 1;
      visit(self.classify(normalize_path(entry.path())))?;
    }

    debug!(
      "Visited {} matching files in {}ms",
      seen,
      start_time.elapsed().as_millis()
    );

    Ok(())
  }

  fn classify(&self, path: PathBuf) -> Candidate {
    if self.excludes.is_excluded(&path) {
      Candidate::Excluded(path)
    } else {
      Candidate::Process(path)
    }
  }
}

/// Whether the entry is a regular file, or a symlink that resolves to one.
///
/// Symlinks are not descended into, but a link to a file is processed and the
/// write lands on its target.
fn is_regular_file(entry: &DirEntry) -> bool {
  if entry.file_type().is_file() {
    return true;
  }
  entry.path_is_symlink() && std::fs::metadata(entry.path()).is_ok_and(|m| m.is_file())
}

/// Lexically cleans a path.
///
/// Drops `.` components and resolves `..` against a preceding normal
/// component. A path that cleans to nothing becomes `.`. Only components are
/// touched, so names that are not valid UTF-8 survive unchanged.
///
/// # Examples
/// - `./src/main.go` -> `src/main.go`
/// - `a/b/../c.go` -> `a/c.go`
/// - `../other/x.go` -> `../other/x.go` (can't resolve, keeps as-is)
fn normalize_path(path: &Path) -> PathBuf {
  let mut cleaned = PathBuf::new();

  for component in path.components() {
    match component {
      Component::CurDir => {}
      Component::ParentDir => match cleaned.components().next_back() {
        Some(Component::Normal(_)) => {
          cleaned.pop();
        }
        Some(Component::RootDir | Component::Prefix(_)) => {}
        _ => cleaned.push(component),
      },
      _ => cleaned.push(component),
    }
  }

  if cleaned.as_os_str().is_empty() {
    cleaned.push(".");
  }
  cleaned
}
