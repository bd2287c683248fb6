//! # Processor Module
//!
//! This module contains the core functionality for walking a source path and
//! injecting the license header into every matching file.
//!
//! The module is organized into several submodules:
//! - [`file_io`] - Whole-file reading and writing
//! - [`content_transformer`] - Header detection and insertion
//! - [`file_collector`] - Extension filtering, exclusion and directory traversal
//!
//! The [`Processor`] struct is the main entry point, orchestrating the
//! submodules. Processing is strictly sequential and stops at the first error.

mod content_transformer;
mod file_collector;
mod file_io;

use std::borrow::Cow;
use std::path::Path;

use anyhow::Result;
use content_transformer::ContentTransformer;
use file_collector::{Candidate, FileCollector};
use file_io::FileIO;
use tracing::{debug, trace};

use crate::diff::DiffManager;
use crate::exclude::ExcludeSet;
use crate::report::{FileAction, FileReport};
use crate::templates::LicenseTemplate;
use crate::verbose_log;

/// Configuration for creating a Processor instance.
pub struct ProcessorConfig {
  pub template: LicenseTemplate,

  /// Required file name suffix in directory mode
  pub extension: Option<String>,

  /// Glob patterns of paths to leave untouched
  pub exclude_patterns: Vec<String>,

  /// Only report missing headers, never write
  pub check_only: bool,

  pub diff_manager: Option<DiffManager>,
}

impl ProcessorConfig {
  /// Creates a new ProcessorConfig with required fields and sensible defaults.
  ///
  /// Use struct update syntax to override specific fields:
  /// ```ignore
  /// ProcessorConfig {
  ///     check_only: true,
  ///     ..ProcessorConfig::new(template)
  /// }
  /// ```
  pub const fn new(template: LicenseTemplate) -> Self {
    Self {
      template,
      extension: None,
      exclude_patterns: vec![],
      check_only: false,
      diff_manager: None,
    }
  }
}

/// Processor for adding license headers to files.
///
/// The `Processor` is responsible for:
/// - Walking a single file or a directory tree
/// - Skipping files by extension and exclude pattern
/// - Detecting an existing header and inserting it otherwise
/// - Showing diffs and collecting per-file reports
///
/// The formatted header and exclude patterns are computed once in
/// [`Processor::new`] and never change afterwards.
pub struct Processor {
  /// Header detection and insertion
  content_transformer: ContentTransformer,

  /// Walker with extension and exclude filtering
  file_collector: FileCollector,

  /// Whether to only check for headers without modifying files
  check_only: bool,

  /// Manager for handling diff creation and rendering
  diff_manager: DiffManager,
}

impl Processor {
  /// Creates a new processor with the specified configuration.
  ///
  /// # Errors
  ///
  /// Returns an error if any exclude pattern is invalid. No processor is
  /// created in that case, so nothing is ever processed with a partial set.
  pub fn new(config: ProcessorConfig) -> Result<Self> {
    let excludes = ExcludeSet::compile(&config.exclude_patterns)?;
    if !excludes.is_empty() {
      debug!("Compiled {} exclude patterns", excludes.len());
    }

    let content_transformer = ContentTransformer::new(config.template.header());
    let file_collector = FileCollector::new(config.extension, excludes);

    Ok(Self {
      content_transformer,
      file_collector,
      check_only: config.check_only,
      diff_manager: config.diff_manager.unwrap_or_default(),
    })
  }

  /// The formatted header block this processor inserts.
  pub fn header(&self) -> &str {
    self.content_transformer.header()
  }

  /// Processes a file or directory.
  ///
  /// Returns one report per visited file, in traversal order. Files skipped
  /// because of their extension are not reported.
  ///
  /// # Errors
  ///
  /// Returns the first error encountered: traversal failure, unreadable or
  /// non-UTF-8 file, or failed write. Files handled before the error keep
  /// their changes.
  pub fn process(&self, source: &Path) -> Result<Vec<FileReport>> {
    let mut reports = Vec::new();

    self.file_collector.walk(source, |candidate| {
      let action = match &candidate {
        Candidate::Process(path) => self.process_file(path)?,
        Candidate::Excluded(_) => FileAction::Excluded,
      };
      reports.push(FileReport::new(candidate.path(), action));
      Ok(())
    })?;

    Ok(reports)
  }

  /// Adds the header to a single file if it is missing.
  ///
  /// Extension and exclude filtering are not applied here.
  pub fn process_file(&self, path: &Path) -> Result<FileAction> {
    let content = FileIO::read_full_content(path)?;
    let updated = self.content_transformer.insert_header(&content);

    if matches!(updated, Cow::Borrowed(_)) {
      trace!("Header already present: {}", path.display());
      return Ok(FileAction::AlreadyLicensed);
    }

    self.diff_manager.display_diff(path, &content, &updated)?;

    if self.check_only {
      debug!("Missing header: {}", path.display());
      return Ok(FileAction::Missing);
    }

    FileIO::write_file(path, &updated)?;
    verbose_log!("Added license to: {}", path.display());

    Ok(FileAction::Added)
  }
}
