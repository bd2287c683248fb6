//! # add-license
//!
//! A tool that walks a file tree (or a single file) and prepends a license
//! header to every file with a given extension, unless the file already
//! carries it.
//!
//! `add-license` modifies source files in place. A file is left untouched when
//! the formatted header already appears anywhere in it, so running the tool
//! twice changes nothing the second time.
//!
//! ## Features
//!
//! * Recursively scan a directory and add license headers to matching files
//! * Process a single file regardless of its extension
//! * Exclude paths with shell-style glob patterns
//! * Keep a `// Code generated` marker line above the injected header
//! * Check-only mode that reports missing headers without writing
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use add_license::processor::{Processor, ProcessorConfig};
//! use add_license::templates::LicenseTemplate;
//!
//! fn main() -> anyhow::Result<()> {
//!     let template = LicenseTemplate::load(Path::new("LICENSE_HEADER.txt"))?;
//!
//!     let processor = Processor::new(ProcessorConfig {
//!         extension: Some(".go".to_string()),
//!         exclude_patterns: vec!["vendor/*".to_string()],
//!         ..ProcessorConfig::new(template)
//!     })?;
//!
//!     let reports = processor.process(Path::new("."))?;
//!     println!("Visited {} files", reports.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`processor`] - Walking the source and injecting headers
//! * [`templates`] - Loading license text and wrapping it into a header
//! * [`exclude`] - Compiling and matching exclude patterns
//! * [`logging`] - Logging utilities for verbose output
//!
//! [`processor`]: crate::processor
//! [`templates`]: crate::templates
//! [`exclude`]: crate::exclude
//! [`logging`]: crate::logging

pub mod config;
pub mod diff;
pub mod exclude;
pub mod logging;
pub mod processor;
pub mod report;
pub mod templates;
