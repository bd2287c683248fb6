//! # Logging Module
//!
//! This module provides logging utilities for the add-license tool:
//! - Diagnostic logging through `tracing`, initialized by [`init_tracing`]
//! - Verbose logging that can be enabled/disabled
//! - Output mode and color selection shared with the output module
//!
//! Verbose logs and diagnostics go to stderr.
//!
//! ## Example
//!
//! ```rust
//! use add_license::logging::{ColorMode, set_verbose};
//! use add_license::verbose_log;
//!
//! // Enable verbose logging
//! set_verbose();
//!
//! // Set color mode to Auto (uses owo-colors' automatic TTY detection)
//! ColorMode::Auto.apply();
//!
//! // Log a verbose message (goes to stderr)
//! verbose_log!("Processing file: {}", "main.go");
//! ```

mod modes;

pub use modes::{ColorMode, init_tracing, is_quiet, is_verbose, set_quiet, set_verbose};

/// Logs a message to stderr if verbose mode is enabled.
///
/// Uses the same format string syntax as the standard [`eprintln!`] macro.
#[macro_export]
macro_rules! verbose_log {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}
