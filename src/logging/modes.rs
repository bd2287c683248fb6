use std::io::IsTerminal;
use std::sync::atomic::{AtomicU8, Ordering};

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

/// Global output mode (normal, quiet or verbose).
///
/// This is initialized to `Normal` by default; see [`set_verbose`] and
/// [`set_quiet`].
static OUTPUT_MODE: AtomicU8 = AtomicU8::new(0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
  Normal = 0,
  Quiet = 1,
  Verbose = 2,
}

impl OutputMode {
  /// Convert from u8 to OutputMode
  const fn from_u8(value: u8) -> Self {
    match value {
      1 => OutputMode::Quiet,
      2 => OutputMode::Verbose,
      _ => OutputMode::Normal,
    }
  }
}

/// Enum representing the color mode options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
  /// Automatically determine whether to use colors based on TTY detection
  #[default]
  Auto,
  /// Never use colors
  Never,
  /// Always use colors
  Always,
}

impl ColorMode {
  /// Applies the mode to all colored output.
  ///
  /// `Auto` leaves the decision to owo-colors' terminal detection.
  pub fn apply(self) {
    match self {
      ColorMode::Auto => owo_colors::unset_override(),
      ColorMode::Never => owo_colors::set_override(false),
      ColorMode::Always => owo_colors::set_override(true),
    }
  }

  /// Whether diagnostics written to stderr should carry ANSI escapes.
  pub fn stderr_ansi(self) -> bool {
    match self {
      ColorMode::Auto => std::io::stderr().is_terminal(),
      ColorMode::Never => false,
      ColorMode::Always => true,
    }
  }
}

/// Sets the global verbose logging flag.
///
/// When verbose logging is enabled, the [`verbose_log!`](crate::verbose_log)
/// macro will output messages to stderr.
pub fn set_verbose() {
  OUTPUT_MODE.store(OutputMode::Verbose as u8, Ordering::SeqCst);
}

/// Suppresses everything but errors.
pub fn set_quiet() {
  OUTPUT_MODE.store(OutputMode::Quiet as u8, Ordering::SeqCst);
}

/// Checks if verbose logging is currently enabled.
pub fn is_verbose() -> bool {
  matches!(OutputMode::from_u8(OUTPUT_MODE.load(Ordering::SeqCst)), OutputMode::Verbose)
}

/// Checks if quiet mode is currently enabled.
pub fn is_quiet() -> bool {
  matches!(OutputMode::from_u8(OUTPUT_MODE.load(Ordering::SeqCst)), OutputMode::Quiet)
}

/// Maps the CLI verbosity flags to a tracing level directive.
///
/// `RUST_LOG`, when set, wins over this.
const fn level_directive(quiet: bool, verbose: u8) -> &'static str {
  if quiet {
    return "error";
  }
  match verbose {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace",
  }
}

/// Initializes the tracing subscriber, writing diagnostics to stderr.
///
/// ANSI styling follows `colors`. Calling this more than once is harmless;
/// later calls are ignored.
pub fn init_tracing(quiet: bool, verbose: u8, colors: ColorMode) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
    EnvFilter::new(format!("add_license={}", level_directive(quiet, verbose)))
  });

  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .with_ansi(colors.stderr_ansi())
    .without_time()
    .try_init();
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_level_directive() {
    assert_eq!(level_directive(true, 3), "error");
    assert_eq!(level_directive(false, 0), "warn");
    assert_eq!(level_directive(false, 1), "info");
    assert_eq!(level_directive(false, 2), "debug");
    assert_eq!(level_directive(false, 9), "trace");
  }

  #[test]
  fn test_stderr_ansi_follows_explicit_mode() {
    assert!(!ColorMode::Never.stderr_ansi());
    assert!(ColorMode::Always.stderr_ansi());
  }

  #[test]
  fn test_output_mode_from_u8() {
    assert_eq!(OutputMode::from_u8(0), OutputMode::Normal);
    assert_eq!(OutputMode::from_u8(1), OutputMode::Quiet);
    assert_eq!(OutputMode::from_u8(2), OutputMode::Verbose);
    assert_eq!(OutputMode::from_u8(42), OutputMode::Normal);
  }
}
