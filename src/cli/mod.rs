//! # CLI Module
//!
//! This module contains the command-line interface implementation.
//! It uses clap for argument parsing.

mod add;

pub use add::{AddArgs, run_add};
use clap::Parser;
use clap::builder::styling::{AnsiColor, Color, Style, Styles};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  name = "add-license",
  author,
  version,
  about = "Add a license header to source files",
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # Add headers to every .go file below the current directory
  add-license --ext .go --license LICENSE_HEADER.txt

  # Process one directory, skipping vendored and generated protobuf code
  add-license --source pkg --ext .go --license HEADER.txt --exclude \"pkg/vendor/*\" --exclude \"*.pb.go\"

  # Process a single file (the extension filter does not apply)
  add-license --source scripts/build.ts --license HEADER.txt

  # Only report files missing a header, showing what would change
  add-license --check --show-diff --ext .rs --license HEADER.txt
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  #[command(flatten)]
  pub add_args: AddArgs,
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
