//! # add-license
//!
//! A tool that prepends a license header to source files.

mod cli;
mod output;

use anyhow::Result;

use crate::cli::{Cli, run_add};

fn main() -> Result<()> {
  let cli = Cli::parse_args();
  run_add(cli.add_args)
}
