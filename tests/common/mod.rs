#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::Command;

use anyhow::Result;
use assert_cmd::prelude::*;

/// License text used throughout the tests.
pub const LICENSE_TEXT: &str = "Copyright 2022\n\nAll rights reserved.";

/// The header `LICENSE_TEXT` wraps into.
pub const HEADER: &str = "/**\n * Copyright 2022\n *\n * All rights reserved.\n */";

/// Writes `LICENSE_TEXT` to `LICENSE_HEADER.txt` in the given directory.
pub fn write_license(dir: &Path) -> Result<std::path::PathBuf> {
  let path = dir.join("LICENSE_HEADER.txt");
  fs::write(&path, LICENSE_TEXT)?;
  Ok(path)
}

/// Creates a small Go project:
///
/// ```text
/// main.go
/// README.md
/// pkg/util.go
/// pkg/util_test.go
/// pkg/gen.pb.go        (generated)
/// vendor/dep/dep.go
/// ```
pub fn setup_go_project(dir: &Path) -> Result<()> {
  fs::create_dir_all(dir.join("pkg"))?;
  fs::create_dir_all(dir.join("vendor/dep"))?;

  fs::write(dir.join("main.go"), "package main\n\nfunc main() {}\n")?;
  fs::write(dir.join("README.md"), "# project\n")?;
  fs::write(dir.join("pkg/util.go"), "package pkg\n")?;
  fs::write(dir.join("pkg/util_test.go"), "package pkg\n")?;
  fs::write(
    dir.join("pkg/gen.pb.go"),
    "// Code generated by protoc-gen-go. DO NOT EDIT.\npackage pkg\n",
  )?;
  fs::write(dir.join("vendor/dep/dep.go"), "package dep\n")?;
  Ok(())
}

/// Builds a command for the binary, isolated from the caller's config
/// environment and running inside `dir`.
pub fn add_license_cmd(dir: &Path) -> Result<Command> {
  let mut cmd = Command::cargo_bin("add-license")?;
  cmd.current_dir(dir).env_remove("ADDLICENSE_CONFIG").env_remove("RUST_LOG");
  Ok(cmd)
}
