//! # Configuration Module
//!
//! Optional defaults for the command line, read from a `.addlicense.toml` file
//! in the current directory or from the file named by the `ADDLICENSE_CONFIG`
//! environment variable.
//!
//! ```toml
//! ext = ".go"
//! license = "LICENSE_HEADER.txt"
//! exclude = ["vendor/*", "*_test.go"]
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::verbose_log;

/// The default config file name.
pub const DEFAULT_CONFIG_FILENAME: &str = ".addlicense.toml";

/// Environment variable for specifying config file path.
pub const CONFIG_ENV_VAR: &str = "ADDLICENSE_CONFIG";

/// Defaults loaded from a config file.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
  /// File name suffix to process in directory mode.
  #[serde(default)]
  pub ext: Option<String>,

  /// License text file. Relative paths are resolved against the directory
  /// holding the config file.
  #[serde(default)]
  pub license: Option<PathBuf>,

  /// Exclude patterns, applied before any given on the command line.
  #[serde(default)]
  pub exclude: Vec<String>,
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{path}': {source}")]
  ParseError { path: PathBuf, source: toml::de::Error },

  /// An explicitly requested config file does not exist.
  #[error("Config file not found: {path}")]
  NotFound { path: PathBuf },
}

impl Config {
  /// Load configuration from a file.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    verbose_log!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
      path: path.to_path_buf(),
      source: e,
    })?;

    let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
      path: path.to_path_buf(),
      source: e,
    })?;

    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(config.resolve_paths(base_dir))
  }

  fn resolve_paths(self, base_dir: &Path) -> Self {
    let license = self.license.map(|license| {
      if license.is_relative() {
        base_dir.join(license)
      } else {
        license
      }
    });

    Self { license, ..self }
  }
}

/// Discover the configuration file path.
///
/// The configuration file is discovered in the following order:
/// 1. Path specified via `--config` flag (passed as `explicit_path`)
/// 2. Path specified via `ADDLICENSE_CONFIG` environment variable
/// 3. `.addlicense.toml` in `search_dir`
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] when an explicitly named file (flag or
/// environment variable) does not exist.
pub fn discover_config_path(explicit_path: Option<&Path>, search_dir: &Path) -> Result<Option<PathBuf>, ConfigError> {
  if let Some(path) = explicit_path {
    if path.exists() {
      verbose_log!("Using explicit config path: {}", path.display());
      return Ok(Some(path.to_path_buf()));
    }
    return Err(ConfigError::NotFound {
      path: path.to_path_buf(),
    });
  }

  if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR)
    && !env_path.is_empty()
  {
    let path = PathBuf::from(&env_path);
    if path.exists() {
      verbose_log!("Using config from {}: {}", CONFIG_ENV_VAR, path.display());
      return Ok(Some(path));
    }
    return Err(ConfigError::NotFound { path });
  }

  let default_config = search_dir.join(DEFAULT_CONFIG_FILENAME);
  if default_config.is_file() {
    verbose_log!("Using config: {}", default_config.display());
    return Ok(Some(default_config));
  }

  verbose_log!("No config file found");
  Ok(None)
}

/// Load the discovered configuration, if any.
///
/// Returns `Ok(None)` when `no_config` is set or no file was found.
pub fn load_config(explicit_path: Option<&Path>, search_dir: &Path, no_config: bool) -> Result<Option<Config>> {
  if no_config {
    verbose_log!("Config file discovery disabled (--no-config)");
    return Ok(None);
  }

  match discover_config_path(explicit_path, search_dir)? {
    Some(path) => {
      let config = Config::load(&path).with_context(|| format!("Failed to load config from {}", path.display()))?;
      Ok(Some(config))
    }
    None => Ok(None),
  }
}
