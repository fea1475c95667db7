//! Configuration resolution with layered overrides
//!
//! Options are resolved from these sources, later ones overriding earlier:
//! 1. Built-in defaults
//! 2. Global config (`<config_dir>/unindent/config.toml`)
//! 3. Project config (`.unindent.toml` in the working directory)
//! 4. Command-line flags
//!
//! An explicit `--config PATH` replaces layers 2 and 3.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use unindent_core::UnindentOptions;

use crate::error::{CliError, Result};

/// File name of the project-level config
pub const PROJECT_CONFIG_FILE: &str = ".unindent.toml";

/// A single config file; every key is optional so layers can be merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub reflow_comments: Option<bool>,
    pub comment_marker: Option<String>,
}

impl ConfigFile {
    /// Parse a config file's content. `path` is used for error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
        Self::parse(&content, path)
    }

    /// Apply the keys this file sets on top of `options`.
    pub fn apply(&self, options: &mut UnindentOptions) {
        if let Some(reflow) = self.reflow_comments {
            options.reflow_comments = reflow;
        }
        if let Some(ref marker) = self.comment_marker {
            options.comment_marker = marker.clone();
        }
    }
}

/// Command-line overrides, the last layer
#[derive(Debug, Clone, Default)]
pub struct FlagOverrides {
    /// Only a set flag overrides; an absent `-r` keeps the config value
    pub reflow_comments: bool,
    pub comment_marker: Option<String>,
}

/// Resolves [`UnindentOptions`] from config files and flags
pub struct ConfigResolver {
    /// Directory searched for the project config
    working_dir: PathBuf,

    /// Explicit config file, replacing the global and project layers
    explicit: Option<PathBuf>,

    /// Override for the global config directory (used for testing).
    /// When `None`, `dirs::config_dir()` is used.
    global_config_dir_override: Option<PathBuf>,
}

impl ConfigResolver {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            explicit: None,
            global_config_dir_override: None,
        }
    }

    pub fn with_explicit(mut self, path: Option<PathBuf>) -> Self {
        self.explicit = path;
        self
    }

    pub fn with_global_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.global_config_dir_override = Some(dir.into());
        self
    }

    fn global_config_path(&self) -> Option<PathBuf> {
        let dir = match self.global_config_dir_override {
            Some(ref dir) => dir.clone(),
            None => dirs::config_dir()?.join("unindent"),
        };
        Some(dir.join("config.toml"))
    }

    /// The config files that will be read, in merge order.
    fn layers(&self) -> Vec<PathBuf> {
        if let Some(ref explicit) = self.explicit {
            return vec![explicit.clone()];
        }

        let mut layers = Vec::new();
        if let Some(global) = self.global_config_path() {
            layers.push(global);
        }
        layers.push(self.working_dir.join(PROJECT_CONFIG_FILE));
        layers
    }

    /// Merge every layer and the flags, then validate the result.
    ///
    /// Missing default-location files are skipped. A missing explicit file
    /// is an error.
    pub fn resolve(&self, flags: &FlagOverrides) -> Result<UnindentOptions> {
        let mut options = UnindentOptions::default();

        for path in self.layers() {
            if path.is_file() {
                tracing::debug!(?path, "Loading config");
                ConfigFile::load(&path)?.apply(&mut options);
            } else if self.explicit.is_some() {
                return Err(CliError::user(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            } else {
                tracing::debug!(?path, "No config found, skipping");
            }
        }

        if flags.reflow_comments {
            options.reflow_comments = true;
        }
        if let Some(ref marker) = flags.comment_marker {
            options.comment_marker = marker.clone();
        }

        options.validate()?;
        tracing::debug!(?options, "Resolved options");
        Ok(options)
    }
}
