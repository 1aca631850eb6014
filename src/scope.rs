//! Scope representation and construction.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::Config;
use crate::error::Result;

/// Directory name that marks a location as a scope.
pub const SCOPE_DIR: &str = ".commit";

/// Settings file inside a scope directory.
pub const CONFIG_FILE: &str = "config.yml";

/// A configured context to run tools in.
///
/// A scope is identified by its marker directory (a directory named
/// `.commit`); the directory containing the marker is the one the scope
/// governs. The configuration is resolved once, at construction, and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scope {
    path: PathBuf,
    config: Config,
}

impl Scope {
    /// Construct a scope for a marker directory, resolving its configuration.
    ///
    /// Reads `config.yml` inside `path` when present. A missing file yields
    /// the empty config; malformed YAML is an error.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let config = Config::load(&path.join(CONFIG_FILE))?;
        Ok(Self { path, config })
    }

    /// Path of the marker directory itself.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory the scope governs (parent of the marker directory).
    pub fn dir(&self) -> Option<&Path> {
        self.path.parent()
    }

    /// The scope's resolved settings.
    pub fn config(&self) -> &Config {
        &self.config
    }
}
