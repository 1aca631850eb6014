//! Per-scope configuration loaded from `config.yml`.
//!
//! Settings are an arbitrary YAML mapping. Parsing goes through `serde_yaml`,
//! which only materializes plain scalars, sequences, and mappings.

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use serde_yaml::{Mapping, Value};

use crate::error::{Result, ScopeError};

/// Immutable settings mapping for a single scope.
///
/// Always a valid mapping: a missing file, an empty document, or a document
/// whose root is not a mapping all resolve to the empty config. Missing keys
/// resolve to defaults at the accessor level.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Config {
    values: Mapping,
}

impl Config {
    /// Wrap an already-parsed mapping.
    pub fn new(values: Mapping) -> Self {
        Self { values }
    }

    /// Load configuration from a YAML file.
    ///
    /// A file that does not exist resolves to the empty config; malformed
    /// YAML is a hard error.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(ScopeError::ReadConfig {
                    path: path.display().to_string(),
                    source: e,
                });
            }
        };

        Self::from_yaml(&content).map_err(|e| ScopeError::ParseConfig {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Parse configuration from YAML text.
    ///
    /// An empty document or a non-mapping root yields the empty config.
    pub fn from_yaml(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        match serde_yaml::from_str::<Value>(content)? {
            Value::Mapping(values) => Ok(Self::new(values)),
            _ => Ok(Self::default()),
        }
    }

    /// Get the value at `key`, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Get the value at `key`, falling back to `default` when absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        self.get(key).unwrap_or(default)
    }

    /// Get a string value at `key`. Values of other types are not coerced.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Get a boolean value at `key`. Values of other types are not coerced.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// Get an integer value at `key`. Values of other types are not coerced.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    /// Read-only view of the full underlying mapping.
    pub fn raw(&self) -> &Mapping {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}
