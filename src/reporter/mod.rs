//! Rendering of discovery results.

pub mod json;
pub mod terminal;

use std::path::Path;

use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::scope::Scope;

/// Outcome of a completed discovery run, ready for rendering.
#[derive(Debug, Serialize)]
pub struct DiscoveryReport {
    pub root: String,
    pub scopes: Vec<ScopeEntry>,
    pub errors: Vec<String>,
}

/// One discovered scope in a report.
#[derive(Debug, Serialize)]
pub struct ScopeEntry {
    pub path: String,
    pub config: Config,
}

impl DiscoveryReport {
    /// Create an empty report for a discovery root.
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.display().to_string(),
            scopes: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Record a per-candidate discovery result.
    pub fn add(&mut self, result: Result<Scope>) {
        match result {
            Ok(scope) => self.scopes.push(ScopeEntry {
                path: scope.path().display().to_string(),
                config: scope.config().clone(),
            }),
            Err(e) => self.errors.push(e.to_string()),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

pub trait Reporter {
    fn report(&self, report: &DiscoveryReport) -> String;
}
