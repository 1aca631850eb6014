//! Discovery layer for scope enumeration.
//!
//! This module handles:
//! - Directory traversal under a caller-supplied root
//! - Candidate filtering (marker name, hidden and `tmp` ancestry)
//! - Per-candidate scope construction

pub mod walker;

pub use walker::ScopeResolver;

use std::path::Path;

use crate::error::Result;
use crate::scope::Scope;

/// Discover scopes under `root` with default traversal options.
pub fn discover(root: &Path) -> impl Iterator<Item = Result<Scope>> + use<> {
    ScopeResolver::new().discover(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::create_scope;
    use tempfile::TempDir;

    #[test]
    fn test_discover_uses_default_options() {
        let dir = TempDir::new().unwrap();
        let marker = create_scope(dir.path(), "proj", None);

        let scopes: Vec<_> = discover(dir.path()).filter_map(|r| r.ok()).collect();
        assert_eq!(scopes.len(), 1);
        assert_eq!(scopes[0].path(), marker.as_path());
    }
}
