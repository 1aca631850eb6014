//! Directory walking for scope discovery.

use std::path::{Component, Path};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::Result;
use crate::scope::{SCOPE_DIR, Scope};

/// Finds every scope nested beneath a root directory.
///
/// Traversal is lazy: scopes are constructed as the returned iterator is
/// advanced, and each [`discover`](Self::discover) call re-walks the
/// filesystem. Iteration order follows the underlying filesystem and is not
/// stable across platforms; callers must not depend on it.
#[derive(Debug, Clone, Default)]
pub struct ScopeResolver {
    follow_symlinks: bool,
    max_depth: Option<usize>,
}

impl ScopeResolver {
    /// Create a resolver with default traversal options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to follow symbolic links.
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Set maximum traversal depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Walk `root` and yield one result per candidate marker directory.
    ///
    /// Unreadable entries are skipped with a warning, so a root that does not
    /// exist yields an empty sequence. Candidates whose config fails to load
    /// are yielded as errors, leaving the caller to skip or abort.
    pub fn discover(&self, root: &Path) -> impl Iterator<Item = Result<Scope>> + use<> {
        let root = root.to_path_buf();

        let mut walker = WalkDir::new(&root)
            .min_depth(1)
            .follow_links(self.follow_symlinks);
        if let Some(depth) = self.max_depth {
            walker = walker.max_depth(depth);
        }

        walker
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable entry");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_dir() && entry.file_name() == SCOPE_DIR)
            .filter(move |entry| !has_excluded_ancestor(entry.path(), &root))
            .map(|entry| {
                debug!(path = %entry.path().display(), "Found scope");
                Scope::new(entry.path())
            })
    }
}

/// Whether any path segment between the root and the candidate's parent is a
/// hidden (`.`-prefixed) or `tmp` directory.
///
/// Only ancestors count: the marker's own name never triggers the check, and
/// segments of the root path itself are not inspected.
fn has_excluded_ancestor(path: &Path, root: &Path) -> bool {
    let Some(parent) = path.parent() else {
        return false;
    };
    let ancestry = parent.strip_prefix(root).unwrap_or(parent);

    ancestry.components().any(|component| match component {
        Component::Normal(segment) => {
            let segment = segment.to_string_lossy();
            segment.starts_with('.') || segment == "tmp"
        }
        _ => false,
    })
}
