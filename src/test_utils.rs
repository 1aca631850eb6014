#[cfg(test)]
pub mod fixtures {
    use std::fs;
    use std::path::{Path, PathBuf};

    use crate::scope::{CONFIG_FILE, SCOPE_DIR};

    /// Create a scope marker directory under `root` at `rel` (empty `rel`
    /// places it directly under the root), optionally with a config file.
    /// Returns the marker path.
    pub fn create_scope(root: &Path, rel: &str, config: Option<&str>) -> PathBuf {
        let marker = if rel.is_empty() {
            root.join(SCOPE_DIR)
        } else {
            root.join(rel).join(SCOPE_DIR)
        };
        fs::create_dir_all(&marker).unwrap();
        if let Some(content) = config {
            fs::write(marker.join(CONFIG_FILE), content).unwrap();
        }
        marker
    }
}
