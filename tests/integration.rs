use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    cargo_bin_cmd!("commit-scopes")
}

/// Create a scope marker directory under `root` at `rel`, optionally with a
/// config file, and return the marker path.
fn create_scope(root: &Path, rel: &str, config: Option<&str>) -> PathBuf {
    let marker = root.join(rel).join(".commit");
    fs::create_dir_all(&marker).unwrap();
    if let Some(content) = config {
        fs::write(marker.join("config.yml"), content).unwrap();
    }
    marker
}

mod discovery {
    use super::*;

    #[test]
    fn test_lists_scopes_at_any_depth() {
        let dir = TempDir::new().unwrap();
        create_scope(dir.path(), "proj", None);
        create_scope(dir.path(), "proj/sub/deep", None);

        cmd()
            .arg(dir.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("proj/.commit"))
            .stdout(predicate::str::contains("proj/sub/deep/.commit"));
    }

    #[test]
    fn test_empty_tree_reports_no_scopes() {
        let dir = TempDir::new().unwrap();

        cmd()
            .arg(dir.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("No scopes found"));
    }

    #[test]
    fn test_hidden_and_tmp_ancestors_are_excluded() {
        let dir = TempDir::new().unwrap();
        create_scope(dir.path(), "proj", None);
        create_scope(dir.path(), "proj/.git", None);
        create_scope(dir.path(), "proj/tmp", None);

        cmd()
            .arg(dir.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("proj/.commit"))
            .stdout(predicate::str::contains(".git/.commit").not())
            .stdout(predicate::str::contains("tmp/.commit").not());
    }

    #[test]
    fn test_nonexistent_root_reports_no_scopes() {
        cmd()
            .arg("/no/such/directory")
            .assert()
            .success()
            .stdout(predicate::str::contains("No scopes found"));
    }
}

mod formats {
    use super::*;

    #[test]
    fn test_json_output_is_parseable() {
        let dir = TempDir::new().unwrap();
        let marker = create_scope(dir.path(), "proj", Some("rule: strict\n"));

        let output = cmd()
            .arg(dir.path())
            .args(["--format", "json"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let scopes = parsed["scopes"].as_array().unwrap();
        assert_eq!(scopes.len(), 1);
        assert_eq!(scopes[0]["path"], marker.display().to_string());
        assert_eq!(scopes[0]["config"]["rule"], "strict");
    }

    #[test]
    fn test_verbose_shows_config() {
        let dir = TempDir::new().unwrap();
        create_scope(dir.path(), "proj", Some("rule: strict\n"));

        cmd()
            .arg(dir.path())
            .arg("--verbose")
            .assert()
            .success()
            .stdout(predicate::str::contains("rule: strict"));
    }
}

mod errors {
    use super::*;

    #[test]
    fn test_broken_config_is_reported_and_skipped() {
        let dir = TempDir::new().unwrap();
        create_scope(dir.path(), "bad", Some("rule: [broken\n"));
        create_scope(dir.path(), "good", None);

        cmd()
            .arg(dir.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("good/.commit"))
            .stdout(predicate::str::contains("[ERROR]"))
            .stdout(predicate::str::contains("Failed to parse YAML config"));
    }

    #[test]
    fn test_strict_mode_fails_on_broken_config() {
        let dir = TempDir::new().unwrap();
        create_scope(dir.path(), "bad", Some("rule: [broken\n"));

        cmd()
            .arg(dir.path())
            .arg("--strict")
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::contains("Failed to parse YAML config"));
    }

    #[test]
    fn test_strict_mode_passes_on_clean_tree() {
        let dir = TempDir::new().unwrap();
        create_scope(dir.path(), "proj", Some("rule: strict\n"));

        cmd().arg(dir.path()).arg("--strict").assert().success();
    }
}

mod options {
    use super::*;

    #[test]
    fn test_max_depth_limits_discovery() {
        let dir = TempDir::new().unwrap();
        create_scope(dir.path(), "a", None);
        create_scope(dir.path(), "a/b/c", None);

        cmd()
            .arg(dir.path())
            .args(["--max-depth", "2"])
            .assert()
            .success()
            .stdout(predicate::str::contains("a/.commit"))
            .stdout(predicate::str::contains("c/.commit").not());
    }
}
