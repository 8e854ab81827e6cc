//! Test harness for repotree integration tests

#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

pub use repotree::test_utils::TestTree;
use serde_json::Value;

/// Build a command for the repotree binary with a clean environment.
pub fn repotree_command(dir: &Path) -> Command {
    let binary = env!("CARGO_BIN_EXE_repotree");
    let mut cmd = Command::new(binary);
    cmd.current_dir(dir)
        .env_remove("REPO_DIR")
        .env_remove("REPOTREE_LOG");
    cmd
}

pub fn run_repotree(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = repotree_command(dir)
        .args(args)
        .output()
        .expect("Failed to run repotree");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// Run repotree on `root` and parse its stdout as JSON.
pub fn scan_json(root: &Path) -> Value {
    let root_arg = root.to_str().expect("temp path is not UTF-8");
    let (stdout, stderr, success) = run_repotree(root, &[root_arg]);
    assert!(success, "repotree failed: {}", stderr);
    serde_json::from_str(&stdout).expect("stdout is not valid JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let tree = TestTree::new();
        assert!(tree.path().exists());
    }

    #[test]
    fn test_harness_add_sized() {
        let tree = TestTree::new();
        let path = tree.add_sized("nested/file.bin", 12);
        assert_eq!(std::fs::metadata(path).unwrap().len(), 12);
    }
}
