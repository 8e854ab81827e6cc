//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file with the given content.
    ///
    /// Creates parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        self.add_bytes(path, content.as_bytes())
    }

    /// Add a file of exactly `len` bytes.
    pub fn add_sized(&self, path: &str, len: usize) -> PathBuf {
        self.add_bytes(path, &vec![b'x'; len])
    }

    fn add_bytes(&self, path: &str, content: &[u8]) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an empty directory (and any missing parents).
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Remove all permissions from a directory until the guard is dropped.
    ///
    /// Returns `None` when the restriction has no effect (e.g. running as
    /// root), so permission tests can skip themselves.
    #[cfg(unix)]
    pub fn deny_access(&self, path: &str) -> Option<PermissionGuard> {
        self.restrict(path, 0o000, |dir| fs::read_dir(dir).is_err())
    }

    /// Make a directory listable but not searchable: names can be read, but
    /// stat of any entry fails. `None` when the restriction has no effect.
    #[cfg(unix)]
    pub fn deny_search(&self, path: &str) -> Option<PermissionGuard> {
        self.restrict(path, 0o444, |dir| fs::metadata(dir.join(".")).is_err())
    }

    #[cfg(unix)]
    fn restrict(
        &self,
        path: &str,
        mode: u32,
        enforced: impl Fn(&Path) -> bool,
    ) -> Option<PermissionGuard> {
        use std::os::unix::fs::PermissionsExt;

        let full_path = self.dir.path().join(path);
        let original = fs::metadata(&full_path)
            .expect("Failed to read metadata")
            .permissions();
        fs::set_permissions(&full_path, fs::Permissions::from_mode(mode))
            .expect("Failed to set permissions");

        let guard = PermissionGuard {
            path: full_path,
            original,
        };
        if !enforced(&guard.path) {
            return None;
        }
        Some(guard)
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Restores a directory's permissions on drop so the temp dir can be removed.
pub struct PermissionGuard {
    path: PathBuf,
    original: fs::Permissions,
}

impl Drop for PermissionGuard {
    fn drop(&mut self) {
        let _ = fs::set_permissions(&self.path, self.original.clone());
    }
}
