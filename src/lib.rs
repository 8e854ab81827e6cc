//! Repotree - emit a JSON manifest of a directory tree for static file browsers

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{DEFAULT_ROOT, ROOT_ENV_VAR, resolve_root};
pub use error::ScanError;
pub use output::{print_json, write_json};
pub use tree::{FileLeaf, ScanStats, TreeNode, TreeScanner, classify, scan};
