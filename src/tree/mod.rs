//! Directory tree scanning logic
//!
//! The scan produces a [`TreeNode`]: nested directory maps whose leaves carry
//! an extension token and a byte size. The whole tree is built in memory and
//! serialized once.

mod classify;
mod filter;
mod node;
mod scanner;

// Re-export public types
pub use classify::{NO_EXTENSION, SUFFIX_RULES, SuffixRule, classify};
pub use filter::{RESERVED_OUTPUTS, is_hidden, is_skipped};
pub use node::{FileLeaf, TreeNode};
pub use scanner::{ScanStats, TreeScanner, scan};
