//! Tree node types serialized into the manifest

use std::collections::BTreeMap;

use serde::Serialize;

/// Leaf record for any non-directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileLeaf {
    /// Extension token used by the browsing page to pick an icon.
    #[serde(rename = "type")]
    pub kind: String,
    pub size: u64,
}

impl FileLeaf {
    pub fn new(kind: impl Into<String>, size: u64) -> Self {
        Self {
            kind: kind.into(),
            size,
        }
    }
}

/// A node of the scanned tree.
///
/// Directories serialize as a plain JSON object keyed by entry name, files as
/// `{"type": ..., "size": ...}`. A consumer tells them apart by the presence
/// of the `type` key.
///
/// Children live in a `BTreeMap`, so iteration (and therefore output) is
/// always in byte order of the entry names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TreeNode {
    Directory(BTreeMap<String, TreeNode>),
    File(FileLeaf),
}

impl TreeNode {
    pub fn empty_directory() -> Self {
        TreeNode::Directory(BTreeMap::new())
    }

    pub fn file(kind: impl Into<String>, size: u64) -> Self {
        TreeNode::File(FileLeaf::new(kind, size))
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Directory(_))
    }

    pub fn as_directory(&self) -> Option<&BTreeMap<String, TreeNode>> {
        match self {
            TreeNode::Directory(children) => Some(children),
            TreeNode::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&FileLeaf> {
        match self {
            TreeNode::File(leaf) => Some(leaf),
            TreeNode::Directory(_) => None,
        }
    }

    /// Look up a direct child by name. Always `None` for files.
    pub fn get(&self, name: &str) -> Option<&TreeNode> {
        self.as_directory().and_then(|children| children.get(name))
    }

    /// Number of direct children (0 for files).
    pub fn len(&self) -> usize {
        self.as_directory().map_or(0, BTreeMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
