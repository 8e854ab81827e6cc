//! JSON output formatting

use std::io::{self, Write};

use crate::tree::TreeNode;

/// Write the tree as 2-space pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(node: &TreeNode, mut writer: W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, node).map_err(io::Error::other)?;
    writeln!(writer)?;
    writer.flush()
}

/// Print tree node as pretty-printed JSON to stdout.
pub fn print_json(node: &TreeNode) -> io::Result<()> {
    write_json(node, io::stdout().lock())
}
