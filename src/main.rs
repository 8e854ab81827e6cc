//! CLI entry point for repotree

use std::path::PathBuf;
use std::process;

use clap::Parser;
use repotree::{TreeScanner, print_json, resolve_root};

#[derive(Parser, Debug)]
#[command(name = "repotree")]
#[command(about = "Print a JSON manifest (type and size of every entry) of a directory tree")]
#[command(version)]
struct Args {
    /// Directory to scan [default: $REPO_DIR, then gh-pages]
    path: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();
    repotree::logging::init();

    let root = resolve_root(args.path);
    tracing::debug!(root = %root.display(), "resolved scan root");

    let mut scanner = TreeScanner::new();
    let tree = match scanner.scan(&root) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("repotree: error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = print_json(&tree) {
        eprintln!("repotree: error writing output: {}", e);
        process::exit(1);
    }
}
