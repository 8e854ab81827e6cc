//! TreeScanner - builds the full manifest tree in memory

use std::collections::BTreeMap;
use std::fs::{self, DirEntry, Metadata};
use std::io;
use std::path::Path;

use tracing::{debug, trace, warn};

use crate::error::{Result, ScanError, is_permission_denied};

use super::classify::classify;
use super::filter::is_skipped;
use super::node::TreeNode;

/// Counters collected during a scan. Not part of the manifest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub directories: u64,
    pub files: u64,
    pub bytes: u64,
    /// Directories cut short because permission was denied.
    pub denied: u64,
    /// Directory symlinks pointing back at one of their own ancestors.
    pub cycles: u64,
    /// Entries dropped because their lossy UTF-8 name clashed with a sibling.
    pub collisions: u64,
}

/// Result of listing one directory.
#[derive(Debug)]
enum Listing {
    Entries(Vec<DirEntry>),
    /// The directory could not be read. The caller records it as an empty
    /// directory and carries on.
    PermissionDenied,
}

/// What a directory entry resolves to once symlinks are followed.
enum EntryKind {
    Directory(DirId),
    File { size: u64 },
}

/// On-disk identity of a directory, used to spot symlink cycles.
#[cfg(unix)]
type DirId = (u64, u64);

#[cfg(not(unix))]
type DirId = std::path::PathBuf;

#[cfg(unix)]
fn dir_id(_path: &Path, meta: &Metadata) -> io::Result<DirId> {
    use std::os::unix::fs::MetadataExt;
    Ok((meta.dev(), meta.ino()))
}

#[cfg(not(unix))]
fn dir_id(path: &Path, _meta: &Metadata) -> io::Result<DirId> {
    fs::canonicalize(path)
}

/// Depth-first, single-threaded scanner.
///
/// Directories, including symlinks to directories, are recursed into.
/// Everything else (regular files, symlinks to files, sockets, ...) becomes a
/// [`FileLeaf`](super::FileLeaf) sized by its target. A directory symlink that
/// leads back to one of its own ancestors is listed as `{}`.
#[derive(Debug, Default)]
pub struct TreeScanner {
    stats: ScanStats,
    /// Identities of the directories currently being scanned, root first.
    ancestors: Vec<DirId>,
}

impl TreeScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stats of the most recent scan.
    pub fn stats(&self) -> &ScanStats {
        &self.stats
    }

    /// Scan `root` and return its directory node.
    ///
    /// Fails if the root is missing or not a directory, or on any I/O error
    /// other than permission denied.
    pub fn scan(&mut self, root: &Path) -> Result<TreeNode> {
        self.stats = ScanStats::default();
        self.ancestors.clear();

        let meta = match fs::metadata(root) {
            Ok(meta) => meta,
            Err(err) if is_permission_denied(&err) => {
                return Ok(self.finish_dir(root, BTreeMap::new(), true));
            }
            Err(err) => return Err(ScanError::io(root, err)),
        };
        if !meta.is_dir() {
            return Err(ScanError::NotADirectory {
                path: root.to_path_buf(),
            });
        }
        let id = dir_id(root, &meta).map_err(|e| ScanError::io(root, e))?;

        let tree = self.scan_dir(root, id)?;

        debug!(
            root = %root.display(),
            directories = self.stats.directories,
            files = self.stats.files,
            bytes = self.stats.bytes,
            denied = self.stats.denied,
            cycles = self.stats.cycles,
            collisions = self.stats.collisions,
            "scan complete"
        );
        Ok(tree)
    }

    fn scan_dir(&mut self, path: &Path, id: DirId) -> Result<TreeNode> {
        trace!(path = %path.display(), "scanning directory");

        self.ancestors.push(id);
        let read = self.read_children(path);
        self.ancestors.pop();

        let (children, denied) = read?;
        Ok(self.finish_dir(path, children, denied))
    }

    /// Build the child map of `path`. The flag is set when permission was
    /// denied part way; the entries gathered up to that point are kept.
    fn read_children(&mut self, path: &Path) -> Result<(BTreeMap<String, TreeNode>, bool)> {
        let entries = match list_dir(path)? {
            Listing::Entries(entries) => entries,
            Listing::PermissionDenied => return Ok((BTreeMap::new(), true)),
        };

        let mut children = BTreeMap::new();
        for entry in entries {
            let name = entry_name(&entry);
            if is_skipped(&name) {
                continue;
            }

            let entry_path = entry.path();
            if children.contains_key(&name) {
                warn!(
                    path = %entry_path.display(),
                    name = %name,
                    "name collides with a sibling after UTF-8 conversion, keeping the first"
                );
                self.stats.collisions += 1;
                continue;
            }

            let kind = match resolve_kind(&entry) {
                Ok(kind) => kind,
                Err(err) if is_permission_denied(&err) => return Ok((children, true)),
                Err(err) => return Err(ScanError::io(&entry_path, err)),
            };

            let node = match kind {
                EntryKind::Directory(id) if self.ancestors.contains(&id) => {
                    warn!(path = %entry_path.display(), "symlink cycle, listing directory as empty");
                    self.stats.cycles += 1;
                    TreeNode::empty_directory()
                }
                EntryKind::Directory(id) => self.scan_dir(&entry_path, id)?,
                EntryKind::File { size } => {
                    self.stats.files += 1;
                    self.stats.bytes += size;
                    TreeNode::file(classify(&name), size)
                }
            };

            children.insert(name, node);
        }
        Ok((children, false))
    }

    /// Record a scanned directory. `denied` is the permission recovery: the
    /// directory keeps whatever was read before the failure (often nothing).
    fn finish_dir(
        &mut self,
        path: &Path,
        children: BTreeMap<String, TreeNode>,
        denied: bool,
    ) -> TreeNode {
        self.stats.directories += 1;
        if denied {
            warn!(
                path = %path.display(),
                kept = children.len(),
                "permission denied, directory listed partially"
            );
            self.stats.denied += 1;
        }
        TreeNode::Directory(children)
    }
}

/// Read and sort the entries of a directory.
fn list_dir(path: &Path) -> Result<Listing> {
    let listed = fs::read_dir(path).and_then(|rd| rd.collect::<io::Result<Vec<_>>>());
    listing_from(path, listed)
}

fn listing_from(path: &Path, listed: io::Result<Vec<DirEntry>>) -> Result<Listing> {
    match listed {
        Ok(mut entries) => {
            entries.sort_by_key(|e| e.file_name());
            Ok(Listing::Entries(entries))
        }
        Err(err) if is_permission_denied(&err) => Ok(Listing::PermissionDenied),
        Err(err) => Err(ScanError::io(path, err)),
    }
}

/// Entry name as UTF-8, replacing invalid bytes with U+FFFD.
fn entry_name(entry: &DirEntry) -> String {
    entry.file_name().into_string().unwrap_or_else(|raw| {
        let lossy = raw.to_string_lossy().into_owned();
        warn!(
            path = %entry.path().display(),
            name = %lossy,
            "file name is not valid UTF-8, replacing invalid bytes"
        );
        lossy
    })
}

/// Classify an entry, following symlinks.
///
/// A symlink whose target cannot be resolved is an error like any other:
/// dangling links surface as `NotFound`.
fn resolve_kind(entry: &DirEntry) -> io::Result<EntryKind> {
    let path = entry.path();
    let meta = if entry.file_type()?.is_symlink() {
        fs::metadata(&path)?
    } else {
        entry.metadata()?
    };

    if meta.is_dir() {
        Ok(EntryKind::Directory(dir_id(&path, &meta)?))
    } else {
        Ok(EntryKind::File { size: meta.len() })
    }
}

/// Scan `root` with a fresh [`TreeScanner`].
pub fn scan(root: impl AsRef<Path>) -> Result<TreeNode> {
    TreeScanner::new().scan(root.as_ref())
}
