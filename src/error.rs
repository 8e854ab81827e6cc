//! Error types for scanning

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal scan errors.
///
/// Permission denied has no variant: the scanner recovers it per directory.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot access '{}': No such file or directory", .path.display())]
    NotFound { path: PathBuf },

    #[error("cannot scan '{}': Not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("I/O error at '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    /// Create an error with path context from an I/O failure.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::NotADirectory => Self::NotADirectory { path },
            _ => Self::Io { path, source },
        }
    }

    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound { path } | Self::NotADirectory { path } | Self::Io { path, .. } => path,
        }
    }
}

pub type Result<T, E = ScanError> = std::result::Result<T, E>;

/// Check whether an I/O error is the kind the scanner recovers from.
pub(crate) fn is_permission_denied(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::PermissionDenied
}
