//! Root path resolution

use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable consulted when no path argument is given.
pub const ROOT_ENV_VAR: &str = "REPO_DIR";

/// Fallback root when neither the argument nor the environment supplies one.
pub const DEFAULT_ROOT: &str = "gh-pages";

/// Resolve the directory to scan: argument, then `REPO_DIR`, then `gh-pages`.
pub fn resolve_root(arg: Option<PathBuf>) -> PathBuf {
    resolve_root_from(arg, std::env::var_os(ROOT_ENV_VAR))
}

/// Pure form of [`resolve_root`] with the environment value passed in.
///
/// An empty environment value counts as unset.
pub fn resolve_root_from(arg: Option<PathBuf>, env_value: Option<OsString>) -> PathBuf {
    arg.or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_wins() {
        let root = resolve_root_from(Some("site".into()), Some("from-env".into()));
        assert_eq!(root, PathBuf::from("site"));
    }

    #[test]
    fn test_env_used_without_argument() {
        let root = resolve_root_from(None, Some("from-env".into()));
        assert_eq!(root, PathBuf::from("from-env"));
    }

    #[test]
    fn test_literal_fallback() {
        assert_eq!(resolve_root_from(None, None), PathBuf::from("gh-pages"));
    }

    #[test]
    fn test_empty_env_counts_as_unset() {
        assert_eq!(resolve_root_from(None, Some("".into())), PathBuf::from("gh-pages"));
    }
}
