//! Entry filtering for tree scanning

/// Files the browsing page generates next to the manifest. Skipped so that
/// re-running the scan over a published tree does not list them.
pub const RESERVED_OUTPUTS: &[&str] = &["index.html", "browser.js", "structure.json"];

/// Check if an entry should be left out of the manifest.
///
/// Hidden entries (leading `.`) and [`RESERVED_OUTPUTS`] are skipped at every
/// depth. Matching is exact and case-sensitive.
pub fn is_skipped(name: &str) -> bool {
    is_hidden(name) || RESERVED_OUTPUTS.contains(&name)
}

pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_entries_skipped() {
        assert!(is_skipped(".hidden"));
        assert!(is_skipped(".git"));
        assert!(is_skipped(".."));
        assert!(!is_skipped("visible.txt"));
        assert!(!is_skipped("dot.in.middle"));
    }

    #[test]
    fn test_reserved_outputs_skipped() {
        assert!(is_skipped("index.html"));
        assert!(is_skipped("browser.js"));
        assert!(is_skipped("structure.json"));
    }

    #[test]
    fn test_reserved_match_is_exact() {
        assert!(!is_skipped("Index.html"));
        assert!(!is_skipped("index.htm"));
        assert!(!is_skipped("other.html"));
        assert!(!is_skipped("structure.json.bak"));
    }
}
