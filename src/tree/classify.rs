//! Extension classification for file leaves

/// Type token for names with no extension at all.
pub const NO_EXTENSION: &str = "file";

/// A multi-part suffix that must win over plain last-dot extraction.
#[derive(Debug, Clone, Copy)]
pub struct SuffixRule {
    pub suffix: &'static str,
    pub kind: &'static str,
}

/// Ordered suffix rules, checked before the last-dot rule. First match wins.
pub const SUFFIX_RULES: &[SuffixRule] = &[
    SuffixRule {
        suffix: "-openrc.apk",
        kind: "openrc",
    },
    SuffixRule {
        suffix: ".tar.gz",
        kind: "tar.gz",
    },
];

/// Classify a base name into the type token shown by the browsing page.
///
/// Matching is case-sensitive:
/// - a name ending in one of [`SUFFIX_RULES`] gets that rule's kind
/// - otherwise the text after the last `.` (possibly empty, for `name.`)
/// - otherwise [`NO_EXTENSION`]
pub fn classify(name: &str) -> &str {
    if let Some(rule) = SUFFIX_RULES.iter().find(|r| name.ends_with(r.suffix)) {
        return rule.kind;
    }

    match name.rsplit_once('.') {
        Some((_, ext)) => ext,
        None => NO_EXTENSION,
    }
}
