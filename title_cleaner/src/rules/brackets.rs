use std::sync::OnceLock;

use regex::Regex;

use crate::vocab::{self, DUMP_QUALITY_KEYWORDS, MODIFICATION_KEYWORDS};

/// Remove `[...]` groups carrying `Rev N` or `vN.N` markers.
pub fn remove_bracketed_revisions(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE
        .get_or_init(|| Regex::new(r"(?i)\s*\[[^\]]*(?:Rev \d+|v\d+\.\d+)[^\]]*\]").unwrap());

    re.replace_all(s, "").to_string()
}

/// Remove `[...]` groups carrying dump-verification vocabulary
/// (Good, Bad, Verified, Redump, ...).
pub fn remove_bracketed_dump_quality(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        let pattern = format!(
            r"(?i)\s*\[[^\]]*(?:{})[^\]]*\]",
            vocab::alternation(DUMP_QUALITY_KEYWORDS)
        );
        Regex::new(&pattern).unwrap()
    });

    re.replace_all(s, "").to_string()
}

/// Remove `[...]` groups marking cracked, trained, patched or translated
/// dumps.
pub fn remove_bracketed_modifications(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        let pattern = format!(
            r"(?i)\s*\[[^\]]*(?:{})[^\]]*\]",
            vocab::alternation(MODIFICATION_KEYWORDS)
        );
        Regex::new(&pattern).unwrap()
    });

    re.replace_all(s, "").to_string()
}

/// Remove `[...]` groups carrying uncertainty markers: `!?`, a bare `!`,
/// or `(?)`.
pub fn remove_bracketed_uncertainty(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re =
        RE.get_or_init(|| Regex::new(r"(?i)\s*\[[^\]]*(?:!\?|!\s*|\(\?\))[^\]]*\]").unwrap());

    re.replace_all(s, "").to_string()
}
