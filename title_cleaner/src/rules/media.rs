use std::sync::OnceLock;

use regex::Regex;

/// Remove `(Disk N of M)`, `(Side A|B)` and `(Track N)` markers.
pub fn remove_media_markers(s: &str) -> String {
    static RES: OnceLock<Vec<Regex>> = OnceLock::new();
    let res = RES.get_or_init(|| {
        [
            r"(?i)\s*\(Disk \d+ of \d+\)",
            r"(?i)\s*\(Side [A-B]\)",
            r"(?i)\s*\(Track \d+\)",
        ]
        .iter()
        .map(|pattern| Regex::new(pattern).unwrap())
        .collect()
    });

    let mut cleaned = s.to_string();
    for re in res {
        cleaned = re.replace_all(&cleaned, "").to_string();
    }
    cleaned
}

/// Remove `(N in M)` compilation-count groups, digits and spaces only.
pub fn remove_compilation_counts(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"(?i)\s*\([\d\s]+in[\d\s]+\)").unwrap());

    re.replace_all(s, "").to_string()
}
