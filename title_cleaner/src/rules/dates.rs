use std::sync::OnceLock;

use regex::Regex;

/// Remove a `(YYYY-MM-DD)` or `(YYYY.MM.DD)` group. Only the first
/// occurrence is removed; every sibling rule replaces all occurrences.
pub fn remove_full_date_group(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\s*\(\d{4}[-.]\d{2}[-.]\d{2}\)").unwrap());

    re.replace(s, "").to_string()
}

/// Remove bare `(YYYY)` year groups.
pub fn remove_year_groups(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"(?i)\s*\(\s*\d{4}\s*\)").unwrap());

    re.replace_all(s, "").to_string()
}
