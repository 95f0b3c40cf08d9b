use std::sync::OnceLock;

use regex::Regex;

use crate::vocab::{self, PLATFORM_KEYWORDS};

/// Remove `(...)` groups naming a console or arcade platform.
pub fn remove_platform_groups(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        let pattern = format!(
            r"(?i)\s*\([^)]*(?:{})[^)]*\)",
            vocab::alternation(PLATFORM_KEYWORDS)
        );
        Regex::new(&pattern).unwrap()
    });

    re.replace_all(s, "").to_string()
}
