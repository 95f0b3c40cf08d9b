use std::sync::OnceLock;

use regex::Regex;

use crate::vocab::{self, RELEASE_STATUS_KEYWORDS};

/// Remove `(...)` groups carrying revision numbers, version strings or
/// release status words (Beta, Demo, Prototype, ...).
pub fn remove_release_status_groups(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        let pattern = format!(
            r"(?i)\s*\([^)]*(?:Rev \d+|Version \d+|v\d+\.\d+|Update \d+|{})[^)]*\)",
            vocab::alternation(RELEASE_STATUS_KEYWORDS)
        );
        Regex::new(&pattern).unwrap()
    });

    re.replace_all(s, "").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_release_status_groups() {
        let test_cases = vec![
            ("Super Mario Bros. (Rev 1)", "Super Mario Bros."),
            ("Donkey Kong (v1.1)", "Donkey Kong"),
            ("Doom (Version 2)", "Doom"),
            ("Bump 'n' Jump (Beta)", "Bump 'n' Jump"),
            ("Adam's Musicbox (Demo)", "Adam's Musicbox"),
            ("Castelo (Unl)", "Castelo"),
            ("Castelo (Unlicensed)", "Castelo"),
            ("A.E. (prototype)", "A.E."),
            ("Demo Game", "Demo Game"),
        ];

        for (input, expected) in test_cases {
            assert_eq!(remove_release_status_groups(input), expected);
        }
    }
}
