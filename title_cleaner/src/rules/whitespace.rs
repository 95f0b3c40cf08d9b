use std::sync::OnceLock;

use regex::Regex;

/// Collapse runs of two or more whitespace characters into a single space.
pub fn normalize_whitespace(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\s{2,}").unwrap());

    re.replace_all(s, " ").to_string()
}

/// Trim the edges: leading/trailing whitespace, stray hyphen runs, then a
/// single trailing comma and a single trailing period.
pub fn trim_edges(s: &str) -> String {
    static HYPHEN_RUNS: OnceLock<Regex> = OnceLock::new();
    static TRAILING_COMMA: OnceLock<Regex> = OnceLock::new();
    static TRAILING_PERIOD: OnceLock<Regex> = OnceLock::new();
    let hyphen_runs = HYPHEN_RUNS.get_or_init(|| Regex::new(r"^[-\s]+|[-\s]+$").unwrap());
    let trailing_comma = TRAILING_COMMA.get_or_init(|| Regex::new(r",\s*$").unwrap());
    let trailing_period = TRAILING_PERIOD.get_or_init(|| Regex::new(r"\.\s*$").unwrap());

    let trimmed = s.trim();
    let trimmed = hyphen_runs.replace_all(trimmed, "");
    let trimmed = trailing_comma.replace(&trimmed, "");
    let trimmed = trailing_period.replace(&trimmed, "");
    trimmed.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_whitespace() {
        let test_cases = vec![
            ("Super  Mario   Bros", "Super Mario Bros"),
            ("Game Title,  ", "Game Title, "),
            ("Already clean", "Already clean"),
        ];

        for (input, expected) in test_cases {
            assert_eq!(normalize_whitespace(input), expected);
        }
    }

    #[test]
    fn test_trim_edges() {
        let test_cases = vec![
            ("  Game Title  ", "Game Title"),
            (" - Game Title - ", "Game Title"),
            ("Game Title,", "Game Title"),
            ("Game Title.", "Game Title"),
            // One comma and one period are dropped per pass, not runs.
            ("Game Title,,", "Game Title,"),
            ("Super Mario Bros.", "Super Mario Bros"),
        ];

        for (input, expected) in test_cases {
            assert_eq!(trim_edges(input), expected);
        }
    }
}
