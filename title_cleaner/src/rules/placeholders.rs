use std::sync::OnceLock;

use regex::Regex;

/// Remove catalog placeholder prefixes `ZZZ(notgame):#` and `ZZZ(notgame):`
/// together with the whitespace after them. The generic parenthetical rules
/// never match `(notgame)`, so the prefixes get a dedicated pass after the
/// main rules. The `#` variant runs first so the hash is not left behind.
pub fn remove_placeholder_prefixes(s: &str) -> String {
    static RES: OnceLock<[Regex; 2]> = OnceLock::new();
    let [hash, plain] = RES.get_or_init(|| {
        [
            Regex::new(r"(?i)ZZZ\(notgame\):#\s*").unwrap(),
            Regex::new(r"(?i)ZZZ\(notgame\):\s*").unwrap(),
        ]
    });

    let cleaned = hash.replace_all(s, "");
    plain.replace_all(&cleaned, "").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_placeholder_prefixes() {
        let test_cases = vec![
            ("ZZZ(notgame): Test Cartridge", "Test Cartridge"),
            ("ZZZ(notgame):# PC Engine CD-ROM BIOS", "PC Engine CD-ROM BIOS"),
            ("zzz(NotGame): Diagnostics", "Diagnostics"),
            ("Regular Game", "Regular Game"),
        ];

        for (input, expected) in test_cases {
            assert_eq!(remove_placeholder_prefixes(input), expected);
        }
    }
}
