//! Keyword vocabularies backing the group-removal rules.
//!
//! Matching is case-insensitive substring-within-group: a parenthesized or
//! bracketed group is removed when any entry appears anywhere inside it,
//! whatever else the group contains.

/// Region, country and locale markers found in release names. Also carries
/// the generic cataloguing words ("rev", "set", "Ver", "US", ...) that ship
/// alongside regions in arcade sets. Those can match legitimate title words
/// inside parentheses; that aggressiveness is accepted.
pub const REGION_KEYWORDS: &[&str] = &[
    "USA",
    "NGM",
    "Euro",
    "Europe",
    "Japan",
    "World",
    "Korea",
    "Asia",
    "Brazil",
    "Germany",
    "France",
    "Italy",
    "Spain",
    "UK",
    "Australia",
    "Canada",
    "rev",
    "sitdown",
    "set",
    "Hispanic",
    "China",
    "Ver",
    "US",
    "68k",
    "bootleg",
    "Nintendo",
    "Taiwan",
    "Hong Kong",
    "Latin America",
    "Mexico",
    "Russia",
    "Sweden",
    "Netherlands",
    "Belgium",
    "Portugal",
    "Greece",
    "Finland",
    "Norway",
    "Denmark",
    "Poland",
    "Czech",
    "Slovak",
    "Hungary",
    "Romania",
    "Bulgaria",
    "Croatia",
    "Serbia",
    "Turkey",
    "Israel",
    "UAE",
    "Saudi Arabia",
    "South Africa",
    "Egypt",
    "Philippines",
    "Indonesia",
    "Malaysia",
    "Singapore",
    "Thailand",
    "Vietnam",
];

/// Release status words. "Unl" also covers "Unlicensed" through substring
/// matching.
pub const RELEASE_STATUS_KEYWORDS: &[&str] = &[
    "Beta",
    "Alpha",
    "Demo",
    "Prototype",
    "Unl",
    "Sample",
    "Preview",
    "Trial",
];

/// Console and arcade platform codes.
pub const PLATFORM_KEYWORDS: &[&str] = &[
    "NES",
    "SNES",
    "N64",
    "GC",
    "Wii",
    "Switch",
    "GB",
    "GBC",
    "GBA",
    "DS",
    "3DS",
    "PS1",
    "PS2",
    "PS3",
    "PS4",
    "PS5",
    "PSP",
    "Vita",
    "Xbox",
    "Xbox 360",
    "Xbox One",
    "Genesis",
    "Mega Drive",
    "Saturn",
    "Dreamcast",
    "Arcade",
    "MAME",
    "FBA",
    "Neo Geo",
];

/// Short region codes appearing after a hyphen, e.g. "Some Game - USA".
pub const DASH_REGION_CODES: &[&str] = &[
    "USA", "EUR", "JPN", "KOR", "ASI", "BRA", "GER", "FRA", "ITA", "SPA", "UK", "AUS", "CAN",
    "CHN", "TWN", "HKG", "LAT", "MEX", "RUS",
];

/// Dump-verification vocabulary from ROM-preservation cataloguing projects.
pub const DUMP_QUALITY_KEYWORDS: &[&str] = &[
    "Good",
    "Bad",
    "Overdump",
    "Underdump",
    "Verified",
    "Trurip",
    "No-Intro",
    "Redump",
];

/// Markers for cracked, trained, patched or otherwise modified dumps.
pub const MODIFICATION_KEYWORDS: &[&str] = &[
    "Crack",
    "Trainer",
    "Cheat",
    "Hack",
    "Patch",
    "Fixed",
    "Translated",
];

/// Join a vocabulary into a regex alternation, escaping each entry.
pub fn alternation(keywords: &[&str]) -> String {
    keywords
        .iter()
        .map(|keyword| regex::escape(keyword))
        .collect::<Vec<_>>()
        .join("|")
}
