use std::sync::OnceLock;

use regex::Regex;
use tracing::trace;

use crate::rules::{
    brackets, dates, media, placeholders, platforms, regions, release_status, whitespace,
};

/// Cleanup rules in application order. Later rules operate on the output of
/// earlier ones, so the order is fixed; some patterns overlap and must not
/// be reordered.
const RULES: &[(&str, fn(&str) -> String)] = &[
    ("region_groups", regions::remove_region_groups),
    (
        "release_status_groups",
        release_status::remove_release_status_groups,
    ),
    ("platform_groups", platforms::remove_platform_groups),
    ("dash_region_codes", regions::remove_dash_region_codes),
    ("bracketed_revisions", brackets::remove_bracketed_revisions),
    (
        "bracketed_dump_quality",
        brackets::remove_bracketed_dump_quality,
    ),
    (
        "bracketed_modifications",
        brackets::remove_bracketed_modifications,
    ),
    (
        "bracketed_uncertainty",
        brackets::remove_bracketed_uncertainty,
    ),
    ("media_markers", media::remove_media_markers),
    ("compilation_counts", media::remove_compilation_counts),
    ("full_date_group", dates::remove_full_date_group),
    ("year_groups", dates::remove_year_groups),
    (
        "placeholder_prefixes",
        placeholders::remove_placeholder_prefixes,
    ),
];

pub struct TitleCleaner;

impl TitleCleaner {
    /// Strip cataloguing decorations from a raw title. `None` stands for a
    /// missing or non-text value and maps to an empty string; the function
    /// always returns a string and never panics.
    ///
    /// If stripping leaves nothing, the original title is returned with its
    /// edges trimmed so real content is never cleaned away entirely.
    pub fn clean(&self, title: Option<&str>) -> String {
        let Some(title) = title else {
            return String::new();
        };
        if title.is_empty() {
            return String::new();
        }

        let mut cleaned = title.to_string();
        for (rule, apply) in RULES {
            let next = apply(&cleaned);
            if next != cleaned {
                trace!(rule, from = %cleaned, to = %next, "rule rewrote title");
            }
            cleaned = next;
        }

        cleaned = whitespace::normalize_whitespace(&cleaned);
        cleaned = whitespace::trim_edges(&cleaned);

        if cleaned.trim().is_empty() {
            return title.trim().to_string();
        }
        cleaned
    }
}

/// Clean a raw catalog title for display,
/// e.g. "Super Mario Bros (NES) (Rev 1)" -> "Super Mario Bros".
pub fn clean_game_title(title: Option<&str>) -> String {
    TitleCleaner.clean(title)
}

/// List the parenthesized tags a raw title carries, in order of appearance,
/// e.g. "A.E. (USA) (Proto)" -> ["USA", "Proto"].
pub fn release_tags(title: &str) -> Vec<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\(([^)]+)\)").unwrap());

    re.captures_iter(title)
        .map(|cap| cap[1].trim().to_string())
        .collect()
}
