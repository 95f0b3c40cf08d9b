//! Cleans filename-derived titles of ROM and disk-image files for display,
//! e.g. "Sonic the Hedgehog (USA, Europe)" -> "Sonic the Hedgehog"
//! or "Castlevania [Good]" -> "Castlevania".

mod cleaner;
mod rules;
mod vocab;

pub use cleaner::{TitleCleaner, clean_game_title, release_tags};
