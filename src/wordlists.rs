//! Built-in puzzle content.

use alloc::vec::Vec;

use crate::word::WordSet;

/// Main words with their anagrams.
pub const DEFAULT_WORD_SETS: &[(&str, &[&str])] = &[
    ("LISTEN", &["SILENT", "ENLIST", "TINSLE"]),
    ("EARTH", &["HEART", "RATES", "HATER"]),
    ("ANGEL", &["GLEAN", "LANGE", "GALEN"]),
    ("CREATOR", &["REACTOR", "ORATOR", "CARROT"]),
    ("DREAM", &["ARMED", "MADRE", "DERMA"]),
    ("STONE", &["NOTES", "TONES", "ONSET"]),
    ("ALERT", &["ALTER", "LATER", "RATES"]),
    ("PARTS", &["STRAP", "TRAPS", "SPART"]),
];

/// Words hidden in the default word search.
pub const WORD_SEARCH_WORDS: &[&str] = &[
    "REACT",
    "TAILWIND",
    "CODE",
    "DEVELOP",
    "PROGRAM",
    "BUILD",
    "DESIGN",
    "FRONTEND",
    "BACKEND",
    "JAVASCRIPT",
    "TYPESCRIPT",
    "WEB",
    "APP",
    "NERD",
    "GENIUS",
];

/// [`DEFAULT_WORD_SETS`] as owned word sets.
pub fn default_word_sets() -> Vec<WordSet> {
    DEFAULT_WORD_SETS
        .iter()
        .map(|&(main, anagrams)| WordSet::new(main, anagrams.iter().copied()))
        .collect()
}

/// Word set for a given day, cycling through the built-in list.
pub fn daily_word_set(day: u64) -> WordSet {
    let (main, anagrams) = DEFAULT_WORD_SETS[(day % DEFAULT_WORD_SETS.len() as u64) as usize];
    WordSet::new(main, anagrams.iter().copied())
}
