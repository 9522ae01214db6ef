//! Commonly used types and functions for ease of import.

pub use crate::{
    generate_crossword, generate_word_search, CrosswordGenerator, CrosswordPuzzle, Direction,
    Grid, PlacedWord, WordSearchGenerator, WordSearchPuzzle, WordSet,
};

#[cfg(feature = "std")]
pub use crate::init_logging;
