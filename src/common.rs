//! Common types: grid errors, word-set parse errors and placement outcomes.

use crate::word::PlacedWord;

/// Identifier handed out to every word placed during one generation call.
pub type WordId = usize;

/// Outcome of a randomized placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// The word was written into the grid.
    Placed(PlacedWord),
    /// The attempt budget ran out; the grid is untouched.
    NotPlaced,
}

impl Placement {
    /// Returns `true` if the word made it onto the grid.
    pub fn is_placed(&self) -> bool {
        matches!(self, Placement::Placed(_))
    }

    /// Converts into the placed word, if any.
    pub fn into_placed(self) -> Option<PlacedWord> {
        match self {
            Placement::Placed(word) => Some(word),
            Placement::NotPlaced => None,
        }
    }
}

/// Errors returned by direct grid access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Row or column is outside `[0, size)`.
    IndexOutOfBounds { row: usize, col: usize },
    /// Only uppercase `A`..=`Z` may be stored in a cell.
    InvalidLetter(char),
    /// Cell buffer length disagrees with `size * size`.
    ShapeMismatch { size: usize, cells: usize },
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
            GridError::InvalidLetter(ch) => write!(f, "InvalidLetter: {:?}", ch),
            GridError::ShapeMismatch { size, cells } => {
                write!(f, "ShapeMismatch: size={} but {} cells", size, cells)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}

/// Errors returned when parsing a word set from `MAIN:ANAGRAM,ANAGRAM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseWordSetError {
    /// Nothing before the colon.
    MissingMain,
    /// An anagram between two commas is blank.
    EmptyAnagram,
}

impl core::fmt::Display for ParseWordSetError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseWordSetError::MissingMain => write!(f, "Word set has no main word"),
            ParseWordSetError::EmptyAnagram => write!(f, "Word set contains an empty anagram"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseWordSetError {}
