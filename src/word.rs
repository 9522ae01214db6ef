//! Words, word sets and the record of a successful placement.

use alloc::string::String;
use alloc::vec::Vec;
use core::str::FromStr;

use crate::common::{ParseWordSetError, WordId};
use crate::direction::Direction;

/// Uppercase a word before it is validated or written.
pub fn normalize(word: &str) -> String {
    word.to_uppercase()
}

/// A main word together with its anagrams.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct WordSet {
    pub main: String,
    pub anagrams: Vec<String>,
}

impl WordSet {
    pub fn new<S: Into<String>>(main: S, anagrams: impl IntoIterator<Item = S>) -> Self {
        Self {
            main: main.into(),
            anagrams: anagrams.into_iter().map(Into::into).collect(),
        }
    }

    /// Main word followed by the anagrams, all normalized.
    pub fn normalized_words(&self) -> impl Iterator<Item = String> + '_ {
        core::iter::once(self.main.as_str())
            .chain(self.anagrams.iter().map(String::as_str))
            .map(normalize)
    }
}

/// Parses `MAIN:ANAGRAM,ANAGRAM`. The anagram part may be left out.
impl FromStr for WordSet {
    type Err = ParseWordSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (main, rest) = match s.split_once(':') {
            Some((main, rest)) => (main.trim(), Some(rest)),
            None => (s.trim(), None),
        };
        if main.is_empty() {
            return Err(ParseWordSetError::MissingMain);
        }
        let mut anagrams = Vec::new();
        if let Some(rest) = rest.filter(|r| !r.trim().is_empty()) {
            for anagram in rest.split(',').map(str::trim) {
                if anagram.is_empty() {
                    return Err(ParseWordSetError::EmptyAnagram);
                }
                anagrams.push(String::from(anagram));
            }
        }
        Ok(WordSet {
            main: String::from(main),
            anagrams,
        })
    }
}

/// A word written into the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedWord {
    pub word: String,
    pub id: WordId,
    pub direction: Direction,
    /// Covered cells in writing order, one per letter.
    pub cells: Vec<(usize, usize)>,
}

impl PlacedWord {
    /// First cell of the word.
    pub fn start(&self) -> Option<(usize, usize)> {
        self.cells.first().copied()
    }

    /// Returns `true` if the word covers `(row, col)`.
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }

    /// Whether `selection` traces this word forwards or backwards.
    pub fn matches_cells(&self, selection: &[(usize, usize)]) -> bool {
        selection.len() == self.cells.len()
            && (selection.iter().eq(self.cells.iter())
                || selection.iter().eq(self.cells.iter().rev()))
    }
}
