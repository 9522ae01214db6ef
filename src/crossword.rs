//! Crossword generation: main words and their anagrams on one shared grid.

use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;
use log::{debug, info};
use rand::Rng;

use crate::common::{Placement, WordId};
use crate::config::{CROSSWORD_GRID_SIZE, CROSSWORD_MAX_ATTEMPTS};
use crate::direction::CROSSWORD_DIRECTIONS;
use crate::grid::{is_grid_letter, Grid};
use crate::placer::Placer;
use crate::validator::{CrosswordRule, Intersecting};
use crate::word::{normalize, PlacedWord, WordSet};

/// Result of a crossword generation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct CrosswordPuzzle {
    pub grid: Grid,
    pub placed_words: Vec<PlacedWord>,
    /// Sorted, deduplicated letters of the main words only.
    pub available_letters: Vec<char>,
}

impl CrosswordPuzzle {
    /// First placed word spelling `guess` whose id is not yet in `found`.
    pub fn find_word(&self, guess: &str, found: &[WordId]) -> Option<&PlacedWord> {
        let guess = normalize(guess.trim());
        self.placed_words
            .iter()
            .find(|pw| pw.word == guess && !found.contains(&pw.id))
    }

    /// Returns `true` once every placed word has been found.
    pub fn is_complete(&self, found: &[WordId]) -> bool {
        self.placed_words.iter().all(|pw| found.contains(&pw.id))
    }

    /// Words of `word_sets` that did not make it onto the grid.
    ///
    /// A word listed several times is reported once per missing copy.
    pub fn missing_words(&self, word_sets: &[WordSet]) -> Vec<String> {
        let mut unmatched: Vec<&str> = self.placed_words.iter().map(|pw| pw.word.as_str()).collect();
        let mut missing = Vec::new();
        for word in word_sets.iter().flat_map(WordSet::normalized_words) {
            match unmatched.iter().position(|placed| *placed == word) {
                Some(idx) => {
                    unmatched.swap_remove(idx);
                }
                None => missing.push(word),
            }
        }
        missing
    }
}

/// Builds crossword puzzles of a fixed size.
#[derive(Debug, Clone, Copy)]
pub struct CrosswordGenerator {
    grid_size: usize,
    max_attempts: usize,
}

impl Default for CrosswordGenerator {
    fn default() -> Self {
        Self::new(CROSSWORD_GRID_SIZE)
    }
}

impl CrosswordGenerator {
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            max_attempts: CROSSWORD_MAX_ATTEMPTS,
        }
    }

    /// Override the per-word attempt budget.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Place every word set in input order.
    ///
    /// The main word of a set goes anywhere it fits. Each anagram must share
    /// at least one letter with the grid, except when nothing has been placed
    /// at all yet. Words that find no spot are dropped.
    pub fn generate<R: Rng>(&self, rng: &mut R, word_sets: &[WordSet]) -> CrosswordPuzzle {
        let mut grid = Grid::new(self.grid_size);
        let mut placer = Placer::new();
        let mut placed_words = Vec::new();
        let mut available = BTreeSet::new();

        for set in word_sets {
            let main = normalize(&set.main);
            available.extend(main.chars().filter(|&ch| is_grid_letter(ch)));

            if let Placement::Placed(pw) = placer.place(
                rng,
                &mut grid,
                &main,
                &CROSSWORD_DIRECTIONS,
                &CrosswordRule,
                self.max_attempts,
            ) {
                placed_words.push(pw);
            }

            for anagram in set.anagrams.iter().map(|a| normalize(a)) {
                let rule = Intersecting {
                    inner: CrosswordRule,
                    required: !placed_words.is_empty(),
                };
                match placer.place(
                    rng,
                    &mut grid,
                    &anagram,
                    &CROSSWORD_DIRECTIONS,
                    &rule,
                    self.max_attempts,
                ) {
                    Placement::Placed(pw) => placed_words.push(pw),
                    Placement::NotPlaced => debug!("anagram {:?} of {:?} dropped", anagram, main),
                }
            }
        }

        info!(
            "crossword {}x{}: placed {} words from {} sets",
            self.grid_size,
            self.grid_size,
            placed_words.len(),
            word_sets.len()
        );
        CrosswordPuzzle {
            grid,
            placed_words,
            available_letters: available.into_iter().collect(),
        }
    }
}

/// Generate a crossword with the default attempt budget.
pub fn generate_crossword<R: Rng>(
    rng: &mut R,
    word_sets: &[WordSet],
    grid_size: usize,
) -> CrosswordPuzzle {
    CrosswordGenerator::new(grid_size).generate(rng, word_sets)
}
