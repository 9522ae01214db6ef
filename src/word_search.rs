//! Word-search generation: words in eight directions, noise everywhere else.

use alloc::string::String;
use alloc::vec::Vec;
use log::info;
use rand::Rng;

use crate::common::Placement;
use crate::config::{NOISE_ALPHABET, WORD_SEARCH_GRID_SIZE, WORD_SEARCH_MAX_ATTEMPTS};
use crate::direction::WORD_SEARCH_DIRECTIONS;
use crate::grid::Grid;
use crate::placer::Placer;
use crate::validator::WordSearchRule;
use crate::word::{normalize, PlacedWord};

/// Result of a word-search generation. Every grid cell holds a letter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct WordSearchPuzzle {
    pub grid: Grid,
    pub placed_words: Vec<PlacedWord>,
}

impl WordSearchPuzzle {
    /// Placed word traced by `selection`, read forwards or backwards.
    pub fn find_selection(&self, selection: &[(usize, usize)]) -> Option<&PlacedWord> {
        self.placed_words.iter().find(|pw| pw.matches_cells(selection))
    }

    /// Letters under `selection`, in selection order.
    pub fn read(&self, selection: &[(usize, usize)]) -> String {
        selection
            .iter()
            .filter_map(|&(r, c)| self.grid.letter(r, c))
            .collect()
    }

    /// Requested words that were not placed. The caller decides what to do
    /// with them; the puzzle itself keeps whatever list it was given.
    pub fn missing_words<S: AsRef<str>>(&self, requested: &[S]) -> Vec<String> {
        let mut unmatched: Vec<&str> = self.placed_words.iter().map(|pw| pw.word.as_str()).collect();
        let mut missing = Vec::new();
        for word in requested.iter().map(|w| normalize(w.as_ref())) {
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

/// Builds word-search puzzles of a fixed size.
#[derive(Debug, Clone, Copy)]
pub struct WordSearchGenerator {
    grid_size: usize,
    max_attempts: usize,
}

impl Default for WordSearchGenerator {
    fn default() -> Self {
        Self::new(WORD_SEARCH_GRID_SIZE)
    }
}

impl WordSearchGenerator {
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            max_attempts: WORD_SEARCH_MAX_ATTEMPTS,
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

    /// Place `words` longest first, then fill the remaining cells with noise.
    pub fn generate<R: Rng, S: AsRef<str>>(&self, rng: &mut R, words: &[S]) -> WordSearchPuzzle {
        let mut sorted: Vec<String> = words.iter().map(|w| normalize(w.as_ref())).collect();
        // stable, so equal lengths keep input order
        sorted.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

        let mut grid = Grid::new(self.grid_size);
        let mut placer = Placer::new();
        let mut placed_words = Vec::new();
        for word in &sorted {
            if let Placement::Placed(pw) = placer.place(
                rng,
                &mut grid,
                word,
                &WORD_SEARCH_DIRECTIONS,
                &WordSearchRule,
                self.max_attempts,
            ) {
                placed_words.push(pw);
            }
        }
        grid.fill_empty(rng, NOISE_ALPHABET);

        info!(
            "word search {}x{}: placed {} of {} words",
            self.grid_size,
            self.grid_size,
            placed_words.len(),
            words.len()
        );
        WordSearchPuzzle { grid, placed_words }
    }
}

/// Generate a word search with the default attempt budget.
pub fn generate_word_search<R: Rng, S: AsRef<str>>(
    rng: &mut R,
    words: &[S],
    grid_size: usize,
) -> WordSearchPuzzle {
    WordSearchGenerator::new(grid_size).generate(rng, words)
}
