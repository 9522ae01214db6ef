//! Bounded random placement shared by both generators.

use alloc::string::String;
use alloc::vec::Vec;
use log::{debug, trace};
use rand::Rng;

use crate::common::{Placement, WordId};
use crate::direction::Direction;
use crate::grid::Grid;
use crate::validator::PlacementRule;
use crate::word::PlacedWord;

/// Samples random starts and directions until a rule accepts one.
///
/// Holds the id counter for one generation call. Ids start at 0 and only
/// advance when a word is actually written.
#[derive(Debug, Default)]
pub struct Placer {
    next_id: WordId,
}

impl Placer {
    pub fn new() -> Self {
        Self { next_id: 0 }
    }

    /// Id the next successful placement will receive.
    pub fn next_id(&self) -> WordId {
        self.next_id
    }

    /// Try up to `max_attempts` random `(row, col, direction)` triples.
    ///
    /// On the first accepted triple the word is written into `grid` and
    /// returned. Otherwise the grid is left untouched and the word is dropped.
    pub fn place<R: Rng, P: PlacementRule>(
        &mut self,
        rng: &mut R,
        grid: &mut Grid,
        word: &str,
        directions: &[Direction],
        rule: &P,
        max_attempts: usize,
    ) -> Placement {
        let size = grid.size();
        if size == 0 || directions.is_empty() {
            debug!("dropping {:?}: nothing to sample from", word);
            return Placement::NotPlaced;
        }
        let letters: Vec<char> = word.chars().collect();
        for attempt in 0..max_attempts {
            let row = rng.random_range(0..size);
            let col = rng.random_range(0..size);
            let dir = directions[rng.random_range(0..directions.len())];
            if !rule.can_place(grid, &letters, row, col, dir) {
                continue;
            }
            let id = self.next_id;
            match grid.write_word(&letters, row, col, dir, id) {
                Ok(cells) => {
                    self.next_id += 1;
                    trace!(
                        "placed {:?} as #{} at ({}, {}) {:?} after {} attempts",
                        word,
                        id,
                        row,
                        col,
                        dir,
                        attempt + 1
                    );
                    return Placement::Placed(PlacedWord {
                        word: String::from(word),
                        id,
                        direction: dir,
                        cells,
                    });
                }
                Err(e) => {
                    debug!("rule accepted {:?} but write failed: {}", word, e);
                    return Placement::NotPlaced;
                }
            }
        }
        debug!("dropping {:?}: no fit within {} attempts", word, max_attempts);
        Placement::NotPlaced
    }
}
