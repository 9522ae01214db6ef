//! Placement rules deciding whether a word fits at a given start and direction.

use crate::direction::Direction;
use crate::grid::{is_grid_letter, Grid};

/// A mode-specific check run before any letter is written.
pub trait PlacementRule {
    /// Returns `true` if `letters` may be written from `(row, col)` along `dir`.
    fn can_place(&self, grid: &Grid, letters: &[char], row: usize, col: usize, dir: Direction) -> bool;
}

/// Shared part of every rule: the word is non-empty, made of `A`..=`Z`, fits
/// inside the grid and agrees with every letter already on its path.
pub fn fits_without_conflict(
    grid: &Grid,
    letters: &[char],
    row: usize,
    col: usize,
    dir: Direction,
) -> bool {
    if letters.iter().any(|&ch| !is_grid_letter(ch)) {
        return false;
    }
    match grid.path(row, col, dir, letters.len()) {
        Some(path) => path
            .zip(letters)
            .all(|((r, c), &ch)| grid.letter(r, c).map_or(true, |existing| existing == ch)),
        None => false,
    }
}

/// Word-search rule: letters may be shared freely, no adjacency constraint.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordSearchRule;

impl PlacementRule for WordSearchRule {
    fn can_place(&self, grid: &Grid, letters: &[char], row: usize, col: usize, dir: Direction) -> bool {
        fits_without_conflict(grid, letters, row, col, dir)
    }
}

/// Crossword rule: words may cross but never run alongside or end against
/// another word.
///
/// For every letter, the two neighbours perpendicular to `dir` must be empty
/// or owned by the same word that currently owns the target cell. The cells
/// just before the first letter and just after the last one must be empty.
/// At least one letter must land on an empty cell, so a word is never laid
/// on top of an identical word already on the grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrosswordRule;

impl PlacementRule for CrosswordRule {
    fn can_place(&self, grid: &Grid, letters: &[char], row: usize, col: usize, dir: Direction) -> bool {
        if !fits_without_conflict(grid, letters, row, col, dir) {
            return false;
        }
        let Some(path) = grid.path(row, col, dir, letters.len()) else {
            return false;
        };
        let (dr, dc) = dir.delta();
        // perpendicular offsets
        let sides = if dir.is_horizontal() {
            [(-1, 0), (1, 0)]
        } else {
            [(0, -1), (0, 1)]
        };
        let mut adds_letter = false;
        for (r, c) in path {
            let target = grid.get(r, c).ok();
            adds_letter |= target.map_or(false, |cell| cell.is_empty());
            let owner = target.and_then(|cell| cell.owner);
            for (sr, sc) in sides {
                if let Some(side) = grid.neighbor(r, c, sr, sc) {
                    if !side.is_empty() && side.owner != owner {
                        return false;
                    }
                }
            }
        }
        if !adds_letter {
            return false;
        }
        let len = letters.len() as isize;
        let before = grid.neighbor(row, col, -dr, -dc);
        let after = grid.neighbor(row, col, dr * len, dc * len);
        before.map_or(true, |cell| cell.is_empty()) && after.map_or(true, |cell| cell.is_empty())
    }
}

/// Wraps a rule and additionally demands at least one shared letter with
/// words already on the grid, unless `required` is off.
#[derive(Debug, Clone, Copy)]
pub struct Intersecting<P> {
    pub inner: P,
    pub required: bool,
}

impl<P: PlacementRule> PlacementRule for Intersecting<P> {
    fn can_place(&self, grid: &Grid, letters: &[char], row: usize, col: usize, dir: Direction) -> bool {
        self.inner.can_place(grid, letters, row, col, dir)
            && (!self.required || grid.intersections(letters, row, col, dir) > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn conflict_is_rejected_by_both_rules() {
        let mut grid = Grid::new(6);
        grid.write_word(&chars("DOG"), 2, 0, Direction::Right, 0).unwrap();
        let cat = chars("CAT");
        assert!(!WordSearchRule.can_place(&grid, &cat, 0, 1, Direction::Down));
        assert!(!CrosswordRule.can_place(&grid, &cat, 0, 1, Direction::Down));
        let god = chars("GOD");
        assert!(WordSearchRule.can_place(&grid, &god, 2, 2, Direction::Left));
    }

    #[test]
    fn malformed_words_never_fit() {
        let grid = Grid::new(5);
        assert!(!WordSearchRule.can_place(&grid, &[], 0, 0, Direction::Right));
        assert!(!WordSearchRule.can_place(&grid, &chars("A B"), 0, 0, Direction::Right));
        assert!(!CrosswordRule.can_place(&grid, &chars("ABCDEF"), 0, 0, Direction::Right));
    }

    #[test]
    fn crossword_allows_crossing() {
        let mut grid = Grid::new(5);
        grid.write_word(&chars("CAT"), 1, 0, Direction::Right, 0).unwrap();
        // ACT going down through the A of CAT
        assert!(CrosswordRule.can_place(&grid, &chars("ACT"), 1, 1, Direction::Down));
        // TAC going down with its A on the A of CAT
        assert!(CrosswordRule.can_place(&grid, &chars("TAC"), 0, 1, Direction::Down));
    }

    #[test]
    fn crossword_rejects_parallel_neighbours() {
        let mut grid = Grid::new(5);
        grid.write_word(&chars("CAT"), 1, 0, Direction::Right, 0).unwrap();
        assert!(!CrosswordRule.can_place(&grid, &chars("DOG"), 2, 0, Direction::Right));
        assert!(!CrosswordRule.can_place(&grid, &chars("DOG"), 0, 1, Direction::Right));
        // word search does not care
        assert!(WordSearchRule.can_place(&grid, &chars("DOG"), 2, 0, Direction::Right));
    }

    #[test]
    fn crossword_rejects_end_to_end_contact() {
        let mut grid = Grid::new(6);
        grid.write_word(&chars("CAT"), 0, 0, Direction::Right, 0).unwrap();
        // vertical word starting right under the C
        assert!(!CrosswordRule.can_place(&grid, &chars("DOG"), 1, 0, Direction::Down));
        // horizontal word continuing the row after the T
        assert!(!CrosswordRule.can_place(&grid, &chars("DOG"), 0, 3, Direction::Right));
        assert!(CrosswordRule.can_place(&grid, &chars("DOG"), 3, 3, Direction::Right));
    }

    #[test]
    fn crossword_rejects_exact_overlay() {
        let mut grid = Grid::new(7);
        grid.write_word(&chars("RATES"), 2, 1, Direction::Right, 0).unwrap();
        assert!(!CrosswordRule.can_place(&grid, &chars("RATES"), 2, 1, Direction::Right));
        // partial overlay inside the same run is blocked too
        assert!(!CrosswordRule.can_place(&grid, &chars("ATE"), 2, 2, Direction::Right));
        // word search keeps sharing letters freely
        assert!(WordSearchRule.can_place(&grid, &chars("RATES"), 2, 1, Direction::Right));
    }

    #[test]
    fn lowercase_and_caseless_letters_never_fit() {
        let grid = Grid::new(5);
        assert!(!WordSearchRule.can_place(&grid, &chars("cat"), 0, 0, Direction::Right));
        assert!(!WordSearchRule.can_place(&grid, &chars("中文字"), 0, 0, Direction::Right));
        assert!(!CrosswordRule.can_place(&grid, &chars("ªºª"), 0, 0, Direction::Right));
    }

    #[test]
    fn intersecting_requires_a_shared_letter() {
        let mut grid = Grid::new(5);
        grid.write_word(&chars("CAT"), 1, 0, Direction::Right, 0).unwrap();
        let required = Intersecting {
            inner: CrosswordRule,
            required: true,
        };
        assert!(required.can_place(&grid, &chars("ACT"), 1, 1, Direction::Down));
        assert!(!required.can_place(&grid, &chars("ACT"), 3, 0, Direction::Right));
        let relaxed = Intersecting {
            inner: CrosswordRule,
            required: false,
        };
        assert!(relaxed.can_place(&grid, &chars("ACT"), 3, 0, Direction::Right));
    }
}
