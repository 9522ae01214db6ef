//! Square letter grid stored as one row-major buffer.
//!
//! Cells are addressed by `(row, col)` and live at `row * size + col`. The
//! shape is fixed at construction; only cell contents change afterwards.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::common::{GridError, WordId};
use crate::direction::Direction;

/// Whether `ch` may be stored in a cell: uppercase `A`..=`Z` only.
#[inline]
pub fn is_grid_letter(ch: char) -> bool {
    ch.is_ascii_uppercase()
}

/// One square of the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// Uppercase letter, or `None` while the cell is empty.
    pub letter: Option<char>,
    /// Word that last wrote this cell. Noise letters have no owner.
    pub owner: Option<WordId>,
}

impl Cell {
    /// Returns `true` if no letter has been written.
    pub fn is_empty(&self) -> bool {
        self.letter.is_none()
    }
}

/// A `size × size` matrix of [`Cell`]s.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawGrid")
)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

/// Unchecked wire form of a [`Grid`]; validated on the way in.
#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct RawGrid {
    size: usize,
    cells: Vec<Cell>,
}

#[cfg(feature = "std")]
impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        Grid::from_cells(raw.size, raw.cells)
    }
}

impl Grid {
    /// Create an empty grid.
    pub fn new(size: usize) -> Self {
        Grid {
            size,
            cells: vec![Cell::default(); size * size],
        }
    }

    /// Rebuild a grid from a row-major cell buffer, checking its shape and
    /// that every stored letter is a grid letter.
    pub fn from_cells(size: usize, cells: Vec<Cell>) -> Result<Self, GridError> {
        if size.checked_mul(size) != Some(cells.len()) {
            return Err(GridError::ShapeMismatch {
                size,
                cells: cells.len(),
            });
        }
        if let Some(bad) = cells.iter().filter_map(|c| c.letter).find(|&ch| !is_grid_letter(ch)) {
            return Err(GridError::InvalidLetter(bad));
        }
        Ok(Grid { size, cells })
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `(row, col)` addresses a cell of this grid.
    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Cell at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<&Cell, GridError> {
        self.check_bounds(row, col)?;
        Ok(&self.cells[row * self.size + col])
    }

    /// Letter at `(row, col)`, `None` when empty or out of bounds.
    pub fn letter(&self, row: usize, col: usize) -> Option<char> {
        self.get(row, col).ok().and_then(|cell| cell.letter)
    }

    /// Overwrite the cell at `(row, col)`.
    pub fn set(
        &mut self,
        row: usize,
        col: usize,
        letter: char,
        owner: Option<WordId>,
    ) -> Result<(), GridError> {
        self.check_bounds(row, col)?;
        if !is_grid_letter(letter) {
            return Err(GridError::InvalidLetter(letter));
        }
        let idx = row * self.size + col;
        self.cells[idx] = Cell {
            letter: Some(letter),
            owner,
        };
        Ok(())
    }

    /// Cell one step away from `(row, col)` by `(d_row, d_col)`, if inside the grid.
    pub fn neighbor(&self, row: usize, col: usize, d_row: isize, d_col: isize) -> Option<&Cell> {
        let r = row.checked_add_signed(d_row)?;
        let c = col.checked_add_signed(d_col)?;
        self.get(r, c).ok()
    }

    /// Cells covered by a run of `len` letters starting at `(row, col)`.
    ///
    /// Returns `None` for an empty run or when the first or last cell falls
    /// outside the grid. Runs are straight, so every cell in between is
    /// inside as well.
    pub fn path(&self, row: usize, col: usize, dir: Direction, len: usize) -> Option<Path> {
        if len == 0 || !self.in_bounds(row, col) {
            return None;
        }
        let (dr, dc) = dir.delta();
        let steps = isize::try_from(len - 1).ok()?;
        let last_row = row.checked_add_signed(steps.checked_mul(dr)?)?;
        let last_col = col.checked_add_signed(steps.checked_mul(dc)?)?;
        if !self.in_bounds(last_row, last_col) {
            return None;
        }
        Some(Path {
            row: row as isize,
            col: col as isize,
            dr,
            dc,
            remaining: len,
        })
    }

    /// Number of cells along the run that already hold the matching letter.
    pub fn intersections(&self, letters: &[char], row: usize, col: usize, dir: Direction) -> usize {
        match self.path(row, col, dir, letters.len()) {
            Some(path) => path
                .zip(letters)
                .filter(|&((r, c), &ch)| self.letter(r, c) == Some(ch))
                .count(),
            None => 0,
        }
    }

    /// Write `letters` along a run, tagging every cell with `owner`.
    /// Returns the covered cells in writing order.
    pub fn write_word(
        &mut self,
        letters: &[char],
        row: usize,
        col: usize,
        dir: Direction,
        owner: WordId,
    ) -> Result<Vec<(usize, usize)>, GridError> {
        let path = self
            .path(row, col, dir, letters.len())
            .ok_or(GridError::IndexOutOfBounds { row, col })?;
        if let Some(&bad) = letters.iter().find(|&&ch| !is_grid_letter(ch)) {
            return Err(GridError::InvalidLetter(bad));
        }
        let mut cells = Vec::with_capacity(letters.len());
        for ((r, c), &ch) in path.zip(letters) {
            self.set(r, c, ch, Some(owner))?;
            cells.push((r, c));
        }
        Ok(cells)
    }

    /// Give every empty cell a random letter from `alphabet`.
    pub fn fill_empty<R: Rng>(&mut self, rng: &mut R, alphabet: &[u8]) {
        if alphabet.is_empty() {
            return;
        }
        for cell in self.cells.iter_mut().filter(|c| c.is_empty()) {
            let idx = rng.random_range(0..alphabet.len());
            cell.letter = Some(alphabet[idx] as char);
        }
    }

    /// Returns `true` when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of non-empty cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }

    /// All cells with their coordinates, row by row.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &Cell)> {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| ((i / size, i % size), cell))
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), GridError> {
        if self.in_bounds(row, col) {
            Ok(())
        } else {
            Err(GridError::IndexOutOfBounds { row, col })
        }
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}>:", self.size)?;
        writeln!(f, "{}", self)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().enumerate() {
            for cell in row {
                write!(f, "{} ", cell.letter.unwrap_or('.'))?;
            }
            if r + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the cells of a straight run, see [`Grid::path`].
#[derive(Debug, Clone, Copy)]
pub struct Path {
    row: isize,
    col: isize,
    dr: isize,
    dc: isize,
    remaining: usize,
}

impl Iterator for Path {
    type Item = (usize, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let cell = (self.row as usize, self.col as usize);
        self.remaining -= 1;
        self.row += self.dr;
        self.col += self.dc;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Path {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn path_rejects_runs_leaving_the_grid() {
        let grid = Grid::new(5);
        assert!(grid.path(0, 0, Direction::Right, 5).is_some());
        assert!(grid.path(0, 1, Direction::Right, 5).is_none());
        assert!(grid.path(0, 0, Direction::Up, 2).is_none());
        assert!(grid.path(4, 4, Direction::UpLeft, 5).is_some());
        assert!(grid.path(2, 2, Direction::Down, 0).is_none());
        assert!(grid.path(5, 0, Direction::Right, 1).is_none());
    }

    #[test]
    fn path_walks_in_writing_order() {
        let grid = Grid::new(4);
        let cells: Vec<_> = grid.path(3, 0, Direction::UpRight, 3).unwrap().collect();
        assert_eq!(cells, [(3, 0), (2, 1), (1, 2)]);
    }

    #[test]
    fn write_and_count_intersections() {
        let mut grid = Grid::new(5);
        let cat: Vec<char> = "CAT".chars().collect();
        let cells = grid.write_word(&cat, 1, 0, Direction::Right, 0).unwrap();
        assert_eq!(cells, [(1, 0), (1, 1), (1, 2)]);
        assert_eq!(grid.get(1, 1).unwrap().owner, Some(0));

        let act: Vec<char> = "ACT".chars().collect();
        assert_eq!(grid.intersections(&act, 1, 1, Direction::Down), 1);
        assert_eq!(grid.intersections(&act, 0, 4, Direction::Down), 0);
    }

    #[test]
    fn set_rejects_bad_input() {
        let mut grid = Grid::new(3);
        assert_eq!(
            grid.set(3, 0, 'A', None),
            Err(GridError::IndexOutOfBounds { row: 3, col: 0 })
        );
        assert_eq!(grid.set(0, 0, '7', None), Err(GridError::InvalidLetter('7')));
        assert_eq!(grid.set(0, 0, 'a', None), Err(GridError::InvalidLetter('a')));
        assert_eq!(grid.set(0, 0, '中', None), Err(GridError::InvalidLetter('中')));
        assert_eq!(grid.filled(), 0);
    }

    #[test]
    fn from_cells_checks_shape_and_letters() {
        assert_eq!(
            Grid::from_cells(3, vec![Cell::default(); 4]),
            Err(GridError::ShapeMismatch { size: 3, cells: 4 })
        );
        let mut cells = vec![Cell::default(); 4];
        cells[2].letter = Some('q');
        assert_eq!(Grid::from_cells(2, cells.clone()), Err(GridError::InvalidLetter('q')));
        cells[2].letter = Some('Q');
        let grid = Grid::from_cells(2, cells).unwrap();
        assert_eq!(grid.letter(1, 0), Some('Q'));
    }

    #[test]
    fn zero_sized_grid_is_full_and_renders_empty() {
        let grid = Grid::new(0);
        assert!(grid.is_full());
        assert_eq!(grid.rows().count(), 0);
    }
}
