//! Step directions a word can be written in.

/// A unit step on the grid, expressed as a `(d_row, d_col)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Right,
    Down,
    DownRight,
    DownLeft,
    Left,
    Up,
    UpLeft,
    UpRight,
}

/// Directions allowed in crossword mode.
pub const CROSSWORD_DIRECTIONS: [Direction; 2] = [Direction::Right, Direction::Down];

/// Directions allowed in word-search mode, orthogonal and diagonal in both senses.
pub const WORD_SEARCH_DIRECTIONS: [Direction; 8] = [
    Direction::Right,
    Direction::Down,
    Direction::DownRight,
    Direction::DownLeft,
    Direction::Left,
    Direction::Up,
    Direction::UpLeft,
    Direction::UpRight,
];

impl Direction {
    /// Row and column increments for one step.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
        }
    }

    /// Row-only movement is zero.
    pub const fn is_horizontal(self) -> bool {
        self.delta().0 == 0
    }

    /// Column-only movement is zero.
    pub const fn is_vertical(self) -> bool {
        self.delta().1 == 0
    }

    /// The opposite direction.
    pub const fn reversed(self) -> Self {
        match self {
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::DownRight => Direction::UpLeft,
            Direction::DownLeft => Direction::UpRight,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::UpLeft => Direction::DownRight,
            Direction::UpRight => Direction::DownLeft,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas_are_unit_steps() {
        for dir in WORD_SEARCH_DIRECTIONS {
            let (dr, dc) = dir.delta();
            assert!(dr.abs() <= 1 && dc.abs() <= 1);
            assert!((dr, dc) != (0, 0));
            let (rr, rc) = dir.reversed().delta();
            assert_eq!((rr, rc), (-dr, -dc));
        }
    }

    #[test]
    fn crossword_directions_are_orthogonal() {
        assert!(Direction::Right.is_horizontal());
        assert!(Direction::Down.is_vertical());
        assert!(CROSSWORD_DIRECTIONS
            .iter()
            .all(|d| d.is_horizontal() || d.is_vertical()));
    }
}
