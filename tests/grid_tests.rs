use rand::rngs::SmallRng;
use rand::SeedableRng;
use wordgrid::{Direction, Grid, GridError, NOISE_ALPHABET};

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

#[test]
fn new_grid_is_empty() {
    let grid = Grid::new(4);
    assert_eq!(grid.size(), 4);
    assert_eq!(grid.filled(), 0);
    assert!(!grid.is_full());
    assert_eq!(grid.rows().count(), 4);
    assert!(grid.iter().all(|(_, cell)| cell.is_empty() && cell.owner.is_none()));
}

#[test]
fn write_word_in_every_direction() {
    for dir in wordgrid::WORD_SEARCH_DIRECTIONS {
        let mut grid = Grid::new(5);
        let cells = grid.write_word(&chars("ABC"), 2, 2, dir, 3).unwrap();
        let (dr, dc) = dir.delta();
        for (i, &(r, c)) in cells.iter().enumerate() {
            assert_eq!(r as isize, 2 + dr * i as isize);
            assert_eq!(c as isize, 2 + dc * i as isize);
        }
        assert_eq!(grid.letter(cells[2].0, cells[2].1), Some('C'));
        assert_eq!(grid.filled(), 3);
    }
}

#[test]
fn write_word_out_of_bounds_fails() {
    let mut grid = Grid::new(3);
    assert_eq!(
        grid.write_word(&chars("ABCD"), 0, 0, Direction::Right, 0),
        Err(GridError::IndexOutOfBounds { row: 0, col: 0 })
    );
    assert_eq!(
        grid.write_word(&chars("A1"), 0, 0, Direction::Right, 0),
        Err(GridError::InvalidLetter('1'))
    );
    assert_eq!(grid.filled(), 0);
}

#[test]
fn crossing_cell_takes_last_owner() {
    let mut grid = Grid::new(5);
    grid.write_word(&chars("CAT"), 1, 0, Direction::Right, 0).unwrap();
    grid.write_word(&chars("ACT"), 1, 1, Direction::Down, 1).unwrap();
    assert_eq!(grid.get(1, 1).unwrap().owner, Some(1));
    assert_eq!(grid.get(1, 0).unwrap().owner, Some(0));
    assert_eq!(grid.filled(), 5);
}

#[test]
fn fill_empty_keeps_existing_letters() {
    let mut grid = Grid::new(6);
    grid.write_word(&chars("WORD"), 0, 0, Direction::Down, 0).unwrap();
    let mut rng = SmallRng::seed_from_u64(17);
    grid.fill_empty(&mut rng, NOISE_ALPHABET);
    assert!(grid.is_full());
    assert_eq!(grid.letter(3, 0), Some('D'));
    assert_eq!(grid.get(0, 1).unwrap().owner, None);
}

#[test]
fn display_renders_rows() {
    let mut grid = Grid::new(3);
    grid.write_word(&chars("HI"), 1, 1, Direction::Right, 0).unwrap();
    assert_eq!(grid.to_string(), ". . . \n. H I \n. . . ");
}

#[test]
fn neighbor_handles_edges() {
    let grid = Grid::new(2);
    assert!(grid.neighbor(0, 0, -1, 0).is_none());
    assert!(grid.neighbor(1, 1, 0, 1).is_none());
    assert!(grid.neighbor(0, 0, 1, 1).is_some());
}

#[test]
fn only_uppercase_ascii_is_stored() {
    let mut grid = Grid::new(3);
    assert_eq!(grid.set(0, 0, 'a', None), Err(GridError::InvalidLetter('a')));
    assert_eq!(grid.set(0, 0, 'É', None), Err(GridError::InvalidLetter('É')));
    assert_eq!(
        grid.write_word(&chars("中文字"), 0, 0, Direction::Right, 0),
        Err(GridError::InvalidLetter('中'))
    );
    assert_eq!(grid.filled(), 0);
    assert_eq!(grid.set(0, 0, 'Z', None), Ok(()));
}
