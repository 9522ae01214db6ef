//! Grid sizes and attempt budgets used by the generators.

/// Side length of the regular crossword grid.
pub const CROSSWORD_GRID_SIZE: usize = 15;
/// Side length of the crossword grid used for the daily puzzle.
pub const DAILY_CROSSWORD_GRID_SIZE: usize = 18;
/// Side length of the word-search grid.
pub const WORD_SEARCH_GRID_SIZE: usize = 15;

/// Random trials per word before a crossword word is dropped.
pub const CROSSWORD_MAX_ATTEMPTS: usize = 200;
/// Random trials per word before a word-search word is dropped.
pub const WORD_SEARCH_MAX_ATTEMPTS: usize = 100;

/// Letters used to fill the empty cells of a word search.
pub const NOISE_ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
