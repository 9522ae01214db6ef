#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use wordgrid::{
    init_logging, snapshot, wordlists, CrosswordGenerator, CrosswordPuzzle, WordSearchGenerator,
    WordSearchPuzzle, WordSet, CROSSWORD_GRID_SIZE, CROSSWORD_MAX_ATTEMPTS,
    DAILY_CROSSWORD_GRID_SIZE, WORD_SEARCH_GRID_SIZE, WORD_SEARCH_MAX_ATTEMPTS,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Build a crossword from main words and their anagrams.
    Crossword {
        /// Word sets as MAIN:ANAGRAM,ANAGRAM. Defaults to the built-in sets.
        sets: Vec<String>,
        #[arg(long, help = "Grid side length (15, or 18 with --daily)")]
        size: Option<usize>,
        #[arg(long, help = "Use the built-in word set for this day number")]
        daily: Option<u64>,
        #[arg(long, default_value_t = CROSSWORD_MAX_ATTEMPTS)]
        attempts: usize,
        #[arg(long, help = "Fix RNG seed for reproducible puzzles (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        #[arg(long, help = "Also write a binary snapshot of the puzzle to this file")]
        save: Option<PathBuf>,
    },
    /// Build a word search from a list of words.
    WordSearch {
        /// Words to hide. Defaults to the built-in list.
        words: Vec<String>,
        #[arg(long, default_value_t = WORD_SEARCH_GRID_SIZE)]
        size: usize,
        #[arg(long, default_value_t = WORD_SEARCH_MAX_ATTEMPTS)]
        attempts: usize,
        #[arg(long, help = "Fix RNG seed for reproducible puzzles (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        #[arg(long, help = "Also write a binary snapshot of the puzzle to this file")]
        save: Option<PathBuf>,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Crossword {
            sets,
            size,
            daily,
            attempts,
            seed,
            format,
            save,
        } => {
            let word_sets = match daily {
                Some(day) => vec![wordlists::daily_word_set(day)],
                None if sets.is_empty() => wordlists::default_word_sets(),
                None => sets
                    .iter()
                    .map(|s| s.parse::<WordSet>())
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|e| anyhow::anyhow!(e))?,
            };
            let size = size.unwrap_or(if daily.is_some() {
                DAILY_CROSSWORD_GRID_SIZE
            } else {
                CROSSWORD_GRID_SIZE
            });
            let mut rng = seeded_rng(seed);
            let puzzle = CrosswordGenerator::new(size)
                .with_max_attempts(attempts)
                .generate(&mut rng, &word_sets);
            if let Some(path) = save {
                snapshot::save(&puzzle, &path)?;
                log::info!("snapshot written to {}", path.display());
            }
            match format {
                OutputFormat::Text => print_crossword(&puzzle, &word_sets),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&puzzle)?),
            }
        }
        Commands::WordSearch {
            words,
            size,
            attempts,
            seed,
            format,
            save,
        } => {
            let words: Vec<String> = if words.is_empty() {
                wordlists::WORD_SEARCH_WORDS.iter().map(|w| w.to_string()).collect()
            } else {
                words
            };
            let mut rng = seeded_rng(seed);
            let puzzle = WordSearchGenerator::new(size)
                .with_max_attempts(attempts)
                .generate(&mut rng, &words);
            if let Some(path) = save {
                snapshot::save(&puzzle, &path)?;
                log::info!("snapshot written to {}", path.display());
            }
            match format {
                OutputFormat::Text => print_word_search(&puzzle, &words),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&puzzle)?),
            }
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            log::info!("Using fixed seed: {} (puzzle will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn print_crossword(puzzle: &CrosswordPuzzle, word_sets: &[WordSet]) {
    println!("{}", puzzle.grid);
    println!();
    for pw in &puzzle.placed_words {
        let (r, c) = pw.start().unwrap_or_default();
        println!("#{:<3} {:<10} ({}, {}) {:?}", pw.id, pw.word, r, c, pw.direction);
    }
    let letters: String = puzzle.available_letters.iter().collect();
    println!("Letters: {}", letters);
    let missing = puzzle.missing_words(word_sets);
    if !missing.is_empty() {
        println!("Not placed: {}", missing.join(", "));
    }
}

#[cfg(feature = "std")]
fn print_word_search(puzzle: &WordSearchPuzzle, words: &[String]) {
    println!("{}", puzzle.grid);
    println!();
    for pw in &puzzle.placed_words {
        let (r, c) = pw.start().unwrap_or_default();
        println!("{:<12} ({}, {}) {:?}", pw.word, r, c, pw.direction);
    }
    let missing = puzzle.missing_words(words);
    if !missing.is_empty() {
        println!("Not placed: {}", missing.join(", "));
    }
}
