#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use serde_json::json;
#[cfg(feature = "std")]
use wordgrid::{
    wordlists, CrosswordGenerator, WordSearchGenerator, CROSSWORD_GRID_SIZE, WORD_SEARCH_GRID_SIZE,
};

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <runs>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let runs: usize = args[2].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let word_sets = wordlists::default_word_sets();
    let words = wordlists::WORD_SEARCH_WORDS;
    let crossword = CrosswordGenerator::new(CROSSWORD_GRID_SIZE);
    let word_search = WordSearchGenerator::new(WORD_SEARCH_GRID_SIZE);

    let crossword_requested: usize = word_sets.iter().map(|s| 1 + s.anagrams.len()).sum();
    let mut crossword_placed = 0usize;
    let mut search_placed = 0usize;
    for _ in 0..runs {
        crossword_placed += crossword.generate(&mut rng, &word_sets).placed_words.len();
        search_placed += word_search.generate(&mut rng, words).placed_words.len();
    }

    let rate = |placed: usize, per_run: usize| {
        let total = per_run * runs;
        if total == 0 {
            0.0
        } else {
            placed as f64 / total as f64
        }
    };

    let result = json!({
        "seed": seed,
        "runs": runs,
        "crossword": {
            "requested": crossword_requested * runs,
            "placed": crossword_placed,
            "rate": rate(crossword_placed, crossword_requested),
        },
        "word_search": {
            "requested": words.len() * runs,
            "placed": search_placed,
            "rate": rate(search_placed, words.len()),
        },
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
