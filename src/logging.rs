#![cfg(feature = "std")]

use std::env;
use std::fmt;
use log::{self, Level, LevelFilter, Metadata, Record};

/// Environment variable holding the log level (`error`..`trace`, or `off`).
pub const LOG_ENV: &str = "WORDGRID_LOG";

/// Writes `LEVEL [area] - message` lines to stderr, where `area` is the
/// generator module that logged (`crossword`, `word_search`, `placer`, ...).
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", format_line(record.level(), record.target(), record.args()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Short area name for a log target: the crate prefix is dropped, so
/// `wordgrid::placer` becomes `placer` and the crate root becomes `wordgrid`.
fn area(target: &str) -> &str {
    match target.strip_prefix("wordgrid::") {
        Some(rest) if !rest.is_empty() => rest,
        _ => target,
    }
}

fn format_line(level: Level, target: &str, args: impl fmt::Display) -> String {
    format!("{:<5} [{}] - {}", level, area(target), args)
}

/// Initialize logging with a level taken from `WORDGRID_LOG`.
/// Defaults to `info` if the variable is not set or invalid.
/// Output goes to stderr so generated puzzles on stdout stay parseable.
pub fn init_logging() {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
