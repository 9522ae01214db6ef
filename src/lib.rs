#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod common;
mod config;
mod crossword;
mod direction;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod placer;
pub mod prelude;
#[cfg(feature = "std")]
pub mod snapshot;
mod validator;
mod word;
mod word_search;
pub mod wordlists;

pub use common::*;
pub use config::*;
pub use crossword::*;
pub use direction::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use placer::*;
pub use validator::*;
pub use word::*;
pub use word_search::*;
