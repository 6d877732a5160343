//! Core domain types for thots.
//!
//! This crate contains the ZIP format rules, the hot/not classification
//! tables, and the practice generators. No IO, no async, and the only way
//! randomness gets in is through an injected [`RandomSource`].

mod band;
mod classify;
mod generate;
mod rng;
mod state;
mod zip;

pub use band::Band;
pub use classify::{is_hot, is_hot_for_state};
pub use generate::{
    DEFAULT_HOT_PROBABILITY, HotProbability, HotProbabilityError, pick, random_any_zip,
    random_hot_zip, random_practice_zip,
};
pub use rng::RandomSource;
pub use state::HotState;
pub use zip::{ParsedZip, format as format_zip, is_valid_format, parse as parse_zip};
