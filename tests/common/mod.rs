//! Shared test utilities and fixtures
//!
//! Deterministic random sources for driving the generator and the app
//! without touching a real RNG.

#![allow(dead_code)]

use thots_types::RandomSource;

/// A source that replays `tape` forever, in order.
///
/// Panics on an empty tape; every draw consumes one entry.
pub fn cycling(tape: Vec<f64>) -> Box<dyn RandomSource> {
    assert!(!tape.is_empty(), "cycling source needs at least one draw");
    let mut at = 0;
    Box::new(move || {
        let draw = tape[at % tape.len()];
        at += 1;
        draw
    })
}

/// A small MMIX-flavored linear congruential source.
///
/// Deterministic per seed, so sessions built on it replay exactly.
/// Draws take the high bits of the state; the low bits of an LCG are
/// not uniform enough to use directly.
pub fn lcg(seed: u64) -> Box<dyn RandomSource> {
    let mut state = seed | 1;
    Box::new(move || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (state >> 11) as f64 / (1u64 << 53) as f64
    })
}
