//! Practice ZIP generators.
//!
//! Every draw flows through `pick` or `Band::sample`, one uniform sample
//! each, so a scripted `RandomSource` reproduces an exact session.

use serde::Deserialize;
use thiserror::Error;

use crate::classify;
use crate::rng::RandomSource;
use crate::state::HotState;
use crate::zip;

/// Probability that a practice round draws from the hot bands.
pub const DEFAULT_HOT_PROBABILITY: f64 = 0.5;

/// Uniform choice over a slice with a single draw; `None` when empty.
pub fn pick<'a, T, R: RandomSource + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get((rng.next_f64() * items.len() as f64) as usize)
}

/// Generates a ZIP guaranteed to classify hot.
///
/// With no state given, one is picked uniformly first. A band is then picked
/// from the state's hot bands and a number drawn within it; each step costs
/// one draw, including for single-band states.
pub fn random_hot_zip<R: RandomSource + ?Sized>(
    state: Option<HotState>,
    rng: &mut R,
) -> Option<String> {
    let state = match state {
        Some(state) => state,
        None => *pick(&HotState::ALL, rng)?,
    };
    let band = pick(state.hot_bands(), rng)?;
    Some(zip::format(state.code(), band.sample(rng)))
}

/// Generates a ZIP anywhere in a state's valid space; may be hot or cold.
pub fn random_any_zip<R: RandomSource + ?Sized>(
    state: Option<HotState>,
    rng: &mut R,
) -> Option<String> {
    let state = match state {
        Some(state) => state,
        None => *pick(&HotState::ALL, rng)?,
    };
    Some(zip::format(state.code(), state.valid_space().sample(rng)))
}

/// Generates a practice ZIP: hot with probability `p_hot`, cold otherwise.
///
/// The cold path rejection-samples the valid spaces. Every state keeps cold
/// numbers in its valid space (`HotState::valid_space` invariant), so the
/// loop terminates without a retry cap.
pub fn random_practice_zip<R: RandomSource + ?Sized>(p_hot: f64, rng: &mut R) -> String {
    if rng.next_f64() < p_hot
        && let Some(hot) = random_hot_zip(None, rng)
    {
        return hot;
    }
    loop {
        if let Some(candidate) = random_any_zip(None, rng)
            && !classify::is_hot(&candidate)
        {
            return candidate;
        }
    }
}

/// A practice hot probability, guaranteed to be within `[0, 1]`.
///
/// The generator itself takes a raw `f64` and behaves totally for any float;
/// this type is for boundaries that accept user input, such as the config
/// file, where out-of-range values should be rejected loudly.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "f64")]
pub struct HotProbability(f64);

#[derive(Debug, Clone, Error)]
#[error("hot probability must be within [0, 1], got {0}")]
pub struct HotProbabilityError(f64);

impl HotProbability {
    pub fn new(value: f64) -> Result<Self, HotProbabilityError> {
        // NaN fails the range check and is rejected with everything else.
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(HotProbabilityError(value))
        }
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Default for HotProbability {
    fn default() -> Self {
        Self(DEFAULT_HOT_PROBABILITY)
    }
}

impl TryFrom<f64> for HotProbability {
    type Error = HotProbabilityError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
