//! Hot-or-not classification.
//!
//! Total functions: malformed input is not hot, never an error. The worst a
//! garbage string can do is come back `false`.

use crate::state::HotState;
use crate::zip;

/// Decides hotness from a state code and a digit string.
///
/// Structurally invalid input (wrong lengths, wrong character classes) and
/// states outside the hot set are not hot.
#[must_use]
pub fn is_hot_for_state(state: &str, digits: &str) -> bool {
    let well_formed = state.len() == 2
        && state.bytes().all(|b| b.is_ascii_uppercase())
        && digits.len() == 5
        && digits.bytes().all(|b| b.is_ascii_digit());
    if !well_formed {
        return false;
    }
    let Some(state) = HotState::parse(state) else {
        return false;
    };
    let Ok(n) = digits.parse::<u32>() else {
        return false;
    };
    state.hot_bands().iter().any(|band| band.contains(n))
}

/// The top-level entry point: is this ZIP string hot?
#[must_use]
pub fn is_hot(s: &str) -> bool {
    zip::parse(s).is_some_and(|z| is_hot_for_state(z.state, z.digits))
}
