//! Coverage of the practice deck: the generator has to reach every state
//! and both verdicts when left running on a live source.

use std::collections::HashSet;

use thots_types::{HotState, is_hot, is_valid_format, random_hot_zip, random_practice_zip};

use crate::common;

#[test]
fn a_balanced_deck_mixes_hot_and_cold() {
    let mut rng = common::lcg(11);
    let mut hot = 0_u32;
    let mut cold = 0_u32;

    for _ in 0..300 {
        let zip = random_practice_zip(0.5, rng.as_mut());
        assert!(is_valid_format(&zip), "bad zip on deck: {zip:?}");
        if is_hot(&zip) {
            hot += 1;
        } else {
            cold += 1;
        }
    }

    assert!(hot > 20, "a balanced deck came up nearly all cold: {hot}");
    assert!(cold > 20, "a balanced deck came up nearly all hot: {cold}");
}

#[test]
fn every_state_turns_up_hot_eventually() {
    let mut rng = common::lcg(5);
    let mut seen = HashSet::new();

    for _ in 0..400 {
        let zip = random_hot_zip(None, rng.as_mut()).unwrap();
        seen.insert(zip[..2].to_owned());
    }

    for state in HotState::ALL {
        assert!(
            seen.contains(state.code()),
            "{} never turned up hot",
            state.code()
        );
    }
}
