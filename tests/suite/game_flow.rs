//! End-to-end round flow: deck, guess, verdict, next round.

use thots_tui::{App, Phase};
use thots_types::{is_hot, is_valid_format};

use crate::common;

#[test]
fn a_scripted_rejection_round_lands_on_the_cold_zip() {
    // 0.9 skips the hot path; WA 98629 comes up hot and is thrown back;
    // ID 83270 is cold and sticks. Five draws per round, so the cycling
    // tape deals the same round forever.
    let mut app = App::new(0.5, common::cycling(vec![0.9, 0.0, 0.42, 0.8, 0.1]));
    assert_eq!(app.zip(), "ID 83270");

    app.advance();
    assert_eq!(app.phase(), Phase::ShowingVerdict { hot: false });

    app.advance();
    assert_eq!(app.zip(), "ID 83270");
    assert_eq!(app.phase(), Phase::AwaitingGuess);
}

#[test]
fn a_seeded_session_stays_well_formed() {
    let mut app = App::new(0.5, common::lcg(7));

    for _ in 0..50 {
        assert_eq!(app.phase(), Phase::AwaitingGuess);
        let zip = app.zip().to_owned();
        assert!(is_valid_format(&zip), "bad zip on deck: {zip:?}");

        app.advance();
        assert_eq!(app.zip(), zip, "zip changed while revealing the verdict");
        match app.phase() {
            Phase::ShowingVerdict { hot } => assert_eq!(hot, is_hot(&zip)),
            Phase::AwaitingGuess => panic!("advance did not reveal a verdict"),
        }

        app.advance();
    }
}

#[test]
fn identical_seeds_replay_identical_sessions() {
    let mut left = App::new(0.35, common::lcg(99));
    let mut right = App::new(0.35, common::lcg(99));

    for _ in 0..30 {
        assert_eq!(left.zip(), right.zip());
        left.advance();
        right.advance();
        assert_eq!(left.phase(), right.phase());
        left.advance();
        right.advance();
    }
}

#[test]
fn different_seeds_deal_different_decks() {
    let mut left = App::new(0.5, common::lcg(1));
    let mut right = App::new(0.5, common::lcg(2));

    let mut decks = (Vec::new(), Vec::new());
    for _ in 0..20 {
        decks.0.push(left.zip().to_owned());
        decks.1.push(right.zip().to_owned());
        left.advance();
        left.advance();
        right.advance();
        right.advance();
    }

    assert_ne!(decks.0, decks.1);
}

#[test]
fn a_hot_only_session_never_deals_a_cold_zip() {
    let mut app = App::new(1.0, common::lcg(3));

    for _ in 0..40 {
        app.advance();
        assert_eq!(
            app.phase(),
            Phase::ShowingVerdict { hot: true },
            "cold zip dealt at p = 1: {:?}",
            app.zip()
        );
        app.advance();
    }
}

#[test]
fn a_cold_only_session_never_deals_a_hot_zip() {
    let mut app = App::new(0.0, common::lcg(4));

    for _ in 0..40 {
        app.advance();
        assert_eq!(
            app.phase(),
            Phase::ShowingVerdict { hot: false },
            "hot zip dealt at p = 0: {:?}",
            app.zip()
        );
        app.advance();
    }
}
