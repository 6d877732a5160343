//! Round state for the quiz.

use thots_types::{RandomSource, is_hot, random_practice_zip};
use tracing::debug;

/// Where the current round stands.
///
/// A round has exactly two phases: the player is looking at a ZIP and
/// guessing, or the verdict is on screen and the next press starts a fresh
/// round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingGuess,
    ShowingVerdict { hot: bool },
}

/// The whole game state: one ZIP, one phase, one quit flag.
///
/// The random source is injected at construction and owned for the session,
/// so a seeded source replays the exact same sequence of rounds.
pub struct App {
    zip: String,
    phase: Phase,
    hot_probability: f64,
    rng: Box<dyn RandomSource>,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(hot_probability: f64, mut rng: Box<dyn RandomSource>) -> Self {
        let zip = random_practice_zip(hot_probability, rng.as_mut());
        debug!(zip = %zip, "first round");
        Self {
            zip,
            phase: Phase::AwaitingGuess,
            hot_probability,
            rng,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn zip(&self) -> &str {
        &self.zip
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The single progress action, mirroring the one button of the game:
    /// first press reveals the verdict, second press deals the next round.
    pub fn advance(&mut self) {
        match self.phase {
            Phase::AwaitingGuess => {
                let hot = is_hot(&self.zip);
                debug!(zip = %self.zip, hot, "verdict revealed");
                self.phase = Phase::ShowingVerdict { hot };
            }
            Phase::ShowingVerdict { .. } => {
                self.zip = random_practice_zip(self.hot_probability, self.rng.as_mut());
                debug!(zip = %self.zip, "next round");
                self.phase = Phase::AwaitingGuess;
            }
        }
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
