//! thots CLI - binary entry point and terminal session management.
//!
//! The binary bridges [`thots_types`] (game rules) and [`thots_tui`]
//! (state + rendering): it resolves configuration, builds the session's
//! random source, and owns the terminal for the lifetime of the game.

mod config;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::{RngExt, SeedableRng, rngs::StdRng};
use ratatui::prelude::*;
use std::{
    env,
    fs::{self, OpenOptions},
    io::{Stdout, stdout},
    path::PathBuf,
    sync::Mutex,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::ThotsConfig;
use thots_tui::{App, draw, handle_events};
use thots_types::{DEFAULT_HOT_PROBABILITY, HotProbability, RandomSource};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // If we can't open a log file, prefer "no logs" over corrupting the TUI
    // by writing to stdout/stderr.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, std::fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.thots/logs/thots.log
    if let Some(config_path) = ThotsConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("thots.log"));
    }

    // Fallback: ./.thots/logs/thots.log
    candidates.push(PathBuf::from(".thots").join("logs").join("thots.log"));

    candidates
}

/// `THOTS_SEED` wins over the config seed; a malformed value falls through.
fn resolve_seed(env_seed: Option<String>, config_seed: Option<u64>) -> Option<u64> {
    if let Some(raw) = env_seed {
        match raw.trim().parse::<u64>() {
            Ok(seed) => return Some(seed),
            Err(_) => tracing::warn!(value = %raw, "Ignoring non-numeric THOTS_SEED"),
        }
    }
    config_seed
}

/// Builds the session's random source. A seed gives a replayable session;
/// without one, draws come from the thread RNG.
fn random_source(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => {
            tracing::info!(seed, "Seeded session");
            let mut rng = StdRng::seed_from_u64(seed);
            Box::new(move || rng.random::<f64>())
        }
        None => Box::new(|| rand::random::<f64>()),
    }
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Raw mode, alternate screen, and mouse capture are enabled together and
/// restored together, including on panics and early error returns.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        let backend = CrosstermBackend::new(out);
        let terminal = match Terminal::new(backend) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let mut out = stdout();
                let _ = execute!(out, LeaveAlternateScreen, DisableMouseCapture);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

fn main() -> Result<()> {
    init_tracing();

    let config = ThotsConfig::load().ok().flatten();
    let practice = config.and_then(|cfg| cfg.practice).unwrap_or_default();
    let hot_probability = practice
        .hot_probability
        .map_or(DEFAULT_HOT_PROBABILITY, HotProbability::get);
    let seed = resolve_seed(env::var("THOTS_SEED").ok(), practice.seed);

    let mut app = App::new(hot_probability, random_source(seed));

    let mut session = TerminalSession::new()?;
    run_app(&mut session.terminal, &mut app)
}

fn run_app<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|frame| draw(frame, app))?;
        if handle_events(app)? {
            return Ok(());
        }
    }
}
