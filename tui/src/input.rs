//! Input handling for the thots TUI.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::app::App;

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for one pending terminal event and applies it.
///
/// Returns `Ok(true)` when the application should exit. Ctrl+C exits
/// immediately regardless of game state.
pub fn handle_events(app: &mut App) -> Result<bool> {
    if event::poll(INPUT_POLL_TIMEOUT)? {
        return Ok(apply_event(app, event::read()?));
    }
    Ok(app.should_quit())
}

fn apply_event(app: &mut App, event: Event) -> bool {
    match event {
        Event::Key(key) => {
            // Only act on presses; repeats and releases are ignored.
            if key.kind != KeyEventKind::Press {
                return app.should_quit();
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return true;
            }
            handle_key(app, key);
        }
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        _ => {}
    }
    app.should_quit()
}

/// Key dispatch: Space and Enter drive the round, `q` and Esc quit.
fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => app.advance(),
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}

/// The game is one button, and a left click anywhere is that button.
fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
        app.advance();
    }
}
