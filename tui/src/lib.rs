//! TUI rendering and input handling for thots using ratatui.

mod app;
mod input;
mod theme;
mod ui;

pub use app::{App, Phase};
pub use input::handle_events;
pub use ui::draw;
