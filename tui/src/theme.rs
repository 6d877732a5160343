//! Color theme for the thots TUI.
//!
//! Kanagawa Wave palette subset.

use ratatui::style::{Color, Modifier, Style};

/// Kanagawa Wave color palette constants.
mod colors {
    use super::Color;

    pub const BG_DARK: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray
    pub const PRIMARY: Color = Color::Rgb(149, 127, 184); // oniViolet
    pub const CYAN: Color = Color::Rgb(127, 180, 202); // springBlue
    pub const YELLOW: Color = Color::Rgb(230, 195, 132); // carpYellow
    pub const RED: Color = Color::Rgb(255, 93, 98); // peachRed
}

/// Pre-defined styles for the screen elements.
pub mod styles {
    use super::{Modifier, Style, colors};

    #[must_use]
    pub fn background() -> Style {
        Style::default().bg(colors::BG_DARK)
    }

    #[must_use]
    pub fn title() -> Style {
        Style::default()
            .fg(colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn zip() -> Style {
        Style::default()
            .fg(colors::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn verdict_hot() -> Style {
        Style::default()
            .fg(colors::RED)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn verdict_cold() -> Style {
        Style::default()
            .fg(colors::CYAN)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn hint_key() -> Style {
        Style::default().fg(colors::YELLOW)
    }

    #[must_use]
    pub fn hint_text() -> Style {
        Style::default().fg(colors::TEXT_MUTED)
    }
}
