//! Screen rendering for the thots TUI.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::app::{App, Phase};
use crate::theme::styles;

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &App) {
    let bg = Block::default().style(styles::background());
    frame.render_widget(bg, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(1),    // Round
            Constraint::Length(1), // Hints
        ])
        .split(frame.area());

    let title = Paragraph::new("thots simulator")
        .style(styles::title())
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_round(frame, app, chunks[1]);
    draw_hints(frame, app, chunks[2]);
}

fn draw_round(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40), // Space above the zip
            Constraint::Length(1),      // Zip
            Constraint::Length(1),      // Gap
            Constraint::Length(1),      // Verdict
            Constraint::Min(0),         // Space below
        ])
        .split(area);

    let zip = Paragraph::new(app.zip())
        .style(styles::zip())
        .alignment(Alignment::Center);
    frame.render_widget(zip, rows[1]);

    if let Phase::ShowingVerdict { hot } = app.phase() {
        let (label, style) = if hot {
            ("🔥 HOT", styles::verdict_hot())
        } else {
            ("❄️ NOT HOT", styles::verdict_cold())
        };
        let verdict = Paragraph::new(label)
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(verdict, rows[3]);
    }
}

fn draw_hints(frame: &mut Frame, app: &App, area: Rect) {
    // One button does everything; only its label changes with the phase.
    let action = match app.phase() {
        Phase::AwaitingGuess => "check hot",
        Phase::ShowingVerdict { .. } => "next",
    };
    let hints = Line::from(vec![
        Span::styled("space", styles::hint_key()),
        Span::styled(format!(" {action}  "), styles::hint_text()),
        Span::styled("q", styles::hint_key()),
        Span::styled(" quit", styles::hint_text()),
    ]);
    let hints = Paragraph::new(hints).alignment(Alignment::Center);
    frame.render_widget(hints, area);
}
