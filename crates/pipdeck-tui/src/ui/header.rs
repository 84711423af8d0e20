//! Header bar
//!
//! Displays the tool name and the current mode.

use pipdeck_app::Mode;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{App, Theme};

const TITLE: &str = " Python Package Manager Tool ";

/// Render the header bar.
pub fn render(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let mode = match app.mode() {
        Mode::Browsing => " MODE: Browse ",
        Mode::Searching => " MODE: Install ",
    };

    let line = Line::from(vec![
        Span::styled(
            TITLE,
            Style::default().fg(Color::White).bg(theme.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(mode, Style::default().fg(theme.accent).add_modifier(Modifier::REVERSED)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
