//! Status line and keybinding legend

use pipdeck_app::Mode;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{App, Theme};

/// Braille dot spinner, one frame per tick.
pub(crate) const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

const BROWSING_LEGEND: &str = "[d] uninstall • [tab] install • [q] quit";
const SEARCHING_LEGEND: &str = "[enter] install • [tab] browse • [ctrl+c] quit";

/// Render the status line.
///
/// A spinner precedes the text while loading. Errors use the error color.
pub fn render(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let message = app.status_message().unwrap_or_default().to_owned();

    let line = if app.is_loading() {
        let spinner = SPINNER_FRAMES[app.spinner_frame() % SPINNER_FRAMES.len()];
        Line::from(vec![
            Span::raw(" "),
            Span::styled(spinner, Style::default().fg(theme.accent)),
            Span::raw(" "),
            Span::styled(message, Style::default().fg(theme.muted)),
        ])
    } else if app.last_error().is_some() {
        Line::from(vec![Span::raw(" "), Span::styled(message, Style::default().fg(theme.error))])
    } else {
        Line::from(vec![Span::raw(" "), Span::styled(message, Style::default().fg(theme.muted))])
    };

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the keybinding legend for the current mode.
pub fn render_legend(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let legend = match app.mode() {
        Mode::Browsing => BROWSING_LEGEND,
        Mode::Searching => SEARCHING_LEGEND,
    };

    let paragraph = Paragraph::new(Line::from(format!(" • {legend}")))
        .style(Style::default().fg(theme.muted));

    frame.render_widget(paragraph, area);
}
