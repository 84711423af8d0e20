//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! returning widget trees.

mod header;
mod packages;
mod search;
mod status;

use pipdeck_app::Mode;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{App, Theme};

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App, theme: &Theme) {
    const HEADER_HEIGHT: u16 = 1;
    const GAP_HEIGHT: u16 = 1;
    const CONTENT_MIN_HEIGHT: u16 = 3;
    const STATUS_HEIGHT: u16 = 1;
    const LEGEND_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(GAP_HEIGHT),
            Constraint::Min(CONTENT_MIN_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
            Constraint::Length(LEGEND_HEIGHT),
        ])
        .split(frame.area());

    let [header_area, _, content_area, status_area, legend_area] = chunks.as_ref() else {
        return;
    };

    header::render(frame, app, theme, *header_area);
    match app.mode() {
        Mode::Browsing => packages::render(frame, app, theme, *content_area),
        Mode::Searching => search::render(frame, app, theme, *content_area),
    }
    status::render(frame, app, theme, *status_area);
    status::render_legend(frame, app, theme, *legend_area);
}
