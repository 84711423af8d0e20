//! Installed package list
//!
//! Displays the installed packages with a marker on the selection.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::{App, Theme};

const HIGHLIGHT_SYMBOL: &str = "> ";

/// Render the package list.
pub fn render(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Installed Packages ");

    if app.packages().is_empty() {
        let hint = if app.is_loading() { "Loading packages..." } else { "No packages installed" };
        let items = vec![ListItem::new(Line::from(Span::styled(
            hint,
            Style::default().fg(theme.muted),
        )))];
        frame.render_widget(List::new(items).block(block), area);
        return;
    }

    let items: Vec<ListItem> = app
        .packages()
        .iter()
        .map(|package| {
            ListItem::new(Line::from(vec![
                Span::raw(package.name.clone()),
                Span::styled(
                    format!("  Version: {}", package.version),
                    Style::default().fg(theme.muted),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_symbol(HIGHLIGHT_SYMBOL)
        .highlight_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD));

    // Built per frame so scrolling is derived from App state alone.
    let selected = app.selected_package().map(|_| app.selected_index());
    let mut state = ListState::default().with_selected(selected);

    frame.render_stateful_widget(list, area, &mut state);
}
