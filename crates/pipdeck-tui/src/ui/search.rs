//! Install input
//!
//! Displays the package name being typed, with cursor. Names wider than the
//! box scroll horizontally so the cursor always stays in view.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::{App, Theme};

const PROMPT: &str = "> ";
const PROMPT_WIDTH: u16 = 2;
const PLACEHOLDER: &str = "Type package name to install";
const INSTRUCTIONS: &str = "Type the name of PyPI package to install:";
const BORDER_SIZE: u16 = 1;
const INPUT_LINE_OFFSET_Y: u16 = 3; // border, instructions, blank line

/// Render the install input.
pub fn render(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Install ");
    let input = app.search();
    let columns = usize::from(area.width.saturating_sub(2 * BORDER_SIZE + PROMPT_WIDTH));

    let (visible, cursor_col) = visible_window(input.as_str(), input.cursor(), columns);

    let echo = if input.as_str().is_empty() {
        Span::styled(PLACEHOLDER, Style::default().fg(theme.muted))
    } else {
        Span::raw(visible.to_owned())
    };

    let lines = vec![
        Line::from(Span::styled(INSTRUCTIONS, Style::default().fg(theme.muted))),
        Line::default(),
        Line::from(vec![Span::styled(PROMPT, Style::default().fg(theme.accent)), echo]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);

    let cursor_y = area.y.saturating_add(INPUT_LINE_OFFSET_Y);
    if app.is_loading()
        || columns == 0
        || cursor_y >= area.y.saturating_add(area.height).saturating_sub(BORDER_SIZE)
    {
        return;
    }

    let cursor_x = area
        .x
        .saturating_add(BORDER_SIZE + PROMPT_WIDTH)
        .saturating_add(u16::try_from(cursor_col).unwrap_or(u16::MAX));

    frame.set_cursor_position((cursor_x, cursor_y));
}

/// Slice of `text` that fits in `columns` display cells with the cursor
/// (a char index) visible, and the cursor's column within that slice.
///
/// The window starts as far left as possible; it only scrolls once the cursor
/// would fall off the right edge. One cell is kept free for the cursor itself.
fn visible_window(text: &str, cursor: usize, columns: usize) -> (&str, usize) {
    if columns == 0 {
        return ("", 0);
    }

    let cursor_byte = text.char_indices().nth(cursor).map_or(text.len(), |(i, _)| i);
    let before = &text[..cursor_byte];

    // Drop chars from the left until the cursor fits.
    let mut start = 0;
    let mut cursor_col = before.width();
    for c in before.chars() {
        if cursor_col < columns {
            break;
        }
        start += c.len_utf8();
        cursor_col -= c.width().unwrap_or(0);
    }

    let mut end = start;
    let mut used = 0;
    for c in text[start..].chars() {
        let w = c.width().unwrap_or(0);
        if used + w > columns {
            break;
        }
        used += w;
        end += c.len_utf8();
    }

    (&text[start..end], cursor_col)
}
