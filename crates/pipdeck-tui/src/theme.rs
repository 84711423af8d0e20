//! Rendering colors.
//!
//! The theme is built once at startup and passed to every render call.

use ratatui::style::Color;

/// Color theme for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Header, mode badge, selection highlight and spinner.
    pub accent: Color,
    /// Status line when the last operation failed.
    pub error: Color,
    /// Status text, legend and placeholders.
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Rgb(0x7D, 0x67, 0xF4),
            error: Color::Rgb(0xFF, 0x00, 0x00),
            muted: Color::Rgb(0xA0, 0xA0, 0xA0),
        }
    }
}

impl Theme {
    /// Replace individual colors, keeping the defaults for the rest.
    pub fn with_overrides(
        accent: Option<Color>,
        error: Option<Color>,
        muted: Option<Color>,
    ) -> Self {
        let base = Self::default();
        Self {
            accent: accent.unwrap_or(base.accent),
            error: error.unwrap_or(base.error),
            muted: muted.unwrap_or(base.muted),
        }
    }
}

/// Parse a color name (`red`), index (`205`) or hex triplet (`#7D67F4`).
///
/// Shaped for use as a clap `value_parser`.
pub fn parse_color(s: &str) -> Result<Color, String> {
    s.trim().parse::<Color>().map_err(|_| format!("unrecognized color '{s}'"))
}
