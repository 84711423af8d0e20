//! Observable application state types.
//!
//! This module defines the data structures that make up the applications
//! current view of the world: the interaction [`Mode`], the [`SearchInput`]
//! line editor and the user-visible [`AppError`] taxonomy.

use pipdeck_client::ClientError;
use thiserror::Error;

/// Maximum number of characters accepted in the search input.
pub const SEARCH_CHAR_LIMIT: usize = 156;

/// Top-level interaction mode. Decides input routing and the visible panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Navigating the installed package list.
    #[default]
    Browsing,
    /// Typing the name of a package to install.
    Searching,
}

impl Mode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Browsing => Self::Searching,
            Self::Searching => Self::Browsing,
        }
    }
}

/// Input preconditions that failed before any command was dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Enter pressed with nothing typed.
    #[error("Type a package name before pressing enter")]
    EmptyPackageName,
    /// Uninstall requested with an empty list.
    #[error("No package selected to uninstall")]
    NothingSelected,
}

/// Last error shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Rejected locally, nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Reported by a command.
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Single-line text editor for the package name.
///
/// The cursor counts characters, not bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    buffer: String,
    cursor: usize,
}

impl SearchInput {
    /// Create an empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Text with surrounding whitespace removed. Empty if nothing was typed.
    pub fn trimmed(&self) -> &str {
        self.buffer.trim()
    }

    /// Insert a character at the cursor. Control characters and input past
    /// [`SEARCH_CHAR_LIMIT`] are dropped.
    pub fn insert(&mut self, c: char) {
        if c.is_control() || self.char_len() >= SEARCH_CHAR_LIMIT {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.buffer.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.buffer.remove(at);
    }

    /// Delete the character at the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_offset(self.cursor);
            self.buffer.remove(at);
        }
    }

    /// Move the cursor one character left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor one character right.
    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    /// Move the cursor to the start.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the end.
    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Discard everything typed.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Clear the input, returning what was typed.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.buffer)
    }

    fn char_len(&self) -> usize {
        self.buffer.chars().count()
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.buffer.char_indices().nth(char_idx).map_or(self.buffer.len(), |(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> SearchInput {
        let mut input = SearchInput::new();
        text.chars().for_each(|c| input.insert(c));
        input
    }

    #[test]
    fn insert_and_backspace() {
        let mut input = typed("ab");
        assert_eq!(input.as_str(), "ab");
        assert_eq!(input.cursor(), 2);

        input.backspace();
        assert_eq!(input.as_str(), "a");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn cursor_movement() {
        let mut input = typed("abc");

        input.move_home();
        assert_eq!(input.cursor(), 0);

        input.move_end();
        assert_eq!(input.cursor(), 3);

        input.move_left();
        assert_eq!(input.cursor(), 2);

        input.move_right();
        input.move_right();
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn editing_in_the_middle() {
        let mut input = typed("flsk");
        input.move_home();
        input.move_right();
        input.move_right();
        input.insert('a');
        assert_eq!(input.as_str(), "flask");

        input.move_home();
        input.delete();
        assert_eq!(input.as_str(), "lask");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn multibyte_characters_are_edited_by_char() {
        let mut input = typed("pé");
        input.insert('x');
        assert_eq!(input.as_str(), "péx");

        input.move_left();
        input.backspace();
        assert_eq!(input.as_str(), "px");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn length_is_capped() {
        let input = typed(&"a".repeat(SEARCH_CHAR_LIMIT + 10));
        assert_eq!(input.as_str().len(), SEARCH_CHAR_LIMIT);
    }

    #[test]
    fn take_clears() {
        let mut input = typed(" flask ");
        assert_eq!(input.trimmed(), "flask");

        assert_eq!(input.take(), " flask ");
        assert!(input.as_str().is_empty());
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn control_characters_are_ignored() {
        let input = typed("a\u{7}b");
        assert_eq!(input.as_str(), "ab");
    }
}
