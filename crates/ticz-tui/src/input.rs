//! Form input handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A single-line text input with cursor support.
#[derive(Debug, Clone)]
pub struct InputField {
    /// Current input value.
    value: String,
    /// Cursor position (byte index).
    cursor: usize,
    /// Shown when the value is empty.
    pub placeholder: String,
    /// Hard cap on characters; `None` is unbounded.
    pub max_chars: Option<usize>,
}

impl InputField {
    pub fn new(default: impl Into<String>, placeholder: &str) -> Self {
        let value = default.into();
        let cursor = value.len();
        Self {
            value,
            cursor,
            placeholder: placeholder.to_string(),
            max_chars: None,
        }
    }

    pub fn with_max_chars(mut self, max: usize) -> Self {
        self.max_chars = Some(max);
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
    }

    /// Value with a cursor bar inserted, for the focused field.
    pub fn display_with_cursor(&self) -> String {
        let mut shown = self.value.clone();
        shown.insert(self.cursor, '│');
        shown
    }

    /// Handle a key event, returns true if the value changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('u') if ctrl => {
                let changed = !self.value.is_empty();
                self.value.clear();
                self.cursor = 0;
                changed
            }
            // Other control chords are not text.
            KeyCode::Char(_) if ctrl => false,
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => self.delete_char_backward(),
            KeyCode::Delete => self.delete_char_forward(),
            KeyCode::Left => {
                self.move_cursor_left();
                false
            }
            KeyCode::Right => {
                self.move_cursor_right();
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = self.value.len();
                false
            }
            _ => false,
        }
    }

    fn insert_char(&mut self, c: char) -> bool {
        if let Some(max) = self.max_chars {
            if self.value.chars().count() >= max {
                return false;
            }
        }
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        true
    }

    fn delete_char_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev = self.prev_boundary();
        self.value.remove(prev);
        self.cursor = prev;
        true
    }

    fn delete_char_forward(&mut self) -> bool {
        if self.cursor >= self.value.len() {
            return false;
        }
        self.value.remove(self.cursor);
        true
    }

    fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary();
        }
    }

    fn move_cursor_right(&mut self) {
        if let Some(c) = self.value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    fn prev_boundary(&self) -> usize {
        self.value[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn typing_and_backspace_edit_value() {
        let mut field = InputField::new("Ad", "name");
        assert!(field.handle_key(key(KeyCode::Char('a'))));
        assert_eq!(field.value(), "Ada");
        assert!(field.handle_key(key(KeyCode::Backspace)));
        assert_eq!(field.value(), "Ad");
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn cursor_moves_over_multibyte_chars() {
        let mut field = InputField::new("né", "name");
        field.handle_key(key(KeyCode::Left));
        assert_eq!(field.cursor(), 1);
        field.handle_key(key(KeyCode::Char('x')));
        assert_eq!(field.value(), "nxé");
        field.handle_key(key(KeyCode::End));
        field.handle_key(key(KeyCode::Right));
        assert_eq!(field.cursor(), field.value().len());
    }

    #[test]
    fn ctrl_u_clears_and_other_chords_are_ignored() {
        let mut field = InputField::new("hello", "x");
        assert!(!field.handle_key(ctrl('a')));
        assert_eq!(field.value(), "hello");
        assert!(field.handle_key(ctrl('u')));
        assert!(field.is_empty());
    }

    #[test]
    fn max_chars_is_enforced() {
        let mut field = InputField::new("abc", "x").with_max_chars(3);
        assert!(!field.handle_key(key(KeyCode::Char('d'))));
        assert_eq!(field.value(), "abc");
    }

    #[test]
    fn cursor_marker_sits_at_cursor() {
        let mut field = InputField::new("ab", "x");
        field.handle_key(key(KeyCode::Home));
        assert_eq!(field.display_with_cursor(), "│ab");
    }
}
