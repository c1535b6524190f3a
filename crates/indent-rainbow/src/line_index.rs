//! Rope-backed line index.
//!
//! [`LineIndex`] is the default [`TextDocument`] implementation. It provides O(log N) line and
//! offset lookups, which keeps the per-run `position_at` calls of an analysis pass cheap.

use crate::document::{LineInfo, Position, TextDocument};
use ropey::Rope;

/// Logical line index - implemented using Rope data structure
///
/// Only `'\n'` is treated as a line break (the rope is built without Unicode/CR line breaks), so
/// line numbers agree with the `^` anchor used to find leading whitespace.
#[derive(Debug, Clone)]
pub struct LineIndex {
    rope: Rope,
}

impl LineIndex {
    /// Create an empty line index
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Build line index from text
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Get total line count
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Get total character count
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Get line number and offset within line from character offset
    pub fn char_offset_to_position(&self, char_offset: usize) -> (usize, usize) {
        let char_offset = char_offset.min(self.rope.len_chars());

        let line_idx = self.rope.char_to_line(char_offset);
        let line_start_char = self.rope.line_to_char(line_idx);
        let char_in_line = char_offset - line_start_char;

        (line_idx, char_in_line)
    }

    /// Insert text (at specified character offset)
    pub fn insert(&mut self, char_offset: usize, text: &str) {
        let char_offset = char_offset.min(self.rope.len_chars());
        self.rope.insert(char_offset, text);
    }

    /// Get complete text
    pub fn get_text(&self) -> String {
        self.rope.to_string()
    }

    /// Get text of the specified line (excluding newline)
    pub fn get_line_text(&self, line_number: usize) -> Option<String> {
        if line_number >= self.rope.len_lines() {
            return None;
        }

        let mut text = self.rope.line(line_number).to_string();

        // Remove trailing newline
        if text.ends_with('\n') {
            text.pop();
        }

        Some(text)
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl TextDocument for LineIndex {
    fn text(&self) -> String {
        self.get_text()
    }

    fn line_at(&self, line: usize) -> Option<LineInfo> {
        let text = self.get_line_text(line)?;
        Some(LineInfo {
            line,
            start: self.rope.line_to_char(line),
            text,
        })
    }

    fn position_at(&self, offset: usize) -> Position {
        let (line, column) = self.char_offset_to_position(offset);
        Position::new(line, column)
    }

    fn line_count(&self) -> usize {
        self.rope.len_lines()
    }
}
