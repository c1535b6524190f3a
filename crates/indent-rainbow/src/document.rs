//! Host document accessor.
//!
//! The analysis kernel never owns the editor's buffer. It reads the document through
//! [`TextDocument`], which the host implements on top of its own text model ([`LineIndex`] is
//! the bundled rope-backed implementation).
//!
//! All offsets are **character offsets** (Unicode scalar values) from the start of the document.
//! Lines are separated by `'\n'` only; a `'\r'` before the newline is part of the line text.
//!
//! [`LineIndex`]: crate::LineIndex

use std::cmp::Ordering;

/// Logical position in the document (line and column, both zero-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Zero-based logical line index.
    pub line: usize,
    /// Zero-based column in characters within the logical line.
    pub column: usize,
}

impl Position {
    /// Create a new logical position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then_with(|| self.column.cmp(&other.column))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A single logical line, as returned by [`TextDocument::line_at`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineInfo {
    /// Zero-based line number.
    pub line: usize,
    /// Character offset of the first character of the line.
    pub start: usize,
    /// Line text without the trailing `'\n'`.
    pub text: String,
}

impl LineInfo {
    /// Length of the line text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Character offset of the line's end: the offset of its `'\n'`, or the end of the document
    /// for the last line.
    pub fn end(&self) -> usize {
        self.start + self.char_len()
    }
}

/// Read access to the document under analysis.
///
/// The text is treated as immutable for the duration of one analysis pass.
pub trait TextDocument {
    /// The complete document text.
    fn text(&self) -> String;

    /// Look up a line by zero-based line number. Returns `None` past the last line.
    fn line_at(&self, line: usize) -> Option<LineInfo>;

    /// Convert a character offset into a logical position (offsets past the end are clamped).
    fn position_at(&self, offset: usize) -> Position;

    /// Number of logical lines (an empty document has one line).
    fn line_count(&self) -> usize;
}
