//! Tab metrics.
//!
//! Every tab counts as exactly `tab_width` columns regardless of the column it starts in; tabs
//! do not advance to the next tab stop. Depth partitioning and the width check both assume this
//! flat rule.

use std::fmt;

/// Indentation style configured in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndentStyle {
    /// The editor inserts spaces; literal tabs are unexpected.
    Spaces,
    /// The editor inserts tabs; spaces are unexpected.
    Tabs,
}

impl IndentStyle {
    /// Map an editor's "insert spaces" flag to a style.
    pub fn from_insert_spaces(insert_spaces: bool) -> Self {
        if insert_spaces { Self::Spaces } else { Self::Tabs }
    }

    /// The character this style indents with.
    pub fn expected_char(self) -> char {
        match self {
            Self::Spaces => ' ',
            Self::Tabs => '\t',
        }
    }

    /// The character that does not belong in this style's indentation.
    pub fn unexpected_char(self) -> char {
        match self {
            Self::Spaces => '\t',
            Self::Tabs => ' ',
        }
    }

    /// The opposite style.
    pub fn opposite(self) -> Self {
        match self {
            Self::Spaces => Self::Tabs,
            Self::Tabs => Self::Spaces,
        }
    }
}

impl fmt::Display for IndentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spaces => write!(f, "space"),
            Self::Tabs => write!(f, "tab"),
        }
    }
}

/// Visual length of a whitespace run in columns: tabs count `tab_width`, everything else 1.
///
/// Saturates at `usize::MAX` for absurd tab widths.
pub fn visual_length(run: &str, tab_width: usize) -> usize {
    run.chars()
        .map(|ch| if ch == '\t' { tab_width } else { 1 })
        .fold(0usize, |acc, width| acc.saturating_add(width))
}

/// Returns `true` if `run` contains at least one character of the unexpected kind for `style`.
///
/// Only one direction is checked: with [`IndentStyle::Spaces`] a tab is flagged, with
/// [`IndentStyle::Tabs`] a space is flagged.
pub fn mixes_tabs_and_spaces(run: &str, style: IndentStyle) -> bool {
    run.contains(style.unexpected_char())
}

/// Character indices (within `run`) of every unexpected character for `style`.
pub(crate) fn unexpected_positions(run: &str, style: IndentStyle) -> impl Iterator<Item = usize> {
    let unexpected = style.unexpected_char();
    run.chars()
        .enumerate()
        .filter(move |(_, ch)| *ch == unexpected)
        .map(|(idx, _)| idx)
}
