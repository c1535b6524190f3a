//! Leading whitespace runs.
//!
//! A [`WhitespaceRun`] is the maximal run of `'\t'` / `' '` characters at the start of a line.
//! Runs never cross a line boundary: whitespace after a `'\n'` starts a new run on the next line.
//! Lines that start with any other character produce no run.

use crate::char_index::CharIndex;
use regex::Regex;
use std::sync::LazyLock;

static LEADING_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[\t ]+").expect("leading whitespace pattern is valid"));

/// Leading whitespace of one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WhitespaceRun<'a> {
    /// Character offset of the first whitespace character (the start of the line).
    pub start: usize,
    /// The whitespace itself; only `'\t'` and `' '`.
    pub text: &'a str,
}

impl<'a> WhitespaceRun<'a> {
    /// Create a run starting at `start`.
    pub fn new(start: usize, text: &'a str) -> Self {
        Self { start, text }
    }

    /// Length of the run in characters.
    pub fn len(&self) -> usize {
        // Tabs and spaces are single-byte, so bytes == chars.
        self.text.len()
    }

    /// Returns `true` if the run has no characters.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Exclusive end offset of the run (where the line content begins).
    pub fn end(&self) -> usize {
        self.start + self.len()
    }
}

/// Iterate every leading whitespace run of `text`, in ascending offset order.
///
/// The iterator is lazy and keeps no state beyond the borrowed text; calling this again starts
/// a fresh scan.
pub(crate) fn runs_with_index<'t>(
    text: &'t str,
    index: &CharIndex,
) -> impl Iterator<Item = WhitespaceRun<'t>> {
    LEADING_WHITESPACE
        .find_iter(text)
        .map(move |m| WhitespaceRun::new(index.byte_to_char(m.start()), m.as_str()))
}

/// Collect the leading whitespace runs of `text`.
///
/// Offsets are character offsets. Use this for one-off scans; [`analyze_document`] streams the
/// runs without collecting them.
///
/// [`analyze_document`]: crate::analyze_document
pub fn leading_whitespace_runs(text: &str) -> Vec<WhitespaceRun<'_>> {
    let index = CharIndex::new(text);
    runs_with_index(text, &index).collect()
}
