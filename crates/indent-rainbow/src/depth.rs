//! Depth partitioning.
//!
//! A whitespace run is split left to right into consecutive segments, one per indentation
//! level. At each step the character under the cursor decides the width: a literal tab is one
//! segment by itself, anything else consumes up to `tab_width` characters (clipped at the end of
//! the run, never padded). Segments are contiguous and cover the run exactly.
//!
//! Partitioning does not validate alignment; it also tolerates runs that mix tabs and spaces.

use crate::decorations::DecorationRange;
use crate::whitespace::WhitespaceRun;

/// One indentation level inside a whitespace run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthSegment {
    /// Start offset (inclusive), in characters from the start of the document.
    pub start: usize,
    /// End offset (exclusive).
    pub end: usize,
    /// Zero-based depth; segment 0 is the outermost level.
    pub depth: usize,
}

impl DepthSegment {
    /// The segment as a decoration range.
    pub fn range(&self) -> DecorationRange {
        DecorationRange::new(self.start, self.end)
    }

    /// Width of the segment in characters.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` for a zero-width segment (never produced by [`DepthSegments`]).
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Iterator over the depth segments of a run.
#[derive(Debug, Clone)]
pub struct DepthSegments<'a> {
    bytes: &'a [u8],
    base: usize,
    tab_width: usize,
    pos: usize,
    depth: usize,
}

impl<'a> DepthSegments<'a> {
    /// Partition `run` using `tab_width` (a zero width is treated as 1).
    pub fn new(run: &WhitespaceRun<'a>, tab_width: usize) -> Self {
        Self {
            bytes: run.text.as_bytes(),
            base: run.start,
            tab_width: tab_width.max(1),
            pos: 0,
            depth: 0,
        }
    }
}

impl Iterator for DepthSegments<'_> {
    type Item = DepthSegment;

    fn next(&mut self) -> Option<Self::Item> {
        let remaining = self.bytes.len().checked_sub(self.pos).filter(|n| *n > 0)?;
        let step = if self.bytes[self.pos] == b'\t' {
            1
        } else {
            self.tab_width.min(remaining)
        };

        let segment = DepthSegment {
            start: self.base + self.pos,
            end: self.base + self.pos + step,
            depth: self.depth,
        };
        self.pos += step;
        self.depth += 1;
        Some(segment)
    }
}
