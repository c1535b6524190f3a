//! Frame assignment.
//!
//! Depth segments are bucketed into `N` cyclic color groups by `(depth - 1) mod N`. Depth 0 is
//! never framed, so the editor's own background shows through the outermost level.
//!
//! The inner frame covers the rest of the line after its indentation and is extended with a
//! filler up to the longest line of the document, so frames of equal depth line up vertically.

use crate::decorations::{
    Decoration, DecorationKind, DecorationRange, DecorationsBuilder, RenderHint,
};
use crate::depth::DepthSegment;
use crate::document::{LineInfo, TextDocument};
use crate::metrics::visual_length;
use crate::whitespace::WhitespaceRun;

/// Color group for `depth` in a palette of `group_count` colors; `None` for depth 0.
pub fn color_group(depth: usize, group_count: usize) -> Option<usize> {
    depth
        .checked_sub(1)
        .map(|level| level % group_count.max(1))
}

/// Length in characters of the longest line of `document`.
pub fn longest_line_length<D>(document: &D) -> usize
where
    D: TextDocument + ?Sized,
{
    (0..document.line_count())
        .filter_map(|line| document.line_at(line))
        .map(|info| info.char_len())
        .max()
        .unwrap_or(0)
}

/// Assigns frames for one analysis pass.
#[derive(Debug, Clone, Copy)]
pub struct FrameAssigner {
    group_count: usize,
    tab_width: usize,
    longest_line: usize,
    whitespace_only: bool,
}

impl FrameAssigner {
    /// Create an assigner.
    ///
    /// `longest_line` is the document's longest line in characters; `whitespace_only`
    /// suppresses inner frames.
    pub fn new(
        group_count: usize,
        tab_width: usize,
        longest_line: usize,
        whitespace_only: bool,
    ) -> Self {
        Self {
            group_count: group_count.max(1),
            tab_width: tab_width.max(1),
            longest_line,
            whitespace_only,
        }
    }

    /// Frame one depth segment, unless it is the outermost level.
    pub fn outer_frame(&self, segment: &DepthSegment) -> Option<(DecorationKind, Decoration)> {
        let group = color_group(segment.depth, self.group_count)?;
        Some((
            DecorationKind::OuterFrame(group),
            Decoration::new(segment.range()),
        ))
    }

    /// Frame the remainder of `line` after `run`.
    ///
    /// Returns `None` for runs narrower than one tab width, and when inner frames are disabled.
    pub fn inner_frame(
        &self,
        run: &WhitespaceRun<'_>,
        line: &LineInfo,
    ) -> Option<(DecorationKind, Decoration)> {
        if self.whitespace_only {
            return None;
        }
        let tab_depth = visual_length(run.text, self.tab_width) / self.tab_width;
        let group = color_group(tab_depth, self.group_count)?;
        let cells = self.longest_line.saturating_sub(line.char_len());
        Some((
            DecorationKind::InnerFrame(group),
            Decoration::new(DecorationRange::new(run.end(), line.end()))
                .with_hint(RenderHint::AppendFiller { cells }),
        ))
    }

    /// Append the outer frames of `segments` and the inner frame of `line`.
    pub fn emit<I>(
        &self,
        run: &WhitespaceRun<'_>,
        segments: I,
        line: Option<&LineInfo>,
        out: &mut DecorationsBuilder,
    ) where
        I: IntoIterator<Item = DepthSegment>,
    {
        for segment in segments {
            if let Some((kind, decoration)) = self.outer_frame(&segment) {
                out.push(kind, decoration);
            }
        }
        if let Some((kind, decoration)) = line.and_then(|line| self.inner_frame(run, line)) {
            out.push(kind, decoration);
        }
    }
}
