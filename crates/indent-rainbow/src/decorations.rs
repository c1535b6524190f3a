//! Decoration data model.
//!
//! An analysis pass produces one [`DecorationRangeSet`]: for every [`DecorationKind`] the full,
//! ordered list of ranges that should carry that kind's style. The host applies the set through
//! a [`DecorationSink`], replacing whatever it rendered for each kind before. Sets are never
//! diffed against the previous pass.

use std::collections::BTreeMap;

/// A decoration kind; each maps to one style handle in the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DecorationKind {
    /// Background of one indentation segment, in color group `n`.
    OuterFrame(usize),
    /// Trailing region of a line (content plus end-of-line filler), in color group `n`.
    InnerFrame(usize),
    /// Indentation whose visual length is not a multiple of the tab width.
    Error,
    /// A whitespace character that does not match the editor's indentation style.
    TabMix,
}

impl DecorationKind {
    /// Every kind for a palette of `group_count` colors, in a stable order.
    pub fn all(group_count: usize) -> impl Iterator<Item = Self> {
        (0..group_count)
            .map(Self::OuterFrame)
            .chain((0..group_count).map(Self::InnerFrame))
            .chain([Self::Error, Self::TabMix])
    }

    /// The color group for frame kinds.
    pub fn color_group(self) -> Option<usize> {
        match self {
            Self::OuterFrame(group) | Self::InnerFrame(group) => Some(group),
            Self::Error | Self::TabMix => None,
        }
    }
}

/// A half-open character-offset range (`start..end`) in the document.
///
/// An empty range (`start == end`) is a point anchor, used by inner frames of
/// whitespace-only lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DecorationRange {
    /// Start offset (inclusive), in `char`s from the start of the document.
    pub start: usize,
    /// End offset (exclusive), in `char`s from the start of the document.
    pub end: usize,
}

impl DecorationRange {
    /// Create a new decoration range.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the range in characters.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if the range covers no characters.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Extra rendering instructions attached to a decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderHint {
    /// Append a zero-width filler after the range whose horizontal extent is `cells` character
    /// cells, painted with the decoration's style.
    AppendFiller {
        /// Width of the filler in character cells.
        cells: usize,
    },
}

/// A single decoration item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    /// Anchor range in character offsets.
    pub range: DecorationRange,
    /// Optional hover text (plain text).
    pub hover: Option<String>,
    /// Optional rendering hint.
    pub hint: Option<RenderHint>,
}

impl Decoration {
    /// A decoration with neither hover text nor rendering hint.
    pub fn new(range: DecorationRange) -> Self {
        Self {
            range,
            hover: None,
            hint: None,
        }
    }

    /// Attach hover text.
    pub fn with_hover(mut self, hover: impl Into<String>) -> Self {
        self.hover = Some(hover.into());
        self
    }

    /// Attach a rendering hint.
    pub fn with_hint(mut self, hint: RenderHint) -> Self {
        self.hint = Some(hint);
        self
    }
}

/// Host-side receiver of decorations.
pub trait DecorationSink {
    /// Replace every rendered range of `kind` with `decorations` (an empty slice clears it).
    fn set_decorations(&mut self, kind: DecorationKind, decorations: &[Decoration]);
}

/// Accumulates decorations during one analysis pass.
///
/// Every kind of the palette starts out present and empty, so the finished set clears kinds
/// that received nothing in this pass.
#[derive(Debug, Clone)]
pub struct DecorationsBuilder {
    group_count: usize,
    layers: BTreeMap<DecorationKind, Vec<Decoration>>,
}

impl DecorationsBuilder {
    /// Create a builder for a palette of `group_count` colors (at least one).
    pub fn new(group_count: usize) -> Self {
        let group_count = group_count.max(1);
        let layers = DecorationKind::all(group_count)
            .map(|kind| (kind, Vec::new()))
            .collect();
        Self {
            group_count,
            layers,
        }
    }

    /// Number of color groups.
    pub fn group_count(&self) -> usize {
        self.group_count
    }

    /// Append a decoration to `kind`.
    pub fn push(&mut self, kind: DecorationKind, decoration: Decoration) {
        debug_assert!(
            kind.color_group().is_none_or(|group| group < self.group_count),
            "color group out of range"
        );
        self.layers.entry(kind).or_default().push(decoration);
    }

    /// Freeze the accumulated decorations.
    pub fn build(self) -> DecorationRangeSet {
        DecorationRangeSet {
            group_count: self.group_count,
            layers: self.layers,
        }
    }
}

/// The result of one analysis pass: decorations per kind, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecorationRangeSet {
    group_count: usize,
    layers: BTreeMap<DecorationKind, Vec<Decoration>>,
}

impl DecorationRangeSet {
    /// A set with every kind present and empty; applying it clears all decorations.
    pub fn cleared(group_count: usize) -> Self {
        DecorationsBuilder::new(group_count).build()
    }

    /// Number of color groups the set was built for.
    pub fn group_count(&self) -> usize {
        self.group_count
    }

    /// Decorations of `kind` (empty if none).
    pub fn get(&self, kind: DecorationKind) -> &[Decoration] {
        self.layers.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    /// Iterate `(kind, decorations)` pairs, including empty kinds.
    pub fn iter(&self) -> impl Iterator<Item = (DecorationKind, &[Decoration])> {
        self.layers
            .iter()
            .map(|(kind, decorations)| (*kind, decorations.as_slice()))
    }

    /// Total number of decorations across all kinds.
    pub fn decoration_count(&self) -> usize {
        self.layers.values().map(Vec::len).sum()
    }

    /// Returns `true` if no kind carries any decoration.
    pub fn is_empty(&self) -> bool {
        self.layers.values().all(Vec::is_empty)
    }

    /// Push the set to `sink`: exactly one `set_decorations` call per kind.
    pub fn apply_to<S>(&self, sink: &mut S)
    where
        S: DecorationSink + ?Sized,
    {
        for (kind, decorations) in self.iter() {
            sink.set_decorations(kind, decorations);
        }
    }
}
