#![warn(missing_docs)]
//! Indent Rainbow - Headless Indentation Analysis Kernel
//!
//! # Overview
//!
//! `indent-rainbow` analyzes the leading whitespace of every line in a document and turns it into
//! decoration ranges a host editor can paint: nested "frames" for each indentation level, plus
//! advisory markers for indentation that is not a multiple of the tab width or that mixes tabs
//! and spaces. It never edits the document and knows nothing about rendering; the host supplies
//! text through [`TextDocument`] and receives ranges through [`DecorationSink`].
//!
//! # Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  analyze_document (one full pass)           │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  FrameAssigner (color groups, inner frame)  │  ← Decoration assignment
//! ├─────────────────────────────────────────────┤
//! │  DepthSegments (one level per segment)      │  ← Depth partitioning
//! ├─────────────────────────────────────────────┤
//! │  ErrorClassifier + IgnorePatterns           │  ← Advisory errors
//! ├─────────────────────────────────────────────┤
//! │  Tab metrics (visual length, tab/space mix) │
//! ├─────────────────────────────────────────────┤
//! │  Leading whitespace runs (`(?m)^[\t ]+`)    │  ← Text scanning
//! ├─────────────────────────────────────────────┤
//! │  LineIndex (Rope-based TextDocument)        │  ← Line access
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use indent_rainbow::{
//!     AnalysisOptions, DecorationKind, IgnorePatterns, IndentSettings, IndentStyle, LineIndex,
//!     analyze_document,
//! };
//!
//! let doc = LineIndex::from_text("fn main() {\n    let x = 1;\n   let y = 2;\n}\n");
//! let patterns = IgnorePatterns::default();
//! let options = AnalysisOptions::new(IndentSettings::new(4, IndentStyle::Spaces), 4, &patterns);
//!
//! let decorations = analyze_document(&doc, &options);
//!
//! // Line 1 is one level deep: its content gets the first inner frame color.
//! assert_eq!(decorations.get(DecorationKind::InnerFrame(0)).len(), 1);
//! // Line 2 is indented by three spaces, which is not a multiple of four.
//! assert_eq!(decorations.get(DecorationKind::Error).len(), 1);
//! ```
//!
//! # Module Description
//!
//! - [`document`] - host document accessor trait and positions
//! - [`line_index`] - rope based [`TextDocument`] implementation
//! - [`whitespace`] - leading whitespace runs
//! - [`metrics`] - naive tab visual length and tab/space mix detection
//! - [`patterns`] - user ignore-line patterns
//! - [`classify`] - tab-mix and tab-width error classification
//! - [`depth`] - depth partitioning of a run
//! - [`frames`] - color group assignment and the trailing inner frame
//! - [`decorations`] - decoration model, builder and sink
//! - [`analysis`] - one full-document analysis pass

pub mod analysis;
mod char_index;
pub mod classify;
pub mod decorations;
pub mod depth;
pub mod document;
pub mod frames;
pub mod line_index;
pub mod metrics;
pub mod patterns;
pub mod settings;
pub mod whitespace;

pub use analysis::{AnalysisOptions, analyze_document};
pub use classify::{ErrorClassifier, RunErrors, Suppression};
pub use decorations::{
    Decoration, DecorationKind, DecorationRange, DecorationRangeSet, DecorationSink,
    DecorationsBuilder, RenderHint,
};
pub use depth::{DepthSegment, DepthSegments};
pub use document::{LineInfo, Position, TextDocument};
pub use frames::{FrameAssigner, color_group, longest_line_length};
pub use line_index::LineIndex;
pub use metrics::{IndentStyle, mixes_tabs_and_spaces, visual_length};
pub use patterns::{IgnorePattern, IgnorePatternError, IgnorePatterns};
pub use settings::{DEFAULT_TAB_WIDTH, EditorSettingsSource, IndentSettings};
pub use whitespace::{WhitespaceRun, leading_whitespace_runs};
