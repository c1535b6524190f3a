//! One full-document analysis pass.
//!
//! The pass reads the document once, scans every leading whitespace run in order and builds a
//! complete [`DecorationRangeSet`]. For each run, error classification comes first; a run with a
//! tab-mix or width error gets error decorations only, every other run is partitioned into depth
//! segments and framed. The work is synchronous and proportional to the document size.

use crate::char_index::CharIndex;
use crate::classify::{ErrorClassifier, Suppression};
use crate::decorations::{DecorationRangeSet, DecorationsBuilder};
use crate::depth::DepthSegments;
use crate::document::TextDocument;
use crate::frames::{FrameAssigner, longest_line_length};
use crate::patterns::IgnorePatterns;
use crate::settings::IndentSettings;
use crate::whitespace::runs_with_index;
use std::collections::HashSet;
use tracing::debug;

/// Inputs of one analysis pass besides the document.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisOptions<'a> {
    /// Tab width and indentation style of the active editor.
    pub settings: IndentSettings,
    /// Number of frame colors (`N`); at least 1.
    pub group_count: usize,
    /// Skip error classification entirely (language policy).
    pub skip_all_errors: bool,
    /// Detect tab/space mixing (disabled when no tab-mix style is configured).
    pub detect_tab_mix: bool,
    /// Frame only the whitespace, never the trailing line content.
    pub whitespace_only: bool,
    /// Lines matching any of these patterns are exempt from errors.
    pub ignore_patterns: &'a IgnorePatterns,
}

impl<'a> AnalysisOptions<'a> {
    /// Options with tab-mix detection on, errors enabled and inner frames drawn.
    pub fn new(
        settings: IndentSettings,
        group_count: usize,
        ignore_patterns: &'a IgnorePatterns,
    ) -> Self {
        Self {
            settings,
            group_count: group_count.max(1),
            skip_all_errors: false,
            detect_tab_mix: true,
            whitespace_only: false,
            ignore_patterns,
        }
    }

    /// Set whether error classification is skipped.
    pub fn with_skip_all_errors(mut self, skip: bool) -> Self {
        self.skip_all_errors = skip;
        self
    }

    /// Set whether tab/space mixing is detected.
    pub fn with_tab_mix_detection(mut self, detect: bool) -> Self {
        self.detect_tab_mix = detect;
        self
    }

    /// Set whether only whitespace is framed.
    pub fn with_whitespace_only(mut self, whitespace_only: bool) -> Self {
        self.whitespace_only = whitespace_only;
        self
    }
}

/// Analyze `document` and return the complete decoration set.
///
/// Running this twice on an unchanged document with unchanged options yields identical sets.
pub fn analyze_document<D>(document: &D, options: &AnalysisOptions<'_>) -> DecorationRangeSet
where
    D: TextDocument + ?Sized,
{
    let text = document.text();
    let index = CharIndex::new(&text);
    let tab_width = options.settings.tab_width;

    let ignored_lines = if options.skip_all_errors {
        HashSet::new()
    } else {
        options
            .ignore_patterns
            .suppressed_lines_in(&text, &index, document)
    };
    let suppression = Suppression::new(options.skip_all_errors, &ignored_lines);

    let classifier = ErrorClassifier::new(
        tab_width,
        options.settings.style,
        options.detect_tab_mix,
    );
    let frames = FrameAssigner::new(
        options.group_count,
        tab_width,
        longest_line_length(document),
        options.whitespace_only,
    );

    let mut builder = DecorationsBuilder::new(options.group_count);
    let mut runs = 0usize;
    let mut flagged = 0usize;

    for run in runs_with_index(&text, &index) {
        runs += 1;
        let line = document.position_at(run.start).line;
        let errors = classifier.classify(&run, line, &suppression);
        if !errors.is_clean() {
            flagged += 1;
            classifier.emit(&run, &errors, &mut builder);
            continue;
        }

        let info = document.line_at(line);
        frames.emit(
            &run,
            DepthSegments::new(&run, tab_width),
            info.as_ref(),
            &mut builder,
        );
    }

    let decorations = builder.build();
    debug!(
        target: "analysis.pass",
        chars = index.char_count(),
        tab_width,
        runs,
        flagged,
        suppressed_lines = ignored_lines.len(),
        decorations = decorations.decoration_count(),
        "analysis_pass_complete"
    );
    decorations
}
