//! Indentation error classification.
//!
//! Two advisory conditions are detected per whitespace run:
//!
//! - **tab-mix**: the run contains a character that does not match the editor's indentation
//!   style. Reported once per offending character.
//! - **width**: the run's visual length is not a multiple of the tab width. Reported once for
//!   the whole run.
//!
//! Both are computed independently. A run with either condition gets error styling only; frame
//! decoration is skipped for it. Errors are never raised for suppressed lines.

use crate::decorations::{Decoration, DecorationKind, DecorationRange, DecorationsBuilder};
use crate::metrics::{IndentStyle, mixes_tabs_and_spaces, unexpected_positions, visual_length};
use crate::whitespace::WhitespaceRun;
use std::collections::HashSet;

/// Which lines are exempt from error classification in the current pass.
#[derive(Debug, Clone, Copy)]
pub struct Suppression<'a> {
    skip_all_errors: bool,
    ignored_lines: &'a HashSet<usize>,
}

impl<'a> Suppression<'a> {
    /// Create a suppression policy.
    pub fn new(skip_all_errors: bool, ignored_lines: &'a HashSet<usize>) -> Self {
        Self {
            skip_all_errors,
            ignored_lines,
        }
    }

    /// Returns `true` if errors must not be reported on `line`.
    pub fn applies_to(&self, line: usize) -> bool {
        self.skip_all_errors || self.ignored_lines.contains(&line)
    }
}

/// Errors detected on one whitespace run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunErrors {
    /// Document offsets of every character that does not match the indentation style.
    pub tab_mix: Vec<usize>,
    /// `Some(visual_length)` when the visual length is not a multiple of the tab width.
    pub width: Option<usize>,
}

impl RunErrors {
    /// Returns `true` if no error was detected; only clean runs receive frames.
    pub fn is_clean(&self) -> bool {
        self.tab_mix.is_empty() && self.width.is_none()
    }
}

/// Classifies whitespace runs against the active tab width and indentation style.
#[derive(Debug, Clone, Copy)]
pub struct ErrorClassifier {
    tab_width: usize,
    style: IndentStyle,
    detect_tab_mix: bool,
}

impl ErrorClassifier {
    /// Create a classifier. `detect_tab_mix` turns tab-mix detection on or off (width errors are
    /// always checked).
    pub fn new(tab_width: usize, style: IndentStyle, detect_tab_mix: bool) -> Self {
        Self {
            tab_width: tab_width.max(1),
            style,
            detect_tab_mix,
        }
    }

    /// Classify the run on `line`.
    pub fn classify(
        &self,
        run: &WhitespaceRun<'_>,
        line: usize,
        suppression: &Suppression<'_>,
    ) -> RunErrors {
        if suppression.applies_to(line) {
            return RunErrors::default();
        }

        let tab_mix = if self.detect_tab_mix && mixes_tabs_and_spaces(run.text, self.style) {
            unexpected_positions(run.text, self.style)
                .map(|idx| run.start + idx)
                .collect()
        } else {
            Vec::new()
        };

        let visual = visual_length(run.text, self.tab_width);
        let width = (visual % self.tab_width != 0).then_some(visual);

        RunErrors { tab_mix, width }
    }

    /// Append the decorations for `errors` on `run`.
    pub fn emit(&self, run: &WhitespaceRun<'_>, errors: &RunErrors, out: &mut DecorationsBuilder) {
        for &offset in &errors.tab_mix {
            out.push(
                DecorationKind::TabMix,
                Decoration::new(DecorationRange::new(offset, offset + 1))
                    .with_hover(tab_mix_message(self.style)),
            );
        }
        if let Some(visual) = errors.width {
            out.push(
                DecorationKind::Error,
                Decoration::new(DecorationRange::new(run.start, run.end()))
                    .with_hover(width_message(visual, self.tab_width)),
            );
        }
    }
}

fn tab_mix_message(style: IndentStyle) -> String {
    format!(
        "mixed indentation: the editor indents with {expected}s, found a {unexpected}",
        expected = style,
        unexpected = style.opposite(),
    )
}

fn width_message(visual: usize, tab_width: usize) -> String {
    format!("indentation is {visual} columns wide, not a multiple of the tab width {tab_width}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_lines() -> HashSet<usize> {
        HashSet::new()
    }

    #[test]
    fn aligned_spaces_are_clean() {
        let lines = no_lines();
        let classifier = ErrorClassifier::new(4, IndentStyle::Spaces, true);
        let errors = classifier.classify(
            &WhitespaceRun::new(0, "        "),
            0,
            &Suppression::new(false, &lines),
        );
        assert!(errors.is_clean());
    }

    #[test]
    fn misaligned_spaces_are_a_width_error() {
        let lines = no_lines();
        let classifier = ErrorClassifier::new(4, IndentStyle::Spaces, true);
        let errors = classifier.classify(
            &WhitespaceRun::new(10, "   "),
            2,
            &Suppression::new(false, &lines),
        );
        assert_eq!(errors.width, Some(3));
        assert!(errors.tab_mix.is_empty());
    }

    #[test]
    fn tab_mix_reports_each_unexpected_character() {
        let lines = no_lines();
        let classifier = ErrorClassifier::new(2, IndentStyle::Spaces, true);
        let errors = classifier.classify(
            &WhitespaceRun::new(5, "\t \t"),
            1,
            &Suppression::new(false, &lines),
        );
        assert_eq!(errors.tab_mix, vec![5, 7]);
        // 2 + 1 + 2 = 5 columns, odd.
        assert_eq!(errors.width, Some(5));
    }

    #[test]
    fn tab_mix_without_width_error_is_still_an_error() {
        let lines = no_lines();
        let classifier = ErrorClassifier::new(2, IndentStyle::Spaces, true);
        let errors = classifier.classify(
            &WhitespaceRun::new(0, "\t  "),
            0,
            &Suppression::new(false, &lines),
        );
        assert_eq!(errors.tab_mix, vec![0]);
        assert_eq!(errors.width, None);
        assert!(!errors.is_clean());
    }

    #[test]
    fn tab_mix_detection_can_be_disabled() {
        let lines = no_lines();
        let classifier = ErrorClassifier::new(2, IndentStyle::Spaces, false);
        let errors = classifier.classify(
            &WhitespaceRun::new(0, "\t  "),
            0,
            &Suppression::new(false, &lines),
        );
        assert!(errors.is_clean());
    }

    #[test]
    fn suppressed_lines_report_nothing() {
        let lines: HashSet<usize> = [3].into_iter().collect();
        let classifier = ErrorClassifier::new(4, IndentStyle::Tabs, true);
        let run = WhitespaceRun::new(0, " ");

        assert!(
            classifier
                .classify(&run, 3, &Suppression::new(false, &lines))
                .is_clean()
        );
        assert!(
            !classifier
                .classify(&run, 4, &Suppression::new(false, &lines))
                .is_clean()
        );
        assert!(
            classifier
                .classify(&run, 4, &Suppression::new(true, &lines))
                .is_clean()
        );
    }

    #[test]
    fn emitted_decorations_carry_hover_text() {
        let lines = no_lines();
        let classifier = ErrorClassifier::new(2, IndentStyle::Spaces, true);
        let run = WhitespaceRun::new(0, "\t ");
        let errors = classifier.classify(&run, 0, &Suppression::new(false, &lines));
        let mut builder = DecorationsBuilder::new(1);
        classifier.emit(&run, &errors, &mut builder);
        let set = builder.build();

        let tab_mix = set.get(DecorationKind::TabMix);
        assert_eq!(tab_mix.len(), 1);
        assert_eq!(tab_mix[0].range, DecorationRange::new(0, 1));
        assert_eq!(
            tab_mix[0].hover.as_deref(),
            Some("mixed indentation: the editor indents with spaces, found a tab")
        );

        let width = set.get(DecorationKind::Error);
        assert_eq!(width[0].range, DecorationRange::new(0, 2));
        assert_eq!(
            width[0].hover.as_deref(),
            Some("indentation is 3 columns wide, not a multiple of the tab width 2")
        );
    }
}
