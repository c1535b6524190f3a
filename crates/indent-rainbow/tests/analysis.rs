use indent_rainbow::{
    AnalysisOptions, DecorationKind, DecorationRange, DecorationRangeSet, IgnorePatterns,
    IndentSettings, IndentStyle, LineIndex, RenderHint, analyze_document,
};
use pretty_assertions::assert_eq;

fn analyze(
    text: &str,
    tab_width: usize,
    style: IndentStyle,
    patterns: &IgnorePatterns,
) -> DecorationRangeSet {
    let doc = LineIndex::from_text(text);
    let options = AnalysisOptions::new(IndentSettings::new(tab_width, style), 4, patterns);
    analyze_document(&doc, &options)
}

fn ranges(set: &DecorationRangeSet, kind: DecorationKind) -> Vec<DecorationRange> {
    set.get(kind).iter().map(|d| d.range).collect()
}

fn frame_count(set: &DecorationRangeSet) -> usize {
    set.iter()
        .filter(|(kind, _)| kind.color_group().is_some())
        .map(|(_, decorations)| decorations.len())
        .sum()
}

#[test]
fn test_tab_indented_line_is_framed_from_first_level() {
    let set = analyze("\tfoo", 4, IndentStyle::Tabs, &IgnorePatterns::default());

    // The tab is depth 0 and stays unframed; the content is one level deep.
    assert_eq!(frame_count(&set), 1);
    let inner = set.get(DecorationKind::InnerFrame(0));
    assert_eq!(inner[0].range, DecorationRange::new(1, 4));
    assert_eq!(inner[0].hint, Some(RenderHint::AppendFiller { cells: 0 }));
    assert!(set.get(DecorationKind::TabMix).is_empty());
    assert!(set.get(DecorationKind::Error).is_empty());
}

#[test]
fn test_misaligned_spaces_raise_width_error() {
    let set = analyze("   foo", 4, IndentStyle::Spaces, &IgnorePatterns::default());

    let errors = set.get(DecorationKind::Error);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].range, DecorationRange::new(0, 3));
    assert_eq!(
        errors[0].hover.as_deref(),
        Some("indentation is 3 columns wide, not a multiple of the tab width 4")
    );
    assert_eq!(frame_count(&set), 0);
}

#[test]
fn test_tab_in_space_indented_editor_is_tab_mix() {
    let set = analyze("\t foo", 2, IndentStyle::Spaces, &IgnorePatterns::default());

    let tab_mix = set.get(DecorationKind::TabMix);
    assert_eq!(tab_mix.len(), 1);
    assert_eq!(tab_mix[0].range, DecorationRange::new(0, 1));
    assert_eq!(
        tab_mix[0].hover.as_deref(),
        Some("mixed indentation: the editor indents with spaces, found a tab")
    );
    // Two columns for the tab plus one space: also misaligned.
    assert_eq!(
        ranges(&set, DecorationKind::Error),
        vec![DecorationRange::new(0, 2)]
    );
    assert_eq!(frame_count(&set), 0);
}

#[test]
fn test_one_tab_mix_range_per_unexpected_character() {
    let set = analyze("  \t \t x", 4, IndentStyle::Tabs, &IgnorePatterns::default());

    assert_eq!(
        ranges(&set, DecorationKind::TabMix),
        vec![
            DecorationRange::new(0, 1),
            DecorationRange::new(1, 2),
            DecorationRange::new(3, 4),
            DecorationRange::new(5, 6),
        ]
    );
}

#[test]
fn test_tab_mix_detection_can_be_disabled() {
    let doc = LineIndex::from_text("\t  x");
    let patterns = IgnorePatterns::default();
    let options = AnalysisOptions::new(IndentSettings::new(2, IndentStyle::Spaces), 4, &patterns)
        .with_tab_mix_detection(false);
    let set = analyze_document(&doc, &options);

    assert!(set.get(DecorationKind::TabMix).is_empty());
    assert!(set.get(DecorationKind::Error).is_empty());
    // The mixed run is partitioned positionally: tab (depth 0), then two spaces (depth 1).
    assert_eq!(
        ranges(&set, DecorationKind::OuterFrame(0)),
        vec![DecorationRange::new(1, 3)]
    );
}

#[test]
fn test_ignore_pattern_suppresses_errors_but_keeps_frames() {
    let (patterns, rejected) = IgnorePatterns::compile(["/[ \t]+[/]{2}/g"]);
    assert!(rejected.is_empty());

    let text = "fn x\n      // comment\n   y\n";
    let set = analyze(text, 4, IndentStyle::Spaces, &patterns);

    // Line 1 (6 spaces) is misaligned but ignored; line 2 (3 spaces) is not.
    assert_eq!(
        ranges(&set, DecorationKind::Error),
        vec![DecorationRange::new(22, 25)]
    );
    assert_eq!(
        ranges(&set, DecorationKind::OuterFrame(0)),
        vec![DecorationRange::new(9, 11)]
    );
    assert_eq!(
        ranges(&set, DecorationKind::InnerFrame(0)),
        vec![DecorationRange::new(11, 21)]
    );
}

#[test]
fn test_invalid_ignore_pattern_is_isolated() {
    let (patterns, rejected) = IgnorePatterns::compile(["/(unclosed/", "/^ +#/m"]);
    assert_eq!(rejected.len(), 1);
    assert_eq!(patterns.patterns().len(), 1);

    let set = analyze("x\n   # note\n", 4, IndentStyle::Spaces, &patterns);
    assert!(set.get(DecorationKind::Error).is_empty());
}

#[test]
fn test_skip_all_errors_frames_everything() {
    let doc = LineIndex::from_text("\t x\n   y\n");
    let patterns = IgnorePatterns::default();
    let options = AnalysisOptions::new(IndentSettings::new(4, IndentStyle::Spaces), 4, &patterns)
        .with_skip_all_errors(true);
    let set = analyze_document(&doc, &options);

    assert!(set.get(DecorationKind::Error).is_empty());
    assert!(set.get(DecorationKind::TabMix).is_empty());
    assert_eq!(
        ranges(&set, DecorationKind::OuterFrame(0)),
        vec![DecorationRange::new(1, 2)]
    );
    // floor(5 / 4) = 1 for the first line, floor(3 / 4) = 0 for the second.
    assert_eq!(
        ranges(&set, DecorationKind::InnerFrame(0)),
        vec![DecorationRange::new(2, 3)]
    );
}

#[test]
fn test_filler_extends_to_longest_line_in_characters() {
    let set = analyze(
        "日本語ですよね\n    x\n",
        4,
        IndentStyle::Spaces,
        &IgnorePatterns::default(),
    );

    let inner = set.get(DecorationKind::InnerFrame(0));
    assert_eq!(inner.len(), 1);
    assert_eq!(inner[0].range, DecorationRange::new(12, 13));
    assert_eq!(inner[0].hint, Some(RenderHint::AppendFiller { cells: 2 }));
}

#[test]
fn test_whitespace_only_mode_keeps_outer_frames() {
    let doc = LineIndex::from_text("        x");
    let patterns = IgnorePatterns::default();
    let options = AnalysisOptions::new(IndentSettings::new(4, IndentStyle::Spaces), 4, &patterns)
        .with_whitespace_only(true);
    let set = analyze_document(&doc, &options);

    assert_eq!(
        ranges(&set, DecorationKind::OuterFrame(0)),
        vec![DecorationRange::new(4, 8)]
    );
    assert!(
        (0..4).all(|group| set.get(DecorationKind::InnerFrame(group)).is_empty())
    );
}

#[test]
fn test_document_without_indentation_yields_cleared_set() {
    let set = analyze("a\nb\n\nc", 4, IndentStyle::Spaces, &IgnorePatterns::default());
    assert!(set.is_empty());
    assert_eq!(set, DecorationRangeSet::cleared(4));
}

#[test]
fn test_huge_tab_width_does_not_overflow() {
    let tab_width = usize::MAX / 2 + 1;
    let set = analyze("\t\tx\n", tab_width, IndentStyle::Tabs, &IgnorePatterns::default());

    // Two tabs saturate at usize::MAX, which is not a multiple of the tab width.
    assert_eq!(
        ranges(&set, DecorationKind::Error),
        vec![DecorationRange::new(0, 2)]
    );
    assert_eq!(frame_count(&set), 0);
}
