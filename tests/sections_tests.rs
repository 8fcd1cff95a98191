// Host-side tests for active-section detection.

use site_core::*;

fn page() -> Vec<SectionSpan> {
    vec![
        SectionSpan::new("intro", 0.0, 300.0),
        SectionSpan::new("about", 300.0, 300.0),
        SectionSpan::new("contact", 600.0, 400.0),
    ]
}

#[test]
fn look_ahead_moves_probe_into_next_section() {
    let spans = page();
    assert_eq!(active_section(&spans, 250.0, SECTION_LOOKAHEAD_PX), Some("about"));
    assert_eq!(active_section(&spans, 150.0, SECTION_LOOKAHEAD_PX), Some("intro"));
}

#[test]
fn span_is_half_open() {
    let s = SectionSpan::new("x", 300.0, 300.0);
    assert!(s.contains(300.0));
    assert!(s.contains(599.9));
    assert!(!s.contains(600.0));
    assert!(!s.contains(299.9));
}

#[test]
fn no_section_under_probe() {
    let spans = page();
    assert_eq!(active_section(&spans, 5_000.0, SECTION_LOOKAHEAD_PX), None);
    assert_eq!(active_section(&[], 0.0, SECTION_LOOKAHEAD_PX), None);
}

#[test]
fn overlapping_sections_last_in_document_order_wins() {
    let spans = vec![
        SectionSpan::new("a", 0.0, 500.0),
        SectionSpan::new("b", 200.0, 500.0),
    ];
    assert_eq!(active_section(&spans, 200.0, SECTION_LOOKAHEAD_PX), Some("b"));
}

#[test]
fn highlighter_reports_only_changes() {
    let spans = page();
    let mut hl = ActiveHighlighter::default();
    assert_eq!(hl.update(&spans, 0.0, SECTION_LOOKAHEAD_PX), Some("intro"));
    assert_eq!(hl.update(&spans, 50.0, SECTION_LOOKAHEAD_PX), None);
    assert_eq!(hl.update(&spans, 250.0, SECTION_LOOKAHEAD_PX), Some("about"));
    assert_eq!(hl.update(&spans, 260.0, SECTION_LOOKAHEAD_PX), None);
}

#[test]
fn highlighter_keeps_last_match_when_nothing_matches() {
    let spans = page();
    let mut hl = ActiveHighlighter::default();
    hl.update(&spans, 700.0, SECTION_LOOKAHEAD_PX);
    assert_eq!(hl.update(&spans, 9_000.0, SECTION_LOOKAHEAD_PX), None);
    // Still on "contact": coming back inside it is not a change.
    assert_eq!(hl.update(&spans, 700.0, SECTION_LOOKAHEAD_PX), None);
}
