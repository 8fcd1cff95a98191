// Host-side tests for the scroll-driven helpers: nav styling and parallax.

use proptest::prelude::*;
use site_core::*;

#[test]
fn nav_threshold_is_exclusive() {
    assert!(!is_scrolled(0.0, SCROLLED_THRESHOLD_PX));
    assert!(!is_scrolled(50.0, SCROLLED_THRESHOLD_PX));
    assert!(is_scrolled(50.5, SCROLLED_THRESHOLD_PX));
    assert!(is_scrolled(51.0, SCROLLED_THRESHOLD_PX));
}

#[test]
fn scroll_tracker_reports_direction() {
    let mut t = ScrollTracker::default();
    assert_eq!(t.update(0.0), ScrollDirection::Still);
    assert_eq!(t.update(120.0), ScrollDirection::Down);
    assert_eq!(t.update(120.0), ScrollDirection::Still);
    assert_eq!(t.update(30.0), ScrollDirection::Up);
    assert_eq!(t.update(30.0), ScrollDirection::Still);
}

#[test]
fn parallax_css_formats_pixels() {
    assert_eq!(translate_y_css(parallax_offset(100.0, 0.5)), "translateY(50px)");
    assert_eq!(translate_y_css(0.0), "translateY(0px)");
}

proptest! {
    #[test]
    fn scrolled_iff_above_fifty(s in 0.0f64..100_000.0) {
        prop_assert_eq!(is_scrolled(s, SCROLLED_THRESHOLD_PX), s > 50.0);
    }

    #[test]
    fn parallax_tracks_three_tenths(s in 0.0f64..100_000.0) {
        let first = parallax_offset(s, PARALLAX_RATE);
        prop_assert_eq!(first, 0.3 * s);
        // Repeated events at the same offset land on the same value.
        prop_assert_eq!(parallax_offset(s, PARALLAX_RATE), first);
    }
}
