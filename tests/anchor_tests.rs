// Host-side tests for in-page anchor scrolling.

use site_core::*;

#[test]
fn fragment_id_extracts_target() {
    assert_eq!(fragment_id("#about"), Some("about"));
    assert_eq!(fragment_id("#"), None);
    assert_eq!(fragment_id("/pricing#plans"), None);
    assert_eq!(fragment_id(""), None);
}

#[test]
fn target_leaves_room_for_nav() {
    // #about sits at document offset 600, page not scrolled, nav is 80 tall.
    assert_eq!(scroll_target(600.0, 0.0, 80.0, ANCHOR_GAP_PX), 500.0);
}

#[test]
fn target_accounts_for_current_scroll() {
    // Same element seen from 400px down: its viewport top is 200.
    assert_eq!(scroll_target(200.0, 400.0, 80.0, ANCHOR_GAP_PX), 500.0);
}
