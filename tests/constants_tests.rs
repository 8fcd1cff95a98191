// Host-side tests for tuning constants and the markup contract.

use site_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(SCROLLED_THRESHOLD_PX >= 0.0);
    assert!(SECTION_LOOKAHEAD_PX >= 0.0);
    assert!(ANCHOR_GAP_PX >= 0.0);
    assert!(REVEAL_MARGIN_BOTTOM_PX >= 0.0);

    // Fractions
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
    assert!(PARALLAX_RATE > 0.0 && PARALLAX_RATE < 1.0);

    // Cooldown should cover a CSS transition but not feel sluggish
    assert!((100..=1_000).contains(&MENU_COOLDOWN_MS));
}

#[test]
fn marker_classes_are_distinct() {
    let classes = [
        CLASS_SCROLLED,
        CLASS_OPEN,
        CLASS_DRAGGING,
        CLASS_VISIBLE,
        CLASS_ACTIVE,
        CLASS_MENU_OPEN,
    ];
    for (i, a) in classes.iter().enumerate() {
        for b in &classes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn selectors_match_markup_contract() {
    assert_eq!(ANCHOR_SELECTOR, "a[href^=\"#\"]");
    assert_eq!(REVEAL_SELECTOR, "[data-animate]");
    assert_eq!(DELAY_ATTR, "data-delay");
    assert!(MOBILE_LINK_SELECTOR.contains(".nav__mobile-link"));
    assert!(MOBILE_LINK_SELECTOR.contains(".nav__mobile-cta"));
}
