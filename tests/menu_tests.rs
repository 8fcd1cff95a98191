// Host-side tests for the mobile menu state machine.

use std::time::Duration;

use site_core::*;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn controller() -> MenuController {
    MenuController::new(ms(MENU_COOLDOWN_MS))
}

#[test]
fn open_records_scroll_and_locks() {
    let mut m = controller();
    let t = m.open(ms(0), 640.0);
    assert_eq!(t, Some(MenuTransition::Opened { saved_scroll_y: 640.0 }));
    assert_eq!(m.state(), MenuState::Open { saved_scroll_y: 640.0 });
    assert!(m.is_busy(ms(10)));
    assert!(!m.is_busy(ms(450)));
}

#[test]
fn second_open_within_cooldown_is_ignored() {
    let mut m = controller();
    m.open(ms(0), 100.0);
    assert_eq!(m.open(ms(100), 900.0), None);
    assert_eq!(m.state(), MenuState::Open { saved_scroll_y: 100.0 });
}

#[test]
fn open_while_open_is_ignored_after_cooldown_too() {
    let mut m = controller();
    m.open(ms(0), 100.0);
    assert_eq!(m.open(ms(2_000), 900.0), None);
    assert_eq!(m.state(), MenuState::Open { saved_scroll_y: 100.0 });
}

#[test]
fn close_during_cooldown_is_ignored() {
    let mut m = controller();
    m.open(ms(0), 100.0);
    assert_eq!(m.close(ms(449)), None);
    assert!(m.is_open());
}

#[test]
fn close_after_cooldown_restores_saved_scroll() {
    let mut m = controller();
    m.open(ms(0), 1234.5);
    let t = m.close(ms(450));
    assert_eq!(t, Some(MenuTransition::Closed { restore_scroll_y: 1234.5 }));
    assert_eq!(m.state(), MenuState::Closed);
    assert!(m.is_busy(ms(451)));
}

#[test]
fn close_while_closed_does_not_start_cooldown() {
    let mut m = controller();
    assert_eq!(m.close(ms(0)), None);
    assert!(!m.is_busy(ms(0)));
    assert!(m.open(ms(1), 0.0).is_some());
}

#[test]
fn toggle_alternates_between_states() {
    let mut m = controller();
    assert!(matches!(m.toggle(ms(0), 10.0), Some(MenuTransition::Opened { .. })));
    // Double click: second toggle lands inside the cooldown.
    assert_eq!(m.toggle(ms(50), 10.0), None);
    assert!(matches!(m.toggle(ms(500), 999.0), Some(MenuTransition::Closed { restore_scroll_y }) if restore_scroll_y == 10.0));
    assert!(!m.is_open());
}

#[test]
fn escape_only_closes_when_open() {
    let mut m = controller();
    assert_eq!(m.on_key(ms(0), ESCAPE_KEY), None);
    assert!(!m.is_open());

    m.open(ms(0), 0.0);
    assert_eq!(m.on_key(ms(600), "Enter"), None);
    assert!(m.is_open());
    assert!(m.on_key(ms(600), ESCAPE_KEY).is_some());
    assert!(!m.is_open());
}

#[test]
fn backdrop_requires_direct_hit() {
    let mut m = controller();
    m.open(ms(0), 0.0);
    assert_eq!(m.on_backdrop(ms(600), false), None);
    assert!(m.is_open());
    assert!(m.on_backdrop(ms(600), true).is_some());
    assert!(!m.is_open());
}

#[test]
fn link_click_closes() {
    let mut m = controller();
    m.open(ms(0), 42.0);
    assert_eq!(
        m.on_link_click(ms(500)),
        Some(MenuTransition::Closed { restore_scroll_y: 42.0 })
    );
}

#[test]
fn lock_uses_injected_cooldown() {
    let mut lock = TransitionLock::new(ms(10));
    assert!(lock.try_acquire(ms(0)));
    assert!(!lock.try_acquire(ms(9)));
    assert!(lock.try_acquire(ms(10)));
}

#[test]
fn scroll_lock_top_is_negative_offset() {
    assert_eq!(scroll_lock_top(300.0), "-300px");
    assert_eq!(scroll_lock_top(0.0), "0px");
}

#[test]
fn scroll_lock_top_handles_overscroll() {
    // iOS rubber-banding can report a negative offset at the top of the page.
    assert_eq!(scroll_lock_top(-10.0), "10px");
}
