//! Mobile menu state machine.
//!
//! The menu is either closed or open; while open it remembers the scroll
//! offset it was opened at so closing can put the page back. Every accepted
//! transition starts a cooldown during which further requests are dropped,
//! which keeps a double click (or click + key) from racing the CSS transition.
//!
//! Time is passed in as a `Duration` since some fixed origin (the web layer
//! uses page start), so the cooldown can be driven deterministically.

use std::time::Duration;

use crate::constants::ESCAPE_KEY;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open {
        saved_scroll_y: f64,
    },
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open { .. })
    }
}

/// What the DOM side has to do after an accepted transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MenuTransition {
    Opened { saved_scroll_y: f64 },
    Closed { restore_scroll_y: f64 },
}

/// Cooldown window started by each accepted transition.
#[derive(Clone, Copy, Debug)]
pub struct TransitionLock {
    cooldown: Duration,
    busy_until: Option<Duration>,
}

impl TransitionLock {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            busy_until: None,
        }
    }

    pub fn is_busy(&self, now: Duration) -> bool {
        self.busy_until.is_some_and(|until| now < until)
    }

    /// Take the lock if it is free, starting a new cooldown at `now`.
    pub fn try_acquire(&mut self, now: Duration) -> bool {
        if self.is_busy(now) {
            return false;
        }
        self.busy_until = Some(now + self.cooldown);
        true
    }
}

#[derive(Clone, Copy, Debug)]
pub struct MenuController {
    state: MenuState,
    lock: TransitionLock,
}

impl MenuController {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            state: MenuState::Closed,
            lock: TransitionLock::new(cooldown),
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn is_busy(&self, now: Duration) -> bool {
        self.lock.is_busy(now)
    }

    pub fn open(&mut self, now: Duration, scroll_y: f64) -> Option<MenuTransition> {
        if self.state.is_open() || !self.lock.try_acquire(now) {
            return None;
        }
        self.state = MenuState::Open {
            saved_scroll_y: scroll_y,
        };
        log::debug!("[menu] open, saved scroll {}", scroll_y);
        Some(MenuTransition::Opened {
            saved_scroll_y: scroll_y,
        })
    }

    pub fn close(&mut self, now: Duration) -> Option<MenuTransition> {
        let MenuState::Open { saved_scroll_y } = self.state else {
            return None;
        };
        if !self.lock.try_acquire(now) {
            return None;
        }
        self.state = MenuState::Closed;
        log::debug!("[menu] close, restoring scroll {}", saved_scroll_y);
        Some(MenuTransition::Closed {
            restore_scroll_y: saved_scroll_y,
        })
    }

    /// Hamburger click.
    pub fn toggle(&mut self, now: Duration, scroll_y: f64) -> Option<MenuTransition> {
        if self.state.is_open() {
            self.close(now)
        } else {
            self.open(now, scroll_y)
        }
    }

    /// Click on any link inside the menu.
    pub fn on_link_click(&mut self, now: Duration) -> Option<MenuTransition> {
        self.close(now)
    }

    pub fn on_key(&mut self, now: Duration, key: &str) -> Option<MenuTransition> {
        if key != ESCAPE_KEY {
            return None;
        }
        self.close(now)
    }

    /// Pointer down on the overlay. Only hits on the backdrop itself count;
    /// events bubbling up from menu content are ignored.
    pub fn on_backdrop(&mut self, now: Duration, target_is_backdrop: bool) -> Option<MenuTransition> {
        if !target_is_backdrop {
            return None;
        }
        self.close(now)
    }
}

/// Inline `top` for the body while the page is scroll-locked.
#[inline]
pub fn scroll_lock_top(saved_scroll_y: f64) -> String {
    // `0.0 - y` rather than `-y` so a zero offset prints as `0px`, not `-0px`.
    format!("{}px", 0.0 - saved_scroll_y)
}
