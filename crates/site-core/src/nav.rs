/// Whether the nav bar should carry the scrolled marker at `offset`.
#[inline]
pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
    Still,
}

/// Remembers the previous scroll offset between scroll events.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollTracker {
    last: f64,
}

impl ScrollTracker {
    pub fn update(&mut self, offset: f64) -> ScrollDirection {
        let dir = if offset > self.last {
            ScrollDirection::Down
        } else if offset < self.last {
            ScrollDirection::Up
        } else {
            ScrollDirection::Still
        };
        self.last = offset;
        dir
    }
}
