use instant::Instant;
use std::time::Duration;

/// Monotonic time since the page behaviors were initialized.
#[derive(Clone, Copy, Debug)]
pub struct PageClock {
    origin: Instant,
}

impl PageClock {
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    #[inline]
    pub fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}
